pub mod colors;
pub mod constants;
pub mod export;
pub mod newton;
pub mod presets;
pub mod render;
pub mod viewer;
pub mod viewport;
