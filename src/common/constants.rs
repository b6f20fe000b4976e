//! 共通定数

/// 描画領域の幅（既定値）
pub const CANVAS_WIDTH: usize = 800;
/// 描画領域の高さ（既定値）
pub const CANVAS_HEIGHT: usize = 600;

/// 起動時のズーム倍率（短辺が 2 × この値の範囲を映す）
pub const ZOOM_MULTIPLIER: f64 = 100.0;

/// 起動時のプリセット番号
pub const DEFAULT_PRESET: u8 = 3;

/// ズームアウト倍率
pub const ZOOM_FACTOR_OUT: f64 = 1.25;

/// ズームイン倍率
pub const ZOOM_FACTOR_IN: f64 = 0.8;

/// 1回のパン操作で移動するピクセル数
pub const PAN_STEPS: f64 = 50.0;

/// 収束しなかった点の色
pub const NO_CONVERGENCE_COLOR: u32 = 0x000000;

/// 収束点をどの根とみなすかの距離
pub const ROOT_MATCH_DISTANCE: f64 = 1e-3;
