//! 表示中の画像をファイルに保存（形式は拡張子で決まる）

use std::path::Path;

use image::{ImageBuffer, Rgb};

use super::render::FrameBuffer;
use crate::FractalError;

pub fn save_image(frame: &FrameBuffer, path: impl AsRef<Path>) -> Result<(), FractalError> {
    let invalid = || FractalError::InvalidCanvas {
        width: frame.width,
        height: frame.height,
    };
    let width = u32::try_from(frame.width).map_err(|_| invalid())?;
    let height = u32::try_from(frame.height).map_err(|_| invalid())?;

    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |x, y| {
            let pixel = frame.get(x as usize, y as usize);
            let r = ((pixel >> 16) & 0xFF) as u8;
            let g = ((pixel >> 8) & 0xFF) as u8;
            let b = (pixel & 0xFF) as u8;
            Rgb([r, g, b])
        });

    img.save(path)?;
    Ok(())
}
