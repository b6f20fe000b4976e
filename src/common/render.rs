//! ラスタの計算と画面への転送

use super::colors::ColorMapper;
use super::newton::solve;
use super::presets::RenderSettings;
use super::viewport::{CanvasSize, ViewWindow};

/// 低解像度で計算した色の格子（u32形式: 0xRRGGBB）
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
    /// f'(z) が退化して止まったサンプルの数
    pub degenerate: usize,
}

impl Raster {
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// ラスタを受け取って表示する先
pub trait Surface {
    /// `raster` を `scale_factor` 倍に最近傍拡大して描き込む
    fn paint(&mut self, raster: &Raster, scale_factor: usize);
}

/// 描画領域と同じ大きさのピクセルバッファ
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            pixels: vec![0; canvas.len()],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

impl Surface for FrameBuffer {
    fn paint(&mut self, raster: &Raster, scale_factor: usize) {
        let scale_factor = scale_factor.max(1);
        self.pixels.fill(0);

        // ラスタで覆えない右端・下端は黒のまま
        let covered_width = (raster.width * scale_factor).min(self.width);
        let covered_height = (raster.height * scale_factor).min(self.height);

        for y in 0..covered_height {
            let row = &raster.pixels[(y / scale_factor) * raster.width..][..raster.width];
            let dest = &mut self.pixels[y * self.width..][..covered_width];
            for (x, pixel) in dest.iter_mut().enumerate() {
                *pixel = row[x / scale_factor];
            }
        }
    }
}

/// 表示範囲全体を `settings.scale_factor` ごとに1サンプルずつ計算する
///
/// サンプル (x, y) は表示ピクセル (x·scale, y·scale) の位置で評価するので、
/// どのプリセットでも同じ表示範囲が映る。毎回すべてを計算し直す。
pub fn render(
    window: &ViewWindow,
    settings: &RenderSettings,
    canvas: CanvasSize,
    mapper: &ColorMapper,
) -> Raster {
    let scale = settings.scale_factor.max(1);
    let width = canvas.width / scale;
    let height = canvas.height / scale;

    let mut pixels = Vec::with_capacity(width * height);
    let mut degenerate = 0;
    for y in 0..height {
        for x in 0..width {
            let c = window.pixel_to_complex((x * scale) as f64, (y * scale) as f64, canvas);
            let result = solve(c, settings.max_iter, settings.tolerance);
            if result.degenerate {
                degenerate += 1;
            }
            pixels.push(mapper.color(&result, settings.max_iter));
        }
    }

    Raster {
        width,
        height,
        pixels,
        degenerate,
    }
}
