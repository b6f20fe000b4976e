//! ピクセル座標と複素平面の対応付け

use num_complex::Complex;

use super::constants::{PAN_STEPS, ZOOM_FACTOR_IN, ZOOM_FACTOR_OUT};
use crate::FractalError;

/// 描画領域のピクセルサイズ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: usize,
    pub height: usize,
}

impl CanvasSize {
    /// 各辺は 1 以上 `u32::MAX` 以下で、総ピクセル数が `usize` に収まること
    pub fn new(width: usize, height: usize) -> Result<Self, FractalError> {
        let invalid = FractalError::InvalidCanvas { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return Err(invalid);
        }
        if width.checked_mul(height).is_none() {
            return Err(invalid);
        }
        Ok(Self { width, height })
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// 描画領域に映す複素平面上の長方形
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl ViewWindow {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, FractalError> {
        // NaN もここで弾かれる
        if !(real_max > real_min && imag_max > imag_min) {
            return Err(FractalError::InvalidWindow);
        }
        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// 原点を中心に、短辺がちょうど `2 × zoom_multiplier` を映す初期範囲
    ///
    /// 長辺は縦横比に合わせて広げるので、1ピクセルあたりの幅は縦横で等しい。
    pub fn initial(canvas: CanvasSize, zoom_multiplier: f64) -> Result<Self, FractalError> {
        if !(zoom_multiplier.is_finite() && zoom_multiplier > 0.0) {
            return Err(FractalError::InvalidScale(zoom_multiplier));
        }
        let short = canvas.width.min(canvas.height) as f64;
        let half_width = zoom_multiplier * canvas.width as f64 / short;
        let half_height = zoom_multiplier * canvas.height as f64 / short;
        Self::new(-half_width, half_width, -half_height, half_height)
    }

    pub fn width(&self) -> f64 {
        self.real_max - self.real_min
    }

    pub fn height(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    pub fn center(&self) -> Complex<f64> {
        Complex::new(
            (self.real_min + self.real_max) / 2.0,
            (self.imag_min + self.imag_max) / 2.0,
        )
    }

    /// 表示ピクセル1つあたりの実軸方向の幅
    pub fn real_step(&self, canvas: CanvasSize) -> f64 {
        self.width() / canvas.width as f64
    }

    /// 表示ピクセル1つあたりの虚軸方向の幅
    pub fn imag_step(&self, canvas: CanvasSize) -> f64 {
        self.height() / canvas.height as f64
    }

    /// 画面上のピクセル座標を複素平面上の座標に変換（y=0 が虚部の最大値）
    pub fn pixel_to_complex(&self, x: f64, y: f64, canvas: CanvasSize) -> Complex<f64> {
        Complex::new(
            self.real_min + x * self.real_step(canvas),
            self.imag_max - y * self.imag_step(canvas),
        )
    }

    /// 指定された中心座標と倍率で範囲を更新
    fn update_bounds(&mut self, center: Complex<f64>, scale: f64) {
        let half_new_width = self.width() * scale / 2.0;
        let half_new_height = self.height() * scale / 2.0;

        self.real_min = center.re - half_new_width;
        self.real_max = center.re + half_new_width;
        self.imag_min = center.im - half_new_height;
        self.imag_max = center.im + half_new_height;
    }

    /// 中心を保ったまま幅と高さを `factor` 倍にする
    pub fn zoom(&mut self, factor: f64) {
        self.update_bounds(self.center(), factor);
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_FACTOR_IN);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(ZOOM_FACTOR_OUT);
    }

    /// `dx`, `dy` 回分（1回 = [`PAN_STEPS`] ピクセル）だけ表示範囲を動かす
    ///
    /// dx が正なら左、dy が正なら上の領域が見えるようになる。
    pub fn pan(&mut self, dx: f64, dy: f64, canvas: CanvasSize) {
        let move_real = dx * PAN_STEPS * self.real_step(canvas);
        let move_imag = dy * PAN_STEPS * self.imag_step(canvas);

        self.real_min -= move_real;
        self.real_max -= move_real;
        self.imag_min += move_imag;
        self.imag_max += move_imag;
    }

    /// 大きさを変えずに `center` を中心にする
    pub fn recenter(&mut self, center: Complex<f64>) {
        self.update_bounds(center, 1.0);
    }
}
