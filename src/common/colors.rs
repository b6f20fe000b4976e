//! 収束結果から色への変換

use std::f64::consts::PI;

use super::constants::NO_CONVERGENCE_COLOR;
use super::newton::ConvergenceResult;

/// 反復回数から明度を決めるときの向き
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightnessDirection {
    /// 反復回数が少ないほど暗い（既定）
    #[default]
    Ascending,
    /// 反復回数が少ないほど明るい
    Descending,
}

/// 収束結果を色（u32形式: 0xRRGGBB）に変換する
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorMapper {
    pub lightness: LightnessDirection,
}

impl ColorMapper {
    pub fn new(lightness: LightnessDirection) -> Self {
        Self { lightness }
    }

    /// 色相は収束先の偏角、明度は反復回数の対数で決める
    ///
    /// 収束しなかった点と、計算結果が有限でない点は黒。
    pub fn color(&self, result: &ConvergenceResult, max_iter: u32) -> u32 {
        if result.iterations >= max_iter {
            return NO_CONVERGENCE_COLOR;
        }

        let angle = result.final_point.im.atan2(result.final_point.re);
        let hue = map_value(angle, -PI, PI, 0.0, 360.0);
        let mut lightness = map_value(
            ((result.iterations + 1) as f64).ln(),
            0.0,
            (max_iter as f64 + 1.0).ln(),
            0.0,
            100.0,
        );
        if self.lightness == LightnessDirection::Descending {
            lightness = 100.0 - lightness;
        }

        if !hue.is_finite() || !lightness.is_finite() {
            return NO_CONVERGENCE_COLOR;
        }
        hsl_to_color_u32(hue, 100.0, lightness)
    }
}

/// 既定の配色で収束結果を色に変換
pub fn convergence_to_color_u32(result: &ConvergenceResult, max_iter: u32) -> u32 {
    ColorMapper::default().color(result, max_iter)
}

/// `value` を `[start1, stop1]` から `[start2, stop2]` へ線形に写す
fn map_value(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// HSL（色相: 度, 彩度・明度: %）を 0xRRGGBB に変換
pub fn hsl_to_color_u32(hue: f64, saturation: f64, lightness: f64) -> u32 {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u32;

    (to_u8(r1) << 16) | (to_u8(g1) << 8) | to_u8(b1)
}
