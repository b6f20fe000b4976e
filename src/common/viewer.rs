//! ビューアの状態
//!
//! 表示範囲（[`ViewWindow`]）と描画設定（[`RenderSettings`]）を一か所で持ち、
//! ズーム・パン・プリセット切替のたびに再描画が必要であることを記録する。
//! 実際の描画は呼び出し側が [`ViewerState::redraw`] で同期的に行う。

use log::debug;

use super::colors::{ColorMapper, LightnessDirection};
use super::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_PRESET, ROOT_MATCH_DISTANCE, ZOOM_MULTIPLIER,
};
use super::newton::{nearest_root, solve};
use super::presets::{preset, Preset, RenderSettings};
use super::render::{render, Raster, Surface};
use super::viewport::{CanvasSize, ViewWindow};
use crate::FractalError;

/// 起動時の設定
#[derive(Clone, Copy, Debug)]
pub struct ViewerConfig {
    pub canvas: CanvasSize,
    pub zoom_multiplier: f64,
    pub preset: u8,
    pub lightness: LightnessDirection,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            },
            zoom_multiplier: ZOOM_MULTIPLIER,
            preset: DEFAULT_PRESET,
            lightness: LightnessDirection::default(),
        }
    }
}

pub struct ViewerState {
    canvas: CanvasSize,
    initial_window: ViewWindow,
    window: ViewWindow,
    preset: &'static Preset,
    mapper: ColorMapper,
    needs_redraw: bool,
    save_counter: u32,
}

impl ViewerState {
    pub fn new(config: &ViewerConfig) -> Result<Self, FractalError> {
        let canvas = CanvasSize::new(config.canvas.width, config.canvas.height)?;
        let window = ViewWindow::initial(canvas, config.zoom_multiplier)?;
        Ok(Self {
            canvas,
            initial_window: window,
            window,
            preset: preset(config.preset)?,
            mapper: ColorMapper::new(config.lightness),
            needs_redraw: true,
            save_counter: 0,
        })
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.preset.settings
    }

    pub fn preset(&self) -> &'static Preset {
        self.preset
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// 初期表示からの拡大率
    pub fn current_zoom(&self) -> f64 {
        self.initial_window.width() / self.window.width()
    }

    /// 画面中心から出発したときに収束する根の番号（収束しなければ `None`）
    pub fn center_root(&self) -> Option<usize> {
        let settings = &self.preset.settings;
        let result = solve(self.window.center(), settings.max_iter, settings.tolerance);
        if !result.converged(settings.max_iter) {
            return None;
        }
        nearest_root(result.final_point, ROOT_MATCH_DISTANCE)
    }

    /// 初期表示に戻す（プリセットはそのまま）
    pub fn reset(&mut self) {
        self.window = self.initial_window;
        self.needs_redraw = true;
    }

    pub fn zoom_in(&mut self) {
        self.window.zoom_in();
        self.needs_redraw = true;
    }

    pub fn zoom_out(&mut self) {
        self.window.zoom_out();
        self.needs_redraw = true;
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.window.pan(dx, dy, self.canvas);
        self.needs_redraw = true;
    }

    /// クリック位置を画面中心に移動
    pub fn recenter_at_pixel(&mut self, x: f64, y: f64) {
        if x < 0.0 || y < 0.0 || x >= self.canvas.width as f64 || y >= self.canvas.height as f64 {
            return;
        }
        let center = self.window.pixel_to_complex(x, y, self.canvas);
        self.window.recenter(center);
        self.needs_redraw = true;
    }

    /// プリセットを切り替える。無効な番号なら何も変えずにエラーを返す
    pub fn select_preset(&mut self, id: u8) -> Result<(), FractalError> {
        self.preset = preset(id)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// 現在の表示範囲と設定でラスタを計算
    pub fn render(&self) -> Raster {
        render(&self.window, &self.preset.settings, self.canvas, &self.mapper)
    }

    /// ラスタを計算し、`surface` に拡大して描き込む
    pub fn redraw(&mut self, surface: &mut impl Surface) {
        let raster = self.render();
        debug!(
            "raster {}x{} (scale {}, max_iter {}, tol {:e}), degenerate {}",
            raster.width,
            raster.height,
            self.preset.settings.scale_factor,
            self.preset.settings.max_iter,
            self.preset.settings.tolerance,
            raster.degenerate
        );
        surface.paint(&raster, self.preset.settings.scale_factor);
        self.needs_redraw = false;
    }

    /// 保存用の連番ファイル名
    pub fn next_snapshot_name(&mut self) -> String {
        self.save_counter += 1;
        format!("newton_{:03}.png", self.save_counter)
    }
}
