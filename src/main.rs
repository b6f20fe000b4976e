//! z³ + 1 ニュートン・フラクタル インタラクティブビューア
//!
//! 各点からニュートン法で根を探し、収束した根（偏角）で色相、
//! 収束までの反復回数で明度を決めて描画する。
//!
//! 操作方法:
//!   - + / - キー、マウスホイール: 拡大/縮小
//!   - 矢印キー: 移動（パン）
//!   - 左クリック: クリック位置を中心に移動
//!   - 1〜5 キー: 描画品質プリセットの切替（1: 粗い・速い 〜 5: 全画素）
//!   - R キー: 初期表示にリセット
//!   - S キー: 現在の表示を画像として保存
//!   - Q / Escape キー: 終了
//!
//! `--output <FILE>` を指定するとウィンドウを開かずに1枚だけ描画して保存する。

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use newton_fractal::common::{
    colors::LightnessDirection,
    constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_PRESET, ZOOM_MULTIPLIER},
    export::save_image,
    render::FrameBuffer,
    viewer::{ViewerConfig, ViewerState},
    viewport::CanvasSize,
};
use newton_fractal::FractalError;

/// z^3 + 1 のニュートン・フラクタルビューア
#[derive(Parser, Debug)]
#[command(name = "newton-fractal", version, about)]
struct Args {
    /// 描画領域の幅（ピクセル）
    #[arg(long, default_value_t = CANVAS_WIDTH)]
    width: usize,

    /// 描画領域の高さ（ピクセル）
    #[arg(long, default_value_t = CANVAS_HEIGHT)]
    height: usize,

    /// 起動時の品質プリセット（1〜5）
    #[arg(short, long, default_value_t = DEFAULT_PRESET)]
    preset: u8,

    /// 初期表示で短辺が映す範囲の半分
    #[arg(short, long, default_value_t = ZOOM_MULTIPLIER)]
    zoom: f64,

    /// 反復回数が少ない点ほど明るく描く
    #[arg(long)]
    invert_lightness: bool,

    /// ウィンドウを開かずにこのファイルへ1枚だけ保存する
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            canvas: CanvasSize {
                width: self.width,
                height: self.height,
            },
            zoom_multiplier: self.zoom,
            preset: self.preset,
            lightness: if self.invert_lightness {
                LightnessDirection::Descending
            } else {
                LightnessDirection::Ascending
            },
        }
    }
}

/// プリセット切替に使う数字キー
const PRESET_KEYS: [(Key, u8); 10] = [
    (Key::Key0, 0),
    (Key::Key1, 1),
    (Key::Key2, 2),
    (Key::Key3, 3),
    (Key::Key4, 4),
    (Key::Key5, 5),
    (Key::Key6, 6),
    (Key::Key7, 7),
    (Key::Key8, 8),
    (Key::Key9, 9),
];

/// 画面中心が収束する根の表示用ラベル
fn center_root_label(state: &ViewerState) -> String {
    match state.center_root() {
        Some(i) => format!("根{}", i),
        None => "収束せず".to_string(),
    }
}

fn redraw(state: &mut ViewerState, frame: &mut FrameBuffer) {
    let start = Instant::now();
    state.redraw(frame);

    let preset = state.preset();
    let center = state.window().center();
    info!(
        "再描画: {:.2?} | プリセット {} ({}) | 中心: ({:.6}, {:.6}i) → {} | ズーム: x{:.2e}",
        start.elapsed(),
        preset.id,
        preset.name,
        center.re,
        center.im,
        center_root_label(state),
        state.current_zoom()
    );
}

fn render_to_file(state: &mut ViewerState, path: &Path) -> Result<(), FractalError> {
    let mut frame = FrameBuffer::new(state.canvas());
    redraw(state, &mut frame);
    save_image(&frame, path)?;
    info!("画像を保存しました: {}", path.display());
    Ok(())
}

fn run_window(state: &mut ViewerState) -> Result<(), FractalError> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  ニュートン・フラクタル f(z) = z³ + 1                        ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  色相: 収束した根  /  明度: 収束までの反復回数               ║");
    println!("║  黒: 収束しなかった点                                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("操作方法:");
    println!("  - + / - キー、マウスホイール: 拡大/縮小");
    println!("  - 矢印キー: 移動（パン）");
    println!("  - 左クリック: クリック位置を中心に移動");
    println!("  - 1〜5 キー: 品質プリセットの切替");
    println!("  - R キー: 初期表示にリセット");
    println!("  - S キー: 現在の表示を画像として保存");
    println!("  - Q / Escape キー: 終了");
    println!();

    let canvas = state.canvas();
    let mut window = Window::new(
        "ニュートン・フラクタル z³ + 1",
        canvas.width,
        canvas.height,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(60);

    let mut frame = FrameBuffer::new(canvas);
    let mut prev_left_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            state.reset();
            info!("リセット");
        }

        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            let filename = state.next_snapshot_name();
            match save_image(&frame, &filename) {
                Ok(()) => info!("画像を保存しました: {}", filename),
                Err(e) => error!("{}", e),
            }
        }

        for (key, id) in PRESET_KEYS {
            if window.is_key_pressed(key, KeyRepeat::No) {
                match state.select_preset(id) {
                    Ok(()) => info!("プリセット切替: {} ({})", id, state.preset().name),
                    Err(e) => warn!("{}", e),
                }
            }
        }

        if window.is_key_pressed(Key::Equal, KeyRepeat::Yes)
            || window.is_key_pressed(Key::NumPadPlus, KeyRepeat::Yes)
        {
            state.zoom_in();
        }
        if window.is_key_pressed(Key::Minus, KeyRepeat::Yes)
            || window.is_key_pressed(Key::NumPadMinus, KeyRepeat::Yes)
        {
            state.zoom_out();
        }

        if window.is_key_pressed(Key::Left, KeyRepeat::Yes) {
            state.pan(1.0, 0.0);
        }
        if window.is_key_pressed(Key::Right, KeyRepeat::Yes) {
            state.pan(-1.0, 0.0);
        }
        if window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            state.pan(0.0, 1.0);
        }
        if window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            state.pan(0.0, -1.0);
        }

        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Discard) {
            // 回転があったフレームごとに1段ズーム
            if let Some((_, dy)) = window.get_scroll_wheel() {
                if dy > 0.0 {
                    state.zoom_in();
                } else if dy < 0.0 {
                    state.zoom_out();
                }
            }

            // 左クリックで中心を移動（押した瞬間のみ）
            let left_down = window.get_mouse_down(MouseButton::Left);
            if left_down && !prev_left_down {
                state.recenter_at_pixel(mx as f64, my as f64);
            }
            prev_left_down = left_down;
        }

        if state.needs_redraw() {
            redraw(state, &mut frame);
            let preset = state.preset();
            window.set_title(&format!(
                "ニュートン・フラクタル z³ + 1 [{}: {}] x{:.2e} 中心: {}",
                preset.id,
                preset.name,
                state.current_zoom(),
                center_root_label(state)
            ));
        }

        window.update_with_buffer(&frame.pixels, canvas.width, canvas.height)?;
    }

    info!("終了しました");
    Ok(())
}

fn main() -> Result<(), FractalError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut state = ViewerState::new(&args.viewer_config())?;

    match &args.output {
        Some(path) => render_to_file(&mut state, path),
        None => run_window(&mut state),
    }
}
