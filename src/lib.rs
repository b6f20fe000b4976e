//! z³ + 1 のニュートン・フラクタル
//!
//! 複素平面上の各点からニュートン法で z³ + 1 = 0 の根を探し、
//! どの根に収束したか（偏角）と何回で収束したか（反復回数）から色を決める。
//!
//! - [`common::newton`]: 1点ごとのニュートン反復
//! - [`common::colors`]: 収束結果から色への変換
//! - [`common::viewport`]: ピクセル座標と複素平面の対応、パン・ズーム
//! - [`common::render`]: 低解像度ラスタの計算と最近傍拡大
//! - [`common::viewer`]: 表示範囲と描画設定を保持するビューアの状態

pub mod common;
pub mod error;

pub use error::FractalError;
