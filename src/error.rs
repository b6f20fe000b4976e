//! エラー型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    #[error("無効なプリセット: {0} (1〜5 を指定してください)")]
    InvalidPreset(u8),

    #[error("無効なキャンバスサイズ: {width}x{height}")]
    InvalidCanvas { width: usize, height: usize },

    #[error("表示範囲の最小値が最大値を下回っていません")]
    InvalidWindow,

    #[error("ズーム倍率は正の有限値である必要があります: {0}")]
    InvalidScale(f64),

    #[error("画像の保存に失敗しました: {0}")]
    Image(#[from] image::ImageError),

    #[error("ウィンドウの操作に失敗しました: {0}")]
    Window(#[from] minifb::Error),
}
