//! 描画品質のプリセット

use crate::FractalError;

/// 1回の描画に使う設定
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// 表示ピクセルと計算サンプルの比（1なら全画素を計算）
    pub scale_factor: usize,
    /// 最大反復回数
    pub max_iter: u32,
    /// 収束判定のしきい値
    pub tolerance: f64,
}

/// 名前付きの描画設定
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub id: u8,
    pub name: &'static str,
    pub settings: RenderSettings,
}

/// プリセット表（番号 1〜5）
pub const PRESETS: [Preset; 5] = [
    Preset {
        id: 1,
        name: "探索",
        settings: RenderSettings {
            scale_factor: 5,
            max_iter: 100,
            tolerance: 1e-5,
        },
    },
    Preset {
        id: 2,
        name: "標準",
        settings: RenderSettings {
            scale_factor: 4,
            max_iter: 100,
            tolerance: 1e-5,
        },
    },
    Preset {
        id: 3,
        name: "高精細",
        settings: RenderSettings {
            scale_factor: 3,
            max_iter: 100,
            tolerance: 1e-6,
        },
    },
    Preset {
        id: 4,
        name: "超高精細",
        settings: RenderSettings {
            scale_factor: 2,
            max_iter: 150,
            tolerance: 1e-6,
        },
    },
    Preset {
        id: 5,
        name: "最高精細",
        settings: RenderSettings {
            scale_factor: 1,
            max_iter: 200,
            tolerance: 1e-7,
        },
    },
];

/// 番号からプリセットを引く
pub fn preset(id: u8) -> Result<&'static Preset, FractalError> {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or(FractalError::InvalidPreset(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_ids() {
        for (i, p) in PRESETS.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!(p.settings.scale_factor > 0);
            assert!(p.settings.max_iter > 0);
            assert!(p.settings.tolerance > 0.0);
        }
    }

    #[test]
    fn lookup_returns_exact_rows() {
        let expected = [
            (5, 100, 1e-5),
            (4, 100, 1e-5),
            (3, 100, 1e-6),
            (2, 150, 1e-6),
            (1, 200, 1e-7),
        ];
        for (id, (scale_factor, max_iter, tolerance)) in (1u8..=5).zip(expected) {
            let p = preset(id).unwrap();
            assert_eq!(
                p.settings,
                RenderSettings {
                    scale_factor,
                    max_iter,
                    tolerance
                }
            );
        }
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        for id in [0u8, 6, 42, u8::MAX] {
            match preset(id) {
                Err(FractalError::InvalidPreset(got)) => assert_eq!(got, id),
                other => panic!("expected InvalidPreset, got {:?}", other),
            }
        }
    }
}
