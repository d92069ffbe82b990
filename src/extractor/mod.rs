//! レシピ抽出モジュール
//!
//! メタデータのタグを正規化してレシピを組み立てる。
//!
//! ## 処理フロー
//! 1. MetadataSource からタグを取得し、タグごとに正規化
//! 2. 明瞭度・粒状サイズが無ければ MakerNoteSource から補完
//!
//! どこかで正規化に失敗したら途中結果は返さずエラーにする。

pub mod tags;

pub use tags::{KnownTag, IGNORED_TAG};

use crate::error::Result;
use crate::normalizer::{self, RawValue, Saturation};
use crate::scanner::{MakerNoteSource, MakerNoteTags, MetadataSource, TagMap};
use filmdetect_common::Recipe;
use std::path::Path;

/// DevelopmentDynamicRangeが無い場合（オート）の値
pub const DYNAMIC_RANGE_AUTO: &str = "Auto";

/// 主ソース（exiftool）から組み立てた結果
#[derive(Debug, Clone)]
pub struct PrimaryRecipe {
    pub recipe: Recipe,
    pub has_clarity: bool,
    pub has_grain_effect_size: bool,
}

impl PrimaryRecipe {
    fn needs_maker_note(&self) -> bool {
        !self.has_clarity || !self.has_grain_effect_size
    }
}

/// タグマップからレシピを組み立てる
pub fn recipe_from_tags(tags: &TagMap) -> Result<PrimaryRecipe> {
    let mut recipe = Recipe {
        dynamic_range: DYNAMIC_RANGE_AUTO.to_string(),
        ..Default::default()
    };
    let mut has_clarity = false;
    let mut has_grain_effect_size = false;
    let mut monochrome: Option<String> = None;
    let mut d_range_mode: Option<String> = None;
    let mut d_range_auto: Option<String> = None;
    let mut d_range_fixed: Option<String> = None;

    for (name, value) in tags {
        if name == IGNORED_TAG {
            continue;
        }

        let raw = RawValue::from_json(name, value)?;

        let Some(tag) = KnownTag::from_name(name) else {
            continue;
        };

        tracing::trace!(tag = %name, value = ?raw, "タグを正規化");

        match tag {
            KnownTag::FilmMode => recipe.film_simulation = normalizer::passthrough(raw),
            KnownTag::GrainEffectRoughness => {
                recipe.grain_effect_roughness = normalizer::passthrough(raw)
            }
            KnownTag::GrainEffectSize => {
                recipe.grain_effect_size = normalizer::passthrough(raw);
                has_grain_effect_size = true;
            }
            KnownTag::ColorChromeEffect => recipe.color_chrome_effect = normalizer::passthrough(raw),
            KnownTag::ColorChromeFxBlue => recipe.color_chrome_fx_blue = normalizer::passthrough(raw),
            KnownTag::WhiteBalance => recipe.white_balance_mode = normalizer::passthrough(raw),
            KnownTag::WhiteBalanceFineTune => {
                let shift = normalizer::parse_fine_tune(&raw.text())?;
                recipe.white_balance_red = shift.red;
                recipe.white_balance_blue = shift.blue;
            }
            KnownTag::DevelopmentDynamicRange => {
                recipe.dynamic_range = normalizer::format_dynamic_range(raw)?
            }
            KnownTag::DRangePriority => d_range_mode = Some(normalizer::passthrough(raw)),
            KnownTag::DRangePriorityAuto => d_range_auto = Some(normalizer::passthrough(raw)),
            KnownTag::DRangePriorityFixed => d_range_fixed = Some(normalizer::passthrough(raw)),
            KnownTag::HighlightTone => recipe.highlights = normalizer::parse_tone(name, &raw.text())?,
            KnownTag::ShadowTone => recipe.shadows = normalizer::parse_tone(name, &raw.text())?,
            KnownTag::Saturation => match normalizer::parse_saturation(&raw.text())? {
                Saturation::Level(level) => recipe.color = level,
                Saturation::Monochrome(film) => {
                    recipe.color = 0;
                    monochrome = Some(film);
                }
            },
            KnownTag::Sharpness => recipe.sharpness = normalizer::parse_sharpness(&raw.text())?,
            KnownTag::NoiseReduction => {
                recipe.noise_reduction = normalizer::parse_tone(name, &raw.text())?
            }
            KnownTag::Clarity => {
                recipe.clarity = normalizer::parse_tone(name, &raw.text())?;
                has_clarity = true;
            }
        }
    }

    recipe.d_range_priority = normalizer::combine_d_range_priority(
        d_range_mode.as_deref(),
        d_range_auto.as_deref(),
        d_range_fixed.as_deref(),
    )?;

    // Acros系はFilmModeより優先
    if let Some(film) = monochrome {
        recipe.film_simulation = film;
    }

    Ok(PrimaryRecipe {
        recipe,
        has_clarity,
        has_grain_effect_size,
    })
}

/// MakerNoteの値で欠けているフィールドを補完する
pub fn apply_maker_note(primary: &mut PrimaryRecipe, note: &MakerNoteTags) -> Result<()> {
    if !primary.has_clarity {
        if let Some(raw) = note.clarity {
            primary.recipe.clarity = normalizer::clarity_from_raw(raw)?;
            primary.has_clarity = true;
        }
    }

    if !primary.has_grain_effect_size {
        if let Some(code) = note.grain_effect_size {
            primary.recipe.grain_effect_size =
                normalizer::grain_effect_size_from_code(code)?.to_string();
            primary.has_grain_effect_size = true;
        }
    }

    Ok(())
}

/// 写真からレシピを抽出する
pub struct RecipeExtractor {
    source: Box<dyn MetadataSource>,
    maker_notes: Option<Box<dyn MakerNoteSource>>,
}

impl RecipeExtractor {
    pub fn new(source: Box<dyn MetadataSource>) -> Self {
        Self {
            source,
            maker_notes: None,
        }
    }

    pub fn with_maker_notes(mut self, maker_notes: Box<dyn MakerNoteSource>) -> Self {
        self.maker_notes = Some(maker_notes);
        self
    }

    pub fn extract(&self, path: &Path) -> Result<Recipe> {
        let tags = self.source.read_tags(path)?;
        tracing::debug!(file = %path.display(), count = tags.len(), "タグ取得");

        let mut primary = recipe_from_tags(&tags)?;

        if primary.needs_maker_note() {
            if let Some(maker_notes) = &self.maker_notes {
                if let Some(note) = maker_notes.read_maker_note(path)? {
                    tracing::debug!(?note, "MakerNoteから補完");
                    apply_maker_note(&mut primary, &note)?;
                }
            }
        }

        tracing::info!(
            file = %path.display(),
            film_simulation = %primary.recipe.film_simulation,
            "レシピを抽出"
        );
        Ok(primary.recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilmDetectError;
    use serde_json::json;

    fn tag_map(value: serde_json::Value) -> TagMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_recipe_from_tags() {
        let tags = tag_map(json!({
            "SourceFile": "DSCF0001.JPG",
            "FilmMode": "Classic Chrome",
            "GrainEffectRoughness": "Weak",
            "GrainEffectSize": "Small",
            "ColorChromeEffect": "Strong",
            "ColorChromeFXBlue": "Off",
            "WhiteBalance": "Auto",
            "WhiteBalanceFineTune": "Red +40, Blue -80",
            "DevelopmentDynamicRange": 400,
            "HighlightTone": "-1 (medium soft)",
            "ShadowTone": "+1 (medium hard)",
            "Saturation": "+2 (high)",
            "Sharpness": "Soft",
            "NoiseReduction": "-4 (weakest)",
            "Clarity": "-2"
        }));

        let primary = recipe_from_tags(&tags).unwrap();
        let r = &primary.recipe;
        assert_eq!(r.film_simulation, "Classic Chrome");
        assert_eq!(r.grain_effect_roughness, "Weak");
        assert_eq!(r.grain_effect_size, "Small");
        assert_eq!(r.color_chrome_effect, "Strong");
        assert_eq!(r.color_chrome_fx_blue, "Off");
        assert_eq!(r.white_balance_mode, "Auto");
        assert_eq!((r.white_balance_red, r.white_balance_blue), (2, -4));
        assert_eq!(r.dynamic_range, "400");
        assert_eq!(r.d_range_priority, "Off");
        assert_eq!(r.highlights, -1);
        assert_eq!(r.shadows, 1);
        assert_eq!(r.color, 2);
        assert_eq!(r.sharpness, -2);
        assert_eq!(r.noise_reduction, -4);
        assert_eq!(r.clarity, -2);
        assert!(primary.has_clarity);
        assert!(primary.has_grain_effect_size);
    }

    #[test]
    fn test_defaults_when_tags_absent() {
        let primary = recipe_from_tags(&TagMap::new()).unwrap();
        assert_eq!(primary.recipe.dynamic_range, DYNAMIC_RANGE_AUTO);
        assert_eq!(primary.recipe.d_range_priority, "Off");
        assert!(primary.needs_maker_note());
    }

    #[test]
    fn test_subject_is_ignored() {
        let tags = tag_map(json!({ "Subject": ["street", "tokyo"], "FilmMode": "Velvia" }));
        let primary = recipe_from_tags(&tags).unwrap();
        assert_eq!(primary.recipe.film_simulation, "Velvia");
    }

    #[test]
    fn test_non_scalar_value_is_type_mismatch() {
        let tags = tag_map(json!({ "Keywords": ["a", "b"] }));
        let err = recipe_from_tags(&tags).unwrap_err();
        assert!(matches!(err, FilmDetectError::TypeMismatch { .. }));
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let tags = tag_map(json!({ "ISO": 400, "LensModel": "XF23mmF2 R WR" }));
        assert!(recipe_from_tags(&tags).is_ok());
    }

    #[test]
    fn test_acros_overrides_film_mode() {
        let tags = tag_map(json!({
            "FilmMode": "Classic Chrome",
            "Saturation": "Acros Yellow Filter"
        }));
        let primary = recipe_from_tags(&tags).unwrap();
        assert_eq!(primary.recipe.film_simulation, "Acros Yellow Filter");
        assert_eq!(primary.recipe.color, 0);
    }

    #[test]
    fn test_numeric_tone_value() {
        let tags = tag_map(json!({ "HighlightTone": 2, "Clarity": 0 }));
        let primary = recipe_from_tags(&tags).unwrap();
        assert_eq!(primary.recipe.highlights, 2);
        assert_eq!(primary.recipe.clarity, 0);
    }

    #[test]
    fn test_normalizer_failure_aborts() {
        let tags = tag_map(json!({ "FilmMode": "Velvia", "Sharpness": "Hardest!" }));
        let err = recipe_from_tags(&tags).unwrap_err();
        match err {
            FilmDetectError::UnrecognizedEnum { field, value } => {
                assert_eq!(field, "Sharpness");
                assert_eq!(value, "Hardest!");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_d_range_priority_combinations() {
        let cases = [
            (json!({ "FilmMode": "Provia" }), "Off"),
            (json!({ "DRangePriority": "Auto" }), "Auto"),
            (json!({ "DRangePriority": "Auto", "DRangePriorityAuto": "Strong" }), "Auto"),
            (json!({ "DRangePriority": "Fixed", "DRangePriorityFixed": "Weak" }), "Weak"),
            (json!({ "DRangePriority": "Fixed", "DRangePriorityFixed": "Strong" }), "Strong"),
        ];
        for (value, expected) in cases {
            let primary = recipe_from_tags(&tag_map(value.clone())).unwrap();
            assert_eq!(primary.recipe.d_range_priority, expected, "{}", value);
        }
    }

    #[test]
    fn test_d_range_priority_fixed_without_strength() {
        let tags = tag_map(json!({ "DRangePriority": "Fixed" }));
        let err = recipe_from_tags(&tags).unwrap_err();
        assert!(matches!(err, FilmDetectError::MalformedValue { ref field, .. } if field == "DRangePriorityFixed"));
    }

    #[test]
    fn test_apply_maker_note_fills_missing_fields() {
        let mut primary = recipe_from_tags(&TagMap::new()).unwrap();
        let note = MakerNoteTags {
            clarity: Some(3000),
            grain_effect_size: Some(32),
        };
        apply_maker_note(&mut primary, &note).unwrap();
        assert_eq!(primary.recipe.clarity, 3);
        assert_eq!(primary.recipe.grain_effect_size, "Large");
    }

    #[test]
    fn test_apply_maker_note_keeps_primary_values() {
        let tags = tag_map(json!({ "Clarity": "+1", "GrainEffectSize": "Small" }));
        let mut primary = recipe_from_tags(&tags).unwrap();
        let note = MakerNoteTags {
            clarity: Some(-5000),
            grain_effect_size: Some(32),
        };
        apply_maker_note(&mut primary, &note).unwrap();
        assert_eq!(primary.recipe.clarity, 1);
        assert_eq!(primary.recipe.grain_effect_size, "Small");
    }

    #[test]
    fn test_apply_maker_note_unknown_grain_code() {
        let mut primary = recipe_from_tags(&TagMap::new()).unwrap();
        let note = MakerNoteTags {
            clarity: None,
            grain_effect_size: Some(48),
        };
        assert!(apply_maker_note(&mut primary, &note).is_err());
    }
}
