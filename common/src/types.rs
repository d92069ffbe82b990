//! レシピの型定義
//!
//! - Recipe: 写真から抽出したレシピ／ライブラリから読み込んだレシピの共通形
//! - RecipeField: 採点対象フィールド（宣言順が比較・表示の順序になる）
//! - FieldValue: フィールド値の参照（文字列または整数）

use serde::{Deserialize, Serialize};
use std::fmt;

/// 採点対象フィールド数（スコアの分母）
pub const FULL_SCORE: usize = 16;

/// レシピ
///
/// name / author / url は識別用で、比較対象外。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,

    #[serde(default, alias = "Author")]
    pub author: String,

    #[serde(default, alias = "Url")]
    pub url: String,

    #[serde(default)]
    pub film_simulation: String,

    #[serde(default)]
    pub grain_effect_size: String,

    #[serde(default)]
    pub grain_effect_roughness: String,

    #[serde(default)]
    pub color_chrome_effect: String,

    #[serde(default)]
    pub color_chrome_fx_blue: String,

    #[serde(default)]
    pub white_balance_mode: String,

    #[serde(default, rename = "white_balance_r")]
    pub white_balance_red: i32,

    #[serde(default, rename = "white_balance_b")]
    pub white_balance_blue: i32,

    #[serde(default)]
    pub dynamic_range: String,

    /// "Off" / "Auto" / "Weak" / "Strong"。未対応機種・未指定は "Off"
    #[serde(default = "default_d_range_priority")]
    pub d_range_priority: String,

    #[serde(default, rename = "tone_curve_highlights")]
    pub highlights: i32,

    #[serde(default, rename = "tone_curve_shadows")]
    pub shadows: i32,

    #[serde(default, alias = "Color")]
    pub color: i32,

    /// -4 (Softest) 〜 +4 (Hardest)
    #[serde(default, alias = "Sharpness")]
    pub sharpness: i32,

    #[serde(default)]
    pub noise_reduction: i32,

    #[serde(default, alias = "Clarity")]
    pub clarity: i32,
}

pub const DEFAULT_D_RANGE_PRIORITY: &str = "Off";

fn default_d_range_priority() -> String {
    DEFAULT_D_RANGE_PRIORITY.to_string()
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            url: String::new(),
            film_simulation: String::new(),
            grain_effect_size: String::new(),
            grain_effect_roughness: String::new(),
            color_chrome_effect: String::new(),
            color_chrome_fx_blue: String::new(),
            white_balance_mode: String::new(),
            white_balance_red: 0,
            white_balance_blue: 0,
            dynamic_range: String::new(),
            d_range_priority: default_d_range_priority(),
            highlights: 0,
            shadows: 0,
            color: 0,
            sharpness: 0,
            noise_reduction: 0,
            clarity: 0,
        }
    }
}

/// 採点対象フィールド
///
/// 判別値は `SCORED_FIELDS` 内の位置と一致させること。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeField {
    FilmSimulation = 0,
    GrainEffectSize,
    GrainEffectRoughness,
    ColorChromeEffect,
    ColorChromeFxBlue,
    WhiteBalanceMode,
    WhiteBalanceRed,
    WhiteBalanceBlue,
    DynamicRange,
    DRangePriority,
    Highlights,
    Shadows,
    Color,
    Sharpness,
    NoiseReduction,
    Clarity,
}

/// 宣言順の採点対象フィールド一覧
pub const SCORED_FIELDS: [RecipeField; FULL_SCORE] = [
    RecipeField::FilmSimulation,
    RecipeField::GrainEffectSize,
    RecipeField::GrainEffectRoughness,
    RecipeField::ColorChromeEffect,
    RecipeField::ColorChromeFxBlue,
    RecipeField::WhiteBalanceMode,
    RecipeField::WhiteBalanceRed,
    RecipeField::WhiteBalanceBlue,
    RecipeField::DynamicRange,
    RecipeField::DRangePriority,
    RecipeField::Highlights,
    RecipeField::Shadows,
    RecipeField::Color,
    RecipeField::Sharpness,
    RecipeField::NoiseReduction,
    RecipeField::Clarity,
];

impl RecipeField {
    /// レポートに表示するフィールド名
    pub fn label(&self) -> &'static str {
        match self {
            RecipeField::FilmSimulation => "FilmSimulation",
            RecipeField::GrainEffectSize => "GrainEffectSize",
            RecipeField::GrainEffectRoughness => "GrainEffectRoughness",
            RecipeField::ColorChromeEffect => "ColorChromeEffect",
            RecipeField::ColorChromeFxBlue => "ColorChromeFXBlue",
            RecipeField::WhiteBalanceMode => "WhiteBalanceMode",
            RecipeField::WhiteBalanceRed => "WhiteBalanceRed",
            RecipeField::WhiteBalanceBlue => "WhiteBalanceBlue",
            RecipeField::DynamicRange => "DynamicRange",
            RecipeField::DRangePriority => "DRangePriority",
            RecipeField::Highlights => "Highlights",
            RecipeField::Shadows => "Shadows",
            RecipeField::Color => "Color",
            RecipeField::Sharpness => "Sharpness",
            RecipeField::NoiseReduction => "NoiseReduction",
            RecipeField::Clarity => "Clarity",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// フィールド値（比較は完全一致のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i32),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(n) => write!(f, "{}", n),
        }
    }
}

impl Recipe {
    /// 採点対象の値を `SCORED_FIELDS` の順で返す
    ///
    /// 構造体を `..` なしで分解しているので、フィールドを増減すると
    /// ここがコンパイルエラーになる。その際は FULL_SCORE と
    /// SCORED_FIELDS も合わせて更新すること。
    pub fn scored_values(&self) -> [FieldValue<'_>; FULL_SCORE] {
        let Recipe {
            name: _,
            author: _,
            url: _,
            film_simulation,
            grain_effect_size,
            grain_effect_roughness,
            color_chrome_effect,
            color_chrome_fx_blue,
            white_balance_mode,
            white_balance_red,
            white_balance_blue,
            dynamic_range,
            d_range_priority,
            highlights,
            shadows,
            color,
            sharpness,
            noise_reduction,
            clarity,
        } = self;

        [
            FieldValue::Text(film_simulation),
            FieldValue::Text(grain_effect_size),
            FieldValue::Text(grain_effect_roughness),
            FieldValue::Text(color_chrome_effect),
            FieldValue::Text(color_chrome_fx_blue),
            FieldValue::Text(white_balance_mode),
            FieldValue::Int(*white_balance_red),
            FieldValue::Int(*white_balance_blue),
            FieldValue::Text(dynamic_range),
            FieldValue::Text(d_range_priority),
            FieldValue::Int(*highlights),
            FieldValue::Int(*shadows),
            FieldValue::Int(*color),
            FieldValue::Int(*sharpness),
            FieldValue::Int(*noise_reduction),
            FieldValue::Int(*clarity),
        ]
    }

    /// 指定フィールドの値
    pub fn value(&self, field: RecipeField) -> FieldValue<'_> {
        self.scored_values()[field as usize]
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        for (field, value) in SCORED_FIELDS.iter().zip(self.scored_values()) {
            writeln!(f, "  {}: {}", field, value)?;
        }
        Ok(())
    }
}
