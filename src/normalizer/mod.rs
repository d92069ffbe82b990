//! タグ値の正規化モジュール
//!
//! メタデータの生の値（文字列または数値）を、レシピの正規化済み
//! フィールド値へ変換する。
//!
//! ## フィールドと変換規則
//! - ホワイトバランス微調整: "Red +40, Blue -20" → (2, -1)
//! - ハイライト・シャドウ・カラー・ノイズリダクション: 文中の最初の整数
//! - シャープネス: 9段階のラベル → -4〜+4
//! - ダイナミックレンジ: 数値 → 小数点以下なしの文字列
//! - Dレンジ優先: 3タグ → Off / Auto / Weak / Strong
//! - MakerNote由来の粒状サイズ・明瞭度: ベンダー固有のエンコード

pub mod d_range;
pub mod white_balance;
pub mod tone;
pub mod sharpness;
pub mod vendor;

pub use d_range::combine_d_range_priority;
pub use sharpness::parse_sharpness;
pub use tone::{parse_saturation, parse_tone, Saturation};
pub use vendor::{clarity_from_raw, grain_effect_size_from_code};
pub use white_balance::{parse_fine_tune, WhiteBalanceShift};

use crate::error::{FilmDetectError, Result};
use serde_json::Value;
use std::borrow::Cow;

/// メタデータの生の値
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> RawValue<'a> {
    /// JSON値から変換（文字列・数値以外は型エラー）
    pub fn from_json(tag: &str, value: &'a Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(RawValue::Text(s)),
            Value::Number(n) => n
                .as_f64()
                .map(RawValue::Number)
                .ok_or_else(|| type_mismatch(tag, "number")),
            Value::Null => Err(type_mismatch(tag, "null")),
            Value::Bool(_) => Err(type_mismatch(tag, "bool")),
            Value::Array(_) => Err(type_mismatch(tag, "array")),
            Value::Object(_) => Err(type_mismatch(tag, "object")),
        }
    }

    /// 文字列として取得
    ///
    /// exiftoolは数値に見える値を引用符なしで出力するため、
    /// 数値は整数表記の文字列に戻す。
    pub fn text(&self) -> Cow<'a, str> {
        match *self {
            RawValue::Text(s) => Cow::Borrowed(s),
            RawValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Cow::Owned(format!("{}", n as i64))
            }
            RawValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

fn type_mismatch(tag: &str, kind: &str) -> FilmDetectError {
    FilmDetectError::TypeMismatch {
        tag: tag.to_string(),
        kind: kind.to_string(),
    }
}

/// ダイナミックレンジ（100.0 → "100"）
pub fn format_dynamic_range(raw: RawValue<'_>) -> Result<String> {
    let value = match raw {
        RawValue::Number(n) => n,
        RawValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| FilmDetectError::malformed("DevelopmentDynamicRange", s))?,
    };
    Ok(format!("{:.0}", value))
}

/// そのままコピーするフィールド（フィルムシミュレーション名など）
pub fn passthrough(raw: RawValue<'_>) -> String {
    raw.text().into_owned()
}
