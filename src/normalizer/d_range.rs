//! Dレンジ優先
//!
//! exiftoolは3つのタグに分けて報告する:
//! - DRangePriority: "Auto" / "Fixed"（設定が無い機種・オフではタグ自体が無い）
//! - DRangePriorityAuto: オート時に選ばれた強さ "Weak" / "Strong"
//! - DRangePriorityFixed: 固定時の強さ "Weak" / "Strong"
//!
//! レシピ側は Off / Auto / Weak / Strong の1値で持つ。

use crate::error::{FilmDetectError, Result};
use filmdetect_common::DEFAULT_D_RANGE_PRIORITY;

pub const D_RANGE_PRIORITY_AUTO: &str = "Auto";
const MODE_FIXED: &str = "Fixed";
const STRENGTHS: [&str; 2] = ["Weak", "Strong"];

fn parse_strength(field: &str, raw: &str) -> Result<&'static str> {
    STRENGTHS
        .iter()
        .find(|label| **label == raw)
        .copied()
        .ok_or_else(|| FilmDetectError::unrecognized(field, raw))
}

/// 3タグの値をレシピの値にまとめる
///
/// オート時に選ばれた強さは撮影ごとに変わるので、レシピ上は "Auto" のまま。
pub fn combine_d_range_priority(
    mode: Option<&str>,
    auto_strength: Option<&str>,
    fixed_strength: Option<&str>,
) -> Result<String> {
    if let Some(raw) = auto_strength {
        parse_strength("DRangePriorityAuto", raw)?;
    }

    match mode {
        None => Ok(DEFAULT_D_RANGE_PRIORITY.to_string()),
        Some(m) if m == DEFAULT_D_RANGE_PRIORITY => Ok(DEFAULT_D_RANGE_PRIORITY.to_string()),
        Some(m) if m == D_RANGE_PRIORITY_AUTO => Ok(D_RANGE_PRIORITY_AUTO.to_string()),
        Some(m) if m == MODE_FIXED => {
            let raw = fixed_strength
                .ok_or_else(|| FilmDetectError::malformed("DRangePriorityFixed", ""))?;
            Ok(parse_strength("DRangePriorityFixed", raw)?.to_string())
        }
        Some(m) => Err(FilmDetectError::unrecognized("DRangePriority", m)),
    }
}
