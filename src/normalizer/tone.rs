//! トーン系の値（ハイライト・シャドウ・カラー・ノイズリダクション・明瞭度）
//!
//! exiftoolの表記は "+1 (medium hard)" や "-2 (low)" のように
//! 数値の後に説明が付くので、最初の整数だけを取り出す。

use crate::error::{FilmDetectError, Result};
use regex::Regex;

/// 文中の最初の整数を取り出す（空文字・"Normal" は 0）
pub fn parse_tone(field: &str, raw: &str) -> Result<i32> {
    lazy_static::lazy_static! {
        static ref INT_RE: Regex = Regex::new(r"[-+]?[0-9]+").unwrap();
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "Normal" {
        return Ok(0);
    }

    INT_RE
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(|| FilmDetectError::malformed(field, raw))
}

/// Saturationタグの解釈結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saturation {
    /// カラーの値
    Level(i32),
    /// モノクロ系（Acros）はフィルムシミュレーション名として扱う
    Monochrome(String),
}

pub fn parse_saturation(raw: &str) -> Result<Saturation> {
    if raw.contains("Acros") {
        return Ok(Saturation::Monochrome(raw.to_string()));
    }
    parse_tone("Saturation", raw).map(Saturation::Level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tone_signed() {
        assert_eq!(parse_tone("HighlightTone", "+2").unwrap(), 2);
        assert_eq!(parse_tone("ShadowTone", "-1").unwrap(), -1);
        assert_eq!(parse_tone("NoiseReduction", "3").unwrap(), 3);
    }

    #[test]
    fn test_parse_tone_with_description() {
        assert_eq!(parse_tone("HighlightTone", "+1 (medium hard)").unwrap(), 1);
        assert_eq!(parse_tone("NoiseReduction", "-4 (weakest)").unwrap(), -4);
        assert_eq!(parse_tone("ShadowTone", "0 (normal)").unwrap(), 0);
    }

    #[test]
    fn test_parse_tone_normal_and_empty() {
        assert_eq!(parse_tone("HighlightTone", "Normal").unwrap(), 0);
        assert_eq!(parse_tone("HighlightTone", "").unwrap(), 0);
    }

    #[test]
    fn test_parse_tone_without_digits() {
        let err = parse_tone("HighlightTone", "Strong Something").unwrap_err();
        match err {
            FilmDetectError::MalformedValue { field, value } => {
                assert_eq!(field, "HighlightTone");
                assert_eq!(value, "Strong Something");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_saturation() {
        assert_eq!(parse_saturation("+4 (highest)").unwrap(), Saturation::Level(4));
        assert_eq!(parse_saturation("0 (normal)").unwrap(), Saturation::Level(0));
    }

    #[test]
    fn test_parse_saturation_acros() {
        assert_eq!(
            parse_saturation("Acros Red Filter").unwrap(),
            Saturation::Monochrome("Acros Red Filter".to_string())
        );
    }

    #[test]
    fn test_parse_saturation_malformed() {
        assert!(parse_saturation("None (B&W)").is_err());
    }
}
