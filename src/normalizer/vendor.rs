//! MakerNote（Fujifilm固有）の値のデコード

use crate::error::{FilmDetectError, Result};

/// 粒状サイズのコード（0x104c）
pub fn grain_effect_size_from_code(code: i64) -> Result<&'static str> {
    match code {
        0 => Ok("Off"),
        16 => Ok("Small"),
        32 => Ok("Large"),
        _ => Err(FilmDetectError::unrecognized("GrainEffectSize", code.to_string())),
    }
}

/// 明瞭度（0x100f）は1000倍で格納されている
pub fn clarity_from_raw(raw: i64) -> Result<i32> {
    if raw == 0 {
        return Ok(0);
    }
    i32::try_from(raw / 1000).map_err(|_| FilmDetectError::malformed("Clarity", raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grain_effect_size_codes() {
        assert_eq!(grain_effect_size_from_code(0).unwrap(), "Off");
        assert_eq!(grain_effect_size_from_code(16).unwrap(), "Small");
        assert_eq!(grain_effect_size_from_code(32).unwrap(), "Large");
    }

    #[test]
    fn test_grain_effect_size_unknown_code() {
        let err = grain_effect_size_from_code(8).unwrap_err();
        assert!(matches!(err, FilmDetectError::UnrecognizedEnum { .. }));
    }

    #[test]
    fn test_clarity_from_raw() {
        assert_eq!(clarity_from_raw(0).unwrap(), 0);
        assert_eq!(clarity_from_raw(2000).unwrap(), 2);
        assert_eq!(clarity_from_raw(-5000).unwrap(), -5);
        assert_eq!(clarity_from_raw(-1500).unwrap(), -1);
    }
}
