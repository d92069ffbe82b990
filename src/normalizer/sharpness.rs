//! シャープネス

use crate::error::{FilmDetectError, Result};

/// exiftoolのラベル → -4〜+4
const SHARPNESS_LEVELS: [(&str, i32); 9] = [
    ("Softest", -4),
    ("Very Soft", -3),
    ("Soft", -2),
    ("Medium Soft", -1),
    ("Normal", 0),
    ("Medium Hard", 1),
    ("Hard", 2),
    ("Very Hard", 3),
    ("Hardest", 4),
];

pub fn parse_sharpness(raw: &str) -> Result<i32> {
    SHARPNESS_LEVELS
        .iter()
        .find(|(label, _)| *label == raw)
        .map(|(_, level)| *level)
        .ok_or_else(|| FilmDetectError::unrecognized("Sharpness", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sharpness_all_levels() {
        let expected = [
            ("Softest", -4),
            ("Very Soft", -3),
            ("Soft", -2),
            ("Medium Soft", -1),
            ("Normal", 0),
            ("Medium Hard", 1),
            ("Hard", 2),
            ("Very Hard", 3),
            ("Hardest", 4),
        ];
        for (label, level) in expected {
            assert_eq!(parse_sharpness(label).unwrap(), level, "{}", label);
        }
    }

    #[test]
    fn test_parse_sharpness_unrecognized() {
        let err = parse_sharpness("Hardest!").unwrap_err();
        assert!(matches!(err, FilmDetectError::UnrecognizedEnum { .. }));
        assert!(parse_sharpness("hard").is_err());
        assert!(parse_sharpness("").is_err());
    }
}
