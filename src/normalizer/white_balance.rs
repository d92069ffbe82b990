//! ホワイトバランス微調整（WB Shift）

use crate::error::{FilmDetectError, Result};
use regex::Regex;

/// カメラの内部値20で1段階
pub const FINE_TUNE_STEP: i32 = 20;

/// WB Shift（赤・青）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhiteBalanceShift {
    pub red: i32,
    pub blue: i32,
}

/// "Red +40, Blue -20" 形式をパース
///
/// 空文字はシフトなし。割り算はゼロ方向への切り捨て（-30 → -1）。
pub fn parse_fine_tune(raw: &str) -> Result<WhiteBalanceShift> {
    lazy_static::lazy_static! {
        static ref FINE_TUNE_RE: Regex =
            Regex::new(r"Red\s*([-+]?[0-9]+),\s*Blue\s*([-+]?[0-9]+)").unwrap();
    }

    if raw.trim().is_empty() {
        return Ok(WhiteBalanceShift::default());
    }

    let malformed = || FilmDetectError::malformed("WhiteBalanceFineTune", raw);
    let cap = FINE_TUNE_RE.captures(raw).ok_or_else(malformed)?;
    let red: i32 = cap[1].parse().map_err(|_| malformed())?;
    let blue: i32 = cap[2].parse().map_err(|_| malformed())?;

    Ok(WhiteBalanceShift {
        red: red / FINE_TUNE_STEP,
        blue: blue / FINE_TUNE_STEP,
    })
}
