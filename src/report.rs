//! 照合結果の表示
//!
//! - 完全一致: レシピ名のみ
//! - それ以外: 見出し + 候補ごとに不一致フィールドの表

use crate::matcher::MatchOutcome;
use filmdetect_common::{Difference, FULL_SCORE};

pub const NO_PERFECT_MATCH_HEADER: &str =
    "完全に一致するレシピは見つかりませんでした。最も近いレシピ:";
pub const EMPTY_LIBRARY_MESSAGE: &str = "レシピライブラリが空です";

pub fn render(outcome: &MatchOutcome<'_>) -> String {
    if outcome.perfect_match {
        if let Some(diff) = outcome.results.first() {
            return format!("{}\n", diff.candidate.name);
        }
    }

    if outcome.results.is_empty() {
        return format!("{}\n", EMPTY_LIBRARY_MESSAGE);
    }

    let mut out = String::new();
    out.push_str(NO_PERFECT_MATCH_HEADER);
    out.push('\n');

    for diff in &outcome.results {
        out.push('\n');
        out.push_str(&render_difference(diff));
    }
    out
}

/// 1候補分の表
pub fn render_difference(diff: &Difference<'_>) -> String {
    let header = [
        diff.candidate.name.clone(),
        "Input".to_string(),
        "Candidate".to_string(),
    ];
    let rows = diff.rows();

    let mut widths = [0usize; 3];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut lines = vec![
        format!("スコア: {}/{}", diff.score(), FULL_SCORE),
        border.clone(),
        format_row(&header, &widths),
        border.clone(),
    ];
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    if !rows.is_empty() {
        lines.push(border);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}
