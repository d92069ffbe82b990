//! レシピ照合モジュール
//!
//! 抽出したレシピを全候補と比較し、スコア順に並べて最も近いものを選ぶ。
//!
//! - 完全一致があればその1件だけを返す
//! - 無ければ最高スコアの候補を同点すべて返す

mod types;

pub use types::MatchOutcome;

use filmdetect_common::{compare, Difference, Recipe};
use rayon::prelude::*;

/// 候補をスコア順に並べて最も近いものを返す
pub fn rank<'a>(input: &'a Recipe, candidates: &'a [Recipe]) -> MatchOutcome<'a> {
    let mut differences: Vec<Difference<'a>> = candidates
        .par_iter()
        .map(|candidate| compare(input, candidate))
        .collect();

    // 安定ソート: 同点はライブラリの順序を保つ
    differences.sort_by(|a, b| b.score().cmp(&a.score()));

    if let Some(pos) = differences.iter().position(|d| d.is_perfect_match()) {
        let duplicate_perfect_matches: Vec<&'a str> = differences[pos + 1..]
            .iter()
            .take_while(|d| d.is_perfect_match())
            .map(|d| d.candidate.name.as_str())
            .collect();

        let perfect = differences.swap_remove(pos);
        if !duplicate_perfect_matches.is_empty() {
            tracing::warn!(
                matched = %perfect.candidate.name,
                duplicates = ?duplicate_perfect_matches,
                "同じ設定のレシピが複数あります"
            );
        }

        return MatchOutcome {
            results: vec![perfect],
            perfect_match: true,
            duplicate_perfect_matches,
        };
    }

    let top_score = match differences.first() {
        Some(d) => d.score(),
        None => return MatchOutcome::default(),
    };

    let results: Vec<Difference<'a>> = differences
        .into_iter()
        .take_while(|d| d.score() == top_score)
        .collect();

    tracing::debug!(top_score, count = results.len(), "最高スコアの候補");

    MatchOutcome {
        results,
        perfect_match: false,
        duplicate_perfect_matches: Vec::new(),
    }
}
