use filmdetect_common::Difference;

/// 照合結果
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome<'a> {
    /// 完全一致なら1件、そうでなければ最高スコアの候補すべて
    pub results: Vec<Difference<'a>>,
    /// 完全一致が見つかったか
    pub perfect_match: bool,
    /// results に入らなかった、同じく完全一致のレシピ名
    pub duplicate_perfect_matches: Vec<&'a str>,
}

impl<'a> MatchOutcome<'a> {
    /// 最高スコア（候補が無ければ None）
    pub fn top_score(&self) -> Option<usize> {
        self.results.first().map(|d| d.score())
    }
}
