//! レシピ同士の比較
//!
//! 採点対象フィールドを宣言順に完全一致で比較し、不一致の行を集める。

use crate::types::{Recipe, RecipeField, FULL_SCORE, SCORED_FIELDS};

/// 不一致のフィールド1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub field: RecipeField,
    /// 入力（写真）側の値
    pub input: String,
    /// 候補（ライブラリ）側の値
    pub candidate: String,
}

/// 入力レシピと候補レシピの比較結果
#[derive(Debug, Clone)]
pub struct Difference<'a> {
    pub input: &'a Recipe,
    pub candidate: &'a Recipe,
    /// `SCORED_FIELDS` の順に並んだ不一致リスト
    pub mismatches: Vec<Mismatch>,
}

impl<'a> Difference<'a> {
    /// 一致したフィールド数
    pub fn score(&self) -> usize {
        FULL_SCORE - self.mismatches.len()
    }

    pub fn is_perfect_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// 表形式の行（フィールド名, 入力値, 候補値）
    pub fn rows(&self) -> Vec<[String; 3]> {
        self.mismatches
            .iter()
            .map(|m| [m.field.label().to_string(), m.input.clone(), m.candidate.clone()])
            .collect()
    }
}

/// 2つのレシピを比較する
///
/// name / author / url は比較しない。
pub fn compare<'a>(input: &'a Recipe, candidate: &'a Recipe) -> Difference<'a> {
    let input_values = input.scored_values();
    let candidate_values = candidate.scored_values();

    let mismatches = SCORED_FIELDS
        .iter()
        .zip(input_values.iter().zip(candidate_values.iter()))
        .filter(|(_, (a, b))| a != b)
        .map(|(field, (a, b))| Mismatch {
            field: *field,
            input: a.to_string(),
            candidate: b.to_string(),
        })
        .collect();

    Difference {
        input,
        candidate,
        mismatches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            name: "Portra 400".into(),
            author: "someone".into(),
            url: "https://example.com/portra".into(),
            film_simulation: "Classic Chrome".into(),
            grain_effect_size: "Small".into(),
            grain_effect_roughness: "Weak".into(),
            color_chrome_effect: "Strong".into(),
            color_chrome_fx_blue: "Off".into(),
            white_balance_mode: "Auto".into(),
            white_balance_red: 2,
            white_balance_blue: -4,
            dynamic_range: "400".into(),
            highlights: -1,
            shadows: -1,
            color: 2,
            sharpness: -2,
            noise_reduction: -4,
            clarity: -2,
            ..Default::default()
        }
    }

    #[test]
    fn test_compare_same_recipe_is_perfect() {
        let a = sample_recipe();
        let diff = compare(&a, &a);
        assert!(diff.is_perfect_match());
        assert_eq!(diff.score(), FULL_SCORE);
        assert_eq!(diff.score(), 16);
    }

    #[test]
    fn test_identity_fields_are_ignored() {
        let a = sample_recipe();
        let b = Recipe {
            name: "別名".into(),
            author: "another".into(),
            url: String::new(),
            ..a.clone()
        };
        assert!(compare(&a, &b).is_perfect_match());
    }

    #[test]
    fn test_mismatches_follow_declaration_order() {
        let a = sample_recipe();
        let b = Recipe {
            clarity: 0,
            film_simulation: "Provia/Standard".into(),
            white_balance_red: 0,
            ..a.clone()
        };

        let diff = compare(&a, &b);
        let fields: Vec<RecipeField> = diff.mismatches.iter().map(|m| m.field).collect();
        assert_eq!(
            fields,
            vec![RecipeField::FilmSimulation, RecipeField::WhiteBalanceRed, RecipeField::Clarity]
        );
        assert_eq!(diff.score(), 13);
    }

    #[test]
    fn test_mismatch_values_rendered_as_text() {
        let a = sample_recipe();
        let b = Recipe { sharpness: -1, ..a.clone() };

        let diff = compare(&a, &b);
        assert_eq!(
            diff.rows(),
            vec![["Sharpness".to_string(), "-2".to_string(), "-1".to_string()]]
        );
    }

    #[test]
    fn test_text_comparison_is_exact() {
        let a = sample_recipe();
        let b = Recipe { dynamic_range: "400 ".into(), ..a.clone() };
        assert_eq!(compare(&a, &b).mismatches.len(), 1);
    }
}
