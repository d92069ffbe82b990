//! レシピJSONパーサー
//!
//! ライブラリの1ファイル = 1レシピ（JSONオブジェクト）。
//! 欠けているキーはゼロ値、未知のキーは無視する。

use crate::error::{Error, Result};
use crate::types::Recipe;

/// レシピJSONをパース
///
/// # Examples
/// ```
/// use filmdetect_common::parse_recipe;
///
/// let recipe = parse_recipe(r#"{"name": "Kodachrome 64", "sharpness": 1}"#).unwrap();
/// assert_eq!(recipe.name, "Kodachrome 64");
/// assert_eq!(recipe.sharpness, 1);
/// ```
pub fn parse_recipe(content: &str) -> Result<Recipe> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(Error::Parse("レシピがJSONオブジェクトではありません".into()));
    }
    Ok(serde_json::from_value(value)?)
}
