//! filmdetect Common Library
//!
//! レシピ型と比較エンジン（I/Oを含まない純粋な部分）

pub mod types;
pub mod difference;
pub mod error;
pub mod parser;

pub use types::{FieldValue, Recipe, RecipeField, DEFAULT_D_RANGE_PRIORITY, FULL_SCORE, SCORED_FIELDS};
pub use difference::{compare, Difference, Mismatch};
pub use error::{Error, Result};
pub use parser::parse_recipe;
