//! filmdetect
//!
//! 写真のメタデータ（exiftool + Fujifilm MakerNote）からレシピを抽出し、
//! レシピライブラリと照合して最も近いものを特定する。

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod library;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod scanner;

pub use filmdetect_common::{compare, Difference, Recipe, FULL_SCORE};

use config::Config;
use extractor::RecipeExtractor;
use scanner::{ExifTool, FujiMakerNoteReader};

/// exiftool + MakerNote で抽出する標準構成
pub fn default_extractor(config: &Config) -> RecipeExtractor {
    let exiftool = ExifTool::new(config.exiftool_path.clone()).with_tags(extractor::tags::tag_names());
    RecipeExtractor::new(Box::new(exiftool)).with_maker_notes(Box::new(FujiMakerNoteReader))
}
