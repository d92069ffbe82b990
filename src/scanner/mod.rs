//! メタデータ読み込みモジュール
//!
//! - MetadataSource: タグ名 → 値 のマップを返す（exiftool）
//! - MakerNoteSource: ベンダー固有のMakerNoteから明瞭度・粒状サイズを返す

mod exiftool;
mod maker_note;

pub use exiftool::ExifTool;
pub use maker_note::{decode_fuji_maker_note, FujiMakerNoteReader, MakerNoteTags};

use crate::error::Result;
use std::path::Path;

/// タグ名 → 生の値（文字列・数値以外も含みうる）
pub type TagMap = serde_json::Map<String, serde_json::Value>;

pub trait MetadataSource {
    fn read_tags(&self, path: &Path) -> Result<TagMap>;
}

pub trait MakerNoteSource {
    /// MakerNoteが無い写真は `Ok(None)`
    fn read_maker_note(&self, path: &Path) -> Result<Option<MakerNoteTags>>;
}
