//! Fujifilm MakerNoteのデコード
//!
//! 構造: "FUJIFILM" (8 bytes) + IFDオフセット (u32 LE) + IFD。
//! オフセットはMakerNote先頭からの相対位置で、常にリトルエンディアン。

use super::MakerNoteSource;
use crate::error::{FilmDetectError, Result};
use exif::{In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const FUJIFILM_SIGNATURE: &[u8; 8] = b"FUJIFILM";
const FUJIFILM_MAKE: &str = "FUJIFILM";
const IFD_ENTRY_SIZE: usize = 12;

/// MakerNoteから読み取る値（生の値、未変換）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MakerNoteTags {
    /// 1000倍された明瞭度
    pub clarity: Option<i64>,
    /// 粒状サイズのコード（0/16/32）
    pub grain_effect_size: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
enum FujiTag {
    Clarity,
    GrainEffectSize,
}

/// タグID → フィールド
const FUJI_TAGS: [(u16, FujiTag); 2] = [
    (0x100f, FujiTag::Clarity),
    (0x104c, FujiTag::GrainEffectSize),
];

/// MakerNoteのバイト列をデコード
pub fn decode_fuji_maker_note(data: &[u8]) -> Result<MakerNoteTags> {
    if !data.starts_with(FUJIFILM_SIGNATURE) {
        return Err(FilmDetectError::MakerNote("FUJIFILMヘッダーがありません".into()));
    }

    let ifd = u32::from_le_bytes(read_bytes(data, 8)?) as usize;
    let count = u16::from_le_bytes(read_bytes(data, ifd)?) as usize;
    let mut tags = MakerNoteTags::default();

    for i in 0..count {
        let entry = ifd + 2 + i * IFD_ENTRY_SIZE;
        let id = u16::from_le_bytes(read_bytes(data, entry)?);

        let Some((_, tag)) = FUJI_TAGS.iter().find(|(tag_id, _)| *tag_id == id) else {
            continue;
        };

        let value = read_entry_value(data, entry)?;
        match tag {
            FujiTag::Clarity => tags.clarity = Some(value),
            FujiTag::GrainEffectSize => tags.grain_effect_size = Some(value),
        }
    }

    Ok(tags)
}

/// IFDエントリの最初の値を整数として読む
fn read_entry_value(data: &[u8], entry: usize) -> Result<i64> {
    let field_type = u16::from_le_bytes(read_bytes(data, entry + 2)?);
    let count = u32::from_le_bytes(read_bytes(data, entry + 4)?) as usize;

    let size = match field_type {
        1 | 6 => 1,
        3 | 8 => 2,
        4 | 9 => 4,
        other => {
            return Err(FilmDetectError::MakerNote(format!("未対応のデータ型です: {}", other)));
        }
    };
    if count == 0 {
        return Err(FilmDetectError::MakerNote("値の個数が0です".into()));
    }

    let offset = if size * count <= 4 {
        entry + 8
    } else {
        u32::from_le_bytes(read_bytes(data, entry + 8)?) as usize
    };

    let value = match field_type {
        1 => read_bytes::<1>(data, offset)?[0] as i64,
        6 => i8::from_le_bytes(read_bytes(data, offset)?) as i64,
        3 => u16::from_le_bytes(read_bytes(data, offset)?) as i64,
        8 => i16::from_le_bytes(read_bytes(data, offset)?) as i64,
        4 => u32::from_le_bytes(read_bytes(data, offset)?) as i64,
        _ => i32::from_le_bytes(read_bytes(data, offset)?) as i64,
    };
    Ok(value)
}

fn read_bytes<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    offset
        .checked_add(N)
        .and_then(|end| data.get(offset..end))
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| FilmDetectError::MakerNote(format!("オフセット {} でデータが途切れています", offset)))
}

/// kamadak-exifでMakerNoteを取り出してデコードする
#[derive(Debug, Clone, Copy, Default)]
pub struct FujiMakerNoteReader;

impl MakerNoteSource for FujiMakerNoteReader {
    fn read_maker_note(&self, path: &Path) -> Result<Option<MakerNoteTags>> {
        let file = File::open(path)?;
        let mut bufreader = BufReader::new(file);
        let exif = exif::Reader::new()
            .read_from_container(&mut bufreader)
            .map_err(|e| FilmDetectError::SourceRead(format!("EXIFの読み込みに失敗: {}", e)))?;

        let make = exif.get_field(Tag::Make, In::PRIMARY).map(|f| &f.value);
        let note = exif.get_field(Tag::MakerNote, In::PRIMARY).map(|f| &f.value);
        if note.is_none() {
            tracing::debug!(file = %path.display(), "MakerNoteなし");
        }
        maker_note_from_fields(make, note)
    }
}

/// Make と MakerNote のフィールド値からデコードする
///
/// Makeの確認はMakerNoteの有無より先に行う（MakerNoteを削除した他社製の写真も弾く）。
fn maker_note_from_fields(make: Option<&Value>, note: Option<&Value>) -> Result<Option<MakerNoteTags>> {
    let make = make.and_then(ascii_value);
    if make.as_deref() != Some(FUJIFILM_MAKE) {
        return Err(FilmDetectError::UnsupportedSource(
            make.unwrap_or_else(|| "不明".to_string()),
        ));
    }

    match note {
        None => Ok(None),
        Some(Value::Undefined(data, _)) => decode_fuji_maker_note(data).map(Some),
        Some(_) => Err(FilmDetectError::MakerNote("MakerNoteの型が不正です".into())),
    }
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts.first().map(|s| {
            String::from_utf8_lossy(s)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        }),
        _ => None,
    }
}
