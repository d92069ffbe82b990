use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmDetectError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("値の形式が不正です ({field}): {value:?}")]
    MalformedValue { field: String, value: String },

    #[error("未知の値です ({field}): {value:?}")]
    UnrecognizedEnum { field: String, value: String },

    #[error("タグ {tag} の値が文字列でも数値でもありません: {kind}")]
    TypeMismatch { tag: String, kind: String },

    #[error("Fujifilmのカメラで撮影された写真ではありません (Make: {0})")]
    UnsupportedSource(String),

    #[error("MakerNoteの解析に失敗: {0}")]
    MakerNote(String),

    #[error("メタデータ読み込みエラー: {0}")]
    SourceRead(String),

    #[error("レシピの読み込みに失敗 ({path}): {reason}")]
    LibraryLoad { path: String, reason: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] filmdetect_common::Error),
}

impl FilmDetectError {
    pub fn malformed(field: &str, value: impl Into<String>) -> Self {
        FilmDetectError::MalformedValue {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn unrecognized(field: &str, value: impl Into<String>) -> Self {
        FilmDetectError::UnrecognizedEnum {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilmDetectError>;
