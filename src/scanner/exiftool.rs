use super::{MetadataSource, TagMap};
use crate::error::{FilmDetectError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// exiftool (`-j`) によるタグ読み込み
#[derive(Debug, Clone)]
pub struct ExifTool {
    program: PathBuf,
    tags: Vec<String>,
}

impl ExifTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            tags: Vec::new(),
        }
    }

    /// 取得するタグを限定する（未指定なら全タグ）
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    fn args(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-j".into()];
        args.extend(self.tags.iter().map(|t| OsString::from(format!("-{}", t))));
        args.push(path.as_os_str().to_owned());
        args
    }
}

impl MetadataSource for ExifTool {
    fn read_tags(&self, path: &Path) -> Result<TagMap> {
        if !path.exists() {
            return Err(FilmDetectError::FileNotFound(path.display().to_string()));
        }

        tracing::debug!(program = %self.program.display(), file = %path.display(), "exiftool実行");

        let output = Command::new(&self.program)
            .args(self.args(path))
            .output()
            .map_err(|e| {
                FilmDetectError::SourceRead(format!(
                    "exiftoolを実行できません ({}): {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(FilmDetectError::SourceRead(format!(
                "exiftoolが失敗しました (exit {}): {}",
                output.status.code().unwrap_or(-1),
                stderr
            )));
        }

        parse_output(&output.stdout)
    }
}

/// `exiftool -j` の出力（1要素の配列）からタグマップを取り出す
fn parse_output(stdout: &[u8]) -> Result<TagMap> {
    let value: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|e| FilmDetectError::SourceRead(format!("exiftoolの出力をパースできません: {}", e)))?;

    let tags = value
        .as_array()
        .and_then(|a| a.first())
        .and_then(|v| v.as_object())
        .cloned()
        .ok_or_else(|| FilmDetectError::SourceRead("exiftoolの出力が空です".into()))?;

    if let Some(error) = tags.get("Error").and_then(|v| v.as_str()) {
        return Err(FilmDetectError::SourceRead(error.to_string()));
    }

    Ok(tags)
}
