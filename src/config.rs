use crate::error::{FilmDetectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SIMULATION_DIR_ENV: &str = "FILMDETECT_SIMULATION_DIR";
const EXIFTOOL_ENV: &str = "FILMDETECT_EXIFTOOL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// レシピJSONを置いたディレクトリ
    #[serde(default)]
    pub simulation_dir: Option<PathBuf>,
    #[serde(default = "default_exiftool_path")]
    pub exiftool_path: PathBuf,
}

fn default_exiftool_path() -> PathBuf {
    PathBuf::from("exiftool")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation_dir: None,
            exiftool_path: default_exiftool_path(),
        }
    }
}

impl Config {
    /// 設定ファイル + 環境変数（実行時に使う値）
    pub fn load() -> Result<Self> {
        Ok(Self::load_file()?.with_env_overrides())
    }

    /// 設定ファイルの内容のみ。保存するときはこちらを使う
    pub fn load_file() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// `--simulation-dir` が指定されていれば、設定ファイルが読めなくても既定値で続行
    pub fn load_for_cli(cli_simulation_dir: Option<&Path>) -> Result<Self> {
        Self::load_for_cli_from(&Self::config_path()?, cli_simulation_dir)
    }

    fn load_for_cli_from(path: &Path, cli_simulation_dir: Option<&Path>) -> Result<Self> {
        match Self::load_from(path) {
            Ok(config) => Ok(config.with_env_overrides()),
            Err(e) if cli_simulation_dir.is_some() => {
                tracing::warn!(path = %path.display(), error = %e, "設定ファイルを読めないため既定値を使用");
                Ok(Self::default().with_env_overrides())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FilmDetectError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("filmdetect").join("config.json"))
    }

    /// 環境変数を優先
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = std::env::var_os(SIMULATION_DIR_ENV).filter(|v| !v.is_empty()) {
            self.simulation_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = std::env::var_os(EXIFTOOL_ENV).filter(|v| !v.is_empty()) {
            self.exiftool_path = PathBuf::from(path);
        }
        self
    }

    /// CLIの指定 > 環境変数 > 設定ファイル
    pub fn resolve_simulation_dir(&self, cli_value: Option<PathBuf>) -> Result<PathBuf> {
        cli_value
            .or_else(|| self.simulation_dir.clone())
            .ok_or_else(|| {
                FilmDetectError::Config(
                    "レシピのディレクトリが指定されていません。`--simulation-dir` で指定してください"
                        .into(),
                )
            })
    }
}
