//! レシピライブラリの読み込み
//!
//! ディレクトリ直下の `*.json` を1ファイル1レシピとして読む。
//! 1つでも読めないファイルがあれば全体をエラーにする。

use crate::error::{FilmDetectError, Result};
use filmdetect_common::{parse_recipe, Recipe};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const RECIPE_EXTENSION: &str = "json";

/// レシピファイルの一覧（ファイル名順）
pub fn list_recipe_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FilmDetectError::FolderNotFound(dir.display().to_string()));
    }

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1) // 直下のみ（再帰しない）
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_recipe_file(p))
        .collect();

    Ok(files)
}

fn is_recipe_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(RECIPE_EXTENSION))
        .unwrap_or(false)
}

/// レシピファイルを1つ読み込む
pub fn load_recipe_file(path: &Path) -> Result<Recipe> {
    let load_error = |reason: String| FilmDetectError::LibraryLoad {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    parse_recipe(&content).map_err(|e| load_error(e.to_string()))
}

/// ライブラリ内の全レシピを読み込む
pub fn load_recipes(dir: &Path) -> Result<Vec<Recipe>> {
    let files = list_recipe_files(dir)?;

    let recipes = files
        .iter()
        .map(|path| load_recipe_file(path))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(dir = %dir.display(), count = recipes.len(), "レシピを読み込み");
    Ok(recipes)
}
