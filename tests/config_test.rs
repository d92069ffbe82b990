//! 設定ファイルと環境変数の層分けのテスト
//!
//! 環境変数を変更するのはこのファイルの1テストのみ。

use filmdetect::config::Config;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_env_override_is_not_saved() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("filmdetect").join("config.json");

    std::env::set_var("FILMDETECT_EXIFTOOL", "/opt/tmp/exiftool");

    let effective = Config::load_from(&path).unwrap().with_env_overrides();
    assert_eq!(effective.exiftool_path, PathBuf::from("/opt/tmp/exiftool"));

    let mut config = Config::load_from(&path).unwrap();
    config.simulation_dir = Some(PathBuf::from("/recipes"));
    config.save_to(&path).unwrap();

    std::env::remove_var("FILMDETECT_EXIFTOOL");

    let reloaded = Config::load_from(&path).unwrap().with_env_overrides();
    assert_eq!(reloaded.simulation_dir, Some(PathBuf::from("/recipes")));
    assert_eq!(reloaded.exiftool_path, PathBuf::from("exiftool"));
}
