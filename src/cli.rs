use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filmdetect")]
#[command(about = "写真のメタデータからフィルムシミュレーションのレシピを特定するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// レシピJSONのディレクトリ（設定ファイルより優先）
    #[arg(long, global = true)]
    pub simulation_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真に最も近いレシピを探す
    Detect {
        /// 写真ファイルのパス
        #[arg(required = true)]
        image: PathBuf,
    },

    /// 写真から抽出したレシピを表示
    Show {
        /// 写真ファイルのパス
        #[arg(required = true)]
        image: PathBuf,
    },

    /// ライブラリのレシピ一覧を表示
    List,

    /// 設定を表示/編集
    Config {
        /// レシピのディレクトリを設定
        #[arg(long)]
        set_simulation_dir: Option<PathBuf>,

        /// exiftoolのパスを設定
        #[arg(long)]
        set_exiftool: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
