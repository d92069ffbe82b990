use clap::Parser;
use filmdetect::{cli, config, error, library, matcher, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Detect { image } => {
            let config = Config::load_for_cli(cli.simulation_dir.as_deref())?;
            let simulation_dir = config.resolve_simulation_dir(cli.simulation_dir)?;

            let recipes = library::load_recipes(&simulation_dir)?;
            let input = filmdetect::default_extractor(&config).extract(&image)?;

            let outcome = matcher::rank(&input, &recipes);
            print!("{}", report::render(&outcome));
        }

        Commands::Show { image } => {
            let config = Config::load()?;
            let recipe = filmdetect::default_extractor(&config).extract(&image)?;
            print!("{}", recipe);
        }

        Commands::List => {
            let config = Config::load_for_cli(cli.simulation_dir.as_deref())?;
            let simulation_dir = config.resolve_simulation_dir(cli.simulation_dir)?;

            for path in library::list_recipe_files(&simulation_dir)? {
                let recipe = library::load_recipe_file(&path)?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                println!("{}\t{}", recipe.name, file_name);
            }
        }

        Commands::Config { set_simulation_dir, set_exiftool, show } => {
            // 環境変数の値を保存しないよう、ファイルの内容だけを編集する
            let mut config = Config::load_file()?;
            let changed = set_simulation_dir.is_some() || set_exiftool.is_some();

            if let Some(dir) = set_simulation_dir {
                config.simulation_dir = Some(dir);
            }
            if let Some(path) = set_exiftool {
                config.exiftool_path = path;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let config = config.with_env_overrides();
                println!("設定:");
                println!(
                    "  レシピのディレクトリ: {}",
                    config
                        .simulation_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  exiftool: {}", config.exiftool_path.display());
            }
        }
    }

    Ok(())
}
