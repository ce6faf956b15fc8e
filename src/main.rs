use clap::Parser;
use snowseeker::app::render::{self, ResortRow};
use snowseeker::config::{Command, LogFormat};
use snowseeker::core::ConfigProvider;
use snowseeker::utils::{logger, validation::Validate};
use snowseeker::{CliConfig, SeekerError, Session, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)
    let toml_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose || toml_config.as_ref().is_some_and(|c| c.verbose());
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(verbose),
        LogFormat::Json => logger::init_json_logger(verbose),
    }

    tracing::info!("🚀 Starting snowseeker");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match toml_config {
        Some(mut config) => {
            config.apply_cli_overrides(&cli);
            run(&config, &cli.command).await
        }
        None => run(&cli, &cli.command).await,
    };

    if let Err(e) = result {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ snowseeker failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run<C>(config: &C, command: &Command) -> Result<(), SeekerError>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let mut session = Session::bootstrap(config).await?;
    let outcome = execute(&mut session, command);
    session.shutdown().await;
    outcome
}

fn execute(session: &mut Session, command: &Command) -> Result<(), SeekerError> {
    match command {
        Command::List { search, sort } => {
            if let Some(text) = search {
                session.view_model.set_search_text(text.as_str());
            }
            if let Some(order) = sort {
                session.view_model.set_sort_order(*order);
            }

            let rows = render::list_rows(&session.view_model, &session.favorites);
            tracing::debug!("Showing {} resorts", rows.len());
            print!("{}", render::render_rows(&rows));
            if rows.is_empty() {
                println!();
            }
        }
        Command::Show { id: None } => {
            print!("{}", render::render_welcome());
        }
        Command::Show { id: Some(id) } => {
            let resort = session.resort(id)?;
            let is_favorite = session.favorites.contains(&resort.id);
            print!("{}", render::render_detail(resort, is_favorite));
        }
        Command::Toggle { id } => {
            session.favorites.subscribe(|change| {
                tracing::info!("⭐ Favorite '{}' is now {}", change.id, change.is_favorite);
                if change.is_favorite {
                    println!("♥ Added {} to your favorites", change.id);
                } else {
                    println!("Removed {} from your favorites", change.id);
                }
            });
            session.toggle_favorite(id)?;
        }
        Command::Favorites => {
            let rows: Vec<ResortRow<'_>> = session
                .favorite_resorts()
                .into_iter()
                .map(|resort| ResortRow {
                    resort,
                    is_favorite: true,
                })
                .collect();

            if rows.is_empty() {
                println!("You have no favorite resorts yet.");
            } else {
                print!("{}", render::render_rows(&rows));
            }
        }
    }

    Ok(())
}
