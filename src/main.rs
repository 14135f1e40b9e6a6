use anyhow::Context;
use applet_server_support::config::{Command, OutputFormat};
use applet_server_support::utils::{logger, validation::Validate};
use applet_server_support::{CliConfig, HostSupport, ServerSupport, SupportConfig};
use clap::Parser;

const EXIT_CONFIG_ERROR: i32 = 1;
const EXIT_DATABASE_UNREACHABLE: i32 = 2;
const EXIT_AUTH_REJECTED: i32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("Config file: {:?}", cli.config);

    let config = match load_and_validate(&cli, &cli.command) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    match cli.command {
        Command::Params { format } => {
            let params = config.applet_params();
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&params)
                        .context("Failed to serialize applet parameters")?;
                    println!("{}", json);
                }
                OutputFormat::Env => {
                    println!("ssl_prefs={}", params.ssl_prefs);
                    println!("port={}", params.port);
                    println!("background_color={}", params.background_color);
                }
            }
        }
        Command::CheckDb => {
            let support = HostSupport::from_config(config);
            if support.connect_to_mysql().await {
                println!("✅ MySQL connection OK");
            } else {
                eprintln!("❌ Could not connect to MySQL, see log for details");
                std::process::exit(EXIT_DATABASE_UNREACHABLE);
            }
        }
        Command::Auth { username, password } => {
            let support = HostSupport::from_config(config);
            match support.authenticate(&username, &password) {
                Some(user_id) => println!("{}", user_id),
                None => {
                    eprintln!("❌ Authentication failed");
                    std::process::exit(EXIT_AUTH_REJECTED);
                }
            }
        }
        Command::ShowConfig => {
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }

    Ok(())
}

// 只有用到資料庫的指令才需要完整的 schema 設定
fn load_and_validate(
    cli: &CliConfig,
    command: &Command,
) -> applet_server_support::Result<SupportConfig> {
    let config = cli.load_support_config()?;
    match command {
        Command::CheckDb => config.validate()?,
        _ => applet_server_support::utils::validation::validate_port(
            "applet.port",
            config.applet.port,
        )?,
    }
    Ok(config)
}
