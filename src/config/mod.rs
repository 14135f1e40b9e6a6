pub mod toml_config;

pub use toml_config::{AppletSettings, AuthConfig, AuthMode, DatabaseConfig, SupportConfig};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "applet-support")]
#[command(about = "Server-side support values for the chess client applet")]
pub struct CliConfig {
    /// TOML config file; built-in defaults are used when omitted
    #[arg(long, short, env = "APPLET_SUPPORT_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the parameters handed to the applet
    Params {
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Try to connect to MySQL and select the applet schema
    CheckDb,
    /// Check a username/password pair and print the user id
    Auth {
        #[arg(long)]
        username: String,
        #[arg(long, env = "APPLET_SUPPORT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the effective configuration (password omitted)
    ShowConfig,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    /// `key=value` lines
    Env,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_support_config(&self) -> crate::utils::error::Result<SupportConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                SupportConfig::from_file(path)
            }
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(SupportConfig::default())
            }
        }
    }
}
