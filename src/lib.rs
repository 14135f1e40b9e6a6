pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{MySqlConnector, PermissiveAuthenticator};
pub use crate::config::SupportConfig;
pub use crate::core::{
    AppletParams, Authenticator, BackgroundColor, DatabaseConnector, HostSupport, ServerSupport,
    UserId,
};
pub use crate::utils::error::{Result, SupportError};
