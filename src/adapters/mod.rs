// Adapters layer: concrete implementations of the domain ports.

pub mod auth;
pub mod mysql;

pub use auth::PermissiveAuthenticator;
pub use mysql::MySqlConnector;
