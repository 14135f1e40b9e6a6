use crate::config::DatabaseConfig;
use crate::domain::ports::DatabaseConnector;
use crate::utils::error::{Result, SupportError};
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Single, unpooled MySQL connection to the applet's preferences schema.
#[derive(Debug, Clone)]
pub struct MySqlConnector {
    config: DatabaseConfig,
}

impl MySqlConnector {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn connect_options(&self, schema: &str) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .database(schema);

        if !self.config.password.is_empty() {
            options = options.password(&self.config.password);
        }
        options
    }

    /// Connects and selects the schema, returning the open connection or the cause of failure.
    pub async fn try_connect(&self) -> Result<MySqlConnection> {
        let schema = self.config.schema_name()?;
        let seconds = self.config.connect_timeout_secs;

        info!(
            "Connecting to MySQL at {}:{} as {} (schema {})",
            self.config.host, self.config.port, self.config.user, schema
        );

        let options = self.connect_options(&schema);
        let mut conn = tokio::time::timeout(Duration::from_secs(seconds), options.connect())
            .await
            .map_err(|_| SupportError::TimeoutError { seconds })??;

        let selected: Option<String> = sqlx::query_scalar("SELECT DATABASE()")
            .fetch_one(&mut conn)
            .await?;

        match selected {
            Some(actual) if actual == schema => {
                debug!("Schema {} selected", schema);
                Ok(conn)
            }
            other => Err(SupportError::SchemaMismatchError {
                expected: schema,
                actual: other.unwrap_or_else(|| "NULL".to_string()),
            }),
        }
    }
}

#[async_trait]
impl DatabaseConnector for MySqlConnector {
    async fn connect_to_mysql(&self) -> bool {
        match self.try_connect().await {
            Ok(conn) => {
                if let Err(e) = conn.close().await {
                    debug!("Error while closing MySQL connection: {}", e);
                }
                info!("MySQL connection check succeeded");
                true
            }
            Err(e) => {
                warn!("Failed to connect to MySQL: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            // nothing listens on tcpmux
            port: 1,
            app_id: Some("jin".to_string()),
            server_id: Some("test".to_string()),
            connect_timeout_secs: 2,
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn test_unreachable_database_returns_false() {
        let connector = MySqlConnector::new(unreachable_config());
        assert!(!tokio_test::block_on(connector.connect_to_mysql()));
    }

    #[test]
    fn test_unresolved_schema_fails_before_network() {
        let connector = MySqlConnector::new(DatabaseConfig::default());
        let err = tokio_test::block_on(connector.try_connect()).unwrap_err();
        assert!(matches!(err, SupportError::MissingConfigError { .. }));
    }

    #[tokio::test]
    async fn test_silent_server_hits_connect_timeout() {
        // accepts connections but never sends the MySQL handshake
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let connector = MySqlConnector::new(DatabaseConfig {
            port,
            connect_timeout_secs: 1,
            ..unreachable_config()
        });

        let err = connector.try_connect().await.unwrap_err();
        assert!(matches!(err, SupportError::TimeoutError { seconds: 1 }));
        assert!(!connector.connect_to_mysql().await);

        server.abort();
    }
}
