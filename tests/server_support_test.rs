use applet_server_support::config::DatabaseConfig;
use applet_server_support::utils::validation::Validate;
use applet_server_support::{
    Authenticator, DatabaseConnector, HostSupport, MySqlConnector, PermissiveAuthenticator,
    ServerSupport, SupportConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn unreachable_database() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        app_id: Some("jin".to_string()),
        server_id: Some("integration".to_string()),
        connect_timeout_secs: 2,
        ..DatabaseConfig::default()
    }
}

#[test]
fn test_default_applet_parameters() {
    let support = HostSupport::from_config(SupportConfig::default());

    assert_eq!(support.port(), 5001);
    assert_eq!(support.background_color(), "ffffff");
    assert!(!support.is_ssl_prefs());

    let json = serde_json::to_value(support.applet_params()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "ssl_prefs": false,
            "port": 5001,
            "background_color": "ffffff"
        })
    );
}

#[test]
fn test_accessors_are_stable_across_calls() {
    let config = SupportConfig::default();
    for _ in 0..3 {
        assert_eq!(config.port(), 5001);
        assert_eq!(config.background_color(), "ffffff");
        assert!(!config.is_ssl_prefs());
    }
}

#[test]
fn test_authenticate_returns_lowercased_username() {
    let auth = PermissiveAuthenticator;
    assert_eq!(auth.authenticate("Alice", "x").unwrap().as_str(), "alice");

    let support = HostSupport::from_config(SupportConfig::default());
    assert_eq!(
        support.authenticate("Alice", "x").map(|id| id.to_string()),
        Some("alice".to_string())
    );
}

#[tokio::test]
async fn test_connect_to_mysql_false_when_unreachable() {
    let connector = MySqlConnector::new(unreachable_database());
    assert!(!connector.connect_to_mysql().await);
}

#[tokio::test]
async fn test_host_support_reports_unreachable_database() {
    let config = SupportConfig {
        database: unreachable_database(),
        ..SupportConfig::default()
    };
    let support = HostSupport::from_config(config);
    assert!(!support.connect_to_mysql().await);
}

#[tokio::test]
async fn test_connect_to_mysql_false_when_schema_unresolved() {
    let connector = MySqlConnector::new(DatabaseConfig::default());
    assert!(!connector.connect_to_mysql().await);
}

#[test]
fn test_full_config_file() {
    std::env::set_var("SERVER_SUPPORT_IT_APP_ID", "jin");

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[applet]
ssl_prefs = true
port = 5002
background_color = "0A0A0A"

[database]
host = "mysql.example.org"
user = "jin"
app_id = "${{SERVER_SUPPORT_IT_APP_ID}}"
server_id = "fics"
connect_timeout_secs = 10
"#
    )
    .unwrap();

    let config = SupportConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert!(config.is_ssl_prefs());
    assert_eq!(config.port(), 5002);
    assert_eq!(config.background_color(), "0a0a0a");
    assert_eq!(config.database.schema_name().unwrap(), "jin_fics");

    std::env::remove_var("SERVER_SUPPORT_IT_APP_ID");
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = SupportConfig::from_file("/nonexistent/applet-support.toml").unwrap_err();
    assert!(matches!(
        err,
        applet_server_support::SupportError::IoError(_)
    ));
}
