use crate::domain::model::BackgroundColor;
use crate::domain::ports::ServerSupport;
use crate::utils::error::{Result, SupportError};
use crate::utils::validation::{
    validate_identifier, validate_non_empty_string, validate_port, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const APP_ID_TOKEN: &str = "@APP.ID@";
pub const SERVER_ID_TOKEN: &str = "@SERVER.ID@";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    pub applet: AppletSettings,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppletSettings {
    pub ssl_prefs: bool,
    pub port: u16,
    pub background_color: BackgroundColor,
}

impl Default for AppletSettings {
    fn default() -> Self {
        Self {
            ssl_prefs: false,
            port: 5001,
            background_color: BackgroundColor::default(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    pub schema_template: String,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "jin".to_string(),
            password: String::new(),
            app_id: None,
            server_id: None,
            schema_template: format!("{}_{}", APP_ID_TOKEN, SERVER_ID_TOKEN),
            connect_timeout_secs: 5,
        }
    }
}

// 密碼不可出現在日誌中
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("app_id", &self.app_id)
            .field("server_id", &self.server_id)
            .field("schema_template", &self.schema_template)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    /// 以部署時的 app id / server id 代入 schema 樣板
    pub fn schema_name(&self) -> Result<String> {
        let mut name = self.schema_template.clone();

        for (token, field, value) in [
            (APP_ID_TOKEN, "database.app_id", &self.app_id),
            (SERVER_ID_TOKEN, "database.server_id", &self.server_id),
        ] {
            if !name.contains(token) {
                continue;
            }
            let value = value
                .as_deref()
                .ok_or_else(|| SupportError::MissingConfigError {
                    field: field.to_string(),
                })?;
            name = name.replace(token, value);
        }

        let leftover = Regex::new(r"@[A-Za-z0-9_.]+@").map_err(|e| SupportError::ConfigError {
            message: format!("Invalid token pattern: {}", e),
        })?;
        if let Some(token) = leftover.find(&name) {
            return Err(SupportError::ConfigError {
                message: format!(
                    "Unresolved token {} in database.schema_template",
                    token.as_str()
                ),
            });
        }

        validate_identifier("database.schema_template", &name)?;
        Ok(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Accepts every username. Placeholder until the host wires real credentials.
    #[default]
    Permissive,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub mode: AuthMode,
}

impl SupportConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DB_PASSWORD})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SupportError::ConfigError {
            message: format!("Invalid env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_port("applet.port", self.applet.port)?;

        validate_non_empty_string("database.host", &self.database.host)?;
        validate_port("database.port", self.database.port)?;
        validate_non_empty_string("database.user", &self.database.user)?;
        validate_range(
            "database.connect_timeout_secs",
            self.database.connect_timeout_secs,
            1,
            300,
        )?;
        self.database.schema_name()?;

        Ok(())
    }
}

impl Validate for SupportConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl ServerSupport for AppletSettings {
    fn is_ssl_prefs(&self) -> bool {
        self.ssl_prefs
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn background_color(&self) -> &str {
        self.background_color.as_str()
    }
}

impl ServerSupport for SupportConfig {
    fn is_ssl_prefs(&self) -> bool {
        self.applet.is_ssl_prefs()
    }

    fn port(&self) -> u16 {
        self.applet.port()
    }

    fn background_color(&self) -> &str {
        self.applet.background_color()
    }
}
