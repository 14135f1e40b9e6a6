use crate::adapters::MySqlConnector;
use crate::config::{AppletSettings, SupportConfig};
use crate::domain::model::UserId;
use crate::domain::ports::{Authenticator, DatabaseConnector, ServerSupport};

/// The set of hooks a web host provides for the applet: connection
/// parameters, the preferences database and user authentication.
pub struct HostSupport<D: DatabaseConnector, A: Authenticator> {
    settings: AppletSettings,
    database: D,
    authenticator: A,
}

impl<D: DatabaseConnector, A: Authenticator> HostSupport<D, A> {
    pub fn new(settings: AppletSettings, database: D, authenticator: A) -> Self {
        Self {
            settings,
            database,
            authenticator,
        }
    }

    pub fn settings(&self) -> &AppletSettings {
        &self.settings
    }

    pub async fn connect_to_mysql(&self) -> bool {
        self.database.connect_to_mysql().await
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<UserId> {
        let user_id = self.authenticator.authenticate(username, password);
        match &user_id {
            Some(id) => tracing::info!("Authenticated user {}", id),
            None => tracing::info!("Authentication rejected for {:?}", username),
        }
        user_id
    }
}

impl<D: DatabaseConnector, A: Authenticator> ServerSupport for HostSupport<D, A> {
    fn is_ssl_prefs(&self) -> bool {
        self.settings.is_ssl_prefs()
    }

    fn port(&self) -> u16 {
        self.settings.port()
    }

    fn background_color(&self) -> &str {
        self.settings.background_color()
    }
}

impl HostSupport<MySqlConnector, Box<dyn Authenticator>> {
    pub fn from_config(config: SupportConfig) -> Self {
        let authenticator = config.auth.build();
        Self::new(
            config.applet,
            MySqlConnector::new(config.database),
            authenticator,
        )
    }
}
