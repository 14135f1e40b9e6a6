use crate::domain::model::{AppletParams, UserId};
use async_trait::async_trait;

/// Values the hosting web server reports to the applet.
pub trait ServerSupport: Send + Sync {
    /// Whether the preferences page is served over https.
    fn is_ssl_prefs(&self) -> bool;
    /// Port the applet connects to.
    fn port(&self) -> u16;
    /// Background colour in `RRGGBB` hex.
    fn background_color(&self) -> &str;

    fn applet_params(&self) -> AppletParams {
        AppletParams {
            ssl_prefs: self.is_ssl_prefs(),
            port: self.port(),
            background_color: self.background_color().to_string(),
        }
    }
}

#[async_trait]
pub trait DatabaseConnector: Send + Sync {
    /// Opens a connection and selects the configured schema. `false` on any failure.
    async fn connect_to_mysql(&self) -> bool;
}

/// Credential check. Returns the canonical user id on a match, `None` otherwise.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Option<UserId>;
}

impl Authenticator for Box<dyn Authenticator> {
    fn authenticate(&self, username: &str, password: &str) -> Option<UserId> {
        (**self).authenticate(username, password)
    }
}
