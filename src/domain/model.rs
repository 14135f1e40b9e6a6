use crate::utils::error::SupportError;
use crate::utils::validation::validate_hex_color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Applet background colour, six lowercase hex digits (`RRGGBB`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BackgroundColor(String);

impl BackgroundColor {
    pub fn parse(value: &str) -> Result<Self, SupportError> {
        let hex = value.trim().trim_start_matches('#');
        validate_hex_color("applet.background_color", hex)?;
        Ok(Self(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self("ffffff".to_string())
    }
}

impl TryFrom<String> for BackgroundColor {
    type Error = SupportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BackgroundColor> for String {
    fn from(color: BackgroundColor) -> Self {
        color.0
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical user identifier: the username with ASCII letters lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// No trimming; non-ASCII characters are kept as given.
    pub fn from_username(username: &str) -> Self {
        Self(username.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Connection parameters handed to the applet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppletParams {
    pub ssl_prefs: bool,
    pub port: u16,
    pub background_color: String,
}
