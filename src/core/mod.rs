pub mod support;

pub use crate::domain::model::{AppletParams, BackgroundColor, UserId};
pub use crate::domain::ports::{Authenticator, DatabaseConnector, ServerSupport};
pub use crate::utils::error::Result;
pub use support::HostSupport;
