//! Background notification relay.
//!
//! A single process-wide actor that accepts `SHOW_NOTIFICATION` commands from
//! any foreground page, shows system notifications, and turns notification
//! clicks into a focused (or freshly opened) application window.

pub mod command;
pub mod config;
pub mod platform;
pub mod relay;

pub use command::{NotificationCommand, SHOW_NOTIFICATION};
pub use config::RelayConfig;
pub use platform::memory::InMemoryPlatform;
pub use platform::{DisplayedNotification, NotificationOptions, RelayPlatform, WindowClient};
pub use relay::{Relay, RelayHandle, RelayLifecycle};

/// Errors that can occur while relaying notifications.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Relay is not running")]
    Closed,
}

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;
