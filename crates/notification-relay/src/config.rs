//! Relay defaults.

/// Title used when a command carries none.
pub const DEFAULT_NOTIFICATION_TITLE: &str = "Parada do Lanche";

/// Tag used when a command carries none.
pub const DEFAULT_NOTIFICATION_TAG: &str = "parada-notification";

/// Path opened when a click finds no application window.
pub const DEFAULT_ROOT_URL: &str = "/";

/// Defaults applied to incoming commands and click routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub default_title: String,
    pub default_tag: String,
    pub root_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_NOTIFICATION_TITLE.into(),
            default_tag: DEFAULT_NOTIFICATION_TAG.into(),
            root_url: DEFAULT_ROOT_URL.into(),
        }
    }
}
