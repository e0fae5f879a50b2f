//! Runtime application configuration loaded from environment overrides.

use notification_relay::RelayConfig;
use notification_relay::config::{DEFAULT_NOTIFICATION_TAG, DEFAULT_NOTIFICATION_TITLE, DEFAULT_ROOT_URL};
use qr_scanner::ScannerConfig;
use store_identity::StoreIdentity;

use super::validation::validate_setting;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub store_name: Option<String>,
    pub notification_tag: String,
    pub root_url: String,
    pub scanner_fps: u32,
    pub scanner_qrbox: u32,
    pub scanner_remember_camera: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_NOTIFICATION_TITLE.into(),
            store_name: None,
            notification_tag: DEFAULT_NOTIFICATION_TAG.into(),
            root_url: DEFAULT_ROOT_URL.into(),
            scanner_fps: 10,
            scanner_qrbox: 250,
            scanner_remember_camera: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through a key lookup. Unset or invalid values keep
    /// their defaults; invalid ones are logged.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?;
            match validate_setting(key, &value) {
                Ok(()) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring {key}={value:?}: {e}");
                    None
                }
            }
        };

        let defaults = Self::default();
        Self {
            app_name: g("PARADA_APP_NAME").unwrap_or(defaults.app_name),
            store_name: g("PARADA_STORE_NAME"),
            notification_tag: g("PARADA_NOTIFICATION_TAG").unwrap_or(defaults.notification_tag),
            root_url: g("PARADA_ROOT_URL").unwrap_or(defaults.root_url),
            scanner_fps: parse_u32(g("PARADA_SCANNER_FPS"), defaults.scanner_fps),
            scanner_qrbox: parse_u32(g("PARADA_SCANNER_QRBOX"), defaults.scanner_qrbox),
            scanner_remember_camera: g("PARADA_SCANNER_REMEMBER_CAMERA")
                .map(|v| v == "true")
                .unwrap_or(defaults.scanner_remember_camera),
        }
    }

    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            default_title: self.app_name.clone(),
            default_tag: self.notification_tag.clone(),
            root_url: self.root_url.clone(),
        }
    }

    pub fn scanner_config(&self) -> ScannerConfig {
        ScannerConfig::new()
            .with_fps(self.scanner_fps)
            .with_qrbox(self.scanner_qrbox)
            .with_remember_last_used_camera(self.scanner_remember_camera)
    }

    pub fn store_identity(&self) -> StoreIdentity {
        StoreIdentity::from_name(self.store_name.as_deref())
    }
}

fn parse_u32(value: Option<String>, default: u32) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::load(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = load(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.relay_config(), RelayConfig::default());
        assert_eq!(config.scanner_config(), ScannerConfig::default());
        assert_eq!(config.store_identity(), StoreIdentity::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = load(&[
            ("PARADA_APP_NAME", "Lanchonete Central"),
            ("PARADA_STORE_NAME", " Casa do Pastel "),
            ("PARADA_NOTIFICATION_TAG", "orders"),
            ("PARADA_ROOT_URL", "/pedidos"),
            ("PARADA_SCANNER_FPS", "15"),
            ("PARADA_SCANNER_REMEMBER_CAMERA", "false"),
        ]);

        let relay = config.relay_config();
        assert_eq!(relay.default_title, "Lanchonete Central");
        assert_eq!(relay.default_tag, "orders");
        assert_eq!(relay.root_url, "/pedidos");

        let scanner = config.scanner_config();
        assert_eq!(scanner.fps, 15);
        assert!(!scanner.remember_last_used_camera);

        let identity = config.store_identity();
        assert_eq!(identity.name, "Casa do Pastel");
        assert_eq!(identity.initials, "CP");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = load(&[
            ("PARADA_ROOT_URL", "pedidos"),
            ("PARADA_SCANNER_FPS", "500"),
            ("PARADA_NOTIFICATION_TAG", "two words"),
            ("PARADA_STORE_NAME", "   "),
        ]);
        assert_eq!(config, AppConfig::default());
    }
}
