//! Foreground → relay command parsing.
//!
//! Wire shape: `{ "type": "SHOW_NOTIFICATION", "title"?, "body"?, "tag"? }`.
//! Anything else, including malformed payloads, parses to `None`.

use serde::Deserialize;
use serde_json::Value;

use crate::config::RelayConfig;
use crate::platform::NotificationOptions;

/// The only command type the relay acts on.
pub const SHOW_NOTIFICATION: &str = "SHOW_NOTIFICATION";

#[derive(Debug, Deserialize)]
struct RawCommand {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    body: Option<String>,
    tag: Option<String>,
}

/// A recognized `SHOW_NOTIFICATION` command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationCommand {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tag: Option<String>,
}

impl NotificationCommand {
    /// Parse a posted message. Unrecognized or malformed messages yield `None`.
    pub fn parse(message: &Value) -> Option<Self> {
        let raw = RawCommand::deserialize(message).ok()?;
        if raw.kind.as_deref() != Some(SHOW_NOTIFICATION) {
            return None;
        }
        Some(Self {
            title: raw.title,
            body: raw.body,
            tag: raw.tag,
        })
    }

    /// Resolve the title and display options, filling in defaults.
    pub fn resolve(&self, config: &RelayConfig) -> (String, NotificationOptions) {
        let title = non_empty(&self.title).unwrap_or(&config.default_title);
        let tag = non_empty(&self.tag).unwrap_or(&config.default_tag);
        let options = NotificationOptions {
            body: self.body.clone().unwrap_or_default(),
            tag: tag.to_string(),
            renotify: true,
        };
        (title.to_string(), options)
    }
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_show_notification() {
        let cmd = NotificationCommand::parse(&json!({
            "type": "SHOW_NOTIFICATION",
            "title": "Pedido pronto",
            "body": "Retire no balcão",
            "tag": "order-42",
        }))
        .unwrap();
        assert_eq!(cmd.title.as_deref(), Some("Pedido pronto"));
        assert_eq!(cmd.body.as_deref(), Some("Retire no balcão"));
        assert_eq!(cmd.tag.as_deref(), Some("order-42"));
    }

    #[test]
    fn test_parse_ignores_other_messages() {
        let cases = vec![
            json!({ "type": "PING" }),
            json!({ "title": "no type" }),
            json!({ "type": "show_notification" }),
            json!({ "type": "SHOW_NOTIFICATION", "title": 42 }),
            json!("SHOW_NOTIFICATION"),
            json!(null),
            json!([1, 2, 3]),
        ];
        for message in cases {
            assert_eq!(NotificationCommand::parse(&message), None, "message {message}");
        }
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let config = RelayConfig::default();
        let cmd = NotificationCommand::parse(&json!({ "type": "SHOW_NOTIFICATION", "title": "" }))
            .unwrap();
        let (title, options) = cmd.resolve(&config);
        assert_eq!(title, "Parada do Lanche");
        assert_eq!(options.body, "");
        assert_eq!(options.tag, "parada-notification");
        assert!(options.renotify);
    }

    #[test]
    fn test_resolve_keeps_given_values() {
        let cmd = NotificationCommand {
            title: Some("Novo pedido".into()),
            body: Some("Mesa 3".into()),
            tag: Some("orders".into()),
        };
        let (title, options) = cmd.resolve(&RelayConfig::default());
        assert_eq!(title, "Novo pedido");
        assert_eq!(options.body, "Mesa 3");
        assert_eq!(options.tag, "orders");
    }
}
