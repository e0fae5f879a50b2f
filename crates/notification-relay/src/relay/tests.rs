use serde_json::json;

use super::*;
use crate::platform::memory::InMemoryPlatform;

fn spawn() -> (InMemoryPlatform, RelayHandle) {
    let platform = InMemoryPlatform::new();
    let handle = Relay::spawn(platform.clone(), RelayConfig::default());
    (platform, handle)
}

#[tokio::test]
async fn install_and_activate_take_control() {
    let (platform, relay) = spawn();
    let page = platform.add_window("/menu", false);
    assert_eq!(relay.lifecycle(), RelayLifecycle::Parsed);

    relay.install().await.unwrap();
    assert!(platform.skipped_waiting());
    assert_eq!(relay.lifecycle(), RelayLifecycle::Installed);

    relay.activate().await.unwrap();
    assert!(platform.claimed());
    assert_eq!(relay.lifecycle(), RelayLifecycle::Activated);
    let windows = platform.windows();
    assert!(windows.iter().all(|w| w.controlled), "page {} not claimed", page.id);
}

#[tokio::test]
async fn show_notification_uses_defaults() {
    let (platform, relay) = spawn();

    relay
        .post_message(json!({ "type": "SHOW_NOTIFICATION" }))
        .await
        .unwrap();

    let shown = platform.notifications();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Parada do Lanche");
    assert_eq!(shown[0].body, "");
    assert_eq!(shown[0].tag, "parada-notification");
}

#[tokio::test]
async fn same_tag_replaces_and_realerts() {
    let (platform, relay) = spawn();

    relay
        .post_message(json!({ "type": "SHOW_NOTIFICATION", "tag": "x", "body": "first" }))
        .await
        .unwrap();
    relay
        .post_message(json!({ "type": "SHOW_NOTIFICATION", "tag": "x", "body": "second" }))
        .await
        .unwrap();

    let tagged: Vec<_> = platform
        .notifications()
        .into_iter()
        .filter(|n| n.tag == "x")
        .collect();
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].body, "second");
    assert_eq!(platform.alert_count(), 2);
}

#[tokio::test]
async fn unrecognized_messages_have_no_effect() {
    let (platform, relay) = spawn();
    platform.add_window("/", true);

    for message in [
        json!({ "type": "CLEAR_CART" }),
        json!({ "tag": "x" }),
        json!(42),
        json!({ "type": "SHOW_NOTIFICATION", "body": ["not", "text"] }),
    ] {
        relay.post_message(message).await.unwrap();
    }

    assert!(platform.notifications().is_empty());
    assert_eq!(platform.alert_count(), 0);
    assert!(platform.opened_urls().is_empty());
    assert!(platform.focused_window().is_none());
}

#[tokio::test]
async fn click_without_windows_opens_root() {
    let (platform, relay) = spawn();
    relay
        .post_message(json!({ "type": "SHOW_NOTIFICATION", "tag": "order" }))
        .await
        .unwrap();
    let notification = platform.notification_by_tag("order").unwrap();

    relay.notification_click(notification).await.unwrap();

    assert!(platform.notifications().is_empty());
    assert_eq!(platform.opened_urls(), vec!["/".to_string()]);
    assert_eq!(platform.windows().len(), 1);
}

#[tokio::test]
async fn click_focuses_first_window_including_uncontrolled() {
    let (platform, relay) = spawn();
    let first = platform.add_window("/checkout", false);
    platform.add_window("/menu", true);
    relay
        .post_message(json!({ "type": "SHOW_NOTIFICATION" }))
        .await
        .unwrap();
    let notification = platform.notifications().remove(0);

    relay.notification_click(notification).await.unwrap();

    assert!(platform.opened_urls().is_empty());
    assert_eq!(platform.focused_window().map(|w| w.id), Some(first.id));
    assert_eq!(platform.windows().iter().filter(|w| w.focused).count(), 1);
    assert!(platform.notifications().is_empty());
}

#[tokio::test]
async fn window_failures_propagate_after_close() {
    let (platform, relay) = spawn();
    platform.set_deny_window_operations(true);
    relay
        .post_message(json!({ "type": "SHOW_NOTIFICATION", "tag": "t" }))
        .await
        .unwrap();
    let notification = platform.notification_by_tag("t").unwrap();

    let err = relay.notification_click(notification).await.unwrap_err();

    assert!(matches!(err, RelayError::Platform(_)));
    assert!(platform.notifications().is_empty());
    assert!(relay.is_running());
}

#[tokio::test]
async fn handles_share_one_actor() {
    let (platform, relay) = spawn();
    let other = relay.clone();

    let a = relay.post_message(json!({ "type": "SHOW_NOTIFICATION", "tag": "a" }));
    let b = other.post_message(json!({ "type": "SHOW_NOTIFICATION", "tag": "b" }));
    let (ra, rb) = tokio::join!(a, b);
    ra.unwrap();
    rb.unwrap();

    assert_eq!(platform.notifications().len(), 2);
}
