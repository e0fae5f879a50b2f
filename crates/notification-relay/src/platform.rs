//! Host platform capability used by the relay.
//!
//! Mirrors what a background worker can do: skip the waiting phase, claim
//! open pages, show/close notifications, and enumerate/focus/open windows.

pub mod memory;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Display options for a system notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: String,
    /// Grouping key; a new notification replaces a displayed one with the same tag.
    pub tag: String,
    /// Alert the user again when replacing a same-tag notification.
    pub renotify: bool,
}

/// A notification currently held by the platform's notification store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub tag: String,
}

/// An open application window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowClient {
    pub id: String,
    pub url: String,
    /// Whether the relay currently controls this page.
    pub controlled: bool,
    pub focused: bool,
}

pub trait RelayPlatform: Send + Sync + 'static {
    /// Let a newly installed relay activate without waiting for the old one.
    fn skip_waiting(&self) -> impl Future<Output = Result<()>> + Send;

    /// Take control of every open page.
    fn claim_clients(&self) -> impl Future<Output = Result<()>> + Send;

    fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> impl Future<Output = Result<()>> + Send;

    fn close_notification(
        &self,
        notification: &DisplayedNotification,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Application windows, optionally including pages the relay does not control.
    fn match_all_windows(
        &self,
        include_uncontrolled: bool,
    ) -> impl Future<Output = Result<Vec<WindowClient>>> + Send;

    fn focus(&self, client: &WindowClient) -> impl Future<Output = Result<()>> + Send;

    fn open_window(&self, url: &str) -> impl Future<Output = Result<()>> + Send;
}
