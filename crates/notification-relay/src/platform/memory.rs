//! In-process platform backed by plain collections.
//!
//! Keeps a tag-keyed notification store and a list of window clients, and
//! logs every operation. Used by the headless host and the tests.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{DisplayedNotification, NotificationOptions, RelayPlatform, WindowClient};
use crate::{RelayError, Result};

#[derive(Debug, Default)]
struct PlatformState {
    notifications: Vec<DisplayedNotification>,
    windows: Vec<WindowClient>,
    opened_urls: Vec<String>,
    alert_count: usize,
    skipped_waiting: bool,
    claimed: bool,
    deny_window_operations: bool,
}

/// Cloneable handle to a shared in-memory platform.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlatform {
    state: Arc<Mutex<PlatformState>>,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PlatformState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register an already-open application window.
    pub fn add_window(&self, url: &str, controlled: bool) -> WindowClient {
        let client = WindowClient {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.to_string(),
            controlled,
            focused: false,
        };
        self.lock().windows.push(client.clone());
        client
    }

    /// Make focus/open fail, as when the host refuses window operations.
    pub fn set_deny_window_operations(&self, deny: bool) {
        self.lock().deny_window_operations = deny;
    }

    pub fn notifications(&self) -> Vec<DisplayedNotification> {
        self.lock().notifications.clone()
    }

    pub fn notification_by_tag(&self, tag: &str) -> Option<DisplayedNotification> {
        self.lock()
            .notifications
            .iter()
            .find(|n| n.tag == tag)
            .cloned()
    }

    pub fn windows(&self) -> Vec<WindowClient> {
        self.lock().windows.clone()
    }

    pub fn focused_window(&self) -> Option<WindowClient> {
        self.lock().windows.iter().find(|w| w.focused).cloned()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.lock().opened_urls.clone()
    }

    /// How many times the user was alerted (sound/vibration/banner).
    pub fn alert_count(&self) -> usize {
        self.lock().alert_count
    }

    pub fn skipped_waiting(&self) -> bool {
        self.lock().skipped_waiting
    }

    pub fn claimed(&self) -> bool {
        self.lock().claimed
    }

    fn show(&self, title: &str, options: &NotificationOptions) {
        let mut state = self.lock();
        let replaced = match state.notifications.iter().position(|n| n.tag == options.tag) {
            Some(index) => {
                state.notifications.remove(index);
                true
            }
            None => false,
        };
        if !replaced || options.renotify {
            state.alert_count += 1;
        }
        let notification = DisplayedNotification {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            body: options.body.clone(),
            tag: options.tag.clone(),
        };
        tracing::info!(tag = %notification.tag, replaced, "Notification shown");
        state.notifications.push(notification);
    }

    fn focus_client(&self, client: &WindowClient) -> Result<()> {
        let mut state = self.lock();
        if state.deny_window_operations {
            return Err(RelayError::Platform("window focus not allowed".into()));
        }
        if !state.windows.iter().any(|w| w.id == client.id) {
            return Err(RelayError::Platform(format!("window {} is gone", client.id)));
        }
        for window in state.windows.iter_mut() {
            window.focused = window.id == client.id;
        }
        tracing::info!(id = %client.id, url = %client.url, "Window focused");
        Ok(())
    }

    fn open(&self, url: &str) -> Result<()> {
        let mut state = self.lock();
        if state.deny_window_operations {
            return Err(RelayError::Platform("opening windows not allowed".into()));
        }
        let controlled = state.claimed;
        for window in state.windows.iter_mut() {
            window.focused = false;
        }
        state.windows.push(WindowClient {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.to_string(),
            controlled,
            focused: true,
        });
        state.opened_urls.push(url.to_string());
        tracing::info!(url = %url, "Window opened");
        Ok(())
    }
}

impl RelayPlatform for InMemoryPlatform {
    async fn skip_waiting(&self) -> Result<()> {
        self.lock().skipped_waiting = true;
        Ok(())
    }

    async fn claim_clients(&self) -> Result<()> {
        let mut state = self.lock();
        state.claimed = true;
        for window in state.windows.iter_mut() {
            window.controlled = true;
        }
        Ok(())
    }

    async fn show_notification(&self, title: &str, options: &NotificationOptions) -> Result<()> {
        self.show(title, options);
        Ok(())
    }

    async fn close_notification(&self, notification: &DisplayedNotification) -> Result<()> {
        self.lock()
            .notifications
            .retain(|n| n.id != notification.id);
        Ok(())
    }

    async fn match_all_windows(&self, include_uncontrolled: bool) -> Result<Vec<WindowClient>> {
        Ok(self
            .lock()
            .windows
            .iter()
            .filter(|w| include_uncontrolled || w.controlled)
            .cloned()
            .collect())
    }

    async fn focus(&self, client: &WindowClient) -> Result<()> {
        self.focus_client(client)
    }

    async fn open_window(&self, url: &str) -> Result<()> {
        self.open(url)
    }
}
