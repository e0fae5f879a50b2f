//! Relay actor and its command channel.
//!
//! The actor owns the platform and processes one event at a time. Every
//! event carries a reply channel so callers can await completion, the way a
//! worker holds its event open until the work is done.

#[cfg(test)]
mod tests;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot, watch};

use crate::command::NotificationCommand;
use crate::config::RelayConfig;
use crate::platform::{DisplayedNotification, RelayPlatform};
use crate::{RelayError, Result};

/// Maximum number of queued relay events.
const QUEUE_CAPACITY: usize = 100;

/// Install/activation progress of the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayLifecycle {
    Parsed,
    Installed,
    Activated,
}

type Reply = oneshot::Sender<Result<()>>;

enum RelayEvent {
    Install(Reply),
    Activate(Reply),
    Message(Value, Reply),
    NotificationClick(DisplayedNotification, Reply),
}

/// The background relay actor.
pub struct Relay<P: RelayPlatform> {
    platform: P,
    config: RelayConfig,
    lifecycle: watch::Sender<RelayLifecycle>,
}

/// Cloneable sender side of the relay. The actor stops once every handle is dropped.
#[derive(Clone)]
pub struct RelayHandle {
    tx: mpsc::Sender<RelayEvent>,
    lifecycle: watch::Receiver<RelayLifecycle>,
}

impl<P: RelayPlatform> Relay<P> {
    /// Spawn the relay actor on the current runtime.
    pub fn spawn(platform: P, config: RelayConfig) -> RelayHandle {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let (lifecycle_tx, lifecycle_rx) = watch::channel(RelayLifecycle::Parsed);
        let relay = Self {
            platform,
            config,
            lifecycle: lifecycle_tx,
        };
        tokio::spawn(relay.run(rx));
        tracing::info!("Notification relay started (capacity={QUEUE_CAPACITY})");
        RelayHandle {
            tx,
            lifecycle: lifecycle_rx,
        }
    }

    async fn run(self, mut rx: mpsc::Receiver<RelayEvent>) {
        while let Some(event) = rx.recv().await {
            let (result, reply) = match event {
                RelayEvent::Install(reply) => (self.install().await, reply),
                RelayEvent::Activate(reply) => (self.activate().await, reply),
                RelayEvent::Message(message, reply) => (self.handle_message(&message).await, reply),
                RelayEvent::NotificationClick(notification, reply) => {
                    (self.handle_click(&notification).await, reply)
                }
            };
            if let Err(e) = &result {
                tracing::warn!(error = %e, "Relay event failed");
            }
            let _ = reply.send(result);
        }
        tracing::info!("Notification relay stopped");
    }

    async fn install(&self) -> Result<()> {
        self.platform.skip_waiting().await?;
        self.lifecycle.send_replace(RelayLifecycle::Installed);
        tracing::info!("Relay installed, waiting skipped");
        Ok(())
    }

    async fn activate(&self) -> Result<()> {
        self.platform.claim_clients().await?;
        self.lifecycle.send_replace(RelayLifecycle::Activated);
        tracing::info!("Relay activated, clients claimed");
        Ok(())
    }

    async fn handle_message(&self, message: &Value) -> Result<()> {
        let Some(command) = NotificationCommand::parse(message) else {
            return Ok(());
        };
        let (title, options) = command.resolve(&self.config);
        tracing::debug!(tag = %options.tag, "Showing notification");
        self.platform.show_notification(&title, &options).await
    }

    /// Close the clicked notification, then focus the first window or open one.
    async fn handle_click(&self, notification: &DisplayedNotification) -> Result<()> {
        self.platform.close_notification(notification).await?;

        let windows = self.platform.match_all_windows(true).await?;
        match windows.first() {
            Some(client) => self.platform.focus(client).await,
            None => self.platform.open_window(&self.config.root_url).await,
        }
    }
}

impl RelayHandle {
    async fn dispatch(&self, build: impl FnOnce(Reply) -> RelayEvent) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RelayError::Closed)?;
        reply_rx.await.map_err(|_| RelayError::Closed)?
    }

    pub async fn install(&self) -> Result<()> {
        self.dispatch(RelayEvent::Install).await
    }

    pub async fn activate(&self) -> Result<()> {
        self.dispatch(RelayEvent::Activate).await
    }

    /// Post a foreground message. Unrecognized messages complete as no-ops.
    pub async fn post_message(&self, message: Value) -> Result<()> {
        self.dispatch(|reply| RelayEvent::Message(message, reply)).await
    }

    /// Deliver a click on a displayed notification.
    pub async fn notification_click(&self, notification: DisplayedNotification) -> Result<()> {
        self.dispatch(|reply| RelayEvent::NotificationClick(notification, reply))
            .await
    }

    pub fn lifecycle(&self) -> RelayLifecycle {
        *self.lifecycle.borrow()
    }

    pub fn is_running(&self) -> bool {
        !self.tx.is_closed()
    }
}
