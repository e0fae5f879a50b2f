//! Line-oriented bridge from a foreground process into the relay.
//!
//! Each input line is either a JSON message posted to the relay, or
//! `click <tag>` to click the displayed notification with that tag.

use anyhow::Context;
use notification_relay::{InMemoryPlatform, RelayHandle};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One parsed input line.
#[derive(Debug, PartialEq)]
pub enum HostLine {
    Message(Value),
    Click(String),
    Blank,
}

/// Counters reported when the input ends.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HostStats {
    pub messages: usize,
    pub clicks: usize,
    pub skipped: usize,
}

pub fn parse_line(line: &str) -> anyhow::Result<HostLine> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(HostLine::Blank);
    }
    if let Some(tag) = line.strip_prefix("click ") {
        return Ok(HostLine::Click(tag.trim().to_string()));
    }
    let value = serde_json::from_str(line).context("invalid JSON message")?;
    Ok(HostLine::Message(value))
}

/// Feed lines into the relay until the reader is exhausted.
pub async fn run_lines<R>(
    reader: R,
    relay: &RelayHandle,
    platform: &InMemoryPlatform,
) -> anyhow::Result<HostStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = HostStats::default();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(HostLine::Blank) => {}
            Ok(HostLine::Message(message)) => {
                stats.messages += 1;
                if let Err(e) = relay.post_message(message).await {
                    tracing::warn!("Message not relayed: {e}");
                }
            }
            Ok(HostLine::Click(tag)) => {
                let Some(notification) = platform.notification_by_tag(&tag) else {
                    tracing::warn!(tag = %tag, "No displayed notification with this tag");
                    stats.skipped += 1;
                    continue;
                };
                stats.clicks += 1;
                if let Err(e) = relay.notification_click(notification).await {
                    tracing::warn!("Notification click failed: {e}");
                }
            }
            Err(e) => {
                tracing::warn!("Skipping line: {e:#}");
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}
