//! Headless relay host.
//!
//! Starts the notification relay on an in-memory platform and feeds it one
//! JSON command per stdin line (`click <tag>` clicks a notification).

use notification_relay::{InMemoryPlatform, Relay};
use tokio::io::BufReader;

use parada_lanche_lib::host;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    parada_lanche_lib::init_tracing();

    let config = parada_lanche_lib::init_foundation();
    tracing::info!("Starting {} notification relay (headless mode)", config.app_name);

    let platform = InMemoryPlatform::new();
    let relay = Relay::spawn(platform.clone(), config.relay_config());
    relay.install().await?;
    relay.activate().await?;

    let stdin = BufReader::new(tokio::io::stdin());
    let stats = tokio::select! {
        result = host::run_lines(stdin, &relay, &platform) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down...");
            return Ok(());
        }
    };

    tracing::info!(
        messages = stats.messages,
        clicks = stats.clicks,
        skipped = stats.skipped,
        visible = platform.notifications().len(),
        "Input closed, relay stopping"
    );
    Ok(())
}
