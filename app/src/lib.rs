pub mod config;
pub mod host;

use tracing_subscriber::EnvFilter;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Install the global tracing subscriber (`RUST_LOG` controls filtering).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Load environment and runtime config.
pub fn init_foundation() -> AppConfig {
    load_dotenv();

    let config = AppConfig::from_env();
    let identity = config.store_identity();
    tracing::info!(
        store = %identity.name,
        initials = %identity.initials,
        root_url = %config.root_url,
        "Settings loaded"
    );
    config
}
