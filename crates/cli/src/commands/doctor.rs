//! `roomfeed doctor` — diagnose configuration and connectivity.

use anyhow::Context;
use roomfeed_client::{RestRoomsApi, RoomsApi};
use roomfeed_config::FeedConfig;

pub async fn run() -> anyhow::Result<()> {
    let config_path = FeedConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("✓ Config file: {}", config_path.display());
    } else {
        println!("✗ Config file missing: {} (run `roomfeed init`)", config_path.display());
    }

    let config = FeedConfig::load().context("loading configuration")?;
    println!("  Base URL: {}", config.base_url);

    let Some(token) = config.token.clone() else {
        println!("✗ No token configured (set ROOMFEED_TOKEN)");
        return Ok(());
    };
    println!("✓ Token configured");

    let api = RestRoomsApi::with_timeout(token, config.request_timeout_secs)?
        .with_base_url(&config.base_url);

    match api.me().await {
        Ok(person) => println!("✓ Authenticated as {}", person.display_name),
        Err(e) => println!("✗ Identity lookup failed: {e}"),
    }

    Ok(())
}
