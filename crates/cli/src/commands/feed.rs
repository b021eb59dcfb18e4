//! `roomfeed feed` — build the feed and print it as JSON.

use anyhow::{bail, Context};
use chrono::Utc;
use roomfeed_client::RestRoomsApi;
use roomfeed_config::FeedConfig;
use roomfeed_feed::build_feed;

pub async fn run(compact: bool) -> anyhow::Result<()> {
    let config = FeedConfig::load().context("loading configuration")?;
    let Some(token) = config.token.clone() else {
        bail!("No platform token configured. Set ROOMFEED_TOKEN or add `token` to ~/.roomfeed/config.toml");
    };

    let api = RestRoomsApi::with_timeout(token, config.request_timeout_secs)?
        .with_base_url(&config.base_url);

    let feed = build_feed(&api, Utc::now()).await?;

    let json = if compact {
        serde_json::to_string(&feed)?
    } else {
        serde_json::to_string_pretty(&feed)?
    };
    println!("{json}");

    Ok(())
}
