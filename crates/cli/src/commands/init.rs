//! `roomfeed init` — write a default config file.

use anyhow::Context;
use roomfeed_config::FeedConfig;

pub fn run() -> anyhow::Result<()> {
    let config_dir = FeedConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating {}", config_dir.display()))?;
    std::fs::write(&config_path, FeedConfig::default_toml())
        .with_context(|| format!("writing {}", config_path.display()))?;

    println!("Wrote default config to {}", config_path.display());
    println!("Add your platform token there, or set ROOMFEED_TOKEN.");
    Ok(())
}
