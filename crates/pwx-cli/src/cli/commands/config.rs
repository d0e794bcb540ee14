//! Config command handlers.

use anyhow::{Context, Result};
use pwx_core::api;
use pwx_core::config::{self, Config};

pub fn path() -> Result<()> {
    println!("{}", config::paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn set_server(url: &str) -> Result<()> {
    let url = url.trim();
    api::validate_url(url)?;
    Config::save_server_url(url).context("save config")?;
    println!("Server URL set to {url}");
    Ok(())
}
