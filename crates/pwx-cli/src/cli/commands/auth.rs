//! Auth command handlers.

use anyhow::{Context, Result};
use pwx_core::api::{self, ApiClient};
use pwx_core::config::Config;
use pwx_core::session;

use super::read_password;

pub async fn login(config: &Config, username: &str) -> Result<()> {
    let username = username.trim();
    if username.is_empty() {
        anyhow::bail!("Username must not be empty");
    }
    let password = read_password("Password: ")?;

    let client = ApiClient::new(api::resolve_base_url(config)?);
    let session = client.login(username, &password).await.context("log in")?;

    session::save(&session).context("save session")?;
    println!("Logged in as {}", session.user.username);
    Ok(())
}

pub async fn register(config: &Config, username: &str) -> Result<()> {
    let username = username.trim();
    if username.is_empty() {
        anyhow::bail!("Username must not be empty");
    }
    let password = read_password("Password: ")?;
    let confirm = read_password("Confirm password: ")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let client = ApiClient::new(api::resolve_base_url(config)?);
    let session = client
        .register(username, &password)
        .await
        .context("register")?;

    session::save(&session).context("save session")?;
    println!("Registered as {}", session.user.username);
    Ok(())
}

pub fn logout() -> Result<()> {
    if session::clear().context("remove session file")? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}
