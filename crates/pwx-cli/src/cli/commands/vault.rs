//! Vault command handlers.

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table};
use pwx_core::api::{self, ApiClient, EntryDraft, EntryPatch};
use pwx_core::config::Config;
use pwx_core::session::{self, Session};

use super::{read_line, read_password};

/// Loads the saved session or fails with a hint to log in.
fn require_session() -> Result<Session> {
    session::load()
        .context("read session file")?
        .context("Not logged in. Run `pwx login` first.")
}

/// Builds an authenticated client for the configured server.
fn client(config: &Config, session: &Session) -> Result<ApiClient> {
    let base_url = api::resolve_base_url(config)?;
    tracing::debug!(base_url = %base_url, "resolved server url");
    Ok(ApiClient::with_token(base_url, session.token.clone()))
}

pub async fn list(config: &Config) -> Result<()> {
    let session = require_session()?;
    let entries = client(config, &session)?
        .list_entries()
        .await
        .context("fetch passwords")?;

    if entries.is_empty() {
        println!("No passwords found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["ID", "Host", "Login", "Password", "Leaked"]);
    for entry in &entries {
        table.add_row([
            entry.id.to_string(),
            entry.host.clone(),
            entry.login.clone(),
            entry.hash_pass.clone(),
            (if entry.is_leaked { "yes" } else { "no" }).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn add(config: &Config, host: &str, login: &str) -> Result<()> {
    let session = require_session()?;
    let password = read_password("Password: ")?;

    let draft = EntryDraft {
        host: host.to_string(),
        login: login.to_string(),
        hash_pass: password,
    };
    let entry = client(config, &session)?
        .add_entry(&draft)
        .await
        .context("save password")?;

    println!("Added entry {} for {}", entry.id, entry.host);
    Ok(())
}

pub async fn update(
    config: &Config,
    id: i64,
    host: Option<String>,
    login: Option<String>,
    password: bool,
) -> Result<()> {
    let hash_pass = if password {
        Some(read_password("New password: ")?)
    } else {
        None
    };
    let patch = EntryPatch {
        host,
        login,
        hash_pass,
        is_leaked: None,
    };
    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass --host, --login, or --password.");
    }

    let session = require_session()?;
    let entry = client(config, &session)?
        .update_entry(id, &patch)
        .await
        .context("update password")?;

    println!("Updated entry {}", entry.id);
    Ok(())
}

pub async fn delete(config: &Config, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let answer = read_line(&format!("Delete entry {id}? [y/N] "))?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let session = require_session()?;
    client(config, &session)?
        .delete_entry(id)
        .await
        .context("delete password")?;

    println!("Deleted entry {id}");
    Ok(())
}
