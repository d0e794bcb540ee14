//! Full-screen TUI implementation for pwx.

pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{auth, vault};
use pwx_core::api;
use pwx_core::config::Config;
use pwx_core::session;
pub use runtime::TuiRuntime;

/// Runs the interactive password manager.
///
/// Resolves the server URL, rehydrates the persisted session (read once,
/// before the TUI starts), and hands both to the runtime. An unreadable
/// session file downgrades to a fresh login rather than failing the start.
pub async fn run(config: &Config) -> Result<()> {
    // The TUI draws to stdout; piping it somewhere makes no sense.
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `pwx list` and friends for scripted access."
        );
    }

    let base_url = api::resolve_base_url(config)?;

    let session = match session::load() {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read session file, starting logged out");
            None
        }
    };

    let mut runtime = TuiRuntime::new(base_url, session)?;
    runtime.run()
}
