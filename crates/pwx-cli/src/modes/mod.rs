//! Runtime execution modes.
//!
//! - headless: subcommands that print to stdout and exit
//! - `tui`: full-screen interactive terminal UI (optional feature)

#[cfg(feature = "tui")]
pub use pwx_tui::run as run_tui;

#[cfg(not(feature = "tui"))]
pub async fn run_tui(_config: &pwx_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
