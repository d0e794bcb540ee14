//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use pwx_core::config::Config;
use pwx_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "pwx")]
#[command(version)]
#[command(about = "Password keeper client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and save the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,
    },
    /// Create an account and save the session
    Register {
        /// Account username
        #[arg(short, long)]
        username: String,
    },
    /// Remove the saved session
    Logout,
    /// List saved passwords
    List,
    /// Save a new password (read from stdin)
    Add {
        /// Site the password belongs to
        #[arg(long)]
        host: String,
        /// Login used on that site
        #[arg(long)]
        login: String,
    },
    /// Change fields of a saved password
    Update {
        /// Entry id (see `pwx list`)
        #[arg(value_name = "ID")]
        id: i64,
        /// New site
        #[arg(long)]
        host: Option<String>,
        /// New login
        #[arg(long)]
        login: Option<String>,
        /// Read a new password from stdin
        #[arg(long)]
        password: bool,
    },
    /// Delete a saved password
    Delete {
        /// Entry id (see `pwx list`)
        #[arg(value_name = "ID")]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the server URL in the config file
    SetServer {
        /// Base URL of the password keeper service
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen, so diagnostics go to a file for every mode.
    // The guard flushes on drop and must outlive dispatch.
    let _log_guard = logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the interactive TUI
    let Some(command) = cli.command else {
        return crate::modes::run_tui(&config).await;
    };

    match command {
        Commands::Login { username } => commands::auth::login(&config, &username).await,
        Commands::Register { username } => commands::auth::register(&config, &username).await,
        Commands::Logout => commands::auth::logout(),
        Commands::List => commands::vault::list(&config).await,
        Commands::Add { host, login } => commands::vault::add(&config, &host, &login).await,
        Commands::Update {
            id,
            host,
            login,
            password,
        } => commands::vault::update(&config, id, host, login, password).await,
        Commands::Delete { id, yes } => commands::vault::delete(&config, id, yes).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetServer { url } => commands::config::set_server(&url),
        },
    }
}
