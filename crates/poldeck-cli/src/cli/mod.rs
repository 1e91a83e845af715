//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use poldeck_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "poldeck")]
#[command(version = "0.1")]
#[command(about = "Terminal client for an insurance-policy backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Remove the stored session token
    Logout,

    /// Browse policies without the TUI
    Policies {
        #[command(subcommand)]
        command: PolicyCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum PolicyCommands {
    /// Lists all policies
    List,
    /// Shows a specific policy
    Show {
        /// The id of the policy to show
        #[arg(value_name = "POLICY_ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    // Logs go to files under POLDECK_HOME; the guard flushes on drop.
    let _log_guard = logging::init(&config.log_filter)?;
    tracing::info!(api_url = %config.api_url, "poldeck starting");

    // default to the interactive browser
    let Some(command) = cli.command else {
        return poldeck_tui::run(&config).await;
    };

    match command {
        Commands::Login { username, password } => {
            commands::login::run(&config, username, password).await
        }
        Commands::Logout => commands::login::logout(),
        Commands::Policies { command } => match command {
            PolicyCommands::List => commands::policies::list(&config).await,
            PolicyCommands::Show { id } => commands::policies::show(&config, id).await,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
