//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clipdeck_core::session::SessionStore;
use clipdeck_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "clipdeck")]
#[command(version)]
#[command(about = "Terminal client for the clipdeck video sharing service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        username: String,
        /// Password (or set CLIPDECK_PASSWORD)
        #[arg(long, env = "CLIPDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a new account
    Signup {
        #[arg(long)]
        username: String,
        /// Password (or set CLIPDECK_PASSWORD)
        #[arg(long, env = "CLIPDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show who is logged in and which screens they get
    Status,
    /// Browse and upload videos
    Videos {
        #[command(subcommand)]
        command: VideoCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum VideoCommands {
    /// List all videos
    List,
    /// Show one video
    Show {
        /// Numeric video ID
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Upload a video (admin only)
    Upload {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Path to the video file
        #[arg(long, value_name = "PATH")]
        video: PathBuf,
        /// Path to the thumbnail image
        #[arg(long, value_name = "PATH")]
        thumbnail: PathBuf,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the backend API URL
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init_default();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "clipdeck starting");

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // Config commands must work even when config.toml is broken.
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(url),
        };
    }

    let config = config::Config::load().context("load config")?;
    let session = SessionStore::open_default();

    let Some(command) = cli.command else {
        return commands::interactive::run(&config, session).await;
    };

    match command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, session, username, password).await
        }
        Commands::Signup { username, password } => {
            commands::auth::signup(&config, session, username, password).await
        }
        Commands::Logout => commands::auth::logout(&session),
        Commands::Status => commands::auth::status(&config, &session),

        Commands::Videos { command } => match command {
            VideoCommands::List => commands::videos::list(&config, session).await,
            VideoCommands::Show { id } => commands::videos::show(&config, session, &id).await,
            VideoCommands::Upload {
                title,
                description,
                video,
                thumbnail,
            } => {
                commands::videos::upload(
                    &config,
                    session,
                    commands::videos::UploadArgs {
                        title,
                        description,
                        video,
                        thumbnail,
                    },
                )
                .await
            }
        },

        Commands::Config { .. } => Ok(()),
    }
}
