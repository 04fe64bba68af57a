//! Full-screen TUI for clipdeck.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use clipdeck_core::api::ApiClient;
use clipdeck_core::config::Config;
use clipdeck_core::session::SessionStore;
pub use runtime::TuiRuntime;

/// Runs the interactive client until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the API URL is invalid,
/// or terminal I/O fails.
pub async fn run(config: &Config, session: SessionStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `clipdeck videos list` or `clipdeck --help` for non-interactive commands."
        );
    }

    let client = ApiClient::from_config(config, session)?;
    tracing::info!(api_url = %client.base_url(), "starting interactive client");

    let mut err = stderr();
    writeln!(err, "clipdeck")?;
    writeln!(err, "Server: {}", client.base_url())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config, client)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
