//! Interactive client launcher.

use anyhow::Result;
use clipdeck_core::config::Config;
use clipdeck_core::session::SessionStore;

#[cfg(feature = "tui")]
pub async fn run(config: &Config, session: SessionStore) -> Result<()> {
    clipdeck_tui::run(config, session).await
}

#[cfg(not(feature = "tui"))]
pub async fn run(_config: &Config, _session: SessionStore) -> Result<()> {
    anyhow::bail!("This build has no interactive client. Run `clipdeck --help` for commands.")
}
