//! Terminal front-end
//!
//! Interactive dashboards plus scripted one-shot commands. Each command opens
//! the configured slot, signs in for its own duration, and reports outcomes
//! through the terminal notifier.

pub mod app;
pub mod init;
pub mod list;
pub mod logging;
pub mod render;
pub mod resolve;
pub mod stats;
pub mod submit;

use crate::desk::Desk;
use crate::models::BalvatikaConfig;
use crate::notify::TerminalNotifier;
use crate::store::{seed, JsonFileStore};
use crate::{Context, Result};
use chrono::Utc;
use clap::Args;
use std::path::Path;
use tracing::{debug, info};

/// Credentials for one-shot commands
#[derive(Args, Debug, Clone)]
pub struct LoginArgs {
    /// Username to sign in with
    #[arg(short, long)]
    pub user: String,

    /// Password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

impl LoginArgs {
    /// The given password, or one read from the terminal
    pub fn password(&self) -> Result<String> {
        match &self.password {
            Some(password) => Ok(password.clone()),
            None => dialoguer::Password::new()
                .with_prompt("Password")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| anyhow::anyhow!("Terminal not available: {}", e)),
        }
    }
}

/// Open the configured slot, seeding demo data when the config asks for it
pub fn open_store(project_root: &Path, data_dir: Option<&Path>) -> Result<JsonFileStore> {
    let config = BalvatikaConfig::load(project_root).context("Failed to load balvatika/config.toml")?;
    let dir = config.resolve_data_dir(data_dir);
    let mut store = JsonFileStore::open(&dir, &config.slot)?;
    debug!(path = %store.path().display(), "using request slot");

    if config.seed_demo_data && seed::seed_if_empty(&mut store, Utc::now())? {
        info!(path = %store.path().display(), "seeded demo requests");
    }

    Ok(store)
}

/// Open a desk over the configured slot
pub fn open_desk(
    project_root: &Path,
    data_dir: Option<&Path>,
) -> Result<Desk<JsonFileStore, TerminalNotifier>> {
    let store = open_store(project_root, data_dir)?;
    Ok(Desk::open(store, TerminalNotifier)?)
}
