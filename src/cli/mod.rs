//! CLI command handlers
//!
//! Bridges clap argument parsing with the repository and auth layers.

pub mod auth;
pub mod budget;
pub mod report;
pub mod transaction;

pub use auth::{handle_login, handle_logout, handle_signup, handle_whoami, LoginArgs, SignupArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_txn_command, TxnCommands};

use anyhow::Context;

use crate::auth::CredentialStore;
use crate::config::{Settings, TrackPaths};
use crate::error::TrackResult;
use crate::models::Session;
use crate::store::PrefStore;

/// Everything a command handler needs: resolved paths, settings, and the
/// opened preference store
pub struct AppContext {
    pub paths: TrackPaths,
    pub settings: Settings,
    pub store: PrefStore,
}

impl AppContext {
    /// Resolve paths, load settings, and open the store
    pub fn init() -> TrackResult<Self> {
        let paths = TrackPaths::new()?;
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        let store = PrefStore::open(paths.prefs_file())?;
        Ok(Self {
            paths,
            settings,
            store,
        })
    }
}

/// Require a live session, as the app's screens do behind the login gate
pub fn require_session(ctx: &AppContext) -> anyhow::Result<Session> {
    CredentialStore::new(&ctx.store)
        .session()?
        .context("Not logged in. Run `trackfunds login` first.")
}

/// Print the resolved paths and settings
pub fn handle_config_command(ctx: &AppContext) -> anyhow::Result<()> {
    println!("Base directory:  {}", ctx.paths.base_dir().display());
    println!("Preferences:     {}", ctx.paths.prefs_file().display());
    println!("Settings:        {}", ctx.paths.settings_file().display());
    println!("Currency symbol: {}", ctx.settings.currency_symbol);
    println!("Recent limit:    {}", ctx.settings.recent_limit);
    Ok(())
}
