//! # Samix governance dashboard TUI
//!
//! Terminal interface for monitoring AI-agent incidents, traces, and
//! policies. The layout is a two-level navigation sidebar beside a routed
//! content page, backed entirely by in-memory mock data.
//!
//! ## Architecture
//!
//! Each UI element (sidebar, header, content pages) is a separate
//! `Component` that handles its own events and rendering. Application
//! state lives on [`app::App`]; components report `Effect`s which the
//! runtime processes after each event.

mod app;
mod ui;

use anyhow::Result;
use samix_data::DataStore;
use samix_util::UserPreferences;
use tracing::warn;

/// Runs the main TUI application loop.
///
/// Initializes the terminal, builds the application state from the mock
/// data store and persisted preferences, and drives the event loop until
/// the user exits.
///
/// # Errors
///
/// Returns an error for terminal setup failures or runtime I/O issues.
pub async fn run() -> Result<()> {
    let prefs = UserPreferences::new().unwrap_or_else(|error| {
        warn!("Failed to open preferences store; theme choices will not persist: {error}");
        UserPreferences::ephemeral()
    });
    let store = DataStore::load();
    ui::runtime::run_app(store, prefs).await
}
