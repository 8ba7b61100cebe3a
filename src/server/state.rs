//! Application state shared across bot event handlers.
//!
//! The state is created once at startup, after the settings file has been loaded, and
//! cloned into the Discord event handler. It replaces any ambient global: every handler
//! receives the settings store through this struct.

use crate::server::data::settings::SettingsStore;

/// Application state containing shared resources.
///
/// Cloning is cheap: `SettingsStore` shares its mapping through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Guild settings consulted by the message guard and written by `setup`.
    pub settings: SettingsStore,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `settings` - Settings store loaded from disk
    pub fn new(settings: SettingsStore) -> Self {
        Self { settings }
    }
}
