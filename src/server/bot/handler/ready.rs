//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use serenity::all::{ActivityData, Context, Ready};

use crate::server::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and how many guilds have settings, and sets the bot's activity.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds, {} configured)",
        ready.user.name,
        ready.guilds.len(),
        state.settings.len().await
    );

    ctx.set_activity(Some(ActivityData::watching("restricted channels")));
}
