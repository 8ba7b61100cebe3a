//! Slash command business logic.
//!
//! `setup` writes a guild's settings after an administrator check; `status` reads them
//! back and resolves the stored ids to names, substituting `None` for entities that no
//! longer exist instead of failing.

use serenity::all::GuildId;

use crate::server::{
    data::settings::SettingsStore,
    model::command::{SetupParams, SetupResult, StatusResult},
    service::guild_actions::GuildActions,
};

pub struct CommandService<'a> {
    store: &'a SettingsStore,
    actions: &'a dyn GuildActions,
}

impl<'a> CommandService<'a> {
    /// Creates a new CommandService instance.
    ///
    /// # Arguments
    /// - `store` - Guild settings store
    /// - `actions` - Discord operations used to resolve names for `status`
    pub fn new(store: &'a SettingsStore, actions: &'a dyn GuildActions) -> Self {
        Self { store, actions }
    }

    /// Handles `setup`.
    ///
    /// Non-administrators are denied without touching the store. Otherwise the guild's
    /// settings are replaced; a failure to persist is logged and reported through the
    /// result while the new settings stay active in memory.
    ///
    /// # Returns
    /// - `SetupResult::Denied` - Caller is not an administrator
    /// - `SetupResult::Saved` - Settings active and written to disk
    /// - `SetupResult::SavedUnpersisted` - Settings active but the file write failed
    pub async fn setup(&self, params: &SetupParams) -> SetupResult {
        if !params.is_admin {
            tracing::info!(
                "Denied setup in guild {} to a member without administrator permission",
                params.guild_id
            );
            return SetupResult::Denied;
        }

        let result = self
            .store
            .set(params.guild_id, params.channel_id, params.role_id)
            .await;

        match result {
            Ok(()) => {
                tracing::info!(
                    "Guild {} now restricts channel {} to role {}",
                    params.guild_id,
                    params.channel_id,
                    params.role_id
                );
                SetupResult::Saved
            }
            Err(e) => {
                tracing::error!(
                    "Failed to persist settings for guild {}: {}",
                    params.guild_id,
                    e
                );
                SetupResult::SavedUnpersisted
            }
        }
    }

    /// Handles `status`.
    ///
    /// # Returns
    /// - `StatusResult::NotConfigured` - The guild has never run `setup`
    /// - `StatusResult::Configured` - Resolved names, `None` for each missing entity
    pub async fn status(&self, guild_id: GuildId) -> StatusResult {
        let Some(config) = self.store.get(guild_id).await else {
            return StatusResult::NotConfigured;
        };

        let channel_name = match self.actions.channel_name(config.channel_id).await {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(
                    "Configured channel {} of guild {} could not be resolved: {}",
                    config.channel_id,
                    guild_id,
                    e
                );
                None
            }
        };

        let role_name = match self.actions.role_name(guild_id, config.role_id).await {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::debug!(
                    "Configured role {} of guild {} could not be resolved: {}",
                    config.role_id,
                    guild_id,
                    e
                );
                None
            }
        };

        StatusResult::Configured {
            channel_name,
            role_name,
        }
    }
}
