//! Enforcement of the posting restriction on the monitored channel.
//!
//! For each guild message the guard looks up the guild's settings and, when a member
//! without the allowed role posts in the monitored channel, warns the author by direct
//! message and then deletes the message. Both steps are best effort and independent:
//! a failed warning never prevents the deletion.

use serenity::all::Mentionable;

use crate::server::{
    data::settings::SettingsStore,
    error::AppError,
    model::guard::{GuardOutcome, GuardedMessage, IgnoreReason},
    service::{guild_actions::GuildActions, reply::warning_message},
};

pub struct MessageGuardService<'a> {
    store: &'a SettingsStore,
    actions: &'a dyn GuildActions,
}

impl<'a> MessageGuardService<'a> {
    /// Creates a new MessageGuardService instance.
    ///
    /// # Arguments
    /// - `store` - Guild settings store consulted for every message
    /// - `actions` - Discord operations used to warn and delete
    pub fn new(store: &'a SettingsStore, actions: &'a dyn GuildActions) -> Self {
        Self { store, actions }
    }

    /// Evaluates a message against its guild's settings and enforces them.
    ///
    /// # Returns
    /// - `GuardOutcome::Ignored` - Message is allowed or out of scope, no side effects
    /// - `GuardOutcome::Enforced` - Warning and deletion were attempted, in that order
    pub async fn evaluate(&self, message: &GuardedMessage) -> GuardOutcome {
        let Some(guild_id) = message.guild_id else {
            return GuardOutcome::Ignored(IgnoreReason::DirectMessage);
        };

        if message.author_is_automated {
            return GuardOutcome::Ignored(IgnoreReason::AutomatedAuthor);
        }

        let Some(config) = self.store.get(guild_id).await else {
            return GuardOutcome::Ignored(IgnoreReason::GuildNotConfigured);
        };

        if message.channel_id != config.channel_id {
            return GuardOutcome::Ignored(IgnoreReason::UnmonitoredChannel);
        }

        if message.author_roles.contains(&config.role_id) {
            return GuardOutcome::Ignored(IgnoreReason::AllowedRole);
        }

        let warned = self.warn_author(message).await;
        if let Err(e) = &warned {
            tracing::warn!(
                "Could not send direct message to {} ({}): {}",
                message.author_name,
                message.author_id,
                e
            );
        }

        let deleted = self
            .actions
            .delete_message(message.channel_id, message.message_id)
            .await;
        match &deleted {
            Ok(()) => tracing::info!(
                "Removed message {} by {} from channel {} in guild {}",
                message.message_id,
                message.author_name,
                message.channel_id,
                guild_id
            ),
            Err(e) => tracing::warn!(
                "Failed to delete message {} in channel {}: {}",
                message.message_id,
                message.channel_id,
                e
            ),
        }

        GuardOutcome::Enforced { warned, deleted }
    }

    /// Sends the warning naming the monitored channel, falling back to a channel
    /// mention when the name cannot be resolved.
    async fn warn_author(&self, message: &GuardedMessage) -> Result<(), AppError> {
        let channel = match self.actions.channel_name(message.channel_id).await {
            Ok(name) => format!("#{}", name),
            Err(e) => {
                tracing::debug!(
                    "Could not resolve name of channel {}: {}",
                    message.channel_id,
                    e
                );
                message.channel_id.mention().to_string()
            }
        };

        self.actions
            .send_direct_message(message.author_id, &warning_message(&channel))
            .await
    }
}
