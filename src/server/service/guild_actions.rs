//! Discord side effects used by the command and guard services.
//!
//! The `GuildActions` trait is the seam between business logic and the Discord API.
//! `DiscordGuildActions` implements it over Serenity's HTTP client; tests substitute a
//! recording mock so warn/delete ordering and failure isolation can be asserted without
//! a gateway connection.

use serenity::all::{
    Channel, ChannelId, CreateMessage, GuildId, MessageId, Role, RoleId, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::error::AppError;

/// Discord operations performed on behalf of a guild.
///
/// Every method is a single independent side effect returning its own result so callers
/// can decide per call whether a failure is fatal.
#[async_trait]
pub trait GuildActions: Send + Sync {
    /// Resolves the display name of a guild channel.
    ///
    /// # Returns
    /// - `Ok(String)` - Channel name without the leading `#`
    /// - `Err(AppError::NotFound)` - Channel is not a guild channel
    /// - `Err(AppError::DiscordErr)` - Channel deleted or not visible to the bot
    async fn channel_name(&self, channel_id: ChannelId) -> Result<String, AppError>;

    /// Resolves the display name of a role in a guild.
    ///
    /// # Returns
    /// - `Ok(String)` - Role name without the leading `@`
    /// - `Err(AppError::NotFound)` - No role with that id exists in the guild
    /// - `Err(AppError::DiscordErr)` - Roles could not be fetched
    async fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Result<String, AppError>;

    /// Sends a direct message to a user.
    ///
    /// Fails when the user has direct messages from server members disabled.
    async fn send_direct_message(&self, user_id: UserId, content: &str) -> Result<(), AppError>;

    /// Deletes a message from a channel.
    ///
    /// Fails when the bot lacks `MANAGE_MESSAGES` or the message is already gone.
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError>;
}

/// `GuildActions` backed by Serenity's HTTP client.
pub struct DiscordGuildActions {
    /// Discord HTTP client for API requests
    http: Arc<Http>,
}

impl DiscordGuildActions {
    /// Creates a new DiscordGuildActions instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuildActions for DiscordGuildActions {
    async fn channel_name(&self, channel_id: ChannelId) -> Result<String, AppError> {
        let channel = self.http.get_channel(channel_id).await?;

        guild_channel_name(channel).ok_or_else(|| {
            AppError::NotFound(format!("Channel {} is not a guild channel", channel_id))
        })
    }

    async fn role_name(&self, guild_id: GuildId, role_id: RoleId) -> Result<String, AppError> {
        let roles = self.http.get_guild_roles(guild_id).await?;

        find_role_name(&roles, role_id).ok_or_else(|| {
            AppError::NotFound(format!("Role {} not found in guild {}", role_id, guild_id))
        })
    }

    async fn send_direct_message(&self, user_id: UserId, content: &str) -> Result<(), AppError> {
        user_id
            .direct_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), AppError> {
        self.http
            .delete_message(channel_id, message_id, None)
            .await?;

        Ok(())
    }
}

/// Returns the name of a guild channel, or `None` for direct message channels.
pub fn guild_channel_name(channel: Channel) -> Option<String> {
    match channel {
        Channel::Guild(channel) => Some(channel.name),
        _ => None,
    }
}

/// Finds a role's name among the roles of a guild.
pub fn find_role_name(roles: &[Role], role_id: RoleId) -> Option<String> {
    roles
        .iter()
        .find(|role| role.id == role_id)
        .map(|role| role.name.clone())
}
