//! Types describing a message under evaluation by the channel guard.

use serenity::all::{ChannelId, GuildId, Message, MessageId, RoleId, UserId};

use crate::server::error::AppError;

/// The parts of an inbound message the guard needs to decide on.
#[derive(Debug, Clone)]
pub struct GuardedMessage {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    /// `None` for direct messages.
    pub guild_id: Option<GuildId>,
    pub author_id: UserId,
    pub author_name: String,
    /// Bot accounts and webhooks are never moderated.
    pub author_is_automated: bool,
    /// Role ids of the authoring member, empty when member data is missing.
    pub author_roles: Vec<RoleId>,
}

impl From<&Message> for GuardedMessage {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id,
            channel_id: message.channel_id,
            guild_id: message.guild_id,
            author_id: message.author.id,
            author_name: message.author.name.clone(),
            author_is_automated: message.author.bot || message.webhook_id.is_some(),
            author_roles: message
                .member
                .as_ref()
                .map(|member| member.roles.clone())
                .unwrap_or_default(),
        }
    }
}

/// Why the guard took no action on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    DirectMessage,
    AutomatedAuthor,
    GuildNotConfigured,
    UnmonitoredChannel,
    AllowedRole,
}

/// Result of evaluating a single message.
///
/// The warning and the deletion are independent: each carries its own result so a
/// failed direct message never hides whether the deletion succeeded.
#[derive(Debug)]
pub enum GuardOutcome {
    Ignored(IgnoreReason),
    Enforced {
        warned: Result<(), AppError>,
        deleted: Result<(), AppError>,
    },
}
