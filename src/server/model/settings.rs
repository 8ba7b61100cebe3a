use serenity::all::{ChannelId, RoleId};

/// Moderation settings for a single guild.
///
/// Both ids are always present together; a guild either has a complete
/// configuration or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildConfig {
    /// The only channel in the guild subject to the role restriction.
    pub channel_id: ChannelId,
    /// Members holding this role may post in the monitored channel.
    pub role_id: RoleId,
}
