//! Parameter and result types for slash command handling.

use serenity::all::{ChannelId, GuildId, RoleId};

/// Names of the commands published to Discord.
pub const SETUP_COMMAND: &str = "setup";
pub const STATUS_COMMAND: &str = "status";

/// Option names of the `setup` command.
pub const CHANNEL_OPTION: &str = "channel";
pub const ROLE_OPTION: &str = "role";

/// Resolved arguments of a `setup` invocation.
///
/// Names come from the interaction's resolved data so the confirmation can echo
/// them without another API round trip.
#[derive(Debug, Clone)]
pub struct SetupParams {
    pub guild_id: GuildId,
    /// Whether the invoking member holds the administrator permission.
    pub is_admin: bool,
    pub channel_id: ChannelId,
    pub channel_name: String,
    pub role_id: RoleId,
    pub role_name: String,
}

/// Outcome of a `setup` invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum SetupResult {
    /// Caller lacks administrator permission; nothing was changed.
    Denied,
    /// The configuration is active and was written to disk.
    Saved,
    /// The configuration is active in memory but could not be written to disk.
    SavedUnpersisted,
}

/// Outcome of a `status` invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum StatusResult {
    NotConfigured,
    /// `None` marks an entity that could not be resolved anymore.
    Configured {
        channel_name: Option<String>,
        role_name: Option<String>,
    },
}
