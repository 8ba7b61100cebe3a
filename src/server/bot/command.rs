//! Slash command definitions and registration.
//!
//! The full command set is replaced on every start, so re-registering is idempotent.

use serenity::all::{
    ChannelType, Command, CommandOptionType, CreateCommand, CreateCommandOption, GuildId,
    Permissions,
};
use serenity::http::Http;

use crate::server::{
    error::AppError,
    model::command::{CHANNEL_OPTION, ROLE_OPTION, SETUP_COMMAND, STATUS_COMMAND},
};

/// Builds the `setup` and `status` command definitions.
///
/// `setup` is hidden from members without administrator permission by default; the
/// command handler still checks the permission itself.
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(SETUP_COMMAND)
            .description("監視チャンネルと許可ロールを登録")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    CHANNEL_OPTION,
                    "監視対象チャンネル",
                )
                .channel_types(vec![ChannelType::Text, ChannelType::News])
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Role,
                    ROLE_OPTION,
                    "発言を許可するロール",
                )
                .required(true),
            ),
        CreateCommand::new(STATUS_COMMAND).description("現在の監視設定を表示"),
    ]
}

/// Publishes the command set, replacing whatever was registered before.
///
/// # Arguments
/// - `http` - Discord HTTP client with the application id set
/// - `guild_id` - Register on this guild only, or globally when `None`
///
/// # Returns
/// - `Ok(usize)` - Number of commands Discord acknowledged
/// - `Err(AppError::DiscordErr)` - Registration request failed
pub async fn register_commands(http: &Http, guild_id: Option<GuildId>) -> Result<usize, AppError> {
    let commands = match guild_id {
        Some(guild_id) => guild_id.set_commands(http, command_definitions()).await?,
        None => Command::set_global_commands(http, command_definitions()).await?,
    };

    Ok(commands.len())
}
