//! Slash command interaction handler.
//!
//! Converts command interactions into service calls and answers every invocation with
//! an ephemeral reply, visible only to the invoking member.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    GuildId, Interaction, Member, ResolvedValue,
};

use crate::server::{
    model::command::{SetupParams, CHANNEL_OPTION, ROLE_OPTION, SETUP_COMMAND, STATUS_COMMAND},
    service::{
        command::CommandService,
        guild_actions::DiscordGuildActions,
        reply::{self, setup_reply, status_reply},
    },
    state::AppState,
};

/// Handles an interaction, ignoring everything that is not a slash command.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let content = match command.guild_id {
        Some(guild_id) => run_command(state, &ctx, &command, guild_id).await,
        None => reply::GUILD_ONLY.to_string(),
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to /{} from {}: {}",
            command.data.name,
            command.user.name,
            e
        );
    }
}

async fn run_command(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: GuildId,
) -> String {
    let actions = DiscordGuildActions::new(ctx.http.clone());
    let service = CommandService::new(&state.settings, &actions);

    match command.data.name.as_str() {
        SETUP_COMMAND => {
            let is_admin = is_administrator(command.member.as_deref());

            let Some(params) = setup_params(command, guild_id, is_admin) else {
                return if is_admin {
                    reply::INVALID_OPTIONS
                } else {
                    reply::PERMISSION_DENIED
                }
                .to_string();
            };

            let result = service.setup(&params).await;
            setup_reply(&result, &params.channel_name, &params.role_name)
        }
        STATUS_COMMAND => status_reply(&service.status(guild_id).await),
        other => {
            tracing::warn!("Received unknown command /{}", other);
            reply::UNKNOWN_COMMAND.to_string()
        }
    }
}

/// Whether the invoking member holds the administrator permission.
///
/// Discord includes the member's resolved permissions with every guild interaction;
/// missing data is treated as not an administrator.
pub fn is_administrator(member: Option<&Member>) -> bool {
    member
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator())
}

/// Extracts the resolved channel and role options of a `setup` invocation.
fn setup_params(
    command: &CommandInteraction,
    guild_id: GuildId,
    is_admin: bool,
) -> Option<SetupParams> {
    let mut channel = None;
    let mut role = None;

    for option in command.data.options() {
        match (option.name, option.value) {
            (CHANNEL_OPTION, ResolvedValue::Channel(partial)) => {
                let name = partial.name.clone().unwrap_or_else(|| partial.id.to_string());
                channel = Some((partial.id, name));
            }
            (ROLE_OPTION, ResolvedValue::Role(resolved)) => {
                role = Some((resolved.id, resolved.name.clone()));
            }
            _ => {}
        }
    }

    let (channel_id, channel_name) = channel?;
    let (role_id, role_name) = role?;

    Some(SetupParams {
        guild_id,
        is_admin,
        channel_id,
        channel_name,
        role_id,
        role_name,
    })
}
