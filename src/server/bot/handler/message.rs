use serenity::all::{Context, Message};

use crate::server::{
    model::guard::{GuardOutcome, GuardedMessage},
    service::{guard::MessageGuardService, guild_actions::DiscordGuildActions},
    state::AppState,
};

/// Handle message creation in a channel
///
/// Runs the message through the channel guard. Failures of the individual side effects
/// are logged by the guard and never abort the handler.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    let guarded = GuardedMessage::from(&message);
    let actions = DiscordGuildActions::new(ctx.http.clone());
    let guard = MessageGuardService::new(&state.settings, &actions);

    match guard.evaluate(&guarded).await {
        GuardOutcome::Ignored(reason) => {
            tracing::trace!("Message {} ignored: {:?}", guarded.message_id, reason);
        }
        GuardOutcome::Enforced { warned, deleted } => {
            tracing::debug!(
                "Enforced restriction on message {} (warned: {}, deleted: {})",
                guarded.message_id,
                warned.is_ok(),
                deleted.is_ok()
            );
        }
    }
}
