use serenity::all::{Client, GatewayIntents};

use crate::server::{
    bot::{command::register_commands, handler::Handler},
    config::Config,
    error::AppError,
    state::AppState,
};

/// Builds the Discord client and publishes the slash commands.
///
/// Command registration failures are logged and do not prevent the bot from starting;
/// the guard keeps working even when the commands are unavailable.
///
/// # Arguments
/// - `config` - Application configuration
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started, its `http` shared with other services
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES;

    let client = Client::builder(&config.discord_token, intents)
        .application_id(config.application_id)
        .event_handler(Handler::new(state))
        .await?;

    match register_commands(&client.http, config.command_guild_id).await {
        Ok(count) => tracing::info!("Registered {} slash commands", count),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function should be called from within a tokio::spawn task since it will block
/// until the bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails, e.g. because of an invalid token
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
