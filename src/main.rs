mod server;

use std::sync::Arc;

use crate::server::{
    bot,
    config::Config,
    data::settings::SettingsStore,
    error::AppError,
    scheduler::restart::{self, RestartSignal, RESTART_EXIT_CODE},
    service::diagnostics::{DiagnosticsReporter, DiscordLogChannel},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let settings = SettingsStore::load(&config.settings_path).await;
    let state = AppState::new(settings);

    tracing::info!("Starting channel guard");

    // Initialize Discord bot and extract HTTP client
    let bot_client = bot::start::init_bot(&config, state).await?;
    let discord_http = bot_client.http.clone();

    let reporter = DiagnosticsReporter::start(Arc::new(DiscordLogChannel::new(
        discord_http,
        config.log_channel_id,
    )));
    reporter.install_panic_hook();

    let restart_signal = RestartSignal::new();
    restart::start_scheduler(
        reporter.clone(),
        restart_signal.clone(),
        config.restart_interval,
    )
    .await?;

    reporter.spawn_supervised("Liveness endpoint", startup::serve_liveness(config.port));
    reporter.spawn_supervised("Discord bot", bot::start::start_bot(bot_client));

    tokio::select! {
        _ = restart_signal.requested() => {
            tracing::info!("Exiting for scheduled restart");
            std::process::exit(RESTART_EXIT_CODE);
        }
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
