//! Liveness endpoint for external uptime monitors.

/// Body returned by the liveness route.
pub const ALIVE_BODY: &str = "Bot is alive!";

/// Always succeeds; carries no business logic.
pub async fn alive() -> &'static str {
    ALIVE_BODY
}
