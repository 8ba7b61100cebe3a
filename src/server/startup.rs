use tracing_subscriber::EnvFilter;

use crate::server::{error::AppError, router};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();
}

/// Serves the liveness endpoint on all interfaces.
///
/// # Arguments
/// - `port` - TCP port to listen on
///
/// # Returns
/// - `Ok(())` - Server shut down
/// - `Err(AppError::IoErr)` - Failed to bind the port or serve connections
pub async fn serve_liveness(port: u16) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Liveness endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
