//! Periodic self-restart.
//!
//! Every `RESTART_INTERVAL_HOURS` the bot posts a heartbeat to the logging channel and
//! asks `main` to exit with `RESTART_EXIT_CODE`. Relaunching the process is left to the
//! external supervisor. The restart is unconditional and cannot be cancelled.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{diagnostics::DiagnosticsReporter, reply::RESTART_NOTICE},
};

/// Exit code signalling the supervisor that this exit is a requested restart.
///
/// `EX_TEMPFAIL` from sysexits. It is non-zero so `Restart=on-failure` style supervisors
/// relaunch, and differs from the clean shutdown on Ctrl+C, which exits 0.
pub const RESTART_EXIT_CODE: i32 = 75;

/// One-shot signal from the scheduler to `main` that the process should restart.
///
/// A request made before anyone waits is remembered, so it is never lost.
#[derive(Clone, Default)]
pub struct RestartSignal {
    notify: Arc<Notify>,
}

impl RestartSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a restart.
    pub fn request(&self) {
        self.notify.notify_one();
    }

    /// Completes once a restart has been requested.
    pub async fn requested(&self) {
        self.notify.notified().await;
    }
}

/// Starts the restart scheduler
///
/// The first restart happens one full `interval` after startup.
///
/// # Arguments
/// - `reporter`: Diagnostics reporter used to post the heartbeat
/// - `signal`: Signal observed by `main`
/// - `interval`: Time between restarts
pub async fn start_scheduler(
    reporter: DiagnosticsReporter,
    signal: RestartSignal,
    interval: Duration,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let reporter = reporter.clone();
        let signal = signal.clone();

        Box::pin(async move {
            trigger_restart(&reporter, &signal).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Restart scheduler started, restarting every {} hour(s)",
        interval.as_secs() / 3600
    );

    Ok(())
}

/// Posts the heartbeat, then requests the restart whether or not the post succeeded.
pub async fn trigger_restart(reporter: &DiagnosticsReporter, signal: &RestartSignal) {
    tracing::info!("Scheduled restart triggered");

    reporter.deliver(RESTART_NOTICE).await;
    signal.request();
}
