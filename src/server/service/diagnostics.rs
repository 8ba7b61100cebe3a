//! Forwarding of process faults to a Discord logging channel.
//!
//! Two kinds of faults are reported:
//! - **UncaughtException** - a panic anywhere in the process, captured by a panic hook
//! - **UnhandledRejection** - an error returned by a supervised background task
//!
//! Reports are logged locally, then queued on an unbounded channel because a panic hook
//! cannot await. A background task drains the queue and posts each report to the logging
//! channel as a fenced block truncated to `DIAGNOSTIC_MAX_CHARS` characters. Forwarding is
//! best effort: a failed send is logged and dropped, there is no retry and no fallback.

use serenity::all::{ChannelId, CreateMessage};
use serenity::async_trait;
use serenity::http::Http;
use std::backtrace::Backtrace;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::server::{
    error::AppError,
    service::reply::DIAGNOSTIC_MAX_CHARS,
    util::parse::truncate_chars,
};

/// Destination for diagnostic text.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Posts already formatted text.
    async fn send(&self, content: String) -> Result<(), AppError>;
}

/// `LogSink` posting to a fixed Discord channel.
pub struct DiscordLogChannel {
    /// Discord HTTP client for sending messages
    http: Arc<Http>,
    /// Channel receiving every report
    channel_id: ChannelId,
}

impl DiscordLogChannel {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl LogSink for DiscordLogChannel {
    async fn send(&self, content: String) -> Result<(), AppError> {
        self.channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}

/// Category of a reported fault, used as the first line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    UncaughtException,
    UnhandledRejection,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UncaughtException => write!(f, "UncaughtException"),
            Self::UnhandledRejection => write!(f, "UnhandledRejection"),
        }
    }
}

/// Formats text for the logging channel: truncated and wrapped in a fenced block.
pub fn format_report(text: &str) -> String {
    format!("```fix\n{}\n```", truncate_chars(text, DIAGNOSTIC_MAX_CHARS))
}

/// Handle for reporting faults to the logging channel.
///
/// Cloning is cheap; all clones feed the same forwarding task.
#[derive(Clone)]
pub struct DiagnosticsReporter {
    /// Sink used for direct delivery and by the forwarding task
    sink: Arc<dyn LogSink>,
    /// Queue drained by the forwarding task
    queue: mpsc::UnboundedSender<String>,
}

impl DiagnosticsReporter {
    /// Creates a reporter and spawns the task forwarding queued reports to `sink`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(sink: Arc<dyn LogSink>) -> Self {
        let (queue, receiver) = mpsc::unbounded_channel();

        tokio::spawn(forward_reports(sink.clone(), receiver));

        Self { sink, queue }
    }

    /// Logs a fault locally and queues it for the logging channel.
    ///
    /// Never blocks and never fails, so it is safe to call from a panic hook.
    pub fn report(&self, kind: FaultKind, detail: &str) {
        tracing::error!("{}: {}", kind, detail);

        if self.queue.send(format!("{}:\n{}", kind, detail)).is_err() {
            tracing::warn!("Diagnostics forwarder has stopped, report not forwarded");
        }
    }

    /// Sends text to the logging channel immediately, bypassing the queue.
    ///
    /// Used when the caller must know delivery was attempted before continuing, such as
    /// right before a scheduled restart. Failures are logged and swallowed.
    pub async fn deliver(&self, text: &str) {
        forward(self.sink.as_ref(), text).await;
    }

    /// Installs a panic hook reporting every panic as an `UncaughtException`.
    ///
    /// The previously installed hook still runs first so the panic message keeps
    /// reaching stderr.
    pub fn install_panic_hook(&self) {
        let reporter = self.clone();
        let previous_hook = std::panic::take_hook();

        std::panic::set_hook(Box::new(move |info| {
            previous_hook(info);

            let detail = format!("{}\n{}", info, Backtrace::force_capture());
            reporter.report(FaultKind::UncaughtException, &detail);
        }));
    }

    /// Spawns a background task whose error is reported as an `UnhandledRejection`.
    ///
    /// Panics inside the task are already reported by the panic hook.
    ///
    /// # Arguments
    /// - `task` - Human readable task name used in the report
    /// - `future` - The task body
    pub fn spawn_supervised<F>(&self, task: &'static str, future: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<(), AppError>> + Send + 'static,
    {
        let reporter = self.clone();

        tokio::spawn(async move {
            match future.await {
                Ok(()) => tracing::info!("{} stopped", task),
                Err(e) => {
                    reporter.report(FaultKind::UnhandledRejection, &format!("{} failed: {}", task, e))
                }
            }
        })
    }
}

async fn forward_reports(sink: Arc<dyn LogSink>, mut receiver: mpsc::UnboundedReceiver<String>) {
    while let Some(text) = receiver.recv().await {
        forward(sink.as_ref(), &text).await;
    }
}

async fn forward(sink: &dyn LogSink, text: &str) {
    if let Err(e) = sink.send(format_report(text)).await {
        tracing::warn!("Failed to forward diagnostics to logging channel: {}", e);
    }
}
