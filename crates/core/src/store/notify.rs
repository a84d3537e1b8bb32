//! User-facing notification sink.
//!
//! Notifications are fire-and-forget and never part of a data invariant;
//! the store emits them after a transition has committed.

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Positive confirmation.
    Success,
    /// Informational, e.g. an auto-sweep report.
    Info,
    /// Something the user must act on.
    Error,
}

/// Sink for user-facing notifications.
pub trait Notifier {
    /// Delivers one notice. Implementations must not fail.
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier that forwards notices to the `tracing` log stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success | NoticeKind::Info => tracing::info!(?kind, "{message}"),
            NoticeKind::Error => tracing::warn!(?kind, "{message}"),
        }
    }
}
