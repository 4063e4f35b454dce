//! The caller-supplied progress/abort event bus.

use tokio_util::sync::CancellationToken;

use crate::status::ProgressSnapshot;

/// An event the transfer manager emits toward a caller-supplied observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncEvent {
    /// Emitted exactly once, before the first command starts.
    Metadata {
        /// Sum of every command's `size`.
        total_size: u64,
        /// Number of commands in the batch.
        total_count: u64,
    },
    /// Emitted whenever `current_size` or `current_count` changes.
    Progress(ProgressSnapshot),
}

/// A caller-supplied observer for progress events.
///
/// Implement this directly for a synchronous callback, or use
/// [`ChannelMonitor`] to get the events as a stream instead.
pub trait Monitor: Send + Sync {
    /// Called exactly once, before any command in the batch starts.
    fn on_metadata(&self, total_size: u64, total_count: u64);

    /// Called whenever a counter in [`crate::status::TransferStatus`] changes.
    fn on_progress(&self, snapshot: ProgressSnapshot);
}

/// A [`Monitor`] that forwards every event onto an unbounded channel.
///
/// Pairs with `.subscribe()`-style callers who would rather poll a stream of
/// [`SyncEvent`] than implement [`Monitor`] themselves.
#[derive(Clone, Debug)]
pub struct ChannelMonitor {
    sender: tokio::sync::mpsc::UnboundedSender<SyncEvent>,
}

impl ChannelMonitor {
    /// Creates a channel monitor, returning it paired with its receiver.
    #[must_use]
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedReceiver<SyncEvent>) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Default for ChannelMonitor {
    fn default() -> Self {
        Self::new().0
    }
}

impl Monitor for ChannelMonitor {
    fn on_metadata(&self, total_size: u64, total_count: u64) {
        let _ = self.sender.send(SyncEvent::Metadata { total_size, total_count });
    }

    fn on_progress(&self, snapshot: ProgressSnapshot) {
        let _ = self.sender.send(SyncEvent::Progress(snapshot));
    }
}

/// A monitor that discards every event. Useful for `dry_run` and tests that
/// don't care about progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMonitor;

impl Monitor for NullMonitor {
    fn on_metadata(&self, _total_size: u64, _total_count: u64) {}
    fn on_progress(&self, _snapshot: ProgressSnapshot) {}
}

/// A thin, cloneable wrapper over the single cancellation token shared by
/// every in-flight transfer for one sync invocation.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle {
    token: CancellationToken,
}

impl AbortHandle {
    /// Creates a fresh, untripped abort handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token. Safe to call from any thread, at any time, more than
    /// once.
    pub fn abort(&self) {
        self.token.cancel();
    }

    /// Returns `true` once [`AbortHandle::abort`] has been called.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_handle_reports_tripped_state() {
        let handle = AbortHandle::new();
        assert!(!handle.is_aborted());
        handle.abort();
        assert!(handle.is_aborted());
    }

    #[test]
    fn abort_handle_clones_share_the_same_token() {
        let handle = AbortHandle::new();
        let clone = handle.clone();
        clone.abort();
        assert!(handle.is_aborted());
    }

    #[tokio::test]
    async fn channel_monitor_forwards_events() {
        let (monitor, mut receiver) = ChannelMonitor::new();
        monitor.on_metadata(10, 2);
        monitor.on_progress(ProgressSnapshot {
            current_size: 5,
            current_count: 1,
            total_size: 10,
            total_count: 2,
        });

        assert_eq!(receiver.recv().await, Some(SyncEvent::Metadata { total_size: 10, total_count: 2 }));
        assert!(matches!(receiver.recv().await, Some(SyncEvent::Progress(_))));
    }
}
