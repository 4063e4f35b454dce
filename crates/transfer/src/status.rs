//! Aggregate progress counters, mutated concurrently by transfer workers.

use std::sync::atomic::{AtomicU64, Ordering};

/// A point-in-time read of [`TransferStatus`]'s counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Bytes transferred so far.
    pub current_size: u64,
    /// Commands completed so far.
    pub current_count: u64,
    /// Total bytes across every command in the batch.
    pub total_size: u64,
    /// Total commands in the batch.
    pub total_count: u64,
}

/// Lock-free counters shared by every worker executing one command batch.
///
/// Each field is independently atomic; a [`ProgressSnapshot`] is therefore a
/// best-effort read rather than a consistent transaction, which matches the
/// "high-frequency, coalesced" progress contract — exact interleaving across
/// fields is not part of it.
#[derive(Debug, Default)]
pub struct TransferStatus {
    current_size: AtomicU64,
    current_count: AtomicU64,
    total_size: AtomicU64,
    total_count: AtomicU64,
}

impl TransferStatus {
    /// Creates a status with the given totals and zeroed progress.
    #[must_use]
    pub fn new(total_size: u64, total_count: u64) -> Self {
        Self {
            current_size: AtomicU64::new(0),
            current_count: AtomicU64::new(0),
            total_size: AtomicU64::new(total_size),
            total_count: AtomicU64::new(total_count),
        }
    }

    /// Advances the byte counter by `bytes`.
    pub fn add_size(&self, bytes: u64) {
        self.current_size.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Advances the completed-command counter by one.
    pub fn increment_count(&self) {
        self.current_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads a snapshot of all four counters.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current_size: self.current_size.load(Ordering::Relaxed),
            current_count: self.current_count.load(Ordering::Relaxed),
            total_size: self.total_size.load(Ordering::Relaxed),
            total_count: self.total_count.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_status_reports_zero_progress_with_totals_set() {
        let status = TransferStatus::new(100, 4);
        let snapshot = status.snapshot();
        assert_eq!(snapshot.total_size, 100);
        assert_eq!(snapshot.total_count, 4);
        assert_eq!(snapshot.current_size, 0);
        assert_eq!(snapshot.current_count, 0);
    }

    #[test]
    fn counters_accumulate() {
        let status = TransferStatus::new(10, 2);
        status.add_size(3);
        status.add_size(4);
        status.increment_count();
        let snapshot = status.snapshot();
        assert_eq!(snapshot.current_size, 7);
        assert_eq!(snapshot.current_count, 1);
    }
}
