//! Configuration shared by the three sync entry points.

use std::sync::Arc;

use model::Relocation;
use transfer::{AbortHandle, CommandInput, Monitor, NullMonitor};

use crate::filter::Filter;

/// Options common to [`crate::bucket_with_local`], [`crate::local_with_bucket`],
/// and [`crate::bucket_with_bucket`].
///
/// Built through [`SyncOptions::builder`]; every field has a spec-mandated
/// default so a caller only sets what they need to change.
#[derive(Clone)]
pub struct SyncOptions {
    /// Execute `deleted` commands against the target. Default `false`.
    pub del: bool,
    /// Compute and return commands without executing any transfer. Default `false`.
    pub dry_run: bool,
    /// Ignore modification time; compare by size alone. Default `false`.
    pub size_only: bool,
    /// Upper bound on in-flight transfers. Default `10`.
    pub max_concurrent_transfers: usize,
    /// Progress/metadata observer.
    pub monitor: Arc<dyn Monitor>,
    /// The abort handle for this invocation.
    pub abort: AbortHandle,
    /// Ordered `(source_prefix, target_prefix)` rewrite rules.
    pub relocations: Vec<Relocation>,
    /// Include/exclude predicates evaluated against ids before diffing.
    pub filters: Vec<Filter>,
    /// Per-command overrides merged into the derived store input.
    pub command_input: CommandInput,
    /// Download-only: collapse the relocated id's directory structure to
    /// its basename. Default `false`.
    pub flatten: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptionsBuilder::default().build()
    }
}

impl SyncOptions {
    /// Starts building a [`SyncOptions`] value.
    #[must_use]
    pub fn builder() -> SyncOptionsBuilder {
        SyncOptionsBuilder::default()
    }
}

/// Fluent builder for [`SyncOptions`].
#[derive(Default)]
pub struct SyncOptionsBuilder {
    del: bool,
    dry_run: bool,
    size_only: bool,
    max_concurrent_transfers: Option<usize>,
    monitor: Option<Arc<dyn Monitor>>,
    abort: Option<AbortHandle>,
    relocations: Vec<Relocation>,
    filters: Vec<Filter>,
    command_input: CommandInput,
    flatten: bool,
}

impl SyncOptionsBuilder {
    /// Sets `del`.
    #[must_use]
    pub fn del(mut self, del: bool) -> Self {
        self.del = del;
        self
    }

    /// Sets `dry_run`.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets `size_only`.
    #[must_use]
    pub fn size_only(mut self, size_only: bool) -> Self {
        self.size_only = size_only;
        self
    }

    /// Sets `max_concurrent_transfers`.
    #[must_use]
    pub fn max_concurrent_transfers(mut self, max: usize) -> Self {
        self.max_concurrent_transfers = Some(max);
        self
    }

    /// Sets the progress/metadata observer.
    #[must_use]
    pub fn monitor(mut self, monitor: Arc<dyn Monitor>) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Sets the abort handle.
    #[must_use]
    pub fn abort(mut self, abort: AbortHandle) -> Self {
        self.abort = Some(abort);
        self
    }

    /// Sets the relocation rule list.
    #[must_use]
    pub fn relocations(mut self, relocations: Vec<Relocation>) -> Self {
        self.relocations = relocations;
        self
    }

    /// Sets the filter list.
    #[must_use]
    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the per-command input overrides.
    #[must_use]
    pub fn command_input(mut self, command_input: CommandInput) -> Self {
        self.command_input = command_input;
        self
    }

    /// Sets `flatten`.
    #[must_use]
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Builds the final [`SyncOptions`].
    #[must_use]
    pub fn build(self) -> SyncOptions {
        SyncOptions {
            del: self.del,
            dry_run: self.dry_run,
            size_only: self.size_only,
            max_concurrent_transfers: self.max_concurrent_transfers.unwrap_or(10),
            monitor: self.monitor.unwrap_or_else(|| Arc::new(NullMonitor)),
            abort: self.abort.unwrap_or_default(),
            relocations: self.relocations,
            filters: self.filters,
            command_input: self.command_input,
            flatten: self.flatten,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_spec() {
        let options = SyncOptions::default();
        assert!(!options.del);
        assert!(!options.dry_run);
        assert!(!options.size_only);
        assert_eq!(options.max_concurrent_transfers, 10);
        assert!(!options.flatten);
        assert!(options.relocations.is_empty());
        assert!(options.filters.is_empty());
        assert!(!options.abort.is_aborted());
    }

    #[test]
    fn builder_overrides_propagate() {
        let options = SyncOptions::builder()
            .del(true)
            .dry_run(true)
            .max_concurrent_transfers(1)
            .build();
        assert!(options.del);
        assert!(options.dry_run);
        assert_eq!(options.max_concurrent_transfers, 1);
    }
}
