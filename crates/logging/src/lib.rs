//! # Overview
//!
//! `logging` centralises the `tracing` setup shared by every crate in the
//! workspace. Inventory enumeration, the diff engine, and the transfer
//! manager all emit spans and events through `tracing`'s macros directly;
//! this crate only owns the one-time subscriber initialisation so that
//! applications embedding `bucket-sync` do not each reinvent it.
//!
//! # Design
//!
//! [`init`] installs a [`tracing_subscriber::fmt`] subscriber configured from
//! the `RUST_LOG` environment variable (falling back to [`default_filter`]
//! when unset), matching the `tracing`/`tracing-subscriber` pairing used
//! throughout the rest of the workspace. It is safe to call more than once:
//! subsequent calls are no-ops, reported via the returned `bool`.
//!
//! # Examples
//!
//! ```
//! let installed = logging::init();
//! assert!(installed || !installed); // idempotent regardless of call order
//! ```

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set: info-level for this crate's
/// own spans, warn-level for everything else so dependency chatter does not
/// drown out sync progress.
#[must_use]
pub fn default_filter() -> &'static str {
    "warn,model=info,walk=info,store=info,diff=info,transfer=info,orchestrator=info"
}

/// Installs the global `tracing` subscriber.
///
/// Returns `true` if this call installed the subscriber, `false` if a
/// subscriber was already set (by a previous call, or by the embedding
/// application) and this call was a no-op.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_mentions_every_core_crate() {
        let filter = default_filter();
        for crate_name in ["model", "walk", "store", "diff", "transfer", "orchestrator"] {
            assert!(filter.contains(crate_name), "missing {crate_name} in default filter");
        }
    }

    #[test]
    fn init_is_idempotent() {
        init();
        assert!(!init(), "second init() call must report no-op");
    }
}
