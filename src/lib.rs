#![deny(unsafe_code)]

//! # Overview
//!
//! `bucket_sync` is a bidirectional synchronization engine between a local
//! filesystem tree and an object-store bucket (and between two bucket
//! prefixes). It brings a target into structural equality with a source:
//! missing objects are transferred, diverged objects are overwritten, and,
//! optionally, objects that exist only at the target are deleted.
//!
//! # Design
//!
//! This crate is a thin facade: every module here is a re-export from one
//! of the workspace's crates (`model`, `walk`, `store`, `diff`, `transfer`,
//! `orchestrator`), so a caller depends on one crate instead of six.
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn run(client: Arc<dyn bucket_sync::ObjectStore>) -> Result<(), bucket_sync::SyncError> {
//! let bucket = bucket_sync::BucketRef::new(client, "my-bucket");
//! let outcome = bucket_sync::bucket_with_local(Path::new("/data"), &bucket, &bucket_sync::SyncOptions::default()).await?;
//! println!("{} commands executed", outcome.commands.len());
//! # Ok(())
//! # }
//! ```

pub use model::{
    apply_relocations, relocate, Command, CommandKind, Entry, Inventory, InventoryError, LocalObject, Object,
    Relocation, RemoteObject,
};
pub use walk::{list_local_objects, WalkError};
pub use store::{empty_bucket, list_bucket_objects, BucketRef, ObjectStore, StoreError};
pub use diff::{diff, DiffOptions, DiffResult};
pub use transfer::{
    AbortHandle, ChannelMonitor, CommandInput, Endpoint, Monitor, NullMonitor, Override, ProgressSnapshot,
    SyncEvent, TransferError, TransferOptions, TransferStatus,
};
pub use orchestrator::{
    bucket_with_bucket, bucket_with_local, local_with_bucket, Filter, SyncError, SyncOptions, SyncOptionsBuilder,
    SyncOutcome,
};

/// Installs a `tracing` subscriber reading `RUST_LOG`, falling back to the
/// workspace's default filter. Returns `false` if a subscriber was already
/// installed.
pub fn init_logging() -> bool {
    logging::init()
}
