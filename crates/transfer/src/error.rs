//! Errors surfaced while executing a command batch.

use std::path::PathBuf;

use model::Command;
use thiserror::Error;

/// Errors produced by [`crate::execute`].
#[derive(Debug, Error)]
pub enum TransferError {
    /// A command failed after the underlying store exhausted its own retries.
    #[error("transfer failed for {command:?}: {cause}")]
    TransferFailed {
        /// The underlying cause.
        #[source]
        cause: store::StoreError,
        /// The command that failed.
        command: Command,
    },
    /// Local filesystem I/O failed while serving a command.
    #[error("local filesystem error for {command:?}: {cause}")]
    FilesystemError {
        /// The underlying cause.
        #[source]
        cause: std::io::Error,
        /// The command that failed.
        command: Command,
    },
    /// Under `flatten`, two downloaded ids resolved to the same local path.
    #[error("path collision at {path} while flattening downloads")]
    PathCollision {
        /// The colliding local path.
        path: PathBuf,
    },
    /// The abort token was tripped, by the caller or by a prior failure.
    #[error("sync was aborted")]
    Aborted,
    /// The command's `kind` does not match the endpoint pair it was
    /// dispatched against (e.g. an `Upload` whose source is a bucket, not a
    /// local directory).
    #[error("command {command:?} does not match its source/target endpoints")]
    InvalidEndpoint {
        /// The mismatched command.
        command: Command,
    },
}
