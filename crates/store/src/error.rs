//! Error type surfaced by bucket listing and the store-client verbs.

use thiserror::Error;

/// Errors produced by this crate's object-store-facing operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The bucket portion of a `bucketName[/prefix]` reference was empty.
    #[error("bucket name must not be empty")]
    EmptyBucketName,
    /// Listing the bucket exhausted retries or otherwise failed.
    #[error("failed to list bucket contents: {0}")]
    ListFailed(#[source] object_store::Error),
    /// A single store operation (get, put, copy, delete) failed.
    #[error("object store operation failed: {0}")]
    Operation(#[source] object_store::Error),
    /// Reading or writing the local side of a streamed transfer failed.
    #[error("local I/O failed: {0}")]
    Io(#[source] std::io::Error),
}
