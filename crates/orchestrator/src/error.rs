//! The public error type for every sync entry point.

use thiserror::Error;

/// Errors a sync invocation can fail with.
///
/// Each stage of the flow (local enumeration, bucket enumeration, transfer
/// execution) has its own error enum; this type unifies them behind one
/// `?`-friendly surface. The diff stage is infallible and so contributes no
/// variant.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Local directory enumeration failed.
    #[error(transparent)]
    LocalInventory(#[from] walk::WalkError),
    /// Bucket enumeration or a store-client verb failed.
    #[error(transparent)]
    RemoteInventory(#[from] store::StoreError),
    /// Command batch execution failed.
    #[error(transparent)]
    Transfer(#[from] transfer::TransferError),
}
