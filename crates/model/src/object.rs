//! Canonical inventory record and its storage-specific wrappers.

use std::path::PathBuf;

/// A canonical inventory record.
///
/// Equality of two [`Object`] values is exactly the equality the diff engine
/// relies on: only `id`, `size`, and `last_modified` participate. Neither
/// [`LocalObject`] nor [`RemoteObject`] add fields that affect this
/// comparison; they exist only to carry the storage-specific coordinates
/// (filesystem path, bucket name) alongside the canonical record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Object {
    /// Forward-slash-delimited relative key. Never absolute, never starts
    /// with `/`, never empty.
    pub id: String,
    /// Size in bytes.
    pub size: u64,
    /// Milliseconds since the Unix epoch.
    pub last_modified: i64,
}

impl Object {
    /// Creates a new [`Object`] record.
    #[must_use]
    pub fn new(id: impl Into<String>, size: u64, last_modified: i64) -> Self {
        Self {
            id: id.into(),
            size,
            last_modified,
        }
    }
}

/// An [`Object`] enumerated from a local filesystem tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalObject {
    /// The canonical inventory record.
    pub object: Object,
    /// Absolute filesystem path this entry was enumerated from.
    pub path: PathBuf,
}

impl LocalObject {
    /// Creates a new [`LocalObject`].
    #[must_use]
    pub fn new(object: Object, path: PathBuf) -> Self {
        Self { object, path }
    }
}

/// An [`Object`] enumerated from a bucket prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteObject {
    /// The canonical inventory record.
    pub object: Object,
    /// The bucket this entry was listed from.
    pub bucket: String,
}

impl RemoteObject {
    /// Creates a new [`RemoteObject`].
    #[must_use]
    pub fn new(object: Object, bucket: impl Into<String>) -> Self {
        Self {
            object,
            bucket: bucket.into(),
        }
    }
}
