//! A bucket-and-prefix coordinate paired with the client that serves it.

use std::sync::Arc;

use object_store::ObjectStore;

use crate::error::StoreError;

/// A `bucket[/prefix]` coordinate, together with the opaque client capable of
/// serving it.
///
/// Construction of the underlying `Arc<dyn ObjectStore>` — credentials,
/// endpoint, region — is a caller concern; this crate only ever receives an
/// already-authenticated client.
#[derive(Clone)]
pub struct BucketRef {
    /// The opaque object-store client capability.
    pub store: Arc<dyn ObjectStore>,
    /// The bucket name, used only for labeling ([`model::RemoteObject`]) —
    /// the client itself is already scoped to this bucket.
    pub bucket: String,
    /// Optional prefix scoping listing and deletion to a subtree.
    pub prefix: Option<String>,
}

impl BucketRef {
    /// Creates a reference to the whole bucket (no prefix).
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            prefix: None,
        }
    }

    /// Scopes this reference to `prefix`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }

    /// Parses a `bucketName[/prefix]` string (spec.md §6).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyBucketName`] if the bucket component is empty.
    pub fn parse(store: Arc<dyn ObjectStore>, spec: &str) -> Result<Self, StoreError> {
        let mut parts = spec.splitn(2, '/');
        let bucket = parts.next().unwrap_or("");
        if bucket.is_empty() {
            return Err(StoreError::EmptyBucketName);
        }
        let reference = Self::new(store, bucket);
        Ok(match parts.next() {
            Some(prefix) => reference.with_prefix(prefix),
            None => reference,
        })
    }
}
