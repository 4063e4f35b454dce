#![deny(unsafe_code)]

//! # Overview
//!
//! Fixtures shared by every other crate's integration tests: a
//! `tempfile`-backed local tree builder, and an in-memory bucket backed by
//! `object_store`'s own `InMemory` store — no network, no filesystem beyond
//! the tempdir.

use std::sync::Arc;

use object_store::memory::InMemory;
use object_store::ObjectStore;
use store::BucketRef;

/// Builds a temporary directory populated with `files`, each a
/// `(relative_path, contents)` pair. Intermediate directories are created as
/// needed.
///
/// # Panics
///
/// Panics if the filesystem operations fail — this is test setup, not code
/// under test.
#[must_use]
pub fn local_tree(files: &[(&str, &[u8])]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    for (relative, contents) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent directories");
        }
        std::fs::write(&path, contents).expect("write fixture file");
    }
    dir
}

/// Creates a fresh in-memory bucket reference with no prefix.
#[must_use]
pub fn in_memory_bucket(bucket: &str) -> BucketRef {
    let store: Arc<dyn ObjectStore> = Arc::new(InMemory::new());
    BucketRef::new(store, bucket)
}

/// Seeds `bucket` with `files`, each a `(id, contents)` pair.
///
/// # Panics
///
/// Panics if a put fails — this is test setup, not code under test.
pub async fn seed_bucket(bucket: &BucketRef, files: &[(&str, &[u8])]) {
    for (id, contents) in files {
        store::put_stream(&bucket.store, id, *contents, None, |_| {})
            .await
            .expect("seed bucket fixture");
    }
}
