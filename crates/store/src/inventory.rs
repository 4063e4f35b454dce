//! Bucket inventory enumeration.

use futures::StreamExt;
use model::{Inventory, Object, RemoteObject};
use object_store::path::Path;

use crate::bucket_ref::BucketRef;
use crate::error::StoreError;

/// Enumerates every object under `bucket`'s prefix into an [`Inventory`].
///
/// Ids are the object's key exactly as the store reports it — no prefix
/// stripping — and pages are unioned transparently by the underlying
/// `object_store` list stream.
///
/// # Errors
///
/// Returns [`StoreError::ListFailed`] if any page of the listing fails.
#[tracing::instrument(skip(bucket), fields(bucket = %bucket.bucket))]
pub async fn list_bucket_objects(bucket: &BucketRef) -> Result<Inventory<RemoteObject>, StoreError> {
    let prefix = bucket.prefix.as_deref().map(Path::from);
    let mut stream = bucket.store.list(prefix.as_ref());
    let mut inventory = Inventory::new();

    while let Some(meta) = stream.next().await {
        let meta = meta.map_err(StoreError::ListFailed)?;
        let id = meta.location.to_string();
        if id.is_empty() {
            continue;
        }
        let last_modified = meta.last_modified.timestamp_millis();
        let object = Object::new(id.clone(), meta.size as u64, last_modified);
        if let Err(error) = inventory.insert(id, RemoteObject::new(object, bucket.bucket.clone())) {
            tracing::warn!(%error, "skipping malformed listing entry");
        }
    }

    tracing::debug!(count = inventory.len(), "bucket listing complete");
    Ok(inventory)
}

/// Deletes every object under `bucket`'s prefix.
///
/// # Errors
///
/// Propagates [`StoreError::ListFailed`] from the initial listing, or
/// [`StoreError::Operation`] if any individual delete fails.
#[tracing::instrument(skip(bucket), fields(bucket = %bucket.bucket))]
pub async fn empty_bucket(bucket: &BucketRef) -> Result<(), StoreError> {
    let inventory = list_bucket_objects(bucket).await?;
    for id in inventory.ids() {
        bucket
            .store
            .delete(&Path::from(id))
            .await
            .map_err(StoreError::Operation)?;
    }
    tracing::debug!(count = inventory.len(), "bucket emptied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;
    use object_store::ObjectStore;
    use std::sync::Arc;

    async fn seeded_store() -> Arc<dyn ObjectStore> {
        let store = InMemory::new();
        store.put(&Path::from("a/b"), vec![1, 2, 3].into()).await.unwrap();
        store.put(&Path::from("a/c"), vec![1].into()).await.unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn lists_every_object_under_the_bucket() {
        let store = seeded_store().await;
        let bucket = BucketRef::new(store, "B");

        let inventory = list_bucket_objects(&bucket).await.unwrap();

        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains("a/b"));
        assert_eq!(inventory.get("a/b").unwrap().object.size, 3);
    }

    #[tokio::test]
    async fn empty_bucket_removes_everything_listed() {
        let store = seeded_store().await;
        let bucket = BucketRef::new(store, "B");

        empty_bucket(&bucket).await.unwrap();

        let inventory = list_bucket_objects(&bucket).await.unwrap();
        assert!(inventory.is_empty());
    }

    #[tokio::test]
    async fn empty_bucket_on_an_empty_bucket_is_a_no_op() {
        let store: Arc<dyn ObjectStore> = Arc::new(InMemory::new());
        let bucket = BucketRef::new(store, "B");

        empty_bucket(&bucket).await.unwrap();
    }
}
