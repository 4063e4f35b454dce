//! The four store-client verbs: upload, download, copy, delete.
//!
//! These are intentionally thin wrappers over `object_store`: concurrency
//! bounding, cancellation, and progress accounting are the `transfer`
//! crate's responsibility, not this one's.

use std::sync::Arc;

use bytes::Bytes;
use futures::Stream;
use futures::StreamExt;
use object_store::buffered::BufWriter;
use object_store::path::Path;
use object_store::ObjectStore;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

use crate::error::StoreError;

/// Bytes read per chunk while streaming a local file into the store.
const UPLOAD_CHUNK_BYTES: usize = 256 * 1024;

/// Uploads `reader`'s content to `id`, streaming it in bounded chunks.
///
/// `on_chunk` is invoked with the number of bytes read after each chunk is
/// durably written, so a caller can advance a progress counter without this
/// function needing to know about one. `content_type`, when set, is attached
/// to the object as its `Content-Type` attribute — the one per-command input
/// override this crate applies directly, since it is the override every
/// `object_store` backend understands uniformly.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if reading the local source fails, or
/// [`StoreError::Operation`] if the store rejects the upload.
pub async fn put_stream<R>(
    store: &Arc<dyn ObjectStore>,
    id: &str,
    mut reader: R,
    content_type: Option<String>,
    mut on_chunk: impl FnMut(u64) + Send,
) -> Result<(), StoreError>
where
    R: AsyncRead + Unpin + Send,
{
    let path = Path::from(id);
    let mut writer = BufWriter::new(Arc::clone(store), path);
    if let Some(content_type) = content_type {
        let mut attributes = object_store::Attributes::new();
        attributes.insert(object_store::Attribute::ContentType, content_type.into());
        writer = writer.with_attributes(attributes);
    }
    let mut buf = vec![0u8; UPLOAD_CHUNK_BYTES];

    loop {
        let read = reader.read(&mut buf).await.map_err(StoreError::Io)?;
        if read == 0 {
            break;
        }
        writer
            .write_all(&buf[..read])
            .await
            .map_err(StoreError::Io)?;
        on_chunk(read as u64);
    }

    writer.shutdown().await.map_err(StoreError::Io)?;
    Ok(())
}

/// Requests `id` and returns a stream of its body chunks.
///
/// # Errors
///
/// Returns [`StoreError::Operation`] if the object cannot be opened, or if
/// reading any chunk of its body fails.
pub async fn get_stream(
    store: &Arc<dyn ObjectStore>,
    id: &str,
) -> Result<impl Stream<Item = Result<Bytes, StoreError>>, StoreError> {
    let path = Path::from(id);
    let result = store.get(&path).await.map_err(StoreError::Operation)?;
    Ok(result.into_stream().map(|chunk| chunk.map_err(StoreError::Operation)))
}

/// Issues a server-side copy from `source_id` to `target_id` within `store`.
///
/// # Errors
///
/// Returns [`StoreError::Operation`] if the store rejects the copy.
pub async fn copy(store: &Arc<dyn ObjectStore>, source_id: &str, target_id: &str) -> Result<(), StoreError> {
    store
        .copy(&Path::from(source_id), &Path::from(target_id))
        .await
        .map_err(StoreError::Operation)
}

/// Deletes `id` from `store`.
///
/// # Errors
///
/// Returns [`StoreError::Operation`] if the store rejects the delete.
pub async fn delete(store: &Arc<dyn ObjectStore>, id: &str) -> Result<(), StoreError> {
    store.delete(&Path::from(id)).await.map_err(StoreError::Operation)
}
