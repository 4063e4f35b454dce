//! Bounded-concurrency execution of a command batch.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use model::{Command, CommandKind};
use object_store::ObjectStore;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, Semaphore};

use crate::error::TransferError;
use crate::input::CommandInput;
use crate::monitor::{AbortHandle, Monitor, NullMonitor};
use crate::status::{ProgressSnapshot, TransferStatus};

/// One side of a transfer batch: a local directory root, or a bucket-backed
/// store client.
#[derive(Clone)]
pub enum Endpoint {
    /// An absolute local directory that commands read from or write to.
    Local(PathBuf),
    /// A bucket-backed store commands read from or write to.
    Bucket(Arc<dyn ObjectStore>),
}

/// Configuration for one [`execute`] call.
pub struct TransferOptions {
    /// Upper bound on in-flight commands.
    pub max_concurrent_transfers: usize,
    /// Progress/metadata observer.
    pub monitor: Arc<dyn Monitor>,
    /// The abort token for this batch.
    pub abort: AbortHandle,
    /// Per-command overrides merged into the derived store input.
    pub command_input: CommandInput,
    /// Download-only: write under the relocated id's basename, not its full
    /// relative path.
    pub flatten: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            max_concurrent_transfers: 10,
            monitor: Arc::new(NullMonitor),
            abort: AbortHandle::new(),
            command_input: CommandInput::default(),
            flatten: false,
        }
    }
}

impl TransferOptions {
    /// Creates options with the library defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the concurrency bound.
    #[must_use]
    pub fn max_concurrent_transfers(mut self, max: usize) -> Self {
        self.max_concurrent_transfers = max;
        self
    }

    /// Sets the progress/metadata observer.
    #[must_use]
    pub fn monitor(mut self, monitor: Arc<dyn Monitor>) -> Self {
        self.monitor = monitor;
        self
    }

    /// Sets the abort handle.
    #[must_use]
    pub fn abort(mut self, abort: AbortHandle) -> Self {
        self.abort = abort;
        self
    }

    /// Sets the per-command input overrides.
    #[must_use]
    pub fn command_input(mut self, command_input: CommandInput) -> Self {
        self.command_input = command_input;
        self
    }

    /// Sets `flatten`.
    #[must_use]
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }
}

/// Executes `commands` against `source`/`target` with bounded concurrency.
///
/// Emits `metadata` to `options.monitor` before the first command starts,
/// then a `progress` snapshot after every size or count change. A failing
/// command trips the abort token, after which queued commands never start
/// and in-flight ones race it to completion.
///
/// # Errors
///
/// Returns the first [`TransferError`] observed, or [`TransferError::Aborted`]
/// if the token was already tripped when `execute` was called.
pub async fn execute(
    commands: Vec<Command>,
    source: Endpoint,
    target: Endpoint,
    options: TransferOptions,
) -> Result<ProgressSnapshot, TransferError> {
    let total_count = commands.len() as u64;
    let total_size: u64 = commands.iter().map(|command| command.size).sum();
    let status = Arc::new(TransferStatus::new(total_size, total_count));
    options.monitor.on_metadata(total_size, total_count);

    let semaphore = Arc::new(Semaphore::new(options.max_concurrent_transfers.max(1)));
    let token = options.abort.token();
    let written_paths: Arc<Mutex<HashSet<PathBuf>>> = Arc::new(Mutex::new(HashSet::new()));
    let first_error: Arc<Mutex<Option<TransferError>>> = Arc::new(Mutex::new(None));

    let mut handles = Vec::with_capacity(commands.len());
    for command in commands {
        if token.is_cancelled() {
            break;
        }

        let semaphore = Arc::clone(&semaphore);
        let source = source.clone();
        let target = target.clone();
        let status = Arc::clone(&status);
        let monitor = Arc::clone(&options.monitor);
        let token = token.clone();
        let written_paths = Arc::clone(&written_paths);
        let first_error = Arc::clone(&first_error);
        let command_input = options.command_input.clone();
        let flatten = options.flatten;

        handles.push(tokio::spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return;
            };
            if token.is_cancelled() {
                return;
            }

            let outcome = tokio::select! {
                biased;
                () = token.cancelled() => Err(TransferError::Aborted),
                outcome = run_command(
                    &command,
                    &source,
                    &target,
                    &command_input,
                    flatten,
                    &written_paths,
                    status.as_ref(),
                    monitor.as_ref(),
                ) => outcome,
            };

            match outcome {
                Ok(()) => {
                    status.increment_count();
                    monitor.on_progress(status.snapshot());
                }
                Err(error) => {
                    token.cancel();
                    let mut slot = first_error.lock().await;
                    if slot.is_none() {
                        *slot = Some(error);
                    }
                }
            }
        }));
    }

    for handle in handles {
        let _ = handle.await;
    }

    if token.is_cancelled() {
        let mut slot = first_error.lock().await;
        return Err(slot.take().unwrap_or(TransferError::Aborted));
    }

    Ok(status.snapshot())
}

async fn run_command(
    command: &Command,
    source: &Endpoint,
    target: &Endpoint,
    command_input: &CommandInput,
    flatten: bool,
    written_paths: &Arc<Mutex<HashSet<PathBuf>>>,
    status: &TransferStatus,
    monitor: &dyn Monitor,
) -> Result<(), TransferError> {
    match command.kind {
        CommandKind::Upload => upload(command, source, target, command_input, status, monitor).await,
        CommandKind::Download => download(command, source, target, flatten, written_paths, status, monitor).await,
        CommandKind::Copy => copy(command, source, target, status, monitor).await,
        CommandKind::Delete => delete(command, target, status, monitor).await,
    }
}

async fn upload(
    command: &Command,
    source: &Endpoint,
    target: &Endpoint,
    command_input: &CommandInput,
    status: &TransferStatus,
    monitor: &dyn Monitor,
) -> Result<(), TransferError> {
    let Endpoint::Local(root) = source else {
        return Err(TransferError::InvalidEndpoint { command: command.clone() });
    };
    let Endpoint::Bucket(store) = target else {
        return Err(TransferError::InvalidEndpoint { command: command.clone() });
    };

    let path = root.join(id_to_native_path(&command.source_id));
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|cause| TransferError::FilesystemError { cause, command: command.clone() })?;

    let content_type = command_input.resolve_content_type(&command.target_id);
    store::put_stream(store, &command.target_id, file, content_type, |bytes| {
        status.add_size(bytes);
        monitor.on_progress(status.snapshot());
    })
    .await
    .map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })
}

async fn download(
    command: &Command,
    source: &Endpoint,
    target: &Endpoint,
    flatten: bool,
    written_paths: &Arc<Mutex<HashSet<PathBuf>>>,
    status: &TransferStatus,
    monitor: &dyn Monitor,
) -> Result<(), TransferError> {
    let Endpoint::Bucket(store) = source else {
        return Err(TransferError::InvalidEndpoint { command: command.clone() });
    };
    let Endpoint::Local(root) = target else {
        return Err(TransferError::InvalidEndpoint { command: command.clone() });
    };

    let relative = if flatten {
        PathBuf::from(basename(&command.target_id))
    } else {
        id_to_native_path(&command.target_id)
    };
    let path = root.join(&relative);

    {
        let mut written = written_paths.lock().await;
        if !written.insert(path.clone()) {
            return Err(TransferError::PathCollision { path });
        }
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|cause| TransferError::FilesystemError { cause, command: command.clone() })?;
    }

    let mut stream = store::get_stream(store, &command.source_id)
        .await
        .map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })?;

    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|cause| TransferError::FilesystemError { cause, command: command.clone() })?;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })?;
        file.write_all(&chunk)
            .await
            .map_err(|cause| TransferError::FilesystemError { cause, command: command.clone() })?;
        status.add_size(chunk.len() as u64);
        monitor.on_progress(status.snapshot());
    }

    file.shutdown()
        .await
        .map_err(|cause| TransferError::FilesystemError { cause, command: command.clone() })?;

    Ok(())
}

async fn copy(
    command: &Command,
    source: &Endpoint,
    target: &Endpoint,
    status: &TransferStatus,
    monitor: &dyn Monitor,
) -> Result<(), TransferError> {
    let Endpoint::Bucket(source_store) = source else {
        return Err(TransferError::InvalidEndpoint { command: command.clone() });
    };
    let Endpoint::Bucket(target_store) = target else {
        return Err(TransferError::InvalidEndpoint { command: command.clone() });
    };

    if Arc::ptr_eq(source_store, target_store) {
        store::copy(source_store, &command.source_id, &command.target_id)
            .await
            .map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })?;
        status.add_size(command.size);
        monitor.on_progress(status.snapshot());
        return Ok(());
    }

    // Cross-store copy: the two bucket references do not share a client, so
    // there is no server-side copy primitive available. Stream through.
    let stream = store::get_stream(source_store, &command.source_id)
        .await
        .map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })?;
    let mapped = stream.map(|chunk| {
        chunk.map_err(|error| std::io::Error::new(std::io::ErrorKind::Other, error.to_string()))
    });
    let reader = tokio_util::io::StreamReader::new(mapped);

    store::put_stream(target_store, &command.target_id, reader, None, |bytes| {
        status.add_size(bytes);
        monitor.on_progress(status.snapshot());
    })
    .await
    .map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })
}

async fn delete(
    command: &Command,
    target: &Endpoint,
    status: &TransferStatus,
    monitor: &dyn Monitor,
) -> Result<(), TransferError> {
    match target {
        Endpoint::Local(root) => {
            let path = root.join(id_to_native_path(&command.target_id));
            tokio::fs::remove_file(&path)
                .await
                .map_err(|cause| TransferError::FilesystemError { cause, command: command.clone() })?;
        }
        Endpoint::Bucket(store) => {
            store::delete(store, &command.target_id)
                .await
                .map_err(|cause| TransferError::TransferFailed { cause, command: command.clone() })?;
        }
    }
    status.add_size(command.size);
    monitor.on_progress(status.snapshot());
    Ok(())
}

fn id_to_native_path(id: &str) -> PathBuf {
    id.split('/').collect()
}

fn basename(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}
