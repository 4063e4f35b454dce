//! The six-step sync flow shared by all three entry points.

use std::path::Path;
use std::sync::Arc;

use diff::DiffOptions;
use model::{Command, CommandKind, Entry, Inventory};
use store::BucketRef;
use transfer::{Endpoint, TransferOptions};

use crate::error::SyncError;
use crate::filter::passes;
use crate::options::SyncOptions;

/// The result of one sync invocation.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// The commands the diff and relocation stages produced. Populated even
    /// under `dry_run`, where it is the only output.
    pub commands: Vec<Command>,
    /// The final progress counters, if the commands were executed.
    pub progress: Option<transfer::ProgressSnapshot>,
}

/// Mirrors `local_dir` into `bucket_dest`.
///
/// # Errors
///
/// See [`SyncError`].
#[tracing::instrument(skip(options), fields(del = options.del, dry_run = options.dry_run))]
pub async fn bucket_with_local(
    local_dir: &Path,
    bucket_dest: &BucketRef,
    options: &SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    let source = walk::list_local_objects(local_dir)?;
    let target = store::list_bucket_objects(bucket_dest).await?;
    run(
        source,
        target,
        CommandKind::Upload,
        Endpoint::Local(local_dir.to_path_buf()),
        Endpoint::Bucket(Arc::clone(&bucket_dest.store)),
        options,
    )
    .await
}

/// Mirrors `bucket_src` into `local_dir`.
///
/// # Errors
///
/// See [`SyncError`].
#[tracing::instrument(skip(options), fields(del = options.del, dry_run = options.dry_run))]
pub async fn local_with_bucket(
    bucket_src: &BucketRef,
    local_dir: &Path,
    options: &SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    let source = store::list_bucket_objects(bucket_src).await?;
    let target = walk::list_local_objects(local_dir)?;
    run(
        source,
        target,
        CommandKind::Download,
        Endpoint::Bucket(Arc::clone(&bucket_src.store)),
        Endpoint::Local(local_dir.to_path_buf()),
        options,
    )
    .await
}

/// Server-side mirrors `bucket_src` into `bucket_dest`.
///
/// # Errors
///
/// See [`SyncError`].
#[tracing::instrument(skip(options), fields(del = options.del, dry_run = options.dry_run))]
pub async fn bucket_with_bucket(
    bucket_src: &BucketRef,
    bucket_dest: &BucketRef,
    options: &SyncOptions,
) -> Result<SyncOutcome, SyncError> {
    let source = store::list_bucket_objects(bucket_src).await?;
    let target = store::list_bucket_objects(bucket_dest).await?;
    run(
        source,
        target,
        CommandKind::Copy,
        Endpoint::Bucket(Arc::clone(&bucket_src.store)),
        Endpoint::Bucket(Arc::clone(&bucket_dest.store)),
        options,
    )
    .await
}

async fn run<S, T>(
    source: Inventory<S>,
    target: Inventory<T>,
    write_kind: CommandKind,
    source_endpoint: Endpoint,
    target_endpoint: Endpoint,
    options: &SyncOptions,
) -> Result<SyncOutcome, SyncError>
where
    S: Entry + Clone,
    T: Entry + Clone,
{
    let source = apply_filters(&source, &options.filters);
    let target = apply_filters(&target, &options.filters);

    let diff_options = DiffOptions::new().size_only(options.size_only);
    let diff_result = diff::diff(&source, &target, &diff_options);

    let mut commands = Vec::with_capacity(diff_result.created.len() + diff_result.updated.len() + diff_result.deleted.len());
    for object in diff_result.created.into_iter().chain(diff_result.updated) {
        let target_id = model::apply_relocations(&object.id, &options.relocations);
        commands.push(Command::new(write_kind, object.id, target_id, object.size));
    }
    if options.del {
        for object in diff_result.deleted {
            commands.push(Command::new(CommandKind::Delete, object.id.clone(), object.id, object.size));
        }
    }

    tracing::debug!(count = commands.len(), "diff produced command batch");

    if options.dry_run {
        return Ok(SyncOutcome { commands, progress: None });
    }

    let transfer_options = TransferOptions::new()
        .max_concurrent_transfers(options.max_concurrent_transfers)
        .monitor(Arc::clone(&options.monitor))
        .abort(options.abort.clone())
        .command_input(options.command_input.clone())
        .flatten(options.flatten);

    let progress = transfer::execute(commands.clone(), source_endpoint, target_endpoint, transfer_options).await?;

    Ok(SyncOutcome { commands, progress: Some(progress) })
}

fn apply_filters<T: Clone>(inventory: &Inventory<T>, filters: &[crate::filter::Filter]) -> Inventory<T> {
    inventory
        .iter()
        .filter(|(id, _)| passes(id, filters))
        .map(|(id, entry)| (id.to_string(), entry.clone()))
        .collect()
}
