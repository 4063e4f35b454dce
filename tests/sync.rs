//! Scenario-level integration tests for the three sync entry points.
//!
//! These exercise the full orchestrator flow against an in-memory bucket and
//! a real tempdir tree rather than individual crate units, matching the
//! concrete scenarios seeded by the specification.

use std::sync::Arc;

use bucket_sync::{
    bucket_with_local, local_with_bucket, list_bucket_objects, list_local_objects, Relocation,
    SyncOptions, SyncOptionsBuilder,
};

fn local_tree(files: &[(&str, &[u8])]) -> tempfile::TempDir {
    test_support::local_tree(files)
}

fn bucket(name: &str) -> store::BucketRef {
    test_support::in_memory_bucket(name)
}

#[tokio::test]
async fn full_mirror_with_deletion_matches_source_and_drops_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    for i in 0..200 {
        let contents = format!("payload-{i}");
        std::fs::write(dir.path().join(format!("data/file{i:04}.bin")), contents).unwrap();
    }

    let dest = bucket("B");
    // Foreign key that must be removed once `del` is requested.
    store::put_stream(&dest.store, "xmoj", b"stale".as_slice(), None, |_| {})
        .await
        .unwrap();

    let options = SyncOptions::builder().del(true).build();
    bucket_with_local(dir.path(), &dest, &options).await.unwrap();

    let local_inventory = list_local_objects(dir.path()).unwrap();
    let remote_inventory = list_bucket_objects(&dest).await.unwrap();

    assert_eq!(local_inventory.len(), 200);
    assert_eq!(remote_inventory.len(), 200);
    assert!(!remote_inventory.contains("xmoj"));
}

#[tokio::test]
async fn sync_is_idempotent_on_a_second_run() {
    let dir = local_tree(&[("a/b.txt", b"hello"), ("c.txt", b"world")]);
    let dest = bucket("B");

    bucket_with_local(dir.path(), &dest, &SyncOptions::default()).await.unwrap();

    let outcome = bucket_with_local(
        dir.path(),
        &dest,
        &SyncOptionsBuilder::default().dry_run(true).build(),
    )
    .await
    .unwrap();

    assert!(outcome.commands.is_empty(), "second run must produce no commands");
}

#[tokio::test]
async fn round_trip_preserves_id_set_and_sizes() {
    let src_dir = local_tree(&[("a/b.txt", b"hello"), ("c.txt", b"world!!")]);
    let bridge = bucket("B");
    bucket_with_local(src_dir.path(), &bridge, &SyncOptions::default())
        .await
        .unwrap();

    let dst_dir = tempfile::tempdir().unwrap();
    local_with_bucket(&bridge, dst_dir.path(), &SyncOptions::default())
        .await
        .unwrap();

    let source_inventory = list_local_objects(src_dir.path()).unwrap();
    let round_tripped_inventory = list_local_objects(dst_dir.path()).unwrap();

    let mut source_ids: Vec<&str> = source_inventory.ids().collect();
    let mut round_tripped_ids: Vec<&str> = round_tripped_inventory.ids().collect();
    source_ids.sort_unstable();
    round_tripped_ids.sort_unstable();
    assert_eq!(source_ids, round_tripped_ids);

    for id in source_ids {
        assert_eq!(
            source_inventory.get(id).unwrap().object.size,
            round_tripped_inventory.get(id).unwrap().object.size
        );
    }
}

#[tokio::test]
async fn relocation_during_download_projects_ids_under_local_subdirectory() {
    let source = bucket("B2");
    store::put_stream(&source.store, "def/jkl/xmoj", b"abc".as_slice(), None, |_| {})
        .await
        .unwrap();

    let dest_dir = tempfile::tempdir().unwrap();
    let options = SyncOptions::builder()
        .relocations(vec![Relocation::new("def/jkl", "local-folder")])
        .build();

    local_with_bucket(&source, dest_dir.path(), &options).await.unwrap();

    let contents = std::fs::read(dest_dir.path().join("local-folder/xmoj")).unwrap();
    assert_eq!(contents, b"abc");
}

#[derive(Default)]
struct AbortOnFirstProgress {
    abort: transfer::AbortHandle,
}

impl transfer::Monitor for AbortOnFirstProgress {
    fn on_metadata(&self, _total_size: u64, _total_count: u64) {}

    fn on_progress(&self, _snapshot: transfer::ProgressSnapshot) {
        self.abort.abort();
    }
}

#[tokio::test]
async fn download_sync_fails_with_aborted_when_monitor_trips_on_first_progress() {
    let source = bucket("B2");
    for i in 0..20 {
        store::put_stream(&source.store, &format!("file{i}"), [1u8; 16].as_slice(), None, |_| {})
            .await
            .unwrap();
    }

    let dest_dir = tempfile::tempdir().unwrap();
    let watcher = Arc::new(AbortOnFirstProgress::default());
    let abort = watcher.abort.clone();

    let options = SyncOptions::builder()
        .monitor(watcher)
        .abort(abort)
        .max_concurrent_transfers(1)
        .build();

    let error = local_with_bucket(&source, dest_dir.path(), &options)
        .await
        .unwrap_err();

    assert!(matches!(error, bucket_sync::SyncError::Transfer(transfer::TransferError::Aborted)));
}

#[tokio::test]
async fn serial_execution_with_bound_one_reaches_the_same_final_state_as_unbounded() {
    let dir = local_tree(&[("a", b"1"), ("b", b"22"), ("c", b"333")]);

    let serial_dest = bucket("serial");
    let parallel_dest = bucket("parallel");

    bucket_with_local(
        dir.path(),
        &serial_dest,
        &SyncOptions::builder().max_concurrent_transfers(1).build(),
    )
    .await
    .unwrap();
    bucket_with_local(dir.path(), &parallel_dest, &SyncOptions::default())
        .await
        .unwrap();

    let serial_inventory = list_bucket_objects(&serial_dest).await.unwrap();
    let parallel_inventory = list_bucket_objects(&parallel_dest).await.unwrap();

    assert_eq!(serial_inventory.len(), parallel_inventory.len());
    for id in serial_inventory.ids() {
        assert_eq!(
            serial_inventory.get(id).unwrap().object.size,
            parallel_inventory.get(id).unwrap().object.size
        );
    }
}
