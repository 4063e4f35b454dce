#![deny(unsafe_code)]

//! # Overview
//!
//! `orchestrator` composes the rest of the workspace — local and bucket
//! inventory enumeration, the diff engine, the relocation algebra, and the
//! transfer manager — into the three public sync operations bucket-sync
//! exposes: [`bucket_with_local`], [`local_with_bucket`], and
//! [`bucket_with_bucket`].
//!
//! # Design
//!
//! Each entry point follows the same six-step flow: enumerate both sides,
//! filter both, diff them, relocate the result into commands, and (unless
//! `dry_run`) execute the commands with bounded concurrency. This crate owns
//! no I/O of its own beyond calling into `walk`, `store`, `diff`, and
//! `transfer` — it is purely the glue between them.

pub mod error;
pub mod filter;
pub mod flow;
pub mod options;

pub use error::SyncError;
pub use filter::Filter;
pub use flow::{bucket_with_bucket, bucket_with_local, local_with_bucket, SyncOutcome};
pub use options::{SyncOptions, SyncOptionsBuilder};

pub use store::{empty_bucket, list_bucket_objects, BucketRef, StoreError};
pub use walk::list_local_objects;

/// Pure diff computation, exposed directly for testing (spec.md §6 `util.diff`).
pub use diff::{diff, DiffOptions, DiffResult};
