#![deny(unsafe_code)]

//! # Overview
//!
//! `store` is the bucket-facing half of bucket-sync: it enumerates a bucket
//! prefix into a [`model::Inventory`] and exposes the four store-client
//! verbs (upload, download, copy, delete) the transfer manager composes.
//!
//! # Design
//!
//! The "concrete object-store SDK" a sync engine ultimately talks to is
//! treated as an opaque capability. Concretely, that capability is any
//! `Arc<dyn object_store::ObjectStore>` — the caller constructs and
//! authenticates it; this crate never does. [`BucketRef`] pairs that client
//! with the `bucket[/prefix]` coordinate a sync operates over.

pub mod bucket_ref;
pub mod error;
pub mod inventory;
pub mod ops;

pub use bucket_ref::BucketRef;
pub use error::StoreError;
pub use inventory::{empty_bucket, list_bucket_objects};
pub use ops::{copy, delete, get_stream, put_stream};

pub use object_store::ObjectStore;
