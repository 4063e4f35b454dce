#![deny(unsafe_code)]

//! # Overview
//!
//! `transfer` executes a [`model::Command`] batch against a source and
//! target [`Endpoint`] with bounded concurrency, publishing progress
//! through a caller-supplied [`Monitor`] and honoring a single shared
//! [`AbortHandle`].
//!
//! # Design
//!
//! A `tokio::sync::Semaphore` bounds in-flight commands; each command runs
//! as its own spawned task that acquires a permit, runs, and releases it.
//! `TransferStatus`'s counters are plain atomics so workers never contend on
//! a lock just to report progress. The whole batch is single-shot: build a
//! [`TransferOptions`], call [`execute`] once, discard it.

pub mod error;
pub mod input;
pub mod manager;
pub mod monitor;
pub mod status;

pub use error::TransferError;
pub use input::{CommandInput, Override};
pub use manager::{execute, Endpoint, TransferOptions};
pub use monitor::{AbortHandle, ChannelMonitor, Monitor, NullMonitor, SyncEvent};
pub use status::{ProgressSnapshot, TransferStatus};
