#![deny(unsafe_code)]

//! # Overview
//!
//! `model` defines the canonical data types shared by every other crate in
//! the workspace: the [`Object`] record that both local and remote inventory
//! entries wrap, the [`Inventory`] snapshot type they are collected into, the
//! prefix-rewriting [`Relocation`] algebra applied during synchronization,
//! and the [`Command`] type the diff engine and transfer manager exchange.
//!
//! # Design
//!
//! Nothing in this crate performs I/O. [`Object`] and [`Inventory`] are
//! plain data; [`relocate`] and [`apply_relocations`] are pure functions over
//! `&str`. Keeping this crate I/O-free means the diff and relocation
//! algebra (the parts of the spec with the tightest test seeds) can be
//! exercised without a filesystem or network dependency.
//!
//! # Invariants
//!
//! - No [`Inventory`] contains an id equal to the empty string.
//! - Within one [`Inventory`], `id` uniquely identifies its entry.
//! - Local object ids never contain the OS-native path separator in
//!   canonical form; they always use `/`.

pub mod command;
pub mod inventory;
pub mod object;
pub mod relocate;

pub use command::{Command, CommandKind};
pub use inventory::{Entry, Inventory, InventoryError};
pub use object::{LocalObject, Object, RemoteObject};
pub use relocate::{Relocation, apply_relocations, relocate};
