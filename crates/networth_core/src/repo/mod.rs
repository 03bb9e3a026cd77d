//! Key-value slot persistence backends.
//!
//! # Responsibility
//! - Define the slot read/write contract used by the storage adapter.
//! - Keep SQLite details inside the core persistence boundary.
//!
//! # Invariants
//! - A slot holds exactly one opaque string value per key.
//! - Backends never interpret slot contents.

pub mod slot_repo;
