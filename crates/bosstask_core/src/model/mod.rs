//! Domain model for groups, tasks and language options.
//!
//! # Responsibility
//! - Define the plain records shared by services, screens and FFI.
//! - Provide the seed data used as the initial group collection.
//!
//! # Invariants
//! - Every task and group is identified by a generated `Uuid`.
//! - A group exclusively owns its tasks; tasks keep insertion order.

pub mod language;
pub mod sample;
pub mod task;
