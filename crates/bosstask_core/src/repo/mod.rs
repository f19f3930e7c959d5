//! Key-value preference storage.
//!
//! # Responsibility
//! - Define the storage contract used by the language preference service.
//! - Keep SQLite details out of the service layer.
//!
//! # Invariants
//! - Keys are non-empty after trimming.
//! - Values are stored verbatim; no validation of language codes here.

pub mod preference_repo;
