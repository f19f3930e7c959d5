//! Flutter bridge crate for BOSS Task Tracker.
//!
//! Dart bindings are generated from the `api` module.

pub mod api;
