//! Core use-case services.
//!
//! # Responsibility
//! - Own the language preference and the in-memory group collection.
//! - Publish a change event after every successful mutation.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod app_service;
pub mod group_service;
pub mod language_service;
pub mod observer;
