//! Locale derivation from the stored language code.
//!
//! # Responsibility
//! - Map a language code to direction, background asset and accent color.
//! - Resolve localized UI strings with a base-language fallback chain.
//! - Format the date, time and sample currency amount for a locale.
//!
//! # Invariants
//! - Every function here is pure: same code (and instant) gives same output.
//! - Unrecognized codes never fail; they resolve to the default profile.

pub mod catalog;
pub mod format;
pub mod profile;
pub mod tag;
