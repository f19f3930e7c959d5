//! UI-agnostic view-models for each app screen.
//!
//! # Responsibility
//! - Project `AppCore` state into presentation-ready values.
//! - Own screen-local UI state (the new-task input buffer).
//!
//! # Invariants
//! - Building a screen never mutates core state.
//! - Every user-visible string comes from the localized catalog or the data.

pub mod groups;
pub mod home;
pub mod profile;
pub mod settings;

use crate::locale::profile::TextDirection;
use serde::Serialize;

/// Horizontal alignment of text blocks and section frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Leading,
    Trailing,
}

impl Alignment {
    /// Text hugs the reading-start edge: leading for LTR, trailing for RTL.
    pub fn for_direction(direction: TextDirection) -> Self {
        match direction {
            TextDirection::LeftToRight => Self::Leading,
            TextDirection::RightToLeft => Self::Trailing,
        }
    }
}

/// Screens reachable by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    LanguageSettings,
    ManageGroups,
    GroupDetail,
    Profile,
}
