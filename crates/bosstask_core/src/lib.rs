//! Core domain logic for BOSS Task Tracker.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod locale;
pub mod logging;
pub mod model;
pub mod repo;
pub mod screen;
pub mod service;

pub use locale::catalog::{localize, CatalogLanguage};
pub use locale::format::{
    locale_snapshot, locale_snapshot_at, FormatError, LocaleFormatter, LocaleSnapshot,
    SAMPLE_AMOUNT,
};
pub use locale::profile::{
    picker_language_options, settings_language_options, AccentColor, LocaleProfile,
    TextDirection, DEFAULT_LANGUAGE_CODE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::language::LanguageOption;
pub use model::task::{GroupId, TaskGroup, TaskId, TaskItem, TaskState};
pub use repo::preference_repo::{
    MemoryPreferenceStore, PreferenceError, PreferenceResult, PreferenceStore,
    SqlitePreferenceStore, APP_LANGUAGE_KEY,
};
pub use service::app_service::AppCore;
pub use service::group_service::{GroupService, GroupServiceError, GroupServiceResult};
pub use service::language_service::{LanguageChange, LanguageService};
pub use service::observer::{ChangeBus, StateChange, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
