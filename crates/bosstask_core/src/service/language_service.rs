//! Language preference use-cases.
//!
//! # Responsibility
//! - Hold the selected language code for the running app.
//! - Write every change through to the preference store.
//!
//! # Invariants
//! - `set_language` and `reset` never fail; store errors are logged and the
//!   in-memory value stays authoritative for the run.
//! - Codes are stored verbatim, supported or not.

use crate::locale::profile::DEFAULT_LANGUAGE_CODE;
use crate::repo::preference_repo::{PreferenceStore, APP_LANGUAGE_KEY};
use log::{info, warn};

/// Before/after pair returned by language writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChange {
    pub previous: String,
    pub current: String,
}

impl LanguageChange {
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Selected-language service over a preference store.
pub struct LanguageService<S: PreferenceStore> {
    store: S,
    current: String,
}

impl<S: PreferenceStore> LanguageService<S> {
    /// Reads the stored code once; missing or unreadable values yield `"en"`.
    pub fn load(store: S) -> Self {
        let current = match store.get(APP_LANGUAGE_KEY) {
            Ok(Some(code)) => code,
            Ok(None) => DEFAULT_LANGUAGE_CODE.to_string(),
            Err(err) => {
                warn!(
                    "event=language_load module=service status=error fallback={} error={}",
                    DEFAULT_LANGUAGE_CODE, err
                );
                DEFAULT_LANGUAGE_CODE.to_string()
            }
        };
        info!("event=language_load module=service status=ok code={current}");
        Self { store, current }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Overwrites the selected code without validation.
    pub fn set_language(&mut self, code: &str) -> LanguageChange {
        let previous = std::mem::replace(&mut self.current, code.to_string());
        if let Err(err) = self.store.set(APP_LANGUAGE_KEY, code) {
            warn!(
                "event=language_persist module=service status=error code={} error={}",
                code, err
            );
        }
        info!(
            "event=language_set module=service status=ok previous={} current={}",
            previous, self.current
        );
        LanguageChange {
            previous,
            current: self.current.clone(),
        }
    }

    /// Restores `"en"` regardless of the current value.
    pub fn reset(&mut self) -> LanguageChange {
        self.set_language(DEFAULT_LANGUAGE_CODE)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageService;
    use crate::repo::preference_repo::{
        MemoryPreferenceStore, PreferenceError, PreferenceResult, PreferenceStore,
        APP_LANGUAGE_KEY,
    };

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
            Err(PreferenceError::InvalidKey(key.to_string()))
        }

        fn set(&mut self, key: &str, _value: &str) -> PreferenceResult<()> {
            Err(PreferenceError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn load_defaults_to_english() {
        let service = LanguageService::load(MemoryPreferenceStore::new());
        assert_eq!(service.current(), "en");
    }

    #[test]
    fn load_reads_stored_code() {
        let store = MemoryPreferenceStore::with_value(APP_LANGUAGE_KEY, "zh-HK");
        let service = LanguageService::load(store);
        assert_eq!(service.current(), "zh-HK");
    }

    #[test]
    fn set_language_accepts_unsupported_codes_and_persists() {
        let mut service = LanguageService::load(MemoryPreferenceStore::new());
        let change = service.set_language("tlh");

        assert_eq!(change.previous, "en");
        assert_eq!(change.current, "tlh");
        assert_eq!(
            service.store().get(APP_LANGUAGE_KEY).unwrap().as_deref(),
            Some("tlh")
        );
    }

    #[test]
    fn reset_always_returns_to_english() {
        let mut service = LanguageService::load(MemoryPreferenceStore::new());
        for code in ["fr-CA", "ar", "", "en"] {
            service.set_language(code);
            let change = service.reset();
            assert_eq!(change.current, "en");
            assert_eq!(service.current(), "en");
        }
    }

    #[test]
    fn store_failures_do_not_block_language_changes() {
        let mut service = LanguageService::load(FailingStore);
        assert_eq!(service.current(), "en");

        let change = service.set_language("fr-CA");
        assert!(!change.is_noop());
        assert_eq!(service.current(), "fr-CA");
    }
}
