//! Language settings screen.

use crate::locale::catalog::localize;
use crate::locale::profile::{settings_language_options, TextDirection};
use crate::model::language::LanguageOption;
use crate::repo::preference_repo::PreferenceStore;
use crate::service::app_service::AppCore;
use crate::service::language_service::LanguageChange;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRow {
    pub option: LanguageOption,
    /// Shows the checkmark.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSettingsScreen {
    pub title: &'static str,
    pub direction: TextDirection,
    pub language_section_title: &'static str,
    pub rows: Vec<LanguageRow>,
    pub reset_section_title: &'static str,
    pub reset_description: &'static str,
    pub reset_button: &'static str,
}

impl LanguageSettingsScreen {
    pub fn build<S: PreferenceStore>(core: &AppCore<S>) -> Self {
        let code = core.language_code();
        let text = |key: &'static str| localize(code, key);

        Self {
            title: text("settings_title"),
            direction: TextDirection::for_language(code),
            language_section_title: text("settings_language_section_title"),
            rows: settings_language_options()
                .into_iter()
                .map(|option| LanguageRow {
                    selected: option.code == code,
                    option,
                })
                .collect(),
            reset_section_title: text("settings_reset_section_title"),
            reset_description: text("settings_reset_description"),
            reset_button: text("settings_reset_button"),
        }
    }

    /// Row tap: stores the row's code.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn select<S: PreferenceStore>(
        &self,
        core: &mut AppCore<S>,
        index: usize,
    ) -> Option<LanguageChange> {
        let row = self.rows.get(index)?;
        Some(core.set_language(row.option.code))
    }

    /// Reset button: stores `"en"`.
    pub fn reset<S: PreferenceStore>(&self, core: &mut AppCore<S>) -> LanguageChange {
        core.reset_language()
    }
}

#[cfg(test)]
mod tests {
    use super::LanguageSettingsScreen;
    use crate::repo::preference_repo::MemoryPreferenceStore;
    use crate::service::app_service::AppCore;

    #[test]
    fn checkmark_follows_selection_and_reset() {
        let mut core = AppCore::new(MemoryPreferenceStore::new());
        let screen = LanguageSettingsScreen::build(&core);
        assert!(screen.rows[0].selected);

        let change = screen.select(&mut core, 1).expect("row exists");
        assert_eq!(change.current, "fr-CA");

        let screen = LanguageSettingsScreen::build(&core);
        assert_eq!(screen.title, "Paramètres");
        let selected: Vec<_> = screen.rows.iter().map(|row| row.selected).collect();
        assert_eq!(selected, vec![false, true, false]);

        screen.reset(&mut core);
        assert_eq!(core.language_code(), "en");
    }

    #[test]
    fn arabic_selection_leaves_no_row_checked() {
        let mut core = AppCore::new(MemoryPreferenceStore::new());
        core.set_language("ar");
        let screen = LanguageSettingsScreen::build(&core);
        assert!(screen.rows.iter().all(|row| !row.selected));
        assert!(screen.direction.is_rtl());
        assert!(screen.select(&mut core, 9).is_none());
    }
}
