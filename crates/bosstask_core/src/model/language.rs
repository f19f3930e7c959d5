//! Selectable UI language value.

use serde::Serialize;

/// One entry of a language list (picker or settings screen).
///
/// Options are static configuration and never created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageOption {
    /// Language/region identifier stored in the preference, e.g. `fr-CA`.
    pub code: &'static str,
    /// Display label in the language's own script.
    pub label: &'static str,
    /// Flag glyph shown before the label.
    pub flag: &'static str,
}

impl LanguageOption {
    /// Picker text shown as `"<flag> <label>"`.
    pub fn display_text(&self) -> String {
        format!("{} {}", self.flag, self.label)
    }
}
