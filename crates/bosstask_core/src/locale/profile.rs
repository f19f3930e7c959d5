//! Supported language table and per-locale presentation profile.
//!
//! # Responsibility
//! - Hold the single static table of supported codes and their settings.
//! - Derive layout direction, background asset and accent for any code.
//!
//! # Invariants
//! - Asset/accent lookup is an exact match on the stored code; base codes
//!   such as `fr` get the defaults.
//! - Direction depends only on the primary language subtag.

use crate::locale::tag::primary_language;
use crate::model::language::LanguageOption;
use serde::Serialize;

/// Preference value used before any selection and after reset.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Background asset for codes outside the table.
pub const DEFAULT_BACKGROUND_ASSET: &str = "background_en";

const RTL_LANGUAGES: &[&str] = &[
    "ar", "he", "fa", "ur", "yi", "ps", "sd", "ug", "ckb", "dv",
];

/// Text and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// Direction of the script used by `code`'s primary language.
    pub fn for_language(code: &str) -> Self {
        let language = primary_language(code);
        if RTL_LANGUAGES.contains(&language.as_str()) {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

/// Locale-specific tint for the primary call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    /// Platform accent color.
    System,
    Blue,
    Red,
    Green,
}

impl AccentColor {
    /// Stable name the UI shell maps to a concrete color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

/// Where the currency symbol sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    Prefix,
    Suffix,
}

/// Currency presentation for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    /// Inserted between the symbol and the digits.
    pub spacing: &'static str,
    pub grouping_separator: &'static str,
    pub decimal_separator: &'static str,
}

/// Weekday, month and day-period names written into a pattern in place of
/// `%A`, `%B` and `%p` when chrono's locale data for that language is
/// incomplete.
#[derive(Debug)]
pub struct CalendarNames {
    /// Monday first.
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    pub am: &'static str,
    pub pm: &'static str,
}

/// chrono's `ar_SA` data has an empty `%p` and tatweel-stretched weekdays.
static ARABIC_NAMES: CalendarNames = CalendarNames {
    weekdays: [
        "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد",
    ],
    months: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر",
        "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    am: "ص",
    pm: "م",
};

/// One row of the supported language table.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    pub code: &'static str,
    /// Short label used by the home screen quick-switch picker.
    pub picker_label: &'static str,
    /// Long label used by the settings screen.
    pub settings_label: &'static str,
    pub flag: &'static str,
    /// Listed on the settings screen (the quick-switch lists every row).
    pub in_settings: bool,
    pub background_asset: &'static str,
    pub accent: AccentColor,
    pub currency: CurrencyStyle,
    pub chrono_locale: chrono::Locale,
    pub full_date_pattern: &'static str,
    pub medium_time_pattern: &'static str,
    pub names: Option<&'static CalendarNames>,
}

pub(crate) const ENGLISH_FULL_DATE_PATTERN: &str = "%A, %B %-d, %Y";
pub(crate) const ENGLISH_MEDIUM_TIME_PATTERN: &str = "%-I:%M:%S %p";

/// Every supported language, in picker order.
pub static LANGUAGE_TABLE: &[LanguageSpec] = &[
    LanguageSpec {
        code: "en",
        picker_label: "English",
        settings_label: "English",
        flag: "🇺🇸",
        in_settings: true,
        background_asset: "background_en",
        accent: AccentColor::System,
        currency: CurrencyStyle {
            symbol: "$",
            placement: SymbolPlacement::Prefix,
            spacing: "",
            grouping_separator: ",",
            decimal_separator: ".",
        },
        chrono_locale: chrono::Locale::en_US,
        full_date_pattern: ENGLISH_FULL_DATE_PATTERN,
        medium_time_pattern: ENGLISH_MEDIUM_TIME_PATTERN,
        names: None,
    },
    LanguageSpec {
        code: "fr-CA",
        picker_label: "Français",
        settings_label: "Français (Canada)",
        flag: "🇨🇦",
        in_settings: true,
        background_asset: "background_fr",
        accent: AccentColor::Blue,
        currency: CurrencyStyle {
            symbol: "$",
            placement: SymbolPlacement::Suffix,
            spacing: "\u{a0}",
            grouping_separator: "\u{a0}",
            decimal_separator: ",",
        },
        chrono_locale: chrono::Locale::fr_CA,
        full_date_pattern: "%A %-d %B %Y",
        medium_time_pattern: "%H h %M min %S s",
        names: None,
    },
    LanguageSpec {
        code: "zh-HK",
        picker_label: "中文",
        settings_label: "中文（香港）",
        flag: "🇭🇰",
        in_settings: true,
        background_asset: "background_zh",
        accent: AccentColor::Red,
        currency: CurrencyStyle {
            symbol: "HK$",
            placement: SymbolPlacement::Prefix,
            spacing: "",
            grouping_separator: ",",
            decimal_separator: ".",
        },
        chrono_locale: chrono::Locale::zh_HK,
        full_date_pattern: "%Y年%-m月%-d日%A",
        medium_time_pattern: "%p%-I:%M:%S",
        names: None,
    },
    LanguageSpec {
        code: "ar",
        picker_label: "العربية",
        settings_label: "العربية",
        flag: "🇸🇦",
        in_settings: false,
        background_asset: "background_ar",
        accent: AccentColor::Green,
        currency: CurrencyStyle {
            symbol: "ر.س.\u{200f}",
            placement: SymbolPlacement::Suffix,
            spacing: "\u{a0}",
            grouping_separator: ",",
            decimal_separator: ".",
        },
        chrono_locale: chrono::Locale::ar_SA,
        full_date_pattern: "%A، %-d %B %Y",
        medium_time_pattern: "%-I:%M:%S %p",
        names: Some(&ARABIC_NAMES),
    },
];

/// Exact-match lookup in [`LANGUAGE_TABLE`].
pub fn find_language(code: &str) -> Option<&'static LanguageSpec> {
    LANGUAGE_TABLE.iter().find(|spec| spec.code == code)
}

/// Options for the home screen quick-switch picker.
pub fn picker_language_options() -> Vec<LanguageOption> {
    LANGUAGE_TABLE
        .iter()
        .map(|spec| LanguageOption {
            code: spec.code,
            label: spec.picker_label,
            flag: spec.flag,
        })
        .collect()
}

/// Options for the language settings screen.
pub fn settings_language_options() -> Vec<LanguageOption> {
    LANGUAGE_TABLE
        .iter()
        .filter(|spec| spec.in_settings)
        .map(|spec| LanguageOption {
            code: spec.code,
            label: spec.settings_label,
            flag: spec.flag,
        })
        .collect()
}

/// Presentation decisions derived from one stored language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleProfile {
    /// The code exactly as stored.
    pub code: String,
    pub direction: TextDirection,
    pub background_asset: &'static str,
    pub accent: AccentColor,
}

impl LocaleProfile {
    pub fn for_code(code: &str) -> Self {
        let (background_asset, accent) = match find_language(code) {
            Some(spec) => (spec.background_asset, spec.accent),
            None => (DEFAULT_BACKGROUND_ASSET, AccentColor::System),
        };

        Self {
            code: code.to_string(),
            direction: TextDirection::for_language(code),
            background_asset,
            accent,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}
