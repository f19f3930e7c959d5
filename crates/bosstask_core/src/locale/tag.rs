//! Language tag parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static LANGUAGE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:-([A-Za-z]{4}))?(?:-([A-Za-z]{2}|[0-9]{3}))?$")
        .expect("valid language tag regex")
});

/// Parsed `language[-Script][-REGION]` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    /// Lowercase language subtag, e.g. `zh`.
    pub language: String,
    /// Title-case script subtag, e.g. `Hant`.
    pub script: Option<String>,
    /// Uppercase region subtag, e.g. `HK`.
    pub region: Option<String>,
}

impl LanguageTag {
    /// Parses a code, accepting `_` as separator and any letter case.
    ///
    /// Returns `None` for malformed input; such codes are still stored
    /// verbatim by the preference layer.
    pub fn parse(code: &str) -> Option<Self> {
        let normalized = code.trim().replace('_', "-");
        let captures = LANGUAGE_TAG_RE.captures(&normalized)?;

        let language = captures.get(1)?.as_str().to_ascii_lowercase();
        let script = captures.get(2).map(|m| title_case(m.as_str()));
        let region = captures.get(3).map(|m| m.as_str().to_ascii_uppercase());

        Some(Self {
            language,
            script,
            region,
        })
    }

    /// Canonical `-`-joined form, e.g. `fr_ca` -> `fr-CA`.
    pub fn canonical(&self) -> String {
        let mut out = self.language.clone();
        for part in [&self.script, &self.region].into_iter().flatten() {
            out.push('-');
            out.push_str(part);
        }
        out
    }
}

/// Lowercase primary language of `code`, even when the tag is malformed.
pub fn primary_language(code: &str) -> String {
    if let Some(tag) = LanguageTag::parse(code) {
        return tag.language;
    }
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = first.to_ascii_uppercase().to_string();
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{primary_language, LanguageTag};

    #[test]
    fn parse_splits_language_script_and_region() {
        let tag = LanguageTag::parse("zh_hant_hk").expect("tag should parse");
        assert_eq!(tag.language, "zh");
        assert_eq!(tag.script.as_deref(), Some("Hant"));
        assert_eq!(tag.region.as_deref(), Some("HK"));
        assert_eq!(tag.canonical(), "zh-Hant-HK");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert_eq!(LanguageTag::parse(""), None);
        assert_eq!(LanguageTag::parse("english"), None);
        assert_eq!(LanguageTag::parse("fr-CA-extra"), None);
    }

    #[test]
    fn primary_language_falls_back_to_first_segment() {
        assert_eq!(primary_language("fr-CA"), "fr");
        assert_eq!(primary_language("AR"), "ar");
        assert_eq!(primary_language("klingon-XX-1"), "klingon");
    }
}
