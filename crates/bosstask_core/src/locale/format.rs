//! Locale-aware date, time and currency formatting.
//!
//! # Responsibility
//! - Render "today" in full date style and "now" in medium time style.
//! - Render the sample amount in the locale's currency style.
//!
//! # Invariants
//! - Date/time formatting never fails; unknown codes use English patterns
//!   with the POSIX locale.
//! - Currency formatting fails for codes outside the table; snapshot
//!   callers fall back to the plain numeric string.

use crate::locale::profile::{
    find_language, CalendarNames, CurrencyStyle, LanguageSpec, SymbolPlacement, ENGLISH_FULL_DATE_PATTERN,
    ENGLISH_MEDIUM_TIME_PATTERN,
};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed amount shown in the "sample amount" row.
pub const SAMPLE_AMOUNT: f64 = 12345.67;

/// Currency formatting failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Code has no currency style (unrecognized, base or malformed code).
    UnsupportedLocale(String),
    /// Amount is NaN or infinite.
    NonFiniteAmount,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLocale(code) => {
                write!(f, "no currency format for locale `{code}`")
            }
            Self::NonFiniteAmount => write!(f, "amount must be a finite number"),
        }
    }
}

impl Error for FormatError {}

/// Formatter bound to one language code.
#[derive(Debug, Clone)]
pub struct LocaleFormatter {
    code: String,
    spec: Option<&'static LanguageSpec>,
}

impl LocaleFormatter {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            spec: find_language(code),
        }
    }

    /// Full date style, e.g. `Friday, October 16, 2026`.
    pub fn format_full_date<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        self.format_with(at, |spec| spec.full_date_pattern, ENGLISH_FULL_DATE_PATTERN)
    }

    /// Medium time style, e.g. `2:05:09 PM`.
    pub fn format_medium_time<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        self.format_with(at, |spec| spec.medium_time_pattern, ENGLISH_MEDIUM_TIME_PATTERN)
    }

    fn format_with<Tz: TimeZone>(
        &self,
        at: &DateTime<Tz>,
        pattern: fn(&LanguageSpec) -> &'static str,
        fallback: &'static str,
    ) -> String
    where
        Tz::Offset: Display,
    {
        let Some(spec) = self.spec else {
            return at.format_localized(fallback, chrono::Locale::POSIX).to_string();
        };
        match spec.names {
            Some(names) => {
                let expanded = substitute_names(
                    pattern(spec),
                    names,
                    at.weekday().num_days_from_monday() as usize,
                    at.month0() as usize,
                    at.hour() >= 12,
                );
                at.format_localized(&expanded, spec.chrono_locale).to_string()
            }
            None => at.format_localized(pattern(spec), spec.chrono_locale).to_string(),
        }
    }

    /// Currency style, rounded to cents, e.g. `12 345,67 $` for `fr-CA`.
    pub fn format_currency(&self, amount: f64) -> Result<String, FormatError> {
        let spec = self
            .spec
            .ok_or_else(|| FormatError::UnsupportedLocale(self.code.clone()))?;
        if !amount.is_finite() {
            return Err(FormatError::NonFiniteAmount);
        }
        Ok(render_currency(amount, &spec.currency))
    }

    /// Currency text, or `amount`'s plain `Display` form when the locale
    /// has no currency style.
    pub fn format_currency_or_plain(&self, amount: f64) -> String {
        match self.format_currency(amount) {
            Ok(text) => text,
            Err(err) => {
                log::debug!(
                    "event=currency_format module=locale status=fallback code={} error={}",
                    self.code,
                    err
                );
                format!("{amount}")
            }
        }
    }
}

/// Formatted values shown in the home screen "regional formats" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSnapshot {
    pub today: String,
    pub time: String,
    pub sample_amount: String,
}

/// Builds the snapshot for `code` at a caller-given instant.
pub fn locale_snapshot_at<Tz: TimeZone>(code: &str, at: &DateTime<Tz>) -> LocaleSnapshot
where
    Tz::Offset: Display,
{
    let formatter = LocaleFormatter::new(code);
    LocaleSnapshot {
        today: formatter.format_full_date(at),
        time: formatter.format_medium_time(at),
        sample_amount: formatter.format_currency_or_plain(SAMPLE_AMOUNT),
    }
}

/// Builds the snapshot for `code` at the current local time.
pub fn locale_snapshot(code: &str) -> LocaleSnapshot {
    locale_snapshot_at(code, &Local::now())
}

/// Writes `names` into `pattern` in place of `%A`, `%B` and `%p`; every
/// other specifier (flags included) is kept for chrono.
fn substitute_names(
    pattern: &str,
    names: &CalendarNames,
    weekday_from_monday: usize,
    month0: usize,
    pm: bool,
) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let mut specifier = String::from('%');
        for next in chars.by_ref() {
            specifier.push(next);
            if !matches!(next, '-' | '_' | '^' | '#') {
                break;
            }
        }
        match specifier.as_str() {
            "%A" => out.push_str(names.weekdays[weekday_from_monday % 7]),
            "%B" => out.push_str(names.months[month0 % 12]),
            "%p" => out.push_str(if pm { names.pm } else { names.am }),
            _ => out.push_str(&specifier),
        }
    }
    out
}

fn render_currency(amount: f64, style: &CurrencyStyle) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = group_digits(cents / 100, style.grouping_separator);
    let number = format!("{digits}{}{:02}", style.decimal_separator, cents % 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    match style.placement {
        SymbolPlacement::Prefix => format!("{sign}{}{}{number}", style.symbol, style.spacing),
        SymbolPlacement::Suffix => format!("{sign}{number}{}{}", style.spacing, style.symbol),
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3 * separator.len());
    for (index, digit) in raw.chars().enumerate() {
        if index > 0 && (raw.len() - index) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        group_digits, locale_snapshot_at, substitute_names, FormatError, LocaleFormatter,
        SAMPLE_AMOUNT,
    };
    use crate::locale::profile::find_language;
    use chrono::{TimeZone, Utc};

    fn fixed_instant() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 9)
            .single()
            .expect("valid fixed instant")
    }

    #[test]
    fn english_uses_full_date_and_medium_time() {
        let formatter = LocaleFormatter::new("en");
        assert_eq!(
            formatter.format_full_date(&fixed_instant()),
            "Friday, October 16, 2026"
        );
        assert_eq!(formatter.format_medium_time(&fixed_instant()), "2:05:09 PM");
    }

    #[test]
    fn french_canadian_uses_local_names_and_unit_separated_clock() {
        let formatter = LocaleFormatter::new("fr-CA");
        assert_eq!(
            formatter.format_full_date(&fixed_instant()),
            "vendredi 16 octobre 2026"
        );
        assert_eq!(
            formatter.format_medium_time(&fixed_instant()),
            "14 h 05 min 09 s"
        );
    }

    #[test]
    fn hong_kong_chinese_date_keeps_numeric_fields() {
        let formatter = LocaleFormatter::new("zh-HK");
        let date = formatter.format_full_date(&fixed_instant());
        assert!(date.starts_with("2026年10月16日"), "unexpected date: {date}");
        assert!(formatter
            .format_medium_time(&fixed_instant())
            .ends_with("2:05:09"));
    }

    #[test]
    fn arabic_time_keeps_the_day_period_marker() {
        let formatter = LocaleFormatter::new("ar");
        let morning = Utc
            .with_ymd_and_hms(2026, 10, 16, 2, 5, 9)
            .single()
            .expect("valid morning instant");

        let am = formatter.format_medium_time(&morning);
        let pm = formatter.format_medium_time(&fixed_instant());
        assert_ne!(am, pm);
        assert_eq!(am, "2:05:09 ص");
        assert_eq!(pm, "2:05:09 م");
    }

    #[test]
    fn arabic_full_date_uses_standard_names() {
        let date = LocaleFormatter::new("ar").format_full_date(&fixed_instant());
        assert_eq!(date, "الجمعة، 16 أكتوبر 2026");
        assert!(!date.contains('\u{640}'), "tatweel in {date}");
    }

    #[test]
    fn substitute_names_keeps_other_specifiers_and_escapes() {
        let names = find_language("ar")
            .and_then(|spec| spec.names)
            .expect("arabic names");
        assert_eq!(
            substitute_names("%A %-d %B %%p %p", names, 6, 0, false),
            "الأحد %-d يناير %%p ص"
        );
    }

    #[test]
    fn unknown_code_formats_dates_with_english_patterns() {
        let formatter = LocaleFormatter::new("xx-YY");
        let date = formatter.format_full_date(&fixed_instant());
        assert!(date.ends_with("October 16, 2026"), "unexpected date: {date}");
    }

    #[test]
    fn currency_follows_locale_style() {
        assert_eq!(
            LocaleFormatter::new("en").format_currency(SAMPLE_AMOUNT),
            Ok("$12,345.67".to_string())
        );
        assert_eq!(
            LocaleFormatter::new("fr-CA").format_currency(SAMPLE_AMOUNT),
            Ok("12\u{a0}345,67\u{a0}$".to_string())
        );
        assert_eq!(
            LocaleFormatter::new("zh-HK").format_currency(SAMPLE_AMOUNT),
            Ok("HK$12,345.67".to_string())
        );
        assert_eq!(
            LocaleFormatter::new("en").format_currency(-0.5),
            Ok("-$0.50".to_string())
        );
    }

    #[test]
    fn currency_fails_for_unsupported_codes_and_non_finite_amounts() {
        let err = LocaleFormatter::new("fr").format_currency(SAMPLE_AMOUNT);
        assert_eq!(err, Err(FormatError::UnsupportedLocale("fr".to_string())));

        let err = LocaleFormatter::new("en").format_currency(f64::NAN);
        assert_eq!(err, Err(FormatError::NonFiniteAmount));
    }

    #[test]
    fn snapshot_falls_back_to_plain_number() {
        let snapshot = locale_snapshot_at("not-a-locale", &fixed_instant());
        assert_eq!(snapshot.sample_amount, "12345.67");
        assert!(!snapshot.today.is_empty());
        assert!(!snapshot.time.is_empty());
    }

    #[test]
    fn group_digits_inserts_separators_every_three_digits() {
        assert_eq!(group_digits(0, ","), "0");
        assert_eq!(group_digits(999, ","), "999");
        assert_eq!(group_digits(1_000, ","), "1,000");
        assert_eq!(group_digits(1_234_567, "."), "1.234.567");
    }
}
