//! Home screen: welcome header, locale theme, regional formats, culturally
//! ordered confirmation bar, quick language switcher and navigation.

use crate::locale::catalog::localize;
use crate::locale::format::{locale_snapshot_at, LocaleSnapshot};
use crate::locale::profile::{picker_language_options, AccentColor, LocaleProfile, TextDirection};
use crate::model::language::LanguageOption;
use crate::repo::preference_repo::PreferenceStore;
use crate::screen::{Alignment, Destination};
use crate::service::app_service::AppCore;
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonRole {
    /// Confirming action (OK).
    Primary,
    /// Dismissing action (Cancel).
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationButton {
    pub role: ButtonRole,
    pub label: &'static str,
    pub icon: &'static str,
}

/// OK/Cancel pair laid out in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationBar {
    pub title: &'static str,
    pub body: &'static str,
    /// Left-to-right visual order.
    pub buttons: [ConfirmationButton; 2],
}

impl ConfirmationBar {
    fn build(language_code: &str, direction: TextDirection) -> Self {
        let rtl = direction.is_rtl();
        let primary = ConfirmationButton {
            role: ButtonRole::Primary,
            label: localize(language_code, "ok_button_label"),
            icon: if rtl { "checkmark.circle" } else { "checkmark.circle.fill" },
        };
        let secondary = ConfirmationButton {
            role: ButtonRole::Secondary,
            label: localize(language_code, "cancel_button_label"),
            icon: if rtl { "xmark.circle.fill" } else { "xmark.circle" },
        };

        Self {
            title: localize(language_code, "cultural_section_title"),
            body: localize(language_code, "cultural_section_body"),
            buttons: if rtl {
                [primary, secondary]
            } else {
                [secondary, primary]
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerItem {
    pub option: LanguageOption,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub destination: Destination,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatsSection {
    pub title: &'static str,
    pub today_label: &'static str,
    pub time_label: &'static str,
    pub amount_label: &'static str,
    pub values: LocaleSnapshot,
}

/// Everything the home screen renders for the selected language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeScreen {
    pub language_code: String,
    pub title: &'static str,
    pub direction: TextDirection,
    pub alignment: Alignment,
    pub welcome_title: &'static str,
    pub welcome_message: &'static str,
    pub theme_title: &'static str,
    pub theme_caption: &'static str,
    pub background_asset: &'static str,
    pub formats: FormatsSection,
    pub cta_description: &'static str,
    pub cta_button: &'static str,
    pub accent: AccentColor,
    pub confirmation: ConfirmationBar,
    pub picker_title: &'static str,
    pub picker_accessibility_label: &'static str,
    pub picker: Vec<PickerItem>,
    pub settings: NavItem,
    pub navigation: Vec<NavItem>,
}

impl HomeScreen {
    /// Builds the screen with regional formats rendered at `at`.
    pub fn build_at<S, Tz>(core: &AppCore<S>, at: &DateTime<Tz>) -> Self
    where
        S: PreferenceStore,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let code = core.language_code();
        let profile = LocaleProfile::for_code(code);
        let text = |key: &'static str| localize(code, key);

        let picker = picker_language_options()
            .into_iter()
            .map(|option| PickerItem {
                text: option.display_text(),
                selected: option.code == code,
                option,
            })
            .collect();

        Self {
            language_code: code.to_string(),
            title: text("app_title"),
            direction: profile.direction,
            alignment: Alignment::for_direction(profile.direction),
            welcome_title: text("welcome_title"),
            welcome_message: text("welcome_message"),
            theme_title: text("localized_image_section_title"),
            theme_caption: text("localized_image_caption"),
            background_asset: profile.background_asset,
            formats: FormatsSection {
                title: text("locale_section_title"),
                today_label: text("today_is"),
                time_label: text("locale_time_label"),
                amount_label: text("locale_number_label"),
                values: locale_snapshot_at(code, at),
            },
            cta_description: text("cta_description"),
            cta_button: text("cta_primary_button"),
            accent: profile.accent,
            confirmation: ConfirmationBar::build(code, profile.direction),
            picker_title: text("language_switcher_title"),
            picker_accessibility_label: text("language_picker_accessibility_label"),
            picker,
            settings: NavItem {
                destination: Destination::LanguageSettings,
                label: text("settings_title"),
                icon: "gearshape",
            },
            navigation: vec![
                NavItem {
                    destination: Destination::ManageGroups,
                    label: text("nav_manage_groups"),
                    icon: "list.bullet.rectangle",
                },
                NavItem {
                    destination: Destination::Profile,
                    label: text("nav_profile"),
                    icon: "person",
                },
            ],
        }
    }

    /// Builds the screen at the current local time.
    pub fn build<S: PreferenceStore>(core: &AppCore<S>) -> Self {
        Self::build_at(core, &Local::now())
    }

    /// Code of the picker item currently marked selected, if any.
    pub fn selected_picker_code(&self) -> Option<&'static str> {
        self.picker
            .iter()
            .find(|item| item.selected)
            .map(|item| item.option.code)
    }
}
