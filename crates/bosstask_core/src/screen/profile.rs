//! Profile screen.

use crate::locale::catalog::localize;
use crate::locale::profile::TextDirection;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: &'static str,
}

/// Static sample profile rendered in the selected language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileScreen {
    pub title: &'static str,
    pub direction: TextDirection,
    pub header: &'static str,
    pub rows: Vec<ProfileRow>,
    pub footer: &'static str,
}

impl ProfileScreen {
    pub fn build(language_code: &str) -> Self {
        let text = |key: &'static str| localize(language_code, key);
        Self {
            title: text("profile_title"),
            direction: TextDirection::for_language(language_code),
            header: text("profile_header"),
            rows: vec![
                ProfileRow {
                    label: text("profile_label_username"),
                    value: text("profile_value_username_example"),
                },
                ProfileRow {
                    label: text("profile_label_role"),
                    value: text("profile_value_role_example"),
                },
            ],
            footer: text("profile_footer_note"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileScreen;

    #[test]
    fn profile_rows_are_localized() {
        let screen = ProfileScreen::build("fr-CA");
        assert_eq!(screen.title, "Profil");
        assert_eq!(screen.rows.len(), 2);
        assert_eq!(screen.rows[1].value, "Chef d'équipe");
    }
}
