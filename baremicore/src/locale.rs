//! Languages, UI strings and font roles

use serde::{Deserialize, Serialize};

use crate::format::LocaleProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

/// Static UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub clear: &'static str,
    pub last_input: &'static str,
    /// Label of the language switch; names the language you switch *to*.
    pub toggle_language: &'static str,
}

const FA_STRINGS: Strings = Strings {
    title: "بارمی",
    clear: "پاک",
    last_input: "آخرین ورودی: ",
    toggle_language: "En",
};

const EN_STRINGS: Strings = Strings {
    title: "Baremi",
    clear: "C",
    last_input: "Last input: ",
    toggle_language: "فا",
};

/// Font family names, resolved by the theme when fonts are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontRoles {
    pub number: &'static str,
    pub text: &'static str,
    pub operator: &'static str,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::Fa => Self::En,
            Self::En => Self::Fa,
        }
    }

    pub fn profile(self) -> LocaleProfile {
        match self {
            Self::Fa => LocaleProfile::Persian,
            Self::En => LocaleProfile::Default,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::Fa => TextDirection::RightToLeft,
            Self::En => TextDirection::LeftToRight,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Fa => &FA_STRINGS,
            Self::En => &EN_STRINGS,
        }
    }

    pub fn fonts(self) -> FontRoles {
        match self {
            Self::Fa => FontRoles {
                number: "ShabnamDigit",
                text: "Shabnam",
                operator: "ShabnamBold",
            },
            Self::En => FontRoles {
                number: "Inter",
                text: "Inter",
                operator: "Inter",
            },
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Fa => "fa",
            Self::En => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_names_other_language() {
        assert_eq!(Language::default(), Language::Fa);
        assert_eq!(Language::Fa.strings().toggle_language, "En");
        assert_eq!(Language::En.strings().toggle_language, "فا");
        assert_eq!(Language::Fa.toggled().toggled(), Language::Fa);
    }

    #[test]
    fn test_profiles_and_direction() {
        assert_eq!(Language::Fa.profile(), LocaleProfile::Persian);
        assert_eq!(Language::En.profile(), LocaleProfile::Default);
        assert_eq!(Language::Fa.direction(), TextDirection::RightToLeft);
        assert_eq!(Language::En.fonts().number, "Inter");
        assert_eq!(Language::Fa.fonts().number, "ShabnamDigit");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let fa: Language = serde_json::from_str("\"fa\"").unwrap();
        assert_eq!(fa, Language::Fa);
        assert_eq!(fa.code(), "fa");
    }
}
