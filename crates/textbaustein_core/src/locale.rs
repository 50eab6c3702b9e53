/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Locale definitions for document rendering.
//!
//! A locale provides month and weekday names, salutation terms, and the
//! boilerplate paragraph table for one supported language. German is the
//! default and the fallback for any unrecognized language code.

use crate::boilerplate::BoilerplateTexts;
use serde::{Deserialize, Serialize};

/// Supported document languages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
    Fr,
}

impl Language {
    /// Resolve a caller-supplied language code.
    ///
    /// Matching is lenient: `"en"`, `"EN"`, and `"en-GB"` all select
    /// English. Anything unrecognized falls back to German, never errors.
    pub fn from_code(code: &str) -> Self {
        let lowered = code.trim().to_ascii_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or("");
        match primary {
            "en" => Language::En,
            "fr" => Language::Fr,
            _ => Language::De,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A locale: language-specific names, terms, and boilerplate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Locale {
    pub language: Language,
    pub months: MonthNames,
    /// Weekday names, Monday first.
    pub weekdays: Vec<String>,
    pub salutations: SalutationTerms,
    pub boilerplate: BoilerplateTexts,
}

impl Locale {
    /// The locale for a language.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::De => Self::de(),
            Language::En => Self::en(),
            Language::Fr => Self::fr(),
        }
    }

    /// German locale, the default table.
    pub fn de() -> Self {
        Self {
            language: Language::De,
            months: MonthNames::de(),
            weekdays: vec![
                "Montag".into(),
                "Dienstag".into(),
                "Mittwoch".into(),
                "Donnerstag".into(),
                "Freitag".into(),
                "Samstag".into(),
                "Sonntag".into(),
            ],
            salutations: SalutationTerms::de(),
            boilerplate: BoilerplateTexts::de(),
        }
    }

    /// English locale.
    pub fn en() -> Self {
        Self {
            language: Language::En,
            months: MonthNames::en(),
            weekdays: vec![
                "Monday".into(),
                "Tuesday".into(),
                "Wednesday".into(),
                "Thursday".into(),
                "Friday".into(),
                "Saturday".into(),
                "Sunday".into(),
            ],
            salutations: SalutationTerms::en(),
            boilerplate: BoilerplateTexts::en(),
        }
    }

    /// French locale.
    pub fn fr() -> Self {
        Self {
            language: Language::Fr,
            months: MonthNames::fr(),
            weekdays: vec![
                "lundi".into(),
                "mardi".into(),
                "mercredi".into(),
                "jeudi".into(),
                "vendredi".into(),
                "samedi".into(),
                "dimanche".into(),
            ],
            salutations: SalutationTerms::fr(),
            boilerplate: BoilerplateTexts::fr(),
        }
    }

    /// Get a month name, `month` is 1-based.
    pub fn month_name(&self, month: u32, short: bool) -> &str {
        let idx = month.saturating_sub(1) as usize;
        let list = if short {
            &self.months.short
        } else {
            &self.months.long
        };
        list.get(idx).map(|s| s.as_str()).unwrap_or("")
    }

    /// Get a weekday name, `weekday` is 0-based from Monday.
    pub fn weekday_name(&self, weekday: usize) -> &str {
        self.weekdays.get(weekday).map(|s| s.as_str()).unwrap_or("")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::de()
    }
}

/// Month name lists.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MonthNames {
    /// Full month names.
    pub long: Vec<String>,
    /// Abbreviated month names.
    pub short: Vec<String>,
}

impl MonthNames {
    pub fn de() -> Self {
        Self {
            long: vec![
                "Januar".into(),
                "Februar".into(),
                "März".into(),
                "April".into(),
                "Mai".into(),
                "Juni".into(),
                "Juli".into(),
                "August".into(),
                "September".into(),
                "Oktober".into(),
                "November".into(),
                "Dezember".into(),
            ],
            short: vec![
                "Jan".into(),
                "Feb".into(),
                "Mär".into(),
                "Apr".into(),
                "Mai".into(),
                "Jun".into(),
                "Jul".into(),
                "Aug".into(),
                "Sep".into(),
                "Okt".into(),
                "Nov".into(),
                "Dez".into(),
            ],
        }
    }

    pub fn en() -> Self {
        Self {
            long: vec![
                "January".into(),
                "February".into(),
                "March".into(),
                "April".into(),
                "May".into(),
                "June".into(),
                "July".into(),
                "August".into(),
                "September".into(),
                "October".into(),
                "November".into(),
                "December".into(),
            ],
            short: vec![
                "Jan".into(),
                "Feb".into(),
                "Mar".into(),
                "Apr".into(),
                "May".into(),
                "Jun".into(),
                "Jul".into(),
                "Aug".into(),
                "Sep".into(),
                "Oct".into(),
                "Nov".into(),
                "Dec".into(),
            ],
        }
    }

    pub fn fr() -> Self {
        Self {
            long: vec![
                "janvier".into(),
                "février".into(),
                "mars".into(),
                "avril".into(),
                "mai".into(),
                "juin".into(),
                "juillet".into(),
                "août".into(),
                "septembre".into(),
                "octobre".into(),
                "novembre".into(),
                "décembre".into(),
            ],
            short: vec![
                "janv".into(),
                "févr".into(),
                "mars".into(),
                "avr".into(),
                "mai".into(),
                "juin".into(),
                "juil".into(),
                "août".into(),
                "sept".into(),
                "oct".into(),
                "nov".into(),
                "déc".into(),
            ],
        }
    }
}

/// Salutation terms for the ANREDE/VOLLEANREDE tokens.
///
/// The gendered forms are prefixes; the renderer appends the addressee's
/// remaining name. The organizational form doubles as the generic
/// fallback when the customer name gives no usable signal.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SalutationTerms {
    /// Formal salutation for organizations and the generic fallback.
    pub organizational: String,
    /// Prefix for an identified female addressee.
    pub female: String,
    /// Prefix for an identified male addressee.
    pub male: String,
}

impl SalutationTerms {
    pub fn de() -> Self {
        Self {
            organizational: "Sehr geehrte Damen und Herren".into(),
            female: "Sehr geehrte Frau".into(),
            male: "Sehr geehrter Herr".into(),
        }
    }

    pub fn en() -> Self {
        Self {
            organizational: "Dear Sir or Madam".into(),
            female: "Dear Ms".into(),
            male: "Dear Mr".into(),
        }
    }

    pub fn fr() -> Self {
        Self {
            organizational: "Madame, Monsieur".into(),
            female: "Chère Madame".into(),
            male: "Cher Monsieur".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_resolution() {
        assert_eq!(Language::from_code("de"), Language::De);
        assert_eq!(Language::from_code("en-GB"), Language::En);
        assert_eq!(Language::from_code("FR"), Language::Fr);
        assert_eq!(Language::from_code("fr_CH"), Language::Fr);
    }

    #[test]
    fn test_unknown_language_falls_back_to_german() {
        assert_eq!(Language::from_code("es"), Language::De);
        assert_eq!(Language::from_code(""), Language::De);
        assert_eq!(Language::from_code("zz-ZZ"), Language::De);
    }

    #[test]
    fn test_german_month_names() {
        let locale = Locale::de();
        assert_eq!(locale.month_name(1, false), "Januar");
        assert_eq!(locale.month_name(3, true), "Mär");
        assert_eq!(locale.month_name(12, false), "Dezember");
        assert_eq!(locale.month_name(13, false), "");
    }

    #[test]
    fn test_weekday_names() {
        let locale = Locale::de();
        assert_eq!(locale.weekday_name(0), "Montag");
        assert_eq!(locale.weekday_name(6), "Sonntag");
        assert_eq!(locale.weekday_name(7), "");
    }

}
