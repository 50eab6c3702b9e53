/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Salutation generation from a customer-name string.
//!
//! Classification is a best-effort substring heuristic, not a name
//! parser: a legal-entity suffix anywhere in the name selects the
//! organizational salutation, a gendered title token selects a gendered
//! personal one, everything else gets the generic formal form. Names that
//! happen to contain a matching token in an unrelated word will be
//! misclassified; that approximation is accepted and deliberately not
//! "fixed" here, since German salutation conventions are a content
//! concern, not an engine concern.

use textbaustein_core::locale::SalutationTerms;

/// Legal-entity suffixes that mark an organizational addressee.
const LEGAL_SUFFIXES: &[&str] = &[
    "gmbh", "ag", "ug", "kg", "ohg", "gbr", "e.k.", "ek", "ltd", "ltd.", "inc", "inc.", "llc",
    "s.a.", "sarl", "se", "co.",
];

const FEMALE_TITLES: &[&str] = &["frau", "ms.", "ms", "mrs.", "mrs", "mme", "madame"];

const MALE_TITLES: &[&str] = &["herr", "herrn", "mr.", "mr", "monsieur"];

/// Result of classifying a customer-name string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalutationClass {
    /// Name carries a legal-entity suffix.
    Organization,
    /// Gendered female title found; payload is the name after the title.
    Female(String),
    /// Gendered male title found; payload is the name after the title.
    Male(String),
    /// No usable signal; use the generic formal salutation.
    Unknown,
}

/// Classify a customer name by token matching.
pub fn classify(name: &str) -> SalutationClass {
    let tokens: Vec<&str> = name.split_whitespace().collect();

    for token in &tokens {
        let cleaned = token.trim_matches(|c: char| matches!(c, ',' | '(' | ')')).to_lowercase();
        if LEGAL_SUFFIXES.contains(&cleaned.as_str()) {
            return SalutationClass::Organization;
        }
    }

    for (i, token) in tokens.iter().enumerate() {
        let cleaned = token.trim_matches(|c: char| matches!(c, ',' | '(' | ')')).to_lowercase();
        let rest = tokens[i + 1..].join(" ");
        if FEMALE_TITLES.contains(&cleaned.as_str()) {
            if rest.is_empty() {
                return SalutationClass::Unknown;
            }
            return SalutationClass::Female(rest);
        }
        if MALE_TITLES.contains(&cleaned.as_str()) {
            if rest.is_empty() {
                return SalutationClass::Unknown;
            }
            return SalutationClass::Male(rest);
        }
    }

    SalutationClass::Unknown
}

/// The short salutation prefix (`[%ANREDE%]`), no name, no punctuation.
pub fn short_salutation(name: &str, terms: &SalutationTerms) -> String {
    match classify(name) {
        SalutationClass::Female(_) => terms.female.clone(),
        SalutationClass::Male(_) => terms.male.clone(),
        SalutationClass::Organization | SalutationClass::Unknown => terms.organizational.clone(),
    }
}

/// The full salutation line (`[%VOLLEANREDE%]`), with trailing comma.
pub fn full_salutation(name: &str, terms: &SalutationTerms) -> String {
    match classify(name) {
        SalutationClass::Female(rest) => format!("{} {},", terms.female, rest),
        SalutationClass::Male(rest) => format!("{} {},", terms.male, rest),
        SalutationClass::Organization | SalutationClass::Unknown => {
            format!("{},", terms.organizational)
        }
    }
}
