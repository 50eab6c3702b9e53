/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! The closed token vocabulary and its resolution rules.
//!
//! Every recognized marker `[%NAME%]` maps to exactly one arm of
//! [`resolve`]. Resolution is deterministic and side-effect-free for a
//! given `(context, language, now)` triple; missing source fields resolve
//! to an empty string, never to `null`/`undefined` text. Markers outside
//! the vocabulary are not resolved at all and pass through as literal
//! text.

use chrono::{Datelike, NaiveDate};
use textbaustein_core::boilerplate::{BoilerplateSlot, DocumentKind};
use textbaustein_core::{DocumentContext, Locale};

use crate::values::{
    amount::{format_amount, format_percent},
    date::{
        days_in_month, display_date, due_date, format_date, next_quarter, parse_flexible,
        previous_quarter, quarter, shift_month,
    },
    salutation::{full_salutation, short_salutation},
};

/// All registered token names, in first-pass replacement order.
///
/// Boilerplate-injection tokens come first: their replacement text embeds
/// further markers, which the remainder of the same pass then resolves.
pub const TOKEN_NAMES: &[&str] = &[
    // Boilerplate injection.
    "QUOTE_INTRO_TEXT",
    "QUOTE_CLOSING_TEXT",
    "INVOICE_INTRO_TEXT",
    "INVOICE_CLOSING_TEXT",
    "REMINDER_INTRO_TEXT",
    "REMINDER_CLOSING_TEXT",
    "DELIVERY_NOTE_INTRO_TEXT",
    "DELIVERY_NOTE_CLOSING_TEXT",
    "ORDER_CONFIRMATION_INTRO_TEXT",
    "ORDER_CONFIRMATION_CLOSING_TEXT",
    "CLOSING_SALUTATION",
    // Issuer identity.
    "FIRMENNAME",
    "FIRMENADRESSE",
    "FIRMENSTRASSE",
    "FIRMENPLZ",
    "FIRMENORT",
    "FIRMENLAND",
    "FIRMENEMAIL",
    "FIRMENTELEFON",
    "FIRMENWEBSEITE",
    "STEUERNUMMER",
    "UMSATZSTEUERID",
    "KONTAKTPERSON",
    // Bank details.
    "IBAN",
    "BIC",
    "BANKNAME",
    "KONTOINHABER",
    // Counterparty identity.
    "KUNDENNAME",
    "KUNDENFIRMA",
    "KUNDENADRESSE",
    "KUNDENSTRASSE",
    "KUNDENPLZ",
    "KUNDENORT",
    "KUNDENLAND",
    "KUNDENEMAIL",
    "KUNDENTELEFON",
    "KUNDENNUMMER",
    "VORNAME",
    "NACHNAME",
    // Document metadata.
    "DOKUMENTNUMMER",
    "RECHNUNGSNUMMER",
    "ANGEBOTSNUMMER",
    "DOKUMENTDATUM",
    "RECHNUNGSDATUM",
    "ANGEBOTSDATUM",
    "LEISTUNGSDATUM",
    "LEISTUNGSZEITRAUM",
    "LIEFERDATUM",
    "REFERENZ",
    "TITEL",
    // Due dates and payment terms.
    "FAELLIGKEITSDATUM",
    "GUELTIGBIS",
    "ZAHLUNGSZIEL",
    "ZAHLUNGSBEDINGUNGEN",
    // Amounts.
    "GESAMTBETRAG",
    "GESAMTSUMME",
    "ANGEBOTSSUMME",
    "NETTOBETRAG",
    "ZWISCHENSUMME",
    "ANGEBOTSNETTO",
    "STEUERBETRAG",
    "STEUERSATZ",
    "RABATT",
    "WAEHRUNG",
    // Derived from the render-call clock.
    "DATUM",
    "HEUTE",
    "JAHR",
    "JAHR.KURZ",
    "VORJAHR",
    "VORJAHR.KURZ",
    "FOLGEJAHR",
    "FOLGEJAHR.KURZ",
    "MONAT",
    "MONAT.KURZ",
    "MONAT.ZAHL",
    "VORMONAT",
    "VORMONAT.KURZ",
    "VORMONAT.ZAHL",
    "FOLGEMONAT",
    "FOLGEMONAT.KURZ",
    "FOLGEMONAT.ZAHL",
    "WOCHENTAG",
    "KALENDERWOCHE",
    "QUARTAL",
    "VORQUARTAL",
    "FOLGEQUARTAL",
    "TAGEIMMONAT",
    // Salutations.
    "ANREDE",
    "VOLLEANREDE",
];

/// Tokens re-resolved in the second pass.
///
/// These are the markers that injected boilerplate may introduce after
/// the first pass has already moved past them. They resolve from values
/// precomputed in [`RenderCall::new`], so both passes agree.
pub const SECOND_PASS_TOKENS: &[&str] = &[
    "FAELLIGKEITSDATUM",
    "GUELTIGBIS",
    "ZAHLUNGSZIEL",
    "LIEFERDATUM",
];

/// Per-call resolution state.
///
/// Snapshots the clock exactly once and precomputes the shared
/// due/validity/delivery values, so every token referencing them within
/// one render call yields the same answer even if the call spans a clock
/// tick.
pub struct RenderCall<'a> {
    pub ctx: &'a DocumentContext,
    pub locale: &'a Locale,
    pub now: NaiveDate,
    payment_due: String,
    validity: String,
    delivery: String,
}

impl<'a> RenderCall<'a> {
    pub fn new(ctx: &'a DocumentContext, locale: &'a Locale, now: NaiveDate) -> Self {
        let language = locale.language;
        let terms = ctx.payment_terms.as_deref().unwrap_or("");
        let base = parse_flexible(ctx.document_date_raw()).unwrap_or(now);
        let computed = format_date(due_date(base, terms), language);

        let explicit = ctx.due_date_raw();
        let payment_due = if explicit.trim().is_empty() {
            computed.clone()
        } else {
            display_date(explicit, language)
        };

        let explicit = ctx.validity_raw();
        let validity = if explicit.trim().is_empty() {
            computed
        } else {
            display_date(explicit, language)
        };

        let explicit = ctx.delivery_date_raw();
        let delivery = if explicit.trim().is_empty() {
            payment_due.clone()
        } else {
            display_date(explicit, language)
        };

        Self {
            ctx,
            locale,
            now,
            payment_due,
            validity,
            delivery,
        }
    }

    fn boilerplate(&self, kind: DocumentKind, slot: BoilerplateSlot) -> String {
        self.locale.boilerplate.text(kind, slot).to_string()
    }

    fn date_field(&self, raw: &str) -> String {
        display_date(raw, self.locale.language)
    }

    fn amount(&self, value: Option<f64>) -> String {
        format_amount(value, self.ctx.currency_code())
    }
}

fn short_year(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

/// Resolve a token name against a render call.
///
/// Returns `None` for names outside the vocabulary; the renderer leaves
/// those markers untouched.
pub fn resolve(name: &str, call: &RenderCall<'_>) -> Option<String> {
    use BoilerplateSlot::{Closing, Intro};
    use DocumentKind::*;

    let ctx = call.ctx;
    let locale = call.locale;
    let now = call.now;

    let value = match name {
        // Boilerplate injection.
        "QUOTE_INTRO_TEXT" => call.boilerplate(Quote, Intro),
        "QUOTE_CLOSING_TEXT" => call.boilerplate(Quote, Closing),
        "INVOICE_INTRO_TEXT" => call.boilerplate(Invoice, Intro),
        "INVOICE_CLOSING_TEXT" => call.boilerplate(Invoice, Closing),
        "REMINDER_INTRO_TEXT" => call.boilerplate(Reminder, Intro),
        "REMINDER_CLOSING_TEXT" => call.boilerplate(Reminder, Closing),
        "DELIVERY_NOTE_INTRO_TEXT" => call.boilerplate(DeliveryNote, Intro),
        "DELIVERY_NOTE_CLOSING_TEXT" => call.boilerplate(DeliveryNote, Closing),
        "ORDER_CONFIRMATION_INTRO_TEXT" => call.boilerplate(OrderConfirmation, Intro),
        "ORDER_CONFIRMATION_CLOSING_TEXT" => call.boilerplate(OrderConfirmation, Closing),
        "CLOSING_SALUTATION" => locale.boilerplate.closing_salutation.clone(),

        // Issuer identity, direct passthrough.
        "FIRMENNAME" => ctx.issuer_name().to_string(),
        "FIRMENADRESSE" => ctx.issuer_address(),
        "FIRMENSTRASSE" => ctx.issuer_street().to_string(),
        "FIRMENPLZ" => ctx.issuer_zip().to_string(),
        "FIRMENORT" => ctx.issuer_city().to_string(),
        "FIRMENLAND" => ctx.issuer_country().to_string(),
        "FIRMENEMAIL" => ctx.issuer_email().to_string(),
        "FIRMENTELEFON" => ctx.issuer_phone().to_string(),
        "FIRMENWEBSEITE" => ctx.issuer_website().to_string(),
        "STEUERNUMMER" => ctx.issuer_tax_number().to_string(),
        "UMSATZSTEUERID" => ctx.issuer_vat_id().to_string(),
        "KONTAKTPERSON" => ctx.contact_person().to_string(),

        // Bank details, legacy-shape fallback chains.
        "IBAN" => ctx.resolved_iban().to_string(),
        "BIC" => ctx.resolved_bic().to_string(),
        "BANKNAME" => ctx.resolved_bank_name().to_string(),
        "KONTOINHABER" => ctx.resolved_account_holder().to_string(),

        // Counterparty identity.
        "KUNDENNAME" => ctx.counterparty_name().to_string(),
        "KUNDENFIRMA" => ctx.counterparty_company().to_string(),
        "KUNDENADRESSE" => ctx.counterparty_address(),
        "KUNDENSTRASSE" => ctx.counterparty_street().to_string(),
        "KUNDENPLZ" => ctx.counterparty_zip().to_string(),
        "KUNDENORT" => ctx.counterparty_city().to_string(),
        "KUNDENLAND" => ctx.counterparty_country().to_string(),
        "KUNDENEMAIL" => ctx.counterparty_email().to_string(),
        "KUNDENTELEFON" => ctx.counterparty_phone().to_string(),
        "KUNDENNUMMER" => ctx.customer_number.as_deref().unwrap_or("").to_string(),
        "VORNAME" => ctx.counterparty_first_name().to_string(),
        "NACHNAME" => ctx.counterparty_last_name().to_string(),

        // Document metadata.
        "DOKUMENTNUMMER" => ctx.number().to_string(),
        "RECHNUNGSNUMMER" => ctx.resolved_invoice_number().to_string(),
        "ANGEBOTSNUMMER" => ctx.resolved_quote_number().to_string(),
        "DOKUMENTDATUM" | "RECHNUNGSDATUM" | "ANGEBOTSDATUM" => {
            call.date_field(ctx.document_date_raw())
        }
        "LEISTUNGSDATUM" => call.date_field(ctx.service_date.as_deref().unwrap_or("")),
        "LEISTUNGSZEITRAUM" => ctx.service_period.as_deref().unwrap_or("").to_string(),
        "LIEFERDATUM" => call.delivery.clone(),
        "REFERENZ" => ctx.reference.as_deref().unwrap_or("").to_string(),
        "TITEL" => ctx.title.as_deref().unwrap_or("").to_string(),

        // Due dates and payment terms, shared precomputed values.
        "FAELLIGKEITSDATUM" | "ZAHLUNGSZIEL" => call.payment_due.clone(),
        "GUELTIGBIS" => call.validity.clone(),
        "ZAHLUNGSBEDINGUNGEN" => ctx.payment_terms.as_deref().unwrap_or("").to_string(),

        // Amounts, currency-formatted.
        "GESAMTBETRAG" | "GESAMTSUMME" | "ANGEBOTSSUMME" => call.amount(ctx.total),
        "NETTOBETRAG" | "ANGEBOTSNETTO" => call.amount(ctx.net()),
        "ZWISCHENSUMME" => call.amount(ctx.resolved_subtotal()),
        "STEUERBETRAG" => call.amount(ctx.tax),
        "STEUERSATZ" => format_percent(ctx.resolved_tax_rate()),
        "RABATT" => call.amount(ctx.discount),
        "WAEHRUNG" => ctx.currency_code().to_string(),

        // Derived from the snapshotted clock.
        "DATUM" | "HEUTE" => format_date(now, locale.language),
        "JAHR" => now.year().to_string(),
        "JAHR.KURZ" => short_year(now.year()),
        "VORJAHR" => (now.year() - 1).to_string(),
        "VORJAHR.KURZ" => short_year(now.year() - 1),
        "FOLGEJAHR" => (now.year() + 1).to_string(),
        "FOLGEJAHR.KURZ" => short_year(now.year() + 1),
        "MONAT" => locale.month_name(now.month(), false).to_string(),
        "MONAT.KURZ" => locale.month_name(now.month(), true).to_string(),
        "MONAT.ZAHL" => format!("{:02}", now.month()),
        "VORMONAT" => {
            let (_, month) = shift_month(now, -1);
            locale.month_name(month, false).to_string()
        }
        "VORMONAT.KURZ" => {
            let (_, month) = shift_month(now, -1);
            locale.month_name(month, true).to_string()
        }
        "VORMONAT.ZAHL" => {
            let (_, month) = shift_month(now, -1);
            format!("{:02}", month)
        }
        "FOLGEMONAT" => {
            let (_, month) = shift_month(now, 1);
            locale.month_name(month, false).to_string()
        }
        "FOLGEMONAT.KURZ" => {
            let (_, month) = shift_month(now, 1);
            locale.month_name(month, true).to_string()
        }
        "FOLGEMONAT.ZAHL" => {
            let (_, month) = shift_month(now, 1);
            format!("{:02}", month)
        }
        "WOCHENTAG" => locale
            .weekday_name(now.weekday().num_days_from_monday() as usize)
            .to_string(),
        "KALENDERWOCHE" => now.iso_week().week().to_string(),
        "QUARTAL" => quarter(now).to_string(),
        "VORQUARTAL" => previous_quarter(quarter(now)).to_string(),
        "FOLGEQUARTAL" => next_quarter(quarter(now)).to_string(),
        "TAGEIMMONAT" => days_in_month(now).to_string(),

        // Salutations, heuristic classification of the customer name.
        "ANREDE" => short_salutation(ctx.counterparty_name(), &locale.salutations),
        "VOLLEANREDE" => full_salutation(ctx.counterparty_name(), &locale.salutations),

        _ => return None,
    };

    Some(value)
}

/// Build the literal marker for a token name.
pub fn marker(name: &str) -> String {
    format!("[%{}%]", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbaustein_core::Language;

    fn fixed_now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
    }

    fn full_context() -> DocumentContext {
        serde_json::from_str(
            r#"{
                "companyName": "Muster GmbH",
                "companyStreet": "Werkstr. 9",
                "companyZipCode": "80331",
                "companyCity": "München",
                "companyCountry": "Deutschland",
                "companyEmail": "info@muster.de",
                "companyPhone": "+49 89 123456",
                "companyWebsite": "https://muster.de",
                "companyTaxNumber": "143/123/45678",
                "companyVatId": "DE123456789",
                "contactPersonName": "Petra Beispiel",
                "bankDetails": {
                    "iban": "DE02120300000000202051",
                    "bic": "BYLADEM1001",
                    "bankName": "Deutsche Kreditbank",
                    "accountHolder": "Muster GmbH"
                },
                "customerName": "Frau Anna Schmidt",
                "customerCompany": "Schmidt & Partner",
                "customerStreet": "Hauptstr. 1",
                "customerZipCode": "10115",
                "customerCity": "Berlin",
                "customerCountry": "Deutschland",
                "customerEmail": "anna@example.org",
                "customerPhone": "+49 30 654321",
                "customerNumber": "K-1001",
                "invoiceNumber": "RE-2025-044",
                "quoteNumber": "AN-2025-017",
                "date": "01.05.2025",
                "deliveryDate": "20.05.2025",
                "serviceDate": "30.04.2025",
                "servicePeriod": "April 2025",
                "reference": "Projekt Alpha",
                "title": "Rechnung April",
                "total": 1234.5,
                "subtotal": 1037.39,
                "netAmount": 1037.39,
                "tax": 197.11,
                "taxRate": 19.0,
                "discount": 50.0,
                "paymentTerms": "Zahlbar binnen 14 Tagen ohne Abzug"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_every_token_resolves_with_full_context() {
        let ctx = full_context();
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        for name in TOKEN_NAMES {
            let value = resolve(name, &call);
            assert!(value.is_some(), "token {} did not resolve", name);
        }
    }

    #[test]
    fn test_every_token_degrades_safely_on_empty_context() {
        let ctx = DocumentContext::default();
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        for name in TOKEN_NAMES {
            let value = resolve(name, &call).unwrap_or_else(|| panic!("token {} missing", name));
            for forbidden in ["undefined", "null", "NaN", "Invalid Date"] {
                assert!(
                    !value.contains(forbidden),
                    "token {} leaked {:?}: {:?}",
                    name,
                    forbidden,
                    value
                );
            }
        }
    }

    #[test]
    fn test_unknown_token_is_not_resolved() {
        let ctx = DocumentContext::default();
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("NOT_A_REAL_TOKEN", &call), None);
        // Case-sensitive on the registered text.
        assert_eq!(resolve("firmenname", &call), None);
    }

    #[test]
    fn test_due_values_share_one_computation() {
        let ctx = DocumentContext {
            date: Some("01.01.2025".into()),
            payment_terms: Some("Zahlbar binnen 14 Tagen ohne Abzug".into()),
            ..Default::default()
        };
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("ZAHLUNGSZIEL", &call).unwrap(), "15.01.2025");
        assert_eq!(resolve("FAELLIGKEITSDATUM", &call).unwrap(), "15.01.2025");
        assert_eq!(resolve("GUELTIGBIS", &call).unwrap(), "15.01.2025");
    }

    #[test]
    fn test_explicit_due_date_wins() {
        let ctx = DocumentContext {
            date: Some("01.01.2025".into()),
            due_date: Some("31.01.2025".into()),
            payment_terms: Some("14 Tage".into()),
            ..Default::default()
        };
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("ZAHLUNGSZIEL", &call).unwrap(), "31.01.2025");
    }

    #[test]
    fn test_unparseable_explicit_due_passes_through() {
        let ctx = DocumentContext {
            due_date: Some("nach Vereinbarung".into()),
            ..Default::default()
        };
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(
            resolve("FAELLIGKEITSDATUM", &call).unwrap(),
            "nach Vereinbarung"
        );
    }

    #[test]
    fn test_derived_clock_tokens() {
        let ctx = DocumentContext::default();
        let locale = Locale::de();
        // 2025-05-14 is a Wednesday in calendar week 20, Q2.
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("DATUM", &call).unwrap(), "14.05.2025");
        assert_eq!(resolve("JAHR", &call).unwrap(), "2025");
        assert_eq!(resolve("JAHR.KURZ", &call).unwrap(), "25");
        assert_eq!(resolve("VORJAHR", &call).unwrap(), "2024");
        assert_eq!(resolve("FOLGEJAHR.KURZ", &call).unwrap(), "26");
        assert_eq!(resolve("MONAT", &call).unwrap(), "Mai");
        assert_eq!(resolve("MONAT.KURZ", &call).unwrap(), "Mai");
        assert_eq!(resolve("MONAT.ZAHL", &call).unwrap(), "05");
        assert_eq!(resolve("VORMONAT", &call).unwrap(), "April");
        assert_eq!(resolve("VORMONAT.ZAHL", &call).unwrap(), "04");
        assert_eq!(resolve("FOLGEMONAT", &call).unwrap(), "Juni");
        assert_eq!(resolve("WOCHENTAG", &call).unwrap(), "Mittwoch");
        assert_eq!(resolve("KALENDERWOCHE", &call).unwrap(), "20");
        assert_eq!(resolve("QUARTAL", &call).unwrap(), "2");
        assert_eq!(resolve("VORQUARTAL", &call).unwrap(), "1");
        assert_eq!(resolve("FOLGEQUARTAL", &call).unwrap(), "3");
        assert_eq!(resolve("TAGEIMMONAT", &call).unwrap(), "31");
    }

    #[test]
    fn test_month_wrap_at_year_boundary() {
        let ctx = DocumentContext::default();
        let locale = Locale::de();
        let january = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let call = RenderCall::new(&ctx, &locale, january);
        assert_eq!(resolve("VORMONAT", &call).unwrap(), "Dezember");
        assert_eq!(resolve("VORMONAT.ZAHL", &call).unwrap(), "12");
        assert_eq!(resolve("VORQUARTAL", &call).unwrap(), "4");
    }

    #[test]
    fn test_amount_tokens() {
        let ctx = full_context();
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("GESAMTBETRAG", &call).unwrap(), "1.234,50 €");
        assert_eq!(resolve("NETTOBETRAG", &call).unwrap(), "1.037,39 €");
        assert_eq!(resolve("STEUERSATZ", &call).unwrap(), "19 %");
        assert_eq!(resolve("WAEHRUNG", &call).unwrap(), "EUR");
    }

    #[test]
    fn test_missing_amount_renders_zero() {
        let ctx = DocumentContext::default();
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("GESAMTBETRAG", &call).unwrap(), "0,00 €");
    }

    #[test]
    fn test_document_date_fallback_to_raw() {
        let ctx = DocumentContext {
            date: Some("not-a-date".into()),
            ..Default::default()
        };
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("DOKUMENTDATUM", &call).unwrap(), "not-a-date");
    }

    #[test]
    fn test_delivery_falls_back_to_due() {
        let ctx = DocumentContext {
            date: Some("01.01.2025".into()),
            payment_terms: Some("14 Tage".into()),
            ..Default::default()
        };
        let locale = Locale::de();
        let call = RenderCall::new(&ctx, &locale, fixed_now());
        assert_eq!(resolve("LIEFERDATUM", &call).unwrap(), "15.01.2025");
    }

    #[test]
    fn test_boilerplate_tokens_localized() {
        let ctx = DocumentContext::default();
        let de = Locale::de();
        let en = Locale::for_language(Language::En);
        let call_de = RenderCall::new(&ctx, &de, fixed_now());
        let call_en = RenderCall::new(&ctx, &en, fixed_now());
        assert!(resolve("INVOICE_CLOSING_TEXT", &call_de)
            .unwrap()
            .contains("Rechnungsbetrag"));
        assert!(resolve("INVOICE_CLOSING_TEXT", &call_en)
            .unwrap()
            .contains("invoice amount"));
    }

    #[test]
    fn test_marker_syntax() {
        assert_eq!(marker("MONAT.KURZ"), "[%MONAT.KURZ%]");
    }
}
