/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! The input record for one render call.
//!
//! A [`DocumentContext`] is a value object: constructed by the caller from
//! whatever business record it already loaded, consumed once, never stored
//! by the engine. The field vocabulary mirrors the camelCase JSON produced
//! by the upstream web application, including several legacy nested shapes
//! for bank details that accumulated over form-wizard revisions. Accessor
//! methods resolve those shapes through ordered fallback chains so the
//! token registry never has to know about them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Return the first candidate that is present and non-blank, or `""`.
///
/// The building block for every fallback chain in this crate: candidates
/// are tried in declaration order, whitespace-only strings count as empty.
pub fn first_non_empty<'a, I>(candidates: I) -> &'a str
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or("")
}

/// Bank account details, one of several legacy shapes.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub bank_name: Option<String>,
    pub account_holder: Option<String>,
}

/// Wizard step 3 wrapper; only its nested bank details are of interest.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepThree {
    pub bank_details: Option<BankDetails>,
}

/// Postal address sub-object used by the nested company/customer records.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Nested issuer record (newer documents carry one instead of flat fields).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<Address>,
    pub tax_number: Option<String>,
    pub vat_id: Option<String>,
    pub bank_details: Option<BankDetails>,
}

/// Nested counterparty record.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub tax_number: Option<String>,
    pub vat_id: Option<String>,
}

/// The flat-ish input record for one render call.
///
/// Every field is optional; unknown keys land in the open
/// [`extra`](Self::extra) map and are tolerated without error. Amounts are
/// major currency units (euros as float), not minor units.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentContext {
    // Issuer identity, flat legacy fields.
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_street: Option<String>,
    pub company_zip_code: Option<String>,
    pub company_city: Option<String>,
    pub company_country: Option<String>,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub company_website: Option<String>,
    pub company_tax_number: Option<String>,
    pub company_vat_id: Option<String>,
    pub contact_person_name: Option<String>,
    pub internal_contact_person: Option<String>,
    /// Nested issuer record, fallback source for the flat fields above.
    pub company: Option<CompanyInfo>,

    // Bank details, legacy shapes in fallback priority order.
    pub bank_details: Option<BankDetails>,
    pub step4: Option<BankDetails>,
    pub step3: Option<StepThree>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub bank_name: Option<String>,
    pub account_holder: Option<String>,

    // Counterparty identity.
    pub customer_name: Option<String>,
    pub customer_company: Option<String>,
    pub customer_address: Option<String>,
    pub customer_street: Option<String>,
    pub customer_zip_code: Option<String>,
    pub customer_city: Option<String>,
    pub customer_country: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer: Option<CustomerInfo>,

    // Document metadata.
    pub document_number: Option<String>,
    pub invoice_number: Option<String>,
    pub quote_number: Option<String>,
    pub date: Option<String>,
    pub document_date: Option<String>,
    pub due_date: Option<String>,
    pub valid_until: Option<String>,
    pub expiry_date: Option<String>,
    pub delivery_date: Option<String>,
    pub service_date: Option<String>,
    pub service_period: Option<String>,
    pub reference: Option<String>,
    pub title: Option<String>,

    // Monetary amounts, major units.
    pub total: Option<f64>,
    pub subtotal: Option<f64>,
    pub net_amount: Option<f64>,
    pub tax: Option<f64>,
    pub tax_rate: Option<f64>,
    pub vat_rate: Option<f64>,
    pub discount: Option<f64>,
    pub currency: Option<String>,

    /// Free-text payment terms, possibly carrying a day count ("14 Tage").
    pub payment_terms: Option<String>,

    /// Open extension bag: unknown legacy keys are kept, never rejected.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl DocumentContext {
    /// IBAN via the legacy-shape fallback chain.
    pub fn resolved_iban(&self) -> &str {
        first_non_empty([
            self.bank_details.as_ref().and_then(|b| b.iban.as_deref()),
            self.step4.as_ref().and_then(|b| b.iban.as_deref()),
            self.step3
                .as_ref()
                .and_then(|s| s.bank_details.as_ref())
                .and_then(|b| b.iban.as_deref()),
            self.iban.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.bank_details.as_ref())
                .and_then(|b| b.iban.as_deref()),
        ])
    }

    /// BIC via the legacy-shape fallback chain.
    pub fn resolved_bic(&self) -> &str {
        first_non_empty([
            self.bank_details.as_ref().and_then(|b| b.bic.as_deref()),
            self.step4.as_ref().and_then(|b| b.bic.as_deref()),
            self.step3
                .as_ref()
                .and_then(|s| s.bank_details.as_ref())
                .and_then(|b| b.bic.as_deref()),
            self.bic.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.bank_details.as_ref())
                .and_then(|b| b.bic.as_deref()),
        ])
    }

    /// Bank name via the legacy-shape fallback chain.
    pub fn resolved_bank_name(&self) -> &str {
        first_non_empty([
            self.bank_details
                .as_ref()
                .and_then(|b| b.bank_name.as_deref()),
            self.step4.as_ref().and_then(|b| b.bank_name.as_deref()),
            self.step3
                .as_ref()
                .and_then(|s| s.bank_details.as_ref())
                .and_then(|b| b.bank_name.as_deref()),
            self.bank_name.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.bank_details.as_ref())
                .and_then(|b| b.bank_name.as_deref()),
        ])
    }

    /// Account holder; falls back to the issuer name as a last resort.
    pub fn resolved_account_holder(&self) -> &str {
        first_non_empty([
            self.bank_details
                .as_ref()
                .and_then(|b| b.account_holder.as_deref()),
            self.step4
                .as_ref()
                .and_then(|b| b.account_holder.as_deref()),
            self.step3
                .as_ref()
                .and_then(|s| s.bank_details.as_ref())
                .and_then(|b| b.account_holder.as_deref()),
            self.account_holder.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.bank_details.as_ref())
                .and_then(|b| b.account_holder.as_deref()),
            self.issuer_name_candidate(),
        ])
    }

    fn issuer_name_candidate(&self) -> Option<&str> {
        let name = self.issuer_name();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Issuer display name.
    pub fn issuer_name(&self) -> &str {
        first_non_empty([
            self.company_name.as_deref(),
            self.company.as_ref().and_then(|c| c.name.as_deref()),
        ])
    }

    pub fn issuer_email(&self) -> &str {
        first_non_empty([
            self.company_email.as_deref(),
            self.company.as_ref().and_then(|c| c.email.as_deref()),
        ])
    }

    pub fn issuer_phone(&self) -> &str {
        first_non_empty([
            self.company_phone.as_deref(),
            self.company.as_ref().and_then(|c| c.phone.as_deref()),
        ])
    }

    pub fn issuer_website(&self) -> &str {
        first_non_empty([
            self.company_website.as_deref(),
            self.company.as_ref().and_then(|c| c.website.as_deref()),
        ])
    }

    pub fn issuer_tax_number(&self) -> &str {
        first_non_empty([
            self.company_tax_number.as_deref(),
            self.company.as_ref().and_then(|c| c.tax_number.as_deref()),
        ])
    }

    pub fn issuer_vat_id(&self) -> &str {
        first_non_empty([
            self.company_vat_id.as_deref(),
            self.company.as_ref().and_then(|c| c.vat_id.as_deref()),
        ])
    }

    pub fn issuer_street(&self) -> &str {
        first_non_empty([
            self.company_street.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.street.as_deref()),
        ])
    }

    pub fn issuer_zip(&self) -> &str {
        first_non_empty([
            self.company_zip_code.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.zip_code.as_deref()),
        ])
    }

    pub fn issuer_city(&self) -> &str {
        first_non_empty([
            self.company_city.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.city.as_deref()),
        ])
    }

    pub fn issuer_country(&self) -> &str {
        first_non_empty([
            self.company_country.as_deref(),
            self.company
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.country.as_deref()),
        ])
    }

    /// One-line issuer address: the explicit field, else composed parts.
    pub fn issuer_address(&self) -> String {
        let explicit = first_non_empty([self.company_address.as_deref()]);
        if !explicit.is_empty() {
            return explicit.to_string();
        }
        compose_address(self.issuer_street(), self.issuer_zip(), self.issuer_city())
    }

    /// Contact person shown in closing salutations.
    pub fn contact_person(&self) -> &str {
        first_non_empty([
            self.contact_person_name.as_deref(),
            self.internal_contact_person.as_deref(),
        ])
    }

    /// Counterparty display name.
    pub fn counterparty_name(&self) -> &str {
        first_non_empty([
            self.customer_name.as_deref(),
            self.customer.as_ref().and_then(|c| c.name.as_deref()),
        ])
    }

    pub fn counterparty_company(&self) -> &str {
        first_non_empty([
            self.customer_company.as_deref(),
            self.customer_name.as_deref(),
        ])
    }

    pub fn counterparty_email(&self) -> &str {
        first_non_empty([
            self.customer_email.as_deref(),
            self.customer.as_ref().and_then(|c| c.email.as_deref()),
        ])
    }

    pub fn counterparty_phone(&self) -> &str {
        first_non_empty([
            self.customer_phone.as_deref(),
            self.customer.as_ref().and_then(|c| c.phone.as_deref()),
        ])
    }

    pub fn counterparty_street(&self) -> &str {
        first_non_empty([
            self.customer_street.as_deref(),
            self.customer
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.street.as_deref()),
        ])
    }

    pub fn counterparty_zip(&self) -> &str {
        first_non_empty([
            self.customer_zip_code.as_deref(),
            self.customer
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.zip_code.as_deref()),
        ])
    }

    pub fn counterparty_city(&self) -> &str {
        first_non_empty([
            self.customer_city.as_deref(),
            self.customer
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.city.as_deref()),
        ])
    }

    pub fn counterparty_country(&self) -> &str {
        first_non_empty([
            self.customer_country.as_deref(),
            self.customer
                .as_ref()
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.country.as_deref()),
        ])
    }

    /// One-line counterparty address: the explicit field, else composed.
    pub fn counterparty_address(&self) -> String {
        let explicit = first_non_empty([self.customer_address.as_deref()]);
        if !explicit.is_empty() {
            return explicit.to_string();
        }
        compose_address(
            self.counterparty_street(),
            self.counterparty_zip(),
            self.counterparty_city(),
        )
    }

    /// First name: explicit field, else the first token of the name.
    pub fn counterparty_first_name(&self) -> &str {
        let explicit = first_non_empty([self.first_name.as_deref()]);
        if !explicit.is_empty() {
            return explicit;
        }
        self.counterparty_name()
            .split_whitespace()
            .next()
            .unwrap_or("")
    }

    /// Last name: explicit field, else the last token of the name.
    pub fn counterparty_last_name(&self) -> &str {
        let explicit = first_non_empty([self.last_name.as_deref()]);
        if !explicit.is_empty() {
            return explicit;
        }
        let mut tokens = self.counterparty_name().split_whitespace();
        let first = tokens.next();
        tokens.last().or(first).unwrap_or("")
    }

    /// Document number chain: document, invoice, then quote number.
    pub fn number(&self) -> &str {
        first_non_empty([
            self.document_number.as_deref(),
            self.invoice_number.as_deref(),
            self.quote_number.as_deref(),
        ])
    }

    pub fn resolved_invoice_number(&self) -> &str {
        first_non_empty([
            self.invoice_number.as_deref(),
            self.document_number.as_deref(),
        ])
    }

    pub fn resolved_quote_number(&self) -> &str {
        first_non_empty([
            self.quote_number.as_deref(),
            self.document_number.as_deref(),
        ])
    }

    /// Raw document date string, `date` before `documentDate`.
    pub fn document_date_raw(&self) -> &str {
        first_non_empty([self.date.as_deref(), self.document_date.as_deref()])
    }

    /// Raw explicit due date, payment-priority chain.
    pub fn due_date_raw(&self) -> &str {
        first_non_empty([
            self.due_date.as_deref(),
            self.valid_until.as_deref(),
            self.expiry_date.as_deref(),
        ])
    }

    /// Raw explicit validity date, validity-priority chain.
    pub fn validity_raw(&self) -> &str {
        first_non_empty([
            self.valid_until.as_deref(),
            self.expiry_date.as_deref(),
            self.due_date.as_deref(),
        ])
    }

    /// Raw delivery date, service date as fallback.
    pub fn delivery_date_raw(&self) -> &str {
        first_non_empty([self.delivery_date.as_deref(), self.service_date.as_deref()])
    }

    /// Net amount chain: explicit net before subtotal.
    pub fn net(&self) -> Option<f64> {
        self.net_amount.or(self.subtotal)
    }

    /// Subtotal chain: subtotal before explicit net.
    pub fn resolved_subtotal(&self) -> Option<f64> {
        self.subtotal.or(self.net_amount)
    }

    /// Tax rate chain: `taxRate` before the legacy `vatRate`.
    pub fn resolved_tax_rate(&self) -> Option<f64> {
        self.tax_rate.or(self.vat_rate)
    }

    /// Currency code, EUR when unset.
    pub fn currency_code(&self) -> &str {
        let code = first_non_empty([self.currency.as_deref()]);
        if code.is_empty() {
            "EUR"
        } else {
            code
        }
    }
}

fn compose_address(street: &str, zip: &str, city: &str) -> String {
    let place = format!("{} {}", zip, city).trim().to_string();
    match (street.is_empty(), place.is_empty()) {
        (true, true) => String::new(),
        (false, true) => street.to_string(),
        (true, false) => place,
        (false, false) => format!("{}, {}", street, place),
    }
}
