/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Placeholder substitution engine for business documents.
//!
//! Replaces `[%TOKEN%]` markers in document templates (invoices, quotes,
//! reminders, delivery notes, order confirmations) with values derived
//! from a [`DocumentContext`], injecting localized boilerplate paragraphs
//! and resolving any markers those paragraphs introduce in a second pass.
//!
//! Rendering is a total function: missing fields, malformed dates, and
//! unknown markers degrade to safe output instead of errors, because a
//! partially-resolved business document beats a failed render. Callers
//! should still preview generated documents before legal or financial
//! use; the engine fills blanks, it does not validate business rules.
//!
//! # Example
//!
//! ```rust
//! use textbaustein_core::{DocumentContext, Language};
//! use textbaustein_engine::TemplateEngine;
//!
//! let context: DocumentContext = serde_json::from_str(
//!     r#"{
//!         "companyName": "Muster GmbH",
//!         "invoiceNumber": "RE-2025-044",
//!         "total": 1234.5
//!     }"#,
//! )
//! .unwrap();
//!
//! let engine = TemplateEngine::new(Language::De);
//! let out = engine.render(
//!     "Rechnung [%RECHNUNGSNUMMER%] von [%FIRMENNAME%]: [%GESAMTBETRAG%]",
//!     &context,
//! );
//! assert_eq!(out, "Rechnung RE-2025-044 von Muster GmbH: 1.234,50 €");
//! ```

pub mod error;
pub mod io;
pub mod registry;
pub mod renderer;
pub mod values;

pub use error::EngineError;
pub use registry::{RenderCall, SECOND_PASS_TOKENS, TOKEN_NAMES};
pub use renderer::{render, OutputFormat, TemplateEngine};

// Re-export the core types for convenience.
pub use textbaustein_core::{DocumentContext, Language, Locale};
