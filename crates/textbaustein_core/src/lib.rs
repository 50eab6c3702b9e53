/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Core data model and locale tables for the textbaustein document engine.
//!
//! This crate defines the [`DocumentContext`] value object that callers
//! assemble from their stored business records, and the [`Locale`] tables
//! (month names, salutation terms, boilerplate paragraphs) that the engine
//! consults during rendering. It carries no rendering logic of its own.

pub mod boilerplate;
pub mod context;
pub mod locale;

pub use boilerplate::{BoilerplateSlot, BoilerplateTexts, DocumentKind};
pub use context::{BankDetails, DocumentContext};
pub use locale::{Language, Locale};
