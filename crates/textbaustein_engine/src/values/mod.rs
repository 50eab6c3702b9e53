/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Value derivation: turning resolved context fields into display text.
//!
//! Everything here is defensive by contract: malformed input degrades to
//! a raw-string passthrough or an empty string, never to a panic.

pub mod amount;
pub mod date;
pub mod salutation;

pub use amount::{format_amount, format_percent};
pub use date::{display_date, due_date, format_date, parse_flexible, payment_days};
pub use salutation::{classify, full_salutation, short_salutation, SalutationClass};
