/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Error type for the fallible loading surface.
//!
//! Rendering itself never fails: missing fields, malformed dates, unknown
//! tokens, and unsupported languages all degrade to safe defaults. Only
//! reading and parsing context or template files can error.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    Parse(String, String),
}
