/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! The two-pass template renderer.
//!
//! Pass 1 ("boilerplate expansion") replaces every registered token,
//! injection tokens first so that the markers their paragraphs embed are
//! still ahead of the cursor. Pass 2 ("residual token resolution")
//! re-runs the due/validity/payment/delivery subset over the expanded
//! text with the values precomputed at call entry, so no marker from
//! injected boilerplate survives to the caller.
//!
//! Rendering never fails: missing fields become empty strings, malformed
//! dates pass through raw, unknown markers stay literal text.

use chrono::{Local, NaiveDate};
use textbaustein_core::{DocumentContext, Language, Locale};

use crate::registry::{self, RenderCall, SECOND_PASS_TOKENS, TOKEN_NAMES};

/// Line-break handling of the rendered text.
///
/// Generated documents are consumed by markup renderers, so HTML is the
/// default; plain output keeps literal newlines for mail-merge use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Plain,
}

/// A configured rendering engine for one language and output format.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    language: Language,
    locale: Locale,
    format: OutputFormat,
}

impl TemplateEngine {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            locale: Locale::for_language(language),
            format: OutputFormat::default(),
        }
    }

    /// Build an engine from a caller-supplied language code.
    /// Unrecognized codes select German, never an error.
    pub fn from_code(code: &str) -> Self {
        Self::new(Language::from_code(code))
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Render a template against a context, clock read at entry.
    pub fn render(&self, template: &str, context: &DocumentContext) -> String {
        self.render_at(template, context, Local::now().date_naive())
    }

    /// Render with a pinned clock for reproducible output.
    pub fn render_at(&self, template: &str, context: &DocumentContext, now: NaiveDate) -> String {
        if template.is_empty() {
            return String::new();
        }

        let call = RenderCall::new(context, &self.locale, now);
        let mut text = template.to_string();

        // Pass 1: boilerplate expansion, then every value token.
        for name in TOKEN_NAMES {
            replace_token(&mut text, name, &call);
        }

        // Pass 2: residual token resolution over the expanded text.
        for name in SECOND_PASS_TOKENS {
            replace_token(&mut text, name, &call);
        }

        match self.format {
            OutputFormat::Html => text.replace('\n', "<br>"),
            OutputFormat::Plain => text,
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(Language::De)
    }
}

fn replace_token(text: &mut String, name: &str, call: &RenderCall<'_>) {
    let marker = registry::marker(name);
    if !text.contains(&marker) {
        return;
    }
    if let Some(value) = registry::resolve(name, call) {
        *text = text.replace(&marker, &value);
    }
}

/// Render a template with the language selected by code.
///
/// The in-process call contract: `(template, context, language_code)`,
/// German fallback for unknown codes, HTML line breaks in the output.
pub fn render(template: &str, context: &DocumentContext, language_code: &str) -> String {
    TemplateEngine::from_code(language_code).render(template, context)
}
