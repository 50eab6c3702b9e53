/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! Command-line front end for the template engine.

use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use regex::Regex;
use textbaustein_engine::{io, OutputFormat, TemplateEngine, SECOND_PASS_TOKENS, TOKEN_NAMES};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template against a context file
    Render {
        /// Path to the template text file
        #[arg(index = 1)]
        template: PathBuf,

        /// Path to the context file (JSON or YAML)
        #[arg(index = 2)]
        context: PathBuf,

        /// Document language (unknown codes fall back to German)
        #[arg(short, long, default_value = "de")]
        language: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Pin the clock to a fixed date (YYYY-MM-DD) for reproducible output
        #[arg(long)]
        at: Option<String>,
    },
    /// List the registered placeholder tokens
    Tokens,
    /// Validate a context file
    Validate {
        /// Path to the context file (JSON or YAML)
        path: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Html,
    Plain,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Plain => write!(f, "plain"),
        }
    }
}

static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[%[A-Z_.]+%\]").expect("marker pattern"));

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            context,
            language,
            format,
            at,
        } => {
            let template_text = match io::load_template(&template) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("Error reading template: {}", e);
                    std::process::exit(1);
                }
            };

            let ctx = match io::load_context(&context) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let engine = TemplateEngine::from_code(&language).with_format(match format {
                Format::Html => OutputFormat::Html,
                Format::Plain => OutputFormat::Plain,
            });

            let rendered = match at.as_deref() {
                Some(raw) => {
                    let now = match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                        Ok(d) => d,
                        Err(e) => {
                            eprintln!("Invalid --at date '{}': {}", raw, e);
                            std::process::exit(1);
                        }
                    };
                    engine.render_at(&template_text, &ctx, now)
                }
                None => engine.render(&template_text, &ctx),
            };

            // Leftover markers are by design (unknown tokens pass through),
            // but worth flagging to template authors.
            for m in MARKER.find_iter(&rendered) {
                eprintln!("warning: unresolved marker {} in output", m.as_str());
            }

            println!("{}", rendered);
        }
        Commands::Tokens => {
            for name in TOKEN_NAMES {
                if SECOND_PASS_TOKENS.contains(name) {
                    println!("[%{}%]  (re-resolved in second pass)", name);
                } else {
                    println!("[%{}%]", name);
                }
            }
        }
        Commands::Validate { path } => match io::load_context(&path) {
            Ok(ctx) => {
                let extras = ctx.extra.len();
                if extras > 0 {
                    println!("Context is valid ({} unrecognized field(s) kept).", extras);
                } else {
                    println!("Context is valid.");
                }
            }
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}
