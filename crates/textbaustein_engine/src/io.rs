/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2024-2026 textbaustein contributors
*/

//! File loading helpers for contexts and templates.

use std::fs;
use std::path::Path;

use textbaustein_core::DocumentContext;

use crate::EngineError;

/// Load a document context from a file.
/// JSON for `.json`, YAML otherwise.
pub fn load_context(path: &Path) -> Result<DocumentContext, EngineError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| EngineError::Parse("JSON".to_string(), e.to_string())),
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| EngineError::Parse("YAML".to_string(), e.to_string()))
        }
    }
}

/// Load a template from a text file.
pub fn load_template(path: &Path) -> Result<String, EngineError> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_json_context() {
        let dir = std::env::temp_dir();
        let path = dir.join("textbaustein_ctx_test.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{"companyName": "Muster GmbH", "total": 99.9}}"#).unwrap();

        let ctx = load_context(&path).unwrap();
        assert_eq!(ctx.issuer_name(), "Muster GmbH");
        assert_eq!(ctx.total, Some(99.9));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_yaml_context() {
        let dir = std::env::temp_dir();
        let path = dir.join("textbaustein_ctx_test.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "companyName: Muster GmbH").unwrap();
        writeln!(file, "invoiceNumber: RE-001").unwrap();

        let ctx = load_context(&path).unwrap();
        assert_eq!(ctx.resolved_invoice_number(), "RE-001");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_parse_error_reported() {
        let dir = std::env::temp_dir();
        let path = dir.join("textbaustein_ctx_broken.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_context(&path).unwrap_err();
        assert!(matches!(err, EngineError::Parse(ref f, _) if f == "JSON"));
        fs::remove_file(&path).ok();
    }
}
