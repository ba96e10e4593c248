// File: src/config.rs
// Purpose: Form binding configuration (selectors, class names, messages)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where the validator finds its elements and which classes it toggles.
///
/// Every key is optional; the defaults describe the stock contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    #[serde(default = "default_form_selector", alias = "form_selector")]
    pub form_selector: String,

    #[serde(default = "default_field_selector", alias = "field_selector")]
    pub field_selector: String,

    #[serde(default = "default_submit_id", alias = "submit_id")]
    pub submit_id: String,

    #[serde(default = "default_valid_class", alias = "valid_class")]
    pub valid_class: String,

    #[serde(default = "default_invalid_class", alias = "invalid_class")]
    pub invalid_class: String,

    /// Class revealing a warning element
    #[serde(default = "default_show_class", alias = "show_class")]
    pub show_class: String,

    #[serde(default = "default_success_message", alias = "success_message")]
    pub success_message: String,

    /// Disable the submit control after a clear, so it matches the
    /// now-empty fields. Off by default: clearing leaves the control as the
    /// last validation set it.
    #[serde(default, alias = "disable_submit_on_clear")]
    pub disable_submit_on_clear: bool,
}

fn default_form_selector() -> String {
    "form".to_string()
}

fn default_field_selector() -> String {
    ".input-field".to_string()
}

fn default_submit_id() -> String {
    "btn".to_string()
}

fn default_valid_class() -> String {
    "valid".to_string()
}

fn default_invalid_class() -> String {
    "invalid".to_string()
}

fn default_show_class() -> String {
    "show".to_string()
}

fn default_success_message() -> String {
    "Informações enviadas com sucesso!".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            field_selector: default_field_selector(),
            submit_id: default_submit_id(),
            valid_class: default_valid_class(),
            invalid_class: default_invalid_class(),
            show_class: default_show_class(),
            success_message: default_success_message(),
            disable_submit_on_clear: false,
        }
    }
}

impl FormConfig {
    /// Parse a TOML document. Empty input yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).context("Failed to parse form config")
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(?path, "no form config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.form_selector, "form");
        assert_eq!(config.field_selector, ".input-field");
        assert_eq!(config.submit_id, "btn");
        assert_eq!(config.show_class, "show");
        assert_eq!(config.success_message, "Informações enviadas com sucesso!");
        assert!(!config.disable_submit_on_clear);
    }

    #[test]
    fn test_empty_config() {
        let config = FormConfig::from_toml_str("  \n").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            submit_id = "send"
            show_class = "visible"
            disable_submit_on_clear = true
        "#;
        let config = FormConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.submit_id, "send");
        assert_eq!(config.show_class, "visible");
        assert!(config.disable_submit_on_clear);
        assert_eq!(config.field_selector, ".input-field");
    }

    #[test]
    fn test_camel_case_keys() {
        let json = r#"{"submitId": "go", "fieldSelector": "input"}"#;
        let config: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.submit_id, "go");
        assert_eq!(config.field_selector, "input");
    }

    #[test]
    fn test_invalid_config() {
        let err = FormConfig::from_toml_str("submit_id = [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse form config"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FormConfig::load(dir.path().join("formguard.toml")).unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "success_message = \"Obrigado!\"").unwrap();
        let config = FormConfig::load(file.path()).unwrap();
        assert_eq!(config.success_message, "Obrigado!");
    }

    #[test]
    fn test_load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "valid_class = 3").unwrap();
        let err = FormConfig::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
