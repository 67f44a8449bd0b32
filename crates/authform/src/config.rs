// File: src/config.rs
// Purpose: Configuration parsing from authform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Controller configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthFormConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub branding: BrandingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub elements: ElementIds,
}

/// Simulated submission settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    /// Delay before a simulated submission completes (default: 2000)
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl SubmissionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Text shown in confirmation messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "authform=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include module targets in log lines
    #[serde(default = "default_false")]
    pub with_target: bool,
}

/// Element ids the controller looks up on the page.
///
/// Any of these may be missing from a given page; the handlers treat a
/// missing element as "nothing to update".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementIds {
    #[serde(default = "default_login_email")]
    pub login_email: String,

    #[serde(default = "default_login_password")]
    pub login_password: String,

    #[serde(default = "default_login_submit")]
    pub login_submit: String,

    #[serde(default = "default_register_name")]
    pub register_name: String,

    #[serde(default = "default_register_email")]
    pub register_email: String,

    #[serde(default = "default_register_password")]
    pub register_password: String,

    #[serde(default = "default_register_submit")]
    pub register_submit: String,

    #[serde(default = "default_agree_terms")]
    pub agree_terms: String,

    #[serde(default = "default_guest_button")]
    pub guest_button: String,

    #[serde(default = "default_strength_fill")]
    pub strength_fill: String,

    #[serde(default = "default_strength_feedback")]
    pub strength_feedback: String,

    #[serde(default = "default_weak_level")]
    pub weak_level: String,

    #[serde(default = "default_medium_level")]
    pub medium_level: String,

    #[serde(default = "default_strong_level")]
    pub strong_level: String,
}

// Default values
fn default_latency_ms() -> u64 {
    2000
}

fn default_app_name() -> String {
    "CareerAI".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_false() -> bool {
    false
}

fn default_login_email() -> String {
    "loginEmail".to_string()
}

fn default_login_password() -> String {
    "loginPassword".to_string()
}

fn default_login_submit() -> String {
    "loginSubmit".to_string()
}

fn default_register_name() -> String {
    "registerName".to_string()
}

fn default_register_email() -> String {
    "registerEmail".to_string()
}

fn default_register_password() -> String {
    "registerPassword".to_string()
}

fn default_register_submit() -> String {
    "registerSubmit".to_string()
}

fn default_agree_terms() -> String {
    "agreeTerms".to_string()
}

fn default_guest_button() -> String {
    "continueAsGuest".to_string()
}

fn default_strength_fill() -> String {
    "strengthFill".to_string()
}

fn default_strength_feedback() -> String {
    "strengthFeedback".to_string()
}

fn default_weak_level() -> String {
    "weakLevel".to_string()
}

fn default_medium_level() -> String {
    "mediumLevel".to_string()
}

fn default_strong_level() -> String {
    "strongLevel".to_string()
}

// Default implementations
impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            with_target: false,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            login_email: default_login_email(),
            login_password: default_login_password(),
            login_submit: default_login_submit(),
            register_name: default_register_name(),
            register_email: default_register_email(),
            register_password: default_register_password(),
            register_submit: default_register_submit(),
            agree_terms: default_agree_terms(),
            guest_button: default_guest_button(),
            strength_fill: default_strength_fill(),
            strength_feedback: default_strength_feedback(),
            weak_level: default_weak_level(),
            medium_level: default_medium_level(),
            strong_level: default_strong_level(),
        }
    }
}

impl AuthFormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from the default path (./authform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("authform.toml")
    }

    /// Parse configuration from a TOML string. Blank input yields defaults.
    pub fn from_toml_str(content: &str) -> crate::error::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AuthFormConfig::default();
        assert_eq!(config.submission.latency_ms, 2000);
        assert_eq!(config.submission.latency(), Duration::from_secs(2));
        assert_eq!(config.branding.app_name, "CareerAI");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.elements.register_password, "registerPassword");
        assert_eq!(config.elements.guest_button, "continueAsGuest");
    }

    #[test]
    fn test_partial_toml() {
        let config = AuthFormConfig::from_toml_str(
            r#"
            [submission]
            latency_ms = 50

            [elements]
            login_email = "email"
            "#,
        )
        .unwrap();

        assert_eq!(config.submission.latency_ms, 50);
        assert_eq!(config.elements.login_email, "email");
        // Untouched sections keep their defaults
        assert_eq!(config.elements.login_password, "loginPassword");
        assert_eq!(config.branding, BrandingConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            AuthFormConfig::from_toml_str("  \n").unwrap(),
            AuthFormConfig::default()
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = AuthFormConfig::from_toml_str("[submission]\nlatency_ms = \"soon\"").unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_load_missing_file() {
        let config = AuthFormConfig::load("/nonexistent/authform.toml").unwrap();
        assert_eq!(config, AuthFormConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[branding]\napp_name = \"Acme\"").unwrap();

        let config = AuthFormConfig::load(file.path()).unwrap();
        assert_eq!(config.branding.app_name, "Acme");
    }
}
