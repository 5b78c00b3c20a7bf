//! Configuration management for the tinycheck runner.
//!
//! This module handles loading and validating configuration from environment
//! variables. Report output goes to stdout, so logging is configured for
//! stderr and the `.env` file is loaded without printing anything.

use crate::error::{ConfigError, ConfigResult};
use crate::runner::RunOptions;
use std::env;

/// Output format for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Per-case status lines plus a summary
    #[default]
    Text,
    /// One JSON document with the full run summary
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    fn parse(var: &str, value: &str) -> ConfigResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                var: var.to_string(),
                reason: format!("Must be 'text' or 'json', got: {}", other),
            }),
        }
    }
}

/// Configuration for the tinycheck runner.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Stop after the first failed or errored case (default: false)
    pub fail_fast: bool,

    /// Report output format (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `TINYCHECK_FAIL_FAST`: Stop on first failure (default: false)
    /// - `TINYCHECK_OUTPUT_FORMAT`: "text" or "json" (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let fail_fast = match env::var("TINYCHECK_FAIL_FAST") {
            Ok(value) => RunOptions::parse_bool("TINYCHECK_FAIL_FAST", &value)?,
            Err(_) => false,
        };

        let output_format = match env::var("TINYCHECK_OUTPUT_FORMAT") {
            Ok(value) => OutputFormat::parse("TINYCHECK_OUTPUT_FORMAT", &value)?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config {
            log_level,
            fail_fast,
            output_format,
        })
    }
}
