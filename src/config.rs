// ABOUTME: Environment configuration for the workout report tool
// ABOUTME: Resolves output format and logging settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! There is no config file. Values come from the environment and command-line
//! flags override them.

use anyhow::{anyhow, Result};
use std::env;

use crate::logging::LoggingConfig;
use crate::output::OutputFormat;

/// Environment variable selecting the output format
pub const OUTPUT_FORMAT_ENV: &str = "WORKOUT_OUTPUT_FORMAT";

/// Runtime configuration for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Format of the lines printed to stdout
    pub output_format: OutputFormat,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            logging: LoggingConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `WORKOUT_OUTPUT_FORMAT` is set to an unknown format
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            output_format: parse_output_format(env::var(OUTPUT_FORMAT_ENV).ok().as_deref())?,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, output_format: Option<OutputFormat>, verbose: bool) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        if verbose {
            self.logging = self.logging.verbose();
        }
        self
    }
}

/// Resolve an optional raw output format value
///
/// # Errors
///
/// Returns an error if the value names an unknown format
pub fn parse_output_format(raw: Option<&str>) -> Result<OutputFormat> {
    raw.map_or(Ok(OutputFormat::default()), |value| {
        value
            .parse::<OutputFormat>()
            .map_err(|e: String| anyhow!("Invalid {OUTPUT_FORMAT_ENV}: {e}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_defaults_to_text() {
        assert_eq!(parse_output_format(None).unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        let err = parse_output_format(Some("yaml")).unwrap_err();
        assert!(err.to_string().contains(OUTPUT_FORMAT_ENV));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = ReportConfig::default().with_overrides(Some(OutputFormat::Json), true);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_no_overrides_keeps_values() {
        let config = ReportConfig::default().with_overrides(None, false);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
    }
}
