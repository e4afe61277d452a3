// ABOUTME: Output format selection and line rendering for batch outcomes
// ABOUTME: Renders report lines or one-line diagnostics as plain text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;
use workout_core::WorkoutError;

use crate::dispatcher::PackageOutcome;

/// Output format for report lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed human-readable template
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    /// Get the format name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            )),
        }
    }
}

/// One-line diagnostic for a rejected package
#[must_use]
pub fn diagnostic(error: &WorkoutError) -> String {
    match error {
        WorkoutError::UnknownWorkoutType { code } => {
            format!("Ошибка: неизвестный тип тренировки '{code}'")
        }
        WorkoutError::ArityMismatch {
            workout_type,
            actual,
            expected,
        } => format!(
            "Ошибка: неверное количество данных для {workout_type}: получено {actual}, ожидалось {expected}"
        ),
    }
}

impl PackageOutcome {
    /// Render the output line for this outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized to JSON.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match (format, &self.result) {
            (OutputFormat::Text, Ok(report)) => Ok(report.get_message()),
            (OutputFormat::Text, Err(error)) => Ok(diagnostic(error)),
            (OutputFormat::Json, Ok(report)) => serde_json::to_string(report),
            (OutputFormat::Json, Err(error)) => Ok(json!({
                "error": {
                    "code": error.code(),
                    "description": error.code().description(),
                    "message": error.to_string(),
                }
            })
            .to_string()),
        }
    }
}
