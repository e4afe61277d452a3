// ABOUTME: Dispatch error types for workout package parsing
// ABOUTME: Distinguishes unknown workout codes from wrong argument counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Error Types
//!
//! Errors raised while turning a raw `(code, data)` package into a workout.
//! Both variants are recoverable: callers report them per package and carry on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::WorkoutKind;

/// Result alias for workout dispatch operations
pub type WorkoutResult<T> = Result<T, WorkoutError>;

/// Stable error codes for machine-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Package code is not one of the known workout types
    #[serde(rename = "UNKNOWN_WORKOUT_TYPE")]
    UnknownWorkoutType,
    /// Package data length does not match the workout's field count
    #[serde(rename = "ARITY_MISMATCH")]
    ArityMismatch,
}

impl ErrorCode {
    /// Get the wire name of this code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "UNKNOWN_WORKOUT_TYPE",
            Self::ArityMismatch => "ARITY_MISMATCH",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "The workout type code is not recognized",
            Self::ArityMismatch => "The workout data has the wrong number of values",
        }
    }
}

/// Errors produced while dispatching a workout package
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkoutError {
    /// The package code is not one of `SWM`, `RUN`, `WLK`
    #[error("Unknown workout type: '{code}'. Valid options: SWM, RUN, WLK")]
    UnknownWorkoutType {
        /// The code as received
        code: String,
    },

    /// The package data does not carry exactly the fields the workout needs
    #[error("Wrong argument count for {workout_type}: got {actual}, expected {expected}")]
    ArityMismatch {
        /// Workout the code resolved to
        workout_type: WorkoutKind,
        /// Number of values received
        actual: usize,
        /// Number of values the workout requires
        expected: usize,
    },
}

impl WorkoutError {
    /// Create an "unknown workout type" error
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Create an "arity mismatch" error for the given workout
    #[must_use]
    pub const fn arity_mismatch(workout_type: WorkoutKind, actual: usize) -> Self {
        Self::ArityMismatch {
            workout_type,
            actual,
            expected: workout_type.field_count(),
        }
    }

    /// Get the stable error code
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownWorkoutType { .. } => ErrorCode::UnknownWorkoutType,
            Self::ArityMismatch { .. } => ErrorCode::ArityMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_mismatch_reports_both_counts() {
        let err = WorkoutError::arity_mismatch(WorkoutKind::Running, 2);
        assert_eq!(
            err,
            WorkoutError::ArityMismatch {
                workout_type: WorkoutKind::Running,
                actual: 2,
                expected: 3,
            }
        );
        let message = err.to_string();
        assert!(message.contains("got 2"));
        assert!(message.contains("expected 3"));
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let unknown = WorkoutError::unknown_workout_type("XYZ");
        let arity = WorkoutError::arity_mismatch(WorkoutKind::Swimming, 4);
        assert_eq!(unknown.code(), ErrorCode::UnknownWorkoutType);
        assert_eq!(arity.code(), ErrorCode::ArityMismatch);
        assert_ne!(unknown.code().as_str(), arity.code().as_str());
    }

    #[test]
    fn test_unknown_type_message_names_code() {
        let err = WorkoutError::unknown_workout_type("XYZ");
        assert!(err.to_string().contains("'XYZ'"));
    }
}
