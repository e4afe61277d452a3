// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Maps package codes to workout kinds with field counts and display names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::workout_codes;
use crate::errors::WorkoutError;

/// Enumeration of supported workout types
///
/// The set is closed: every kind has its own formulas and its own
/// positional field layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Running, package code `RUN`
    Running,
    /// Sports walking, package code `WLK`
    Walking,
    /// Pool swimming, package code `SWM`
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds in package-code order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Resolve a package code (case-sensitive)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            workout_codes::SWIMMING => Some(Self::Swimming),
            workout_codes::RUNNING => Some(Self::Running),
            workout_codes::WALKING => Some(Self::Walking),
            _ => None,
        }
    }

    /// Get the package code for this kind
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => workout_codes::RUNNING,
            Self::Walking => workout_codes::WALKING,
            Self::Swimming => workout_codes::SWIMMING,
        }
    }

    /// Name shown in the `Тип тренировки` slot of the report
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Positional field names, base fields first
    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["distance_units", "duration_hours", "weight_kg"],
            Self::Walking => &["distance_units", "duration_hours", "weight_kg", "height_cm"],
            Self::Swimming => &[
                "distance_units",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_lap_count",
            ],
        }
    }

    /// Number of values a package of this kind must carry
    #[must_use]
    pub const fn field_count(self) -> usize {
        self.field_names().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| WorkoutError::unknown_workout_type(s))
    }
}
