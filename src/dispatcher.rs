// ABOUTME: Workout package dispatcher mapping sensor codes to workout variants
// ABOUTME: Validates package arity, builds workouts, and processes batches entry by entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Package Dispatcher
//!
//! A package is a `(code, data)` pair read from a sensor. Dispatching resolves
//! the code to a [`WorkoutKind`], checks that `data` carries the right number
//! of values, and builds the workout positionally.
//!
//! Batch processing isolates failures: a rejected package becomes a failed
//! [`PackageOutcome`] and the remaining packages are still processed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use workout_core::constants::workout_codes;
use workout_core::{TrainingReport, Workout, WorkoutError, WorkoutKind, WorkoutResult};

/// One raw sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Workout type code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Positional field values
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    /// Create a package
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Packages processed when no input file is given
#[must_use]
pub fn default_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new(workout_codes::SWIMMING, vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new(workout_codes::RUNNING, vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new(workout_codes::WALKING, vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read packages from a JSON file holding an array of `WorkoutPackage` objects
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid package array
pub fn load_packages(path: &Path) -> Result<Vec<WorkoutPackage>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read workout packages from {}", path.display()))?;
    let packages: Vec<WorkoutPackage> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid workout package file {}", path.display()))?;
    info!(
        input.path = %path.display(),
        input.packages = packages.len(),
        "Loaded workout packages"
    );
    Ok(packages)
}

/// Build a workout from a sensor package
///
/// A non-positive duration is accepted and logged; derived metrics are then
/// non-finite.
///
/// # Errors
///
/// Returns [`WorkoutError::UnknownWorkoutType`] if `workout_type` is not a
/// known code, or [`WorkoutError::ArityMismatch`] if `data` does not hold the
/// number of values that workout requires.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<Workout> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| WorkoutError::unknown_workout_type(workout_type))?;
    let workout = Workout::from_fields(kind, data)?;

    let duration_hours = workout.base().duration_hours;
    if duration_hours <= 0.0 {
        warn!(
            workout.kind = %kind,
            workout.duration_hours = duration_hours,
            "Non-positive workout duration, derived metrics will not be finite"
        );
    }

    debug!(workout.kind = %kind, workout.fields = data.len(), "Workout package dispatched");
    Ok(workout)
}

/// Render the report line for a workout
#[must_use]
pub fn format_report(workout: &Workout) -> String {
    workout.show_training_info().get_message()
}

/// Result of processing one package within a batch
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOutcome {
    /// Workout type code as received
    pub workout_type: String,
    /// Report on success, dispatch error otherwise
    pub result: WorkoutResult<TrainingReport>,
}

impl PackageOutcome {
    /// Whether the package produced a report
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Dispatch every package in input order
///
/// Dispatch errors are captured per package and never abort the batch.
#[must_use]
pub fn process_batch(packages: &[WorkoutPackage]) -> Vec<PackageOutcome> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let result = read_package(&package.workout_type, &package.data)
                .map(|workout| workout.show_training_info());
            if let Err(ref error) = result {
                warn!(
                    package.index = index,
                    package.workout_type = %package.workout_type,
                    error.code = error.code().as_str(),
                    "Skipping workout package: {error}"
                );
            }
            PackageOutcome {
                workout_type: package.workout_type.clone(),
                result,
            }
        })
        .collect()
}
