// ABOUTME: Main library entry point for the workout report toolkit
// ABOUTME: Provides package dispatch, batch processing, output rendering, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Report
//!
//! Turns raw sensor packages into per-workout summary lines.
//!
//! ## Example
//!
//! ```rust
//! use workout_report::dispatcher::{format_report, read_package};
//!
//! # fn main() -> Result<(), workout_report::WorkoutError> {
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! assert_eq!(
//!     format_report(&workout),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
//! );
//! # Ok(())
//! # }
//! ```

/// Environment configuration with command-line overrides
pub mod config;

/// Package dispatch and batch processing
pub mod dispatcher;

/// Structured logging setup
pub mod logging;

/// Output formats and line rendering
pub mod output;

pub use workout_core::{
    constants, ErrorCode, Running, SportsWalking, Swimming, Training, TrainingReport, Workout,
    WorkoutError, WorkoutKind, WorkoutResult,
};
