// ABOUTME: Core types and constants for the workout report toolkit
// ABOUTME: Foundation crate with workout variants, report value object, and error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate holding the workout variants and their formulas. The
//! dispatcher and the command-line front end live in the root crate.
//!
//! ## Modules
//!
//! - **constants**: Unit conversions, step lengths, and calorie coefficients
//! - **errors**: `WorkoutError` and the stable `ErrorCode` set
//! - **models**: `Running`, `SportsWalking`, `Swimming`, the closed `Workout` enum, and `TrainingReport`

/// Physical constants and coefficients organized by domain
pub mod constants;

/// Dispatch error taxonomy with stable error codes
pub mod errors;

/// Workout variants, the `Training` trait, and the report value object
pub mod models;

pub use errors::{ErrorCode, WorkoutError, WorkoutResult};
pub use models::{
    Running, SportsWalking, Swimming, Training, TrainingReport, Workout, WorkoutBase, WorkoutKind,
};
