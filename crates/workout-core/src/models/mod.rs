// ABOUTME: Core data models for workout sessions and their derived metrics
// ABOUTME: Re-exports workout variants, the Training trait, WorkoutKind, and TrainingReport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every workout is an immutable value built once from a sensor package.
//!
//! - `WorkoutKind`: the closed set of workout types and their package codes
//! - `Running`, `SportsWalking`, `Swimming`: variant records implementing `Training`
//! - `Workout`: sum type over the three variants
//! - `TrainingReport`: derived metrics snapshot with the fixed report template

mod kind;
mod report;
mod training;

pub use kind::WorkoutKind;
pub use report::TrainingReport;
pub use training::{Running, SportsWalking, Swimming, Training, Workout, WorkoutBase};
