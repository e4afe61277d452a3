// ABOUTME: Workout variant records and the Training trait for derived metrics
// ABOUTME: Implements distance, mean speed, and calorie formulas for running, walking, and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Formulas keep their published operand order; no fused multiply-add.
#![allow(clippy::suboptimal_flops)]

use crate::constants::{calories, step_length, units};
use crate::errors::{WorkoutError, WorkoutResult};
use crate::models::{TrainingReport, WorkoutKind};

/// Raw inputs shared by every workout variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    /// Recorded units of movement (steps or strokes)
    pub distance_units: f64,
    /// Session duration in hours, expected to be positive
    pub duration_hours: f64,
    /// Athlete body weight in kilograms
    pub weight_kg: f64,
}

impl WorkoutBase {
    /// Create the shared base fields
    #[must_use]
    pub const fn new(distance_units: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            distance_units,
            duration_hours,
            weight_kg,
        }
    }
}

/// Derived metrics of a single workout session
///
/// `spent_calories` has no default: every variant states its own formula.
/// Nothing here guards against a zero duration; a non-positive
/// `duration_hours` yields non-finite speed and calories.
pub trait Training {
    /// Workout kind of the implementing variant
    const KIND: WorkoutKind;

    /// Metres covered per recorded unit of movement
    const STEP_LENGTH_M: f64;

    /// Shared raw inputs
    fn base(&self) -> &WorkoutBase;

    /// Distance in kilometres
    fn distance_km(&self) -> f64 {
        self.base().distance_units * Self::STEP_LENGTH_M / units::M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    /// Calories burned in kcal
    fn spent_calories(&self) -> f64;

    /// Snapshot of all derived metrics
    fn show_training_info(&self) -> TrainingReport {
        TrainingReport::new(
            Self::KIND.display_name(),
            self.base().duration_hours,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

/// Running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: WorkoutBase,
}

impl Running {
    /// Create a running record
    #[must_use]
    pub const fn new(distance_units: f64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: WorkoutBase::new(distance_units, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;
    const STEP_LENGTH_M: f64 = step_length::RUNNING_M;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let base = self.base();
        (calories::RUNNING_SPEED_MULTIPLIER * self.mean_speed_kmh()
            - calories::RUNNING_SPEED_SHIFT)
            * base.weight_kg
            / units::M_IN_KM
            * base.duration_hours
            * units::MIN_IN_H
    }
}

/// Sports walking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: WorkoutBase,
    height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking record
    #[must_use]
    pub const fn new(
        distance_units: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            base: WorkoutBase::new(distance_units, duration_hours, weight_kg),
            height_cm,
        }
    }

    /// Athlete height in centimetres
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::Walking;
    const STEP_LENGTH_M: f64 = step_length::WALKING_M;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let base = self.base();
        // Only whole multiples of height count.
        let speed_height_ratio = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);
        (calories::WALKING_WEIGHT_MULTIPLIER * base.weight_kg
            + speed_height_ratio * calories::WALKING_SPEED_HEIGHT_MULTIPLIER * base.weight_kg)
            * base.duration_hours
            * units::MIN_IN_H
    }
}

/// Floored quotient derived from the `fmod` remainder
///
/// Plain `(a / b).floor()` overshoots when the rounded quotient lands on a
/// whole number the exact quotient falls short of, e.g. `1.0 / 0.1`.
fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }
    let whole = quotient.floor();
    if quotient - whole > 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

/// Pool swimming session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: WorkoutBase,
    pool_length_m: f64,
    pool_lap_count: f64,
}

impl Swimming {
    /// Create a swimming record
    #[must_use]
    pub const fn new(
        distance_units: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: f64,
    ) -> Self {
        Self {
            base: WorkoutBase::new(distance_units, duration_hours, weight_kg),
            pool_length_m,
            pool_lap_count,
        }
    }

    /// Pool length in metres
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_lap_count(&self) -> f64 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const STEP_LENGTH_M: f64 = step_length::SWIMMING_M;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    /// Pool-based speed; stroke count does not enter it
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count / units::M_IN_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + calories::SWIMMING_SPEED_SHIFT)
            * calories::SWIMMING_WEIGHT_MULTIPLIER
            * self.base.weight_kg
    }
}

/// A workout of one of the supported kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running session
    Running(Running),
    /// Sports walking session
    Walking(SportsWalking),
    /// Pool swimming session
    Swimming(Swimming),
}

impl Workout {
    /// Build a workout positionally from package data
    ///
    /// Values map to fields in the order given by [`WorkoutKind::field_names`].
    ///
    /// # Errors
    ///
    /// Returns [`WorkoutError::ArityMismatch`] if `data` does not hold exactly
    /// [`WorkoutKind::field_count`] values.
    pub fn from_fields(kind: WorkoutKind, data: &[f64]) -> WorkoutResult<Self> {
        match (kind, data) {
            (WorkoutKind::Running, &[distance_units, duration_hours, weight_kg]) => Ok(
                Self::Running(Running::new(distance_units, duration_hours, weight_kg)),
            ),
            (WorkoutKind::Walking, &[distance_units, duration_hours, weight_kg, height_cm]) => {
                Ok(Self::Walking(SportsWalking::new(
                    distance_units,
                    duration_hours,
                    weight_kg,
                    height_cm,
                )))
            }
            (
                WorkoutKind::Swimming,
                &[distance_units, duration_hours, weight_kg, pool_length_m, pool_lap_count],
            ) => Ok(Self::Swimming(Swimming::new(
                distance_units,
                duration_hours,
                weight_kg,
                pool_length_m,
                pool_lap_count,
            ))),
            _ => Err(WorkoutError::arity_mismatch(kind, data.len())),
        }
    }

    /// Kind of this workout
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking(_) => WorkoutKind::Walking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Shared raw inputs
    #[must_use]
    pub fn base(&self) -> &WorkoutBase {
        match self {
            Self::Running(w) => w.base(),
            Self::Walking(w) => w.base(),
            Self::Swimming(w) => w.base(),
        }
    }

    /// Distance in kilometres
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance_km(),
            Self::Walking(w) => w.distance_km(),
            Self::Swimming(w) => w.distance_km(),
        }
    }

    /// Mean speed in km/h
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(w) => w.mean_speed_kmh(),
            Self::Walking(w) => w.mean_speed_kmh(),
            Self::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    /// Calories burned in kcal
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Running(w) => w.spent_calories(),
            Self::Walking(w) => w.spent_calories(),
            Self::Swimming(w) => w.spent_calories(),
        }
    }

    /// Snapshot of all derived metrics
    #[must_use]
    pub fn show_training_info(&self) -> TrainingReport {
        match self {
            Self::Running(w) => w.show_training_info(),
            Self::Walking(w) => w.show_training_info(),
            Self::Swimming(w) => w.show_training_info(),
        }
    }
}
