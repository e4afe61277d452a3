// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, per-variant step lengths, and calorie formula coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Coefficients are fixed per workout variant and are not configurable.

/// Unit conversion constants
pub mod units {
    /// Metres in one kilometre
    pub const M_IN_KM: f64 = 1000.0;
    /// Minutes in one hour
    pub const MIN_IN_H: f64 = 60.0;
}

/// Distance covered per recorded unit of movement, in metres
pub mod step_length {
    /// Running stride length
    pub const RUNNING_M: f64 = 0.65;
    /// Walking stride length
    pub const WALKING_M: f64 = 0.65;
    /// Distance per swimming stroke
    pub const SWIMMING_M: f64 = 1.38;
}

/// Calorie formula coefficients
pub mod calories {
    /// Running: multiplier applied to mean speed
    pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
    /// Running: offset subtracted from the scaled mean speed
    pub const RUNNING_SPEED_SHIFT: f64 = 20.0;
    /// Walking: weight multiplier of the base term
    pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Walking: weight multiplier of the speed/height term
    pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// Swimming: offset added to mean speed
    pub const SWIMMING_SPEED_SHIFT: f64 = 1.1;
    /// Swimming: weight multiplier
    pub const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Workout type codes as produced by the sensor packages
pub mod workout_codes {
    /// Swimming package code
    pub const SWIMMING: &str = "SWM";
    /// Running package code
    pub const RUNNING: &str = "RUN";
    /// Sports walking package code
    pub const WALKING: &str = "WLK";
}
