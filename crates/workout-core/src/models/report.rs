// ABOUTME: Training report value object with the fixed human-readable template
// ABOUTME: Holds derived workout metrics and renders them to three decimal places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived metrics of one workout, captured at the time of the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    training_type: String,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl TrainingReport {
    /// Create a report from already computed metrics
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    /// Display name of the workout variant
    #[must_use]
    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Distance in kilometres
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Mean speed in km/h
    #[must_use]
    pub const fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    /// Calories burned in kcal
    #[must_use]
    pub const fn calories_kcal(&self) -> f64 {
        self.calories_kcal
    }

    /// Render the report line
    #[must_use]
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}
