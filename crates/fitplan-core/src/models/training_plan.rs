// ABOUTME: Training plan skeleton models
// ABOUTME: Goal type, template level bucket, workouts and injury annotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::EquipmentAccess;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Goal bucket a workout template is chosen for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GoalType {
    /// Fat loss
    LoseWeight,
    /// Hypertrophy and strength
    BuildMuscle,
    /// Aerobic capacity
    IncreaseEndurance,
    /// Mobility
    ImproveFlexibility,
    /// No specific goal
    GeneralFitness,
}

impl GoalType {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose-weight",
            Self::BuildMuscle => "build-muscle",
            Self::IncreaseEndurance => "increase-endurance",
            Self::ImproveFlexibility => "improve-flexibility",
            Self::GeneralFitness => "general-fitness",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template bucket; the questionnaire's `athletic` level has no bucket of its own
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrainingLevel {
    /// Beginner templates
    Beginner,
    /// Intermediate templates
    Intermediate,
    /// Advanced templates
    Advanced,
}

impl TrainingLevel {
    /// Wire name of the level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// A single training day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    /// Day label
    pub day: String,
    /// Session name
    pub name: String,
    /// Ordered exercise prescriptions
    pub exercises: Vec<String>,
    /// Caution attached when the user reported an injury
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
}

/// Weekly training plan skeleton
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingPlan {
    /// Resolved goal type
    pub goal: GoalType,
    /// Template bucket used
    pub level: TrainingLevel,
    /// Training days actually scheduled
    pub days_per_week: u8,
    /// Human-readable training style
    pub training_type: String,
    /// `"home"` or `"gym"`
    pub location: String,
    /// Equipment the plan was built for
    pub equipment_level: EquipmentAccess,
    /// Plan-level injury note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_note: Option<String>,
    /// Ordered workouts
    pub workouts: Vec<Workout>,
}
