// ABOUTME: Questionnaire response model produced by the quiz UI
// ABOUTME: Defines facet enums and defensive numeric parsing for string-typed fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::PlanError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Biological gender used by the BMR and body-fat formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male coefficients
    Male,
    /// Female coefficients
    Female,
}

/// Self-reported fitness level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Trains hard and often
    Advanced,
    /// Competitive athlete
    Athletic,
}

impl FitnessLevel {
    /// Wire name of the level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Athletic => "athletic",
        }
    }
}

/// How many workouts per week the user wants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutFrequency {
    /// One or two sessions
    #[serde(rename = "1-2")]
    OneToTwo,
    /// Three or four sessions
    #[serde(rename = "3-4")]
    ThreeToFour,
    /// Five or more sessions
    #[serde(rename = "5+")]
    FivePlus,
}

/// Equipment available to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentAccess {
    /// Bodyweight only
    None,
    /// Bands, a mat, maybe a pair of light weights
    Minimal,
    /// A home setup with free weights
    HomeGym,
    /// Commercial gym
    FullGym,
}

impl EquipmentAccess {
    /// Whether equipment-based exercises must be swapped for bodyweight work
    #[must_use]
    pub const fn needs_substitution(&self) -> bool {
        matches!(self, Self::None | Self::Minimal)
    }

    /// Wire name of the equipment level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Minimal => "minimal",
            Self::HomeGym => "home-gym",
            Self::FullGym => "full-gym",
        }
    }
}

/// Dietary pattern the user follows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    /// No restrictions
    #[default]
    Omnivore,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Vegetarian plus fish
    Pescatarian,
    /// Very low carbohydrate
    Keto,
    /// Whole foods, no grains or dairy
    Paleo,
    /// Mediterranean pattern
    Mediterranean,
}

impl DietaryPreference {
    /// Wire name of the diet
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
            Self::Mediterranean => "mediterranean",
        }
    }

    /// Vegan or vegetarian
    #[must_use]
    pub const fn is_plant_based(&self) -> bool {
        matches!(self, Self::Vegan | Self::Vegetarian)
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of meals per day the user prefers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealFrequency {
    /// One or two meals
    #[serde(rename = "1-2")]
    OneToTwo,
    /// Three meals
    #[serde(rename = "3")]
    Three,
    /// Four or five meals
    #[serde(rename = "4-5")]
    FourToFive,
    /// Six or more meals
    #[serde(rename = "6+")]
    SixPlus,
}

/// Self-reported sleep quality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    /// Poor
    Poor,
    /// Fair
    Fair,
    /// Good
    Good,
    /// Excellent
    Excellent,
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Low
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
}

/// Self-reported daytime energy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
}

/// Self-reported ability to concentrate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FocusLevel {
    /// Poor
    Poor,
    /// Average
    Average,
    /// Good
    Good,
}

/// How often the user gets sick
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImmunityStrength {
    /// Frequently ill
    Weak,
    /// Occasionally ill
    Average,
    /// Rarely ill
    Strong,
}

/// How quickly the user recovers after training
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryRate {
    /// Slow
    Slow,
    /// Average
    Average,
    /// Fast
    Fast,
}

/// A numeric answer that may arrive as a JSON number or as a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Native JSON number
    Number(f64),
    /// Text such as `"72.5"` typed into a form field
    Text(String),
}

impl NumericInput {
    /// Parse into a finite `f64`
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Validation` naming `field` if the text is not a
    /// number or the value is NaN/infinite. A parse failure never becomes zero.
    pub fn to_finite(&self, field: &str) -> Result<f64, PlanError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                PlanError::validation(field, format!("not a number: '{text}'"))
            })?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PlanError::validation(field, "value must be a finite number"))
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Answers submitted through the onboarding quiz
///
/// Every field is optional on the wire; each engine component decides which
/// ones it requires and reports a `PlanError` naming the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireResponse {
    /// Age in whole years
    pub age: Option<NumericInput>,
    /// Biological gender
    pub gender: Option<Gender>,
    /// Height in centimeters
    pub height_cm: Option<NumericInput>,
    /// Current body weight in kilograms
    pub current_weight_kg: Option<NumericInput>,
    /// Goal body weight in kilograms
    pub target_weight_kg: Option<NumericInput>,
    /// Waist circumference in centimeters
    pub waist_cm: Option<NumericInput>,
    /// Self-reported fitness level
    pub fitness_level: Option<FitnessLevel>,
    /// Goal ids in the order the user picked them
    pub fitness_goals: Vec<String>,
    /// Desired workouts per week
    pub workout_frequency: Option<WorkoutFrequency>,
    /// Preferred time of day for training
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_workout_time: Option<String>,
    /// Preferred session length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_duration: Option<String>,
    /// Available equipment
    pub equipment_access: Option<EquipmentAccess>,
    /// `"none"` or a free-text condition
    pub previous_injuries: Option<String>,
    /// Dietary pattern
    pub dietary_preference: Option<DietaryPreference>,
    /// Meals per day
    pub meal_frequency: Option<MealFrequency>,
    /// Allergy labels such as `"nuts"`, `"dairy"`, `"eggs"`
    pub food_allergies: BTreeSet<String>,
    /// Sleep quality
    pub sleep_quality: Option<SleepQuality>,
    /// Stress level
    pub stress_level: Option<StressLevel>,
    /// Energy level
    pub energy_level: Option<EnergyLevel>,
    /// Focus level
    pub focus_level: Option<FocusLevel>,
    /// Immunity strength
    pub immunity_strength: Option<ImmunityStrength>,
    /// Recovery rate
    pub recovery_rate: Option<RecoveryRate>,
}

impl QuestionnaireResponse {
    /// Dietary preference, defaulting to omnivore when unanswered
    #[must_use]
    pub fn diet(&self) -> DietaryPreference {
        self.dietary_preference.unwrap_or_default()
    }

    /// The reported injury, if any. `"none"` (any case) and blank answers mean no injury.
    #[must_use]
    pub fn injury(&self) -> Option<&str> {
        self.previous_injuries
            .as_deref()
            .map(str::trim)
            .filter(|answer| !answer.is_empty() && !answer.eq_ignore_ascii_case("none"))
    }
}

/// Parse a required numeric field
///
/// # Errors
///
/// Returns `PlanError::MissingField` if the field is absent, or
/// `PlanError::Validation` if it is unparseable.
pub fn required_number(field: &str, value: Option<&NumericInput>) -> Result<f64, PlanError> {
    value
        .ok_or_else(|| PlanError::missing(field))?
        .to_finite(field)
}

/// Parse a required enum field
///
/// # Errors
///
/// Returns `PlanError::MissingField` if the field is absent.
pub fn required<T: Copy>(field: &str, value: Option<T>) -> Result<T, PlanError> {
    value.ok_or_else(|| PlanError::missing(field))
}
