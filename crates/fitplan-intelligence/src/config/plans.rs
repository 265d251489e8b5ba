// ABOUTME: Meal, training and supplement planning configuration
// ABOUTME: Slot proportions, frequency mappings, injury wording and ranking limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::meals::MealCategory;
use fitplan_core::models::{MealFrequency, WorkoutFrequency};
use serde::{Deserialize, Serialize};

/// A meal slot and the meal count at which it is added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSlotRule {
    /// Slot name shown to the user
    pub name: String,
    /// Catalog category options are drawn from
    pub category: MealCategory,
    /// Slot is included once the meal count reaches this value
    pub min_meal_count: u8,
    /// Share of daily calories
    pub proportion: f64,
}

impl MealSlotRule {
    fn new(name: &str, category: MealCategory, min_meal_count: u8, proportion: f64) -> Self {
        Self {
            name: name.to_owned(),
            category,
            min_meal_count,
            proportion,
        }
    }
}

/// Meal plan synthesizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Ordered slot rules: Breakfast, Lunch, Dinner, Snack, Second-Snack
    pub slots: Vec<MealSlotRule>,
    /// Options kept per slot after filtering: 3
    pub options_per_slot: usize,
    /// Meal count assumed when the question was skipped: 3
    pub default_meal_count: u8,
}

impl MealPlanConfig {
    /// Map the questionnaire answer to a meal count
    #[must_use]
    pub fn meal_count(&self, frequency: Option<MealFrequency>) -> u8 {
        match frequency {
            Some(MealFrequency::OneToTwo) => 2,
            Some(MealFrequency::Three) => 3,
            Some(MealFrequency::FourToFive) => 4,
            Some(MealFrequency::SixPlus) => 5,
            None => self.default_meal_count,
        }
    }
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            slots: vec![
                MealSlotRule::new("Breakfast", MealCategory::Breakfast, 1, 0.25),
                MealSlotRule::new("Lunch", MealCategory::Lunch, 2, 0.35),
                MealSlotRule::new("Dinner", MealCategory::Dinner, 3, 0.30),
                MealSlotRule::new("Snack", MealCategory::Snack, 4, 0.10),
                MealSlotRule::new("Second-Snack", MealCategory::Snack, 5, 0.10),
            ],
            options_per_slot: 3,
            default_meal_count: 3,
        }
    }
}

/// Training plan synthesizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlanConfig {
    /// Frequency assumed when the question was skipped
    pub default_frequency: WorkoutFrequency,
    /// Appended to every workout name when an injury is reported
    pub injury_suffix: String,
    /// Caution attached to every workout when an injury is reported
    pub injury_caution: String,
}

impl TrainingPlanConfig {
    /// Map the questionnaire answer to requested training days
    #[must_use]
    pub fn days_per_week(&self, frequency: Option<WorkoutFrequency>) -> u8 {
        match frequency.unwrap_or(self.default_frequency) {
            WorkoutFrequency::OneToTwo => 2,
            WorkoutFrequency::ThreeToFour => 4,
            WorkoutFrequency::FivePlus => 5,
        }
    }
}

impl Default for TrainingPlanConfig {
    fn default() -> Self {
        Self {
            default_frequency: WorkoutFrequency::ThreeToFour,
            injury_suffix: " (Modified)".to_owned(),
            injury_caution: "Work within a pain-free range of motion, reduce load where needed, and consult a physiotherapist before progressing.".to_owned(),
        }
    }
}

/// Supplement recommender configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementConfig {
    /// Recommendations returned at most: 5
    pub max_recommendations: usize,
    /// Shared tags quoted in the rationale at most: 2
    pub rationale_tag_limit: usize,
    /// Rationale used when no shared tag has a phrase
    pub fallback_rationale: String,
}

impl Default for SupplementConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
            rationale_tag_limit: 2,
            fallback_rationale: "overall wellness goals".to_owned(),
        }
    }
}
