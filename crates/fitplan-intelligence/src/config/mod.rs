// ABOUTME: Plan engine configuration container with validation and environment overrides
// ABOUTME: Aggregates body composition, meal, training and supplement settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Engine Configuration Module
//!
//! Typed configuration for every engine component. Values are passed to the
//! engine explicitly; there is no process-wide singleton, so two requests
//! with different configs can run side by side.
//!
//! # Module Structure
//!
//! - `body_composition` - BMI bands, Navy coefficients, BMR, activity factors, macro presets
//! - `plans` - meal slots, training frequency and injury wording, supplement ranking limits
//! - `error` - validation errors

pub mod body_composition;
pub mod error;
pub mod plans;

pub use body_composition::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, BodyCompositionConfig, EnergyTargetConfig,
    MacroPresetsConfig, NavyBodyFatConfig, NavyCoefficients, TargetBodyFatConfig,
};
pub use error::ConfigError;
pub use plans::{MealPlanConfig, MealSlotRule, SupplementConfig, TrainingPlanConfig};

use fitplan_core::models::MacroPercentages;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main plan engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanEngineConfig {
    /// Body composition estimator settings
    pub body_composition: BodyCompositionConfig,
    /// Meal plan synthesizer settings
    pub meal_plan: MealPlanConfig,
    /// Training plan synthesizer settings
    pub training_plan: TrainingPlanConfig,
    /// Supplement recommender settings
    pub supplements: SupplementConfig,
}

impl PlanEngineConfig {
    /// Load defaults, apply environment overrides and validate
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            debug!(env_var = env_var_name, "Applied configuration override");
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let energy = &mut self.body_composition.energy;
        Self::apply_env_var("FITPLAN_CALORIE_FLOOR", &mut energy.calorie_floor)?;
        Self::apply_env_var("FITPLAN_DEFICIT_KCAL", &mut energy.deficit_kcal)?;
        Self::apply_env_var("FITPLAN_SURPLUS_KCAL", &mut energy.surplus_kcal)?;
        Self::apply_env_var("FITPLAN_WATER_ML_PER_KG", &mut energy.water_ml_per_kg)?;

        Self::apply_env_var(
            "FITPLAN_OPTIONS_PER_SLOT",
            &mut self.meal_plan.options_per_slot,
        )?;
        Self::apply_env_var(
            "FITPLAN_MAX_SUPPLEMENTS",
            &mut self.supplements.max_recommendations,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_body_composition()?;
        self.validate_plans()
    }

    fn validate_body_composition(&self) -> Result<(), ConfigError> {
        let body = &self.body_composition;

        let bmi = &body.bmi;
        if !(bmi.underweight_below < bmi.normal_below && bmi.normal_below < bmi.overweight_below)
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be in ascending order",
            ));
        }

        if body.navy.min_pct <= 0.0 || body.navy.min_pct >= body.navy.max_pct {
            return Err(ConfigError::InvalidRange(
                "body-fat clamp must satisfy 0 < min_pct < max_pct",
            ));
        }

        if body.bmr.msj_weight_coef <= 0.0 || body.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &body.activity_factors;
        if factors.beginner < 1.0 || factors.athletic > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.beginner >= factors.intermediate
            || factors.intermediate >= factors.advanced
            || factors.advanced >= factors.athletic
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if body.energy.calorie_floor == 0 {
            return Err(ConfigError::ValueOutOfRange("calorie floor must be positive"));
        }
        if body.energy.deficit_kcal < 0.0 || body.energy.surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie deficit and surplus must not be negative",
            ));
        }

        let macros = &body.macros;
        let presets: [MacroPercentages; 5] = [
            macros.baseline,
            macros.build_muscle,
            macros.lose_weight,
            macros.increase_endurance,
            macros.keto,
        ];
        if presets.iter().any(|preset| preset.total() != 100) {
            return Err(ConfigError::InvalidWeights(
                "Macro presets must sum to 100",
            ));
        }
        if macros.plant_based_protein_floor > 100 || macros.plant_based_carb_cap > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "Plant-based macro bounds must be percentages",
            ));
        }

        Ok(())
    }

    fn validate_plans(&self) -> Result<(), ConfigError> {
        let meal = &self.meal_plan;
        if meal.slots.is_empty() {
            return Err(ConfigError::InvalidRange("at least one meal slot is required"));
        }
        if meal
            .slots
            .iter()
            .any(|slot| slot.proportion <= 0.0 || slot.proportion > 1.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "meal slot proportions must be in (0, 1]",
            ));
        }
        if meal
            .slots
            .windows(2)
            .any(|pair| pair[0].min_meal_count > pair[1].min_meal_count)
        {
            return Err(ConfigError::InvalidRange(
                "meal slots must be ordered by meal count threshold",
            ));
        }
        if meal.options_per_slot == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "options_per_slot must be at least 1",
            ));
        }

        if self.supplements.max_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_recommendations must be at least 1",
            ));
        }

        Ok(())
    }
}
