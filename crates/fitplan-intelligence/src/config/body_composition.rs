// ABOUTME: Body composition configuration: BMI bands, Navy coefficients, BMR and macro presets
// ABOUTME: Defaults reproduce the published formulas and the product's fixed policy tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Body fat: Hodgdon & Beckett (1984), U.S. Navy circumference method

use fitplan_core::models::{FitnessLevel, Gender, MacroPercentages};
use serde::{Deserialize, Serialize};

/// Body composition estimator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// BMI category thresholds
    pub bmi: BmiThresholds,
    /// Navy circumference formula settings
    pub navy: NavyBodyFatConfig,
    /// Target body-fat policy table
    pub target_body_fat: TargetBodyFatConfig,
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment, floor and hydration
    pub energy: EnergyTargetConfig,
    /// Macro split presets
    pub macros: MacroPresetsConfig,
}

/// Upper bounds (exclusive) of each BMI band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Below this is underweight: 18.5
    pub underweight_below: f64,
    /// Below this is normal: 25.0
    pub normal_below: f64,
    /// Below this is overweight, otherwise obese: 30.0
    pub overweight_below: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            normal_below: 25.0,
            overweight_below: 30.0,
        }
    }
}

/// Coefficients of `495 / (c0 - c1*log10(waist) + c2*log10(height)) - 450`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NavyCoefficients {
    /// Constant term
    pub c0: f64,
    /// Waist coefficient
    pub c1: f64,
    /// Height coefficient
    pub c2: f64,
}

/// Navy circumference body-fat settings
///
/// The female coefficients are applied to waist and height only. The published
/// female variant also needs hip circumference, which the quiz never collects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavyBodyFatConfig {
    /// Numerator: 495
    pub numerator: f64,
    /// Subtracted offset: 450
    pub offset: f64,
    /// Male coefficients (1.0324, 0.19077, 0.15456)
    pub male: NavyCoefficients,
    /// Female coefficients (1.29579, 0.35004, 0.22100)
    pub female: NavyCoefficients,
    /// Lower clamp: 4%
    pub min_pct: f64,
    /// Upper clamp: 40%
    pub max_pct: f64,
}

impl NavyBodyFatConfig {
    /// Coefficients for a gender
    #[must_use]
    pub const fn coefficients(&self, gender: Gender) -> NavyCoefficients {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

impl Default for NavyBodyFatConfig {
    fn default() -> Self {
        Self {
            numerator: 495.0,
            offset: 450.0,
            male: NavyCoefficients {
                c0: 1.0324,
                c1: 0.19077,
                c2: 0.15456,
            },
            female: NavyCoefficients {
                c0: 1.29579,
                c1: 0.35004,
                c2: 0.22100,
            },
            min_pct: 4.0,
            max_pct: 40.0,
        }
    }
}

/// Target body-fat percentage by gender and weight direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetBodyFatConfig {
    /// Male, target below current: 15
    pub male_losing: f64,
    /// Male, target at or above current: 20
    pub male_gaining: f64,
    /// Female, target below current: 22
    pub female_losing: f64,
    /// Female, target at or above current: 28
    pub female_gaining: f64,
}

impl TargetBodyFatConfig {
    /// Look up the policy target
    #[must_use]
    pub const fn target_for(&self, gender: Gender, losing: bool) -> f64 {
        match (gender, losing) {
            (Gender::Male, true) => self.male_losing,
            (Gender::Male, false) => self.male_gaining,
            (Gender::Female, true) => self.female_losing,
            (Gender::Female, false) => self.female_gaining,
        }
    }
}

impl Default for TargetBodyFatConfig {
    fn default() -> Self {
        Self {
            male_losing: 15.0,
            male_gaining: 20.0,
            female_losing: 22.0,
            female_gaining: 28.0,
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity multipliers keyed by questionnaire fitness level
///
/// `athletic` has its own multiplier here even though training templates stop
/// at `advanced`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Beginner: 1.2
    pub beginner: f64,
    /// Intermediate: 1.375
    pub intermediate: f64,
    /// Advanced: 1.55
    pub advanced: f64,
    /// Athletic: 1.725
    pub athletic: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for a fitness level
    #[must_use]
    pub const fn factor_for(&self, level: FitnessLevel) -> f64 {
        match level {
            FitnessLevel::Beginner => self.beginner,
            FitnessLevel::Intermediate => self.intermediate,
            FitnessLevel::Advanced => self.advanced,
            FitnessLevel::Athletic => self.athletic,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            beginner: 1.2,
            intermediate: 1.375,
            advanced: 1.55,
            athletic: 1.725,
        }
    }
}

/// Calorie adjustment, calorie floor and hydration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyTargetConfig {
    /// Subtracted from TDEE when target < current: 500
    pub deficit_kcal: f64,
    /// Added to TDEE when target > current: 300
    pub surplus_kcal: f64,
    /// Minimum recommended calories: 1200
    pub calorie_floor: u32,
    /// Water per kilogram of body weight (ml): 30
    pub water_ml_per_kg: f64,
}

impl Default for EnergyTargetConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: 500.0,
            surplus_kcal: 300.0,
            calorie_floor: 1200,
            water_ml_per_kg: 30.0,
        }
    }
}

/// Macro split presets
///
/// Goal presets are checked in the fixed order build-muscle, lose-weight,
/// increase-endurance. Diet rules are applied afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroPresetsConfig {
    /// Default split: 30/40/30
    pub baseline: MacroPercentages,
    /// `build-muscle`: 35/45/20
    pub build_muscle: MacroPercentages,
    /// `lose-weight`: 40/30/30
    pub lose_weight: MacroPercentages,
    /// `increase-endurance`: 25/55/20
    pub increase_endurance: MacroPercentages,
    /// Keto override: 30/5/65
    pub keto: MacroPercentages,
    /// Percentage points moved from protein to carbs for plant-based diets: 5
    pub plant_based_shift: u8,
    /// Protein never drops below this for plant-based diets: 25
    pub plant_based_protein_floor: u8,
    /// Carbs never rise above this for plant-based diets: 60
    pub plant_based_carb_cap: u8,
}

impl Default for MacroPresetsConfig {
    fn default() -> Self {
        Self {
            baseline: MacroPercentages::new(30, 40, 30),
            build_muscle: MacroPercentages::new(35, 45, 20),
            lose_weight: MacroPercentages::new(40, 30, 30),
            increase_endurance: MacroPercentages::new(25, 55, 20),
            keto: MacroPercentages::new(30, 5, 65),
            plant_based_shift: 5,
            plant_based_protein_floor: 25,
            plant_based_carb_cap: 60,
        }
    }
}
