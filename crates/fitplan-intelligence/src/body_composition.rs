// ABOUTME: Body composition estimation: BMI, Navy body-fat, BMR, TDEE, calorie and macro targets
// ABOUTME: Pure functions driven by BodyCompositionConfig; validation happens once at the input boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Estimator
//!
//! Turns the anthropometric part of a questionnaire into body-composition
//! metrics and daily energy targets.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Hodgdon, J.A., & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy men
//!   and women from body circumferences and height. Naval Health Research Center, Report 84-11.
//!
//! # Known approximation
//!
//! The female Navy equation normally includes hip circumference. The quiz
//! never asks for it, so the female coefficients are applied to waist and
//! height only. Results for women are therefore rougher than the published
//! method.

use crate::config::{
    BmiThresholds, BmrConfig, BodyCompositionConfig, EnergyTargetConfig, MacroPresetsConfig,
    NavyBodyFatConfig,
};
use fitplan_core::constants::{fields, goals};
use fitplan_core::errors::PlanError;
use fitplan_core::models::{
    required, required_number, BmiCategory, BodyCompositionEstimate, DietaryPreference,
    FitnessLevel, Gender, MacroPercentages, MacroSplit, MacroTarget, NumericInput,
    QuestionnaireResponse,
};
use tracing::debug;

/// Energy density of protein and carbohydrate (kcal/g)
const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;
/// Energy density of fat (kcal/g)
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Validated numeric inputs for the estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    /// Age in whole years
    pub age: u32,
    /// Biological gender
    pub gender: Gender,
    /// Height (cm)
    pub height_cm: f64,
    /// Current weight (kg)
    pub current_weight_kg: f64,
    /// Goal weight (kg)
    pub target_weight_kg: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Fitness level
    pub fitness_level: FitnessLevel,
}

impl BodyMetrics {
    /// Extract and validate the estimator's inputs
    ///
    /// # Errors
    ///
    /// Returns `PlanError::MissingField` or `PlanError::Validation` naming the
    /// first missing, unparseable or out-of-domain field.
    pub fn from_questionnaire(quiz: &QuestionnaireResponse) -> Result<Self, PlanError> {
        let age = required_number(fields::AGE, quiz.age.as_ref())?;
        if age < 0.0 || age.fract().abs() > f64::EPSILON {
            return Err(PlanError::validation(
                fields::AGE,
                "age must be a whole, non-negative number of years",
            ));
        }

        Ok(Self {
            age: age as u32,
            gender: required(fields::GENDER, quiz.gender)?,
            height_cm: positive(fields::HEIGHT_CM, quiz.height_cm.as_ref())?,
            current_weight_kg: positive(
                fields::CURRENT_WEIGHT_KG,
                quiz.current_weight_kg.as_ref(),
            )?,
            target_weight_kg: positive(fields::TARGET_WEIGHT_KG, quiz.target_weight_kg.as_ref())?,
            waist_cm: positive(fields::WAIST_CM, quiz.waist_cm.as_ref())?,
            fitness_level: required(fields::FITNESS_LEVEL, quiz.fitness_level)?,
        })
    }

    /// Whether the goal weight is below the current weight
    #[must_use]
    pub fn is_losing(&self) -> bool {
        self.target_weight_kg < self.current_weight_kg
    }
}

fn positive(field: &str, raw: Option<&NumericInput>) -> Result<f64, PlanError> {
    let value = required_number(field, raw)?;
    if value <= 0.0 {
        return Err(PlanError::validation(field, "value must be greater than zero"));
    }
    Ok(value)
}

/// Estimate body composition from a questionnaire
///
/// An absent questionnaire is not an error: the estimate is simply unavailable
/// and the caller hides the section.
///
/// # Errors
///
/// Returns `PlanError::MissingField` or `PlanError::Validation` if a required
/// field is missing or unparseable.
pub fn estimate_body_composition(
    quiz: Option<&QuestionnaireResponse>,
    config: &BodyCompositionConfig,
) -> Result<Option<BodyCompositionEstimate>, PlanError> {
    let Some(quiz) = quiz else {
        debug!("No questionnaire, body composition unavailable");
        return Ok(None);
    };
    let metrics = BodyMetrics::from_questionnaire(quiz)?;
    Ok(Some(estimate_from_metrics(
        &metrics,
        &quiz.fitness_goals,
        quiz.diet(),
        config,
    )))
}

/// Estimate body composition from validated metrics
#[must_use]
pub fn estimate_from_metrics(
    metrics: &BodyMetrics,
    fitness_goals: &[String],
    diet: DietaryPreference,
    config: &BodyCompositionConfig,
) -> BodyCompositionEstimate {
    let weight = metrics.current_weight_kg;
    let bmi = calculate_bmi(weight, metrics.height_cm);

    let body_fat_pct = navy_body_fat_pct(
        metrics.gender,
        metrics.waist_cm,
        metrics.height_cm,
        &config.navy,
    );
    let fat_mass_kg = body_fat_pct / 100.0 * weight;

    let losing = metrics.is_losing();
    let target_body_fat_pct = config.target_body_fat.target_for(metrics.gender, losing);
    let target_fat_mass_kg = target_body_fat_pct / 100.0 * metrics.target_weight_kg;

    let bmr = calculate_mifflin_st_jeor(
        weight,
        metrics.height_cm,
        metrics.age,
        metrics.gender,
        &config.bmr,
    )
    .round();
    let tdee = calculate_tdee(
        bmr,
        config.activity_factors.factor_for(metrics.fitness_level),
    );
    let recommended_calories = recommended_calories(
        tdee,
        metrics.current_weight_kg,
        metrics.target_weight_kg,
        &config.energy,
    );

    let percentages = macro_percentages(fitness_goals, diet, &config.macros);
    let macro_split = calculate_macro_split(recommended_calories, percentages);

    debug!(
        bmi,
        body_fat_pct,
        bmr,
        tdee,
        recommended_calories,
        protein_pct = percentages.protein,
        carbs_pct = percentages.carbs,
        fat_pct = percentages.fat,
        "Estimated body composition"
    );

    BodyCompositionEstimate {
        bmi: round_to(bmi, 2),
        bmi_category: bmi_category(bmi, &config.bmi),
        body_fat_pct: round_to(body_fat_pct, 1),
        lean_mass_kg: round_to(weight - fat_mass_kg, 1),
        fat_mass_kg: round_to(fat_mass_kg, 1),
        target_body_fat_pct,
        target_lean_mass_kg: round_to(metrics.target_weight_kg - target_fat_mass_kg, 1),
        target_fat_mass_kg: round_to(target_fat_mass_kg, 1),
        bmr,
        tdee,
        recommended_calories,
        water_intake_l: water_intake_l(weight, &config.energy),
        macro_split,
    }
}

/// Body mass index (kg/m²)
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// BMI category; thresholds are lower-inclusive
#[must_use]
pub fn bmi_category(bmi: f64, thresholds: &BmiThresholds) -> BmiCategory {
    if bmi < thresholds.underweight_below {
        BmiCategory::Underweight
    } else if bmi < thresholds.normal_below {
        BmiCategory::Normal
    } else if bmi < thresholds.overweight_below {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Body-fat percentage by the Navy circumference method, clamped
///
/// `495 / (c0 - c1*log10(waist) + c2*log10(height)) - 450`
///
/// Any waist/height combination yields a value inside
/// `[config.min_pct, config.max_pct]`; a vanishing or negative denominator
/// saturates at one of the bounds.
#[must_use]
pub fn navy_body_fat_pct(
    gender: Gender,
    waist_cm: f64,
    height_cm: f64,
    config: &NavyBodyFatConfig,
) -> f64 {
    let c = config.coefficients(gender);
    let density = c.c2.mul_add(height_cm.log10(), c.c1.mul_add(-waist_cm.log10(), c.c0));
    let raw = config.numerator / density - config.offset;
    if raw.is_nan() {
        return config.max_pct;
    }
    raw.clamp(config.min_pct, config.max_pct)
}

/// Basal metabolic rate using Mifflin-St Jeor
///
/// Men: `10*w + 6.25*h - 5*a + 5`; women: `10*w + 6.25*h - 5*a - 161`
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Total daily energy expenditure, rounded to whole kcal
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    (bmr * activity_factor).round()
}

/// Daily calorie target: deficit when losing, surplus when gaining, never below the floor
#[must_use]
pub fn recommended_calories(
    tdee: f64,
    current_weight_kg: f64,
    target_weight_kg: f64,
    config: &EnergyTargetConfig,
) -> u32 {
    let adjustment = if target_weight_kg < current_weight_kg {
        -config.deficit_kcal
    } else if target_weight_kg > current_weight_kg {
        config.surplus_kcal
    } else {
        0.0
    };
    let calories = (tdee + adjustment).round().max(0.0) as u32;
    calories.max(config.calorie_floor)
}

/// Daily water target in liters, one decimal
#[must_use]
pub fn water_intake_l(weight_kg: f64, config: &EnergyTargetConfig) -> f64 {
    round_to(config.water_ml_per_kg * weight_kg / 1000.0, 1)
}

/// Macro percentages for a goal list and diet
///
/// Goal presets are checked in a fixed priority order, so the order in which
/// the user picked goals does not matter. Keto then replaces the split
/// outright; vegan and vegetarian diets move points from protein to carbs
/// within the configured floor and cap. The shift is symmetric so the total
/// stays at 100.
#[must_use]
pub fn macro_percentages(
    fitness_goals: &[String],
    diet: DietaryPreference,
    config: &MacroPresetsConfig,
) -> MacroPercentages {
    let has = |goal: &str| fitness_goals.iter().any(|g| g == goal);

    let preset = if has(goals::BUILD_MUSCLE) {
        config.build_muscle
    } else if has(goals::LOSE_WEIGHT) {
        config.lose_weight
    } else if has(goals::INCREASE_ENDURANCE) {
        config.increase_endurance
    } else {
        config.baseline
    };

    if diet == DietaryPreference::Keto {
        return config.keto;
    }

    if diet.is_plant_based() {
        let shift = config
            .plant_based_shift
            .min(preset.protein.saturating_sub(config.plant_based_protein_floor))
            .min(config.plant_based_carb_cap.saturating_sub(preset.carbs));
        return MacroPercentages::new(preset.protein - shift, preset.carbs + shift, preset.fat);
    }

    preset
}

/// Convert percentages of a calorie target into per-macro calories and grams
///
/// Each figure is rounded independently, so `grams * kcal_per_gram` can differ
/// from `calories` by a few kcal.
#[must_use]
pub fn calculate_macro_split(calories: u32, percentages: MacroPercentages) -> MacroSplit {
    let target = |pct: u8, kcal_per_gram: f64| {
        let kcal = f64::from(calories) * f64::from(pct) / 100.0;
        MacroTarget {
            percentage: pct,
            grams: (kcal / kcal_per_gram).round() as u32,
            calories: kcal.round() as u32,
        }
    };

    MacroSplit {
        protein: target(percentages.protein, KCAL_PER_GRAM_PROTEIN_CARBS),
        carbs: target(percentages.carbs, KCAL_PER_GRAM_PROTEIN_CARBS),
        fat: target(percentages.fat, KCAL_PER_GRAM_FAT),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
