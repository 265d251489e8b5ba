// ABOUTME: Data models for questionnaire input and every derived plan section
// ABOUTME: Re-exports questionnaire, body composition, meal, training, supplement and bundle types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body composition estimate and macro split
pub mod body_composition;
/// Aggregate plan bundle
pub mod bundle;
/// Meal plan skeleton
pub mod meal_plan;
/// Quiz answers and facet enums
pub mod questionnaire;
/// Supplement catalog entries and recommendations
pub mod supplement;
/// Training plan skeleton
pub mod training_plan;

pub use body_composition::{
    BmiCategory, BodyCompositionEstimate, MacroPercentages, MacroSplit, MacroTarget,
};
pub use bundle::PlanBundle;
pub use meal_plan::{MealOption, MealPlan, MealSlot};
pub use questionnaire::{
    required, required_number, DietaryPreference, EnergyLevel, EquipmentAccess, FitnessLevel,
    FocusLevel, Gender, ImmunityStrength, MealFrequency, NumericInput, QuestionnaireResponse,
    RecoveryRate, SleepQuality, StressLevel, WorkoutFrequency,
};
pub use supplement::{SupplementCatalogEntry, SupplementRecommendation};
pub use training_plan::{GoalType, TrainingLevel, TrainingPlan, Workout};
