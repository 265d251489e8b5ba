// ABOUTME: Static lookup tables consumed by the plan synthesizers
// ABOUTME: Meal options, workout template matrix, substitution rules and supplement catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Diet-specific meal options and allergy keywords
pub mod meals;
/// Supplement catalog and rationale phrases
pub mod supplements;
/// Workout template matrix and equipment substitution rules
pub mod workouts;

pub use meals::{menu_for, DietMenu, FoodOption, MealCategory, ALLERGY_KEYWORDS};
pub use supplements::{phrase_for, SupplementCatalog, TAG_PHRASES};
pub use workouts::{
    template_for, training_type, SubstitutionRule, WorkoutTemplate, EQUIPMENT_KEYWORDS,
    FALLBACK_SUBSTITUTE, SUBSTITUTION_RULES,
};
