// ABOUTME: Meal plan synthesis: calorie allocation across meal slots and allergy-filtered options
// ABOUTME: Requires a body composition estimate; without one the plan is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Plan Synthesizer
//!
//! Slots are added in a fixed order as the meal count grows. The allergy
//! filter is a plain substring match on option names (see
//! [`ALLERGY_KEYWORDS`]); it exists to keep obviously unsuitable dishes off
//! the menu and is not an allergen database.

use crate::catalog::meals::{menu_for, FoodOption, ALLERGY_KEYWORDS};
use crate::config::MealPlanConfig;
use fitplan_core::models::{
    BodyCompositionEstimate, MealOption, MealPlan, MealSlot, QuestionnaireResponse,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Build the daily meal plan skeleton
///
/// Returns `None` when no body composition estimate is available.
#[must_use]
pub fn synthesize_meal_plan(
    estimate: Option<&BodyCompositionEstimate>,
    quiz: &QuestionnaireResponse,
    config: &MealPlanConfig,
) -> Option<MealPlan> {
    let Some(estimate) = estimate else {
        debug!("No body composition estimate, meal plan unavailable");
        return None;
    };

    let diet = quiz.diet();
    let menu = menu_for(diet);
    let meal_count = config.meal_count(quiz.meal_frequency);
    let keywords = allergen_keywords(&quiz.food_allergies);
    let calories = estimate.recommended_calories;

    let meal_slots: Vec<MealSlot> = config
        .slots
        .iter()
        .filter(|rule| meal_count >= rule.min_meal_count)
        .map(|rule| MealSlot {
            name: rule.name.clone(),
            calories: (f64::from(calories) * rule.proportion).round() as u32,
            options: safe_options(
                menu.options(rule.category),
                &keywords,
                config.options_per_slot,
            ),
        })
        .collect();

    debug!(
        diet = diet.as_str(),
        meal_count,
        slots = meal_slots.len(),
        allergen_keywords = keywords.len(),
        "Synthesized meal plan"
    );

    Some(MealPlan {
        diet_type: diet,
        calories_per_day: calories,
        macros: estimate.macro_split,
        meal_slots,
    })
}

/// Name fragments excluded for the user's allergies
///
/// Allergy labels are matched case-insensitively; labels without a keyword
/// rule are ignored.
#[must_use]
pub fn allergen_keywords(allergies: &BTreeSet<String>) -> Vec<&'static str> {
    let active: BTreeSet<String> = allergies
        .iter()
        .map(|allergy| allergy.trim().to_lowercase())
        .collect();

    ALLERGY_KEYWORDS
        .iter()
        .filter(|(label, _)| active.contains(*label))
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .collect()
}

/// First `limit` options whose names contain none of `keywords`
#[must_use]
pub fn safe_options(options: &[FoodOption], keywords: &[&str], limit: usize) -> Vec<MealOption> {
    options
        .iter()
        .filter(|option| {
            let name = option.name.to_lowercase();
            !keywords.iter().any(|keyword| name.contains(keyword))
        })
        .take(limit)
        .map(FoodOption::to_meal_option)
        .collect()
}
