// ABOUTME: Meal plan skeleton models
// ABOUTME: Meal slots with calorie allocation and selected food options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DietaryPreference, MacroSplit};
use serde::{Deserialize, Serialize};

/// A food option offered for a meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealOption {
    /// Display name
    pub name: String,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

/// One meal of the day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSlot {
    /// Slot name such as `"Breakfast"`
    pub name: String,
    /// Calories allocated to this slot
    pub calories: u32,
    /// Up to three options
    pub options: Vec<MealOption>,
}

/// Daily meal plan skeleton
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    /// Diet the options were drawn from
    pub diet_type: DietaryPreference,
    /// Daily calorie target
    pub calories_per_day: u32,
    /// Daily macro targets, identical to the body composition estimate
    pub macros: MacroSplit,
    /// Ordered meal slots
    pub meal_slots: Vec<MealSlot>,
}
