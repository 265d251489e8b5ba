// ABOUTME: Body composition estimate and macro split models
// ABOUTME: BMI category, body-fat, lean/fat mass, BMR, TDEE, calorie and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        f.write_str(label)
    }
}

/// Protein/carbs/fat percentages of daily calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroPercentages {
    /// Protein share (0-100)
    pub protein: u8,
    /// Carbohydrate share (0-100)
    pub carbs: u8,
    /// Fat share (0-100)
    pub fat: u8,
}

impl MacroPercentages {
    /// Create a new percentage triple
    #[must_use]
    pub const fn new(protein: u8, carbs: u8, fat: u8) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Sum of the three shares
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.protein as u16 + self.carbs as u16 + self.fat as u16
    }
}

/// One macronutrient's daily target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTarget {
    /// Share of daily calories (0-100)
    pub percentage: u8,
    /// Grams per day
    pub grams: u32,
    /// Calories per day
    pub calories: u32,
}

/// Daily macro targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein (4 kcal/g)
    pub protein: MacroTarget,
    /// Carbohydrate (4 kcal/g)
    pub carbs: MacroTarget,
    /// Fat (9 kcal/g)
    pub fat: MacroTarget,
}

impl MacroSplit {
    /// Percentages as a triple
    #[must_use]
    pub const fn percentages(&self) -> MacroPercentages {
        MacroPercentages::new(
            self.protein.percentage,
            self.carbs.percentage,
            self.fat.percentage,
        )
    }
}

/// Estimated body composition and energy targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyCompositionEstimate {
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Estimated body-fat percentage, clamped to [4, 40]
    pub body_fat_pct: f64,
    /// Lean mass in kilograms
    pub lean_mass_kg: f64,
    /// Fat mass in kilograms
    pub fat_mass_kg: f64,
    /// Policy target body-fat percentage
    pub target_body_fat_pct: f64,
    /// Lean mass at target weight and target body-fat
    pub target_lean_mass_kg: f64,
    /// Fat mass at target weight and target body-fat
    pub target_fat_mass_kg: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target, never below the configured floor
    pub recommended_calories: u32,
    /// Daily water target in liters
    pub water_intake_l: f64,
    /// Daily macro targets
    pub macro_split: MacroSplit,
}
