// ABOUTME: Shared identifiers for goals, need tags and questionnaire field names
// ABOUTME: Keeps string literals used across the engine, tests and catalogs in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Goal ids emitted by the quiz UI
pub mod goals {
    /// Fat loss goal
    pub const LOSE_WEIGHT: &str = "lose-weight";
    /// Muscle gain goal
    pub const BUILD_MUSCLE: &str = "build-muscle";
    /// Endurance goal
    pub const INCREASE_ENDURANCE: &str = "increase-endurance";
    /// Mobility goal
    pub const IMPROVE_FLEXIBILITY: &str = "improve-flexibility";
}

/// Need tags derived from lifestyle facets
pub mod tags {
    /// Sleep quality is poor or fair
    pub const POOR_SLEEP: &str = "poor-sleep";
    /// Stress is moderate or high
    pub const HIGH_STRESS: &str = "high-stress";
    /// Energy is low
    pub const LOW_ENERGY: &str = "low-energy";
    /// Focus is poor
    pub const BRAIN_FUNCTION: &str = "brain-function";
    /// Immunity is weak or average
    pub const WEAK_IMMUNITY: &str = "weak-immunity";
    /// Recovery is slow
    pub const SLOW_RECOVERY: &str = "slow-recovery";
    /// Vegetarian diet
    pub const VEGETARIAN: &str = "vegetarian";
    /// Vegan diet
    pub const VEGAN: &str = "vegan";
    /// Fallback when nothing else applies
    pub const OVERALL_HEALTH: &str = "overall-health";
}

/// Questionnaire field names used in validation errors
pub mod fields {
    /// Age
    pub const AGE: &str = "age";
    /// Gender
    pub const GENDER: &str = "gender";
    /// Height
    pub const HEIGHT_CM: &str = "height_cm";
    /// Current weight
    pub const CURRENT_WEIGHT_KG: &str = "current_weight_kg";
    /// Target weight
    pub const TARGET_WEIGHT_KG: &str = "target_weight_kg";
    /// Waist circumference
    pub const WAIST_CM: &str = "waist_cm";
    /// Fitness level
    pub const FITNESS_LEVEL: &str = "fitness_level";
}
