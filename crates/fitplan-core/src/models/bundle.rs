// ABOUTME: Aggregate plan written to the profile store
// ABOUTME: Serialises as {bodyComposition, mealPlan, trainingPlan, supplementRecommendations}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BodyCompositionEstimate, MealPlan, SupplementRecommendation, TrainingPlan};
use crate::errors::PlanError;
use serde::{Deserialize, Serialize};

/// Everything derived from one questionnaire
///
/// Sections that could not be derived are omitted from the JSON so the UI
/// hides them rather than rendering an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanBundle {
    /// Body composition and energy targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_composition: Option<BodyCompositionEstimate>,
    /// Meal plan skeleton
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan: Option<MealPlan>,
    /// Training plan skeleton
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_plan: Option<TrainingPlan>,
    /// Ranked supplement matches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplement_recommendations: Vec<SupplementRecommendation>,
    /// Why sections are missing; reported to the caller, never stored
    #[serde(skip)]
    pub section_errors: Vec<PlanError>,
}

impl PlanBundle {
    /// Whether no section could be derived
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body_composition.is_none()
            && self.meal_plan.is_none()
            && self.training_plan.is_none()
            && self.supplement_recommendations.is_empty()
    }

    /// Whether every section whose inputs were present was derived
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.section_errors.is_empty()
    }
}
