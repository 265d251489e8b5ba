// ABOUTME: Orchestrates plan derivation and persistence for a questionnaire
// ABOUTME: Runs independent engine branches in parallel and keeps computed plans when saving fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Orchestrator
//!
//! The only ordering constraint is estimator before meal plan. Training and
//! supplement planning run on the rayon pool alongside that chain.

use crate::logging::PlanLogger;
use crate::profile_store::ProfileStore;
use fitplan_core::errors::{AppError, AppResult, PlanError};
use fitplan_core::models::{BodyCompositionEstimate, MealPlan, PlanBundle, QuestionnaireResponse};
use fitplan_intelligence::{
    derive_need_tags, estimate_body_composition, recommend_supplements, synthesize_meal_plan,
    synthesize_training_plan, PlanEngineConfig, SupplementCatalog,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Outcome of deriving and saving a plan
///
/// The bundle is always present; a failed save is reported alongside it so
/// the caller can show the plan and retry the save.
#[derive(Debug)]
pub struct GeneratedPlan {
    /// Derived plan
    pub bundle: PlanBundle,
    /// Why the plan could not be saved, if it was not
    pub persistence_error: Option<AppError>,
}

impl GeneratedPlan {
    /// Whether the plan reached the profile store
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persistence_error.is_none()
    }
}

/// Sequences the engine components and the profile store
#[derive(Clone)]
pub struct PlanOrchestrator {
    config: Arc<PlanEngineConfig>,
    catalog: Arc<SupplementCatalog>,
    store: Arc<dyn ProfileStore>,
}

impl PlanOrchestrator {
    /// Create an orchestrator
    #[must_use]
    pub fn new(
        config: PlanEngineConfig,
        catalog: SupplementCatalog,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            store,
        }
    }

    /// Engine configuration in use
    #[must_use]
    pub fn config(&self) -> &PlanEngineConfig {
        &self.config
    }

    /// Derive every plan section from a questionnaire
    ///
    /// No questionnaire yields an empty bundle. A section whose required
    /// answers are missing or unparseable is left out and the reason is kept
    /// in [`PlanBundle::section_errors`]; the other sections are still derived.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures not caused by the questionnaire.
    pub fn derive(&self, quiz: Option<&QuestionnaireResponse>) -> AppResult<PlanBundle> {
        let Some(quiz) = quiz else {
            info!("No questionnaire supplied, returning empty plan");
            return Ok(PlanBundle::default());
        };

        let config = &*self.config;
        let catalog = &*self.catalog;

        let (nutrition, (training_plan, supplement_recommendations)) = rayon::join(
            || -> Result<(Option<BodyCompositionEstimate>, Option<MealPlan>), PlanError> {
                let estimate = estimate_body_composition(Some(quiz), &config.body_composition)?;
                let meal_plan = synthesize_meal_plan(estimate.as_ref(), quiz, &config.meal_plan);
                Ok((estimate, meal_plan))
            },
            || {
                rayon::join(
                    || synthesize_training_plan(quiz, &config.training_plan),
                    || {
                        let tags = derive_need_tags(quiz);
                        recommend_supplements(&tags, catalog, &config.supplements)
                    },
                )
            },
        );

        let mut section_errors = Vec::new();
        let (body_composition, meal_plan) =
            omit_on_input_error("body composition", nutrition, &mut section_errors)?
                .unwrap_or_default();
        let training_plan =
            omit_on_input_error("training plan", training_plan, &mut section_errors)?;

        Ok(PlanBundle {
            body_composition,
            meal_plan,
            training_plan,
            supplement_recommendations,
            section_errors,
        })
    }

    /// Derive a plan and save it with the questionnaire
    ///
    /// # Errors
    ///
    /// Returns an error only if derivation fails. Save failures are reported
    /// in [`GeneratedPlan::persistence_error`]. A partial plan is saved like a
    /// complete one.
    pub async fn generate_and_store(
        &self,
        user_id: Uuid,
        quiz: &QuestionnaireResponse,
    ) -> AppResult<GeneratedPlan> {
        let started = Instant::now();
        let bundle = self.derive(Some(quiz))?;
        PlanLogger::log_plan_derived(
            Some(user_id),
            section_count(&bundle),
            elapsed_ms(started),
        );

        let save_started = Instant::now();
        let persistence_error = match self.store.save_plan(user_id, quiz, &bundle).await {
            Ok(()) => {
                PlanLogger::log_store_operation(
                    self.store.backend_name(),
                    "save_plan",
                    user_id,
                    true,
                    elapsed_ms(save_started),
                );
                None
            }
            Err(e) => {
                PlanLogger::log_persistence_failure(user_id, &e.to_string());
                Some(
                    AppError::from(PlanError::persistence(user_id, e.message.clone()))
                        .with_source(e),
                )
            }
        };

        Ok(GeneratedPlan {
            bundle,
            persistence_error,
        })
    }

    /// Re-derive a user's plan from their stored questionnaire
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if no questionnaire is stored for the
    /// user, or any error from loading or deriving.
    pub async fn regenerate_for_user(&self, user_id: Uuid) -> AppResult<GeneratedPlan> {
        let profile = self
            .store
            .load_profile(user_id)
            .await?
            .ok_or_else(|| PlanError::unavailable(format!("user {user_id}")))?;
        self.generate_and_store(user_id, &profile.quiz_data).await
    }
}

/// Turn a questionnaire error into an omitted section; other errors propagate
fn omit_on_input_error<T>(
    section: &str,
    result: Result<T, PlanError>,
    section_errors: &mut Vec<PlanError>,
) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_input_error() => {
            warn!(
                plan.section = section,
                field = e.field().unwrap_or_default(),
                error = %e,
                "Plan section omitted"
            );
            section_errors.push(e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn section_count(bundle: &PlanBundle) -> usize {
    usize::from(bundle.body_composition.is_some())
        + usize::from(bundle.meal_plan.is_some())
        + usize::from(bundle.training_plan.is_some())
        + usize::from(!bundle.supplement_recommendations.is_empty())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
