// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, questionnaire fixtures and orchestrator builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitplan_engine`

use fitplan_engine::intelligence::{PlanEngineConfig, SupplementCatalog};
use fitplan_engine::models::{
    DietaryPreference, FitnessLevel, Gender, NumericInput, QuestionnaireResponse,
};
use fitplan_engine::orchestrator::PlanOrchestrator;
use fitplan_engine::profile_store::ProfileStore;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old intermediate male, 170 cm, 70 kg aiming for 65 kg, 85 cm waist
pub fn worked_scenario_quiz() -> QuestionnaireResponse {
    QuestionnaireResponse {
        age: Some(NumericInput::Number(30.0)),
        gender: Some(Gender::Male),
        height_cm: Some(NumericInput::Number(170.0)),
        current_weight_kg: Some(NumericInput::Number(70.0)),
        target_weight_kg: Some(NumericInput::Number(65.0)),
        waist_cm: Some(NumericInput::Number(85.0)),
        fitness_level: Some(FitnessLevel::Intermediate),
        ..QuestionnaireResponse::default()
    }
}

/// Worked scenario with a different diet
pub fn quiz_with_diet(diet: DietaryPreference) -> QuestionnaireResponse {
    QuestionnaireResponse {
        dietary_preference: Some(diet),
        ..worked_scenario_quiz()
    }
}

/// Worked scenario with the given goal ids
pub fn quiz_with_goals(goals: &[&str]) -> QuestionnaireResponse {
    QuestionnaireResponse {
        fitness_goals: goals.iter().map(|&g| g.to_owned()).collect(),
        ..worked_scenario_quiz()
    }
}

/// Orchestrator with default configuration and the built-in catalog
pub fn create_test_orchestrator(store: Arc<dyn ProfileStore>) -> PlanOrchestrator {
    init_test_logging();
    PlanOrchestrator::new(
        PlanEngineConfig::default(),
        SupplementCatalog::default(),
        store,
    )
}

/// Assert two floats agree to within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
