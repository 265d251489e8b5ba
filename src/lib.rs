// ABOUTME: Main library entry point for the fitplan quiz-to-plan engine
// ABOUTME: Wires configuration, logging, profile storage and the plan orchestrator together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Engine
//!
//! Turns a fitness questionnaire into a personalized plan: body composition
//! estimate, calorie and macro targets, a daily meal plan, a weekly training
//! plan and ranked supplement recommendations.
//!
//! ## Architecture
//!
//! - **`fitplan_core`**: questionnaire and plan models, error types
//! - **`fitplan_intelligence`**: the pure derivation algorithms and their tuning
//! - **Orchestrator**: runs the algorithms and hands the result to a profile store
//! - **Profile store**: pluggable persistence for quiz answers and plans
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_engine::config::EngineConfig;
//! use fitplan_engine::orchestrator::PlanOrchestrator;
//! use fitplan_engine::profile_store::InMemoryProfileStore;
//! use fitplan_engine::models::QuestionnaireResponse;
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = EngineConfig::from_env()?;
//!     let catalog = config.supplement_catalog()?;
//!     let orchestrator = PlanOrchestrator::new(
//!         config.engine,
//!         catalog,
//!         Arc::new(InMemoryProfileStore::new()),
//!     );
//!
//!     let quiz: QuestionnaireResponse = serde_json::from_str(r#"{"age": 30}"#)?;
//!     let plan = orchestrator.derive(Some(&quiz))?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

/// Service configuration loaded from the environment
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Structured logging setup and plan-specific log helpers
pub mod logging;

/// Plan derivation and persistence sequencing
pub mod orchestrator;

/// Persistence of quiz answers and derived plans
pub mod profile_store;

/// Questionnaire and plan data models
pub use fitplan_core::models;

/// Shared identifiers for goals, need tags and fields
pub use fitplan_core::constants;

/// Derivation algorithms, usable without the orchestrator
pub use fitplan_intelligence as intelligence;
