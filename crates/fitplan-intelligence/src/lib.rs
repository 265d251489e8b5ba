// ABOUTME: Pure quiz-to-plan derivation engine for the fitplan platform
// ABOUTME: Need tags, body composition, meal, training and supplement planning over static catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! Every function in this crate is synchronous and side-effect free apart
//! from `tracing` output. Configuration and catalogs are passed in by the
//! caller; nothing is read from process-wide state, so identical inputs
//! always produce identical plans.

/// Body composition estimator
pub mod body_composition;
/// Static meal, workout and supplement catalogs
pub mod catalog;
/// Typed engine configuration
pub mod config;
/// Meal plan synthesizer
pub mod meal_plan;
/// Need-tag deriver
pub mod need_tags;
/// Supplement recommender
pub mod supplements;
/// Training plan synthesizer
pub mod training_plan;

pub use body_composition::{estimate_body_composition, BodyMetrics};
pub use catalog::SupplementCatalog;
pub use config::{ConfigError, PlanEngineConfig};
pub use meal_plan::synthesize_meal_plan;
pub use need_tags::derive_need_tags;
pub use supplements::recommend_supplements;
pub use training_plan::synthesize_training_plan;
