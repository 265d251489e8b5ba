// ABOUTME: Core types and constants for the fitplan quiz-to-plan engine
// ABOUTME: Foundation crate with error handling, questionnaire and plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types for the fitplan engine. This crate
//! changes infrequently, so the algorithm crate and the service layer compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanError`
//! - **models**: Questionnaire input and every derived plan section
//! - **constants**: Goal ids, need tags and field names

/// Unified error handling system with standard error codes
pub mod errors;

/// Questionnaire and plan data models
pub mod models;

/// Shared identifiers
pub mod constants;
