// ABOUTME: Error types for the fitplan service layer
// ABOUTME: Re-exports the unified AppError system and plan domain errors from fitplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error types live in `fitplan_core::errors` so the algorithm crate can
//! produce them without depending on the service layer.

pub use fitplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails, PlanError,
};
