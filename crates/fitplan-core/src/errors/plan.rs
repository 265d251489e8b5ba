// ABOUTME: Domain errors raised while deriving or persisting a plan
// ABOUTME: Validation, unavailable-input and persistence failures with AppError conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Error Types
//!
//! - `PlanError::MissingField` - a required field was not answered
//! - `PlanError::Validation` - a field is present but unparseable or out of domain
//! - `PlanError::UnavailableInput` - no questionnaire data exists to derive from
//! - `PlanError::Persistence` - the profile store rejected a write
//!
//! Compute functions return `Option::None` for absent input instead of
//! `UnavailableInput`; that variant is reserved for callers that explicitly
//! asked for stored data.

use super::{AppError, ErrorCode};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors specific to plan derivation and persistence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A required field was not answered
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Questionnaire field name
        field: String,
    },
    /// A field is present but cannot be parsed or is out of domain
    #[error("Invalid field '{field}': {reason}")]
    Validation {
        /// Questionnaire field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
    /// There is no questionnaire data to derive the requested section from
    #[error("No questionnaire data available for {section}")]
    UnavailableInput {
        /// Plan section or resource that was requested
        section: String,
    },
    /// The profile store failed to persist a computed plan
    #[error("Failed to persist plan for user {user_id}: {reason}")]
    Persistence {
        /// Owner of the plan
        user_id: Uuid,
        /// Backend failure description
        reason: String,
    },
}

impl PlanError {
    /// Create a validation error for a field
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error for a required field that is absent
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an unavailable-input error
    #[must_use]
    pub fn unavailable(section: impl Into<String>) -> Self {
        Self::UnavailableInput {
            section: section.into(),
        }
    }

    /// Create a persistence error
    #[must_use]
    pub fn persistence(user_id: Uuid, reason: impl Into<String>) -> Self {
        Self::Persistence {
            user_id,
            reason: reason.into(),
        }
    }

    /// Whether the questionnaire itself is at fault (missing or invalid field)
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::Validation { .. })
    }

    /// Name of the offending field, for input errors
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::Validation { field, .. } => Some(field),
            Self::UnavailableInput { .. } | Self::Persistence { .. } => None,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(error: PlanError) -> Self {
        let message = error.to_string();
        match error {
            PlanError::MissingField { field } => {
                Self::new(ErrorCode::MissingRequiredField, message)
                    .with_details(json!({ "field": field }))
            }
            PlanError::Validation { field, reason } => {
                Self::new(ErrorCode::InvalidInput, message).with_details(json!({
                    "field": field,
                    "reason": reason,
                }))
            }
            PlanError::UnavailableInput { section } => {
                Self::new(ErrorCode::ResourceUnavailable, message).with_resource_id(section)
            }
            PlanError::Persistence { user_id, .. } => {
                Self::new(ErrorCode::StorageError, message).with_user_id(user_id)
            }
        }
    }
}
