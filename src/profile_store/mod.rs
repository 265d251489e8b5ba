// ABOUTME: Profile store abstraction for persisting questionnaire answers and derived plans
// ABOUTME: Pluggable backends (in-memory, JSON files) behind an async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use file::FileProfileStore;
pub use memory::InMemoryProfileStore;

use chrono::{DateTime, Utc};
use fitplan_core::errors::AppResult;
use fitplan_core::models::{PlanBundle, QuestionnaireResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's stored quiz answers and latest plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Owner
    pub user_id: Uuid,
    /// Questionnaire the plan was derived from
    pub quiz_data: QuestionnaireResponse,
    /// Derived plan
    pub plan: PlanBundle,
    /// Time of the last successful save
    pub updated_at: DateTime<Utc>,
}

impl StoredProfile {
    /// Snapshot a quiz and plan for saving
    #[must_use]
    pub fn new(user_id: Uuid, quiz_data: QuestionnaireResponse, mut plan: PlanBundle) -> Self {
        // Section errors describe one derivation run, not the stored plan
        plan.section_errors.clear();
        Self {
            user_id,
            quiz_data,
            plan,
            updated_at: Utc::now(),
        }
    }
}

/// Profile store trait for pluggable persistence backends
///
/// Saves replace the whole record: a failed save leaves the previous record
/// untouched and never stores a partial plan.
///
/// # Examples
///
/// ```rust,no_run
/// use fitplan_engine::profile_store::{InMemoryProfileStore, ProfileStore};
/// use fitplan_core::models::{PlanBundle, QuestionnaireResponse};
/// use uuid::Uuid;
/// # async fn example() -> fitplan_core::errors::AppResult<()> {
/// let store = InMemoryProfileStore::new();
/// let user_id = Uuid::new_v4();
///
/// store
///     .save_plan(user_id, &QuestionnaireResponse::default(), &PlanBundle::default())
///     .await?;
///
/// if let Some(profile) = store.load_profile(user_id).await? {
///     println!("Plan saved at {}", profile.updated_at);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a user's stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the record is corrupt
    async fn load_profile(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>>;

    /// Store the quiz answers and plan for a user, replacing any previous record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written
    async fn save_plan(
        &self,
        user_id: Uuid,
        quiz: &QuestionnaireResponse,
        plan: &PlanBundle,
    ) -> AppResult<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}
