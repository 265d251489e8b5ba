// ABOUTME: In-memory profile store backed by a concurrent hash map
// ABOUTME: Used by tests and single-process deployments; contents are lost on exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileStore, StoredProfile};
use dashmap::DashMap;
use fitplan_core::errors::AppResult;
use fitplan_core::models::{PlanBundle, QuestionnaireResponse};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory profile store
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<DashMap<Uuid, StoredProfile>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_profile(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>> {
        Ok(self
            .profiles
            .get(&user_id)
            .map(|entry| entry.value().clone()))
    }

    async fn save_plan(
        &self,
        user_id: Uuid,
        quiz: &QuestionnaireResponse,
        plan: &PlanBundle,
    ) -> AppResult<()> {
        let profile = StoredProfile::new(user_id, quiz.clone(), plan.clone());
        self.profiles.insert(user_id, profile);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
