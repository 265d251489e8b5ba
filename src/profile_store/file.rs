// ABOUTME: File-backed profile store writing one JSON document per user
// ABOUTME: Writes go to a temporary file that is renamed into place so saves are all-or-nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileStore, StoredProfile};
use fitplan_core::errors::{AppError, AppResult, PlanError};
use fitplan_core::models::{PlanBundle, QuestionnaireResponse};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Profile store keeping `<root>/<user_id>.json` files
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    root: PathBuf,
}

impl FileProfileStore {
    /// Create a store rooted at `root`; the directory is created on first save
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a user's profile document
    #[must_use]
    pub fn profile_path(&self, user_id: Uuid) -> PathBuf {
        self.root.join(format!("{user_id}.json"))
    }

    async fn write_atomically(&self, user_id: Uuid, contents: &[u8]) -> Result<(), PlanError> {
        let persistence = |e: std::io::Error| PlanError::persistence(user_id, e.to_string());

        fs::create_dir_all(&self.root).await.map_err(persistence)?;

        let target = self.profile_path(user_id);
        let temp = self
            .root
            .join(format!(".{user_id}.{}.tmp", Uuid::new_v4().simple()));

        if let Err(e) = fs::write(&temp, contents).await {
            // Best effort: the temp file may not exist
            let _ = fs::remove_file(&temp).await;
            return Err(persistence(e));
        }
        if let Err(e) = fs::rename(&temp, &target).await {
            let _ = fs::remove_file(&temp).await;
            return Err(persistence(e));
        }

        debug!(path = %target.display(), "Profile written");
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProfileStore for FileProfileStore {
    async fn load_profile(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>> {
        let path = self.profile_path(user_id);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::storage(format!("cannot read {}", path.display()))
                    .with_user_id(user_id)
                    .with_source(e))
            }
        };

        let profile = serde_json::from_str(&contents).map_err(|e| {
            AppError::from(e)
                .with_user_id(user_id)
                .with_resource_id(path.display().to_string())
        })?;
        Ok(Some(profile))
    }

    async fn save_plan(
        &self,
        user_id: Uuid,
        quiz: &QuestionnaireResponse,
        plan: &PlanBundle,
    ) -> AppResult<()> {
        let profile = StoredProfile::new(user_id, quiz.clone(), plan.clone());
        let contents = serde_json::to_vec_pretty(&profile)?;
        self.write_atomically(user_id, &contents).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
