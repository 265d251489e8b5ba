// ABOUTME: Environment-based service configuration for the plan engine
// ABOUTME: Profile store location, supplement catalog override, engine tuning and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::LoggingConfig;
use anyhow::{Context, Result};
use fitplan_intelligence::{ConfigError, PlanEngineConfig, SupplementCatalog};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default root directory of the file-backed profile store
pub const DEFAULT_STORE_DIR: &str = "./data/profiles";

/// Service configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Root directory for stored profiles (`FITPLAN_STORE_DIR`)
    pub store_dir: PathBuf,
    /// JSON catalog replacing the built-in supplements (`FITPLAN_SUPPLEMENT_CATALOG`)
    pub supplement_catalog_path: Option<PathBuf>,
    /// Engine tuning
    pub engine: PlanEngineConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an engine override is malformed or fails validation
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_dir: PathBuf::from(env_var_or("FITPLAN_STORE_DIR", DEFAULT_STORE_DIR)),
            supplement_catalog_path: env::var("FITPLAN_SUPPLEMENT_CATALOG")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            engine: PlanEngineConfig::load().context("Invalid plan engine configuration")?,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Log the effective settings; call once the subscriber is installed
    pub fn log_summary(&self) {
        info!(
            store_dir = %self.store_dir.display(),
            custom_catalog = self.supplement_catalog_path.is_some(),
            calorie_floor = self.engine.body_composition.energy.calorie_floor,
            max_supplements = self.engine.supplements.max_recommendations,
            "Configuration loaded"
        );
    }

    /// Supplement catalog to rank against: the configured file, or the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` if the configured file cannot be loaded
    pub fn supplement_catalog(&self) -> Result<SupplementCatalog, ConfigError> {
        self.supplement_catalog_path
            .as_deref()
            .map_or_else(|| Ok(SupplementCatalog::default()), SupplementCatalog::from_json_file)
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
