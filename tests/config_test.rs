// ABOUTME: Integration tests for engine and service configuration loading
// ABOUTME: Validates defaults, environment overrides, invalid values and catalog file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_engine::config::{ConfigError, EngineConfig, PlanEngineConfig, DEFAULT_STORE_DIR};
use fitplan_engine::intelligence::SupplementCatalog;
use serial_test::serial;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const ENGINE_VARS: &[&str] = &[
    "FITPLAN_CALORIE_FLOOR",
    "FITPLAN_DEFICIT_KCAL",
    "FITPLAN_SURPLUS_KCAL",
    "FITPLAN_WATER_ML_PER_KG",
    "FITPLAN_OPTIONS_PER_SLOT",
    "FITPLAN_MAX_SUPPLEMENTS",
    "FITPLAN_STORE_DIR",
    "FITPLAN_SUPPLEMENT_CATALOG",
];

fn clear_env() {
    for var in ENGINE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults and Validation
// ============================================================================

#[test]
fn test_default_engine_config_is_valid() {
    PlanEngineConfig::default().validate().unwrap();
}

#[test]
fn test_unsorted_bmi_thresholds_are_rejected() {
    let mut config = PlanEngineConfig::default();
    config.body_composition.bmi.normal_below = 17.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}

#[test]
fn test_macro_presets_must_sum_to_100() {
    let mut config = PlanEngineConfig::default();
    config.body_composition.macros.keto.fat = 60;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_zero_options_per_slot_is_rejected() {
    let mut config = PlanEngineConfig::default();
    config.meal_plan.options_per_slot = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_env();
    env::set_var("FITPLAN_CALORIE_FLOOR", "1500");
    env::set_var("FITPLAN_DEFICIT_KCAL", "400");
    env::set_var("FITPLAN_MAX_SUPPLEMENTS", "3");

    let config = PlanEngineConfig::load().unwrap();
    assert_eq!(config.body_composition.energy.calorie_floor, 1500);
    assert!((config.body_composition.energy.deficit_kcal - 400.0).abs() < f64::EPSILON);
    assert_eq!(config.supplements.max_recommendations, 3);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_env();
    env::set_var("FITPLAN_CALORIE_FLOOR", "lots");

    let error = PlanEngineConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains("FITPLAN_CALORIE_FLOOR"));

    clear_env();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_env();
    env::set_var("FITPLAN_MAX_SUPPLEMENTS", "0");

    assert!(matches!(
        PlanEngineConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_service_config_defaults() {
    clear_env();

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.store_dir, PathBuf::from(DEFAULT_STORE_DIR));
    assert!(config.supplement_catalog_path.is_none());
    assert_eq!(
        config.supplement_catalog().unwrap(),
        SupplementCatalog::default()
    );
}

#[test]
#[serial]
fn test_service_config_reads_store_dir_and_catalog() {
    clear_env();
    let mut catalog_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        catalog_file,
        r#"[{{"id": "creatine", "name": "Creatine", "url": "/supplements/creatine", "description": "", "tags": ["build-muscle"]}}]"#
    )
    .unwrap();

    env::set_var("FITPLAN_STORE_DIR", "/tmp/fitplan-profiles");
    env::set_var("FITPLAN_SUPPLEMENT_CATALOG", catalog_file.path());

    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.store_dir, PathBuf::from("/tmp/fitplan-profiles"));

    let catalog = config.supplement_catalog().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].id, "creatine");

    clear_env();
}

#[test]
#[serial]
fn test_missing_catalog_file_is_reported() {
    clear_env();
    env::set_var("FITPLAN_SUPPLEMENT_CATALOG", "/nonexistent/catalog.json");

    let config = EngineConfig::from_env().unwrap();
    assert!(matches!(
        config.supplement_catalog(),
        Err(ConfigError::InvalidCatalog(_))
    ));

    clear_env();
}

// ============================================================================
// Logging Order Tests
// ============================================================================

/// Writer appending formatted events to a shared buffer
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
#[serial]
fn test_configuration_is_logged_only_on_request() {
    clear_env();
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let config = EngineConfig::from_env().unwrap();
        // Loading runs before the subscriber exists in the binary, so it stays silent
        assert!(logs.text().is_empty(), "{}", logs.text());

        config.log_summary();
    });

    let text = logs.text();
    assert!(text.contains("Configuration loaded"), "{text}");
    assert!(text.contains(DEFAULT_STORE_DIR), "{text}");
}
