// ABOUTME: Configuration management module for the plan engine service
// ABOUTME: Re-exports environment configuration and the engine's typed tuning parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: service settings from environment variables
//! - **Engine**: formula constants, presets and limits (see `fitplan_intelligence::config`)

/// Environment and service configuration
pub mod environment;

pub use environment::{EngineConfig, DEFAULT_STORE_DIR};
pub use fitplan_intelligence::config::{ConfigError, PlanEngineConfig};
