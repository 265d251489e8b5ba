// ABOUTME: Command-line front end for the fitplan engine
// ABOUTME: Derives plans from questionnaire JSON and manages profiles in the file store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Derive a plan from a questionnaire file
//! cargo run --bin fitplan -- derive --input quiz.json --pretty
//!
//! # Derive from stdin
//! cat quiz.json | cargo run --bin fitplan -- derive
//!
//! # Derive and save for a user
//! cargo run --bin fitplan -- generate --user-id 6f1c... --input quiz.json
//!
//! # Re-derive from the stored questionnaire
//! cargo run --bin fitplan -- generate --user-id 6f1c...
//!
//! # Print a stored profile
//! cargo run --bin fitplan -- show --user-id 6f1c...
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use fitplan_engine::config::EngineConfig;
use fitplan_engine::errors::{AppError, ErrorResponse};
use fitplan_engine::models::{PlanBundle, QuestionnaireResponse};
use fitplan_engine::orchestrator::{GeneratedPlan, PlanOrchestrator};
use fitplan_engine::profile_store::{FileProfileStore, ProfileStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "fitplan",
    about = "Fitplan quiz-to-plan engine",
    long_about = "Derive body composition, nutrition, training and supplement plans from onboarding questionnaire answers."
)]
struct FitplanArgs {
    #[command(subcommand)]
    command: FitplanCommand,

    /// Profile store directory override
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Subcommand)]
enum FitplanCommand {
    /// Derive a plan and print it without saving
    Derive {
        /// Questionnaire JSON file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pretty-print the plan
        #[arg(long)]
        pretty: bool,
    },

    /// Derive a plan and save it to the user's profile
    Generate {
        /// Profile owner
        #[arg(long)]
        user_id: Uuid,

        /// Questionnaire JSON file (re-derives from the stored questionnaire when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print a stored profile
    Show {
        /// Profile owner
        #[arg(long)]
        user_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let args = FitplanArgs::parse();

    let mut config = EngineConfig::from_env()?;
    if args.verbose {
        config.logging.level = "debug".to_owned();
    }
    config.logging.init()?;

    if let Some(store_dir) = args.store_dir {
        config.store_dir = store_dir;
    }
    config.log_summary();

    let catalog = config
        .supplement_catalog()
        .context("Failed to load supplement catalog")?;
    let store = Arc::new(FileProfileStore::new(config.store_dir.clone()));
    let orchestrator = PlanOrchestrator::new(config.engine, catalog, store.clone());

    match args.command {
        FitplanCommand::Derive { input, pretty } => {
            let quiz = read_questionnaire(input.as_deref()).await?;
            let bundle = orchestrator.derive(Some(&quiz))?;
            print_json(&bundle, pretty)?;
            print_section_errors(&bundle)?;
        }
        FitplanCommand::Generate { user_id, input } => {
            let generated = match input {
                Some(path) => {
                    let quiz = read_questionnaire(Some(&path)).await?;
                    orchestrator.generate_and_store(user_id, &quiz).await?
                }
                None => orchestrator.regenerate_for_user(user_id).await?,
            };
            report_generated(user_id, &generated);
            print_json(&generated.bundle, true)?;
            print_section_errors(&generated.bundle)?;
        }
        FitplanCommand::Show { user_id } => {
            let profile = store
                .load_profile(user_id)
                .await?
                .ok_or_else(|| anyhow!("No stored profile for user {user_id}"))?;
            print_json(&profile, true)?;
        }
    }

    Ok(())
}

async fn read_questionnaire(path: Option<&Path>) -> Result<QuestionnaireResponse> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read questionnaire from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("Questionnaire is not valid JSON")
}

fn report_generated(user_id: Uuid, generated: &GeneratedPlan) {
    match &generated.persistence_error {
        None => info!(user.id = %user_id, "Plan saved"),
        Some(error) => warn!(
            user.id = %user_id,
            error = %error,
            "Plan derived but not saved; printing it anyway"
        ),
    }
}

/// One JSON error document per omitted section, on stderr
fn print_section_errors(bundle: &PlanBundle) -> Result<()> {
    for error in &bundle.section_errors {
        let response = ErrorResponse::from(AppError::from(error.clone()));
        eprintln!("{}", serde_json::to_string(&response)?);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
