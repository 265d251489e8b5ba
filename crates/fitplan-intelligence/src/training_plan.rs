// ABOUTME: Training plan synthesis from the goal/level template matrix
// ABOUTME: Applies equipment substitution, injury accommodation and trimming to requested days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Plan Synthesizer
//!
//! Independent of the body composition estimate. Known simplifications kept
//! as product behavior:
//!
//! - `athletic` users get the advanced templates; there is no athletic bucket.
//! - A template shorter than the requested days yields a shorter week. Workouts
//!   are never repeated to fill it.
//! - Injury accommodation is generic: every workout is renamed and carries the
//!   same caution regardless of the exercises it contains.

use crate::catalog::workouts::{
    template_for, training_type, WorkoutTemplate, EQUIPMENT_KEYWORDS, FALLBACK_SUBSTITUTE,
    SUBSTITUTION_RULES,
};
use crate::config::TrainingPlanConfig;
use fitplan_core::constants::{fields, goals};
use fitplan_core::errors::PlanError;
use fitplan_core::models::{
    required, EquipmentAccess, FitnessLevel, GoalType, QuestionnaireResponse, TrainingLevel,
    TrainingPlan, Workout,
};
use tracing::debug;

/// Goal ids in priority order; the first one selected wins
const GOAL_PRIORITY: &[(&str, GoalType)] = &[
    (goals::LOSE_WEIGHT, GoalType::LoseWeight),
    (goals::BUILD_MUSCLE, GoalType::BuildMuscle),
    (goals::INCREASE_ENDURANCE, GoalType::IncreaseEndurance),
    (goals::IMPROVE_FLEXIBILITY, GoalType::ImproveFlexibility),
];

/// Build the weekly training plan skeleton
///
/// # Errors
///
/// Returns `PlanError::MissingField` if `fitness_level` is missing.
pub fn synthesize_training_plan(
    quiz: &QuestionnaireResponse,
    config: &TrainingPlanConfig,
) -> Result<TrainingPlan, PlanError> {
    let fitness_level = required(fields::FITNESS_LEVEL, quiz.fitness_level)?;
    let level = training_level(fitness_level);
    let goal = resolve_goal_type(&quiz.fitness_goals);
    let equipment = quiz.equipment_access.unwrap_or(EquipmentAccess::None);
    let requested_days = config.days_per_week(quiz.workout_frequency);

    let template = template_for(goal, level);
    let mut workouts: Vec<Workout> = template
        .iter()
        .take(usize::from(requested_days))
        .map(WorkoutTemplate::to_workout)
        .collect();

    if equipment.needs_substitution() {
        for workout in &mut workouts {
            for exercise in &mut workout.exercises {
                if let Some(replacement) = substitute_exercise(exercise) {
                    *exercise = replacement.to_owned();
                }
            }
        }
    }

    let injury_note = quiz.injury().map(|injury| {
        accommodate_injury(&mut workouts, config);
        format!(
            "Plan adjusted for reported injury ({injury}). {}",
            config.injury_caution
        )
    });

    debug!(
        goal = goal.as_str(),
        level = level.as_str(),
        requested_days,
        template_len = template.len(),
        equipment = equipment.as_str(),
        injured = injury_note.is_some(),
        "Synthesized training plan"
    );

    Ok(TrainingPlan {
        goal,
        level,
        days_per_week: workouts.len() as u8,
        training_type: training_type(goal).to_owned(),
        location: location(equipment).to_owned(),
        equipment_level: equipment,
        injury_note,
        workouts,
    })
}

/// Goal type by fixed priority; the order goals were picked in is irrelevant
#[must_use]
pub fn resolve_goal_type(fitness_goals: &[String]) -> GoalType {
    GOAL_PRIORITY
        .iter()
        .find(|(id, _)| fitness_goals.iter().any(|g| g == id))
        .map_or(GoalType::GeneralFitness, |(_, goal)| *goal)
}

/// Template bucket for a fitness level
///
/// `athletic` has no templates of its own and falls back to advanced.
#[must_use]
pub const fn training_level(fitness_level: FitnessLevel) -> TrainingLevel {
    match fitness_level {
        FitnessLevel::Beginner => TrainingLevel::Beginner,
        FitnessLevel::Intermediate => TrainingLevel::Intermediate,
        FitnessLevel::Advanced | FitnessLevel::Athletic => TrainingLevel::Advanced,
    }
}

/// Bodyweight replacement for an equipment-based exercise
///
/// Returns `None` when the exercise needs no equipment. Otherwise the first
/// matching substitution rule wins, falling back to a generic alternative.
#[must_use]
pub fn substitute_exercise(exercise: &str) -> Option<&'static str> {
    let lowered = exercise.to_lowercase();
    if !EQUIPMENT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return None;
    }
    Some(
        SUBSTITUTION_RULES
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
            .map_or(FALLBACK_SUBSTITUTE, |rule| rule.replacement),
    )
}

fn accommodate_injury(workouts: &mut [Workout], config: &TrainingPlanConfig) {
    for workout in workouts {
        workout.name.push_str(&config.injury_suffix);
        workout.caution = Some(config.injury_caution.clone());
    }
}

const fn location(equipment: EquipmentAccess) -> &'static str {
    match equipment {
        EquipmentAccess::FullGym => "gym",
        EquipmentAccess::None | EquipmentAccess::Minimal | EquipmentAccess::HomeGym => "home",
    }
}
