// ABOUTME: Criterion benchmarks for quiz-to-plan derivation
// ABOUTME: Measures the individual engine stages and full orchestrated derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the plan engine.
//!
//! Covers each stage on its own and the orchestrator running all of them,
//! across questionnaires of increasing complexity.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fitplan_engine::intelligence::config::PlanEngineConfig;
use fitplan_engine::intelligence::{
    derive_need_tags, estimate_body_composition, recommend_supplements, synthesize_meal_plan,
    synthesize_training_plan, SupplementCatalog,
};
use fitplan_engine::models::{
    DietaryPreference, EnergyLevel, EquipmentAccess, FitnessLevel, Gender, MealFrequency,
    NumericInput, QuestionnaireResponse, SleepQuality, StressLevel, WorkoutFrequency,
};
use fitplan_engine::orchestrator::PlanOrchestrator;
use fitplan_engine::profile_store::InMemoryProfileStore;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Questionnaire shapes, from only the required answers to every answer filled in
#[derive(Debug, Clone, Copy)]
enum QuizProfile {
    Minimal,
    Typical,
    Complete,
}

impl QuizProfile {
    const fn name(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Typical => "typical",
            Self::Complete => "complete",
        }
    }

    fn build(self) -> QuestionnaireResponse {
        let base = QuestionnaireResponse {
            age: Some(NumericInput::Number(34.0)),
            gender: Some(Gender::Female),
            height_cm: Some(NumericInput::Number(165.0)),
            current_weight_kg: Some(NumericInput::Number(68.0)),
            target_weight_kg: Some(NumericInput::Number(62.0)),
            waist_cm: Some(NumericInput::Number(78.0)),
            fitness_level: Some(FitnessLevel::Intermediate),
            ..QuestionnaireResponse::default()
        };

        match self {
            Self::Minimal => base,
            Self::Typical => QuestionnaireResponse {
                fitness_goals: vec!["lose-weight".to_owned()],
                workout_frequency: Some(WorkoutFrequency::ThreeToFour),
                equipment_access: Some(EquipmentAccess::HomeGym),
                sleep_quality: Some(SleepQuality::Fair),
                ..base
            },
            Self::Complete => QuestionnaireResponse {
                fitness_goals: vec!["build-muscle".to_owned(), "increase-endurance".to_owned()],
                workout_frequency: Some(WorkoutFrequency::FivePlus),
                equipment_access: Some(EquipmentAccess::None),
                previous_injuries: Some("lower back strain".to_owned()),
                dietary_preference: Some(DietaryPreference::Vegan),
                meal_frequency: Some(MealFrequency::SixPlus),
                food_allergies: BTreeSet::from(["nuts".to_owned(), "dairy".to_owned()]),
                sleep_quality: Some(SleepQuality::Poor),
                stress_level: Some(StressLevel::High),
                energy_level: Some(EnergyLevel::Low),
                ..base
            },
        }
    }
}

const PROFILES: [QuizProfile; 3] = [
    QuizProfile::Minimal,
    QuizProfile::Typical,
    QuizProfile::Complete,
];

fn bench_engine_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_stages");
    let config = PlanEngineConfig::default();
    let catalog = SupplementCatalog::default();
    let quiz = QuizProfile::Complete.build();

    group.bench_function("body_composition", |b| {
        b.iter(|| estimate_body_composition(Some(black_box(&quiz)), &config.body_composition));
    });

    let estimate = estimate_body_composition(Some(&quiz), &config.body_composition)
        .unwrap()
        .unwrap();
    group.bench_function("meal_plan", |b| {
        b.iter(|| synthesize_meal_plan(Some(&estimate), black_box(&quiz), &config.meal_plan));
    });

    group.bench_function("training_plan", |b| {
        b.iter(|| synthesize_training_plan(black_box(&quiz), &config.training_plan));
    });

    let tags = derive_need_tags(&quiz);
    group.bench_function("supplements", |b| {
        b.iter(|| recommend_supplements(black_box(&tags), &catalog, &config.supplements));
    });

    group.finish();
}

fn bench_full_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let orchestrator = PlanOrchestrator::new(
        PlanEngineConfig::default(),
        SupplementCatalog::default(),
        Arc::new(InMemoryProfileStore::new()),
    );

    for profile in PROFILES {
        let quiz = profile.build();
        group.bench_with_input(
            BenchmarkId::from_parameter(profile.name()),
            &quiz,
            |b, quiz| {
                b.iter(|| orchestrator.derive(Some(black_box(quiz))).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_engine_stages, bench_full_derivation);
criterion_main!(benches);
