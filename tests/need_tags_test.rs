// ABOUTME: Integration tests for need-tag derivation from lifestyle facets, diet and goals
// ABOUTME: Covers each facet mapping, plant-based diet tags, goal passthrough and the fallback tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_engine::constants::{goals, tags};
use fitplan_engine::intelligence::derive_need_tags;
use fitplan_engine::models::{
    DietaryPreference, EnergyLevel, FocusLevel, ImmunityStrength, QuestionnaireResponse,
    RecoveryRate, SleepQuality, StressLevel,
};
use std::collections::BTreeSet;

fn tag_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

// ============================================================================
// Facet Mapping Tests
// ============================================================================

#[test]
fn test_unanswered_quiz_falls_back_to_overall_health() {
    let need_tags = derive_need_tags(&QuestionnaireResponse::default());
    assert_eq!(need_tags, tag_set(&[tags::OVERALL_HEALTH]));
}

#[test]
fn test_every_negative_facet_contributes_one_tag() {
    let quiz = QuestionnaireResponse {
        sleep_quality: Some(SleepQuality::Poor),
        stress_level: Some(StressLevel::High),
        energy_level: Some(EnergyLevel::Low),
        focus_level: Some(FocusLevel::Poor),
        immunity_strength: Some(ImmunityStrength::Weak),
        recovery_rate: Some(RecoveryRate::Slow),
        ..QuestionnaireResponse::default()
    };

    assert_eq!(
        derive_need_tags(&quiz),
        tag_set(&[
            tags::POOR_SLEEP,
            tags::HIGH_STRESS,
            tags::LOW_ENERGY,
            tags::BRAIN_FUNCTION,
            tags::WEAK_IMMUNITY,
            tags::SLOW_RECOVERY,
        ])
    );
}

#[test]
fn test_middling_answers_still_flag_sleep_stress_and_immunity() {
    let quiz = QuestionnaireResponse {
        sleep_quality: Some(SleepQuality::Fair),
        stress_level: Some(StressLevel::Moderate),
        immunity_strength: Some(ImmunityStrength::Average),
        ..QuestionnaireResponse::default()
    };

    assert_eq!(
        derive_need_tags(&quiz),
        tag_set(&[tags::POOR_SLEEP, tags::HIGH_STRESS, tags::WEAK_IMMUNITY])
    );
}

#[test]
fn test_positive_answers_produce_only_the_fallback() {
    let quiz = QuestionnaireResponse {
        sleep_quality: Some(SleepQuality::Excellent),
        stress_level: Some(StressLevel::Low),
        energy_level: Some(EnergyLevel::High),
        focus_level: Some(FocusLevel::Average),
        immunity_strength: Some(ImmunityStrength::Strong),
        recovery_rate: Some(RecoveryRate::Average),
        ..QuestionnaireResponse::default()
    };

    assert_eq!(derive_need_tags(&quiz), tag_set(&[tags::OVERALL_HEALTH]));
}

// ============================================================================
// Diet and Goal Tests
// ============================================================================

#[test]
fn test_plant_based_diets_add_their_own_tag() {
    for (diet, tag) in [
        (DietaryPreference::Vegan, tags::VEGAN),
        (DietaryPreference::Vegetarian, tags::VEGETARIAN),
    ] {
        let quiz = QuestionnaireResponse {
            dietary_preference: Some(diet),
            ..QuestionnaireResponse::default()
        };
        assert_eq!(derive_need_tags(&quiz), tag_set(&[tag]), "diet {diet}");
    }
}

#[test]
fn test_other_diets_add_no_tag() {
    for diet in [
        DietaryPreference::Omnivore,
        DietaryPreference::Keto,
        DietaryPreference::Paleo,
        DietaryPreference::Pescatarian,
        DietaryPreference::Mediterranean,
    ] {
        let quiz = QuestionnaireResponse {
            dietary_preference: Some(diet),
            ..QuestionnaireResponse::default()
        };
        assert_eq!(
            derive_need_tags(&quiz),
            tag_set(&[tags::OVERALL_HEALTH]),
            "diet {diet}"
        );
    }
}

#[test]
fn test_goals_are_copied_verbatim_without_fallback() {
    let quiz = QuestionnaireResponse {
        fitness_goals: vec![goals::BUILD_MUSCLE.to_owned(), "custom-goal".to_owned()],
        sleep_quality: Some(SleepQuality::Poor),
        ..QuestionnaireResponse::default()
    };

    let need_tags = derive_need_tags(&quiz);
    assert_eq!(
        need_tags,
        tag_set(&[goals::BUILD_MUSCLE, "custom-goal", tags::POOR_SLEEP])
    );
    assert!(!need_tags.contains(tags::OVERALL_HEALTH));
}

#[test]
fn test_duplicate_goals_collapse() {
    let quiz = QuestionnaireResponse {
        fitness_goals: vec![goals::LOSE_WEIGHT.to_owned(), goals::LOSE_WEIGHT.to_owned()],
        ..QuestionnaireResponse::default()
    };
    assert_eq!(derive_need_tags(&quiz), tag_set(&[goals::LOSE_WEIGHT]));
}
