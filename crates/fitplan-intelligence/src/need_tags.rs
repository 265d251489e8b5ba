// ABOUTME: Derives abstract need tags from questionnaire lifestyle facets and goals
// ABOUTME: Tags drive supplement matching; each facet contributes at most one tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::constants::tags;
use fitplan_core::models::{
    EnergyLevel, FocusLevel, ImmunityStrength, QuestionnaireResponse, RecoveryRate, SleepQuality,
    StressLevel,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Map lifestyle facets, diet and goals to need tags
///
/// Every selected goal id is copied verbatim. When nothing applies the set
/// holds `overall-health` alone, so the result is never empty.
#[must_use]
pub fn derive_need_tags(quiz: &QuestionnaireResponse) -> BTreeSet<String> {
    let facet_tags = [
        matches!(
            quiz.sleep_quality,
            Some(SleepQuality::Poor | SleepQuality::Fair)
        )
        .then_some(tags::POOR_SLEEP),
        matches!(
            quiz.stress_level,
            Some(StressLevel::High | StressLevel::Moderate)
        )
        .then_some(tags::HIGH_STRESS),
        matches!(quiz.energy_level, Some(EnergyLevel::Low)).then_some(tags::LOW_ENERGY),
        matches!(quiz.focus_level, Some(FocusLevel::Poor)).then_some(tags::BRAIN_FUNCTION),
        matches!(
            quiz.immunity_strength,
            Some(ImmunityStrength::Weak | ImmunityStrength::Average)
        )
        .then_some(tags::WEAK_IMMUNITY),
        matches!(quiz.recovery_rate, Some(RecoveryRate::Slow)).then_some(tags::SLOW_RECOVERY),
    ];

    let mut need_tags: BTreeSet<String> = facet_tags
        .into_iter()
        .flatten()
        .map(str::to_owned)
        .collect();

    if let Some(diet) = quiz.dietary_preference.filter(|d| d.is_plant_based()) {
        need_tags.insert(diet.as_str().to_owned());
    }

    need_tags.extend(quiz.fitness_goals.iter().cloned());

    if need_tags.is_empty() {
        need_tags.insert(tags::OVERALL_HEALTH.to_owned());
    }

    debug!(tags = ?need_tags, "Derived need tags");
    need_tags
}
