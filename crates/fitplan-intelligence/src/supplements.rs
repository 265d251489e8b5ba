// ABOUTME: Supplement recommender scoring catalog entries by shared need tags
// ABOUTME: Stable ranking with catalog-order tie breaks and phrase-based rationales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::supplements::{phrase_for, SupplementCatalog};
use crate::config::SupplementConfig;
use fitplan_core::models::{SupplementCatalogEntry, SupplementRecommendation};
use std::collections::BTreeSet;
use tracing::debug;

/// Rank catalog entries against a user's need tags
///
/// Entries sharing no tag are dropped. The rest are sorted by descending
/// score; the sort is stable so equal scores keep catalog order.
#[must_use]
pub fn recommend_supplements(
    user_tags: &BTreeSet<String>,
    catalog: &SupplementCatalog,
    config: &SupplementConfig,
) -> Vec<SupplementRecommendation> {
    let mut scored: Vec<(&SupplementCatalogEntry, u32)> = catalog
        .entries()
        .iter()
        .map(|entry| (entry, match_score(entry, user_tags)))
        .filter(|(_, score)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let recommendations: Vec<SupplementRecommendation> = scored
        .into_iter()
        .take(config.max_recommendations)
        .map(|(entry, match_score)| SupplementRecommendation {
            rationale: rationale(entry, user_tags, config),
            entry: entry.clone(),
            match_score,
        })
        .collect();

    debug!(
        user_tags = user_tags.len(),
        recommended = ?recommendations
            .iter()
            .map(|r| (r.entry.id.as_str(), r.match_score))
            .collect::<Vec<_>>(),
        "Ranked supplements"
    );

    recommendations
}

/// Number of distinct tags the entry shares with the user
#[must_use]
pub fn match_score(entry: &SupplementCatalogEntry, user_tags: &BTreeSet<String>) -> u32 {
    let shared: BTreeSet<&str> = entry
        .tags
        .iter()
        .filter(|tag| user_tags.contains(*tag))
        .map(String::as_str)
        .collect();
    shared.len() as u32
}

/// Explain a match using the first shared tags in the entry's own order
#[must_use]
pub fn rationale(
    entry: &SupplementCatalogEntry,
    user_tags: &BTreeSet<String>,
    config: &SupplementConfig,
) -> String {
    let phrases: Vec<&str> = entry
        .tags
        .iter()
        .filter(|tag| user_tags.contains(*tag))
        .take(config.rationale_tag_limit)
        .filter_map(|tag| phrase_for(tag))
        .collect();

    if phrases.is_empty() {
        config.fallback_rationale.clone()
    } else {
        phrases.join(" and ")
    }
}
