// ABOUTME: Integration tests for supplement ranking against need tags
// ABOUTME: Covers scoring, catalog-order tie breaks, the result cap, rationales and custom catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan_engine::intelligence::config::SupplementConfig;
use fitplan_engine::intelligence::{recommend_supplements, SupplementCatalog};
use fitplan_engine::models::SupplementRecommendation;
use std::collections::BTreeSet;

fn tag_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

fn recommend(values: &[&str]) -> Vec<SupplementRecommendation> {
    recommend_supplements(
        &tag_set(values),
        &SupplementCatalog::default(),
        &SupplementConfig::default(),
    )
}

fn ranked_ids(recommendations: &[SupplementRecommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|r| r.entry.id.as_str())
        .collect()
}

// ============================================================================
// Ranking Tests
// ============================================================================

#[test]
fn test_sleep_and_stress_ranking() {
    let recommendations = recommend(&["poor-sleep", "high-stress"]);

    assert_eq!(
        ranked_ids(&recommendations),
        ["magnesium-glycinate", "ashwagandha", "l-theanine"]
    );
    let scores: Vec<u32> = recommendations.iter().map(|r| r.match_score).collect();
    assert_eq!(scores, [2, 2, 1]);
}

#[test]
fn test_ties_keep_catalog_order_and_results_are_capped() {
    let recommendations = recommend(&[
        "overall-health",
        "weak-immunity",
        "low-energy",
        "slow-recovery",
    ]);

    assert_eq!(
        ranked_ids(&recommendations),
        [
            "vitamin-d3-k2",
            "omega-3-fish-oil",
            "zinc",
            "multivitamin",
            "probiotic",
        ]
    );
    assert_eq!(recommendations[0].match_score, 3);
}

#[test]
fn test_scores_are_non_increasing_and_positive() {
    let recommendations = recommend(&["build-muscle", "slow-recovery", "vegan", "low-energy"]);
    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 5);
    assert!(recommendations.iter().all(|r| r.match_score > 0));
    assert!(recommendations
        .windows(2)
        .all(|pair| pair[0].match_score >= pair[1].match_score));
}

#[test]
fn test_no_shared_tags_means_no_recommendations() {
    assert!(recommend(&[]).is_empty());
    assert!(recommend(&["not-a-real-tag"]).is_empty());
}

#[test]
fn test_max_recommendations_is_configurable() {
    let config = SupplementConfig {
        max_recommendations: 2,
        ..SupplementConfig::default()
    };
    let recommendations = recommend_supplements(
        &tag_set(&["vegan"]),
        &SupplementCatalog::default(),
        &config,
    );
    assert_eq!(
        ranked_ids(&recommendations),
        ["vitamin-b12", "plant-protein"]
    );
}

// ============================================================================
// Rationale Tests
// ============================================================================

#[test]
fn test_rationale_uses_first_two_shared_tags_in_entry_order() {
    let recommendations = recommend(&["poor-sleep", "high-stress"]);
    assert_eq!(
        recommendations[0].rationale,
        "better sleep quality and stress management"
    );
    assert_eq!(
        recommendations[1].rationale,
        "stress management and better sleep quality"
    );
    assert_eq!(recommendations[2].rationale, "stress management");
}

#[test]
fn test_rationale_stops_after_two_phrases() {
    let recommendations = recommend(&["weak-immunity", "low-energy", "overall-health"]);
    let d3 = recommendations
        .iter()
        .find(|r| r.entry.id == "vitamin-d3-k2")
        .unwrap();
    assert_eq!(d3.match_score, 3);
    assert_eq!(d3.rationale, "immune support and sustained energy");
}

#[test]
fn test_unknown_tag_falls_back_to_generic_rationale() {
    let catalog = SupplementCatalog::from_json_str(
        r#"[{
            "id": "beetroot",
            "name": "Beetroot Powder",
            "url": "/supplements/beetroot",
            "description": "Dietary nitrates",
            "tags": ["nitric-oxide"]
        }]"#,
    )
    .unwrap();

    let recommendations = recommend_supplements(
        &tag_set(&["nitric-oxide"]),
        &catalog,
        &SupplementConfig::default(),
    );
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].rationale, "overall wellness goals");
    assert!(recommendations[0].entry.benefits.is_empty());
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_duplicate_tags_count_once() {
    let catalog = SupplementCatalog::from_json_str(
        r#"[{
            "id": "sleep-blend",
            "name": "Sleep Blend",
            "url": "/supplements/sleep-blend",
            "description": "Night-time blend",
            "tags": ["poor-sleep", "poor-sleep", "high-stress"]
        }]"#,
    )
    .unwrap();

    let recommendations = recommend_supplements(
        &tag_set(&["poor-sleep", "high-stress"]),
        &catalog,
        &SupplementConfig::default(),
    );
    assert_eq!(recommendations[0].match_score, 2);
}

#[test]
fn test_malformed_catalog_is_rejected() {
    assert!(SupplementCatalog::from_json_str("{not json").is_err());

    let duplicate = r#"[
        {"id": "zinc", "name": "Zinc", "url": "/supplements/zinc", "description": "", "tags": ["weak-immunity"]},
        {"id": "zinc", "name": "Zinc", "url": "/supplements/zinc", "description": "", "tags": ["weak-immunity"]}
    ]"#;
    let error = SupplementCatalog::from_json_str(duplicate).unwrap_err();
    assert!(error.to_string().contains("zinc"));
}

#[test]
fn test_recommendations_embed_full_catalog_entry() {
    let recommendations = recommend(&["vegan"]);
    let b12 = &recommendations[0].entry;
    assert_eq!(b12.id, "vitamin-b12");
    assert_eq!(b12.url, "/supplements/vitamin-b12");
    assert!(!b12.name.is_empty());
}
