// ABOUTME: Supplement catalog entry and recommendation models
// ABOUTME: Entries are static seed data matched against need tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One product in the supplement catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplementCatalogEntry {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Product page
    pub url: String,
    /// Short description
    pub description: String,
    /// Marketing benefit bullets
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Need tags this product addresses, most relevant first
    pub tags: Vec<String>,
}

impl SupplementCatalogEntry {
    /// Whether the entry carries `tag`
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A ranked catalog match for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplementRecommendation {
    /// Matched catalog entry
    pub entry: SupplementCatalogEntry,
    /// Number of shared tags, at least 1
    pub match_score: u32,
    /// Why the entry was picked
    pub rationale: String,
}
