// ABOUTME: Supplement catalog with built-in seed data, JSON loading and validation
// ABOUTME: Also maps need tags to the phrases used in recommendation rationales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Supplement Catalog
//!
//! The catalog is ordered: ties in match score keep catalog order, so
//! reordering entries changes recommendations. A deployment can replace the
//! built-in catalog with a JSON array of entries without touching code.

use crate::config::ConfigError;
use fitplan_core::constants::tags;
use fitplan_core::models::SupplementCatalogEntry;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Rationale phrase for each need tag
pub const TAG_PHRASES: &[(&str, &str)] = &[
    (tags::POOR_SLEEP, "better sleep quality"),
    (tags::HIGH_STRESS, "stress management"),
    (tags::LOW_ENERGY, "sustained energy"),
    (tags::BRAIN_FUNCTION, "cognitive focus"),
    (tags::WEAK_IMMUNITY, "immune support"),
    (tags::SLOW_RECOVERY, "faster recovery"),
    (tags::VEGAN, "filling common vegan nutrient gaps"),
    (tags::VEGETARIAN, "filling common vegetarian nutrient gaps"),
    ("build-muscle", "muscle growth"),
    ("lose-weight", "weight management"),
    ("increase-endurance", "endurance performance"),
    ("improve-flexibility", "joint and mobility support"),
    ("strength-training", "strength performance"),
    (tags::OVERALL_HEALTH, "overall health"),
];

/// Phrase used in rationales for `tag`
#[must_use]
pub fn phrase_for(tag: &str) -> Option<&'static str> {
    TAG_PHRASES
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, phrase)| *phrase)
}

/// Ordered supplement catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementCatalog {
    entries: Vec<SupplementCatalogEntry>,
}

impl SupplementCatalog {
    /// Build a catalog, de-duplicating each entry's tags and validating the result
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` for duplicate ids or tagless entries
    pub fn new(mut entries: Vec<SupplementCatalogEntry>) -> Result<Self, ConfigError> {
        for entry in &mut entries {
            let mut seen = HashSet::new();
            entry.tags.retain(|tag| seen.insert(tag.clone()));
        }
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a JSON array of entries
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` if the JSON is malformed or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<SupplementCatalogEntry> = serde_json::from_str(json)
            .map_err(|e| ConfigError::InvalidCatalog(format!("malformed catalog JSON: {e}")))?;
        Self::new(entries)
    }

    /// Read and parse a JSON catalog file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` if the file cannot be read or parsed
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::InvalidCatalog(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check catalog invariants
    ///
    /// # Errors
    ///
    /// Returns the first duplicate id or tagless entry found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for entry in &self.entries {
            if !ids.insert(entry.id.as_str()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate supplement id '{}'",
                    entry.id
                )));
            }
            if entry.tags.is_empty() {
                return Err(ConfigError::InvalidCatalog(format!(
                    "supplement '{}' has no tags",
                    entry.id
                )));
            }
        }
        Ok(())
    }

    /// Entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[SupplementCatalogEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SupplementCatalog {
    fn default() -> Self {
        Self {
            entries: BUILT_IN.iter().map(SeedEntry::to_entry).collect(),
        }
    }
}

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    benefits: &'static [&'static str],
    tags: &'static [&'static str],
}

impl SeedEntry {
    fn to_entry(&self) -> SupplementCatalogEntry {
        SupplementCatalogEntry {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            url: format!("/supplements/{}", self.id),
            description: self.description.to_owned(),
            benefits: self.benefits.iter().map(|&b| b.to_owned()).collect(),
            tags: self.tags.iter().map(|&t| t.to_owned()).collect(),
        }
    }
}

const BUILT_IN: &[SeedEntry] = &[
    SeedEntry {
        id: "whey-protein-isolate",
        name: "Whey Protein Isolate",
        description: "Fast-digesting complete protein for post-workout recovery.",
        benefits: &["Supports muscle protein synthesis", "Convenient protein top-up"],
        tags: &["build-muscle", "slow-recovery", "strength-training"],
    },
    SeedEntry {
        id: "creatine-monohydrate",
        name: "Creatine Monohydrate",
        description: "The most studied supplement for strength and power output.",
        benefits: &["Improves high-intensity performance", "Supports lean mass gains"],
        tags: &["build-muscle", "strength-training", "brain-function"],
    },
    SeedEntry {
        id: "magnesium-glycinate",
        name: "Magnesium Glycinate",
        description: "Well-absorbed magnesium for relaxation and muscle function.",
        benefits: &["Supports restful sleep", "Helps muscle relaxation"],
        tags: &["poor-sleep", "high-stress", "slow-recovery"],
    },
    SeedEntry {
        id: "ashwagandha",
        name: "Ashwagandha",
        description: "Adaptogenic herb traditionally used to manage stress.",
        benefits: &["Supports a healthy stress response", "May improve sleep onset"],
        tags: &["high-stress", "poor-sleep", "low-energy"],
    },
    SeedEntry {
        id: "omega-3-fish-oil",
        name: "Omega-3 Fish Oil",
        description: "EPA and DHA from fish oil for heart, brain and joints.",
        benefits: &["Supports cognitive function", "Supports joint comfort"],
        tags: &["brain-function", "slow-recovery", "overall-health"],
    },
    SeedEntry {
        id: "vitamin-d3-k2",
        name: "Vitamin D3 + K2",
        description: "Vitamin D3 paired with K2 for immune and bone health.",
        benefits: &["Supports immune function", "Supports bone health"],
        tags: &["weak-immunity", "low-energy", "overall-health"],
    },
    SeedEntry {
        id: "zinc",
        name: "Zinc",
        description: "Essential mineral for immune function and tissue repair.",
        benefits: &["Supports immune defenses", "Supports tissue repair"],
        tags: &["weak-immunity", "slow-recovery"],
    },
    SeedEntry {
        id: "vitamin-b12",
        name: "Vitamin B12",
        description: "Methylcobalamin for energy metabolism, essential on plant-based diets.",
        benefits: &["Supports energy metabolism", "Supports red blood cell formation"],
        tags: &["vegan", "vegetarian", "low-energy"],
    },
    SeedEntry {
        id: "plant-protein",
        name: "Plant Protein Blend",
        description: "Pea and rice protein blend with a complete amino acid profile.",
        benefits: &["Dairy-free protein source", "Supports muscle growth"],
        tags: &["vegan", "vegetarian", "build-muscle"],
    },
    SeedEntry {
        id: "algae-omega-3",
        name: "Algae Omega-3",
        description: "Plant-based EPA and DHA sourced from microalgae.",
        benefits: &["Vegan source of omega-3", "Supports brain health"],
        tags: &["vegan", "vegetarian", "brain-function"],
    },
    SeedEntry {
        id: "electrolytes",
        name: "Electrolyte Mix",
        description: "Sodium, potassium and magnesium for hydration during long sessions.",
        benefits: &["Replaces minerals lost in sweat", "Helps prevent cramping"],
        tags: &["increase-endurance", "low-energy"],
    },
    SeedEntry {
        id: "beta-alanine",
        name: "Beta-Alanine",
        description: "Amino acid that buffers acid build-up during hard efforts.",
        benefits: &["Delays muscular fatigue", "Supports high-rep training"],
        tags: &["increase-endurance", "build-muscle"],
    },
    SeedEntry {
        id: "collagen-peptides",
        name: "Collagen Peptides",
        description: "Hydrolyzed collagen for connective tissue support.",
        benefits: &["Supports joint and tendon health", "Supports skin elasticity"],
        tags: &["improve-flexibility", "slow-recovery"],
    },
    SeedEntry {
        id: "green-tea-extract",
        name: "Green Tea Extract",
        description: "Standardized EGCG with a gentle dose of caffeine.",
        benefits: &["Supports metabolism", "Mild energy lift"],
        tags: &["lose-weight", "low-energy"],
    },
    SeedEntry {
        id: "psyllium-fiber",
        name: "Psyllium Husk Fiber",
        description: "Soluble fiber that promotes fullness and digestive regularity.",
        benefits: &["Helps appetite control", "Supports digestive health"],
        tags: &["lose-weight", "overall-health"],
    },
    SeedEntry {
        id: "multivitamin",
        name: "Daily Multivitamin",
        description: "Broad-spectrum vitamins and minerals to cover dietary gaps.",
        benefits: &["Fills common micronutrient gaps", "Supports immune health"],
        tags: &["overall-health", "weak-immunity"],
    },
    SeedEntry {
        id: "l-theanine",
        name: "L-Theanine",
        description: "Calming amino acid found in tea leaves.",
        benefits: &["Promotes calm focus", "Pairs well with caffeine"],
        tags: &["high-stress", "brain-function"],
    },
    SeedEntry {
        id: "probiotic",
        name: "Probiotic Complex",
        description: "Multi-strain probiotic for gut and immune health.",
        benefits: &["Supports gut flora balance", "Supports immune function"],
        tags: &["weak-immunity", "overall-health"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_catalog_is_valid() {
        let catalog = SupplementCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), BUILT_IN.len());
        assert!(catalog
            .entries()
            .iter()
            .all(|entry| entry.url.starts_with("/supplements/")));
    }

    #[test]
    fn test_every_built_in_tag_has_a_phrase() {
        let catalog = SupplementCatalog::default();
        for entry in catalog.entries() {
            for tag in &entry.tags {
                assert!(phrase_for(tag).is_some(), "no phrase for tag '{tag}'");
            }
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": "zinc", "name": "Zinc", "url": "/z", "description": "", "tags": ["weak-immunity"]},
            {"id": "zinc", "name": "Zinc 2", "url": "/z2", "description": "", "tags": ["slow-recovery"]}
        ]"#;
        let err = SupplementCatalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate supplement id"));
    }

    #[test]
    fn test_tagless_entry_is_rejected() {
        let json = r#"[{"id": "mystery", "name": "Mystery", "url": "/m", "description": "", "tags": []}]"#;
        assert!(SupplementCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_repeated_tags_are_collapsed_in_order() {
        let json = r#"[{"id": "zinc", "name": "Zinc", "url": "/z", "description": "",
            "tags": ["weak-immunity", "slow-recovery", "weak-immunity"]}]"#;
        let catalog = SupplementCatalog::from_json_str(json).unwrap();
        assert_eq!(
            catalog.entries()[0].tags,
            vec!["weak-immunity".to_owned(), "slow-recovery".to_owned()]
        );
    }
}
