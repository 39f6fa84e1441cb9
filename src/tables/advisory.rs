//! Advisory Table
//!
//! Per-language advice text, organised by category and keyed by selection
//! values. Every category is optional in the data; lookups on absent keys
//! return None or an empty slice and the resolver decides the fallback.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::selection::{FarmSize, SoilType, WaterLevel};

/// Advice text for a single language
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisoryPack {
    /// crop -> soil -> suitability sentence
    #[serde(default)]
    pub crop_suitability: FxHashMap<String, FxHashMap<SoilType, String>>,

    /// water level -> ordered irrigation tips
    #[serde(default)]
    pub irrigation: FxHashMap<WaterLevel, Vec<String>>,

    #[serde(default)]
    pub fertilizer: FertilizerTable,

    /// crop -> pest warnings (plain list, or a mapping with a `default` list)
    #[serde(default)]
    pub pests: FxHashMap<String, PestEntry>,

    /// farm size -> ordered management tips
    #[serde(default)]
    pub tips: FxHashMap<FarmSize, Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FertilizerTable {
    #[serde(default)]
    pub organic: Vec<String>,
    #[serde(default)]
    pub chemical: Vec<String>,
}

/// Pest entry for a crop.
///
/// Crops without a specific pest list carry a mapping whose `default` key
/// holds the generic list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PestEntry {
    List(Vec<String>),
    Grouped(FxHashMap<String, Vec<String>>),
}

impl PestEntry {
    pub const DEFAULT_KEY: &'static str = "default";

    /// The warnings this entry resolves to
    pub fn warnings(&self) -> &[String] {
        match self {
            PestEntry::List(list) => list,
            PestEntry::Grouped(groups) => groups
                .get(Self::DEFAULT_KEY)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, PestEntry::Grouped(_))
    }
}

impl AdvisoryPack {
    pub fn suitability(&self, crop: &str, soil: SoilType) -> Option<&str> {
        self.crop_suitability
            .get(crop)
            .and_then(|by_soil| by_soil.get(&soil))
            .map(String::as_str)
    }

    pub fn irrigation(&self, water: WaterLevel) -> Option<&[String]> {
        self.irrigation.get(&water).map(Vec::as_slice)
    }

    pub fn pests(&self, crop: &str) -> Option<&PestEntry> {
        self.pests.get(crop)
    }

    pub fn tips(&self, farm_size: FarmSize) -> Option<&[String]> {
        self.tips.get(&farm_size).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> AdvisoryPack {
        serde_json::from_str(
            r#"{
                "crop_suitability": { "wheat": { "black": "Wheat on black soil." } },
                "irrigation": { "low": ["Drip.", "Mulch."] },
                "fertilizer": { "organic": ["FYM."] },
                "pests": {
                    "wheat": ["Aphids.", "Termites."],
                    "groundnut": { "default": ["Leaf miner."], "kharif": ["Red hairy caterpillar."] },
                    "okra": { "kharif": ["Shoot borer."] }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_suitability_lookup() {
        let pack = pack();
        assert_eq!(pack.suitability("wheat", SoilType::Black), Some("Wheat on black soil."));
        assert_eq!(pack.suitability("wheat", SoilType::Sandy), None);
        assert_eq!(pack.suitability("rice", SoilType::Black), None);
    }

    #[test]
    fn test_missing_categories_default_to_empty() {
        let pack = pack();
        assert!(pack.irrigation(WaterLevel::High).is_none());
        assert!(pack.tips(FarmSize::Small).is_none());
        assert!(pack.fertilizer.chemical.is_empty());
    }

    #[test]
    fn test_pest_entry_shapes() {
        let pack = pack();

        let wheat = pack.pests("wheat").unwrap();
        assert!(!wheat.is_grouped());
        assert_eq!(wheat.warnings().len(), 2);

        let groundnut = pack.pests("groundnut").unwrap();
        assert!(groundnut.is_grouped());
        assert_eq!(groundnut.warnings(), ["Leaf miner.".to_string()]);

        // Grouped without a default list resolves to nothing
        assert!(pack.pests("okra").unwrap().warnings().is_empty());
    }
}
