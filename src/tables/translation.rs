//! Translation Table
//!
//! Per-language UI strings, crop names, field labels and option labels.
//! Option labels are an explicit nested mapping `field -> value -> label`
//! keyed by the typed option enums, so a missing label is a lookup miss on
//! a typed key rather than a composed string key.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::selection::{FarmSize, LanguageCode, SeasonType, SelectionField, SoilType, WaterLevel};

/// Translations for a single language
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationPack {
    /// Free-form UI strings (titles, buttons, disclaimer), keyed by UI id
    #[serde(default)]
    pub ui: FxHashMap<String, String>,

    /// Crop list in display order
    #[serde(default)]
    pub crops: Vec<CropName>,

    #[serde(default)]
    pub labels: FieldLabels,

    #[serde(default)]
    pub options: OptionLabels,

    #[serde(default)]
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropName {
    pub id: String,
    pub name: String,
}

/// Label shown next to each form field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldLabels {
    pub crop: Option<String>,
    pub soil: Option<String>,
    pub season: Option<String>,
    pub water: Option<String>,
    pub farm_size: Option<String>,
}

/// Display label for each option value, per field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionLabels {
    #[serde(default)]
    pub soil: FxHashMap<SoilType, String>,
    #[serde(default)]
    pub season: FxHashMap<SeasonType, String>,
    #[serde(default)]
    pub water: FxHashMap<WaterLevel, String>,
    #[serde(default)]
    pub farm_size: FxHashMap<FarmSize, String>,
}

/// Fixed messages used by the resolver and the selection boundary
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Messages {
    pub generic_crop_advice: Option<String>,
    pub organic_label: Option<String>,
    pub chemical_label: Option<String>,
    pub fill_all_fields: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    GenericCropAdvice,
    OrganicLabel,
    ChemicalLabel,
    FillAllFields,
}

impl MessageKey {
    /// English text used when no table provides the message
    pub fn builtin_text(&self) -> &'static str {
        match self {
            MessageKey::GenericCropAdvice => "Good combination. Follow standard practices.",
            MessageKey::OrganicLabel => "Organic:",
            MessageKey::ChemicalLabel => "Chemical:",
            MessageKey::FillAllFields => "Please fill all fields",
        }
    }
}

/// A selectable option with its localized label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionLabel {
    pub value: String,
    pub label: String,
}

impl TranslationPack {
    pub fn ui(&self, key: &str) -> Option<&str> {
        self.ui.get(key).map(String::as_str)
    }

    pub fn crop_name(&self, crop: &str) -> Option<&str> {
        self.crops
            .iter()
            .find(|c| c.id == crop)
            .map(|c| c.name.as_str())
    }

    pub fn field_label(&self, field: SelectionField) -> Option<&str> {
        let label = match field {
            SelectionField::Crop => &self.labels.crop,
            SelectionField::Soil => &self.labels.soil,
            SelectionField::Season => &self.labels.season,
            SelectionField::Water => &self.labels.water,
            SelectionField::FarmSize => &self.labels.farm_size,
        };
        label.as_deref()
    }

    pub fn soil_label(&self, soil: SoilType) -> Option<&str> {
        self.options.soil.get(&soil).map(String::as_str)
    }

    pub fn season_label(&self, season: SeasonType) -> Option<&str> {
        self.options.season.get(&season).map(String::as_str)
    }

    pub fn water_label(&self, water: WaterLevel) -> Option<&str> {
        self.options.water.get(&water).map(String::as_str)
    }

    pub fn farm_size_label(&self, farm_size: FarmSize) -> Option<&str> {
        self.options.farm_size.get(&farm_size).map(String::as_str)
    }

    pub fn message(&self, key: MessageKey) -> Option<&str> {
        let message = match key {
            MessageKey::GenericCropAdvice => &self.messages.generic_crop_advice,
            MessageKey::OrganicLabel => &self.messages.organic_label,
            MessageKey::ChemicalLabel => &self.messages.chemical_label,
            MessageKey::FillAllFields => &self.messages.fill_all_fields,
        };
        message.as_deref()
    }

    /// Options offered for a field, in canonical order. Crops follow table order.
    pub fn options_for(&self, field: SelectionField) -> Vec<OptionLabel> {
        fn collect<'a>(
            items: impl Iterator<Item = (&'static str, Option<&'a str>)>,
        ) -> Vec<OptionLabel> {
            items
                .map(|(value, label)| OptionLabel {
                    value: value.to_string(),
                    label: label.unwrap_or(value).to_string(),
                })
                .collect()
        }

        match field {
            SelectionField::Crop => self
                .crops
                .iter()
                .map(|c| OptionLabel {
                    value: c.id.clone(),
                    label: c.name.clone(),
                })
                .collect(),
            SelectionField::Soil => {
                collect(SoilType::ALL.into_iter().map(|v| (v.as_str(), self.soil_label(v))))
            }
            SelectionField::Season => {
                collect(SeasonType::ALL.into_iter().map(|v| (v.as_str(), self.season_label(v))))
            }
            SelectionField::Water => {
                collect(WaterLevel::ALL.into_iter().map(|v| (v.as_str(), self.water_label(v))))
            }
            SelectionField::FarmSize => collect(
                FarmSize::ALL
                    .into_iter()
                    .map(|v| (v.as_str(), self.farm_size_label(v))),
            ),
        }
    }

    /// Keys a complete entry must define: every field label and every option label.
    pub fn missing_keys(&self) -> Vec<String> {
        let mut missing = Vec::new();

        for field in SelectionField::ALL {
            if self.field_label(field).is_none() {
                missing.push(format!("labels.{}", field.as_str()));
            }
        }
        for soil in SoilType::ALL {
            if self.soil_label(soil).is_none() {
                missing.push(format!("options.soil.{}", soil.as_str()));
            }
        }
        for season in SeasonType::ALL {
            if self.season_label(season).is_none() {
                missing.push(format!("options.season.{}", season.as_str()));
            }
        }
        for water in WaterLevel::ALL {
            if self.water_label(water).is_none() {
                missing.push(format!("options.water.{}", water.as_str()));
            }
        }
        for farm_size in FarmSize::ALL {
            if self.farm_size_label(farm_size).is_none() {
                missing.push(format!("options.farm_size.{}", farm_size.as_str()));
            }
        }
        if self.crops.is_empty() {
            missing.push("crops".to_string());
        }

        missing
    }

    /// Log optional messages this language leaves to the English fallback
    pub(crate) fn log_fallback_messages(&self, lang: LanguageCode) {
        for key in [
            MessageKey::GenericCropAdvice,
            MessageKey::OrganicLabel,
            MessageKey::ChemicalLabel,
            MessageKey::FillAllFields,
        ] {
            if self.message(key).is_none() {
                tracing::debug!("{}: message {:?} falls back to English", lang, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> TranslationPack {
        serde_json::from_str(
            r#"{
                "ui": { "appTitle": "Advisor" },
                "crops": [ { "id": "wheat", "name": "Wheat" }, { "id": "rice", "name": "Rice" } ],
                "labels": { "crop": "Crop", "soil": "Soil", "season": "Season", "water": "Water", "farm_size": "Farm" },
                "options": {
                    "soil": { "black": "Black", "red": "Red", "sandy": "Sandy", "clay": "Clay" },
                    "season": { "kharif": "Kharif", "rabi": "Rabi", "zaid": "Zaid" },
                    "water": { "low": "Low", "medium": "Medium", "high": "High" },
                    "farm_size": { "small": "Small", "medium": "Medium", "large": "Large" }
                },
                "messages": { "organic_label": "Organic:" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_complete_pack_has_no_missing_keys() {
        assert!(pack().missing_keys().is_empty());
    }

    #[test]
    fn test_missing_option_label_is_reported() {
        let mut pack = pack();
        pack.options.water.remove(&WaterLevel::High);
        pack.labels.season = None;
        assert_eq!(
            pack.missing_keys(),
            vec!["labels.season".to_string(), "options.water.high".to_string()]
        );
    }

    #[test]
    fn test_typed_option_lookup() {
        let pack = pack();
        assert_eq!(pack.water_label(WaterLevel::Medium), Some("Medium"));
        assert_eq!(pack.farm_size_label(FarmSize::Large), Some("Large"));
        assert_eq!(pack.crop_name("rice"), Some("Rice"));
        assert_eq!(pack.crop_name("barley"), None);
    }

    #[test]
    fn test_options_for_keeps_order() {
        let pack = pack();
        let crops: Vec<_> = pack
            .options_for(SelectionField::Crop)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(crops, ["wheat", "rice"]);

        let soils = pack.options_for(SelectionField::Soil);
        assert_eq!(soils.len(), 4);
        assert_eq!(soils[0], OptionLabel { value: "black".into(), label: "Black".into() });
    }

    #[test]
    fn test_optional_messages() {
        let pack = pack();
        assert_eq!(pack.message(MessageKey::OrganicLabel), Some("Organic:"));
        assert_eq!(pack.message(MessageKey::GenericCropAdvice), None);
    }
}
