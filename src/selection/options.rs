//! Closed option sets for the farm form
//!
//! Soil, season, water and farm size are small fixed enumerations. Their
//! lowercase identifiers (`black`, `kharif`, `medium`, ...) are the keys used
//! in both data tables and in form submissions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Form fields, in the fixed order used for summaries and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionField {
    Crop,
    Soil,
    Season,
    Water,
    FarmSize,
}

impl SelectionField {
    pub const ALL: [SelectionField; 5] = [
        SelectionField::Crop,
        SelectionField::Soil,
        SelectionField::Season,
        SelectionField::Water,
        SelectionField::FarmSize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionField::Crop => "crop",
            SelectionField::Soil => "soil",
            SelectionField::Season => "season",
            SelectionField::Water => "water",
            SelectionField::FarmSize => "farm_size",
        }
    }

    /// Fixed summary glyph for this field
    pub fn icon(&self) -> &'static str {
        match self {
            SelectionField::Crop => "🌾",
            SelectionField::Soil => "🏔️",
            SelectionField::Season => "🗓️",
            SelectionField::Water => "💧",
            SelectionField::FarmSize => "📐",
        }
    }
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soil type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Black,
    Red,
    Sandy,
    Clay,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [SoilType::Black, SoilType::Red, SoilType::Sandy, SoilType::Clay];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Black => "black",
            SoilType::Red => "red",
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
        }
    }
}

impl FromStr for SoilType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "black" => Ok(SoilType::Black),
            "red" => Ok(SoilType::Red),
            "sandy" => Ok(SoilType::Sandy),
            "clay" => Ok(SoilType::Clay),
            other => Err(invalid(SelectionField::Soil, other)),
        }
    }
}

/// Cropping season (Indian agricultural calendar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    /// Monsoon crop, June to October
    Kharif,
    /// Winter crop, November to March
    Rabi,
    /// Summer crop between rabi and kharif
    Zaid,
}

impl SeasonType {
    pub const ALL: [SeasonType; 3] = [SeasonType::Kharif, SeasonType::Rabi, SeasonType::Zaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Kharif => "kharif",
            SeasonType::Rabi => "rabi",
            SeasonType::Zaid => "zaid",
        }
    }
}

impl FromStr for SeasonType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kharif" => Ok(SeasonType::Kharif),
            "rabi" => Ok(SeasonType::Rabi),
            "zaid" => Ok(SeasonType::Zaid),
            other => Err(invalid(SelectionField::Season, other)),
        }
    }
}

/// Water availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterLevel {
    Low,
    Medium,
    High,
}

impl WaterLevel {
    pub const ALL: [WaterLevel; 3] = [WaterLevel::Low, WaterLevel::Medium, WaterLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterLevel::Low => "low",
            WaterLevel::Medium => "medium",
            WaterLevel::High => "high",
        }
    }
}

impl FromStr for WaterLevel {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(WaterLevel::Low),
            "medium" => Ok(WaterLevel::Medium),
            "high" => Ok(WaterLevel::High),
            other => Err(invalid(SelectionField::Water, other)),
        }
    }
}

/// Farm size band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmSize {
    /// Under 2 acres
    Small,
    /// 2 to 10 acres
    Medium,
    /// Over 10 acres
    Large,
}

impl FarmSize {
    pub const ALL: [FarmSize; 3] = [FarmSize::Small, FarmSize::Medium, FarmSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            FarmSize::Small => "small",
            FarmSize::Medium => "medium",
            FarmSize::Large => "large",
        }
    }
}

impl FromStr for FarmSize {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "small" => Ok(FarmSize::Small),
            "medium" => Ok(FarmSize::Medium),
            "large" => Ok(FarmSize::Large),
            other => Err(invalid(SelectionField::FarmSize, other)),
        }
    }
}

/// Crop identifier (free-form key into the crop list kept with translations)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropId(String);

impl CropId {
    /// Returns None for blank identifiers.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == id.len() {
            Some(CropId(id))
        } else {
            Some(CropId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn invalid(field: SelectionField, value: &str) -> AdvisorError {
    AdvisorError::InvalidOption {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_identifiers() {
        for soil in SoilType::ALL {
            assert_eq!(soil.as_str().parse::<SoilType>().unwrap(), soil);
        }
        for farm in FarmSize::ALL {
            assert_eq!(farm.as_str().parse::<FarmSize>().unwrap(), farm);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        let err = "loam".parse::<SoilType>().unwrap_err();
        match err {
            AdvisorError::InvalidOption { field, value } => {
                assert_eq!(field, SelectionField::Soil);
                assert_eq!(value, "loam");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!("Medium".parse::<WaterLevel>().is_err());
    }

    #[test]
    fn test_enum_keys_deserialize_lowercase() {
        let season: SeasonType = serde_json::from_str("\"zaid\"").unwrap();
        assert_eq!(season, SeasonType::Zaid);
        let field: SelectionField = serde_json::from_str("\"farm_size\"").unwrap();
        assert_eq!(field, SelectionField::FarmSize);
    }

    #[test]
    fn test_crop_id_rejects_blank() {
        assert!(CropId::new("").is_none());
        assert!(CropId::new("   ").is_none());
        assert_eq!(CropId::new(" wheat ").unwrap().as_str(), "wheat");
    }

    #[test]
    fn test_field_order_is_fixed() {
        let names: Vec<_> = SelectionField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["crop", "soil", "season", "water", "farm_size"]);
    }
}
