//! Form capture and validation
//!
//! `SelectionForm` holds raw, possibly blank values exactly as submitted.
//! `Selections` can only be obtained through `SelectionForm::validate`, so an
//! incomplete form never reaches the resolver.

use serde::{Deserialize, Serialize};

use super::options::{CropId, FarmSize, SeasonType, SelectionField, SoilType, WaterLevel};
use crate::error::{AdvisorError, Result};

/// Raw form submission. Any field may be missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionForm {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub soil: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub water: Option<String>,
    #[serde(default, alias = "farmSize")]
    pub farm_size: Option<String>,
}

impl SelectionForm {
    /// Value captured for a field, if non-blank
    pub fn get(&self, field: SelectionField) -> Option<&str> {
        let raw = match field {
            SelectionField::Crop => &self.crop,
            SelectionField::Soil => &self.soil,
            SelectionField::Season => &self.season,
            SelectionField::Water => &self.water,
            SelectionField::FarmSize => &self.farm_size,
        };
        raw.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Record a single-choice selection (selecting again replaces the value)
    pub fn set(&mut self, field: SelectionField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            SelectionField::Crop => self.crop = value,
            SelectionField::Soil => self.soil = value,
            SelectionField::Season => self.season = value,
            SelectionField::Water => self.water = value,
            SelectionField::FarmSize => self.farm_size = value,
        }
    }

    /// Clear every field for a new query
    pub fn reset(&mut self) {
        *self = SelectionForm::default();
    }

    /// Blank fields, in fixed field order
    pub fn missing_fields(&self) -> Vec<SelectionField> {
        SelectionField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check completeness, then parse each closed option set.
    ///
    /// Completeness is checked first so a half-filled form reports every
    /// blank field rather than the first bad value.
    pub fn validate(&self) -> Result<Selections> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AdvisorError::IncompleteSelection { missing });
        }

        let crop = self
            .get(SelectionField::Crop)
            .and_then(CropId::new)
            .ok_or_else(|| AdvisorError::IncompleteSelection {
                missing: vec![SelectionField::Crop],
            })?;

        Ok(Selections {
            crop,
            soil: self.required(SelectionField::Soil)?.parse()?,
            season: self.required(SelectionField::Season)?.parse()?,
            water: self.required(SelectionField::Water)?.parse()?,
            farm_size: self.required(SelectionField::FarmSize)?.parse()?,
        })
    }

    fn required(&self, field: SelectionField) -> Result<&str> {
        self.get(field).ok_or(AdvisorError::IncompleteSelection {
            missing: vec![field],
        })
    }
}

/// A complete, validated set of form choices
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selections {
    pub crop: CropId,
    pub soil: SoilType,
    pub season: SeasonType,
    pub water: WaterLevel,
    pub farm_size: FarmSize,
}

impl Selections {
    pub fn new(
        crop: CropId,
        soil: SoilType,
        season: SeasonType,
        water: WaterLevel,
        farm_size: FarmSize,
    ) -> Self {
        Self {
            crop,
            soil,
            season,
            water,
            farm_size,
        }
    }

    /// Convert back to a form (used to pre-fill a "new query")
    pub fn to_form(&self) -> SelectionForm {
        SelectionForm {
            crop: Some(self.crop.as_str().to_string()),
            soil: Some(self.soil.as_str().to_string()),
            season: Some(self.season.as_str().to_string()),
            water: Some(self.water.as_str().to_string()),
            farm_size: Some(self.farm_size.as_str().to_string()),
        }
    }
}
