//! Advice Resolver
//!
//! Maps validated selections plus a language to an `AdviceBundle` using
//! nothing but table lookups. Each category falls back on its own when the
//! combination is unauthored:
//! - crop suitability -> the language's generic message (English if absent)
//! - irrigation, farm-size tips, pests -> empty list
//! - fertilizer -> first 3 organic and first 3 chemical entries
//! - pests -> `default` list for grouped entries, first 4 entries
//!
//! Resolution is pure: the tables are read-only after construction.

use std::path::Path;

use super::bundle::{
    AdviceBundle, FertilizerAdvice, ReportLabels, SummaryRow, MAX_FERTILIZER_TIPS,
    MAX_PEST_WARNINGS,
};
use crate::error::Result;
use crate::selection::{LanguageCode, SelectionField, SelectionForm, Selections};
use crate::tables::{DataTables, MessageKey, OptionLabel, TranslationPack};

/// The advice engine. Cheap to share behind an `Arc`; never mutated.
#[derive(Debug, Clone)]
pub struct Advisor {
    tables: DataTables,
}

impl Advisor {
    pub fn new(tables: DataTables) -> Self {
        Self { tables }
    }

    /// Advisor over the tables compiled into the crate
    pub fn bundled() -> Result<Self> {
        DataTables::bundled().map(Self::new)
    }

    /// Advisor over tables loaded from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        DataTables::from_dir(dir).map(Self::new)
    }

    pub fn tables(&self) -> &DataTables {
        &self.tables
    }

    /// Resolve advice for a complete selection
    pub fn resolve(&self, selections: &Selections, lang: LanguageCode) -> AdviceBundle {
        AdviceBundle {
            summary: self.build_summary(selections, lang),
            crop_advice: self.crop_advice(selections, lang),
            irrigation_tips: self.irrigation_tips(selections, lang),
            fertilizer_advice: self.fertilizer_advice(lang),
            pest_warnings: self.pest_warnings(selections, lang),
            farm_size_tips: self.farm_size_tips(selections, lang),
        }
    }

    /// Resolve with a raw language code. Unsupported codes are rejected
    /// before any table is touched.
    pub fn resolve_code(&self, selections: &Selections, code: &str) -> Result<AdviceBundle> {
        let lang: LanguageCode = code.parse()?;
        Ok(self.resolve(selections, lang))
    }

    /// Validate a raw form submission, then resolve it
    pub fn submit(&self, form: &SelectionForm, lang: LanguageCode) -> Result<AdviceBundle> {
        let selections = form.validate()?;
        tracing::debug!(
            "Resolving advice: lang={} crop={} soil={} season={} water={} farm_size={}",
            lang,
            selections.crop,
            selections.soil.as_str(),
            selections.season.as_str(),
            selections.water.as_str(),
            selections.farm_size.as_str()
        );
        Ok(self.resolve(&selections, lang))
    }

    // ========================================================================
    // Category lookups
    // ========================================================================

    fn crop_advice(&self, selections: &Selections, lang: LanguageCode) -> String {
        let advisory = self.tables.advisory(lang);
        match advisory.suitability(selections.crop.as_str(), selections.soil) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(
                    "{}: no suitability entry for {}/{}, using generic advice",
                    lang,
                    selections.crop,
                    selections.soil.as_str()
                );
                self.message(lang, MessageKey::GenericCropAdvice).to_string()
            }
        }
    }

    fn irrigation_tips(&self, selections: &Selections, lang: LanguageCode) -> Vec<String> {
        match self.tables.advisory(lang).irrigation(selections.water) {
            Some(tips) => tips.to_vec(),
            None => {
                tracing::debug!("{}: no irrigation tips for {}", lang, selections.water.as_str());
                Vec::new()
            }
        }
    }

    fn fertilizer_advice(&self, lang: LanguageCode) -> FertilizerAdvice {
        let fertilizer = &self.tables.advisory(lang).fertilizer;
        FertilizerAdvice {
            organic_label: self.message(lang, MessageKey::OrganicLabel).to_string(),
            organic: first_n(&fertilizer.organic, MAX_FERTILIZER_TIPS),
            chemical_label: self.message(lang, MessageKey::ChemicalLabel).to_string(),
            chemical: first_n(&fertilizer.chemical, MAX_FERTILIZER_TIPS),
        }
    }

    fn pest_warnings(&self, selections: &Selections, lang: LanguageCode) -> Vec<String> {
        match self.tables.advisory(lang).pests(selections.crop.as_str()) {
            Some(entry) => first_n(entry.warnings(), MAX_PEST_WARNINGS),
            None => {
                tracing::debug!("{}: no pest entry for {}", lang, selections.crop);
                Vec::new()
            }
        }
    }

    fn farm_size_tips(&self, selections: &Selections, lang: LanguageCode) -> Vec<String> {
        match self.tables.advisory(lang).tips(selections.farm_size) {
            Some(tips) => tips.to_vec(),
            None => {
                tracing::debug!("{}: no tips for {} farms", lang, selections.farm_size.as_str());
                Vec::new()
            }
        }
    }

    fn build_summary(&self, selections: &Selections, lang: LanguageCode) -> Vec<SummaryRow> {
        let translation = self.tables.translation(lang);

        SelectionField::ALL
            .into_iter()
            .map(|field| SummaryRow {
                field,
                icon: field.icon().to_string(),
                label: self.field_label(lang, field).to_string(),
                value: selected_value_label(translation, selections, field),
            })
            .collect()
    }

    // ========================================================================
    // Localized strings for the presentation layer
    // ========================================================================

    /// Fixed message in `lang`, else English, else the built-in English text
    pub fn message(&self, lang: LanguageCode, key: MessageKey) -> &str {
        self.tables
            .translation(lang)
            .message(key)
            .or_else(|| self.tables.translation(LanguageCode::FALLBACK).message(key))
            .unwrap_or(key.builtin_text())
    }

    /// Localized "please fill all fields" notice for an incomplete form
    pub fn incomplete_message(&self, lang: LanguageCode) -> &str {
        self.message(lang, MessageKey::FillAllFields)
    }

    /// UI string in `lang`, else English, else the key itself
    pub fn ui_text<'a>(&'a self, lang: LanguageCode, key: &'a str) -> &'a str {
        self.tables
            .translation(lang)
            .ui(key)
            .or_else(|| self.tables.translation(LanguageCode::FALLBACK).ui(key))
            .unwrap_or(key)
    }

    pub fn field_label(&self, lang: LanguageCode, field: SelectionField) -> &str {
        self.tables
            .translation(lang)
            .field_label(field)
            .unwrap_or(field.as_str())
    }

    /// Crop choices with localized names, in table order
    pub fn crop_options(&self, lang: LanguageCode) -> Vec<OptionLabel> {
        self.option_labels(lang, SelectionField::Crop)
    }

    pub fn option_labels(&self, lang: LanguageCode, field: SelectionField) -> Vec<OptionLabel> {
        self.tables.translation(lang).options_for(field)
    }

    /// Section titles and page text for rendering a bundle in `lang`
    pub fn report_labels(&self, lang: LanguageCode) -> ReportLabels {
        let text = |key: &str| self.ui_text(lang, key).to_string();
        ReportLabels {
            app_title: text("appTitle"),
            summary_title: text("summaryTitle"),
            crop_advice_title: text("cropAdviceTitle"),
            irrigation_title: text("irrigationTitle"),
            fertilizer_title: text("fertilizerTitle"),
            pest_title: text("pestTitle"),
            tips_title: text("tipsTitle"),
            disclaimer: text("disclaimerText"),
            footer: text("footerText"),
        }
    }
}

/// Display string for the selected value of a field. Unlisted crops show their id.
fn selected_value_label(
    translation: &TranslationPack,
    selections: &Selections,
    field: SelectionField,
) -> String {
    let label = match field {
        SelectionField::Crop => translation
            .crop_name(selections.crop.as_str())
            .unwrap_or(selections.crop.as_str()),
        SelectionField::Soil => translation
            .soil_label(selections.soil)
            .unwrap_or(selections.soil.as_str()),
        SelectionField::Season => translation
            .season_label(selections.season)
            .unwrap_or(selections.season.as_str()),
        SelectionField::Water => translation
            .water_label(selections.water)
            .unwrap_or(selections.water.as_str()),
        SelectionField::FarmSize => translation
            .farm_size_label(selections.farm_size)
            .unwrap_or(selections.farm_size.as_str()),
    };
    label.to_string()
}

fn first_n(items: &[String], n: usize) -> Vec<String> {
    items.iter().take(n).cloned().collect()
}
