//! Advice output structs
//!
//! An `AdviceBundle` is the complete, render-ready result of one resolution.
//! Every field is always present; lists may be empty.

use serde::{Deserialize, Serialize};

use crate::selection::SelectionField;

/// Most organic / chemical fertilizer entries shown per group
pub const MAX_FERTILIZER_TIPS: usize = 3;

/// Most pest warnings shown
pub const MAX_PEST_WARNINGS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceBundle {
    /// One row per selection field, in fixed field order
    pub summary: Vec<SummaryRow>,
    pub crop_advice: String,
    pub irrigation_tips: Vec<String>,
    pub fertilizer_advice: FertilizerAdvice,
    pub pest_warnings: Vec<String>,
    pub farm_size_tips: Vec<String>,
}

/// Summary row: icon, localized field label, localized selected value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub field: SelectionField,
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerAdvice {
    pub organic_label: String,
    pub organic: Vec<String>,
    pub chemical_label: String,
    pub chemical: Vec<String>,
}

/// Localized section titles and page text for rendering a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLabels {
    pub app_title: String,
    pub summary_title: String,
    pub crop_advice_title: String,
    pub irrigation_title: String,
    pub fertilizer_title: String,
    pub pest_title: String,
    pub tips_title: String,
    pub disclaimer: String,
    pub footer: String,
}

impl AdviceBundle {
    /// Summary row for a field
    pub fn summary_row(&self, field: SelectionField) -> Option<&SummaryRow> {
        self.summary.iter().find(|row| row.field == field)
    }
}
