use askama::Template;

use crate::resolver::{AdviceBundle, ReportLabels};

/// Print page template (`templates/advice_print.html`). Askama escapes every
/// interpolated value.
#[derive(Template)]
#[template(path = "advice_print.html")]
struct PrintPageTemplate<'a> {
    lang: &'a str,
    labels: &'a ReportLabels,
    bundle: &'a AdviceBundle,
}

/// HTML formatter for advice bundles
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format a bundle as a standalone print page with embedded CSS
    pub fn format(
        bundle: &AdviceBundle,
        labels: &ReportLabels,
        lang: &str,
    ) -> Result<String, askama::Error> {
        PrintPageTemplate {
            lang,
            labels,
            bundle,
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{FertilizerAdvice, SummaryRow};
    use crate::selection::SelectionField;

    fn labels() -> ReportLabels {
        ReportLabels {
            app_title: "Smart Farming Advisor".to_string(),
            summary_title: "Your Selections".to_string(),
            crop_advice_title: "Crop Suitability".to_string(),
            irrigation_title: "Irrigation Advice".to_string(),
            fertilizer_title: "Fertilizer Recommendations".to_string(),
            pest_title: "Pest & Disease Warnings".to_string(),
            tips_title: "Farm Management Tips".to_string(),
            disclaimer: "General guidance only.".to_string(),
            footer: "Footer".to_string(),
        }
    }

    fn bundle() -> AdviceBundle {
        AdviceBundle {
            summary: vec![SummaryRow {
                field: SelectionField::Water,
                icon: "💧".to_string(),
                label: "Water Availability".to_string(),
                value: "Low".to_string(),
            }],
            crop_advice: "Good combination. Follow standard practices.".to_string(),
            irrigation_tips: vec!["Use drip irrigation.".to_string()],
            fertilizer_advice: FertilizerAdvice {
                organic_label: "Organic:".to_string(),
                organic: vec!["FYM.".to_string()],
                chemical_label: "Chemical:".to_string(),
                chemical: vec![],
            },
            pest_warnings: vec![],
            farm_size_tips: vec![],
        }
    }

    #[test]
    fn test_format_html() {
        let html = HtmlFormatter::format(&bundle(), &labels(), "en").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<span class=\"summary-value\">Low</span>"));
        assert!(html.contains("<li><strong>Organic:</strong></li>\n<li>FYM.</li>"));
        assert!(html.contains("<li>Use drip irrigation.</li>"));
        assert!(html.contains("<h2>Pest &amp; Disease Warnings</h2>"));
    }

    #[test]
    fn test_table_text_is_escaped() {
        let mut bundle = bundle();
        bundle.irrigation_tips = vec!["<script>alert(1)</script> N & P".to_string()];

        let html = HtmlFormatter::format(&bundle, &labels(), "en").unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("N &amp; P"));
    }
}
