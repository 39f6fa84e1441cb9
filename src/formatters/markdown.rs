use crate::resolver::{AdviceBundle, ReportLabels};

/// Markdown formatter for advice bundles (printable report)
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a bundle as a markdown report with localized section titles
    pub fn format(bundle: &AdviceBundle, labels: &ReportLabels) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str(&format!("# {}\n\n", labels.app_title));

        // Summary table
        md.push_str(&format!("## {}\n\n", labels.summary_title));
        md.push_str("| | | |\n|---|---|---|\n");
        for row in &bundle.summary {
            md.push_str(&format!("| {} | {} | **{}** |\n", row.icon, row.label, row.value));
        }
        md.push('\n');

        md.push_str(&format!("## {}\n\n", labels.crop_advice_title));
        md.push_str(&format!("- {}\n\n", bundle.crop_advice));

        Self::format_list(&mut md, &labels.irrigation_title, &bundle.irrigation_tips);

        // Fertilizer groups always render, each under its own label
        let fertilizer = &bundle.fertilizer_advice;
        md.push_str(&format!("## {}\n\n", labels.fertilizer_title));
        md.push_str(&format!("**{}**\n\n", fertilizer.organic_label));
        for tip in &fertilizer.organic {
            md.push_str(&format!("- {}\n", tip));
        }
        md.push_str(&format!("\n**{}**\n\n", fertilizer.chemical_label));
        for tip in &fertilizer.chemical {
            md.push_str(&format!("- {}\n", tip));
        }
        md.push('\n');

        Self::format_list(&mut md, &labels.pest_title, &bundle.pest_warnings);
        Self::format_list(&mut md, &labels.tips_title, &bundle.farm_size_tips);

        md.push_str("---\n\n");
        md.push_str(&format!("*{}*\n\n", labels.disclaimer));
        md.push_str(&format!("{}\n", labels.footer));

        md
    }

    /// Section heading plus bullet list. Empty lists keep the heading only.
    fn format_list(md: &mut String, title: &str, items: &[String]) {
        md.push_str(&format!("## {}\n\n", title));
        for item in items {
            md.push_str(&format!("- {}\n", item));
        }
        md.push('\n');
    }
}
