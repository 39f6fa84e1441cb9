use crate::resolver::AdviceBundle;

/// JSON formatter for advice bundles
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format bundle as pretty-printed JSON
    pub fn format(bundle: &AdviceBundle) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(bundle)
    }
}
