//! Error types for the farming advisor.
//!
//! Missing advisory entries are never errors: the resolver absorbs them
//! with fallbacks. Errors only come from the selection boundary (incomplete
//! or unparseable form input), unsupported language codes, and table loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::selection::{LanguageCode, SelectionField};

#[derive(Debug, Error)]
pub enum AdvisorError {
    /// One or more form fields were left blank.
    #[error("incomplete selection: missing {}", join_fields(.missing))]
    IncompleteSelection { missing: Vec<SelectionField> },

    /// A field held a value outside its closed option set.
    #[error("invalid {field} option: {value:?}")]
    InvalidOption { field: SelectionField, value: String },

    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguageCode(String),

    /// A supported language has no entry in one of the data tables.
    #[error("{table} table has no entry for language '{lang}'")]
    MissingLanguage {
        table: &'static str,
        lang: LanguageCode,
    },

    /// A language entry exists but lacks a required label.
    #[error("translation table for '{lang}' is missing {key}")]
    IncompleteTranslation { lang: LanguageCode, key: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {table} table: {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AdvisorError {
    /// True for errors caused by user input rather than configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::IncompleteSelection { .. }
                | AdvisorError::InvalidOption { .. }
                | AdvisorError::UnsupportedLanguageCode(_)
        )
    }
}

fn join_fields(fields: &[SelectionField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_selection_lists_fields() {
        let err = AdvisorError::IncompleteSelection {
            missing: vec![SelectionField::Soil, SelectionField::FarmSize],
        };
        assert_eq!(err.to_string(), "incomplete selection: missing soil, farm_size");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_table_errors_are_not_user_errors() {
        let err = AdvisorError::MissingLanguage {
            table: "advisory",
            lang: LanguageCode::Ta,
        };
        assert_eq!(err.to_string(), "advisory table has no entry for language 'ta'");
        assert!(!err.is_user_error());
    }
}
