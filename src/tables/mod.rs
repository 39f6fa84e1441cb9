//! Static Data Tables
//!
//! The advice content lives in two JSON documents, both keyed by language
//! code at the top level:
//! - `data/translations.json` - UI strings, crop names, field/option labels
//! - `data/advisory.json` - crop suitability, irrigation, fertilizer, pests, tips
//!
//! The bundled copies are compiled in; `DataTables::from_dir` loads edited
//! copies at runtime. Loading checks that every supported language has an
//! entry in both tables and that each translation entry is complete, so a
//! constructed `DataTables` can serve any `LanguageCode`.

pub mod translation;
pub mod advisory;

use std::path::Path;

use rustc_hash::FxHashMap;

pub use advisory::{AdvisoryPack, FertilizerTable, PestEntry};
pub use translation::{CropName, MessageKey, OptionLabel, TranslationPack};

use crate::error::{AdvisorError, Result};
use crate::selection::LanguageCode;

pub const TRANSLATIONS_FILE: &str = "translations.json";
pub const ADVISORY_FILE: &str = "advisory.json";

static BUNDLED_TRANSLATIONS: &str = include_str!("../../data/translations.json");
static BUNDLED_ADVISORY: &str = include_str!("../../data/advisory.json");

/// Both tables for one language
#[derive(Debug, Clone)]
pub struct LanguageTables {
    pub lang: LanguageCode,
    pub translation: TranslationPack,
    pub advisory: AdvisoryPack,
}

/// Validated tables for every supported language
#[derive(Debug, Clone)]
pub struct DataTables {
    /// One entry per `LanguageCode`, in `LanguageCode::ALL` order
    languages: Vec<LanguageTables>,
}

impl DataTables {
    /// Tables compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_TRANSLATIONS, BUNDLED_ADVISORY)
    }

    /// Load `translations.json` and `advisory.json` from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        tracing::info!("Loading advisory tables from {}", dir.display());

        let translations = read_table(&dir.join(TRANSLATIONS_FILE))?;
        let advisory = read_table(&dir.join(ADVISORY_FILE))?;
        Self::from_json(&translations, &advisory)
    }

    /// Parse and validate both tables from JSON text
    pub fn from_json(translations: &str, advisory: &str) -> Result<Self> {
        let mut translation_table: FxHashMap<String, TranslationPack> =
            serde_json::from_str(translations).map_err(|source| AdvisorError::Json {
                table: "translation",
                source,
            })?;
        let mut advisory_table: FxHashMap<String, AdvisoryPack> =
            serde_json::from_str(advisory).map_err(|source| AdvisorError::Json {
                table: "advisory",
                source,
            })?;

        let mut languages = Vec::with_capacity(LanguageCode::ALL.len());
        for lang in LanguageCode::ALL {
            let translation = translation_table
                .remove(lang.as_str())
                .ok_or(AdvisorError::MissingLanguage {
                    table: "translation",
                    lang,
                })?;
            let advisory = advisory_table
                .remove(lang.as_str())
                .ok_or(AdvisorError::MissingLanguage {
                    table: "advisory",
                    lang,
                })?;

            if let Some(key) = translation.missing_keys().into_iter().next() {
                return Err(AdvisorError::IncompleteTranslation { lang, key });
            }
            translation.log_fallback_messages(lang);

            tracing::debug!(
                "{}: {} crops, {} suitability crops, {} pest entries",
                lang,
                translation.crops.len(),
                advisory.crop_suitability.len(),
                advisory.pests.len()
            );

            languages.push(LanguageTables {
                lang,
                translation,
                advisory,
            });
        }

        for code in translation_table.keys().chain(advisory_table.keys()) {
            tracing::warn!("Ignoring unsupported language '{}' in data tables", code);
        }

        Ok(Self { languages })
    }

    pub fn get(&self, lang: LanguageCode) -> &LanguageTables {
        &self.languages[lang.index()]
    }

    pub fn translation(&self, lang: LanguageCode) -> &TranslationPack {
        &self.get(lang).translation
    }

    pub fn advisory(&self, lang: LanguageCode) -> &AdvisoryPack {
        &self.get(lang).advisory
    }
}

fn read_table(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| AdvisorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_tables_cover_every_language() {
        let tables = DataTables::bundled().unwrap();
        for lang in LanguageCode::ALL {
            assert_eq!(tables.get(lang).lang, lang);
            assert!(tables.translation(lang).missing_keys().is_empty());
            assert!(!tables.advisory(lang).fertilizer.organic.is_empty());
        }
    }

    #[test]
    fn test_bundled_crop_lists_match_across_languages() {
        let tables = DataTables::bundled().unwrap();
        let english: Vec<_> = tables
            .translation(LanguageCode::En)
            .crops
            .iter()
            .map(|c| c.id.clone())
            .collect();
        for lang in LanguageCode::ALL {
            let ids: Vec<_> = tables
                .translation(lang)
                .crops
                .iter()
                .map(|c| c.id.clone())
                .collect();
            assert_eq!(ids, english, "crop list differs for {lang}");
        }
    }

    #[test]
    fn test_missing_language_is_rejected() {
        let translations = BUNDLED_TRANSLATIONS;
        let mut advisory: serde_json::Value = serde_json::from_str(BUNDLED_ADVISORY).unwrap();
        advisory.as_object_mut().unwrap().remove("mr");

        let err = DataTables::from_json(translations, &advisory.to_string()).unwrap_err();
        match err {
            AdvisorError::MissingLanguage { table, lang } => {
                assert_eq!(table, "advisory");
                assert_eq!(lang, LanguageCode::Mr);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_incomplete_translation_is_rejected() {
        let mut translations: serde_json::Value =
            serde_json::from_str(BUNDLED_TRANSLATIONS).unwrap();
        translations["gu"]["options"]["season"]
            .as_object_mut()
            .unwrap()
            .remove("zaid");

        let err = DataTables::from_json(&translations.to_string(), BUNDLED_ADVISORY).unwrap_err();
        match err {
            AdvisorError::IncompleteTranslation { lang, key } => {
                assert_eq!(lang, LanguageCode::Gu);
                assert_eq!(key, "options.season.zaid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_names_the_table() {
        let err = DataTables::from_json(BUNDLED_TRANSLATIONS, "{ not json").unwrap_err();
        assert!(matches!(err, AdvisorError::Json { table: "advisory", .. }));
    }

    #[test]
    fn test_from_dir_reports_missing_file() {
        let err = DataTables::from_dir("/nonexistent/advisor-data").unwrap_err();
        match err {
            AdvisorError::Io { path, .. } => assert!(path.ends_with(TRANSLATIONS_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
