//! Supported interface languages
//!
//! The set is closed: adding a language means adding a variant here plus
//! complete entries in both data tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Gu,
    Mr,
    Ta,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Gu,
        LanguageCode::Mr,
        LanguageCode::Ta,
    ];

    /// Language used when a localized string is missing
    pub const FALLBACK: LanguageCode = LanguageCode::En;

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Gu => "gu",
            LanguageCode::Mr => "mr",
            LanguageCode::Ta => "ta",
        }
    }

    /// Name of the language written in that language (language picker badge)
    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "हिंदी",
            LanguageCode::Gu => "ગુજરાતી",
            LanguageCode::Mr => "मराठी",
            LanguageCode::Ta => "தமிழ்",
        }
    }

    /// Position in `ALL`
    pub(crate) fn index(&self) -> usize {
        match self {
            LanguageCode::En => 0,
            LanguageCode::Hi => 1,
            LanguageCode::Gu => 2,
            LanguageCode::Mr => 3,
            LanguageCode::Ta => 4,
        }
    }
}

impl FromStr for LanguageCode {
    type Err = AdvisorError;

    /// Accepts bare codes and one region subtag (`hi`, `hi-IN`, `ta_IN`, `en-419`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || AdvisorError::UnsupportedLanguageCode(s.to_string());

        let lower = s.trim().replace('_', "-").to_ascii_lowercase();
        let mut subtags = lower.split('-');
        let primary = subtags.next().unwrap_or_default();
        if let Some(region) = subtags.next() {
            if !is_region_subtag(region) {
                return Err(unsupported());
            }
        }
        if subtags.next().is_some() {
            return Err(unsupported());
        }

        match primary {
            "en" => Ok(LanguageCode::En),
            "hi" => Ok(LanguageCode::Hi),
            "gu" => Ok(LanguageCode::Gu),
            "mr" => Ok(LanguageCode::Mr),
            "ta" => Ok(LanguageCode::Ta),
            _ => Err(unsupported()),
        }
    }
}

/// Two letters (`IN`) or three digits (`419`)
fn is_region_subtag(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_codes() {
        for lang in LanguageCode::ALL {
            assert_eq!(lang.as_str().parse::<LanguageCode>().unwrap(), lang);
        }
    }

    #[test]
    fn test_parse_normalizes_region_variants() {
        assert_eq!("hi-IN".parse::<LanguageCode>().unwrap(), LanguageCode::Hi);
        assert_eq!("TA_in".parse::<LanguageCode>().unwrap(), LanguageCode::Ta);
        assert_eq!(" en ".parse::<LanguageCode>().unwrap(), LanguageCode::En);
        assert_eq!("en-419".parse::<LanguageCode>().unwrap(), LanguageCode::En);
    }

    #[test]
    fn test_parse_rejects_malformed_region() {
        for code in ["en-", "en-garbage", "hi-I$", "ta-IN-x", "mr--IN"] {
            match code.parse::<LanguageCode>() {
                Err(AdvisorError::UnsupportedLanguageCode(raw)) => assert_eq!(raw, code),
                other => panic!("expected rejection for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_rejects_unsupported() {
        for code in ["fr", "", "english", "-"] {
            match code.parse::<LanguageCode>() {
                Err(AdvisorError::UnsupportedLanguageCode(raw)) => assert_eq!(raw, code),
                other => panic!("expected rejection for {code:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, lang) in LanguageCode::ALL.iter().enumerate() {
            assert_eq!(lang.index(), i);
        }
    }
}
