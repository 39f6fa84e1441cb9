//! Server configuration from environment variables
//!
//! - `PORT` - listen port (default 3000)
//! - `ADVISOR_DATA_DIR` - directory holding `translations.json` and
//!   `advisory.json`; unset means the compiled-in tables
//! - `RESULT_DELAY_MS` - pause before advice is returned (default 2000, 0 disables)

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RESULT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub data_dir: Option<PathBuf>,
    pub result_delay: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: None,
            result_delay: Duration::from_millis(DEFAULT_RESULT_DELAY_MS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let data_dir = lookup("ADVISOR_DATA_DIR")
            .map(|dir| dir.trim().to_string())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let delay_ms = match lookup("RESULT_DELAY_MS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid RESULT_DELAY_MS {:?}, using {}",
                    raw,
                    DEFAULT_RESULT_DELAY_MS
                );
                DEFAULT_RESULT_DELAY_MS
            }),
            None => DEFAULT_RESULT_DELAY_MS,
        };

        Self {
            port,
            data_dir,
            result_delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn log(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  PORT: {}", self.port);
        match &self.data_dir {
            Some(dir) => tracing::info!("  ADVISOR_DATA_DIR: {}", dir.display()),
            None => tracing::info!("  ADVISOR_DATA_DIR: (bundled tables)"),
        }
        tracing::info!("  RESULT_DELAY_MS: {}", self.result_delay.as_millis());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.result_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_reads_all_vars() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("ADVISOR_DATA_DIR", "/srv/advisor"),
            ("RESULT_DELAY_MS", "0"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/advisor")));
        assert_eq!(config.result_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("ADVISOR_DATA_DIR", "  "),
            ("RESULT_DELAY_MS", "-5"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
