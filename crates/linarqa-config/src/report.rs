//! Report configuration.
//!
//! # Configuration
//!
//! - `LINARQA_DATA_DIR`: Directory relative input paths are resolved against (default: ".")
//! - `LINARQA_CURRENCY`: Currency code appended to amounts (default: "MAD")
//! - `LINARQA_HISTORY_MONTHS`: Month buckets shown in the payment history (default: 12)
//!
//! Unset or unparsable values fall back to the defaults.

use std::path::{Path, PathBuf};

const DEFAULT_CURRENCY: &str = "MAD";
const DEFAULT_HISTORY_MONTHS: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub data_dir: PathBuf,
    pub currency: String,
    /// Zero shows every month
    pub history_months: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            currency: DEFAULT_CURRENCY.to_string(),
            history_months: DEFAULT_HISTORY_MONTHS,
        }
    }
}

impl ReportConfig {
    /// Creates a new `ReportConfig` from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so it can be tested without
    /// touching the process environment.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            data_dir: non_blank("LINARQA_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            currency: non_blank("LINARQA_CURRENCY")
                .map(|v| v.trim().to_uppercase())
                .unwrap_or(defaults.currency),
            history_months: non_blank("LINARQA_HISTORY_MONTHS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.history_months),
        }
    }

    /// Resolves `path` against `data_dir` unless it is absolute.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.currency, "MAD");
        assert_eq!(config.history_months, 12);
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        assert_eq!(ReportConfig::from_lookup(|_| None), ReportConfig::default());
    }

    #[test]
    fn test_values_from_lookup() {
        let config = ReportConfig::from_lookup(lookup(&[
            ("LINARQA_DATA_DIR", "/srv/exports"),
            ("LINARQA_CURRENCY", "eur"),
            ("LINARQA_HISTORY_MONTHS", "6"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/srv/exports"));
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.history_months, 6);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ReportConfig::from_lookup(lookup(&[
            ("LINARQA_CURRENCY", "  "),
            ("LINARQA_HISTORY_MONTHS", "many"),
        ]));
        assert_eq!(config.currency, "MAD");
        assert_eq!(config.history_months, 12);
    }

    #[test]
    fn test_resolve() {
        let config = ReportConfig {
            data_dir: PathBuf::from("exports"),
            ..Default::default()
        };
        assert_eq!(config.resolve("courses.json"), PathBuf::from("exports/courses.json"));
        assert_eq!(config.resolve("/tmp/courses.json"), PathBuf::from("/tmp/courses.json"));
    }
}
