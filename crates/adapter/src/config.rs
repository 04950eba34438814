//! Host configuration from environment variables.
//!
//! - `CHARADES_SEED`: word-order seed (default: derived from the clock)
//! - `CHARADES_HAPTICS_DISABLED`: `1` or `true` turns buzz playback off
//! - `CHARADES_LOG_FILE`: write logs to this file (default: no logging)
//! - `CHARADES_SUMMARY`: `json` prints a summary line on exit

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    None,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub haptics_enabled: bool,
    pub log_file: Option<PathBuf>,
    pub summary: SummaryFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = match var("CHARADES_SEED") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("CHARADES_SEED must be a u32, got {v:?}"))?,
            None => clock_seed(),
        };

        let haptics_enabled = !var("CHARADES_HAPTICS_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_file = var("CHARADES_LOG_FILE").map(PathBuf::from);

        let summary = match var("CHARADES_SUMMARY").as_deref() {
            None => SummaryFormat::None,
            Some(v) if v.eq_ignore_ascii_case("json") => SummaryFormat::Json,
            Some(v) => bail!("CHARADES_SUMMARY must be \"json\", got {v:?}"),
        };

        Ok(Self {
            seed,
            haptics_enabled,
            log_file,
            summary,
        })
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert!(cfg.haptics_enabled);
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.summary, SummaryFormat::None);
    }

    #[test]
    fn explicit_values() {
        let cfg = config(&[
            ("CHARADES_SEED", "42"),
            ("CHARADES_HAPTICS_DISABLED", "TRUE"),
            ("CHARADES_LOG_FILE", "/tmp/charades.log"),
            ("CHARADES_SUMMARY", "json"),
        ])
        .unwrap();
        assert_eq!(cfg.seed, 42);
        assert!(!cfg.haptics_enabled);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/charades.log")));
        assert_eq!(cfg.summary, SummaryFormat::Json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = config(&[
            ("CHARADES_LOG_FILE", "  "),
            ("CHARADES_HAPTICS_DISABLED", "0"),
        ])
        .unwrap();
        assert_eq!(cfg.log_file, None);
        assert!(cfg.haptics_enabled);
    }

    #[test]
    fn bad_seed_names_the_variable() {
        let err = config(&[("CHARADES_SEED", "abc")]).unwrap_err();
        assert!(err.to_string().contains("CHARADES_SEED"));
    }

    #[test]
    fn bad_summary_format_is_rejected() {
        assert!(config(&[("CHARADES_SUMMARY", "xml")]).is_err());
    }
}
