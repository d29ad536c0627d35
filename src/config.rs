//! Site configuration.
//!
//! Loaded from a JSON file (`--config`, else `config.json` in the platform
//! config directory, else built-in defaults), then overridden by environment
//! variables:
//! - `FOLIO_HOST` - interface to bind
//! - `FOLIO_PORT` - port to bind
//! - `FOLIO_CONTACT_DELAY_MS` - simulated contact submission delay

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::effects::{RevealOptions, TypewriterTiming};

const APP_NAME: &str = "folio";
const CONFIG_FILE: &str = "config.json";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub typewriter: TypewriterTiming,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            typewriter: TypewriterTiming::default(),
            reveal: RevealConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// When false, sections are rendered without reveal animations.
    pub enabled: bool,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let options = RevealOptions::default();
        Self {
            enabled: true,
            threshold: options.threshold,
            root_margin: options.root_margin,
        }
    }
}

impl RevealConfig {
    pub fn options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// How long a submission "takes" before it is acknowledged.
    pub simulated_delay_ms: u64,
    /// How long the success banner stays up in the browser.
    pub banner_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 2000,
            banner_ms: 5000,
        }
    }
}

impl ContactConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl SiteConfig {
    /// Load configuration and apply environment overrides.
    ///
    /// An explicit `path` must exist. Without one, the default config file is
    /// used if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: shown.clone(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", shown);
        Ok(config)
    }

    /// Apply `FOLIO_*` overrides. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("FOLIO_HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("FOLIO_PORT") {
            match port.trim().parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid FOLIO_PORT: {}", port),
            }
        }

        if let Some(delay) = lookup("FOLIO_CONTACT_DELAY_MS") {
            match delay.trim().parse() {
                Ok(delay) => self.contact.simulated_delay_ms = delay,
                Err(_) => tracing::warn!("Ignoring invalid FOLIO_CONTACT_DELAY_MS: {}", delay),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typewriter.type_interval_ms == 0 || self.typewriter.delete_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "typewriter intervals must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be between 0 and 1, got {}",
                self.reveal.threshold
            )));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Some(dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_the_page_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.typewriter.type_interval_ms, 100);
        assert_eq!(config.typewriter.delete_interval_ms, 50);
        assert_eq!(config.typewriter.pause_ms, 1500);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.contact.simulated_delay(), Duration::from_secs(2));
        assert_ok!(config.validate());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 8080, "typewriter": {{"pause_ms": 900}}}}"#).unwrap();

        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.typewriter.pause_ms, 900);
        assert_eq!(config.typewriter.type_interval_ms, 100);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SiteConfig::load(Some(dir.path().join("nope.json").as_path()));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = SiteConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = SiteConfig::default();
        config.apply_overrides(lookup(&[
            ("FOLIO_HOST", "0.0.0.0"),
            ("FOLIO_PORT", "8081"),
            ("FOLIO_CONTACT_DELAY_MS", "0"),
        ]));
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");
        assert_eq!(config.contact.simulated_delay_ms, 0);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let mut config = SiteConfig::default();
        config.apply_overrides(lookup(&[("FOLIO_PORT", "eighty")]));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = SiteConfig::default();
        config.typewriter.delete_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 1.5;
        assert_err!(config.validate());
    }
}
