use std::{env, time::Duration};

use dashshare_core::features::{FeatureToggleError, FeatureToggles};
use thiserror::Error;

/// Errors raised while loading [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FEATURE_TOGGLES_ENABLE: {0}")]
    FeatureToggles(#[from] FeatureToggleError),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feature toggles enabled for this process (default: none)
    pub feature_toggles: FeatureToggles,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Seed demo dashboards and dev bearer tokens (default: true)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FEATURE_TOGGLES_ENABLE` - Comma-separated toggle names to enable (default: none)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `SEED_DEMO_DATA` - `true`/`1` or `false`/`0` (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feature_toggles = match lookup("FEATURE_TOGGLES_ENABLE") {
            Some(raw) => FeatureToggles::parse_enable_list(&raw)?,
            None => FeatureToggles::default(),
        };

        let request_timeout_seconds = match lookup("REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "REQUEST_TIMEOUT_SECONDS",
                    value: raw,
                })?,
            None => 10,
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "SEED_DEMO_DATA",
                        value: raw,
                    })
                }
            },
            None => true,
        };

        Ok(Self {
            feature_toggles,
            request_timeout_seconds,
            seed_demo_data,
        })
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feature_toggles: FeatureToggles::default(),
            request_timeout_seconds: 10,
            seed_demo_data: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use dashshare_core::features::FLAG_PUBLIC_DASHBOARDS;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();

        assert!(!config.feature_toggles.is_enabled(FLAG_PUBLIC_DASHBOARDS));
        assert_eq!(config.request_timeout_seconds, 10);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_feature_toggles_enable_list() {
        let config = load(&[("FEATURE_TOGGLES_ENABLE", "publicDashboards, other")]).unwrap();

        assert!(config.feature_toggles.is_enabled(FLAG_PUBLIC_DASHBOARDS));
        assert!(config.feature_toggles.is_enabled("other"));
    }

    #[test]
    fn test_invalid_feature_toggle_name() {
        let result = load(&[("FEATURE_TOGGLES_ENABLE", "public dashboards")]);
        assert!(matches!(result, Err(ConfigError::FeatureToggles(_))));
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = load(&[("REQUEST_TIMEOUT_SECONDS", "30")]).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = load(&[("REQUEST_TIMEOUT_SECONDS", "0")]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECONDS",
                ..
            })
        ));
    }

    #[test]
    fn test_seed_demo_data_flag() {
        assert!(!load(&[("SEED_DEMO_DATA", "false")]).unwrap().seed_demo_data);
        assert!(load(&[("SEED_DEMO_DATA", "1")]).unwrap().seed_demo_data);
        assert!(load(&[("SEED_DEMO_DATA", "maybe")]).is_err());
    }
}
