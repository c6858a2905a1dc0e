// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod error;
mod log;
mod metrics;
mod network;

pub use error::ConfigError;
pub use log::{LogConfig, LogError};
pub use metrics::{MetricsConfig, MetricsError};
pub use network::{CustomSchedules, NetworkConfig, NetworkError};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix shared by every setting.
pub const ENV_PREFIX: &str = "FIL_DECODER_";

#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    pub network: NetworkConfig,
    pub log: LogConfig,
    pub metrics: MetricsConfig,
}

/// Flat view of the environment, as `envy` sees it.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "network::default_network")]
    network: String,
    #[serde(default)]
    custom_upgrades: Option<String>,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prefix")]
    metrics_prometheus_prefix: String,
}

impl From<EnvConfig> for DecoderConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            network: NetworkConfig {
                network: env.network,
                custom_upgrades: env.custom_upgrades,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prometheus_prefix: env.metrics_prometheus_prefix,
            },
        }
    }
}

impl DecoderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = envy::prefixed(ENV_PREFIX).from_env::<EnvConfig>()?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    /// Load a `.env` style file into the process environment, then read the
    /// configuration from it.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(|source| ConfigError::EnvFileError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_env()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.network.validate()?;
        self.log.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for (key, _) in std::env::vars() {
            if key.starts_with(ENV_PREFIX) {
                // SAFETY: tests touching the environment are serialized.
                unsafe { std::env::remove_var(key) };
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.network.network, "mainnet");
        assert_eq!(config.log.level, "info");
        assert!(!config.metrics.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = DecoderConfig::from_env().unwrap();
        assert_eq!(config.network.network, "mainnet");
        assert_eq!(config.log.write_max_files, 5);
        assert_eq!(config.metrics.prometheus_prefix, "fil_actors_decoder");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::set_var("FIL_DECODER_NETWORK", "calibration");
            std::env::set_var("FIL_DECODER_LOG_LEVEL", "debug");
            std::env::set_var("FIL_DECODER_METRICS_ENABLED", "true");
        }
        let config = DecoderConfig::from_env().unwrap();
        assert_eq!(config.network.network, "calibration");
        assert_eq!(config.log.level, "debug");
        assert!(config.metrics.enabled);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_level() {
        clear_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::set_var("FIL_DECODER_LOG_LEVEL", "loud") };
        let result = DecoderConfig::from_env();
        assert!(matches!(result, Err(ConfigError::LogError(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "FIL_DECODER_NETWORK=devnet").unwrap();
        writeln!(
            file,
            r#"FIL_DECODER_CUSTOM_UPGRADES='{{"devnet":{{"0":16,"100":18}}}}'"#
        )
        .unwrap();

        let config = DecoderConfig::from_env_file(file.path()).unwrap();
        assert_eq!(config.network.network, "devnet");
        let schedules = config.network.custom_schedules().unwrap();
        assert_eq!(schedules["devnet"].get(&100), Some(&18));
        clear_env();
    }

    #[test]
    fn test_from_missing_env_file() {
        let result = DecoderConfig::from_env_file("/nonexistent/.env.decoder");
        assert!(matches!(result, Err(ConfigError::EnvFileError { .. })));
    }
}
