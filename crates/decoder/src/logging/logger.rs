// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use fil_actors_decoder_config::LogConfig;
use rolling_file::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
            write_to_file: config.write,
            write_path: &config.write_path,
            write_max_file_size: config.write_max_file_size,
            write_max_files: config.write_max_files,
        }
    }
}

/// Install the global tracing subscriber.
///
/// ```no_run
/// use fil_actors_decoder::logging::{self, LoggingConfig};
///
/// logging::init_with_config(LoggingConfig {
///     level: "fil_actors_decoder=debug,info",
///     json_format: false,
///     strip_ansi: false,
///     write_to_file: true,
///     write_path: "./logs",
///     write_max_file_size: 5242880,
///     write_max_files: 5,
/// })?;
/// # Ok::<(), fil_actors_decoder::logging::LoggingError>(())
/// ```
///
/// # Log Rotation
/// When `logs.log` reaches `write_max_file_size` it is rotated to
/// `logs.log.1`, `logs.log.2`, ... keeping `write_max_files` files in total.
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(config.level).map_err(|source| LoggingError::InvalidLogLevel {
        level: config.level.to_string(),
        source,
    })?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.write_to_file {
        std::fs::create_dir_all(config.write_path)?;

        let log_file_path = PathBuf::from(config.write_path).join(LOG_FILE_NAME);
        // write_max_files counts the current file
        let rotated_files_count = config.write_max_files.saturating_sub(1);
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            rotated_files_count,
        )?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // The writer must outlive every span; keep the guard for the process.
        std::mem::forget(guard);

        if config.json_format {
            registry
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .try_init()?;
        } else {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(!config.strip_ansi);
            let file_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(non_blocking);
            registry.with(console_layer).with(file_layer).try_init()?;
        }
    } else if config.json_format {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = init_with_config(LoggingConfig {
            level: "fil_actors_decoder=loud",
            json_format: false,
            strip_ansi: true,
            write_to_file: false,
            write_path: "./logs",
            write_max_file_size: 1024,
            write_max_files: 2,
        })
        .unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLogLevel { .. }));
    }

    #[test]
    fn test_from_log_config() {
        let mut log = LogConfig::default();
        log.json = true;
        log.write_max_files = 3;

        let config = LoggingConfig::from(&log);
        assert_eq!(config.level, "info");
        assert!(config.json_format);
        assert!(!config.write_to_file);
        assert_eq!(config.write_max_files, 3);
    }
}
