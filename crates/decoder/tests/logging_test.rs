// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use fil_actors_decoder::logging::{self, LoggingConfig, LoggingError};

#[test]
fn test_file_logging_initialization() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let write_path = log_dir.to_str().unwrap();

    let config = || LoggingConfig {
        level: "debug",
        json_format: true,
        strip_ansi: true,
        write_to_file: true,
        write_path,
        write_max_file_size: 1024,
        write_max_files: 2,
    };

    logging::init_with_config(config()).unwrap();
    tracing::info!(target: "fil_actors_decoder", "logging initialized");
    assert!(log_dir.is_dir());

    let err = logging::init_with_config(config()).unwrap_err();
    assert!(matches!(err, LoggingError::AlreadyInitialized(_)));
}
