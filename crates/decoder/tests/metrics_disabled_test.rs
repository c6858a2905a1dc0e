// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runs in its own binary so no other test initializes the registry.

mod common;

use common::*;
use fil_actors_decoder::metrics;
use fil_actors_decoder::metrics::MetricsError;
use fil_actors_decoder::metrics::registry::{DECODE_DURATION_SECONDS, DECODE_REQUESTS};
use fil_actors_decoder_config::MetricsConfig;

#[test]
fn test_disabled_metrics_record_nothing() {
    let config = MetricsConfig {
        enabled: false,
        prometheus_prefix: "disabled".to_string(),
    };
    metrics::init_with_config(&config).unwrap();
    assert!(!metrics::is_active());
    assert!(matches!(
        metrics::gather_metrics(),
        Err(MetricsError::NotInitialized)
    ));

    decoder()
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 0, vec![], vec![]))
        .unwrap();
    decoder()
        .decode(&mainnet(-1, ACCOUNT, 0, vec![], vec![]))
        .unwrap_err();

    assert_eq!(DECODE_REQUESTS.get(), 0.0);
    assert_eq!(
        DECODE_DURATION_SECONDS
            .with_label_values(&["account"])
            .get_sample_count(),
        0
    );
}
