// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use common::*;
use fil_actors_decoder::metrics;
use fil_actors_decoder::metrics::registry::{
    DECODE_ERRORS, DECODE_REQUESTS, FALLBACK_RESOLUTIONS, SOFT_FAILURES,
};
use fil_actors_decoder_config::MetricsConfig;
use fvm_ipld_encoding::BytesSer;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;

#[test]
fn test_metrics_initialization() {
    metrics::init("test").unwrap();
    // A second call keeps the first registry.
    metrics::init("other").unwrap();

    DECODE_REQUESTS.inc();
    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(
        metrics_text.contains("test_decode_requests"),
        "Should contain test_decode_requests"
    );
    assert!(!metrics_text.contains("other_"));
}

#[test]
fn test_metrics_initialization_from_config() {
    let config = MetricsConfig {
        enabled: true,
        prometheus_prefix: "test".to_string(),
    };
    metrics::init_with_config(&config).unwrap();
    assert!(metrics::is_active());

    decoder()
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 0, vec![], vec![]))
        .unwrap();
    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(metrics_text.contains("test_decode_duration_seconds"));
}

#[test]
fn test_decode_counts_requests_and_errors() {
    metrics::init("test").unwrap();
    let decoder = decoder();

    let initial_requests = DECODE_REQUESTS.get();
    let initial_errors = DECODE_ERRORS.with_label_values(&["unsupported_height"]).get();

    decoder
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 0, vec![], vec![]))
        .unwrap();
    decoder
        .decode(&mainnet(-5, ACCOUNT, 0, vec![], vec![]))
        .unwrap_err();

    assert!(DECODE_REQUESTS.get() >= initial_requests + 2.0);
    assert!(
        DECODE_ERRORS.with_label_values(&["unsupported_height"]).get() >= initial_errors + 1.0
    );
}

#[test]
fn test_inner_call_failures_are_counted() {
    metrics::init("test").unwrap();
    let counter = SOFT_FAILURES.with_label_values(&["multisig", "Propose", "inner_call"]);
    let initial = counter.get();

    let params = cbor(&(
        Address::new_id(9_999),
        TokenAmount::from_atto(1),
        2u64,
        BytesSer(&[0x01]),
    ));
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, MULTISIG, 2, params, vec![]))
        .unwrap();

    assert_eq!(outcome.result.soft_failures.len(), 1);
    assert!(counter.get() >= initial + 1.0);
}

#[test]
fn test_fallback_outcomes_are_counted() {
    metrics::init("test").unwrap();
    let unmatched = FALLBACK_RESOLUTIONS.with_label_values(&["unmatched"]);
    let initial = unmatched.get();

    decoder()
        .decode(&mainnet(MAINNET_V12, MINER, 987_654, vec![0xff], vec![]))
        .unwrap();

    assert!(unmatched.get() >= initial + 1.0);
}
