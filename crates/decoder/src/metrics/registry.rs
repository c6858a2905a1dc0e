// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use fil_actors_decoder_config::MetricsConfig;
use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Metrics not initialized - call init() first")]
    NotInitialized,

    #[error("Metrics registry lock poisoned")]
    LockPoisoned,

    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Encoded metrics are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Set once a registry exists; decode requests record nothing before that.
static ACTIVE: AtomicBool = AtomicBool::new(false);

lazy_static! {
    pub static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);

    // Created without registering to the default registry
    pub static ref DECODE_REQUESTS: Counter = Counter::new(
        "decode_requests",
        "Total number of decode requests"
    )
    .expect("Failed to create decode_requests counter");

    pub static ref DECODE_ERRORS: CounterVec = CounterVec::new(
        Opts::new("decode_errors", "Number of failed decode requests"),
        &["kind"]
    )
    .expect("Failed to create decode_errors counter");

    pub static ref SOFT_FAILURES: CounterVec = CounterVec::new(
        Opts::new("soft_failures", "Problems recorded without failing the decode"),
        &["actor", "method", "reason"]
    )
    .expect("Failed to create soft_failures counter");

    pub static ref FALLBACK_RESOLUTIONS: CounterVec = CounterVec::new(
        Opts::new("fallback_resolutions", "Outcomes of the unknown-method heuristic"),
        &["outcome"]
    )
    .expect("Failed to create fallback_resolutions counter");

    pub static ref DECODE_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "decode_duration_seconds",
            "Duration of decode requests in seconds"
        ).buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["actor"]
    )
    .expect("Failed to create decode_duration_seconds histogram");
}

/// Register every metric with a registry using `prefix`. Later calls are
/// no-ops.
pub fn init(prefix: &str) -> Result<(), MetricsError> {
    let mut guard = REGISTRY.lock().map_err(|_| MetricsError::LockPoisoned)?;
    if guard.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;
    registry.register(Box::new(DECODE_REQUESTS.clone()))?;
    registry.register(Box::new(DECODE_ERRORS.clone()))?;
    registry.register(Box::new(SOFT_FAILURES.clone()))?;
    registry.register(Box::new(FALLBACK_RESOLUTIONS.clone()))?;
    registry.register(Box::new(DECODE_DURATION_SECONDS.clone()))?;

    *guard = Some(registry);
    ACTIVE.store(true, Ordering::Release);
    Ok(())
}

/// Set up the registry from configuration. Leaves metrics off when
/// `config.enabled` is false.
pub fn init_with_config(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        tracing::debug!("metrics disabled");
        return Ok(());
    }
    init(&config.prometheus_prefix)
}

pub fn is_active() -> bool {
    ACTIVE.load(Ordering::Acquire)
}

pub fn gather_metric_families() -> Result<Vec<MetricFamily>, MetricsError> {
    let guard = REGISTRY.lock().map_err(|_| MetricsError::LockPoisoned)?;
    let registry = guard.as_ref().ok_or(MetricsError::NotInitialized)?;
    Ok(registry.gather())
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, MetricsError> {
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
