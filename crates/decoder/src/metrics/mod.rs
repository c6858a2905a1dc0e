// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod recorder;
pub mod registry;

pub use recorder::DecodeRecorder;
pub use registry::{
    MetricsError, gather_metric_families, gather_metrics, init, init_with_config, is_active,
};
