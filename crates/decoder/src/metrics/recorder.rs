// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::registry::{
    DECODE_DURATION_SECONDS, DECODE_ERRORS, DECODE_REQUESTS, FALLBACK_RESOLUTIONS, SOFT_FAILURES,
    is_active,
};
use crate::actors::ActorKind;
use crate::error::{DecodeError, SoftFailure};
use crate::types::DecodeOutcome;
use std::time::Instant;

/// Label for requests that failed before the receiver was known.
const UNRESOLVED_ACTOR: &str = "unresolved";

pub const FALLBACK_MATCHED: &str = "matched";
pub const FALLBACK_UNMATCHED: &str = "unmatched";

/// Times one decode request and records its outcome. Inert while metrics
/// are not initialized.
pub struct DecodeRecorder {
    start: Instant,
    actor: Option<ActorKind>,
    active: bool,
}

impl DecodeRecorder {
    pub fn start() -> Self {
        let active = is_active();
        if active {
            DECODE_REQUESTS.inc();
        }
        Self {
            start: Instant::now(),
            actor: None,
            active,
        }
    }

    pub fn set_actor(&mut self, actor: ActorKind) {
        self.actor = Some(actor);
    }

    pub fn record_fallback(&self, matched: bool) {
        if !self.active {
            return;
        }
        let outcome = if matched {
            FALLBACK_MATCHED
        } else {
            FALLBACK_UNMATCHED
        };
        FALLBACK_RESOLUTIONS.with_label_values(&[outcome]).inc();
    }

    pub fn finish(self, result: &Result<DecodeOutcome, DecodeError>) {
        if !self.active {
            return;
        }
        match result {
            Ok(outcome) => {
                for failure in &outcome.result.soft_failures {
                    record_soft_failure(outcome.actor, &outcome.method, failure);
                }
            }
            Err(err) => DECODE_ERRORS.with_label_values(&[err.kind()]).inc(),
        }

        let actor = self.actor.map_or(UNRESOLVED_ACTOR, ActorKind::as_str);
        DECODE_DURATION_SECONDS
            .with_label_values(&[actor])
            .observe(self.start.elapsed().as_secs_f64());
    }
}

fn record_soft_failure(actor: ActorKind, method: &str, failure: &SoftFailure) {
    SOFT_FAILURES
        .with_label_values(&[actor.as_str(), method, failure.reason_label()])
        .inc();
}
