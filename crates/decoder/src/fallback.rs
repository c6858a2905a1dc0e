// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Best-effort decoding of calls whose method number the receiver does not
//! map.
//!
//! Every method of every actor available at the version is tried in a fixed
//! order with strict, side-effect free parsing. The first one that accepts
//! both params and return wins.

use crate::actors::{ActorKind, decoder_for};
use crate::context::ParseContext;
use crate::schema::passthrough;
use crate::types::{DecodeResult, FallbackMatch, Message, Receipt};

pub(crate) fn resolve(
    ctx: &ParseContext<'_>,
    message: &Message,
    receipt: &Receipt,
) -> (DecodeResult, Option<FallbackMatch>) {
    let raw = || DecodeResult::new(passthrough(&message.params, &receipt.ret));
    if message.params.is_empty() {
        tracing::debug!(
            method = message.method,
            height = ctx.height,
            "unmapped method without params, rendering raw"
        );
        return (raw(), None);
    }

    let speculative = ctx.speculative();
    let version = ctx.actors_version();
    for kind in ActorKind::ALL
        .into_iter()
        .filter(|kind| kind.is_available(version))
    {
        let decoder = decoder_for(kind);
        let table = decoder.methods(version);
        for descriptor in table.iter() {
            match decoder.parse(&speculative, descriptor.name, message, receipt) {
                Ok(result) => {
                    tracing::debug!(
                        actor = %kind,
                        method = descriptor.name,
                        number = message.method,
                        height = ctx.height,
                        "unmapped method matched"
                    );
                    let matched = FallbackMatch {
                        actor: kind,
                        method: descriptor.name,
                    };
                    return (result, Some(matched));
                }
                Err(err) => tracing::trace!(
                    actor = %kind,
                    method = descriptor.name,
                    error = %err,
                    "fallback candidate rejected"
                ),
            }
        }
    }

    tracing::debug!(
        method = message.method,
        height = ctx.height,
        "no method matched, rendering raw"
    );
    (raw(), None)
}
