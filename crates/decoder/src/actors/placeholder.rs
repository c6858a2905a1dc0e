// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodTable, parse_passthrough};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::types::{DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;

/// Stand-in for an address that received funds before any actor was
/// deployed there. It exports no methods.
pub struct Placeholder;

impl ActorDecoder for Placeholder {
    fn name(&self) -> ActorKind {
        ActorKind::Placeholder
    }

    fn methods(&self, _version: ActorsVersion) -> MethodTable {
        MethodTable::new()
    }

    fn parse(
        &self,
        ctx: &ParseContext<'_>,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError> {
        parse_passthrough(self, ctx, method, message, receipt)
    }
}
