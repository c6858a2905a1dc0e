// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodTable, parse_passthrough};
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::types::{DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_shared::METHOD_CONSTRUCTOR;

/// Account controlled by an Ethereum secp256k1 key.
pub struct EthAccount;

impl ActorDecoder for EthAccount {
    fn name(&self) -> ActorKind {
        ActorKind::EthAccount
    }

    fn methods(&self, _version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR);
        table
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
