// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::shared::UniversalReceiverParams;
use super::{ActorDecoder, ActorKind, MethodTable, parse_passthrough};
use crate::consts::frc42;
use crate::consts::method::{CONSTRUCTOR, UNIVERSAL_RECEIVER_HOOK};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::types::{Addr, Bytes, DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;

pub const PUBKEY_ADDRESS: &str = "PubkeyAddress";
pub const AUTHENTICATE_MESSAGE: &str = "AuthenticateMessageExported";

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateMessageParams {
    pub signature: Bytes,
    pub message: Bytes,
}

pub struct Account;

impl ActorDecoder for Account {
    fn name(&self) -> ActorKind {
        ActorKind::Account
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR).params::<Addr>();
        table.add(2, PUBKEY_ADDRESS).returns::<Addr>();

        match version {
            ActorsVersion::V0
            | ActorsVersion::V2
            | ActorsVersion::V3
            | ActorsVersion::V4
            | ActorsVersion::V5
            | ActorsVersion::V6
            | ActorsVersion::V7
            | ActorsVersion::V8 => {}
            ActorsVersion::V9 => {
                table
                    .add(frc42::AUTHENTICATE_MESSAGE, AUTHENTICATE_MESSAGE)
                    .params::<AuthenticateMessageParams>();
                table
                    .add(frc42::RECEIVE, UNIVERSAL_RECEIVER_HOOK)
                    .params::<UniversalReceiverParams>();
            }
            ActorsVersion::V10
            | ActorsVersion::V11
            | ActorsVersion::V12
            | ActorsVersion::V13
            | ActorsVersion::V14
            | ActorsVersion::V15
            | ActorsVersion::V16 => {
                table
                    .add(frc42::AUTHENTICATE_MESSAGE, AUTHENTICATE_MESSAGE)
                    .params::<AuthenticateMessageParams>()
                    .returns::<bool>();
                table
                    .add(frc42::RECEIVE, UNIVERSAL_RECEIVER_HOOK)
                    .params::<UniversalReceiverParams>();
            }
        }
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
