// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::Schema;
use crate::types::{Addr, Amount, Bytes, DecodeResult, Message, Receipt, Sig};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::{METHOD_CONSTRUCTOR, MethodNum};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorParams {
    pub from: Addr,
    pub to: Addr,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ModVerifyParams {
    pub actor: Addr,
    pub method: MethodNum,
    pub data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct Merge {
    pub lane: u64,
    pub nonce: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SignedVoucher {
    pub channel_addr: Addr,
    pub time_lock_min: i64,
    pub time_lock_max: i64,
    pub secret_pre_image: Bytes,
    pub extra: Option<ModVerifyParams>,
    pub lane: u64,
    pub nonce: u64,
    pub amount: Amount,
    pub min_settle_height: i64,
    pub merges: Vec<Merge>,
    pub signature: Option<Sig>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelStateParamsV0 {
    pub sv: SignedVoucher,
    pub secret: Bytes,
    pub proof: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateChannelStateParams {
    pub sv: SignedVoucher,
    pub secret: Bytes,
}

fn update_channel_state_params(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0 => Schema::of::<UpdateChannelStateParamsV0>(),
        ActorsVersion::V2
        | ActorsVersion::V3
        | ActorsVersion::V4
        | ActorsVersion::V5
        | ActorsVersion::V6
        | ActorsVersion::V7
        | ActorsVersion::V8
        | ActorsVersion::V9
        | ActorsVersion::V10
        | ActorsVersion::V11
        | ActorsVersion::V12
        | ActorsVersion::V13
        | ActorsVersion::V14
        | ActorsVersion::V15
        | ActorsVersion::V16 => Schema::of::<UpdateChannelStateParams>(),
    }
}

pub struct PaymentChannel;

impl ActorDecoder for PaymentChannel {
    fn name(&self) -> ActorKind {
        ActorKind::PaymentChannel
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table
            .add(METHOD_CONSTRUCTOR, CONSTRUCTOR)
            .params::<ConstructorParams>();
        table
            .add(2, "UpdateChannelState")
            .params_schema(update_channel_state_params(version));
        table.add(3, "Settle");
        table.add(4, "Collect");
        table
    }

    fn parse(
        &self,
        ctx: &ParseContext<'_>,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError> {
        parse_generic(self, ctx, method, message, receipt)
    }
}
