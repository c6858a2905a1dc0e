// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::shared::FilterEstimate;
use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::Schema;
use crate::types::{Addr, Amount, BigNum, DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct AwardBlockRewardParams {
    pub miner: Addr,
    pub penalty: Amount,
    pub gas_reward: Amount,
    pub win_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ThisEpochRewardReturnV0 {
    pub this_epoch_reward: Amount,
    pub this_epoch_reward_smoothed: FilterEstimate,
    pub this_epoch_baseline_power: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ThisEpochRewardReturn {
    pub this_epoch_reward_smoothed: FilterEstimate,
    pub this_epoch_baseline_power: BigNum,
}

fn this_epoch_reward_return(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0 => Schema::of::<ThisEpochRewardReturnV0>(),
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
        | ActorsVersion::V16 => Schema::of::<ThisEpochRewardReturn>(),
    }
}

pub struct Reward;

impl ActorDecoder for Reward {
    fn name(&self) -> ActorKind {
        ActorKind::Reward
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table
            .add(METHOD_CONSTRUCTOR, CONSTRUCTOR)
            .params::<Option<BigNum>>();
        table
            .add(2, "AwardBlockReward")
            .params::<AwardBlockRewardParams>();
        table
            .add(3, "ThisEpochReward")
            .returns_schema(this_epoch_reward_return(version));
        table.add(4, "UpdateNetworkKPI").params::<Option<BigNum>>();
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
