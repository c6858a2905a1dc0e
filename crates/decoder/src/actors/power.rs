// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::shared::{CreatedActorReturn, FilterEstimate};
use super::{ActorDecoder, ActorKind, MethodDescriptor, MethodTable, decode_with, lookup, raw_call};
use crate::consts::method::{CONSTRUCTOR, SEND};
use crate::consts::{RETURN_KEY, frc42};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::{Schema, decode_struct};
use crate::types::{AddressInfo, Addr, Amount, BigNum, Bytes, CidLink, DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;

pub const CREATE_MINER: &str = "CreateMiner";
pub const CREATE_MINER_EXPORTED: &str = "CreateMinerExported";

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMinerParamsV0 {
    pub owner: Addr,
    pub worker: Addr,
    pub seal_proof_type: i64,
    pub peer: Bytes,
    pub multiaddrs: Vec<Bytes>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMinerParams {
    pub owner: Addr,
    pub worker: Addr,
    pub window_post_proof_type: i64,
    pub peer: Bytes,
    pub multiaddrs: Vec<Bytes>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateClaimedPowerParams {
    pub raw_byte_delta: BigNum,
    pub quality_adjusted_delta: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollCronEventParams {
    pub event_epoch: i64,
    pub payload: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorId {
    pub miner: u64,
    pub number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SealVerifyInfo {
    pub registered_proof: i64,
    pub sector_id: SectorId,
    pub deal_ids: Vec<u64>,
    pub randomness: Bytes,
    pub interactive_randomness: Bytes,
    pub proof: Bytes,
    pub sealed_cid: CidLink,
    pub unsealed_cid: CidLink,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentTotalPowerReturnV0 {
    pub raw_byte_power: BigNum,
    pub quality_adj_power: BigNum,
    pub pledge_collateral: Amount,
    pub quality_adj_power_smoothed: FilterEstimate,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentTotalPowerReturn {
    pub raw_byte_power: BigNum,
    pub quality_adj_power: BigNum,
    pub pledge_collateral: Amount,
    pub quality_adj_power_smoothed: FilterEstimate,
    pub ramp_start_epoch: i64,
    pub ramp_duration_epochs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MinerRawPowerReturn {
    pub raw_byte_power: BigNum,
    pub meets_consensus_minimum: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MinerPowerReturn {
    pub raw_byte_power: BigNum,
    pub quality_adj_power: BigNum,
}

fn create_miner_params(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0
        | ActorsVersion::V2
        | ActorsVersion::V3
        | ActorsVersion::V4
        | ActorsVersion::V5
        | ActorsVersion::V6
        | ActorsVersion::V7 => Schema::of::<CreateMinerParamsV0>(),
        ActorsVersion::V8
        | ActorsVersion::V9
        | ActorsVersion::V10
        | ActorsVersion::V11
        | ActorsVersion::V12
        | ActorsVersion::V13
        | ActorsVersion::V14
        | ActorsVersion::V15
        | ActorsVersion::V16 => Schema::of::<CreateMinerParams>(),
    }
}

fn current_total_power_return(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0
        | ActorsVersion::V2
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
        | ActorsVersion::V14 => Schema::of::<CurrentTotalPowerReturnV0>(),
        ActorsVersion::V15 | ActorsVersion::V16 => Schema::of::<CurrentTotalPowerReturn>(),
    }
}

pub struct Power;

impl ActorDecoder for Power {
    fn name(&self) -> ActorKind {
        ActorKind::Power
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR);
        table
            .add(2, CREATE_MINER)
            .params_schema(create_miner_params(version))
            .returns::<CreatedActorReturn>();
        table
            .add(3, "UpdateClaimedPower")
            .params::<UpdateClaimedPowerParams>();
        table
            .add(4, "EnrollCronEvent")
            .params::<EnrollCronEventParams>();
        table.add(5, "OnEpochTickEnd");
        table.add(6, "UpdatePledgeTotal").params::<Amount>();
        if version == ActorsVersion::V0 {
            table.add(7, "OnConsensusFault").params::<Amount>();
        }
        if version <= ActorsVersion::V13 {
            table
                .add(8, "SubmitPoRepForBulkVerify")
                .params::<SealVerifyInfo>();
        }
        table
            .add(9, "CurrentTotalPower")
            .returns_schema(current_total_power_return(version));

        if version >= ActorsVersion::V10 {
            table.alias(frc42::CREATE_MINER, CREATE_MINER_EXPORTED, CREATE_MINER);
            table
                .add(frc42::NETWORK_RAW_POWER, "NetworkRawPowerExported")
                .returns::<BigNum>();
            table
                .add(frc42::MINER_RAW_POWER, "MinerRawPowerExported")
                .params::<u64>()
                .returns::<MinerRawPowerReturn>();
            table
                .add(frc42::MINER_COUNT, "MinerCountExported")
                .returns::<i64>();
            table
                .add(frc42::MINER_CONSENSUS_COUNT, "MinerConsensusCountExported")
                .returns::<i64>();
        }
        if version >= ActorsVersion::V16 {
            table
                .add(frc42::MINER_POWER, "MinerPowerExported")
                .params::<u64>()
                .returns::<MinerPowerReturn>();
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
        if method == SEND {
            return raw_call(ctx, message, receipt);
        }
        let descriptor = lookup(self, ctx, method)?;
        match descriptor.canonical_name() {
            CREATE_MINER => create_miner(ctx, &descriptor, message, receipt),
            _ => decode_with(ctx, &descriptor, message, receipt),
        }
    }
}

fn create_miner(
    ctx: &ParseContext<'_>,
    descriptor: &MethodDescriptor,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let mut result = decode_with(ctx, descriptor, message, receipt)?;
    if receipt.ret.is_empty() {
        return Ok(result);
    }

    let created: CreatedActorReturn = decode_struct(RETURN_KEY, &receipt.ret)?;
    let info = AddressInfo {
        short: created.id_address.0,
        robust: Some(created.robust_address.0),
        eth_address: None,
        actor_kind: Some(ActorKind::Miner),
        actor_code: None,
        creation_tx_cid: *ctx.message_cid,
    };
    ctx.register(&info);
    result.address_info = Some(info);
    Ok(result)
}
