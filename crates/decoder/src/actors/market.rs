// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::shared::BatchReturn;
use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::frc42;
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::Schema;
use crate::types::{
    Addr, Amount, BigNum, Bits, Bytes, CidLink, DealLabel, DecodeResult, Message, Receipt, Sig,
};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;

pub const ADD_BALANCE: &str = "AddBalance";
pub const WITHDRAW_BALANCE: &str = "WithdrawBalance";
pub const PUBLISH_STORAGE_DEALS: &str = "PublishStorageDeals";

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawBalanceParams {
    pub provider_or_client: Addr,
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DealProposal {
    pub piece_cid: CidLink,
    pub piece_size: u64,
    pub verified_deal: bool,
    pub client: Addr,
    pub provider: Addr,
    pub label: DealLabel,
    pub start_epoch: i64,
    pub end_epoch: i64,
    pub storage_price_per_epoch: Amount,
    pub provider_collateral: Amount,
    pub client_collateral: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDealProposal {
    pub proposal: DealProposal,
    pub client_signature: Sig,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PublishStorageDealsParams {
    pub deals: Vec<ClientDealProposal>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PublishStorageDealsReturnV0 {
    pub ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PublishStorageDealsReturn {
    pub ids: Vec<u64>,
    pub valid_deals: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationParamsV0 {
    pub deal_ids: Vec<u64>,
    pub sector_expiry: i64,
    pub sector_start: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationReturnV0 {
    pub deal_weight: BigNum,
    pub verified_deal_weight: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationReturnV2 {
    pub deal_weight: BigNum,
    pub verified_deal_weight: BigNum,
    pub deal_space: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorDealsV8 {
    pub sector_expiry: i64,
    pub deal_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationParamsV8 {
    pub sectors: Vec<SectorDealsV8>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorWeights {
    pub deal_space: u64,
    pub deal_weight: BigNum,
    pub verified_deal_weight: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationReturnV8 {
    pub sectors: Vec<SectorWeights>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorDealsV9 {
    pub sector_type: i64,
    pub sector_expiry: i64,
    pub deal_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationParamsV9 {
    pub sectors: Vec<SectorDealsV9>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorDealData {
    pub commd: Option<CidLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationReturnV9 {
    pub sectors: Vec<SectorDealData>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorDeals {
    pub sector_number: u64,
    pub sector_type: i64,
    pub sector_expiry: i64,
    pub deal_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationParams {
    pub sectors: Vec<SectorDeals>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDealsForActivationReturn {
    pub unsealed_cids: Vec<Option<CidLink>>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ActivateDealsParams {
    pub deal_ids: Vec<u64>,
    pub sector_expiry: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifiedDealInfo {
    pub client: u64,
    pub allocation_id: u64,
    pub data: CidLink,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ActivateDealsResult {
    pub nonverified_deal_space: BigNum,
    pub verified_infos: Vec<VerifiedDealInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BatchActivateDealsParams {
    pub sectors: Vec<SectorDeals>,
    pub compute_cid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorDealActivation {
    pub nonverified_deal_space: BigNum,
    pub verified_infos: Vec<VerifiedDealInfo>,
    pub unsealed_cid: Option<CidLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BatchActivateDealsResult {
    pub activation_results: BatchReturn,
    pub activations: Vec<SectorDealActivation>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct OnMinerSectorsTerminateParamsV0 {
    pub epoch: i64,
    pub deal_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct OnMinerSectorsTerminateParams {
    pub epoch: i64,
    pub sectors: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ComputeDataCommitmentParamsV0 {
    pub deal_ids: Vec<u64>,
    pub sector_type: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorDataSpec {
    pub deal_ids: Vec<u64>,
    pub sector_type: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ComputeDataCommitmentParams {
    pub inputs: Vec<SectorDataSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ComputeDataCommitmentReturn {
    pub commds: Vec<CidLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetBalanceReturn {
    pub balance: Amount,
    pub locked: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetDealDataCommitmentReturn {
    pub data: CidLink,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetDealTermReturn {
    pub start: i64,
    pub duration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetDealActivationReturn {
    pub activated: i64,
    pub terminated: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DealSettlementSummary {
    pub payment: Amount,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SettleDealPaymentsReturn {
    pub results: BatchReturn,
    pub settlements: Vec<DealSettlementSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PieceChange {
    pub data: CidLink,
    pub size: u64,
    pub payload: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorChanges {
    pub sector: u64,
    pub minimum_commitment_epoch: i64,
    pub added: Vec<PieceChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorContentChangedParams {
    pub sectors: Vec<SectorChanges>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PieceReturn {
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorReturn {
    pub added: Vec<PieceReturn>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorContentChangedReturn {
    pub sectors: Vec<SectorReturn>,
}

/// Params and return of `VerifyDealsForActivation` at `version`.
fn verify_deals_for_activation(version: ActorsVersion) -> (Schema, Schema) {
    match version {
        ActorsVersion::V0 => (
            Schema::of::<VerifyDealsForActivationParamsV0>(),
            Schema::of::<VerifyDealsForActivationReturnV0>(),
        ),
        ActorsVersion::V2
        | ActorsVersion::V3
        | ActorsVersion::V4
        | ActorsVersion::V5
        | ActorsVersion::V6
        | ActorsVersion::V7 => (
            Schema::of::<VerifyDealsForActivationParamsV0>(),
            Schema::of::<VerifyDealsForActivationReturnV2>(),
        ),
        ActorsVersion::V8 => (
            Schema::of::<VerifyDealsForActivationParamsV8>(),
            Schema::of::<VerifyDealsForActivationReturnV8>(),
        ),
        ActorsVersion::V9 | ActorsVersion::V10 => (
            Schema::of::<VerifyDealsForActivationParamsV9>(),
            Schema::of::<VerifyDealsForActivationReturnV9>(),
        ),
        ActorsVersion::V11
        | ActorsVersion::V12
        | ActorsVersion::V13
        | ActorsVersion::V14
        | ActorsVersion::V15
        | ActorsVersion::V16 => (
            Schema::of::<VerifyDealsForActivationParams>(),
            Schema::of::<VerifyDealsForActivationReturn>(),
        ),
    }
}

pub struct Market;

impl ActorDecoder for Market {
    fn name(&self) -> ActorKind {
        ActorKind::Market
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR);
        table.add(2, ADD_BALANCE).params::<Addr>();

        let withdraw = table
            .add(3, WITHDRAW_BALANCE)
            .params::<WithdrawBalanceParams>();
        if version >= ActorsVersion::V9 {
            withdraw.returns::<Amount>();
        }

        let publish = table
            .add(4, PUBLISH_STORAGE_DEALS)
            .params::<PublishStorageDealsParams>();
        if version >= ActorsVersion::V9 {
            publish.returns::<PublishStorageDealsReturn>();
        } else {
            publish.returns::<PublishStorageDealsReturnV0>();
        }

        let (verify_params, verify_return) = verify_deals_for_activation(version);
        table
            .add(5, "VerifyDealsForActivation")
            .params_schema(verify_params)
            .returns_schema(verify_return);

        match version {
            ActorsVersion::V0
            | ActorsVersion::V2
            | ActorsVersion::V3
            | ActorsVersion::V4
            | ActorsVersion::V5
            | ActorsVersion::V6
            | ActorsVersion::V7
            | ActorsVersion::V8 => {
                table.add(6, "ActivateDeals").params::<ActivateDealsParams>();
            }
            ActorsVersion::V9 | ActorsVersion::V10 | ActorsVersion::V11 => {
                table
                    .add(6, "ActivateDeals")
                    .params::<ActivateDealsParams>()
                    .returns::<ActivateDealsResult>();
            }
            ActorsVersion::V12
            | ActorsVersion::V13
            | ActorsVersion::V14
            | ActorsVersion::V15
            | ActorsVersion::V16 => {
                table
                    .add(6, "BatchActivateDeals")
                    .params::<BatchActivateDealsParams>()
                    .returns::<BatchActivateDealsResult>();
            }
        }

        let terminate = table.add(7, "OnMinerSectorsTerminate");
        if version >= ActorsVersion::V13 {
            terminate.params::<OnMinerSectorsTerminateParams>();
        } else {
            terminate.params::<OnMinerSectorsTerminateParamsV0>();
        }

        if version <= ActorsVersion::V7 {
            table
                .add(8, "ComputeDataCommitment")
                .params::<ComputeDataCommitmentParamsV0>()
                .returns::<CidLink>();
        } else if version <= ActorsVersion::V10 {
            table
                .add(8, "ComputeDataCommitment")
                .params::<ComputeDataCommitmentParams>()
                .returns::<ComputeDataCommitmentReturn>();
        }

        table.add(9, "CronTick");

        if version >= ActorsVersion::V10 {
            table.alias(frc42::ADD_BALANCE, "AddBalanceExported", ADD_BALANCE);
            table.alias(
                frc42::WITHDRAW_BALANCE,
                "WithdrawBalanceExported",
                WITHDRAW_BALANCE,
            );
            table.alias(
                frc42::PUBLISH_STORAGE_DEALS,
                "PublishStorageDealsExported",
                PUBLISH_STORAGE_DEALS,
            );
            table
                .add(frc42::GET_BALANCE, "GetBalanceExported")
                .params::<Addr>()
                .returns::<GetBalanceReturn>();
            table
                .add(frc42::GET_DEAL_DATA_COMMITMENT, "GetDealDataCommitmentExported")
                .params::<u64>()
                .returns::<GetDealDataCommitmentReturn>();
            table
                .add(frc42::GET_DEAL_CLIENT, "GetDealClientExported")
                .params::<u64>()
                .returns::<u64>();
            table
                .add(frc42::GET_DEAL_PROVIDER, "GetDealProviderExported")
                .params::<u64>()
                .returns::<u64>();
            table
                .add(frc42::GET_DEAL_LABEL, "GetDealLabelExported")
                .params::<u64>()
                .returns::<DealLabel>();
            table
                .add(frc42::GET_DEAL_TERM, "GetDealTermExported")
                .params::<u64>()
                .returns::<GetDealTermReturn>();
            table
                .add(frc42::GET_DEAL_TOTAL_PRICE, "GetDealTotalPriceExported")
                .params::<u64>()
                .returns::<Amount>();
            table
                .add(
                    frc42::GET_DEAL_CLIENT_COLLATERAL,
                    "GetDealClientCollateralExported",
                )
                .params::<u64>()
                .returns::<Amount>();
            table
                .add(
                    frc42::GET_DEAL_PROVIDER_COLLATERAL,
                    "GetDealProviderCollateralExported",
                )
                .params::<u64>()
                .returns::<Amount>();
            table
                .add(frc42::GET_DEAL_VERIFIED, "GetDealVerifiedExported")
                .params::<u64>()
                .returns::<bool>();
            table
                .add(frc42::GET_DEAL_ACTIVATION, "GetDealActivationExported")
                .params::<u64>()
                .returns::<GetDealActivationReturn>();
        }

        if version >= ActorsVersion::V13 {
            table
                .add(frc42::GET_DEAL_SECTOR, "GetDealSectorExported")
                .params::<u64>()
                .returns::<u64>();
            table
                .add(frc42::SETTLE_DEAL_PAYMENTS, "SettleDealPaymentsExported")
                .params::<Bits>()
                .returns::<SettleDealPaymentsReturn>();
            table
                .add(frc42::SECTOR_CONTENT_CHANGED, "SectorContentChanged")
                .params::<SectorContentChangedParams>()
                .returns::<SectorContentChangedReturn>();
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
        parse_generic(self, ctx, method, message, receipt)
    }
}
