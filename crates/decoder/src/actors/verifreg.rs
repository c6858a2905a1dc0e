// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::shared::{BatchReturn, UniversalReceiverParams};
use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::frc42;
use crate::consts::method::{CONSTRUCTOR, UNIVERSAL_RECEIVER_HOOK};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::types::{Addr, BigNum, CidLink, DecodeResult, Message, Receipt, Sig};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;

pub const ADD_VERIFIED_CLIENT: &str = "AddVerifiedClient";
pub const REMOVE_EXPIRED_ALLOCATIONS: &str = "RemoveExpiredAllocations";
pub const GET_CLAIMS: &str = "GetClaims";
pub const EXTEND_CLAIM_TERMS: &str = "ExtendClaimTerms";
pub const REMOVE_EXPIRED_CLAIMS: &str = "RemoveExpiredClaims";

/// Params of `AddVerifier` and `AddVerifiedClient`.
#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifierParams {
    pub address: Addr,
    pub allowance: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct UseBytesParams {
    pub address: Addr,
    pub deal_size: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveDataCapRequest {
    pub verifier: Addr,
    pub signature: Sig,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveDataCapParams {
    pub verified_client_to_remove: Addr,
    pub data_cap_amount_to_remove: BigNum,
    pub verifier_request_1: RemoveDataCapRequest,
    pub verifier_request_2: RemoveDataCapRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveDataCapReturn {
    pub verified_client: Addr,
    pub data_cap_removed: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveExpiredAllocationsParams {
    pub client: u64,
    pub allocation_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveExpiredAllocationsReturn {
    pub considered: Vec<u64>,
    pub results: BatchReturn,
    pub datacap_recovered: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorAllocationClaim {
    pub client: u64,
    pub allocation_id: u64,
    pub data: CidLink,
    pub size: u64,
    pub sector: u64,
    pub sector_expiry: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimAllocationsParamsV9 {
    pub sectors: Vec<SectorAllocationClaim>,
    pub all_or_nothing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimAllocationsReturnV9 {
    pub batch_info: BatchReturn,
    pub claimed_space: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationClaim {
    pub client: u64,
    pub allocation_id: u64,
    pub data: CidLink,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorAllocationClaims {
    pub sector: u64,
    pub expiry: i64,
    pub claims: Vec<AllocationClaim>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimAllocationsParams {
    pub sectors: Vec<SectorAllocationClaims>,
    pub all_or_nothing: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorClaimSummary {
    pub claimed_space: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimAllocationsReturn {
    pub sector_results: BatchReturn,
    pub sector_claims: Vec<SectorClaimSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimsParams {
    pub provider: u64,
    pub claim_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct Claim {
    pub provider: u64,
    pub client: u64,
    pub data: CidLink,
    pub size: u64,
    pub term_min: i64,
    pub term_max: i64,
    pub term_start: i64,
    pub sector: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetClaimsReturn {
    pub batch_info: BatchReturn,
    pub claims: Vec<Claim>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ClaimTerm {
    pub provider: u64,
    pub claim_id: u64,
    pub term_max: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ExtendClaimTermsParams {
    pub terms: Vec<ClaimTerm>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveExpiredClaimsReturn {
    pub considered: Vec<u64>,
    pub results: BatchReturn,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationsResponse {
    pub allocation_results: BatchReturn,
    pub extension_results: BatchReturn,
    pub new_allocations: Vec<u64>,
}

pub struct VerifiedRegistry;

impl ActorDecoder for VerifiedRegistry {
    fn name(&self) -> ActorKind {
        ActorKind::VerifiedRegistry
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR).params::<Addr>();
        table.add(2, "AddVerifier").params::<VerifierParams>();
        table.add(3, "RemoveVerifier").params::<Addr>();
        table.add(4, ADD_VERIFIED_CLIENT).params::<VerifierParams>();
        if version <= ActorsVersion::V8 {
            table.add(5, "UseBytes").params::<UseBytesParams>();
            table.add(6, "RestoreBytes").params::<UseBytesParams>();
        }
        if version >= ActorsVersion::V7 {
            table
                .add(7, "RemoveVerifiedClientDataCap")
                .params::<RemoveDataCapParams>()
                .returns::<RemoveDataCapReturn>();
        }
        if version < ActorsVersion::V9 {
            return table;
        }

        table
            .add(8, REMOVE_EXPIRED_ALLOCATIONS)
            .params::<RemoveExpiredAllocationsParams>()
            .returns::<RemoveExpiredAllocationsReturn>();
        let claim = table.add(9, "ClaimAllocations");
        if version <= ActorsVersion::V11 {
            claim
                .params::<ClaimAllocationsParamsV9>()
                .returns::<ClaimAllocationsReturnV9>();
        } else {
            claim
                .params::<ClaimAllocationsParams>()
                .returns::<ClaimAllocationsReturn>();
        }
        table
            .add(10, GET_CLAIMS)
            .params::<ClaimsParams>()
            .returns::<GetClaimsReturn>();
        table
            .add(11, EXTEND_CLAIM_TERMS)
            .params::<ExtendClaimTermsParams>()
            .returns::<BatchReturn>();
        table
            .add(12, REMOVE_EXPIRED_CLAIMS)
            .params::<ClaimsParams>()
            .returns::<RemoveExpiredClaimsReturn>();
        table
            .add(frc42::RECEIVE, UNIVERSAL_RECEIVER_HOOK)
            .params::<UniversalReceiverParams>()
            .returns::<AllocationsResponse>();

        if version >= ActorsVersion::V10 {
            table.alias(
                frc42::ADD_VERIFIED_CLIENT,
                "AddVerifiedClientExported",
                ADD_VERIFIED_CLIENT,
            );
            table.alias(
                frc42::REMOVE_EXPIRED_ALLOCATIONS,
                "RemoveExpiredAllocationsExported",
                REMOVE_EXPIRED_ALLOCATIONS,
            );
            table.alias(frc42::GET_CLAIMS, "GetClaimsExported", GET_CLAIMS);
            table.alias(
                frc42::EXTEND_CLAIM_TERMS,
                "ExtendClaimTermsExported",
                EXTEND_CLAIM_TERMS,
            );
            table.alias(
                frc42::REMOVE_EXPIRED_CLAIMS,
                "RemoveExpiredClaimsExported",
                REMOVE_EXPIRED_CLAIMS,
            );
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
