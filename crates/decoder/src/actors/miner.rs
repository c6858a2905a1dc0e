// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::shared::{BatchReturn, FilterEstimate, PoStProof};
use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::frc42;
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::Schema;
use crate::types::{Addr, Amount, BigNum, Bits, Bytes, CidLink, DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;

pub const CHANGE_WORKER_ADDRESS: &str = "ChangeWorkerAddress";
pub const CHANGE_PEER_ID: &str = "ChangePeerID";
pub const WITHDRAW_BALANCE: &str = "WithdrawBalance";
pub const CHANGE_MULTIADDRS: &str = "ChangeMultiaddrs";
pub const CONFIRM_CHANGE_WORKER_ADDRESS: &str = "ConfirmChangeWorkerAddress";
pub const REPAY_DEBT: &str = "RepayDebt";
pub const CHANGE_OWNER_ADDRESS: &str = "ChangeOwnerAddress";
pub const CHANGE_BENEFICIARY: &str = "ChangeBeneficiary";
pub const GET_BENEFICIARY: &str = "GetBeneficiary";

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MinerConstructorParamsV0 {
    pub owner: Addr,
    pub worker: Addr,
    pub control_addresses: Vec<Addr>,
    pub seal_proof_type: i64,
    pub peer_id: Bytes,
    pub multi_addresses: Vec<Bytes>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MinerConstructorParams {
    pub owner: Addr,
    pub worker: Addr,
    pub control_addresses: Vec<Addr>,
    pub window_post_proof_type: i64,
    pub peer_id: Bytes,
    pub multi_addresses: Vec<Bytes>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetControlAddressesReturn {
    pub owner: Addr,
    pub worker: Addr,
    pub control_addresses: Vec<Addr>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeWorkerAddressParams {
    pub new_worker: Addr,
    pub new_control_addresses: Vec<Addr>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ChangePeerIdParams {
    pub new_id: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PoStPartition {
    pub index: u64,
    pub skipped: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitWindowedPoStParams {
    pub deadline: u64,
    pub partitions: Vec<PoStPartition>,
    pub proofs: Vec<PoStProof>,
    pub chain_commit_epoch: i64,
    pub chain_commit_rand: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorPreCommitInfo {
    pub seal_proof: i64,
    pub sector_number: u64,
    pub sealed_cid: CidLink,
    pub seal_rand_epoch: i64,
    pub deal_ids: Vec<u64>,
    pub expiration: i64,
    pub replace_capacity: bool,
    pub replace_sector_deadline: u64,
    pub replace_sector_partition: u64,
    pub replace_sector_number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveCommitSectorParams {
    pub sector_number: u64,
    pub proof: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ExpirationExtension {
    pub deadline: u64,
    pub partition: u64,
    pub sectors: Bits,
    pub new_expiration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ExtendSectorExpirationParams {
    pub extensions: Vec<ExpirationExtension>,
}

/// Sectors of one partition, used by terminations, faults and recoveries.
#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PartitionSectors {
    pub deadline: u64,
    pub partition: u64,
    pub sectors: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateSectorsParams {
    pub terminations: Vec<PartitionSectors>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateSectorsReturn {
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DeclareFaultsParams {
    pub faults: Vec<PartitionSectors>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DeclareFaultsRecoveredParams {
    pub recoveries: Vec<PartitionSectors>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DeferredCronEventParamsV0 {
    pub event_payload: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DeferredCronEventParams {
    pub event_payload: Bytes,
    pub reward_smoothed: FilterEstimate,
    pub quality_adj_power_smoothed: FilterEstimate,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CheckSectorProvenParams {
    pub sector_number: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ApplyRewardParams {
    pub reward: Amount,
    pub penalty: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ReportConsensusFaultParams {
    pub header1: Bytes,
    pub header2: Bytes,
    pub header_extra: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawBalanceParams {
    pub amount_requested: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSectorProofsParamsV0 {
    pub sectors: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSectorProofsParams {
    pub sectors: Vec<u64>,
    pub reward_smoothed: FilterEstimate,
    pub reward_baseline_power: BigNum,
    pub quality_adj_power_smoothed: FilterEstimate,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeMultiaddrsParams {
    pub new_multi_addrs: Vec<Bytes>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CompactPartitionsParams {
    pub deadline: u64,
    pub partitions: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CompactSectorNumbersParams {
    pub mask_sector_numbers: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DisputeWindowedPoStParams {
    pub deadline: u64,
    pub post_index: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PreCommitSectorBatchParams {
    pub sectors: Vec<SectorPreCommitInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveCommitAggregateParams {
    pub sector_numbers: Bits,
    pub aggregate_proof: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaUpdate {
    pub sector_number: u64,
    pub deadline: u64,
    pub partition: u64,
    pub new_sealed_cid: CidLink,
    pub deals: Vec<u64>,
    pub update_proof_type: i64,
    pub replica_proof: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveReplicaUpdatesParams {
    pub updates: Vec<ReplicaUpdate>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorPreCommitInfo2 {
    pub seal_proof: i64,
    pub sector_number: u64,
    pub sealed_cid: CidLink,
    pub seal_rand_epoch: i64,
    pub deal_ids: Vec<u64>,
    pub expiration: i64,
    pub unsealed_cid: Option<CidLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PreCommitSectorBatchParams2 {
    pub sectors: Vec<SectorPreCommitInfo2>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicaUpdate2 {
    pub sector_number: u64,
    pub deadline: u64,
    pub partition: u64,
    pub new_sealed_cid: CidLink,
    pub new_unsealed_cid: CidLink,
    pub deals: Vec<u64>,
    pub update_proof_type: i64,
    pub replica_proof: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveReplicaUpdatesParams2 {
    pub updates: Vec<ReplicaUpdate2>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeBeneficiaryParams {
    pub new_beneficiary: Addr,
    pub new_quota: Amount,
    pub new_expiration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BeneficiaryTerm {
    pub quota: Amount,
    pub used_quota: Amount,
    pub expiration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveBeneficiary {
    pub beneficiary: Addr,
    pub term: BeneficiaryTerm,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PendingBeneficiaryChange {
    pub new_beneficiary: Addr,
    pub new_quota: Amount,
    pub new_expiration: i64,
    pub approved_by_beneficiary: bool,
    pub approved_by_nominee: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetBeneficiaryReturn {
    pub active: ActiveBeneficiary,
    pub proposed: Option<PendingBeneficiaryChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorClaim {
    pub sector_number: u64,
    pub maintain_claims: Vec<u64>,
    pub drop_claims: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ExpirationExtension2 {
    pub deadline: u64,
    pub partition: u64,
    pub sectors: Bits,
    pub sectors_with_claims: Vec<SectorClaim>,
    pub new_expiration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ExtendSectorExpiration2Params {
    pub extensions: Vec<ExpirationExtension2>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MovePartitionsParams {
    pub orig_deadline: u64,
    pub dest_deadline: u64,
    pub partitions: Bits,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct VerifiedAllocationKey {
    pub client: u64,
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DataActivationNotification {
    pub address: Addr,
    pub payload: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PieceActivationManifest {
    pub cid: CidLink,
    pub size: u64,
    pub verified_allocation_key: Option<VerifiedAllocationKey>,
    pub notify: Vec<DataActivationNotification>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorActivationManifest {
    pub sector_number: u64,
    pub pieces: Vec<PieceActivationManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveCommitSectors3Params {
    pub sector_activations: Vec<SectorActivationManifest>,
    pub sector_proofs: Vec<Bytes>,
    pub aggregate_proof: Bytes,
    pub aggregate_proof_type: Option<i64>,
    pub require_activation_success: bool,
    pub require_notification_success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorUpdateManifest {
    pub sector: u64,
    pub deadline: u64,
    pub partition: u64,
    pub new_sealed_cid: CidLink,
    pub pieces: Vec<PieceActivationManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveReplicaUpdates3Params {
    pub sector_updates: Vec<SectorUpdateManifest>,
    pub sector_proofs: Vec<Bytes>,
    pub aggregate_proof: Bytes,
    pub update_proofs_type: i64,
    pub aggregate_proof_type: Option<i64>,
    pub require_activation_success: bool,
    pub require_notification_success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SectorNiActivationInfo {
    pub sealing_number: u64,
    pub sealer_id: u64,
    pub sealed_cid: CidLink,
    pub sector_number: u64,
    pub seal_rand_epoch: i64,
    pub expiration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProveCommitSectorsNiParams {
    pub sectors: Vec<SectorNiActivationInfo>,
    pub aggregate_proof: Bytes,
    pub seal_proof_type: i64,
    pub aggregate_proof_type: i64,
    pub proving_deadline: u64,
    pub require_activation_success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetOwnerReturn {
    pub owner: Addr,
    pub proposed: Option<Addr>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetVestingFundsReturn {
    pub vesting_funds: Vec<(i64, Amount)>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetPeerIdReturn {
    pub peer_id: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetMultiaddrsReturn {
    pub multi_addrs: Vec<Bytes>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MaxTerminationFeeParams {
    pub power: BigNum,
    pub initial_pledge: Amount,
}

fn constructor_params(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0
        | ActorsVersion::V2
        | ActorsVersion::V3
        | ActorsVersion::V4
        | ActorsVersion::V5
        | ActorsVersion::V6
        | ActorsVersion::V7 => Schema::of::<MinerConstructorParamsV0>(),
        ActorsVersion::V8
        | ActorsVersion::V9
        | ActorsVersion::V10
        | ActorsVersion::V11
        | ActorsVersion::V12
        | ActorsVersion::V13
        | ActorsVersion::V14
        | ActorsVersion::V15
        | ActorsVersion::V16 => Schema::of::<MinerConstructorParams>(),
    }
}

fn deferred_cron_event_params(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0
        | ActorsVersion::V2
        | ActorsVersion::V3
        | ActorsVersion::V4
        | ActorsVersion::V5 => Schema::of::<DeferredCronEventParamsV0>(),
        ActorsVersion::V6
        | ActorsVersion::V7
        | ActorsVersion::V8
        | ActorsVersion::V9
        | ActorsVersion::V10
        | ActorsVersion::V11
        | ActorsVersion::V12
        | ActorsVersion::V13
        | ActorsVersion::V14
        | ActorsVersion::V15
        | ActorsVersion::V16 => Schema::of::<DeferredCronEventParams>(),
    }
}

fn confirm_sector_proofs_params(version: ActorsVersion) -> Schema {
    match version {
        ActorsVersion::V0
        | ActorsVersion::V2
        | ActorsVersion::V3
        | ActorsVersion::V4
        | ActorsVersion::V5
        | ActorsVersion::V6 => Schema::of::<ConfirmSectorProofsParamsV0>(),
        ActorsVersion::V7
        | ActorsVersion::V8
        | ActorsVersion::V9
        | ActorsVersion::V10
        | ActorsVersion::V11
        | ActorsVersion::V12
        | ActorsVersion::V13
        | ActorsVersion::V14
        | ActorsVersion::V15
        | ActorsVersion::V16 => Schema::of::<ConfirmSectorProofsParams>(),
    }
}

pub struct Miner;

impl ActorDecoder for Miner {
    fn name(&self) -> ActorKind {
        ActorKind::Miner
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table
            .add(METHOD_CONSTRUCTOR, CONSTRUCTOR)
            .params_schema(constructor_params(version));
        table
            .add(2, "ControlAddresses")
            .returns::<GetControlAddressesReturn>();
        table
            .add(3, CHANGE_WORKER_ADDRESS)
            .params::<ChangeWorkerAddressParams>();
        table.add(4, CHANGE_PEER_ID).params::<ChangePeerIdParams>();
        table
            .add(5, "SubmitWindowedPoSt")
            .params::<SubmitWindowedPoStParams>();
        if version <= ActorsVersion::V12 {
            table.add(6, "PreCommitSector").params::<SectorPreCommitInfo>();
        }
        table
            .add(7, "ProveCommitSector")
            .params::<ProveCommitSectorParams>();
        table
            .add(8, "ExtendSectorExpiration")
            .params::<ExtendSectorExpirationParams>();
        table
            .add(9, "TerminateSectors")
            .params::<TerminateSectorsParams>()
            .returns::<TerminateSectorsReturn>();
        table.add(10, "DeclareFaults").params::<DeclareFaultsParams>();
        table
            .add(11, "DeclareFaultsRecovered")
            .params::<DeclareFaultsRecoveredParams>();
        table
            .add(12, "OnDeferredCronEvent")
            .params_schema(deferred_cron_event_params(version));
        table
            .add(13, "CheckSectorProven")
            .params::<CheckSectorProvenParams>();
        if version == ActorsVersion::V0 {
            table.add(14, "AddLockedFund").params::<Amount>();
        } else {
            table.add(14, "ApplyRewards").params::<ApplyRewardParams>();
        }
        table
            .add(15, "ReportConsensusFault")
            .params::<ReportConsensusFaultParams>();

        let withdraw = table
            .add(16, WITHDRAW_BALANCE)
            .params::<WithdrawBalanceParams>();
        if version >= ActorsVersion::V9 {
            withdraw.returns::<Amount>();
        }

        if version <= ActorsVersion::V12 {
            table
                .add(17, "ConfirmSectorProofsValid")
                .params_schema(confirm_sector_proofs_params(version));
        } else {
            table.add(17, "InternalSectorSetupForPreseal");
        }
        table
            .add(18, CHANGE_MULTIADDRS)
            .params::<ChangeMultiaddrsParams>();
        table
            .add(19, "CompactPartitions")
            .params::<CompactPartitionsParams>();
        table
            .add(20, "CompactSectorNumbers")
            .params::<CompactSectorNumbersParams>();
        if version <= ActorsVersion::V8 {
            table.add(21, "ConfirmUpdateWorkerKey");
        } else {
            table.add(21, CONFIRM_CHANGE_WORKER_ADDRESS);
        }

        if version >= ActorsVersion::V2 {
            table.add(22, REPAY_DEBT);
            table.add(23, CHANGE_OWNER_ADDRESS).params::<Addr>();
        }
        if version >= ActorsVersion::V3 {
            table
                .add(24, "DisputeWindowedPoSt")
                .params::<DisputeWindowedPoStParams>();
        }
        if version >= ActorsVersion::V5 {
            if version <= ActorsVersion::V12 {
                table
                    .add(25, "PreCommitSectorBatch")
                    .params::<PreCommitSectorBatchParams>();
            }
            table
                .add(26, "ProveCommitAggregate")
                .params::<ProveCommitAggregateParams>();
        }
        if version >= ActorsVersion::V7 && version <= ActorsVersion::V12 {
            table
                .add(27, "ProveReplicaUpdates")
                .params::<ProveReplicaUpdatesParams>()
                .returns::<Bits>();
        }
        if version >= ActorsVersion::V9 {
            table
                .add(28, "PreCommitSectorBatch2")
                .params::<PreCommitSectorBatchParams2>();
            table
                .add(29, "ProveReplicaUpdates2")
                .params::<ProveReplicaUpdatesParams2>()
                .returns::<Bits>();
            table
                .add(30, CHANGE_BENEFICIARY)
                .params::<ChangeBeneficiaryParams>();
            table
                .add(31, GET_BENEFICIARY)
                .returns::<GetBeneficiaryReturn>();
            table
                .add(32, "ExtendSectorExpiration2")
                .params::<ExtendSectorExpiration2Params>();
        }
        if version >= ActorsVersion::V10 {
            table.alias(
                frc42::CHANGE_WORKER_ADDRESS,
                "ChangeWorkerAddressExported",
                CHANGE_WORKER_ADDRESS,
            );
            table.alias(frc42::CHANGE_PEER_ID, "ChangePeerIDExported", CHANGE_PEER_ID);
            table.alias(
                frc42::WITHDRAW_BALANCE,
                "WithdrawBalanceExported",
                WITHDRAW_BALANCE,
            );
            table.alias(
                frc42::CHANGE_MULTIADDRS,
                "ChangeMultiaddrsExported",
                CHANGE_MULTIADDRS,
            );
            table.alias(
                frc42::CONFIRM_CHANGE_WORKER_ADDRESS,
                "ConfirmChangeWorkerAddressExported",
                CONFIRM_CHANGE_WORKER_ADDRESS,
            );
            table.alias(frc42::REPAY_DEBT, "RepayDebtExported", REPAY_DEBT);
            table.alias(
                frc42::CHANGE_OWNER_ADDRESS,
                "ChangeOwnerAddressExported",
                CHANGE_OWNER_ADDRESS,
            );
            table.alias(
                frc42::CHANGE_BENEFICIARY,
                "ChangeBeneficiaryExported",
                CHANGE_BENEFICIARY,
            );
            table.alias(
                frc42::GET_BENEFICIARY,
                "GetBeneficiaryExported",
                GET_BENEFICIARY,
            );
            table
                .add(frc42::GET_OWNER, "GetOwnerExported")
                .returns::<GetOwnerReturn>();
            table
                .add(frc42::IS_CONTROLLING_ADDRESS, "IsControllingAddressExported")
                .params::<Addr>()
                .returns::<bool>();
            table
                .add(frc42::GET_SECTOR_SIZE, "GetSectorSizeExported")
                .returns::<u64>();
            table
                .add(frc42::GET_AVAILABLE_BALANCE, "GetAvailableBalanceExported")
                .returns::<Amount>();
            table
                .add(frc42::GET_VESTING_FUNDS, "GetVestingFundsExported")
                .returns::<GetVestingFundsReturn>();
            table
                .add(frc42::GET_PEER_ID, "GetPeerIDExported")
                .returns::<GetPeerIdReturn>();
            table
                .add(frc42::GET_MULTIADDRS, "GetMultiaddrsExported")
                .returns::<GetMultiaddrsReturn>();
        }
        if version >= ActorsVersion::V12 {
            table
                .add(33, "MovePartitions")
                .params::<MovePartitionsParams>();
        }
        if version >= ActorsVersion::V13 {
            table
                .add(34, "ProveCommitSectors3")
                .params::<ProveCommitSectors3Params>()
                .returns::<BatchReturn>();
            table
                .add(35, "ProveReplicaUpdates3")
                .params::<ProveReplicaUpdates3Params>()
                .returns::<BatchReturn>();
        }
        if version >= ActorsVersion::V14 {
            table
                .add(36, "ProveCommitSectorsNI")
                .params::<ProveCommitSectorsNiParams>()
                .returns::<BatchReturn>();
        }
        if version >= ActorsVersion::V16 {
            table
                .add(frc42::MAX_TERMINATION_FEE, "MaxTerminationFeeExported")
                .params::<MaxTerminationFeeParams>()
                .returns::<Amount>();
            table
                .add(frc42::INITIAL_PLEDGE, "InitialPledgeExported")
                .returns::<Amount>();
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
