// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use fvm_shared::MethodNum;

/// Metadata key holding decoded parameters.
pub const PARAMS_KEY: &str = "Params";
/// Metadata key holding the decoded return value.
pub const RETURN_KEY: &str = "Return";
/// Metadata key with the EVM logs emitted by the decoded call.
pub const ETH_LOGS_KEY: &str = "EthLogs";
/// Metadata key with the Ethereum transaction hash of a creation message.
pub const ETH_HASH_KEY: &str = "EthHash";
/// Metadata key naming the multisig operation carried by the message.
pub const TX_TYPE_TO_EXECUTE_KEY: &str = "TxTypeToExecute";

/// Prefix used for hex renderings of byte strings.
pub const HEX_PREFIX: &str = "0x";

/// Method numbers from here on are FRC-42 exported methods.
pub const FIRST_EXPORTED_METHOD_NUMBER: MethodNum = 1 << 24;

/// Delegated address namespace owned by the Ethereum Address Manager.
pub const EAM_NAMESPACE: u64 = 10;

/// Multisig proposals wrapping another multisig proposal are not unwrapped
/// past this depth.
pub const MAX_MULTISIG_DEPTH: u8 = 1;

/// Method names shared by several actors.
pub mod method {
    pub const SEND: &str = "Send";
    pub const CONSTRUCTOR: &str = "Constructor";
    pub const FALLBACK: &str = "Fallback";
    pub const UNKNOWN: &str = "Unknown";
    pub const UNIVERSAL_RECEIVER_HOOK: &str = "UniversalReceiverHook";
}

/// FRC-42 hashes of exported method names.
pub mod frc42 {
    use fvm_shared::MethodNum;

    pub const AUTHENTICATE_MESSAGE: MethodNum = 2643134072;
    pub const RECEIVE: MethodNum = 3726118371;

    pub const EXEC: MethodNum = 81225168;

    pub const CREATE_MINER: MethodNum = 1173380165;
    pub const NETWORK_RAW_POWER: MethodNum = 931722534;
    pub const MINER_RAW_POWER: MethodNum = 3753401894;
    pub const MINER_COUNT: MethodNum = 1987646258;
    pub const MINER_CONSENSUS_COUNT: MethodNum = 196739875;
    pub const MINER_POWER: MethodNum = 36284446;

    pub const ADD_BALANCE: MethodNum = 822473126;
    pub const WITHDRAW_BALANCE: MethodNum = 2280458852;
    pub const PUBLISH_STORAGE_DEALS: MethodNum = 2236929350;
    pub const GET_BALANCE: MethodNum = 726108461;
    pub const GET_DEAL_DATA_COMMITMENT: MethodNum = 1157985802;
    pub const GET_DEAL_CLIENT: MethodNum = 128053329;
    pub const GET_DEAL_PROVIDER: MethodNum = 935081690;
    pub const GET_DEAL_LABEL: MethodNum = 46363526;
    pub const GET_DEAL_TERM: MethodNum = 163777312;
    pub const GET_DEAL_TOTAL_PRICE: MethodNum = 4287162428;
    pub const GET_DEAL_CLIENT_COLLATERAL: MethodNum = 200567895;
    pub const GET_DEAL_PROVIDER_COLLATERAL: MethodNum = 2986712137;
    pub const GET_DEAL_VERIFIED: MethodNum = 2627389465;
    pub const GET_DEAL_ACTIVATION: MethodNum = 2567238399;
    pub const GET_DEAL_SECTOR: MethodNum = 2611213344;
    pub const SETTLE_DEAL_PAYMENTS: MethodNum = 1900091594;
    pub const SECTOR_CONTENT_CHANGED: MethodNum = 2034386435;

    pub const CHANGE_WORKER_ADDRESS: MethodNum = 3302309124;
    pub const CHANGE_PEER_ID: MethodNum = 1236548004;
    pub const CHANGE_MULTIADDRS: MethodNum = 1063480576;
    pub const CONFIRM_CHANGE_WORKER_ADDRESS: MethodNum = 2354970453;
    pub const REPAY_DEBT: MethodNum = 3665352697;
    pub const CHANGE_OWNER_ADDRESS: MethodNum = 1010589339;
    pub const CHANGE_BENEFICIARY: MethodNum = 1570634796;
    pub const GET_BENEFICIARY: MethodNum = 4158972569;
    pub const GET_OWNER: MethodNum = 3275365574;
    pub const IS_CONTROLLING_ADDRESS: MethodNum = 348244887;
    pub const GET_SECTOR_SIZE: MethodNum = 3858292296;
    pub const GET_AVAILABLE_BALANCE: MethodNum = 4026106874;
    pub const GET_VESTING_FUNDS: MethodNum = 1726876304;
    pub const GET_PEER_ID: MethodNum = 2812875329;
    pub const GET_MULTIADDRS: MethodNum = 1332909407;
    pub const MAX_TERMINATION_FEE: MethodNum = 4127382196;
    pub const INITIAL_PLEDGE: MethodNum = 3180523767;

    pub const ADD_VERIFIED_CLIENT: MethodNum = 3916220144;
    pub const REMOVE_EXPIRED_ALLOCATIONS: MethodNum = 2421068268;
    pub const GET_CLAIMS: MethodNum = 2199871187;
    pub const EXTEND_CLAIM_TERMS: MethodNum = 1752273514;
    pub const REMOVE_EXPIRED_CLAIMS: MethodNum = 2873373899;

    pub const MINT: MethodNum = 116935346;
    pub const DESTROY: MethodNum = 2624896501;
    pub const NAME: MethodNum = 48890204;
    pub const SYMBOL: MethodNum = 2061153854;
    pub const GRANULARITY: MethodNum = 3936767397;
    pub const TOTAL_SUPPLY: MethodNum = 114981429;
    pub const BALANCE: MethodNum = 3261979605;
    pub const TRANSFER: MethodNum = 80475954;
    pub const TRANSFER_FROM: MethodNum = 3621052141;
    pub const INCREASE_ALLOWANCE: MethodNum = 1777121560;
    pub const DECREASE_ALLOWANCE: MethodNum = 1529376545;
    pub const REVOKE_ALLOWANCE: MethodNum = 2765635761;
    pub const BURN: MethodNum = 1434719642;
    pub const BURN_FROM: MethodNum = 2979674018;
    pub const ALLOWANCE: MethodNum = 4205072950;

    pub const INVOKE_EVM: MethodNum = 3844450837;
}
