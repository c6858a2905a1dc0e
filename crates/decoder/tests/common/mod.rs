// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use cid::Cid;
use fil_actors_decoder::{
    ActorKind, DecodeRequest, MemoryIdentityCache, Message, Network, Receipt, TransactionDecoder,
    VersionResolver,
};
use fvm_shared::address::Address;
use serde::Serialize;
use std::sync::Arc;

/// dag-cbor cid whose blake2b digest is the bytes 1..=32.
pub const MESSAGE_CID: &str = "bafy2bzaceaaqeayeaudaocajbifqydiob4ibceqtcqkrmfyydenbwha5dypsa";
pub const OTHER_CID: &str = "bafy2bzaceairceirceirceirceirceirceirceirceirceirceirceirceirc";

/// Mainnet heights by actors version.
pub const MAINNET_V0: i64 = 100_000;
pub const MAINNET_V5: i64 = 1_000_000;
pub const MAINNET_V6: i64 = 1_300_000;
pub const MAINNET_V7: i64 = 1_700_000;
pub const MAINNET_V8: i64 = 2_000_000;
pub const MAINNET_V9: i64 = 2_500_000;
pub const MAINNET_V10: i64 = 2_700_000;
pub const MAINNET_V11: i64 = 3_000_000;
pub const MAINNET_V12: i64 = 3_500_000;
pub const MAINNET_V13: i64 = 4_000_000;
pub const MAINNET_V14: i64 = 4_200_000;
pub const MAINNET_V15: i64 = 4_500_000;

pub const SENDER: u64 = 100;
pub const ACCOUNT: u64 = 1600;
pub const MULTISIG: u64 = 1500;
pub const NESTED_MULTISIG: u64 = 1501;
pub const CONTRACT: u64 = 1700;
pub const MINER: u64 = 1800;
pub const ETH_ACCOUNT: u64 = 1900;
pub const PLACEHOLDER: u64 = 1901;
pub const PAYCH: u64 = 2100;

pub fn message_cid() -> Cid {
    MESSAGE_CID.parse().unwrap()
}

pub fn cbor<T: Serialize>(value: &T) -> Vec<u8> {
    fvm_ipld_encoding::to_vec(value).unwrap()
}

/// Identity cache with one actor of each kind used in the tests.
pub fn identity() -> Arc<MemoryIdentityCache> {
    let cache = MemoryIdentityCache::new();
    let actors = [
        (ACCOUNT, ActorKind::Account),
        (MULTISIG, ActorKind::Multisig),
        (NESTED_MULTISIG, ActorKind::Multisig),
        (CONTRACT, ActorKind::Evm),
        (MINER, ActorKind::Miner),
        (ETH_ACCOUNT, ActorKind::EthAccount),
        (PLACEHOLDER, ActorKind::Placeholder),
        (PAYCH, ActorKind::PaymentChannel),
    ];
    for (id, kind) in actors {
        cache.insert_actor(Address::new_id(id), None, kind).unwrap();
    }
    Arc::new(cache)
}

pub fn decoder() -> TransactionDecoder {
    TransactionDecoder::new(VersionResolver::new(), identity())
}

pub fn request(network: Network, height: i64, to: u64, method: u64, params: Vec<u8>, ret: Vec<u8>) -> DecodeRequest {
    let message = Message::new(Address::new_id(SENDER), Address::new_id(to), method, params);
    DecodeRequest::new(network, height, message, Receipt::ok(ret), message_cid())
}

pub fn mainnet(height: i64, to: u64, method: u64, params: Vec<u8>, ret: Vec<u8>) -> DecodeRequest {
    request(Network::Mainnet, height, to, method, params, ret)
}
