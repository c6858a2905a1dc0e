// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end decoding of common calls through the public API.

mod common;

use common::*;
use fil_actors_decoder::{
    ActorKind, DecodeError, IdentityResolver, Network, NetworkVersion, TransactionDecoder,
    UpgradeSchedule, VersionResolver,
};
use fvm_ipld_encoding::BytesSer;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use serde_json::{Value, json};
use std::collections::BTreeMap;

// ========================================================================
// Send and account calls
// ========================================================================

#[test]
fn test_send_passes_raw_bytes_through() {
    let decoder = decoder();
    let outcome = decoder
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 0, vec![0x01, 0x02], vec![]))
        .unwrap();

    assert_eq!(outcome.actor, ActorKind::Account);
    assert_eq!(outcome.method, "Send");
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0x0102")));
    assert!(outcome.result.metadata.ret().is_none());
    assert!(outcome.result.soft_failures.is_empty());
}

#[test]
fn test_empty_send_has_no_metadata() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, MINER, 0, vec![], vec![]))
        .unwrap();
    assert_eq!(outcome.method, "Send");
    assert!(outcome.result.metadata.is_empty());
}

#[test]
fn test_account_constructor_renders_address_for_network() {
    let params = cbor(&Address::new_id(1001));
    let decoder = decoder();

    let mainnet = decoder
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 1, params.clone(), vec![]))
        .unwrap();
    assert_eq!(mainnet.method, "Constructor");
    assert_eq!(mainnet.result.metadata.params(), Some(&json!("f01001")));

    let calibration = decoder
        .decode(&request(Network::Calibration, 2_000_000, ACCOUNT, 1, params, vec![]))
        .unwrap();
    assert_eq!(calibration.result.metadata.params(), Some(&json!("t01001")));
}

#[test]
fn test_account_exported_number_is_fallback() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 1 << 25, vec![0xaa], vec![]))
        .unwrap();
    assert_eq!(outcome.method, "Fallback");
    assert!(outcome.fallback.is_none());
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0xaa")));
}

#[test]
fn test_unmapped_account_method_passes_through() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 77, vec![0xaa], vec![0x01]))
        .unwrap();
    assert_eq!(outcome.actor, ActorKind::Account);
    assert_eq!(outcome.method, "Unknown");
    assert!(outcome.fallback.is_none());
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0xaa")));
    assert_eq!(outcome.result.metadata.ret(), Some(&json!("0x01")));
}

#[test]
fn test_account_method_by_unknown_name_passes_through() {
    let request =
        mainnet(MAINNET_V12, ACCOUNT, 77, vec![0xaa], vec![]).with_method_name("Teleport");
    let outcome = decoder().decode(&request).unwrap();
    assert_eq!(outcome.method, "Teleport");
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0xaa")));
}

#[test]
fn test_system_calls_are_not_guessed() {
    let params = cbor(&Address::new_id(1001));
    let expected = json!(format!("0x{}", hex::encode(&params)));
    let decoder = decoder();

    let unmapped = decoder
        .decode(&mainnet(MAINNET_V12, 0, 5, params.clone(), vec![]))
        .unwrap();
    assert_eq!(unmapped.actor, ActorKind::System);
    assert_eq!(unmapped.method, "Unknown");
    assert!(unmapped.fallback.is_none());
    assert_eq!(unmapped.result.metadata.params(), Some(&expected));

    let constructor = decoder
        .decode(&mainnet(MAINNET_V12, 0, 1, params, vec![]))
        .unwrap();
    assert_eq!(constructor.method, "Constructor");
    assert_eq!(constructor.result.metadata.params(), Some(&expected));
}

#[test]
fn test_eth_account_calls_pass_through() {
    let decoder = decoder();
    for (method, name) in [(1, "Constructor"), (42, "Unknown"), (1 << 24, "Fallback")] {
        let outcome = decoder
            .decode(&mainnet(MAINNET_V12, ETH_ACCOUNT, method, vec![0x0b], vec![]))
            .unwrap();
        assert_eq!(outcome.actor, ActorKind::EthAccount);
        assert_eq!(outcome.method, name);
        assert!(outcome.fallback.is_none());
        assert_eq!(outcome.result.metadata.params(), Some(&json!("0x0b")));
    }
}

#[test]
fn test_placeholder_calls_pass_through() {
    let params = cbor(&Address::new_id(1001));
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, PLACEHOLDER, 3, params.clone(), vec![]))
        .unwrap();
    assert_eq!(outcome.actor, ActorKind::Placeholder);
    assert_eq!(outcome.method, "Unknown");
    assert!(outcome.fallback.is_none());
    assert_eq!(
        outcome.result.metadata.params(),
        Some(&json!(format!("0x{}", hex::encode(&params))))
    );
}

// ========================================================================
// Version gating
// ========================================================================

#[test]
fn test_exec4_is_rejected_before_fevm() {
    let decoder = decoder();
    let request = mainnet(MAINNET_V9, 1, 3, vec![], vec![]).with_method_name("Exec4");

    let err = decoder.decode(&request).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::InvalidHeightForMethod { actor: ActorKind::Init, ref method, height }
            if method == "Exec4" && height == MAINNET_V9
    ));
}

#[test]
fn test_exec_decodes_before_fevm() {
    let code: cid::Cid = "bafkqadlgnfwc6mjpmfrwg33vnz2a".parse().unwrap();
    let constructor = cbor(&Address::new_secp256k1(&[7u8; 65]).unwrap());
    let params = cbor(&(code, BytesSer(&constructor)));
    let ret = cbor(&(Address::new_id(2001), Address::new_actor(b"created")));

    let outcome = decoder()
        .decode(&mainnet(MAINNET_V9, 1, 2, params, ret))
        .unwrap();

    assert_eq!(outcome.method, "Exec");
    let params = outcome.result.metadata.params().unwrap();
    assert_eq!(params["CodeCid"], json!({"/": "bafkqadlgnfwc6mjpmfrwg33vnz2a"}));
    assert!(params["ConstructorParams"].as_str().unwrap().starts_with("f1"));
    assert_eq!(outcome.result.metadata.ret().unwrap()["IdAddress"], json!("f02001"));

    let info = outcome.result.address_info.unwrap();
    assert_eq!(info.short, Address::new_id(2001));
    assert_eq!(info.actor_kind, Some(ActorKind::Account));
}

#[test]
fn test_exec_registers_created_actor() {
    let code: cid::Cid = "bafkqadtgnfwc6nzpnv2wy5djonuwo".parse().unwrap();
    let params = cbor(&(code, BytesSer(&[])));
    let robust = Address::new_actor(b"msig");
    let ret = cbor(&(Address::new_id(2002), robust));

    let cache = identity();
    let decoder = TransactionDecoder::new(VersionResolver::new(), cache.clone());
    decoder
        .decode(&mainnet(MAINNET_V12, 1, 2, params, ret))
        .unwrap();

    assert_eq!(cache.short_address(&robust).unwrap(), Address::new_id(2002));
    assert_eq!(
        cache
            .actor_kind(&Address::new_id(2002), MAINNET_V12, &Default::default())
            .unwrap(),
        ActorKind::Multisig
    );
}

#[test]
fn test_unknown_method_name_is_rejected() {
    let request = mainnet(MAINNET_V12, 1, 2, vec![], vec![]).with_method_name("Teleport");
    let err = decoder().decode(&request).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownMethod { actor: ActorKind::Init, .. }));
    assert_eq!(err.kind(), "unknown_method");
}

// ========================================================================
// Heights
// ========================================================================

#[test]
fn test_height_below_schedule_is_unsupported() {
    let err = decoder()
        .decode(&mainnet(-1, ACCOUNT, 0, vec![], vec![]))
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedHeight { height: -1, .. }));
}

#[test]
fn test_custom_network_schedule() {
    let devnet = Network::Custom("devnet".to_string());
    let schedule = UpgradeSchedule::new(
        "devnet",
        BTreeMap::from([(1_000, NetworkVersion::V21), (2_000, NetworkVersion::V22)]),
    )
    .unwrap();
    let resolver = VersionResolver::new().with_schedule(&devnet, schedule);
    let decoder = TransactionDecoder::new(resolver, identity());

    let err = decoder
        .decode(&request(devnet.clone(), 500, ACCOUNT, 0, vec![], vec![]))
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedHeight { .. }));

    let outcome = decoder
        .decode(&request(devnet, 2_500, ACCOUNT, 0, vec![], vec![]))
        .unwrap();
    assert_eq!(outcome.version, NetworkVersion::V22);
}

#[test]
fn test_unknown_receiver_fails_resolution() {
    let err = decoder()
        .decode(&mainnet(MAINNET_V12, 424242, 0, vec![], vec![]))
        .unwrap_err();
    assert_eq!(err.kind(), "actor_resolution");
}

// ========================================================================
// Schema shapes
// ========================================================================

#[test]
fn test_reward_this_epoch_reward_has_both_keys() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, 2, 3, vec![], vec![]))
        .unwrap();
    assert_eq!(outcome.method, "ThisEpochReward");
    assert_eq!(outcome.result.metadata.params(), Some(&Value::Null));
    assert_eq!(outcome.result.metadata.ret(), Some(&Value::Null));
}

#[test]
fn test_market_add_balance_renders_address() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, 5, 2, cbor(&Address::new_id(MINER)), vec![]))
        .unwrap();
    assert_eq!(outcome.actor, ActorKind::Market);
    assert_eq!(outcome.method, "AddBalance");
    assert_eq!(outcome.result.metadata.params(), Some(&json!("f01800")));
}

#[test]
fn test_malformed_params_fail() {
    let err = decoder()
        .decode(&mainnet(MAINNET_V12, ACCOUNT, 1, vec![0x01], vec![]))
        .unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { field: "Params", .. }));
}

#[test]
fn test_decoding_is_deterministic() {
    let decoder = decoder();
    let params = cbor(&(
        Address::new_id(MINER),
        TokenAmount::from_atto(5),
        0u64,
        BytesSer(&[]),
    ));
    let request = mainnet(MAINNET_V12, MULTISIG, 2, params, vec![]);

    let first = decoder.decode(&request).unwrap();
    let second = decoder.decode(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.result.metadata).unwrap(),
        serde_json::to_string(&second.result.metadata).unwrap()
    );
}
