// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contract invocation and creation through the EVM and EAM actors.

mod common;

use common::*;
use fil_actors_decoder::{
    ActorKind, DecodeError, EthLog, IdentityResolver, SoftFailure, TransactionDecoder,
    VersionResolver,
};
use fvm_ipld_encoding::BytesSer;
use fvm_shared::address::Address;
use serde_json::{Value, json};

const INVOKE_CONTRACT: u64 = 3844450837;
const EAM: u64 = 10;

fn log(transaction_cid: &str, log_index: &str) -> EthLog {
    EthLog {
        address: "0x6f0d6b9d0b5b1c2f8b8d8e5b0c4a1e2d3f4a5b6c".to_string(),
        data: "0x".to_string(),
        topics: vec!["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef".to_string()],
        removed: false,
        log_index: log_index.to_string(),
        transaction_index: "0x0".to_string(),
        transaction_hash: "0x0102".to_string(),
        block_hash: "0x0304".to_string(),
        block_number: "0x3567e0".to_string(),
        transaction_cid: transaction_cid.to_string(),
    }
}

fn eth_address() -> [u8; 20] {
    [0x5a; 20]
}

// ========================================================================
// InvokeContract
// ========================================================================

#[test]
fn test_invoke_contract_keeps_logs_of_this_message() {
    let request = mainnet(
        MAINNET_V12,
        CONTRACT,
        INVOKE_CONTRACT,
        cbor(&BytesSer(&[0xa9, 0x05, 0x9c, 0xbb])),
        cbor(&BytesSer(&[0x01])),
    )
    .with_eth_logs(vec![
        log(MESSAGE_CID, "0x0"),
        log(OTHER_CID, "0x1"),
        log(MESSAGE_CID, "0x2"),
    ]);

    let outcome = decoder().decode(&request).unwrap();
    assert_eq!(outcome.actor, ActorKind::Evm);
    assert_eq!(outcome.method, "InvokeContract");

    let metadata = &outcome.result.metadata;
    assert_eq!(metadata.params(), Some(&json!("0xa9059cbb")));
    assert_eq!(metadata.ret(), Some(&json!("0x01")));

    let logs = metadata.get("EthLogs").unwrap().as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["logIndex"], json!("0x0"));
    assert_eq!(logs[1]["logIndex"], json!("0x2"));
}

#[test]
fn test_invoke_contract_without_logs() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, CONTRACT, INVOKE_CONTRACT, vec![], vec![]))
        .unwrap();
    let metadata = &outcome.result.metadata;
    assert_eq!(metadata.params(), Some(&Value::Null));
    assert_eq!(metadata.ret(), Some(&Value::Null));
    assert_eq!(metadata.get("EthLogs"), Some(&json!([])));
}

#[test]
fn test_invoke_contract_with_trailing_bytes_renders_raw() {
    let mut params = cbor(&BytesSer(&[0x01, 0x02]));
    params.push(0x00);
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, CONTRACT, INVOKE_CONTRACT, params, vec![]))
        .unwrap();
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0x42010200")));
}

#[test]
fn test_read_only_invoke_by_name() {
    let request = mainnet(MAINNET_V12, CONTRACT, INVOKE_CONTRACT, cbor(&BytesSer(&[0x02])), vec![])
        .with_method_name("InvokeContractReadOnly");
    let outcome = decoder().decode(&request).unwrap();
    assert_eq!(outcome.method, "InvokeContractReadOnly");
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0x02")));
}

// ========================================================================
// Contract creation
// ========================================================================

#[test]
fn test_create_registers_evm_actor() {
    let robust = Address::new_delegated(10, &eth_address()).unwrap();
    let params = cbor(&(BytesSer(&[0x60, 0x80]), 1u64));
    let ret = cbor(&(5001u64, Some(robust), BytesSer(&eth_address())));

    let cache = identity();
    let decoder = TransactionDecoder::new(VersionResolver::new(), cache.clone());
    let outcome = decoder
        .decode(&mainnet(MAINNET_V12, EAM, 2, params, ret))
        .unwrap();

    assert_eq!(outcome.actor, ActorKind::Eam);
    assert_eq!(outcome.method, "Create");
    let metadata = &outcome.result.metadata;
    assert_eq!(metadata.params().unwrap()["Initcode"], json!("0x6080"));
    assert_eq!(metadata.params().unwrap()["Nonce"], json!(1));
    assert_eq!(
        metadata.get("EthHash"),
        Some(&json!(format!(
            "0x{}",
            (1u8..=32).map(|b| format!("{b:02x}")).collect::<String>()
        )))
    );
    assert_eq!(metadata.ret().unwrap()["ActorId"], json!(5001));
    assert!(outcome.result.soft_failures.is_empty());

    let info = outcome.result.address_info.unwrap();
    assert_eq!(info.short, Address::new_id(5001));
    assert_eq!(info.robust, Some(robust));
    assert_eq!(info.eth_address, Some(format!("0x{}", "5a".repeat(20))));
    assert_eq!(info.actor_kind, Some(ActorKind::Evm));

    assert_eq!(
        cache
            .actor_kind(&Address::new_id(5001), MAINNET_V12, &Default::default())
            .unwrap(),
        ActorKind::Evm
    );
}

#[test]
fn test_create_without_robust_address_is_soft() {
    let params = cbor(&(BytesSer(&[0x60]), BytesSer(&[0u8; 32])));
    let ret = cbor(&(5002u64, Option::<Address>::None, BytesSer(&eth_address())));

    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, EAM, 3, params, ret))
        .unwrap();

    assert_eq!(outcome.method, "Create2");
    assert_eq!(outcome.result.metadata.ret().unwrap()["RobustAddress"], json!(""));
    assert!(matches!(
        outcome.result.soft_failures.as_slice(),
        [SoftFailure::Validation { field: "Return.RobustAddress", .. }]
    ));
    assert_eq!(outcome.result.address_info.unwrap().robust, None);
}

#[test]
fn test_create_external_params_are_lenient() {
    let robust = Address::new_delegated(10, &eth_address()).unwrap();
    let ret = cbor(&(5003u64, Some(robust), BytesSer(&eth_address())));

    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, EAM, 4, vec![0x01, 0x02], ret))
        .unwrap();
    assert_eq!(outcome.method, "CreateExternal");
    assert_eq!(outcome.result.metadata.params(), Some(&json!("0x0102")));
}

#[test]
fn test_create_with_short_eth_address_fails() {
    let robust = Address::new_delegated(10, &eth_address()).unwrap();
    let params = cbor(&(BytesSer(&[0x60]), 0u64));
    let ret = cbor(&(5004u64, Some(robust), BytesSer(&[0x01; 4])));

    let err = decoder()
        .decode(&mainnet(MAINNET_V12, EAM, 2, params, ret))
        .unwrap_err();
    assert!(matches!(err, DecodeError::Malformed { field: "Return", .. }));
}

#[test]
fn test_eam_is_unknown_before_fevm() {
    let err = decoder()
        .decode(&mainnet(MAINNET_V9, EAM, 2, vec![], vec![]).with_method_name("Create"))
        .unwrap_err();
    assert!(matches!(err, DecodeError::InvalidHeightForMethod { actor: ActorKind::Eam, .. }));
}
