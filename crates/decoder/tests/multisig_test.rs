// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Multisig proposals and wallet management calls.

mod common;

use common::*;
use fil_actors_decoder::{
    ActorKind, ActorsVersion, DecodeError, ParamsService, ParamsServiceError, SoftFailure,
    TransactionDecoder, VersionResolver,
};
use fvm_ipld_encoding::BytesSer;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use serde_json::{Value, json};
use std::sync::Arc;

fn propose_params(to: u64, method: u64, params: &[u8]) -> Vec<u8> {
    cbor(&(
        Address::new_id(to),
        TokenAmount::from_atto(1_000),
        method,
        BytesSer(params),
    ))
}

fn propose_return(applied: bool, code: u32, ret: &[u8]) -> Vec<u8> {
    cbor(&(7i64, applied, code, BytesSer(ret)))
}

// ========================================================================
// Propose
// ========================================================================

#[test]
fn test_propose_wrapping_send() {
    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(ACCOUNT, 0, &[]),
            propose_return(true, 0, &[]),
        ))
        .unwrap();

    assert_eq!(outcome.actor, ActorKind::Multisig);
    assert_eq!(outcome.method, "Propose");
    let params = outcome.result.metadata.params().unwrap();
    assert_eq!(params["To"], json!("f01600"));
    assert_eq!(params["Value"], json!("1000"));
    assert_eq!(params["Method"], json!("Send"));
    assert_eq!(params["Params"], Value::Null);

    let ret = outcome.result.metadata.ret().unwrap();
    assert_eq!(ret["TxnID"], json!(7));
    assert_eq!(ret["Applied"], json!(true));
    assert!(outcome.result.soft_failures.is_empty());
}

#[test]
fn test_propose_decodes_inner_params_and_return() {
    let inner_params = cbor(&Address::new_id(MINER));
    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(5, 2, &inner_params),
            vec![],
        ))
        .unwrap();

    let params = outcome.result.metadata.params().unwrap();
    assert_eq!(params["Method"], json!("AddBalance"));
    assert_eq!(params["Params"], json!("f01800"));
    assert_eq!(outcome.result.metadata.ret(), Some(&Value::Null));
}

#[test]
fn test_propose_to_unmapped_account_method_passes_through() {
    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(ACCOUNT, 77, &[0xaa]),
            vec![],
        ))
        .unwrap();

    let params = outcome.result.metadata.params().unwrap();
    assert_eq!(params["Method"], json!("Unknown"));
    assert_eq!(params["Params"], json!("0xaa"));
    assert!(outcome.result.soft_failures.is_empty());
}

#[test]
fn test_propose_with_unresolvable_target_is_soft() {
    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(9_999, 2, &[0x01]),
            vec![],
        ))
        .unwrap();

    let params = outcome.result.metadata.params().unwrap().as_object().unwrap();
    assert_eq!(params["Method"], json!(""));
    assert!(!params.contains_key("Params"));
    assert!(matches!(
        outcome.result.soft_failures.as_slice(),
        [SoftFailure::InnerCall { method: 2, .. }]
    ));
}

#[test]
fn test_propose_with_malformed_inner_params_is_soft() {
    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(5, 2, &[0xff]),
            vec![],
        ))
        .unwrap();

    assert_eq!(outcome.result.metadata.params().unwrap()["Method"], json!(""));
    assert_eq!(outcome.result.soft_failures.len(), 1);
    assert_eq!(outcome.result.soft_failures[0].reason_label(), "inner_call");
}

#[test]
fn test_nested_proposal_is_not_unwrapped() {
    let inner = propose_params(ACCOUNT, 0, &[]);
    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(NESTED_MULTISIG, 2, &inner),
            vec![],
        ))
        .unwrap();

    let params = outcome.result.metadata.params().unwrap();
    assert_eq!(params["Method"], json!("Propose"));
    // The inner proposal keeps its numeric method and raw params.
    assert_eq!(params["Params"]["Method"], json!(0));
    assert_eq!(params["Params"]["To"], json!("f01600"));
    assert!(outcome.result.soft_failures.is_empty());
}

#[test]
fn test_applied_proposal_return_feeds_inner_call() {
    let code: cid::Cid = "bafkqadlgnfwc6mjpmfrwg33vnz2a".parse().unwrap();
    let exec = cbor(&(code, BytesSer(&[])));
    let created = cbor(&(Address::new_id(3001), Address::new_actor(b"from-msig")));

    let outcome = decoder()
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            2,
            propose_params(1, 2, &exec),
            propose_return(true, 0, &created),
        ))
        .unwrap();

    assert_eq!(outcome.result.metadata.params().unwrap()["Method"], json!("Exec"));
    let ret = outcome.result.metadata.ret().unwrap();
    assert_eq!(ret["Ret"]["IdAddress"], json!("f03001"));

    let info = outcome.result.address_info.unwrap();
    assert_eq!(info.short, Address::new_id(3001));
    assert_eq!(info.actor_kind, Some(ActorKind::Account));
}

// ========================================================================
// Management methods
// ========================================================================

#[test]
fn test_add_signer_goes_through_params_service() {
    let params = cbor(&(Address::new_id(4242), true));
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, MULTISIG, 5, params, vec![]))
        .unwrap();

    assert_eq!(outcome.method, "AddSigner");
    let metadata = &outcome.result.metadata;
    assert_eq!(
        metadata.params(),
        Some(&json!({"Signer": "f04242", "Increase": true}))
    );
    assert_eq!(metadata.get("TxTypeToExecute"), Some(&json!("AddSigner")));
}

#[test]
fn test_approve_keeps_return() {
    let params = cbor(&(3i64, BytesSer(&[0x01])));
    let ret = cbor(&(true, 0u32, BytesSer(&[])));
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, MULTISIG, 3, params, ret))
        .unwrap();

    let metadata = &outcome.result.metadata;
    assert_eq!(metadata.params().unwrap()["ID"], json!(3));
    assert_eq!(metadata.ret().unwrap()["Applied"], json!(true));
    assert_eq!(metadata.get("TxTypeToExecute"), Some(&json!("Approve")));
    assert_eq!(
        metadata.keys().collect::<Vec<_>>(),
        ["Params", "Return", "TxTypeToExecute"]
    );
}

struct FailingService;

impl ParamsService for FailingService {
    fn multisig_params(
        &self,
        _message_json: &str,
        method: &str,
        version: ActorsVersion,
    ) -> Result<Value, ParamsServiceError> {
        Err(ParamsServiceError::UnsupportedMethod {
            method: method.to_string(),
            version,
        })
    }
}

#[test]
fn test_params_service_failure_is_an_error() {
    let decoder = TransactionDecoder::new(VersionResolver::new(), identity())
        .with_params_service(Arc::new(FailingService));
    let err = decoder
        .decode(&mainnet(
            MAINNET_V12,
            MULTISIG,
            7,
            cbor(&(Address::new_id(1), Address::new_id(2))),
            vec![],
        ))
        .unwrap_err();

    assert!(matches!(err, DecodeError::ParamsService(_)));
    assert_eq!(err.kind(), "params_service");
}
