// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Calls whose method number the receiver does not map.

mod common;

use common::*;
use fil_actors_decoder::{
    ActorKind, FallbackMatch, IdentityResolver, TransactionDecoder, VersionResolver,
};
use fvm_shared::address::Address;
use serde_json::json;

/// Not a method of any built-in actor.
const UNMAPPED: u64 = 987_654;

#[test]
fn test_unmapped_method_is_matched_against_all_actors() {
    let params = cbor(&Address::new_id(4321));
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, MINER, UNMAPPED, params, vec![]))
        .unwrap();

    assert_eq!(outcome.actor, ActorKind::Miner);
    assert_eq!(
        outcome.fallback,
        Some(FallbackMatch {
            actor: ActorKind::Account,
            method: "Constructor"
        })
    );
    // The guess is reported apart from the receiver's own method name.
    assert_eq!(outcome.method, "Unknown");
    assert_eq!(outcome.result.metadata.params(), Some(&json!("f04321")));
}

#[test]
fn test_unmapped_method_without_params_is_raw() {
    let outcome = decoder()
        .decode(&mainnet(MAINNET_V12, MINER, UNMAPPED, vec![], vec![0x80]))
        .unwrap();
    assert_eq!(outcome.method, "Unknown");
    assert!(outcome.fallback.is_none());
    assert_eq!(outcome.result.metadata.ret(), Some(&json!("0x80")));
}

#[test]
fn test_fallback_does_not_register_actors() {
    let code: cid::Cid = "bafkqadlgnfwc6mjpmfrwg33vnz2a".parse().unwrap();
    let params = cbor(&(code, fvm_ipld_encoding::BytesSer(&[])));
    let ret = cbor(&(Address::new_id(6001), Address::new_actor(b"guess")));

    let cache = identity();
    let decoder = TransactionDecoder::new(VersionResolver::new(), cache.clone());
    let outcome = decoder
        .decode(&mainnet(MAINNET_V12, MINER, UNMAPPED, params, ret))
        .unwrap();

    assert!(outcome.fallback.is_some());
    assert!(
        cache
            .actor_kind(&Address::new_id(6001), MAINNET_V12, &Default::default())
            .is_err()
    );
}

#[test]
fn test_fallback_never_panics_on_arbitrary_bytes() {
    let decoder = decoder();
    // Linear congruential generator, fixed seed.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u8
    };

    for len in 1..64usize {
        let params: Vec<u8> = (0..len).map(|_| next()).collect();
        let ret: Vec<u8> = (0..len % 7).map(|_| next()).collect();
        let outcome = decoder.decode(&mainnet(MAINNET_V12, MINER, UNMAPPED, params, ret));
        assert!(outcome.is_ok(), "length {len}");
    }

    // Byte patterns that look like the start of CBOR containers.
    for prefix in [0x80u8, 0x81, 0x84, 0x98, 0xa1, 0xd8, 0x5f, 0x9f] {
        let params = vec![prefix, 0x2a, 0x40];
        assert!(
            decoder
                .decode(&mainnet(MAINNET_V12, MINER, UNMAPPED, params, vec![]))
                .is_ok()
        );
    }
}
