// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Payload shapes used by more than one actor.

use crate::types::{Addr, BigNum, Bytes};
use fvm_ipld_encoding::tuple::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct FilterEstimate {
    pub position: BigNum,
    pub velocity: BigNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct FailCode {
    pub idx: u32,
    pub code: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BatchReturn {
    pub success_count: u32,
    pub fail_codes: Vec<FailCode>,
}

/// Token receiver notification, delivered through `UniversalReceiverHook`.
#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct UniversalReceiverParams {
    #[serde(rename = "Type")]
    pub type_: u32,
    pub payload: Bytes,
}

/// Return of `Exec`-style creation methods.
#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CreatedActorReturn {
    pub id_address: Addr,
    pub robust_address: Addr,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct PoStProof {
    pub post_proof: i64,
    pub proof_bytes: Bytes,
}
