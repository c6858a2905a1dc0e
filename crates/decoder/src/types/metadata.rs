// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::actors::ActorKind;
use crate::consts::{PARAMS_KEY, RETURN_KEY};
use crate::error::SoftFailure;
use crate::version::NetworkVersion;
use cid::Cid;
use fvm_shared::address::Address;
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered map of decoded values (`Params`, `Return`, and extras).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn params(&self) -> Option<&Value> {
        self.get(PARAMS_KEY)
    }

    pub fn ret(&self) -> Option<&Value> {
        self.get(RETURN_KEY)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Identity of an actor created by the decoded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    /// ID address assigned to the new actor.
    pub short: Address,
    /// Robust address, `None` when the creation return did not carry one.
    pub robust: Option<Address>,
    /// 0x address for EVM actors.
    pub eth_address: Option<String>,
    pub actor_kind: Option<ActorKind>,
    pub actor_code: Option<Cid>,
    /// Cid of the message that created the actor.
    pub creation_tx_cid: Cid,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeResult {
    pub metadata: Metadata,
    pub address_info: Option<AddressInfo>,
    pub soft_failures: Vec<SoftFailure>,
}

impl DecodeResult {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            ..Default::default()
        }
    }
}

/// Actor and method the fallback heuristic matched an unknown call to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackMatch {
    pub actor: ActorKind,
    pub method: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    /// Kind of the receiving actor.
    pub actor: ActorKind,
    /// Method name the call was dispatched as.
    pub method: String,
    pub version: NetworkVersion,
    pub result: DecodeResult,
    pub fallback: Option<FallbackMatch>,
}
