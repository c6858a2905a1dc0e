// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodDescriptor, MethodTable, decode_with, lookup, raw_call};
use crate::consts::method::{CONSTRUCTOR, SEND};
use crate::consts::{ETH_HASH_KEY, PARAMS_KEY, RETURN_KEY};
use crate::context::ParseContext;
use crate::error::{DecodeError, SoftFailure};
use crate::schema::{decode_bytes_lenient, decode_struct, to_json};
use crate::types::{
    AddressInfo, Addr, Bytes, DecodeResult, Message, Metadata, Receipt, hex_with_prefix,
};
use crate::version::ActorsVersion;
use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use fvm_shared::address::Address;
use serde::Serialize;
use serde_json::Value;

pub const CREATE: &str = "Create";
pub const CREATE2: &str = "Create2";
pub const CREATE_EXTERNAL: &str = "CreateExternal";

const ROBUST_ADDRESS_FIELD: &str = "RobustAddress";
const ETH_HASH_LEN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CreateParams {
    pub initcode: Bytes,
    pub nonce: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct Create2Params {
    pub initcode: Bytes,
    pub salt: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReturn {
    pub actor_id: u64,
    pub robust_address: Option<Addr>,
    pub eth_address: Bytes,
}

/// Ethereum transaction hash of a message: the last 32 bytes of its cid
/// digest.
pub(crate) fn eth_hash_of(message_cid: &Cid) -> Result<String, DecodeError> {
    let digest = message_cid.hash().digest();
    if digest.len() < ETH_HASH_LEN {
        return Err(DecodeError::InvalidMessageCid(message_cid.to_string()));
    }
    Ok(hex_with_prefix(&digest[digest.len() - ETH_HASH_LEN..]))
}

/// Ethereum Address Manager, deploying EVM contracts.
pub struct Eam;

impl ActorDecoder for Eam {
    fn name(&self) -> ActorKind {
        ActorKind::Eam
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        if !ActorKind::Eam.is_available(version) {
            return table;
        }

        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR);
        table
            .add(2, CREATE)
            .params::<CreateParams>()
            .returns::<CreateReturn>();
        table
            .add(3, CREATE2)
            .params::<Create2Params>()
            .returns::<CreateReturn>();
        table
            .add(4, CREATE_EXTERNAL)
            .params::<Bytes>()
            .returns::<CreateReturn>();
        table
    }

    fn parse(
        &self,
        ctx: &ParseContext<'_>,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError> {
        if method == SEND {
            return raw_call(ctx, message, receipt);
        }
        let descriptor = lookup(self, ctx, method)?;
        match descriptor.canonical_name() {
            CREATE | CREATE2 | CREATE_EXTERNAL => create(ctx, &descriptor, message, receipt),
            _ => decode_with(ctx, &descriptor, message, receipt),
        }
    }
}

fn create(
    ctx: &ParseContext<'_>,
    descriptor: &MethodDescriptor,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let mut result = if descriptor.canonical_name() == CREATE_EXTERNAL {
        let mut metadata = Metadata::new();
        let params = match message.params.as_slice() {
            [] => Value::Null,
            raw => decode_bytes_lenient(PARAMS_KEY, raw, ctx.mode())?,
        };
        metadata.insert(PARAMS_KEY, params);
        DecodeResult::new(metadata)
    } else {
        let without_return = MethodDescriptor {
            ret: None,
            ..descriptor.clone()
        };
        let mut result = decode_with(ctx, &without_return, message, &Receipt::default())?;
        if !result.metadata.contains_key(PARAMS_KEY) {
            result.metadata.insert(PARAMS_KEY, Value::Null);
        }
        result
    };

    result
        .metadata
        .insert(ETH_HASH_KEY, eth_hash_of(ctx.message_cid)?);

    if receipt.ret.is_empty() {
        result.metadata.insert(RETURN_KEY, Value::Null);
        return Ok(result);
    }

    let created: CreateReturn = decode_struct(RETURN_KEY, &receipt.ret)?;
    if created.eth_address.0.len() != 20 {
        return Err(DecodeError::malformed(
            RETURN_KEY,
            format!("eth address has {} bytes", created.eth_address.0.len()),
        ));
    }

    let mut ret = to_json(RETURN_KEY, &created)?;
    let robust = match &created.robust_address {
        Some(addr) => Some(addr.0),
        None => {
            let failure = SoftFailure::Validation {
                field: "Return.RobustAddress",
                reason: "creation return carries no robust address".to_string(),
            };
            tracing::warn!(
                actor = %ActorKind::Eam,
                method = descriptor.name,
                actor_id = created.actor_id,
                "creation return carries no robust address"
            );
            result.soft_failures.push(failure);
            if let Some(fields) = ret.as_object_mut() {
                fields.insert(ROBUST_ADDRESS_FIELD.to_string(), Value::String(String::new()));
            }
            None
        }
    };
    result.metadata.insert(RETURN_KEY, ret);

    let info = AddressInfo {
        short: Address::new_id(created.actor_id),
        robust,
        eth_address: Some(hex_with_prefix(&created.eth_address.0)),
        actor_kind: Some(ActorKind::Evm),
        actor_code: None,
        creation_tx_cid: *ctx.message_cid,
    };
    ctx.register(&info);
    result.address_info = Some(info);
    Ok(result)
}
