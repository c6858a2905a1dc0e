// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodTable, decode_with, lookup, raw_call};
use crate::consts::method::{CONSTRUCTOR, SEND};
use crate::consts::{EAM_NAMESPACE, ETH_LOGS_KEY, PARAMS_KEY, RETURN_KEY, frc42};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::{decode_bytes_lenient, to_json};
use crate::types::{Amount, Bytes, CidLink, DecodeResult, Message, Metadata, Receipt, hex_with_prefix};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use fvm_shared::address::{Address, Payload};
use serde::Serialize;
use serde_json::Value;

pub const INVOKE_CONTRACT: &str = "InvokeContract";
pub const INVOKE_CONTRACT_READ_ONLY: &str = "InvokeContractReadOnly";

const ETH_ADDRESS_LEN: usize = 20;

/// Params of `Constructor` and `Resurrect`.
#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorParams {
    pub creator: Bytes,
    pub initcode: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetStorageAtParams {
    pub storage_key: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DelegateCallParamsV10 {
    pub code: CidLink,
    pub input: Bytes,
    pub caller: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DelegateCallParams {
    pub code: CidLink,
    pub input: Bytes,
    pub caller: Bytes,
    pub value: Amount,
}

/// 0x address of a delegated `f410` address in the EAM namespace.
pub(crate) fn eth_address_of(address: &Address) -> Option<String> {
    match address.payload() {
        Payload::Delegated(delegated)
            if delegated.namespace() == EAM_NAMESPACE
                && delegated.subaddress().len() == ETH_ADDRESS_LEN =>
        {
            Some(hex_with_prefix(delegated.subaddress()))
        }
        _ => None,
    }
}

pub struct Evm;

impl ActorDecoder for Evm {
    fn name(&self) -> ActorKind {
        ActorKind::Evm
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        if !ActorKind::Evm.is_available(version) {
            return table;
        }

        table
            .add(METHOD_CONSTRUCTOR, CONSTRUCTOR)
            .params::<ConstructorParams>();
        table.add(2, "Resurrect").params::<ConstructorParams>();
        table.add(3, "GetBytecode").returns::<Option<CidLink>>();
        table.add(4, "GetBytecodeHash").returns::<Bytes>();
        table
            .add(5, "GetStorageAt")
            .params::<GetStorageAtParams>()
            .returns::<Bytes>();
        let delegate = table.add(6, "InvokeContractDelegate").returns::<Bytes>();
        if version == ActorsVersion::V10 {
            delegate.params::<DelegateCallParamsV10>();
        } else {
            delegate.params::<DelegateCallParams>();
        }
        table.add(frc42::INVOKE_EVM, INVOKE_CONTRACT);
        table
    }

    fn parse(
        &self,
        ctx: &ParseContext<'_>,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError> {
        match method {
            SEND => raw_call(ctx, message, receipt),
            INVOKE_CONTRACT_READ_ONLY => invoke_contract(ctx, message, receipt),
            _ => {
                let descriptor = lookup(self, ctx, method)?;
                match descriptor.canonical_name() {
                    INVOKE_CONTRACT => invoke_contract(ctx, message, receipt),
                    _ => decode_with(ctx, &descriptor, message, receipt),
                }
            }
        }
    }
}

fn invoke_contract(
    ctx: &ParseContext<'_>,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let mut metadata = Metadata::new();

    let params = match message.params.as_slice() {
        [] => Value::Null,
        raw => decode_bytes_lenient(PARAMS_KEY, raw, ctx.mode())?,
    };
    metadata.insert(PARAMS_KEY, params);

    let ret = match receipt.ret.as_slice() {
        [] => Value::Null,
        raw => decode_bytes_lenient(RETURN_KEY, raw, ctx.mode())?,
    };
    metadata.insert(RETURN_KEY, ret);

    let message_cid = ctx.message_cid.to_string();
    let logs = ctx
        .eth_logs
        .iter()
        .filter(|log| log.transaction_cid == message_cid)
        .map(|log| to_json(ETH_LOGS_KEY, log))
        .collect::<Result<Vec<_>, _>>()?;
    metadata.insert(ETH_LOGS_KEY, Value::Array(logs));

    Ok(DecodeResult::new(metadata))
}
