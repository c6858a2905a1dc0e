// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Multisig wallets.
//!
//! `Propose` wraps another call. The wrapped call is resolved against the
//! target actor and decoded in place, one level deep. Wallet management
//! methods go through the structured [`ParamsService`](crate::ParamsService).

use super::shared::UniversalReceiverParams;
use super::{ActorDecoder, ActorKind, MethodDescriptor, MethodTable, decode_with, lookup, raw_call};
use crate::consts::method::{CONSTRUCTOR, SEND, UNIVERSAL_RECEIVER_HOOK, UNKNOWN};
use crate::consts::{MAX_MULTISIG_DEPTH, PARAMS_KEY, RETURN_KEY, TX_TYPE_TO_EXECUTE_KEY, frc42};
use crate::context::ParseContext;
use crate::error::{DecodeError, SoftFailure};
use crate::params_service::ParamsServiceError;
use crate::schema::{decode_call, decode_struct};
use crate::types::{Addr, Amount, Bytes, DecodeResult, Message, MessageView, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::error::ExitCode;
use fvm_shared::{METHOD_CONSTRUCTOR, MethodNum};
use serde::Serialize;
use serde_json::Value;

pub const PROPOSE: &str = "Propose";
pub const APPROVE: &str = "Approve";
pub const CANCEL: &str = "Cancel";
pub const ADD_SIGNER: &str = "AddSigner";
pub const REMOVE_SIGNER: &str = "RemoveSigner";
pub const SWAP_SIGNER: &str = "SwapSigner";
pub const CHANGE_NUM_APPROVALS_THRESHOLD: &str = "ChangeNumApprovalsThreshold";
pub const LOCK_BALANCE: &str = "LockBalance";

/// Methods whose params are decoded by the structured parameter service.
const MANAGEMENT_METHODS: [&str; 7] = [
    APPROVE,
    CANCEL,
    ADD_SIGNER,
    REMOVE_SIGNER,
    SWAP_SIGNER,
    CHANGE_NUM_APPROVALS_THRESHOLD,
    LOCK_BALANCE,
];

const METHOD_FIELD: &str = "Method";
const PARAMS_FIELD: &str = "Params";
const RET_FIELD: &str = "Ret";

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorParamsV0 {
    pub signers: Vec<Addr>,
    pub num_approvals_threshold: u64,
    pub unlock_duration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorParams {
    pub signers: Vec<Addr>,
    pub num_approvals_threshold: u64,
    pub unlock_duration: i64,
    pub start_epoch: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProposeParams {
    pub to: Addr,
    pub value: Amount,
    pub method: MethodNum,
    pub params: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ProposeReturn {
    #[serde(rename = "TxnID")]
    pub txn_id: i64,
    pub applied: bool,
    pub code: u32,
    pub ret: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TxnIdParams {
    #[serde(rename = "ID")]
    pub id: i64,
    pub proposal_hash: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ApproveReturn {
    pub applied: bool,
    pub code: u32,
    pub ret: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct AddSignerParams {
    pub signer: Addr,
    pub increase: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveSignerParams {
    pub signer: Addr,
    pub decrease: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct SwapSignerParams {
    pub from: Addr,
    pub to: Addr,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeNumApprovalsThresholdParams {
    pub new_threshold: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct LockBalanceParams {
    pub start_epoch: i64,
    pub unlock_duration: i64,
    pub amount: Amount,
}

pub struct Multisig;

impl ActorDecoder for Multisig {
    fn name(&self) -> ActorKind {
        ActorKind::Multisig
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();

        let constructor = table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR);
        match version {
            ActorsVersion::V0 => {
                constructor.params::<ConstructorParamsV0>();
            }
            ActorsVersion::V2
            | ActorsVersion::V3
            | ActorsVersion::V4
            | ActorsVersion::V5
            | ActorsVersion::V6
            | ActorsVersion::V7
            | ActorsVersion::V8
            | ActorsVersion::V9
            | ActorsVersion::V10
            | ActorsVersion::V11
            | ActorsVersion::V12
            | ActorsVersion::V13
            | ActorsVersion::V14
            | ActorsVersion::V15
            | ActorsVersion::V16 => {
                constructor.params::<ConstructorParams>();
            }
        }

        table
            .add(2, PROPOSE)
            .params::<ProposeParams>()
            .returns::<ProposeReturn>();
        table
            .add(3, APPROVE)
            .params::<TxnIdParams>()
            .returns::<ApproveReturn>();
        table.add(4, CANCEL).params::<TxnIdParams>();
        table.add(5, ADD_SIGNER).params::<AddSignerParams>();
        table.add(6, REMOVE_SIGNER).params::<RemoveSignerParams>();
        table.add(7, SWAP_SIGNER).params::<SwapSignerParams>();
        table
            .add(8, CHANGE_NUM_APPROVALS_THRESHOLD)
            .params::<ChangeNumApprovalsThresholdParams>();

        if version >= ActorsVersion::V2 {
            table.add(9, LOCK_BALANCE).params::<LockBalanceParams>();
        }
        if version >= ActorsVersion::V9 {
            table
                .add(frc42::RECEIVE, UNIVERSAL_RECEIVER_HOOK)
                .params::<UniversalReceiverParams>();
        }
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
            PROPOSE => propose(ctx, &descriptor, message, receipt),
            name if MANAGEMENT_METHODS.contains(&name) => {
                structured(ctx, &descriptor, message, receipt)
            }
            _ => decode_with(ctx, &descriptor, message, receipt),
        }
    }
}

fn propose(
    ctx: &ParseContext<'_>,
    descriptor: &MethodDescriptor,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let mut result = decode_with(ctx, descriptor, message, receipt)?;
    if message.params.is_empty() {
        return Ok(result);
    }
    if ctx.depth() >= MAX_MULTISIG_DEPTH {
        tracing::debug!(
            depth = ctx.depth(),
            height = ctx.height,
            "nested multisig proposal left undecoded"
        );
        return Ok(result);
    }

    let envelope: ProposeParams = decode_struct(PARAMS_KEY, &message.params)?;
    let proposal: Option<ProposeReturn> = if receipt.ret.is_empty() {
        None
    } else {
        Some(decode_struct(RETURN_KEY, &receipt.ret)?)
    };

    match decode_inner(ctx, message, &envelope, proposal.as_ref()) {
        Ok((name, inner)) => {
            if let Some(Value::Object(params)) = result.metadata.get_mut(PARAMS_KEY) {
                params.insert(METHOD_FIELD.to_string(), Value::String(name));
                params.insert(
                    PARAMS_FIELD.to_string(),
                    inner.metadata.params().cloned().unwrap_or(Value::Null),
                );
            }
            if let Some(inner_ret) = inner.metadata.ret()
                && let Some(Value::Object(ret)) = result.metadata.get_mut(RETURN_KEY)
            {
                ret.insert(RET_FIELD.to_string(), inner_ret.clone());
            }
            result.address_info = inner.address_info;
            result.soft_failures.extend(inner.soft_failures);
        }
        Err(err) => {
            tracing::warn!(
                actor = %ActorKind::Multisig,
                method = PROPOSE,
                inner_method = envelope.method,
                height = ctx.height,
                error = %err,
                "failed to decode proposed call"
            );
            if let Some(Value::Object(params)) = result.metadata.get_mut(PARAMS_KEY) {
                params.insert(METHOD_FIELD.to_string(), Value::String(String::new()));
                params.remove(PARAMS_FIELD);
            }
            result.soft_failures.push(SoftFailure::InnerCall {
                method: envelope.method,
                reason: err.to_string(),
            });
        }
    }
    Ok(result)
}

/// Resolve and decode the call carried by a proposal.
fn decode_inner(
    ctx: &ParseContext<'_>,
    message: &Message,
    envelope: &ProposeParams,
    proposal: Option<&ProposeReturn>,
) -> Result<(String, DecodeResult), DecodeError> {
    let decoder = ctx.decoder();
    let target = &envelope.to.0;
    let kind = decoder.resolve_actor_kind(target, ctx.height, ctx.tipset_key)?;
    let name = decoder.resolve_method_name(kind, ctx.actors_version(), envelope.method);
    if name == UNKNOWN && !kind.is_passthrough() {
        return Err(DecodeError::UnknownMethod {
            actor: kind,
            method: envelope.method.to_string(),
        });
    }

    let inner_message = Message::new(message.to, *target, envelope.method, envelope.params.0.clone())
        .with_value(envelope.value.0.clone());
    let inner_receipt = match proposal {
        Some(ret) if ret.applied => Receipt {
            exit_code: ExitCode::new(ret.code),
            ret: ret.ret.0.clone(),
        },
        _ => Receipt::default(),
    };

    let inner = decoder.dispatch(&ctx.nested(), kind, &name, &inner_message, &inner_receipt)?;
    Ok((name, inner))
}

/// Wallet management calls, decoded by the structured parameter service.
fn structured(
    ctx: &ParseContext<'_>,
    descriptor: &MethodDescriptor,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let name = descriptor.canonical_name();
    let view = serde_json::to_string(&MessageView::from_message(message))
        .map_err(ParamsServiceError::from)?;
    let params = ctx
        .params_service()
        .multisig_params(&view, name, ctx.actors_version())?;

    let mut metadata = decode_call(&[], &receipt.ret, None, descriptor.ret.as_ref(), ctx.mode())?;
    metadata.insert(PARAMS_KEY, params);
    metadata.insert(TX_TYPE_TO_EXECUTE_KEY, name);
    Ok(DecodeResult::new(metadata))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_gains_start_epoch() {
        let v0 = Multisig.methods(ActorsVersion::V0);
        let v2 = Multisig.methods(ActorsVersion::V2);
        let type_name = |table: &MethodTable| {
            table
                .by_name(CONSTRUCTOR)
                .and_then(|d| d.params)
                .map(|s| s.type_name())
        };
        assert_ne!(type_name(&v0), type_name(&v2));
        assert!(v0.by_name(LOCK_BALANCE).is_none());
        assert!(v2.by_name(LOCK_BALANCE).is_some());
    }

    #[test]
    fn test_receiver_hook_from_v9() {
        assert!(Multisig.methods(ActorsVersion::V8).get(frc42::RECEIVE).is_none());
        assert_eq!(
            Multisig
                .methods(ActorsVersion::V9)
                .get(frc42::RECEIVE)
                .map(|d| d.name),
            Some(UNIVERSAL_RECEIVER_HOOK)
        );
    }
}
