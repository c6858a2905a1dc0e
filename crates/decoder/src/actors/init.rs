// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::evm::eth_address_of;
use super::shared::CreatedActorReturn;
use super::{ActorDecoder, ActorKind, MethodDescriptor, MethodTable, decode_with, decoder_for, lookup, raw_call};
use crate::consts::method::{CONSTRUCTOR, SEND};
use crate::consts::{PARAMS_KEY, RETURN_KEY, frc42};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::{decode_struct, to_json};
use crate::types::{AddressInfo, Bytes, CidLink, DecodeResult, Message, Metadata, Receipt};
use crate::version::ActorsVersion;
use cid::Cid;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::METHOD_CONSTRUCTOR;
use serde::Serialize;
use serde_json::Value;

pub const EXEC: &str = "Exec";
pub const EXEC4: &str = "Exec4";
pub const EXEC_EXPORTED: &str = "ExecExported";

const CONSTRUCTOR_PARAMS_FIELD: &str = "ConstructorParams";

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorParams {
    pub network_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ExecParams {
    pub code_cid: CidLink,
    pub constructor_params: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct Exec4Params {
    pub code_cid: CidLink,
    pub constructor_params: Bytes,
    pub subaddress: Bytes,
}

pub struct Init;

impl ActorDecoder for Init {
    fn name(&self) -> ActorKind {
        ActorKind::Init
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table
            .add(METHOD_CONSTRUCTOR, CONSTRUCTOR)
            .params::<ConstructorParams>();
        table
            .add(2, EXEC)
            .params::<ExecParams>()
            .returns::<CreatedActorReturn>();

        if version >= ActorsVersion::V10 {
            table
                .add(3, EXEC4)
                .params::<Exec4Params>()
                .returns::<CreatedActorReturn>();
            table.alias(frc42::EXEC, EXEC_EXPORTED, EXEC);
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
            EXEC | EXEC4 => exec(ctx, &descriptor, message, receipt),
            _ => decode_with(ctx, &descriptor, message, receipt),
        }
    }
}

fn exec(
    ctx: &ParseContext<'_>,
    descriptor: &MethodDescriptor,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let mut metadata = Metadata::new();

    let mut code = None;
    let mut kind = None;
    if message.params.is_empty() {
        metadata.insert(PARAMS_KEY, Value::Null);
    } else {
        let (code_cid, constructor_params, mut params) = match descriptor.canonical_name() {
            EXEC4 => {
                let params: Exec4Params = decode_struct(PARAMS_KEY, &message.params)?;
                let json = to_json(PARAMS_KEY, &params)?;
                (params.code_cid.0, params.constructor_params.0, json)
            }
            _ => {
                let params: ExecParams = decode_struct(PARAMS_KEY, &message.params)?;
                let json = to_json(PARAMS_KEY, &params)?;
                (params.code_cid.0, params.constructor_params.0, json)
            }
        };

        kind = created_kind(ctx, &code_cid);
        if let Some(decoded) = decode_constructor(ctx, kind, &constructor_params)?
            && let Some(fields) = params.as_object_mut()
        {
            fields.insert(CONSTRUCTOR_PARAMS_FIELD.to_string(), decoded);
        }
        code = Some(code_cid);
        metadata.insert(PARAMS_KEY, params);
    }

    let mut result = DecodeResult::default();
    if receipt.ret.is_empty() {
        metadata.insert(RETURN_KEY, Value::Null);
    } else {
        let created: CreatedActorReturn = decode_struct(RETURN_KEY, &receipt.ret)?;
        metadata.insert(RETURN_KEY, to_json(RETURN_KEY, &created)?);

        let info = AddressInfo {
            short: created.id_address.0,
            robust: Some(created.robust_address.0),
            eth_address: eth_address_of(&created.robust_address.0),
            actor_kind: kind,
            actor_code: code,
            creation_tx_cid: *ctx.message_cid,
        };
        ctx.register(&info);
        result.address_info = Some(info);
    }

    result.metadata = metadata;
    Ok(result)
}

/// Kind of actor instantiated from `code`.
pub(crate) fn created_kind(ctx: &ParseContext<'_>, code: &Cid) -> Option<ActorKind> {
    ActorKind::from_legacy_code(code).or_else(|| {
        ctx.identity()
            .actor_kind_from_code(code)
            .inspect_err(|err| tracing::debug!(%code, error = %err, "code cid not resolved"))
            .ok()
    })
}

/// Decode constructor params with the created kind's `Constructor` schema.
///
/// `None` when the kind or its schema is unknown; the params then stay hex.
fn decode_constructor(
    ctx: &ParseContext<'_>,
    kind: Option<ActorKind>,
    raw: &[u8],
) -> Result<Option<Value>, DecodeError> {
    let Some(kind) = kind.filter(|_| !raw.is_empty()) else {
        return Ok(None);
    };
    let schema = decoder_for(kind)
        .methods(ctx.actors_version())
        .by_name(CONSTRUCTOR)
        .and_then(|d| d.params);
    let Some(schema) = schema else {
        return Ok(None);
    };
    schema
        .decode(raw)
        .map(Some)
        .map_err(|cause| DecodeError::Malformed {
            field: "Params.ConstructorParams",
            cause,
        })
}
