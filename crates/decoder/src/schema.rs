// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Type-erased CBOR schemas and the generic params/return decode procedure.

use crate::consts::{PARAMS_KEY, RETURN_KEY};
use crate::error::DecodeError;
use crate::types::{Metadata, hex_with_prefix};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

pub type DecodeFn = fn(&[u8]) -> Result<Value, String>;

/// How strictly a parse treats data that does not fit its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// The method is known to be right: lenient hex renderings apply and
    /// created actors are registered.
    Authoritative,
    /// Guessing an unknown method: every byte must fit, nothing is written.
    Speculative,
}

/// Decoder for one CBOR payload shape, rendering it as JSON.
#[derive(Clone, Copy)]
pub struct Schema {
    type_name: &'static str,
    decode: DecodeFn,
}

impl Schema {
    pub fn of<T>() -> Self
    where
        T: DeserializeOwned + Serialize,
    {
        Self {
            type_name: short_type_name(std::any::type_name::<T>()),
            decode: decode_as::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn decode(&self, raw: &[u8]) -> Result<Value, String> {
        (self.decode)(raw)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Schema").field(&self.type_name).finish()
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.decode, other.decode)
    }
}

fn short_type_name(full: &'static str) -> &'static str {
    match full.find('<') {
        Some(_) => full,
        None => full.rsplit("::").next().unwrap_or(full),
    }
}

fn decode_as<T>(raw: &[u8]) -> Result<Value, String>
where
    T: DeserializeOwned + Serialize,
{
    let decoded: T = fvm_ipld_encoding::from_slice(raw).map_err(|e| e.to_string())?;
    serde_json::to_value(&decoded).map_err(|e| e.to_string())
}

/// Decode `raw` into `T`, reporting failures against `field`.
pub(crate) fn decode_struct<T: DeserializeOwned>(
    field: &'static str,
    raw: &[u8],
) -> Result<T, DecodeError> {
    fvm_ipld_encoding::from_slice(raw).map_err(|e| DecodeError::malformed(field, e))
}

pub(crate) fn to_json<T: Serialize>(field: &'static str, value: &T) -> Result<Value, DecodeError> {
    serde_json::to_value(value).map_err(|e| DecodeError::malformed(field, e))
}

/// Decode raw params and return with the method's schemas.
///
/// A method with a return schema always yields both `Params` and `Return`,
/// null where the raw bytes are empty.
pub fn decode_call(
    raw_params: &[u8],
    raw_return: &[u8],
    params: Option<&Schema>,
    ret: Option<&Schema>,
    mode: ParseMode,
) -> Result<Metadata, DecodeError> {
    let mut metadata = Metadata::new();

    if !raw_params.is_empty() {
        let value = match (params, mode) {
            (Some(schema), _) => schema
                .decode(raw_params)
                .map_err(|cause| DecodeError::Malformed {
                    field: PARAMS_KEY,
                    cause,
                })?,
            (None, ParseMode::Authoritative) => Value::String(hex_with_prefix(raw_params)),
            (None, ParseMode::Speculative) => {
                return Err(DecodeError::malformed(PARAMS_KEY, "method takes no parameters"));
            }
        };
        metadata.insert(PARAMS_KEY, value);
    } else if ret.is_some() {
        metadata.insert(PARAMS_KEY, Value::Null);
    }

    match ret {
        Some(schema) => {
            let value = if raw_return.is_empty() {
                Value::Null
            } else {
                schema
                    .decode(raw_return)
                    .map_err(|cause| DecodeError::Malformed {
                        field: RETURN_KEY,
                        cause,
                    })?
            };
            metadata.insert(RETURN_KEY, value);
        }
        None if mode == ParseMode::Speculative && !raw_return.is_empty() => {
            return Err(DecodeError::malformed(RETURN_KEY, "method returns nothing"));
        }
        None => {}
    }

    Ok(metadata)
}

/// Raw params and return rendered as hex, each only when present.
pub(crate) fn passthrough(raw_params: &[u8], raw_return: &[u8]) -> Metadata {
    let mut metadata = Metadata::new();
    if !raw_params.is_empty() {
        metadata.insert(PARAMS_KEY, hex_with_prefix(raw_params));
    }
    if !raw_return.is_empty() {
        metadata.insert(RETURN_KEY, hex_with_prefix(raw_return));
    }
    metadata
}

/// Decode a CBOR byte string and render its contents as hex.
///
/// In authoritative mode a payload that is not exactly one byte string is
/// rendered as hex of the whole input instead.
pub(crate) fn decode_bytes_lenient(
    field: &'static str,
    raw: &[u8],
    mode: ParseMode,
) -> Result<Value, DecodeError> {
    match read_cbor_bytes(raw) {
        Ok(bytes) => Ok(Value::String(hex_with_prefix(&bytes))),
        Err(cause) if mode == ParseMode::Authoritative => {
            tracing::debug!(field, %cause, "rendering undecodable byte payload as raw hex");
            Ok(Value::String(hex_with_prefix(raw)))
        }
        Err(cause) => Err(DecodeError::Malformed { field, cause }),
    }
}

fn read_cbor_bytes(raw: &[u8]) -> Result<Vec<u8>, String> {
    let mut remaining = raw;
    match ciborium::from_reader::<ciborium::Value, _>(&mut remaining) {
        Ok(ciborium::Value::Bytes(bytes)) if remaining.is_empty() => Ok(bytes),
        Ok(ciborium::Value::Bytes(_)) => {
            Err(format!("{} trailing bytes after byte string", remaining.len()))
        }
        Ok(other) => Err(format!("expected a byte string, found {other:?}")),
        Err(err) => Err(format!("{err:?}")),
    }
}
