// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Structured decoding of multisig management params.

use crate::actors::ActorDecoder;
use crate::actors::multisig::Multisig;
use crate::types::MessageView;
use crate::version::ActorsVersion;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsServiceError {
    #[error("Invalid message view: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex params: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Method '{method}' is not a multisig method at actors {version}")]
    UnsupportedMethod {
        method: String,
        version: ActorsVersion,
    },

    #[error("Failed to decode params: {0}")]
    Decode(String),
}

/// Decodes multisig params from a JSON view of the message.
pub trait ParamsService: Send + Sync {
    /// `message_json` is a serialized [`MessageView`].
    fn multisig_params(
        &self,
        message_json: &str,
        method: &str,
        version: ActorsVersion,
    ) -> Result<Value, ParamsServiceError>;
}

/// Service backed by the multisig method tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct CborParamsService;

impl ParamsService for CborParamsService {
    fn multisig_params(
        &self,
        message_json: &str,
        method: &str,
        version: ActorsVersion,
    ) -> Result<Value, ParamsServiceError> {
        let view: MessageView = serde_json::from_str(message_json)?;
        let raw = view.params_bytes()?;

        let table = Multisig.methods(version);
        let schema = table.by_name(method).and_then(|d| d.params).ok_or_else(|| {
            ParamsServiceError::UnsupportedMethod {
                method: method.to_string(),
                version,
            }
        })?;

        if raw.is_empty() {
            return Ok(Value::Null);
        }
        schema.decode(&raw).map_err(ParamsServiceError::Decode)
    }
}
