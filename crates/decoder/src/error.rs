// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::actors::ActorKind;
use crate::identity::IdentityError;
use crate::params_service::ParamsServiceError;
use fvm_shared::MethodNum;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("No network version is scheduled for height {height} on network '{network}'")]
    UnsupportedHeight { network: String, height: i64 },

    #[error("Method '{method}' is not available on the {actor} actor at height {height}")]
    InvalidHeightForMethod {
        actor: ActorKind,
        method: String,
        height: i64,
    },

    #[error("Unknown method '{method}' for the {actor} actor")]
    UnknownMethod { actor: ActorKind, method: String },

    #[error("Failed to decode {field}: {cause}")]
    Malformed { field: &'static str, cause: String },

    #[error("Failed to resolve the actor behind {address}")]
    ActorResolution {
        address: String,
        #[source]
        source: IdentityError,
    },

    #[error("Structured parameter service failed")]
    ParamsService(#[from] ParamsServiceError),

    #[error("Message cid {0} does not carry a 32 byte digest")]
    InvalidMessageCid(String),
}

impl DecodeError {
    pub(crate) fn malformed(field: &'static str, cause: impl ToString) -> Self {
        DecodeError::Malformed {
            field,
            cause: cause.to_string(),
        }
    }

    /// Stable label used for the `decode_errors` metric.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::UnsupportedHeight { .. } => "unsupported_height",
            DecodeError::InvalidHeightForMethod { .. } => "invalid_height_for_method",
            DecodeError::UnknownMethod { .. } => "unknown_method",
            DecodeError::Malformed { .. } => "malformed",
            DecodeError::ActorResolution { .. } => "actor_resolution",
            DecodeError::ParamsService(_) => "params_service",
            DecodeError::InvalidMessageCid(_) => "invalid_message_cid",
        }
    }
}

/// A problem that did not abort the decode.
///
/// Soft failures are returned alongside the metadata and counted in the
/// `soft_failures` metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SoftFailure {
    /// A decoded value failed validation and was replaced with a placeholder.
    Validation { field: &'static str, reason: String },
    /// The call wrapped by a multisig proposal could not be decoded.
    InnerCall { method: MethodNum, reason: String },
}

impl SoftFailure {
    pub fn reason_label(&self) -> &'static str {
        match self {
            SoftFailure::Validation { .. } => "validation",
            SoftFailure::InnerCall { .. } => "inner_call",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_labels_are_stable() {
        let err = DecodeError::UnsupportedHeight {
            network: "mainnet".to_string(),
            height: -1,
        };
        assert_eq!(err.kind(), "unsupported_height");
        assert_eq!(
            err.to_string(),
            "No network version is scheduled for height -1 on network 'mainnet'"
        );

        let err = DecodeError::malformed("Params", "unexpected end of input");
        assert_eq!(err.kind(), "malformed");
        assert_eq!(
            err.to_string(),
            "Failed to decode Params: unexpected end of input"
        );
    }

    #[test]
    fn test_soft_failure_labels() {
        let validation = SoftFailure::Validation {
            field: "Return.RobustAddress",
            reason: "missing".to_string(),
        };
        let inner = SoftFailure::InnerCall {
            method: 2,
            reason: "unknown".to_string(),
        };
        assert_eq!(validation.reason_label(), "validation");
        assert_eq!(inner.reason_label(), "inner_call");
    }
}
