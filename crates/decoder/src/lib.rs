// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-aware decoding of Filecoin built-in actor calls.
//!
//! Given a message, its receipt and the height it executed at, the
//! [`TransactionDecoder`] picks the schema that was live for the receiving
//! actor at that network version and renders params and return values as an
//! ordered JSON metadata map.

pub mod actors;
pub mod consts;
pub mod context;
pub mod decoder;
pub mod error;
mod fallback;
pub mod identity;
pub mod logging;
pub mod metrics;
pub mod params_service;
pub mod schema;
pub mod types;
pub mod version;

#[cfg(test)]
mod test_fixtures;

pub use actors::{ActorDecoder, ActorKind, MethodDescriptor, MethodTable, decoder_for};
pub use context::ParseContext;
pub use decoder::{DecodeRequest, TransactionDecoder};
pub use error::{DecodeError, SoftFailure};
pub use identity::{IdentityError, IdentityResolver, MemoryIdentityCache};
pub use params_service::{CborParamsService, ParamsService, ParamsServiceError};
pub use schema::{ParseMode, Schema};
pub use types::{
    AddressInfo, DecodeOutcome, DecodeResult, EthLog, FallbackMatch, Message, Metadata, Receipt,
    TipsetKey,
};
pub use version::{ActorsVersion, Network, NetworkVersion, UpgradeSchedule, VersionResolver};
