// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Built-in actor kinds and their per-version method tables.

pub mod account;
pub mod cron;
pub mod datacap;
pub mod eam;
pub mod ethaccount;
pub mod evm;
pub mod init;
pub mod market;
pub mod method;
pub mod miner;
pub mod multisig;
pub mod paych;
pub mod placeholder;
pub mod power;
pub mod reward;
pub mod shared;
pub mod system;
pub mod verifreg;

pub use method::{MethodDescriptor, MethodTable};

use crate::consts::method::SEND;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::schema::{decode_call, passthrough};
use crate::types::{DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use cid::Cid;
use fvm_shared::ActorID;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Account,
    Cron,
    DataCap,
    Eam,
    EthAccount,
    Evm,
    Init,
    Market,
    Miner,
    Multisig,
    PaymentChannel,
    Placeholder,
    Power,
    Reward,
    System,
    VerifiedRegistry,
}

impl ActorKind {
    /// Every kind, in the order the fallback heuristic tries them.
    pub const ALL: [ActorKind; 16] = [
        ActorKind::Account,
        ActorKind::Cron,
        ActorKind::DataCap,
        ActorKind::Eam,
        ActorKind::EthAccount,
        ActorKind::Evm,
        ActorKind::Init,
        ActorKind::Market,
        ActorKind::Miner,
        ActorKind::Multisig,
        ActorKind::PaymentChannel,
        ActorKind::Placeholder,
        ActorKind::Power,
        ActorKind::Reward,
        ActorKind::System,
        ActorKind::VerifiedRegistry,
    ];

    /// Name used for the kind in actor bundle manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::Account => "account",
            ActorKind::Cron => "cron",
            ActorKind::DataCap => "datacap",
            ActorKind::Eam => "eam",
            ActorKind::EthAccount => "ethaccount",
            ActorKind::Evm => "evm",
            ActorKind::Init => "init",
            ActorKind::Market => "storagemarket",
            ActorKind::Miner => "storageminer",
            ActorKind::Multisig => "multisig",
            ActorKind::PaymentChannel => "paymentchannel",
            ActorKind::Placeholder => "placeholder",
            ActorKind::Power => "storagepower",
            ActorKind::Reward => "reward",
            ActorKind::System => "system",
            ActorKind::VerifiedRegistry => "verifiedregistry",
        }
    }

    /// First actors release that shipped this kind.
    pub fn introduced_in(self) -> ActorsVersion {
        match self {
            ActorKind::DataCap => ActorsVersion::V9,
            ActorKind::Eam | ActorKind::EthAccount | ActorKind::Evm | ActorKind::Placeholder => {
                ActorsVersion::V10
            }
            _ => ActorsVersion::V0,
        }
    }

    pub fn is_available(self, version: ActorsVersion) -> bool {
        version >= self.introduced_in()
    }

    /// Account-like actors name every exported method number `Fallback`.
    pub fn has_fallback_method(self) -> bool {
        matches!(self, ActorKind::Account | ActorKind::EthAccount)
    }

    /// Kinds whose unmapped calls render as raw hex instead of being
    /// guessed at.
    pub fn is_passthrough(self) -> bool {
        matches!(
            self,
            ActorKind::Account | ActorKind::EthAccount | ActorKind::Placeholder | ActorKind::System
        )
    }

    pub fn singleton_id(self) -> Option<ActorID> {
        match self {
            ActorKind::System => Some(0),
            ActorKind::Init => Some(1),
            ActorKind::Reward => Some(2),
            ActorKind::Cron => Some(3),
            ActorKind::Power => Some(4),
            ActorKind::Market => Some(5),
            ActorKind::VerifiedRegistry => Some(6),
            ActorKind::DataCap => Some(7),
            ActorKind::Eam => Some(10),
            _ => None,
        }
    }

    pub fn from_singleton_id(id: ActorID) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.singleton_id() == Some(id))
    }

    /// Kind encoded in a pre-bundle code cid, an identity-hashed
    /// `fil/<version>/<name>` string.
    pub fn from_legacy_code(code: &Cid) -> Option<Self> {
        const IDENTITY: u64 = 0x00;
        if code.hash().code() != IDENTITY {
            return None;
        }
        let path = std::str::from_utf8(code.hash().digest()).ok()?;
        let mut parts = path.splitn(3, '/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("fil"), Some(version), Some(name)) if version.parse::<u32>().is_ok() => {
                name.parse().ok()
            }
            _ => None,
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown actor kind '{s}'"))
    }
}

impl Serialize for ActorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub trait ActorDecoder: Sync {
    fn name(&self) -> ActorKind;

    /// Methods callable on this actor at `version`, keyed by number.
    fn methods(&self, version: ActorsVersion) -> MethodTable;

    fn parse(
        &self,
        ctx: &ParseContext<'_>,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError>;
}

pub fn decoder_for(kind: ActorKind) -> &'static dyn ActorDecoder {
    match kind {
        ActorKind::Account => &account::Account,
        ActorKind::Cron => &cron::Cron,
        ActorKind::DataCap => &datacap::DataCap,
        ActorKind::Eam => &eam::Eam,
        ActorKind::EthAccount => &ethaccount::EthAccount,
        ActorKind::Evm => &evm::Evm,
        ActorKind::Init => &init::Init,
        ActorKind::Market => &market::Market,
        ActorKind::Miner => &miner::Miner,
        ActorKind::Multisig => &multisig::Multisig,
        ActorKind::PaymentChannel => &paych::PaymentChannel,
        ActorKind::Placeholder => &placeholder::Placeholder,
        ActorKind::Power => &power::Power,
        ActorKind::Reward => &reward::Reward,
        ActorKind::System => &system::System,
        ActorKind::VerifiedRegistry => &verifreg::VerifiedRegistry,
    }
}

/// Descriptor for `method` at the context's actors version.
///
/// Fails with `InvalidHeightForMethod` when the actor has the method in some
/// other release, and `UnknownMethod` when it never had it.
pub(crate) fn lookup(
    actor: &dyn ActorDecoder,
    ctx: &ParseContext<'_>,
    method: &str,
) -> Result<MethodDescriptor, DecodeError> {
    let kind = actor.name();
    let version = ctx.actors_version();
    if kind.is_available(version)
        && let Some(descriptor) = actor.methods(version).by_name(method)
    {
        return Ok(descriptor.clone());
    }

    let known_elsewhere = ActorsVersion::ALL
        .into_iter()
        .filter(|v| kind.is_available(*v))
        .any(|v| actor.methods(v).by_name(method).is_some());
    if known_elsewhere || !kind.is_available(version) {
        Err(DecodeError::InvalidHeightForMethod {
            actor: kind,
            method: method.to_string(),
            height: ctx.height,
        })
    } else {
        Err(DecodeError::UnknownMethod {
            actor: kind,
            method: method.to_string(),
        })
    }
}

/// Generic decode of a call with the descriptor's schemas.
pub(crate) fn decode_with(
    ctx: &ParseContext<'_>,
    descriptor: &MethodDescriptor,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let metadata = decode_call(
        &message.params,
        &receipt.ret,
        descriptor.params.as_ref(),
        descriptor.ret.as_ref(),
        ctx.mode(),
    )?;
    Ok(DecodeResult::new(metadata))
}

/// Hex rendering of an opaque call. Refused while guessing, since anything
/// would match.
pub(crate) fn raw_call(
    ctx: &ParseContext<'_>,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    if ctx.is_speculative() {
        return Err(DecodeError::malformed(
            crate::consts::PARAMS_KEY,
            "opaque payloads cannot be matched",
        ));
    }
    Ok(DecodeResult::new(passthrough(&message.params, &receipt.ret)))
}

/// Parse path shared by actors without special cases: `Send` passes through,
/// everything else decodes with the method table.
pub(crate) fn parse_generic(
    actor: &dyn ActorDecoder,
    ctx: &ParseContext<'_>,
    method: &str,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    if method == SEND {
        return raw_call(ctx, message, receipt);
    }
    let descriptor = lookup(actor, ctx, method)?;
    decode_with(ctx, &descriptor, message, receipt)
}

/// Parse path of account-like actors: table methods carrying a schema decode
/// with it, any other call renders as raw hex.
pub(crate) fn parse_passthrough(
    actor: &dyn ActorDecoder,
    ctx: &ParseContext<'_>,
    method: &str,
    message: &Message,
    receipt: &Receipt,
) -> Result<DecodeResult, DecodeError> {
    let version = ctx.actors_version();
    let table = actor.methods(version);
    if actor.name().is_available(version)
        && let Some(descriptor) = table.by_name(method)
        && (descriptor.params.is_some() || descriptor.ret.is_some())
    {
        return decode_with(ctx, descriptor, message, receipt);
    }
    raw_call(ctx, message, receipt)
}
