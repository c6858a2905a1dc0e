// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Top-level entry point: version resolution, receiver resolution and
//! dispatch to the actor decoders.

use crate::actors::{ActorKind, MethodTable, decoder_for};
use crate::consts::FIRST_EXPORTED_METHOD_NUMBER;
use crate::consts::method::{FALLBACK, SEND, UNKNOWN};
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::fallback;
use crate::identity::IdentityResolver;
use crate::metrics::DecodeRecorder;
use crate::params_service::{CborParamsService, ParamsService};
use crate::types::encoding::scoped_prefix;
use crate::types::{DecodeOutcome, DecodeResult, EthLog, Message, Receipt, TipsetKey, render_address};
use crate::version::{ActorsVersion, Network, ScheduleError, VersionResolver};
use cid::Cid;
use fil_actors_decoder_config::DecoderConfig;
use fvm_shared::address::{Address, Protocol};
use fvm_shared::{METHOD_SEND, MethodNum};
use std::sync::Arc;

/// One call to decode.
#[derive(Debug, Clone)]
pub struct DecodeRequest {
    pub network: Network,
    pub height: i64,
    pub message: Message,
    pub receipt: Receipt,
    pub message_cid: Cid,
    pub tipset_key: TipsetKey,
    /// Method name already resolved by the caller, used instead of the
    /// message's method number.
    pub method_name: Option<String>,
    /// EVM logs of the tipset; only those emitted by this message are kept.
    pub eth_logs: Vec<EthLog>,
}

impl DecodeRequest {
    pub fn new(
        network: Network,
        height: i64,
        message: Message,
        receipt: Receipt,
        message_cid: Cid,
    ) -> Self {
        Self {
            network,
            height,
            message,
            receipt,
            message_cid,
            tipset_key: TipsetKey::default(),
            method_name: None,
            eth_logs: Vec::new(),
        }
    }

    pub fn with_method_name(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self
    }

    pub fn with_tipset_key(mut self, tipset_key: TipsetKey) -> Self {
        self.tipset_key = tipset_key;
        self
    }

    pub fn with_eth_logs(mut self, eth_logs: Vec<EthLog>) -> Self {
        self.eth_logs = eth_logs;
        self
    }
}

/// Decodes built-in actor calls.
///
/// Stateless apart from the injected identity resolver, so one instance can
/// be shared across threads.
pub struct TransactionDecoder {
    resolver: VersionResolver,
    identity: Arc<dyn IdentityResolver>,
    params_service: Arc<dyn ParamsService>,
}

impl TransactionDecoder {
    pub fn new(resolver: VersionResolver, identity: Arc<dyn IdentityResolver>) -> Self {
        Self {
            resolver,
            identity,
            params_service: Arc::new(CborParamsService),
        }
    }

    pub fn with_params_service(mut self, params_service: Arc<dyn ParamsService>) -> Self {
        self.params_service = params_service;
        self
    }

    /// Decoder using the built-in schedules plus any configured custom ones.
    pub fn from_config(
        config: &DecoderConfig,
        identity: Arc<dyn IdentityResolver>,
    ) -> Result<Self, ScheduleError> {
        let resolver = VersionResolver::from_config(&config.network)?;
        Ok(Self::new(resolver, identity))
    }

    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    pub fn identity(&self) -> &dyn IdentityResolver {
        self.identity.as_ref()
    }

    pub fn params_service(&self) -> &dyn ParamsService {
        self.params_service.as_ref()
    }

    /// Method table of `kind` as it stood at `height` on `network`.
    pub fn methods(
        &self,
        kind: ActorKind,
        network: &Network,
        height: i64,
    ) -> Result<MethodTable, DecodeError> {
        let version = self.resolver.resolve(network, height)?;
        Ok(decoder_for(kind).methods(version.actors_version()))
    }

    pub fn decode(&self, request: &DecodeRequest) -> Result<DecodeOutcome, DecodeError> {
        let mut recorder = DecodeRecorder::start();
        let _prefix = scoped_prefix(request.network.address_prefix());

        let result = self.decode_request(request, &mut recorder);
        if let Err(err) = &result {
            tracing::debug!(
                network = %request.network,
                height = request.height,
                method = request.message.method,
                error = %err,
                "decode failed"
            );
        }
        recorder.finish(&result);
        result
    }

    fn decode_request(
        &self,
        request: &DecodeRequest,
        recorder: &mut DecodeRecorder,
    ) -> Result<DecodeOutcome, DecodeError> {
        let version = self.resolver.resolve(&request.network, request.height)?;
        let kind =
            self.resolve_actor_kind(&request.message.to, request.height, &request.tipset_key)?;
        recorder.set_actor(kind);

        let method = match request.method_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.resolve_method_name(kind, version.actors_version(), request.message.method),
        };

        let ctx = ParseContext::new(
            self,
            &request.network,
            request.height,
            version,
            &request.message_cid,
            &request.tipset_key,
            &request.eth_logs,
        );

        if method == UNKNOWN && !kind.is_passthrough() {
            let (result, matched) = fallback::resolve(&ctx, &request.message, &request.receipt);
            recorder.record_fallback(matched.is_some());
            return Ok(DecodeOutcome {
                actor: kind,
                method: UNKNOWN.to_string(),
                version,
                result,
                fallback: matched,
            });
        }

        let result = self.dispatch(&ctx, kind, &method, &request.message, &request.receipt)?;
        Ok(DecodeOutcome {
            actor: kind,
            method,
            version,
            result,
            fallback: None,
        })
    }

    /// Kind of the actor at `address`: singletons by id, everything else
    /// through the identity resolver.
    pub(crate) fn resolve_actor_kind(
        &self,
        address: &Address,
        height: i64,
        tipset_key: &TipsetKey,
    ) -> Result<ActorKind, DecodeError> {
        let short = match address.protocol() {
            Protocol::ID => Some(*address),
            _ => self.identity.short_address(address).ok(),
        };
        if let Some(kind) = short
            .and_then(|short| short.id().ok())
            .and_then(ActorKind::from_singleton_id)
        {
            return Ok(kind);
        }

        let target = short.as_ref().unwrap_or(address);
        self.identity
            .actor_kind(target, height, tipset_key)
            .map_err(|source| DecodeError::ActorResolution {
                address: render_address(address),
                source,
            })
    }

    /// Name of method `number` on `kind`, `Unknown` when unmapped.
    pub(crate) fn resolve_method_name(
        &self,
        kind: ActorKind,
        version: ActorsVersion,
        number: MethodNum,
    ) -> String {
        if number == METHOD_SEND {
            return SEND.to_string();
        }
        if let Some(descriptor) = decoder_for(kind).methods(version).get(number) {
            return descriptor.name.to_string();
        }
        if kind.has_fallback_method() && number >= FIRST_EXPORTED_METHOD_NUMBER {
            return FALLBACK.to_string();
        }
        UNKNOWN.to_string()
    }

    pub(crate) fn dispatch(
        &self,
        ctx: &ParseContext<'_>,
        kind: ActorKind,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError> {
        tracing::debug!(
            actor = %kind,
            method,
            height = ctx.height,
            version = %ctx.version,
            depth = ctx.depth(),
            "dispatching call"
        );
        decoder_for(kind).parse(ctx, method, message, receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::MemoryIdentityCache;
    use crate::test_fixtures::{decoder_with, message_cid};

    #[test]
    fn test_method_names() {
        let decoder = decoder_with(MemoryIdentityCache::new());
        let name = |kind, version, number| decoder.resolve_method_name(kind, version, number);

        assert_eq!(name(ActorKind::Miner, ActorsVersion::V12, 0), SEND);
        assert_eq!(name(ActorKind::Init, ActorsVersion::V9, 2), "Exec");
        assert_eq!(name(ActorKind::Init, ActorsVersion::V9, 3), UNKNOWN);
        assert_eq!(name(ActorKind::Init, ActorsVersion::V10, 3), "Exec4");
        assert_eq!(name(ActorKind::Account, ActorsVersion::V12, 1 << 24), FALLBACK);
        assert_eq!(name(ActorKind::Account, ActorsVersion::V12, 77), UNKNOWN);
        assert_eq!(name(ActorKind::System, ActorsVersion::V12, 5), UNKNOWN);
        assert_eq!(name(ActorKind::Market, ActorsVersion::V12, 1 << 24), UNKNOWN);
    }

    #[test]
    fn test_singletons_skip_the_identity_resolver() {
        let decoder = decoder_with(MemoryIdentityCache::new());
        let kind = decoder
            .resolve_actor_kind(&Address::new_id(4), 100, &TipsetKey::default())
            .unwrap();
        assert_eq!(kind, ActorKind::Power);
    }

    #[test]
    fn test_unknown_receiver_is_a_resolution_error() {
        let decoder = decoder_with(MemoryIdentityCache::new());
        let err = decoder
            .resolve_actor_kind(&Address::new_id(1234), 100, &TipsetKey::default())
            .unwrap_err();
        assert!(matches!(err, DecodeError::ActorResolution { .. }));
    }

    #[test]
    fn test_robust_receiver_resolves_through_short_address() {
        let cache = MemoryIdentityCache::new();
        let robust = Address::new_actor(b"wallet");
        cache
            .insert_actor(Address::new_id(1500), Some(robust), ActorKind::Multisig)
            .unwrap();
        let decoder = decoder_with(cache);

        let kind = decoder
            .resolve_actor_kind(&robust, 100, &TipsetKey::default())
            .unwrap();
        assert_eq!(kind, ActorKind::Multisig);
    }

    #[test]
    fn test_methods_follow_height() {
        let decoder = decoder_with(MemoryIdentityCache::new());
        let before = decoder
            .methods(ActorKind::Evm, &Network::Mainnet, 2_683_347)
            .unwrap();
        let after = decoder
            .methods(ActorKind::Evm, &Network::Mainnet, 2_683_348)
            .unwrap();
        assert!(before.is_empty());
        assert!(!after.is_empty());
    }

    #[test]
    fn test_explicit_method_name_wins() {
        let decoder = decoder_with(MemoryIdentityCache::new());
        let message = Message::new(Address::new_id(100), Address::new_id(2), 99, vec![]);
        let request = DecodeRequest::new(
            Network::Mainnet,
            3_000_000,
            message,
            Receipt::default(),
            message_cid(),
        )
        .with_method_name("ThisEpochReward");

        let outcome = decoder.decode(&request).unwrap();
        assert_eq!(outcome.actor, ActorKind::Reward);
        assert_eq!(outcome.method, "ThisEpochReward");
        assert!(outcome.fallback.is_none());
    }
}
