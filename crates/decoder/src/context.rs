// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::decoder::TransactionDecoder;
use crate::identity::IdentityResolver;
use crate::params_service::ParamsService;
use crate::schema::ParseMode;
use crate::types::{AddressInfo, EthLog, TipsetKey};
use crate::version::{ActorsVersion, Network, NetworkVersion};
use cid::Cid;

/// Everything an actor parser may consult besides the message itself.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    decoder: &'a TransactionDecoder,
    pub network: &'a Network,
    pub height: i64,
    pub version: NetworkVersion,
    pub message_cid: &'a Cid,
    pub tipset_key: &'a TipsetKey,
    pub eth_logs: &'a [EthLog],
    depth: u8,
    mode: ParseMode,
}

impl<'a> ParseContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        decoder: &'a TransactionDecoder,
        network: &'a Network,
        height: i64,
        version: NetworkVersion,
        message_cid: &'a Cid,
        tipset_key: &'a TipsetKey,
        eth_logs: &'a [EthLog],
    ) -> Self {
        Self {
            decoder,
            network,
            height,
            version,
            message_cid,
            tipset_key,
            eth_logs,
            depth: 0,
            mode: ParseMode::Authoritative,
        }
    }

    pub fn actors_version(&self) -> ActorsVersion {
        self.version.actors_version()
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn is_speculative(&self) -> bool {
        self.mode == ParseMode::Speculative
    }

    /// Multisig nesting level of the call being parsed.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub(crate) fn nested(&self) -> Self {
        Self {
            depth: self.depth.saturating_add(1),
            ..*self
        }
    }

    pub(crate) fn speculative(&self) -> Self {
        Self {
            mode: ParseMode::Speculative,
            ..*self
        }
    }

    pub(crate) fn decoder(&self) -> &'a TransactionDecoder {
        self.decoder
    }

    pub fn identity(&self) -> &'a dyn IdentityResolver {
        self.decoder.identity()
    }

    pub fn params_service(&self) -> &'a dyn ParamsService {
        self.decoder.params_service()
    }

    /// Record a created actor with the identity resolver. Skipped while
    /// guessing methods.
    pub(crate) fn register(&self, info: &AddressInfo) {
        if self.is_speculative() {
            return;
        }
        if let Err(err) = self.identity().register_created_address(info) {
            tracing::warn!(
                short = %info.short,
                error = %err,
                "failed to register created actor"
            );
        }
    }
}
