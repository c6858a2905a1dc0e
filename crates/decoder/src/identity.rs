// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Address and actor identity lookups backing the decoder.

use crate::actors::ActorKind;
use crate::types::{AddressInfo, TipsetKey};
use cid::Cid;
use fvm_shared::address::Address;
use std::collections::HashMap;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Actor {0} not found")]
    ActorNotFound(String),

    #[error("No actor kind is known for code cid {0}")]
    UnknownCode(String),

    #[error("Identity store lock poisoned")]
    LockPoisoned,

    #[error("Identity backend failed: {0}")]
    Backend(String),
}

/// Source of actor identity, typically a node-backed cache.
pub trait IdentityResolver: Send + Sync {
    /// Kind of the actor at `address` as of `height` and `tipset_key`.
    fn actor_kind(
        &self,
        address: &Address,
        height: i64,
        tipset_key: &TipsetKey,
    ) -> Result<ActorKind, IdentityError>;

    fn register_created_address(&self, info: &AddressInfo) -> Result<(), IdentityError>;

    /// ID address for `address`.
    fn short_address(&self, address: &Address) -> Result<Address, IdentityError>;

    /// Robust (key or actor) address for `address`.
    fn robust_address(&self, address: &Address) -> Result<Address, IdentityError>;

    fn actor_kind_from_code(&self, code: &Cid) -> Result<ActorKind, IdentityError>;
}

#[derive(Debug, Default)]
struct Store {
    kinds: HashMap<Address, ActorKind>,
    short_by_robust: HashMap<Address, Address>,
    robust_by_short: HashMap<Address, Address>,
    codes: HashMap<Cid, ActorKind>,
}

/// In-memory resolver.
#[derive(Debug, Default)]
pub struct MemoryIdentityCache {
    store: RwLock<Store>,
}

impl MemoryIdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the kind of an actor, optionally with its robust address.
    pub fn insert_actor(
        &self,
        short: Address,
        robust: Option<Address>,
        kind: ActorKind,
    ) -> Result<(), IdentityError> {
        let mut store = self.store.write().map_err(|_| IdentityError::LockPoisoned)?;
        store.kinds.insert(short, kind);
        if let Some(robust) = robust {
            store.kinds.insert(robust, kind);
            store.short_by_robust.insert(robust, short);
            store.robust_by_short.insert(short, robust);
        }
        Ok(())
    }

    pub fn insert_code(&self, code: Cid, kind: ActorKind) -> Result<(), IdentityError> {
        let mut store = self.store.write().map_err(|_| IdentityError::LockPoisoned)?;
        store.codes.insert(code, kind);
        Ok(())
    }
}

impl IdentityResolver for MemoryIdentityCache {
    fn actor_kind(
        &self,
        address: &Address,
        _height: i64,
        _tipset_key: &TipsetKey,
    ) -> Result<ActorKind, IdentityError> {
        let store = self.store.read().map_err(|_| IdentityError::LockPoisoned)?;
        store
            .kinds
            .get(address)
            .or_else(|| {
                store
                    .short_by_robust
                    .get(address)
                    .and_then(|short| store.kinds.get(short))
            })
            .copied()
            .ok_or_else(|| IdentityError::ActorNotFound(address.to_string()))
    }

    fn register_created_address(&self, info: &AddressInfo) -> Result<(), IdentityError> {
        if let Some(kind) = info.actor_kind {
            self.insert_actor(info.short, info.robust, kind)?;
        }
        if let (Some(code), Some(kind)) = (info.actor_code, info.actor_kind) {
            self.insert_code(code, kind)?;
        }
        Ok(())
    }

    fn short_address(&self, address: &Address) -> Result<Address, IdentityError> {
        if address.id().is_ok() {
            return Ok(*address);
        }
        let store = self.store.read().map_err(|_| IdentityError::LockPoisoned)?;
        store
            .short_by_robust
            .get(address)
            .copied()
            .ok_or_else(|| IdentityError::ActorNotFound(address.to_string()))
    }

    fn robust_address(&self, address: &Address) -> Result<Address, IdentityError> {
        if address.id().is_err() {
            return Ok(*address);
        }
        let store = self.store.read().map_err(|_| IdentityError::LockPoisoned)?;
        store
            .robust_by_short
            .get(address)
            .copied()
            .ok_or_else(|| IdentityError::ActorNotFound(address.to_string()))
    }

    fn actor_kind_from_code(&self, code: &Cid) -> Result<ActorKind, IdentityError> {
        if let Some(kind) = ActorKind::from_legacy_code(code) {
            return Ok(kind);
        }
        let store = self.store.read().map_err(|_| IdentityError::LockPoisoned)?;
        store
            .codes
            .get(code)
            .copied()
            .ok_or_else(|| IdentityError::UnknownCode(code.to_string()))
    }
}
