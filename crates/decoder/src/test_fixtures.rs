// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for unit tests.

use crate::decoder::TransactionDecoder;
use crate::identity::MemoryIdentityCache;
use crate::version::VersionResolver;
use cid::Cid;
use std::sync::Arc;

/// dag-cbor cid whose blake2b digest is the bytes 1..=32.
pub const MESSAGE_CID: &str = "bafy2bzaceaaqeayeaudaocajbifqydiob4ibceqtcqkrmfyydenbwha5dypsa";

pub fn message_cid() -> Cid {
    MESSAGE_CID.parse().unwrap()
}

pub fn decoder_with(cache: MemoryIdentityCache) -> TransactionDecoder {
    TransactionDecoder::new(VersionResolver::new(), Arc::new(cache))
}
