// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod encoding;
pub mod message;
pub mod metadata;

pub use encoding::{
    Addr, Amount, BigNum, Bits, Bytes, CidLink, DealLabel, Sig, hex_with_prefix, render_address,
};
pub use message::{EthLog, Message, MessageView, Receipt, TipsetKey};
pub use metadata::{AddressInfo, DecodeOutcome, DecodeResult, FallbackMatch, Metadata};
