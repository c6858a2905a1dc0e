// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wrappers giving on-chain CBOR values their JSON rendering.
//!
//! Each wrapper deserializes from the same CBOR shape as the value it wraps
//! and serializes to the form used in decoded metadata.

use crate::consts::HEX_PREFIX;
use cid::Cid;
use fvm_ipld_bitfield::BitField;
use fvm_ipld_encoding::BytesDe;
use fvm_shared::address::Address;
use fvm_shared::bigint::{BigInt, bigint_ser};
use fvm_shared::crypto::signature::Signature;
use fvm_shared::econ::TokenAmount;
use serde::de::{self, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::Cell;
use std::fmt;

thread_local! {
    static ADDRESS_PREFIX: Cell<char> = const { Cell::new('f') };
}

/// Restores the previous address prefix when dropped.
pub(crate) struct PrefixGuard {
    previous: char,
}

impl Drop for PrefixGuard {
    fn drop(&mut self) {
        ADDRESS_PREFIX.set(self.previous);
    }
}

/// Render addresses with `prefix` on this thread until the guard drops.
pub(crate) fn scoped_prefix(prefix: char) -> PrefixGuard {
    PrefixGuard {
        previous: ADDRESS_PREFIX.replace(prefix),
    }
}

/// Format bytes as a 0x-prefixed lowercase hex string.
pub fn hex_with_prefix(data: &[u8]) -> String {
    format!("{}{}", HEX_PREFIX, hex::encode(data))
}

/// Canonical string of an address using the current network prefix.
pub fn render_address(address: &Address) -> String {
    let rendered = address.to_string();
    let prefix = ADDRESS_PREFIX.get();
    if rendered.starts_with(prefix) {
        return rendered;
    }
    format!("{prefix}{}", rendered.get(1..).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Addr(pub Address);

impl<'de> Deserialize<'de> for Addr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Address::deserialize(deserializer).map(Addr)
    }
}

impl Serialize for Addr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&render_address(&self.0))
    }
}

/// Token amount rendered as an attoFIL decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(pub TokenAmount);

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TokenAmount::deserialize(deserializer).map(Amount)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.atto().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigNum(pub BigInt);

impl<'de> Deserialize<'de> for BigNum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bigint_ser::deserialize(deserializer).map(BigNum)
    }
}

impl Serialize for BigNum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bytes(pub Vec<u8>);

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BytesDe::deserialize(deserializer).map(|b| Bytes(b.0))
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex_with_prefix(&self.0))
    }
}

/// CID rendered as an IPLD link, `{"/": "<cid>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidLink(pub Cid);

impl<'de> Deserialize<'de> for CidLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Cid::deserialize(deserializer).map(CidLink)
    }
}

impl Serialize for CidLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("/", &self.0.to_string())?;
        map.end()
    }
}

/// Bitfield rendered as its runs of set bits, each an inclusive
/// `[first, last]` pair in ascending order.
///
/// The output is bounded by the encoded run count, never by the number of
/// set bits.
#[derive(Debug, Clone, PartialEq)]
pub struct Bits(pub BitField);

impl<'de> Deserialize<'de> for Bits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BitField::deserialize(deserializer).map(Bits)
    }
}

impl Serialize for Bits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.ranges().map(|run| [run.start, run.end - 1]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sig(pub Signature);

impl<'de> Deserialize<'de> for Sig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Signature::deserialize(deserializer).map(Sig)
    }
}

impl Serialize for Sig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("Type", &(self.0.sig_type as u8))?;
        map.serialize_entry("Data", &hex_with_prefix(&self.0.bytes))?;
        map.end()
    }
}

/// Storage deal label, either UTF-8 text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealLabel {
    String(String),
    Bytes(Vec<u8>),
}

impl<'de> Deserialize<'de> for DealLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelVisitor;

        impl<'de> Visitor<'de> for LabelVisitor {
            type Value = DealLabel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or byte string deal label")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(DealLabel::String(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(DealLabel::String(v))
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                Ok(DealLabel::Bytes(v.to_vec()))
            }

            fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
                Ok(DealLabel::Bytes(v))
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}

impl Serialize for DealLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DealLabel::String(s) => serializer.serialize_str(s),
            DealLabel::Bytes(b) => serializer.serialize_str(&hex_with_prefix(b)),
        }
    }
}
