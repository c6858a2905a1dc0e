// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::encoding::{hex_with_prefix, render_address};
use cid::Cid;
use fvm_shared::MethodNum;
use fvm_shared::address::Address;
use fvm_shared::econ::TokenAmount;
use fvm_shared::error::ExitCode;
use serde::{Deserialize, Serialize};

/// The parts of an on-chain message the decoder looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub from: Address,
    pub to: Address,
    pub value: TokenAmount,
    pub method: MethodNum,
    pub params: Vec<u8>,
}

impl Message {
    pub fn new(from: Address, to: Address, method: MethodNum, params: Vec<u8>) -> Self {
        Self {
            from,
            to,
            value: TokenAmount::default(),
            method,
            params,
        }
    }

    pub fn with_value(mut self, value: TokenAmount) -> Self {
        self.value = value;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub exit_code: ExitCode,
    pub ret: Vec<u8>,
}

impl Receipt {
    pub fn ok(ret: Vec<u8>) -> Self {
        Self {
            exit_code: ExitCode::OK,
            ret,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code.is_success()
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::ok(Vec::new())
    }
}

/// Blocks of the tipset a message was included in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TipsetKey(pub Vec<Cid>);

/// An EVM log as reported by the Ethereum JSON-RPC layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthLog {
    pub address: String,
    pub data: String,
    pub topics: Vec<String>,
    pub removed: bool,
    pub log_index: String,
    pub transaction_index: String,
    pub transaction_hash: String,
    pub block_hash: String,
    pub block_number: String,
    /// Filecoin cid of the message that emitted the log.
    #[serde(default)]
    pub transaction_cid: String,
}

/// JSON view of a message handed to the structured parameter service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageView {
    pub from: String,
    pub to: String,
    pub value: String,
    pub method: MethodNum,
    pub params: String,
}

impl MessageView {
    pub fn from_message(message: &Message) -> Self {
        Self {
            from: render_address(&message.from),
            to: render_address(&message.to),
            value: message.value.atto().to_string(),
            method: message.method,
            params: hex_with_prefix(&message.params),
        }
    }

    /// Raw params carried by the view.
    pub fn params_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        let trimmed = self.params.strip_prefix("0x").unwrap_or(&self.params);
        hex::decode(trimmed)
    }
}
