// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::frc42;
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::types::{Addr, Amount, Bytes, DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::{METHOD_CONSTRUCTOR, MethodNum};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MintParams {
    pub to: Addr,
    pub amount: Amount,
    pub operators: Vec<Addr>,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct MintReturn {
    pub balance: Amount,
    pub supply: Amount,
    pub recipient_data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DestroyParams {
    pub owner: Addr,
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BurnReturn {
    pub balance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TransferParams {
    pub to: Addr,
    pub amount: Amount,
    pub operator_data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TransferReturn {
    pub from_balance: Amount,
    pub to_balance: Amount,
    pub recipient_data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TransferFromParams {
    pub from: Addr,
    pub to: Addr,
    pub amount: Amount,
    pub operator_data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct TransferFromReturn {
    pub from_balance: Amount,
    pub to_balance: Amount,
    pub allowance: Amount,
    pub recipient_data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct IncreaseAllowanceParams {
    pub operator: Addr,
    pub increase: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct DecreaseAllowanceParams {
    pub operator: Addr,
    pub decrease: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct RevokeAllowanceParams {
    pub operator: Addr,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BurnParams {
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BurnFromParams {
    pub owner: Addr,
    pub amount: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct BurnFromReturn {
    pub balance: Amount,
    pub allowance: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct GetAllowanceParams {
    pub owner: Addr,
    pub operator: Addr,
}

/// Method numbers of the token interface. Actors v9 numbered them
/// sequentially; later releases only export FRC-42 hashes.
struct TokenMethods {
    mint: (MethodNum, &'static str),
    destroy: (MethodNum, &'static str),
    name: (MethodNum, &'static str),
    symbol: (MethodNum, &'static str),
    total_supply: (MethodNum, &'static str),
    balance: (MethodNum, &'static str),
    transfer: (MethodNum, &'static str),
    transfer_from: (MethodNum, &'static str),
    increase_allowance: (MethodNum, &'static str),
    decrease_allowance: (MethodNum, &'static str),
    revoke_allowance: (MethodNum, &'static str),
    burn: (MethodNum, &'static str),
    burn_from: (MethodNum, &'static str),
    allowance: (MethodNum, &'static str),
}

const SEQUENTIAL: TokenMethods = TokenMethods {
    mint: (2, "Mint"),
    destroy: (3, "Destroy"),
    name: (10, "Name"),
    symbol: (11, "Symbol"),
    total_supply: (12, "TotalSupply"),
    balance: (13, "BalanceOf"),
    transfer: (14, "Transfer"),
    transfer_from: (15, "TransferFrom"),
    increase_allowance: (16, "IncreaseAllowance"),
    decrease_allowance: (17, "DecreaseAllowance"),
    revoke_allowance: (18, "RevokeAllowance"),
    burn: (19, "Burn"),
    burn_from: (20, "BurnFrom"),
    allowance: (21, "Allowance"),
};

const EXPORTED: TokenMethods = TokenMethods {
    mint: (frc42::MINT, "MintExported"),
    destroy: (frc42::DESTROY, "DestroyExported"),
    name: (frc42::NAME, "NameExported"),
    symbol: (frc42::SYMBOL, "SymbolExported"),
    total_supply: (frc42::TOTAL_SUPPLY, "TotalSupplyExported"),
    balance: (frc42::BALANCE, "BalanceExported"),
    transfer: (frc42::TRANSFER, "TransferExported"),
    transfer_from: (frc42::TRANSFER_FROM, "TransferFromExported"),
    increase_allowance: (frc42::INCREASE_ALLOWANCE, "IncreaseAllowanceExported"),
    decrease_allowance: (frc42::DECREASE_ALLOWANCE, "DecreaseAllowanceExported"),
    revoke_allowance: (frc42::REVOKE_ALLOWANCE, "RevokeAllowanceExported"),
    burn: (frc42::BURN, "BurnExported"),
    burn_from: (frc42::BURN_FROM, "BurnFromExported"),
    allowance: (frc42::ALLOWANCE, "AllowanceExported"),
};

pub struct DataCap;

impl ActorDecoder for DataCap {
    fn name(&self) -> ActorKind {
        ActorKind::DataCap
    }

    fn methods(&self, version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        if !ActorKind::DataCap.is_available(version) {
            return table;
        }

        table.add(METHOD_CONSTRUCTOR, CONSTRUCTOR).params::<Addr>();
        let numbers = if version == ActorsVersion::V9 {
            SEQUENTIAL
        } else {
            table
                .add(frc42::GRANULARITY, "GranularityExported")
                .returns::<u64>();
            EXPORTED
        };

        let (num, name) = numbers.mint;
        table
            .add(num, name)
            .params::<MintParams>()
            .returns::<MintReturn>();
        let (num, name) = numbers.destroy;
        table
            .add(num, name)
            .params::<DestroyParams>()
            .returns::<BurnReturn>();
        let (num, name) = numbers.name;
        table.add(num, name).returns::<String>();
        let (num, name) = numbers.symbol;
        table.add(num, name).returns::<String>();
        let (num, name) = numbers.total_supply;
        table.add(num, name).returns::<Amount>();
        let (num, name) = numbers.balance;
        table.add(num, name).params::<Addr>().returns::<Amount>();
        let (num, name) = numbers.transfer;
        table
            .add(num, name)
            .params::<TransferParams>()
            .returns::<TransferReturn>();
        let (num, name) = numbers.transfer_from;
        table
            .add(num, name)
            .params::<TransferFromParams>()
            .returns::<TransferFromReturn>();
        let (num, name) = numbers.increase_allowance;
        table
            .add(num, name)
            .params::<IncreaseAllowanceParams>()
            .returns::<Amount>();
        let (num, name) = numbers.decrease_allowance;
        table
            .add(num, name)
            .params::<DecreaseAllowanceParams>()
            .returns::<Amount>();
        let (num, name) = numbers.revoke_allowance;
        table
            .add(num, name)
            .params::<RevokeAllowanceParams>()
            .returns::<Amount>();
        let (num, name) = numbers.burn;
        table
            .add(num, name)
            .params::<BurnParams>()
            .returns::<BurnReturn>();
        let (num, name) = numbers.burn_from;
        table
            .add(num, name)
            .params::<BurnFromParams>()
            .returns::<BurnFromReturn>();
        let (num, name) = numbers.allowance;
        table
            .add(num, name)
            .params::<GetAllowanceParams>()
            .returns::<Amount>();
        table
    }

    fn parse(
        &self,
        ctx: &ParseContext<'_>,
        method: &str,
        message: &Message,
        receipt: &Receipt,
    ) -> Result<DecodeResult, DecodeError> {
        parse_generic(self, ctx, method, message, receipt)
    }
}
