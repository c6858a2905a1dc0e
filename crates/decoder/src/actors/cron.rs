// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ActorDecoder, ActorKind, MethodTable, parse_generic};
use crate::consts::method::CONSTRUCTOR;
use crate::context::ParseContext;
use crate::error::DecodeError;
use crate::types::{Addr, DecodeResult, Message, Receipt};
use crate::version::ActorsVersion;
use fvm_ipld_encoding::tuple::*;
use fvm_shared::{METHOD_CONSTRUCTOR, MethodNum};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    pub receiver: Addr,
    pub method_num: MethodNum,
}

#[derive(Debug, Clone, Serialize, Deserialize_tuple)]
#[serde(rename_all = "PascalCase")]
pub struct ConstructorParams {
    pub entries: Vec<Entry>,
}

pub struct Cron;

impl ActorDecoder for Cron {
    fn name(&self) -> ActorKind {
        ActorKind::Cron
    }

    fn methods(&self, _version: ActorsVersion) -> MethodTable {
        let mut table = MethodTable::new();
        table
            .add(METHOD_CONSTRUCTOR, CONSTRUCTOR)
            .params::<ConstructorParams>();
        table.add(2, "EpochTick");
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
