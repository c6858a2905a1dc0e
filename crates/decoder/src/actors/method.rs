// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::schema::Schema;
use fvm_shared::MethodNum;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    pub number: MethodNum,
    pub name: &'static str,
    /// Method this one is the exported FRC-42 alias of.
    pub alias_of: Option<&'static str>,
    pub params: Option<Schema>,
    pub ret: Option<Schema>,
}

impl MethodDescriptor {
    fn new(number: MethodNum, name: &'static str) -> Self {
        Self {
            number,
            name,
            alias_of: None,
            params: None,
            ret: None,
        }
    }

    /// Name of the underlying method, looking through exported aliases.
    pub fn canonical_name(&self) -> &'static str {
        self.alias_of.unwrap_or(self.name)
    }

    pub fn params<T: DeserializeOwned + Serialize>(&mut self) -> &mut Self {
        self.params = Some(Schema::of::<T>());
        self
    }

    pub fn returns<T: DeserializeOwned + Serialize>(&mut self) -> &mut Self {
        self.ret = Some(Schema::of::<T>());
        self
    }

    pub fn params_schema(&mut self, schema: Schema) -> &mut Self {
        self.params = Some(schema);
        self
    }

    pub fn returns_schema(&mut self, schema: Schema) -> &mut Self {
        self.ret = Some(schema);
        self
    }
}

/// Methods of one actor at one actors version, ordered by number.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    methods: BTreeMap<MethodNum, MethodDescriptor>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a method, replacing any previous one with the same number.
    pub fn add(&mut self, number: MethodNum, name: &'static str) -> &mut MethodDescriptor {
        let descriptor = MethodDescriptor::new(number, name);
        match self.methods.entry(number) {
            Entry::Occupied(mut entry) => {
                entry.insert(descriptor);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(descriptor),
        }
    }

    /// Insert an exported alias sharing the schemas of `canonical`.
    pub fn alias(
        &mut self,
        number: MethodNum,
        name: &'static str,
        canonical: &'static str,
    ) -> &mut MethodDescriptor {
        let (params, ret) = self
            .by_name(canonical)
            .map(|d| (d.params, d.ret))
            .unwrap_or_default();
        let descriptor = self.add(number, name);
        descriptor.alias_of = Some(canonical);
        descriptor.params = params;
        descriptor.ret = ret;
        descriptor
    }

    pub fn get(&self, number: MethodNum) -> Option<&MethodDescriptor> {
        self.methods.get(&number)
    }

    pub fn by_name(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.values().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.values()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.methods.values().map(|d| d.name).collect()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Addr;

    #[test]
    fn test_alias_copies_schemas() {
        let mut table = MethodTable::new();
        table.add(2, "AddBalance").params::<Addr>();
        table.alias(822473126, "AddBalanceExported", "AddBalance");

        let alias = table.by_name("AddBalanceExported").unwrap();
        assert_eq!(alias.canonical_name(), "AddBalance");
        assert_eq!(alias.params.unwrap().type_name(), "Addr");
        assert!(alias.ret.is_none());
    }

    #[test]
    fn test_iteration_is_by_ascending_number() {
        let mut table = MethodTable::new();
        table.add(3, "C");
        table.add(1, "A");
        table.add(2, "B");
        assert_eq!(table.names(), vec!["A", "B", "C"]);
        assert_eq!(table.get(2).unwrap().name, "B");
    }

    #[test]
    fn test_add_replaces_same_number() {
        let mut table = MethodTable::new();
        table.add(1, "Old");
        table.add(1, "New");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).unwrap().name, "New");
    }
}
