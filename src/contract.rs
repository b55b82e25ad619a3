// Concordium smart contract bindings
//
// SPDX-License-Identifier: Apache-2.0
//
// Copyright (C) 2024-2025 Concordium bindings contributors.
// All rights under the above copyrights are reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! Contract descriptors and the bindings built out of them.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::{
    BindingError, ContractName, EntrypointName, InitMethod, ModuleRef, NameError, ReceiveMethod,
    SchemaBlob, SchemaCodec,
};

/// Static description of a single contract entrypoint.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EntrypointDescriptor {
    /// Key under which the entrypoint is exposed by the bindings.
    pub key: &'static str,
    /// Entrypoint name as it is known on chain.
    pub entrypoint: &'static str,
    /// Human-readable title for presentation layers.
    pub display_name: &'static str,
    pub request_schema: Option<SchemaBlob>,
    pub response_schema: Option<SchemaBlob>,
    pub error_schema: Option<SchemaBlob>,
}

/// Static description of a contract: its name, init function, entrypoints
/// and events.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ContractDescriptor {
    pub contract_name: &'static str,
    pub module_ref: Option<ModuleRef>,
    pub init_schema: Option<SchemaBlob>,
    pub event_schema: Option<SchemaBlob>,
    pub entrypoints: &'static [EntrypointDescriptor],
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum DescriptorError {
    /// invalid contract or entrypoint name. Details: {0}
    #[from]
    Name(NameError),

    /// entrypoint key '{0}' is used more than once.
    RepeatedKey(&'static str),

    /// entrypoint key must not be empty.
    EmptyKey,
}

/// Bindings of a single contract: init function, entrypoint tables and
/// receive-method factories, built once from a [`ContractDescriptor`].
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ContractBindings {
    init: InitMethod,
    entrypoints: IndexMap<&'static str, EntrypointName>,
    display_names: IndexMap<&'static str, &'static str>,
    methods: IndexMap<&'static str, ReceiveMethod>,
    event_schema: Option<SchemaBlob>,
}

impl TryFrom<&ContractDescriptor> for ContractBindings {
    type Error = DescriptorError;

    fn try_from(descriptor: &ContractDescriptor) -> Result<Self, Self::Error> {
        let contract_name = ContractName::from_str(descriptor.contract_name)?;
        let init = InitMethod::new(
            descriptor.module_ref,
            contract_name.clone(),
            descriptor.init_schema.clone(),
        );

        let capacity = descriptor.entrypoints.len();
        let mut entrypoints = IndexMap::with_capacity(capacity);
        let mut display_names = IndexMap::with_capacity(capacity);
        let mut methods = IndexMap::with_capacity(capacity);
        for entry in descriptor.entrypoints {
            if entry.key.is_empty() {
                return Err(DescriptorError::EmptyKey);
            }
            let name = EntrypointName::from_str(entry.entrypoint)?;
            let method = ReceiveMethod {
                contract_name: contract_name.clone(),
                entrypoint: name.clone(),
                request_schema: entry.request_schema.clone(),
                response_schema: entry.response_schema.clone(),
                error_schema: entry.error_schema.clone(),
            };
            if entrypoints.insert(entry.key, name).is_some() {
                return Err(DescriptorError::RepeatedKey(entry.key));
            }
            display_names.insert(entry.key, entry.display_name);
            methods.insert(entry.key, method);
        }

        Ok(ContractBindings {
            init,
            entrypoints,
            display_names,
            methods,
            event_schema: descriptor.event_schema.clone(),
        })
    }
}

impl ContractBindings {
    /// Builds bindings from a descriptor compiled into the library.
    ///
    /// # Panics
    ///
    /// If the descriptor is malformed.
    pub fn from_static(descriptor: &'static ContractDescriptor) -> Self {
        ContractBindings::try_from(descriptor).unwrap_or_else(|err| {
            panic!("invalid built-in descriptor of contract '{}': {err}", descriptor.contract_name)
        })
    }

    pub fn contract_name(&self) -> &ContractName { &self.init.contract_name }

    pub fn module_ref(&self) -> Option<ModuleRef> { self.init.module_ref }

    pub fn init(&self) -> &InitMethod { &self.init }

    /// Entrypoint keys mapped to the on-chain entrypoint names.
    pub fn entrypoints(&self) -> &IndexMap<&'static str, EntrypointName> { &self.entrypoints }

    /// Entrypoint keys mapped to their human-readable titles.
    pub fn display_names(&self) -> &IndexMap<&'static str, &'static str> { &self.display_names }

    pub fn display_name(&self, key: &str) -> Option<&'static str> {
        self.display_names.get(key).copied()
    }

    pub fn methods(&self) -> impl Iterator<Item = (&'static str, &ReceiveMethod)> {
        self.methods.iter().map(|(key, method)| (*key, method))
    }

    /// Receive method for the entrypoint with the given key.
    pub fn method(&self, key: &str) -> Option<&ReceiveMethod> {
        let method = self.methods.get(key);
        if method.is_none() {
            trace!(contract = %self.contract_name(), key, "no entrypoint with the key");
        }
        method
    }

    /// Looks up an entrypoint either by its key or by its on-chain name.
    pub fn resolve(&self, key_or_name: &str) -> Option<(&'static str, &ReceiveMethod)> {
        if let Some((_, key, method)) = self.methods.get_full(key_or_name) {
            return Some((*key, method));
        }
        self.methods
            .iter()
            .find(|(_, method)| method.entrypoint.as_str() == key_or_name)
            .map(|(key, method)| (*key, method))
    }

    pub fn event_schema(&self) -> Option<&SchemaBlob> { self.event_schema.as_ref() }

    /// Decodes an event logged by the contract with the contract event schema.
    pub fn deserialize_event<C: SchemaCodec>(
        &self,
        codec: &C,
        data: &[u8],
    ) -> Result<C::Value, BindingError<C::Error>> {
        let schema = self
            .event_schema
            .as_ref()
            .ok_or_else(|| BindingError::NoEventSchema(self.contract_name().clone()))?;
        codec.decode(schema, data).map_err(BindingError::Codec)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static ENTRYPOINTS: [EntrypointDescriptor; 2] = [
        EntrypointDescriptor {
            key: "balanceOf",
            entrypoint: "balanceOf",
            display_name: "Balance Of",
            request_schema: Some(SchemaBlob::from_static("EAEdAA==")),
            response_schema: Some(SchemaBlob::from_static("EAEbJQAAAA==")),
            error_schema: None,
        },
        EntrypointDescriptor {
            key: "settledBalanceOf",
            entrypoint: "settled-balance-of",
            display_name: "Settled Balance Of",
            request_schema: None,
            response_schema: None,
            error_schema: None,
        },
    ];

    static DESCRIPTOR: ContractDescriptor = ContractDescriptor {
        contract_name: "sample",
        module_ref: None,
        init_schema: None,
        event_schema: None,
        entrypoints: &ENTRYPOINTS,
    };

    #[test]
    fn tables() {
        let bindings = ContractBindings::from_static(&DESCRIPTOR);
        assert_eq!(bindings.contract_name().as_str(), "sample");
        assert_eq!(bindings.module_ref(), None);
        assert_eq!(
            bindings.entrypoints().keys().copied().collect::<Vec<_>>(),
            vec!["balanceOf", "settledBalanceOf"]
        );
        assert_eq!(bindings.display_name("settledBalanceOf"), Some("Settled Balance Of"));
        assert_eq!(bindings.display_name("view"), None);
        let method = bindings.method("balanceOf").unwrap();
        assert_eq!(method.receive_name(), "sample.balanceOf");
        assert_eq!(method.error_schema, None);
        assert!(bindings.method("view").is_none());
    }

    #[test]
    fn resolve_by_name() {
        let bindings = ContractBindings::from_static(&DESCRIPTOR);
        let (key, method) = bindings.resolve("settled-balance-of").unwrap();
        assert_eq!(key, "settledBalanceOf");
        assert_eq!(method.entrypoint.as_str(), "settled-balance-of");
        assert_eq!(bindings.resolve("settledBalanceOf").unwrap().0, "settledBalanceOf");
        assert!(bindings.resolve("settled_balance_of").is_none());
    }

    #[test]
    fn malformed_descriptors() {
        static REPEATED: [EntrypointDescriptor; 2] = [
            EntrypointDescriptor {
                key: "view",
                entrypoint: "view",
                display_name: "View",
                request_schema: None,
                response_schema: None,
                error_schema: None,
            },
            EntrypointDescriptor {
                key: "view",
                entrypoint: "view2",
                display_name: "View",
                request_schema: None,
                response_schema: None,
                error_schema: None,
            },
        ];
        let descriptor = ContractDescriptor {
            contract_name: "sample",
            module_ref: None,
            init_schema: None,
            event_schema: None,
            entrypoints: &REPEATED,
        };
        assert_eq!(
            ContractBindings::try_from(&descriptor),
            Err(DescriptorError::RepeatedKey("view"))
        );

        let descriptor = ContractDescriptor {
            contract_name: "sample.v2",
            entrypoints: &[],
            ..descriptor
        };
        assert!(matches!(
            ContractBindings::try_from(&descriptor),
            Err(DescriptorError::Name(NameError::ContainsDot(_)))
        ));
    }
}
