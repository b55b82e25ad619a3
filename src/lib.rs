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

//! Bindings of Concordium smart contracts: contract and entrypoint names,
//! display metadata and the binary schemas describing parameters, return
//! values, errors and events.
//!
//! Bindings do not encode or decode values themselves. Everything which
//! needs a schema-driven codec is forwarded to a [`SchemaCodec`]
//! implementation supplied by the contract-interaction engine.

#![deny(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    unused_mut,
    unused_imports,
    dead_code,
    // missing_docs
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate tracing;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[macro_use]
mod names;
pub mod schema;
mod codec;
mod method;
mod contract;
pub mod contracts;

pub use codec::{BindingError, SchemaCodec, SchemaKind, UnknownSchemaKind};
pub use contract::{ContractBindings, ContractDescriptor, DescriptorError, EntrypointDescriptor};
pub use method::{InitMethod, ReceiveMethod};
pub use names::{
    ContractName, EntrypointName, ModuleRef, NameError, CONTRACT_NAME_MAX_LEN,
    ENTRYPOINT_NAME_MAX_LEN,
};
pub use schema::{Fields, SchemaBlob, SchemaError, SchemaType, SizeLength};
