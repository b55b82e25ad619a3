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

//! JSON-Schema form adapters for contract bindings.
//!
//! A UI toolkit implements [`FormRenderer`]; contract UI modules describe which
//! entrypoints get a form, which JSON schema drives user input and which
//! binary schema the entered values are serialized with.

#![deny(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    unused_mut,
    unused_imports,
    dead_code
)]

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate tracing;

mod schema;
mod form;
mod entrypoint;
pub mod offchain_transfers;

pub use entrypoint::{ContractUi, FormKind, UiEntrypoint};
pub use form::{FormOptions, FormRenderer, InitForm, InvokeForm, UpdateForm};
pub use offchain_transfers::offchain_transfers_ui;
pub use schema::{UiError, UiSchema};
