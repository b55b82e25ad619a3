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

//! Bindings of the `offchain-transfers` contract: deposits settled by
//! off-chain transfer batches under a validator and a judge.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{
    ContractBindings, ContractDescriptor, EntrypointDescriptor, EntrypointName, SchemaBlob,
};

pub const CONTRACT_NAME: &str = "offchain-transfers";

/// `{validator, judge, time_to_finality, settlement_limit}`
pub const INIT_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "FAAEAAAACQAAAHZhbGlkYXRvcgsFAAAAanVkZ2ULEAAAAHRpbWVfdG9fZmluYWxpdHkOEAAAAHNldHRsZW1lbnRfbGltaX\
     QE",
);

pub const WITHDRAW_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static("Cg==");

pub const ADD_SETTLEMENT_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "FAADAAAADgAAAHNlbmRfdHJhbnNmZXJzEAIUAAIAAAAHAAAAYWRkcmVzcwsGAAAAYW1vdW50ChEAAAByZWNlaXZlX3RyYW\
     5zZmVycxACFAACAAAABwAAAGFkZHJlc3MLBgAAAGFtb3VudAoJAAAAbWV0YV9kYXRhEAIC",
);

pub const SETTLED_BALANCE_OF_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static("Cw==");
pub const SETTLED_BALANCE_OF_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static("Cg==");

pub const GET_SETTLEMENT_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static("BQ==");
pub const GET_SETTLEMENT_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "FAADAAAAAgAAAGlkBQgAAAB0cmFuc2ZlchQAAwAAAA4AAABzZW5kX3RyYW5zZmVycxACFAACAAAABwAAAGFkZHJlc3MLBg\
     AAAGFtb3VudAoRAAAAcmVjZWl2ZV90cmFuc2ZlcnMQAhQAAgAAAAcAAABhZGRyZXNzCwYAAABhbW91bnQKCQAAAG1ldGFf\
     ZGF0YRACAg0AAABmaW5hbGl0eV90aW1lDQ==",
);

static ENTRYPOINT_DESCRIPTORS: [EntrypointDescriptor; 7] = [
    EntrypointDescriptor {
        key: "deposit",
        entrypoint: "deposit",
        display_name: "Deposit",
        request_schema: None,
        response_schema: None,
        error_schema: None,
    },
    EntrypointDescriptor {
        key: "withdraw",
        entrypoint: "withdraw",
        display_name: "Withdraw",
        request_schema: Some(WITHDRAW_REQUEST_SCHEMA),
        response_schema: None,
        error_schema: None,
    },
    EntrypointDescriptor {
        key: "addSettlement",
        entrypoint: "add-settlement",
        display_name: "Add Settlement",
        request_schema: Some(ADD_SETTLEMENT_REQUEST_SCHEMA),
        response_schema: None,
        error_schema: None,
    },
    EntrypointDescriptor {
        key: "veto",
        entrypoint: "veto",
        display_name: "Veto",
        request_schema: None,
        response_schema: None,
        error_schema: None,
    },
    EntrypointDescriptor {
        key: "executeSettlements",
        entrypoint: "execute-settlements",
        display_name: "Execute Settlements",
        request_schema: None,
        response_schema: None,
        error_schema: None,
    },
    EntrypointDescriptor {
        key: "settledBalanceOf",
        entrypoint: "settled-balance-of",
        display_name: "Settled Balance Of",
        request_schema: Some(SETTLED_BALANCE_OF_REQUEST_SCHEMA),
        response_schema: Some(SETTLED_BALANCE_OF_RESPONSE_SCHEMA),
        error_schema: None,
    },
    EntrypointDescriptor {
        key: "getSettlement",
        entrypoint: "get-settlement",
        display_name: "Get Settlement",
        request_schema: Some(GET_SETTLEMENT_REQUEST_SCHEMA),
        response_schema: Some(GET_SETTLEMENT_RESPONSE_SCHEMA),
        error_schema: None,
    },
];

// The module this contract is deployed with is not fixed: the same source is
// deployed per validator.
pub static DESCRIPTOR: ContractDescriptor = ContractDescriptor {
    contract_name: CONTRACT_NAME,
    module_ref: None,
    init_schema: Some(INIT_REQUEST_SCHEMA),
    event_schema: None,
    entrypoints: &ENTRYPOINT_DESCRIPTORS,
};

static BINDINGS: LazyLock<ContractBindings> =
    LazyLock::new(|| ContractBindings::from_static(&DESCRIPTOR));

pub static ENTRYPOINTS: LazyLock<IndexMap<&'static str, EntrypointName>> =
    LazyLock::new(|| BINDINGS.entrypoints().clone());

pub static ENTRYPOINT_DISPLAY_NAMES: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| BINDINGS.display_names().clone());

pub fn offchain_transfers() -> &'static ContractBindings { &BINDINGS }
