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

//! Bindings of the `cis2_multi_royalties` contract: a CIS-2 multi-token
//! contract paying royalties to token minters on transfers.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::{
    ContractBindings, ContractDescriptor, EntrypointDescriptor, EntrypointName, ModuleRef,
    SchemaBlob,
};

pub const CONTRACT_NAME: &str = "cis2_multi_royalties";

pub const MODULE_REF: ModuleRef = ModuleRef::from_array([
    0x1d, 0x45, 0x38, 0xb8, 0xa9, 0xf6, 0x90, 0xe5, 0x6a, 0x5a, 0x07, 0xe8, 0x27, 0x64, 0x46, 0x95,
    0x89, 0x0e, 0x17, 0x7a, 0xd1, 0xf5, 0x8d, 0xba, 0x42, 0x2d, 0x9e, 0x19, 0xde, 0x3c, 0xee, 0xbb,
]);

/// `{pay_royalty: bool}`
pub const INIT_REQUEST_SCHEMA: SchemaBlob =
    SchemaBlob::from_static("FAABAAAACwAAAHBheV9yb3lhbHR5AQ==");

/// Contract error enum shared by every entrypoint which may fail with a
/// contract-defined error.
pub const ERROR_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "FQQAAAAOAAAASW52YWxpZFRva2VuSWQCEQAAAEluc3VmZmljaWVudEZ1bmRzAgwAAABVbmF1dGhvcml6ZWQCBgAAAEN1c3\
     RvbQEBAAAAFQsAAAALAAAAUGFyc2VQYXJhbXMCBwAAAExvZ0Z1bGwCDAAAAExvZ01hbGZvcm1lZAIMAAAAQ29udHJhY3RP\
     bmx5AhMAAABJbnZva2VDb250cmFjdEVycm9yAhAAAABOb1JveWFsdHlQYXlhYmxlAhsAAABDb250cmFjdERvZXNOb3RQYX\
     lSb3lhbHRpZXMCDgAAAEludmFsaWRUb2tlbklkAhMAAABJbnZhbGlkUm95YWx0eVZhbHVlAhUAAABJbnZhbGlkUm95YWx0\
     eUFkZHJlc3MCCAAAAE92ZXJmbG93Ag==",
);

pub const BALANCE_OF_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const CHECK_ROYALTY_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const MINT_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const ON_RECEIVING_CIS2_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const OPERATOR_OF_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const SET_IMPLEMENTORS_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const SUPPORTS_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const TOKEN_METADATA_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const TRANSFER_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;
pub const UPDATE_OPERATOR_ERROR_SCHEMA: SchemaBlob = ERROR_SCHEMA;

/// Tagged enum of CIS-2 events: token metadata, operator update, burn, mint
/// and transfer.
pub const EVENT_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "HwUAAAD7DQAAAFRva2VuTWV0YWRhdGEAAgAAAAgAAAB0b2tlbl9pZB0ADAAAAG1ldGFkYXRhX3VybBQAAgAAAAMAAAB1cm\
     wWAQQAAABoYXNoFQIAAAAEAAAATm9uZQIEAAAAU29tZQEBAAAAHiAAAAD8DgAAAFVwZGF0ZU9wZXJhdG9yAAMAAAAGAAAA\
     dXBkYXRlFQIAAAAGAAAAUmVtb3ZlAgMAAABBZGQCBQAAAG93bmVyFQIAAAAHAAAAQWNjb3VudAEBAAAACwgAAABDb250cm\
     FjdAEBAAAADAgAAABvcGVyYXRvchUCAAAABwAAAEFjY291bnQBAQAAAAsIAAAAQ29udHJhY3QBAQAAAAz9BAAAAEJ1cm4A\
     AwAAAAgAAAB0b2tlbl9pZB0ABgAAAGFtb3VudBslAAAABQAAAG93bmVyFQIAAAAHAAAAQWNjb3VudAEBAAAACwgAAABDb2\
     50cmFjdAEBAAAADP4EAAAATWludAADAAAACAAAAHRva2VuX2lkHQAGAAAAYW1vdW50GyUAAAAFAAAAb3duZXIVAgAAAAcA\
     AABBY2NvdW50AQEAAAALCAAAAENvbnRyYWN0AQEAAAAM/wgAAABUcmFuc2ZlcgAEAAAACAAAAHRva2VuX2lkHQAGAAAAYW\
     1vdW50GyUAAAAEAAAAZnJvbRUCAAAABwAAAEFjY291bnQBAQAAAAsIAAAAQ29udHJhY3QBAQAAAAwCAAAAdG8VAgAAAAcA\
     AABBY2NvdW50AQEAAAALCAAAAENvbnRyYWN0AQEAAAAM",
);

pub const BALANCE_OF_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "EAEUAAIAAAAIAAAAdG9rZW5faWQdAAcAAABhZGRyZXNzFQIAAAAHAAAAQWNjb3VudAEBAAAACwgAAABDb250cmFjdAEBAA\
     AADA==",
);
pub const BALANCE_OF_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static("EAEbJQAAAA==");

pub const CHECK_ROYALTY_REQUEST_SCHEMA: SchemaBlob =
    SchemaBlob::from_static("FAACAAAAAgAAAGlkHQAKAAAAc2FsZV9wcmljZQU=");

pub const CONTRACT_PAYS_ROYALTIES_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static("AQ==");

/// `{owner: Address, tokens: Map<u32, TokenId, TokenAmount>, royalty_percentage: u8}`
pub const MINT_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "FAADAAAABQAAAG93bmVyFQIAAAAHAAAAQWNjb3VudAEBAAAACwgAAABDb250cmFjdAEBAAAADAYAAAB0b2tlbnMSAh0AGy\
     UAAAASAAAAcm95YWx0eV9wZXJjZW50YWdlAg==",
);

pub const OPERATOR_OF_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "EAEUAAIAAAAFAAAAb3duZXIVAgAAAAcAAABBY2NvdW50AQEAAAALCAAAAENvbnRyYWN0AQEAAAAMBwAAAGFkZHJlc3MVAg\
     AAAAcAAABBY2NvdW50AQEAAAALCAAAAENvbnRyYWN0AQEAAAAM",
);
pub const OPERATOR_OF_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static("EAEB");

pub const SET_IMPLEMENTORS_REQUEST_SCHEMA: SchemaBlob =
    SchemaBlob::from_static("FAACAAAAAgAAAGlkFgAMAAAAaW1wbGVtZW50b3JzEAIM");

pub const SUPPORTS_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static("EAEWAA==");
pub const SUPPORTS_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "EAEVAwAAAAkAAABOb1N1cHBvcnQCBwAAAFN1cHBvcnQCCQAAAFN1cHBvcnRCeQEBAAAAEAAM",
);

pub const TOKEN_METADATA_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static("EAEdAA==");
pub const TOKEN_METADATA_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "EAEUAAIAAAADAAAAdXJsFgEEAAAAaGFzaBUCAAAABAAAAE5vbmUCBAAAAFNvbWUBAQAAAB4gAAAA",
);

pub const TRANSFER_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "EAEUAAUAAAAIAAAAdG9rZW5faWQdAAYAAABhbW91bnQbJQAAAAQAAABmcm9tFQIAAAAHAAAAQWNjb3VudAEBAAAACwgAAA\
     BDb250cmFjdAEBAAAADAIAAAB0bxUCAAAABwAAAEFjY291bnQBAQAAAAsIAAAAQ29udHJhY3QBAgAAAAwWAQQAAABkYXRh\
     HQE=",
);

pub const UPDATE_OPERATOR_REQUEST_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "EAEUAAIAAAAGAAAAdXBkYXRlFQIAAAAGAAAAUmVtb3ZlAgMAAABBZGQCCAAAAG9wZXJhdG9yFQIAAAAHAAAAQWNjb3VudA\
     EBAAAACwgAAABDb250cmFjdAEBAAAADA==",
);

pub const VIEW_RESPONSE_SCHEMA: SchemaBlob = SchemaBlob::from_static(
    "FAACAAAABQAAAHN0YXRlEAIPFQIAAAAHAAAAQWNjb3VudAEBAAAACwgAAABDb250cmFjdAEBAAAADBQAAgAAAAgAAABiYW\
     xhbmNlcxACDx0AGyUAAAAJAAAAb3BlcmF0b3JzEAIVAgAAAAcAAABBY2NvdW50AQEAAAALCAAAAENvbnRyYWN0AQEAAAAM\
     BgAAAHRva2VucxACHQA=",
);

const fn entrypoint(
    key: &'static str,
    entrypoint: &'static str,
    display_name: &'static str,
    request_schema: Option<SchemaBlob>,
    response_schema: Option<SchemaBlob>,
    error_schema: Option<SchemaBlob>,
) -> EntrypointDescriptor {
    EntrypointDescriptor {
        key,
        entrypoint,
        display_name,
        request_schema,
        response_schema,
        error_schema,
    }
}

static ENTRYPOINT_DESCRIPTORS: [EntrypointDescriptor; 12] = [
    entrypoint(
        "balanceOf",
        "balanceOf",
        "Balance Of",
        Some(BALANCE_OF_REQUEST_SCHEMA),
        Some(BALANCE_OF_RESPONSE_SCHEMA),
        Some(BALANCE_OF_ERROR_SCHEMA),
    ),
    entrypoint(
        "checkRoyalty",
        "check_royalty",
        "Check Royalty",
        Some(CHECK_ROYALTY_REQUEST_SCHEMA),
        None,
        Some(CHECK_ROYALTY_ERROR_SCHEMA),
    ),
    entrypoint(
        "contractPaysRoyalties",
        "contract_pays_royalties",
        "Contract Pays Royalties",
        None,
        Some(CONTRACT_PAYS_ROYALTIES_RESPONSE_SCHEMA),
        None,
    ),
    entrypoint(
        "mint",
        "mint",
        "Mint",
        Some(MINT_REQUEST_SCHEMA),
        None,
        Some(MINT_ERROR_SCHEMA),
    ),
    entrypoint(
        "onReceivingCis2",
        "onReceivingCIS2",
        "On Receiving Cis 2",
        None,
        None,
        Some(ON_RECEIVING_CIS2_ERROR_SCHEMA),
    ),
    entrypoint(
        "operatorOf",
        "operatorOf",
        "Operator Of",
        Some(OPERATOR_OF_REQUEST_SCHEMA),
        Some(OPERATOR_OF_RESPONSE_SCHEMA),
        Some(OPERATOR_OF_ERROR_SCHEMA),
    ),
    entrypoint(
        "setImplementors",
        "setImplementors",
        "Set Implementors",
        Some(SET_IMPLEMENTORS_REQUEST_SCHEMA),
        None,
        Some(SET_IMPLEMENTORS_ERROR_SCHEMA),
    ),
    entrypoint(
        "supports",
        "supports",
        "Supports",
        Some(SUPPORTS_REQUEST_SCHEMA),
        Some(SUPPORTS_RESPONSE_SCHEMA),
        Some(SUPPORTS_ERROR_SCHEMA),
    ),
    entrypoint(
        "tokenMetadata",
        "tokenMetadata",
        "Token Metadata",
        Some(TOKEN_METADATA_REQUEST_SCHEMA),
        Some(TOKEN_METADATA_RESPONSE_SCHEMA),
        Some(TOKEN_METADATA_ERROR_SCHEMA),
    ),
    entrypoint(
        "transfer",
        "transfer",
        "Transfer",
        Some(TRANSFER_REQUEST_SCHEMA),
        None,
        Some(TRANSFER_ERROR_SCHEMA),
    ),
    entrypoint(
        "updateOperator",
        "updateOperator",
        "Update Operator",
        Some(UPDATE_OPERATOR_REQUEST_SCHEMA),
        None,
        Some(UPDATE_OPERATOR_ERROR_SCHEMA),
    ),
    entrypoint("view", "view", "View", None, Some(VIEW_RESPONSE_SCHEMA), None),
];

pub static DESCRIPTOR: ContractDescriptor = ContractDescriptor {
    contract_name: CONTRACT_NAME,
    module_ref: Some(MODULE_REF),
    init_schema: Some(INIT_REQUEST_SCHEMA),
    event_schema: Some(EVENT_SCHEMA),
    entrypoints: &ENTRYPOINT_DESCRIPTORS,
};

static BINDINGS: LazyLock<ContractBindings> =
    LazyLock::new(|| ContractBindings::from_static(&DESCRIPTOR));

/// Entrypoint keys mapped to on-chain entrypoint names.
pub static ENTRYPOINTS: LazyLock<IndexMap<&'static str, EntrypointName>> =
    LazyLock::new(|| BINDINGS.entrypoints().clone());

/// Entrypoint keys mapped to human-readable titles.
pub static ENTRYPOINT_DISPLAY_NAMES: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| BINDINGS.display_names().clone());

pub fn cis2_multi_royalties() -> &'static ContractBindings { &BINDINGS }
