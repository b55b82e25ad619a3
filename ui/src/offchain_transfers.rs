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

//! User interface of the `offchain-transfers` contract.

use std::sync::LazyLock;

use ccd::contracts::offchain_transfers;
use ccd::ReceiveMethod;
use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::{ContractUi, FormOptions, FormRenderer, UiEntrypoint, UiError, UiSchema};

fn transfers(title: &str) -> Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "title": "",
            "properties": {
                "address": { "type": "string", "title": "Address" },
                "amount": { "type": "string", "title": "Amount" }
            }
        },
        "title": title
    })
}

fn meta_data() -> Value {
    json!({
        "type": "array",
        "items": { "type": "integer", "minimum": 0, "maximum": 255, "title": "" },
        "title": "Meta Data"
    })
}

pub static INIT_REQUEST_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({
        "type": "object",
        "title": "Init Request",
        "properties": {
            "validator": { "type": "string", "title": "Validator" },
            "judge": { "type": "string", "title": "Judge" },
            "time_to_finality": { "type": "string", "title": "Time To Finality" },
            "settlement_limit": {
                "type": "integer",
                "minimum": 0,
                "maximum": 4294967295u64,
                "title": "Settlement Limit"
            }
        }
    }))
});

pub static ADD_SETTLEMENT_REQUEST_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({
        "type": "object",
        "title": "Add Settlement Request",
        "properties": {
            "send_transfers": transfers("Send Transfers"),
            "receive_transfers": transfers("Receive Transfers"),
            "meta_data": meta_data()
        }
    }))
});

pub static GET_SETTLEMENT_REQUEST_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({ "type": "integer", "minimum": 0, "title": "Get Settlement Request" }))
});

pub static GET_SETTLEMENT_RESPONSE_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({
        "type": "object",
        "title": "Get Settlement Response",
        "properties": {
            "id": { "type": "integer", "minimum": 0, "title": "Id" },
            "transfer": {
                "type": "object",
                "title": "Transfer",
                "properties": {
                    "send_transfers": transfers("Send Transfers"),
                    "receive_transfers": transfers("Receive Transfers"),
                    "meta_data": meta_data()
                }
            },
            "finality_time": { "type": "string", "format": "date-time", "title": "Finality Time" }
        }
    }))
});

pub static SETTLED_BALANCE_OF_REQUEST_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({ "type": "string", "title": "Settled Balance Of Request" }))
});

pub static SETTLED_BALANCE_OF_RESPONSE_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({ "type": "string", "title": "Settled Balance Of Response" }))
});

pub static WITHDRAW_REQUEST_JSON_SCHEMA: LazyLock<UiSchema> = LazyLock::new(|| {
    UiSchema::new(json!({ "type": "string", "title": "Withdraw Request" }))
});

fn method(key: &str) -> &'static ReceiveMethod {
    offchain_transfers()
        .method(key)
        .unwrap_or_else(|| panic!("offchain-transfers bindings lack entrypoint '{key}'"))
}

/// Entrypoints of the contract which have a user interface.
pub static ENTRYPOINTS_UI: LazyLock<IndexMap<&'static str, UiEntrypoint>> = LazyLock::new(|| {
    IndexMap::from([
        (
            "addSettlement",
            UiEntrypoint::update(method("addSettlement"), &ADD_SETTLEMENT_REQUEST_JSON_SCHEMA),
        ),
        (
            "getSettlement",
            UiEntrypoint::invoke(
                method("getSettlement"),
                Some(&*GET_SETTLEMENT_REQUEST_JSON_SCHEMA),
                &GET_SETTLEMENT_RESPONSE_JSON_SCHEMA,
            ),
        ),
        (
            "settledBalanceOf",
            UiEntrypoint::invoke(
                method("settledBalanceOf"),
                Some(&*SETTLED_BALANCE_OF_REQUEST_JSON_SCHEMA),
                &SETTLED_BALANCE_OF_RESPONSE_JSON_SCHEMA,
            ),
        ),
        ("withdraw", UiEntrypoint::update(method("withdraw"), &WITHDRAW_REQUEST_JSON_SCHEMA)),
    ])
});

static CONTRACT_UI: LazyLock<ContractUi> = LazyLock::new(|| ContractUi {
    bindings: offchain_transfers(),
    init_request_json_schema: &INIT_REQUEST_JSON_SCHEMA,
    entrypoints: &ENTRYPOINTS_UI,
});

pub fn offchain_transfers_ui() -> &'static ContractUi { &CONTRACT_UI }

/// Builds the form instantiating the contract.
pub fn init<R: FormRenderer>(renderer: &R, options: &FormOptions) -> Result<R::Output, UiError> {
    offchain_transfers_ui().init(renderer, options)
}

#[cfg(test)]
mod test {
    use ccd::SchemaBlob;

    use super::*;
    use crate::{InitForm, InvokeForm, UpdateForm};

    /// Renderer recording what it was asked to build.
    struct Recorder;

    impl FormRenderer for Recorder {
        type Output = (String, String, SchemaBlob);

        fn init_form(&self, form: InitForm) -> Self::Output {
            (
                s!("init"),
                form.request_json_schema.title().to_owned(),
                form.request_schema.clone(),
            )
        }

        fn update_form(&self, form: UpdateForm) -> Self::Output {
            (
                form.method.receive_name(),
                form.request_json_schema.title().to_owned(),
                form.request_schema.clone(),
            )
        }

        fn invoke_form(&self, form: InvokeForm) -> Self::Output {
            (
                form.method.receive_name(),
                form.response_json_schema.title().to_owned(),
                form.response_schema.clone(),
            )
        }
    }

    #[test]
    fn documents_are_valid() {
        let ui = offchain_transfers_ui();
        let schemas = ui.json_schemas();
        assert_eq!(schemas.len(), 7);
        for (name, schema) in schemas {
            schema
                .validate_document()
                .unwrap_or_else(|err| panic!("{name}: {err}"));
        }
    }

    #[test]
    fn ui_keys_are_entrypoints() {
        assert_eq!(ENTRYPOINTS_UI.keys().copied().collect::<Vec<_>>(), vec![
            "addSettlement",
            "getSettlement",
            "settledBalanceOf",
            "withdraw"
        ]);
        for key in ENTRYPOINTS_UI.keys() {
            assert!(ccd::contracts::offchain_transfers::ENTRYPOINTS.contains_key(key));
        }
    }

    #[test]
    fn init_form() {
        let (kind, title, blob) = init(&Recorder, &FormOptions::default()).unwrap();
        assert_eq!(kind, "init");
        assert_eq!(title, "Init Request");
        assert_eq!(blob, ccd::contracts::offchain_transfers::INIT_REQUEST_SCHEMA);
    }

    #[test]
    fn entrypoint_forms() {
        let ui = offchain_transfers_ui();
        let options = FormOptions::default();
        let (name, title, _) = ui.render("addSettlement", &Recorder, &options).unwrap();
        assert_eq!(name, "offchain-transfers.add-settlement");
        assert_eq!(title, "Add Settlement Request");

        let (name, title, blob) = ui.render("getSettlement", &Recorder, &options).unwrap();
        assert_eq!(name, "offchain-transfers.get-settlement");
        assert_eq!(title, "Get Settlement Response");
        assert_eq!(blob, ccd::contracts::offchain_transfers::GET_SETTLEMENT_RESPONSE_SCHEMA);

        assert_eq!(ui.entrypoint("withdraw").unwrap().kind, crate::FormKind::Update);
        assert_eq!(ui.entrypoint("settledBalanceOf").unwrap().kind, crate::FormKind::Invoke);
        assert_eq!(
            ui.render("veto", &Recorder, &options).unwrap_err(),
            UiError::UnknownEntrypoint(s!("veto"))
        );
    }

    #[test]
    fn bounds() {
        let init = &*INIT_REQUEST_JSON_SCHEMA;
        let limit = init.property("settlement_limit").unwrap();
        assert_eq!(limit["maximum"], json!(4294967295u64));
        let config = json!({
            "validator": "v",
            "judge": "j",
            "time_to_finality": "1h",
            "settlement_limit": 4294967295u64
        });
        assert_eq!(init.check(&config), Ok(()));
        let config = json!({ "settlement_limit": 4294967296u64 });
        assert!(init.check(&config).is_err());

        let request = &ENTRYPOINTS_UI["addSettlement"];
        let settlement = json!({
            "send_transfers": [{ "address": "a", "amount": "1" }],
            "receive_transfers": [],
            "meta_data": [0, 255]
        });
        assert_eq!(request.check_request(&settlement), Ok(()));
        let settlement = json!({ "meta_data": [256] });
        assert!(matches!(
            request.check_request(&settlement),
            Err(UiError::InvalidInput { title, .. }) if title == "Add Settlement Request"
        ));
    }
}
