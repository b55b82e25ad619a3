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

use ccd::{ContractBindings, ReceiveMethod};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{FormOptions, FormRenderer, InitForm, InvokeForm, UiError, UiSchema, UpdateForm};

/// How the form of an entrypoint is submitted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display)]
#[display(lowercase)]
pub enum FormKind {
    /// Sent as a transaction which updates contract state.
    Update,
    /// Executed without a transaction; the returned value is shown.
    Invoke,
}

/// UI binding of a single entrypoint: its method and the JSON schemas of its
/// request and response.
#[derive(Clone, Debug)]
pub struct UiEntrypoint {
    pub method: &'static ReceiveMethod,
    pub kind: FormKind,
    pub request_json_schema: Option<&'static UiSchema>,
    pub response_json_schema: Option<&'static UiSchema>,
}

impl UiEntrypoint {
    pub fn update(method: &'static ReceiveMethod, request: &'static UiSchema) -> Self {
        UiEntrypoint {
            method,
            kind: FormKind::Update,
            request_json_schema: Some(request),
            response_json_schema: None,
        }
    }

    pub fn invoke(
        method: &'static ReceiveMethod,
        request: Option<&'static UiSchema>,
        response: &'static UiSchema,
    ) -> Self {
        UiEntrypoint {
            method,
            kind: FormKind::Invoke,
            request_json_schema: request,
            response_json_schema: Some(response),
        }
    }

    /// Validates user input against the request JSON schema.
    pub fn check_request(&self, value: &Value) -> Result<(), UiError> {
        match self.request_json_schema {
            Some(schema) => schema.check(value),
            None => Ok(()),
        }
    }

    /// Builds the entrypoint form with the renderer.
    pub fn render<R: FormRenderer>(
        &self,
        renderer: &R,
        options: &FormOptions,
    ) -> Result<R::Output, UiError> {
        let method = self.method;
        let missing = |what| UiError::MissingBlob(method.receive_name(), what);
        match self.kind {
            FormKind::Update => {
                let request_json_schema =
                    self.request_json_schema.ok_or_else(|| missing("request JSON"))?;
                let request_schema =
                    method.request_schema.as_ref().ok_or_else(|| missing("request"))?;
                Ok(renderer.update_form(UpdateForm {
                    method,
                    request_json_schema,
                    request_schema,
                    options,
                }))
            }
            FormKind::Invoke => {
                let response_json_schema =
                    self.response_json_schema.ok_or_else(|| missing("response JSON"))?;
                let response_schema =
                    method.response_schema.as_ref().ok_or_else(|| missing("response"))?;
                Ok(renderer.invoke_form(InvokeForm {
                    method,
                    request_json_schema: self.request_json_schema,
                    request_schema: method.request_schema.as_ref(),
                    response_json_schema,
                    response_schema,
                    options,
                }))
            }
        }
    }
}

/// UI bindings of a contract: the init form and the forms of entrypoints
/// which have a user interface.
#[derive(Clone, Debug)]
pub struct ContractUi {
    pub bindings: &'static ContractBindings,
    pub init_request_json_schema: &'static UiSchema,
    pub entrypoints: &'static IndexMap<&'static str, UiEntrypoint>,
}

impl ContractUi {
    /// Builds the form instantiating the contract.
    pub fn init<R: FormRenderer>(
        &self,
        renderer: &R,
        options: &FormOptions,
    ) -> Result<R::Output, UiError> {
        let method = self.bindings.init();
        let request_schema = method
            .request_schema
            .as_ref()
            .ok_or_else(|| UiError::MissingBlob(method.init_name(), "request"))?;
        Ok(renderer.init_form(InitForm {
            method,
            request_json_schema: self.init_request_json_schema,
            request_schema,
            options,
        }))
    }

    pub fn entrypoint(&self, key: &str) -> Result<&UiEntrypoint, UiError> {
        self.entrypoints
            .get(key)
            .ok_or_else(|| UiError::UnknownEntrypoint(key.to_owned()))
    }

    /// Builds the form of the entrypoint with the given key.
    pub fn render<R: FormRenderer>(
        &self,
        key: &str,
        renderer: &R,
        options: &FormOptions,
    ) -> Result<R::Output, UiError> {
        let entrypoint = self.entrypoint(key)?;
        debug!(
            contract = %self.bindings.contract_name(),
            key,
            kind = %entrypoint.kind,
            "rendering entrypoint form"
        );
        entrypoint.render(renderer, options)
    }

    /// All JSON schemas of the contract UI, named by what they describe.
    pub fn json_schemas(&self) -> Vec<(String, &'static UiSchema)> {
        let mut schemas = vec![(s!("init.request"), self.init_request_json_schema)];
        for (key, entrypoint) in self.entrypoints {
            if let Some(schema) = entrypoint.request_json_schema {
                schemas.push((format!("{key}.request"), schema));
            }
            if let Some(schema) = entrypoint.response_json_schema {
                schemas.push((format!("{key}.response"), schema));
            }
        }
        schemas
    }
}
