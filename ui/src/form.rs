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

//! Form descriptions handed over to a UI toolkit.

use ccd::{InitMethod, ReceiveMethod, SchemaBlob};
use indexmap::IndexMap;
use serde_json::Value;

use crate::UiSchema;

/// Presentation options forwarded unchanged to the renderer.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormOptions {
    /// Toolkit-specific layout hints.
    pub ui_schema: Option<Value>,
    /// Custom widgets by field name.
    pub ui_widgets: IndexMap<String, String>,
}

/// Form instantiating a contract.
#[derive(Copy, Clone, Debug)]
pub struct InitForm<'a> {
    pub method: &'a InitMethod,
    pub request_json_schema: &'a UiSchema,
    pub request_schema: &'a SchemaBlob,
    pub options: &'a FormOptions,
}

/// Form of an entrypoint updating contract state.
#[derive(Copy, Clone, Debug)]
pub struct UpdateForm<'a> {
    pub method: &'a ReceiveMethod,
    pub request_json_schema: &'a UiSchema,
    pub request_schema: &'a SchemaBlob,
    pub options: &'a FormOptions,
}

/// Form of an entrypoint queried without a transaction, showing its result.
#[derive(Copy, Clone, Debug)]
pub struct InvokeForm<'a> {
    pub method: &'a ReceiveMethod,
    pub request_json_schema: Option<&'a UiSchema>,
    pub request_schema: Option<&'a SchemaBlob>,
    pub response_json_schema: &'a UiSchema,
    pub response_schema: &'a SchemaBlob,
    pub options: &'a FormOptions,
}

/// UI toolkit constructing forms out of their descriptions.
pub trait FormRenderer {
    type Output;

    fn init_form(&self, form: InitForm) -> Self::Output;

    fn update_form(&self, form: UpdateForm) -> Self::Output;

    fn invoke_form(&self, form: InvokeForm) -> Self::Output;
}
