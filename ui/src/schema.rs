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

use serde_json::{Map, Value};

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum UiError {
    /// UI schema '{0}' is not a valid JSON-Schema document. Details: {1}
    InvalidDocument(String, String),

    /// UI schema '{0}' must be a JSON object with a `type` keyword.
    NotASchema(String),

    /// value does not match UI schema '{title}': {details}
    InvalidInput { title: String, details: String },

    /// entrypoint {0} has no {1} schema blob required by its form.
    MissingBlob(String, &'static str),

    /// contract has no UI for entrypoint '{0}'.
    UnknownEntrypoint(String),
}

/// JSON-Schema document describing how a value is presented and entered in a
/// user interface.
#[derive(Clone, PartialEq, Debug)]
pub struct UiSchema(Value);

impl UiSchema {
    pub fn new(document: Value) -> Self { UiSchema(document) }

    pub fn as_json(&self) -> &Value { &self.0 }

    pub fn title(&self) -> &str { self.0.get("title").and_then(Value::as_str).unwrap_or_default() }

    pub fn schema_type(&self) -> Option<&str> { self.0.get("type").and_then(Value::as_str) }

    pub fn properties(&self) -> Option<&Map<String, Value>> {
        self.0.get("properties").and_then(Value::as_object)
    }

    pub fn property(&self, name: &str) -> Option<&Value> { self.properties()?.get(name) }

    /// Checks that the document is a JSON-Schema which can be compiled.
    pub fn validate_document(&self) -> Result<(), UiError> {
        if self.schema_type().is_none() {
            return Err(UiError::NotASchema(self.title().to_owned()));
        }
        jsonschema::validator_for(&self.0)
            .map(|_| ())
            .map_err(|err| UiError::InvalidDocument(self.title().to_owned(), err.to_string()))
    }

    /// Validates a value entered by a user against the schema.
    pub fn check(&self, instance: &Value) -> Result<(), UiError> {
        let validator = jsonschema::validator_for(&self.0)
            .map_err(|err| UiError::InvalidDocument(self.title().to_owned(), err.to_string()))?;
        let details = validator
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        if details.is_empty() {
            return Ok(());
        }
        let details = details.join("; ");
        warn!(schema = self.title(), %details, "user input rejected");
        Err(UiError::InvalidInput {
            title: self.title().to_owned(),
            details,
        })
    }
}

impl From<Value> for UiSchema {
    fn from(document: Value) -> Self { UiSchema(document) }
}
