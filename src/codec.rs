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

use std::error::Error as StdError;

use crate::{ContractName, SchemaBlob};

/// Kind of a schema attached to a contract function.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(lowercase)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum SchemaKind {
    Request,
    Response,
    Error,
}

/// unknown schema kind '{0}'.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub struct UnknownSchemaKind(pub String);

impl std::str::FromStr for SchemaKind {
    type Err = UnknownSchemaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "request" | "req" | "parameter" => Ok(SchemaKind::Request),
            "response" | "resp" | "return" => Ok(SchemaKind::Response),
            "error" | "err" => Ok(SchemaKind::Error),
            other => Err(UnknownSchemaKind(other.to_owned())),
        }
    }
}

/// Codec converting between values and their binary representation according
/// to a schema blob.
///
/// The bindings never interpret values themselves: implementations are
/// supplied by the contract-interaction engine using the bindings.
pub trait SchemaCodec {
    /// Structured representation of values (for instance, a JSON value).
    type Value;
    type Error: StdError;

    fn encode(&self, schema: &SchemaBlob, value: &Self::Value) -> Result<Vec<u8>, Self::Error>;

    fn decode(&self, schema: &SchemaBlob, data: &[u8]) -> Result<Self::Value, Self::Error>;
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum BindingError<E: StdError> {
    /// {method} has no {kind} schema.
    NoSchema { method: String, kind: SchemaKind },

    /// contract {0} does not define an event schema.
    NoEventSchema(ContractName),

    /// schema codec failure. Details: {0}
    Codec(E),
}
