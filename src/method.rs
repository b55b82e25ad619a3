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

use crate::{
    BindingError, ContractName, EntrypointName, ModuleRef, SchemaBlob, SchemaCodec, SchemaKind,
};

/// Binding of a contract init function: everything an engine needs to
/// instantiate the contract from a deployed module.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
pub struct InitMethod {
    /// Module the contract is deployed with, if it is known to the bindings.
    pub module_ref: Option<ModuleRef>,
    pub contract_name: ContractName,
    pub request_schema: Option<SchemaBlob>,
}

impl InitMethod {
    pub fn new(
        module_ref: Option<ModuleRef>,
        contract_name: ContractName,
        request_schema: Option<SchemaBlob>,
    ) -> Self {
        InitMethod {
            module_ref,
            contract_name,
            request_schema,
        }
    }

    pub fn init_name(&self) -> String { self.contract_name.init_name() }

    /// Serializes init parameter with the init request schema.
    pub fn encode_request<C: SchemaCodec>(
        &self,
        codec: &C,
        value: &C::Value,
    ) -> Result<Vec<u8>, BindingError<C::Error>> {
        let schema = self
            .request_schema
            .as_ref()
            .ok_or_else(|| BindingError::NoSchema {
                method: self.init_name(),
                kind: SchemaKind::Request,
            })?;
        codec.encode(schema, value).map_err(BindingError::Codec)
    }
}

/// Binding of a contract receive function (entrypoint) with its schemas.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ReceiveMethod {
    pub contract_name: ContractName,
    pub entrypoint: EntrypointName,
    pub request_schema: Option<SchemaBlob>,
    pub response_schema: Option<SchemaBlob>,
    pub error_schema: Option<SchemaBlob>,
}

impl ReceiveMethod {
    pub fn new(contract_name: ContractName, entrypoint: EntrypointName) -> Self {
        ReceiveMethod {
            contract_name,
            entrypoint,
            request_schema: None,
            response_schema: None,
            error_schema: None,
        }
    }

    pub fn with_request(mut self, schema: SchemaBlob) -> Self {
        self.request_schema = Some(schema);
        self
    }

    pub fn with_response(mut self, schema: SchemaBlob) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_error(mut self, schema: SchemaBlob) -> Self {
        self.error_schema = Some(schema);
        self
    }

    /// Fully qualified name of the receive function, `<contract>.<entrypoint>`.
    pub fn receive_name(&self) -> String { format!("{}.{}", self.contract_name, self.entrypoint) }

    pub fn schema(&self, kind: SchemaKind) -> Option<&SchemaBlob> {
        match kind {
            SchemaKind::Request => self.request_schema.as_ref(),
            SchemaKind::Response => self.response_schema.as_ref(),
            SchemaKind::Error => self.error_schema.as_ref(),
        }
    }

    fn require<E: std::error::Error>(
        &self,
        kind: SchemaKind,
    ) -> Result<&SchemaBlob, BindingError<E>> {
        self.schema(kind).ok_or_else(|| BindingError::NoSchema {
            method: self.receive_name(),
            kind,
        })
    }

    /// Serializes call parameter with the request schema.
    pub fn encode_request<C: SchemaCodec>(
        &self,
        codec: &C,
        value: &C::Value,
    ) -> Result<Vec<u8>, BindingError<C::Error>> {
        let schema = self.require(SchemaKind::Request)?;
        codec.encode(schema, value).map_err(BindingError::Codec)
    }

    /// Decodes value returned by the entrypoint with the response schema.
    pub fn decode_response<C: SchemaCodec>(
        &self,
        codec: &C,
        data: &[u8],
    ) -> Result<C::Value, BindingError<C::Error>> {
        let schema = self.require(SchemaKind::Response)?;
        codec.decode(schema, data).map_err(BindingError::Codec)
    }

    /// Decodes error value returned by a failed call with the error schema.
    pub fn decode_error<C: SchemaCodec>(
        &self,
        codec: &C,
        data: &[u8],
    ) -> Result<C::Value, BindingError<C::Error>> {
        let schema = self.require(SchemaKind::Error)?;
        codec.decode(schema, data).map_err(BindingError::Codec)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Display, Error)]
    #[display("unsupported")]
    struct Unsupported;

    /// Codec echoing the schema it was called with.
    struct EchoCodec;

    impl SchemaCodec for EchoCodec {
        type Value = String;
        type Error = Unsupported;

        fn encode(&self, schema: &SchemaBlob, value: &String) -> Result<Vec<u8>, Unsupported> {
            if value.is_empty() {
                return Err(Unsupported);
            }
            Ok(format!("{schema}:{value}").into_bytes())
        }

        fn decode(&self, schema: &SchemaBlob, data: &[u8]) -> Result<String, Unsupported> {
            Ok(format!("{schema}:{}", data.len()))
        }
    }

    fn operator_of() -> ReceiveMethod {
        ReceiveMethod::new(cname!("cis2_multi_royalties"), ename!("operatorOf"))
            .with_request(SchemaBlob::from_static("REQ"))
            .with_response(SchemaBlob::from_static("EAEB"))
    }

    #[test]
    fn names() {
        let method = operator_of();
        assert_eq!(method.receive_name(), "cis2_multi_royalties.operatorOf");
        let init = InitMethod::new(None, cname!("offchain-transfers"), None);
        assert_eq!(init.init_name(), "init_offchain-transfers");
    }

    #[test]
    fn schemas_by_kind() {
        let method = operator_of();
        assert_eq!(method.schema(SchemaKind::Request).unwrap().as_base64(), "REQ");
        assert_eq!(method.schema(SchemaKind::Response).unwrap().as_base64(), "EAEB");
        assert_eq!(method.schema(SchemaKind::Error), None);
    }

    #[test]
    fn forwarding() {
        let method = operator_of();
        assert_eq!(method.encode_request(&EchoCodec, &s!("x")).unwrap(), b"REQ:x".to_vec());
        assert_eq!(method.decode_response(&EchoCodec, &[1, 0, 1]).unwrap(), "EAEB:3");
        assert!(matches!(
            method.encode_request(&EchoCodec, &s!("")),
            Err(BindingError::Codec(Unsupported))
        ));
        let err = method.decode_error(&EchoCodec, &[]).unwrap_err();
        assert!(err
            .to_string()
            .contains("cis2_multi_royalties.operatorOf has no error schema"));
    }

    #[test]
    fn init_without_schema() {
        let init = InitMethod::new(None, cname!("offchain-transfers"), None);
        assert!(matches!(
            init.encode_request(&EchoCodec, &s!("x")),
            Err(BindingError::NoSchema {
                kind: SchemaKind::Request,
                ..
            })
        ));
    }
}
