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

use std::borrow::Cow;

use base64::Engine;

use super::{SchemaError, SchemaType};

/// Base64-encoded binary schema, treated as an opaque string by the bindings.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(inner)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SchemaBlob(Cow<'static, str>);

impl SchemaBlob {
    pub const fn from_static(base64: &'static str) -> Self { SchemaBlob(Cow::Borrowed(base64)) }

    pub fn as_base64(&self) -> &str { &self.0 }

    /// Decodes the base64 armoring, returning the binary schema.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SchemaError> {
        let engine = base64::engine::general_purpose::STANDARD;
        engine.decode(self.0.as_bytes()).map_err(SchemaError::from)
    }

    /// Parses the type descriptor contained in the blob.
    pub fn parse(&self) -> Result<SchemaType, SchemaError> {
        let data = self.to_bytes()?;
        SchemaType::from_bytes(&data).inspect_err(|err| {
            debug!(blob = %self.0, %err, "unable to parse schema blob");
        })
    }
}

impl From<String> for SchemaBlob {
    fn from(base64: String) -> Self { SchemaBlob(Cow::Owned(base64)) }
}

impl From<&'static str> for SchemaBlob {
    fn from(base64: &'static str) -> Self { SchemaBlob::from_static(base64) }
}

impl From<&[u8]> for SchemaBlob {
    fn from(data: &[u8]) -> Self {
        let engine = base64::engine::general_purpose::STANDARD;
        SchemaBlob(Cow::Owned(engine.encode(data)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::SizeLength;

    #[test]
    fn opaque_roundtrip() {
        let blob = SchemaBlob::from_static("EAEB");
        assert_eq!(blob.as_base64(), "EAEB");
        assert_eq!(blob.to_string(), "EAEB");
        assert_eq!(blob.to_bytes().unwrap(), vec![0x10, 0x01, 0x01]);
        assert_eq!(SchemaBlob::from(&[0x10u8, 0x01, 0x01][..]), blob);
    }

    #[test]
    fn parse() {
        let blob = SchemaBlob::from_static("EAEB");
        assert_eq!(
            blob.parse().unwrap(),
            SchemaType::List(SizeLength::U16, Box::new(SchemaType::Bool))
        );
    }

    #[test]
    fn invalid_base64() {
        let blob = SchemaBlob::from(s!("not base64!"));
        assert!(matches!(blob.to_bytes(), Err(SchemaError::Base64(_))));
        assert!(matches!(blob.parse(), Err(SchemaError::Base64(_))));
    }

    #[test]
    fn invalid_descriptor() {
        // Valid base64 of a single unknown tag byte
        let blob = SchemaBlob::from_static("IA==");
        assert_eq!(blob.parse(), Err(SchemaError::UnknownTypeTag { tag: 0x20, offset: 0 }));
    }
}
