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

//! Schema blobs shipped with contract bindings and the type descriptors they
//! carry.
//!
//! A schema blob is the base64 form of a binary type descriptor. Bindings
//! pass blobs around unchanged; [`SchemaBlob::parse`] exposes the descriptor
//! for inspection.

mod blob;
mod ty;

pub use blob::SchemaBlob;
pub use ty::{Fields, SchemaType, SizeLength, MAX_TYPE_DEPTH};

#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum SchemaError {
    /// schema blob has invalid Base64 encoding. Details: {0}
    #[from]
    Base64(base64::DecodeError),

    /// schema data ends unexpectedly at byte offset {0}.
    UnexpectedEnd(usize),

    /// unknown type tag {tag} at byte offset {offset}.
    UnknownTypeTag { tag: u8, offset: usize },

    /// unknown size length tag {tag} at byte offset {offset}.
    UnknownSizeLength { tag: u8, offset: usize },

    /// unknown fields tag {tag} at byte offset {offset}.
    UnknownFieldsTag { tag: u8, offset: usize },

    /// tagged enum repeats variant tag {tag} at byte offset {offset}.
    RepeatedTag { tag: u8, offset: usize },

    /// string starting at byte offset {0} is not a valid UTF-8.
    InvalidUtf8(usize),

    /// schema data contains {0} trailing bytes after the type descriptor.
    TrailingData(usize),

    /// type descriptor is nested deeper than {0} levels.
    TooDeep(usize),
}
