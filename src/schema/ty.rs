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

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use super::SchemaError;

/// Maximal nesting of type descriptors accepted by the parser.
pub const MAX_TYPE_DEPTH: usize = 64;

/// Width of the length prefix used by collections and strings.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[repr(u8)]
pub enum SizeLength {
    #[display("u8")]
    U8 = 0,
    #[display("u16")]
    U16 = 1,
    #[display("u32")]
    U32 = 2,
    #[display("u64")]
    U64 = 3,
}

impl SizeLength {
    /// Number of bytes taken by the length prefix.
    pub const fn byte_len(self) -> usize {
        match self {
            SizeLength::U8 => 1,
            SizeLength::U16 => 2,
            SizeLength::U32 => 4,
            SizeLength::U64 => 8,
        }
    }
}

impl TryFrom<u8> for SizeLength {
    type Error = u8;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Ok(match tag {
            0 => SizeLength::U8,
            1 => SizeLength::U16,
            2 => SizeLength::U32,
            3 => SizeLength::U64,
            wrong => return Err(wrong),
        })
    }
}

/// Fields of a struct or of an enum variant.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", tag = "fields", content = "value")
)]
pub enum Fields {
    Named(Vec<(String, SchemaType)>),
    Unnamed(Vec<SchemaType>),
    #[default]
    None,
}

impl Fields {
    pub fn len(&self) -> usize {
        match self {
            Fields::Named(fields) => fields.len(),
            Fields::Unnamed(fields) => fields.len(),
            Fields::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Names of the fields, in declaration order. Empty for unnamed fields.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Fields::Named(fields) => fields.iter().map(|(name, _)| name.as_str()).collect(),
            Fields::Unnamed(_) | Fields::None => vec![],
        }
    }

    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        match self {
            Fields::Named(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, ty)| ty),
            Fields::Unnamed(_) | Fields::None => None,
        }
    }
}

/// Type descriptor carried by a schema blob.
///
/// This is the structure of the schema itself; the values which are laid out
/// according to it are handled by a [`crate::SchemaCodec`].
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", tag = "type", content = "value")
)]
pub enum SchemaType {
    Unit,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    Amount,
    AccountAddress,
    ContractAddress,
    Timestamp,
    Duration,
    Pair(Box<SchemaType>, Box<SchemaType>),
    List(SizeLength, Box<SchemaType>),
    Set(SizeLength, Box<SchemaType>),
    Map(SizeLength, Box<SchemaType>, Box<SchemaType>),
    Array(u32, Box<SchemaType>),
    Struct(Fields),
    Enum(Vec<(String, Fields)>),
    TaggedEnum(BTreeMap<u8, (String, Fields)>),
    String(SizeLength),
    ContractName(SizeLength),
    ReceiveName(SizeLength),
    ULeb128(u32),
    ILeb128(u32),
    ByteList(SizeLength),
    ByteArray(u32),
}

impl SchemaType {
    /// Parses a type descriptor, requiring that the whole input is consumed.
    pub fn from_bytes(data: &[u8]) -> Result<Self, SchemaError> {
        let mut reader = SchemaReader::new(data);
        let ty = reader.read_type(0)?;
        match reader.remaining() {
            0 => Ok(ty),
            rest => Err(SchemaError::TrailingData(rest)),
        }
    }

    /// Fields of a struct type.
    pub fn fields(&self) -> Option<&Fields> {
        match self {
            SchemaType::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Field of a struct type with named fields.
    pub fn field(&self, name: &str) -> Option<&SchemaType> { self.fields()?.get(name) }

    /// Element type of a list, set or array.
    pub fn item(&self) -> Option<&SchemaType> {
        match self {
            SchemaType::List(_, item) | SchemaType::Set(_, item) | SchemaType::Array(_, item) => {
                Some(item)
            }
            _ => None,
        }
    }

    /// Names of the enum variants, in declaration (or tag) order.
    pub fn variant_names(&self) -> Vec<&str> {
        match self {
            SchemaType::Enum(variants) => variants.iter().map(|(name, _)| name.as_str()).collect(),
            SchemaType::TaggedEnum(variants) => {
                variants.values().map(|(name, _)| name.as_str()).collect()
            }
            _ => vec![],
        }
    }

    /// Fields of an enum variant with the given name.
    pub fn variant(&self, name: &str) -> Option<&Fields> {
        match self {
            SchemaType::Enum(variants) => {
                variants.iter().find(|(n, _)| n == name).map(|(_, f)| f)
            }
            SchemaType::TaggedEnum(variants) => {
                variants.values().find(|(n, _)| n == name).map(|(_, f)| f)
            }
            _ => None,
        }
    }

    /// Variant of a tagged enum with the given tag.
    pub fn tagged_variant(&self, tag: u8) -> Option<(&str, &Fields)> {
        match self {
            SchemaType::TaggedEnum(variants) => {
                variants.get(&tag).map(|(name, fields)| (name.as_str(), fields))
            }
            _ => None,
        }
    }
}

struct SchemaReader<'data> {
    data: &'data [u8],
    pos: usize,
}

impl<'data> SchemaReader<'data> {
    fn new(data: &'data [u8]) -> Self { SchemaReader { data, pos: 0 } }

    fn remaining(&self) -> usize { self.data.len() - self.pos }

    fn read_slice(&mut self, len: usize) -> Result<&'data [u8], SchemaError> {
        if self.remaining() < len {
            return Err(SchemaError::UnexpectedEnd(self.pos));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, SchemaError> { Ok(self.read_slice(1)?[0]) }

    fn read_u32(&mut self) -> Result<u32, SchemaError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.read_slice(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn read_string(&mut self) -> Result<String, SchemaError> {
        let offset = self.pos;
        let len = self.read_u32()? as usize;
        let bytes = self.read_slice(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SchemaError::InvalidUtf8(offset))
    }

    fn read_size_length(&mut self) -> Result<SizeLength, SchemaError> {
        let offset = self.pos;
        SizeLength::try_from(self.read_u8()?)
            .map_err(|tag| SchemaError::UnknownSizeLength { tag, offset })
    }

    fn read_boxed(&mut self, depth: usize) -> Result<Box<SchemaType>, SchemaError> {
        self.read_type(depth).map(Box::new)
    }

    fn read_fields(&mut self, depth: usize) -> Result<Fields, SchemaError> {
        let offset = self.pos;
        Ok(match self.read_u8()? {
            0 => {
                let count = self.read_u32()?;
                let mut fields = Vec::new();
                for _ in 0..count {
                    let name = self.read_string()?;
                    fields.push((name, self.read_type(depth)?));
                }
                Fields::Named(fields)
            }
            1 => {
                let count = self.read_u32()?;
                let mut fields = Vec::new();
                for _ in 0..count {
                    fields.push(self.read_type(depth)?);
                }
                Fields::Unnamed(fields)
            }
            2 => Fields::None,
            tag => return Err(SchemaError::UnknownFieldsTag { tag, offset }),
        })
    }

    fn read_type(&mut self, depth: usize) -> Result<SchemaType, SchemaError> {
        if depth >= MAX_TYPE_DEPTH {
            return Err(SchemaError::TooDeep(MAX_TYPE_DEPTH));
        }
        let depth = depth + 1;
        let offset = self.pos;
        Ok(match self.read_u8()? {
            0x00 => SchemaType::Unit,
            0x01 => SchemaType::Bool,
            0x02 => SchemaType::U8,
            0x03 => SchemaType::U16,
            0x04 => SchemaType::U32,
            0x05 => SchemaType::U64,
            0x06 => SchemaType::I8,
            0x07 => SchemaType::I16,
            0x08 => SchemaType::I32,
            0x09 => SchemaType::I64,
            0x0a => SchemaType::Amount,
            0x0b => SchemaType::AccountAddress,
            0x0c => SchemaType::ContractAddress,
            0x0d => SchemaType::Timestamp,
            0x0e => SchemaType::Duration,
            0x0f => SchemaType::Pair(self.read_boxed(depth)?, self.read_boxed(depth)?),
            0x10 => SchemaType::List(self.read_size_length()?, self.read_boxed(depth)?),
            0x11 => SchemaType::Set(self.read_size_length()?, self.read_boxed(depth)?),
            0x12 => SchemaType::Map(
                self.read_size_length()?,
                self.read_boxed(depth)?,
                self.read_boxed(depth)?,
            ),
            0x13 => SchemaType::Array(self.read_u32()?, self.read_boxed(depth)?),
            0x14 => SchemaType::Struct(self.read_fields(depth)?),
            0x15 => {
                let count = self.read_u32()?;
                let mut variants = Vec::new();
                for _ in 0..count {
                    let name = self.read_string()?;
                    variants.push((name, self.read_fields(depth)?));
                }
                SchemaType::Enum(variants)
            }
            0x16 => SchemaType::String(self.read_size_length()?),
            0x17 => SchemaType::U128,
            0x18 => SchemaType::I128,
            0x19 => SchemaType::ContractName(self.read_size_length()?),
            0x1a => SchemaType::ReceiveName(self.read_size_length()?),
            0x1b => SchemaType::ULeb128(self.read_u32()?),
            0x1c => SchemaType::ILeb128(self.read_u32()?),
            0x1d => SchemaType::ByteList(self.read_size_length()?),
            0x1e => SchemaType::ByteArray(self.read_u32()?),
            0x1f => {
                let count = self.read_u32()?;
                let mut variants = BTreeMap::new();
                for _ in 0..count {
                    let offset = self.pos;
                    let tag = self.read_u8()?;
                    let name = self.read_string()?;
                    if variants.insert(tag, (name, self.read_fields(depth)?)).is_some() {
                        return Err(SchemaError::RepeatedTag { tag, offset });
                    }
                }
                SchemaType::TaggedEnum(variants)
            }
            tag => return Err(SchemaError::UnknownTypeTag { tag, offset }),
        })
    }
}

impl Display for Fields {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Fields::Named(fields) => {
                f.write_str("{")?;
                for (no, (name, ty)) in fields.iter().enumerate() {
                    if no > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {ty}")?;
                }
                f.write_str("}")
            }
            Fields::Unnamed(fields) => {
                f.write_str("(")?;
                for (no, ty) in fields.iter().enumerate() {
                    if no > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
            Fields::None => Ok(()),
        }
    }
}

fn fmt_variant(f: &mut Formatter<'_>, name: &str, fields: &Fields) -> fmt::Result {
    match fields {
        Fields::Named(_) => write!(f, "{name} {fields}"),
        Fields::Unnamed(_) | Fields::None => write!(f, "{name}{fields}"),
    }
}

impl Display for SchemaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Unit => f.write_str("()"),
            SchemaType::Bool => f.write_str("bool"),
            SchemaType::U8 => f.write_str("u8"),
            SchemaType::U16 => f.write_str("u16"),
            SchemaType::U32 => f.write_str("u32"),
            SchemaType::U64 => f.write_str("u64"),
            SchemaType::U128 => f.write_str("u128"),
            SchemaType::I8 => f.write_str("i8"),
            SchemaType::I16 => f.write_str("i16"),
            SchemaType::I32 => f.write_str("i32"),
            SchemaType::I64 => f.write_str("i64"),
            SchemaType::I128 => f.write_str("i128"),
            SchemaType::Amount => f.write_str("Amount"),
            SchemaType::AccountAddress => f.write_str("AccountAddress"),
            SchemaType::ContractAddress => f.write_str("ContractAddress"),
            SchemaType::Timestamp => f.write_str("Timestamp"),
            SchemaType::Duration => f.write_str("Duration"),
            SchemaType::Pair(a, b) => write!(f, "({a}, {b})"),
            SchemaType::List(len, item) => write!(f, "List<{len}, {item}>"),
            SchemaType::Set(len, item) => write!(f, "Set<{len}, {item}>"),
            SchemaType::Map(len, key, value) => write!(f, "Map<{len}, {key}, {value}>"),
            SchemaType::Array(len, item) => write!(f, "[{item}; {len}]"),
            SchemaType::Struct(Fields::None) => f.write_str("{}"),
            SchemaType::Struct(fields) => write!(f, "{fields}"),
            SchemaType::Enum(variants) => {
                f.write_str("enum { ")?;
                for (no, (name, fields)) in variants.iter().enumerate() {
                    if no > 0 {
                        f.write_str(", ")?;
                    }
                    fmt_variant(f, name, fields)?;
                }
                f.write_str(" }")
            }
            SchemaType::TaggedEnum(variants) => {
                f.write_str("enum { ")?;
                for (no, (tag, (name, fields))) in variants.iter().enumerate() {
                    if no > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{tag} => ")?;
                    fmt_variant(f, name, fields)?;
                }
                f.write_str(" }")
            }
            SchemaType::String(len) => write!(f, "String<{len}>"),
            SchemaType::ContractName(len) => write!(f, "ContractName<{len}>"),
            SchemaType::ReceiveName(len) => write!(f, "ReceiveName<{len}>"),
            SchemaType::ULeb128(max) => write!(f, "ULeb128<{max}>"),
            SchemaType::ILeb128(max) => write!(f, "ILeb128<{max}>"),
            SchemaType::ByteList(len) => write!(f, "ByteList<{len}>"),
            SchemaType::ByteArray(len) => write!(f, "ByteArray<{len}>"),
        }
    }
}
