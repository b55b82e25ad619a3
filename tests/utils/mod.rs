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

#![allow(dead_code)]

use amplify::hex::{FromHex, ToHex};
use amplify::{Display, Error};
use ccd::{Fields, SchemaBlob, SchemaCodec, SchemaError, SchemaType, SizeLength};
use serde_json::{json, Map, Value};

#[derive(Debug, Display, Error)]
#[display(doc_comments)]
pub enum FixtureError {
    /// schema: {0}
    Schema(SchemaError),

    /// fixture codec does not support {0}
    Unsupported(String),

    /// value does not match schema: {0}
    Mismatch(String),

    /// unexpected end of data
    UnexpectedEnd,

    /// {0} trailing bytes
    TrailingData(usize),
}

/// Minimal JSON codec covering the types used by the test vectors.
pub struct FixtureCodec;

impl SchemaCodec for FixtureCodec {
    type Value = Value;
    type Error = FixtureError;

    fn encode(&self, schema: &SchemaBlob, value: &Value) -> Result<Vec<u8>, FixtureError> {
        let ty = schema.parse().map_err(FixtureError::Schema)?;
        let mut buf = vec![];
        encode(&ty, value, &mut buf)?;
        Ok(buf)
    }

    fn decode(&self, schema: &SchemaBlob, data: &[u8]) -> Result<Value, FixtureError> {
        let ty = schema.parse().map_err(FixtureError::Schema)?;
        let mut cursor = data;
        let value = decode(&ty, &mut cursor)?;
        match cursor.len() {
            0 => Ok(value),
            rest => Err(FixtureError::TrailingData(rest)),
        }
    }
}

fn mismatch(ty: &SchemaType, value: &Value) -> FixtureError {
    FixtureError::Mismatch(format!("{value} is not {ty}"))
}

fn encode_len(size: SizeLength, len: usize, buf: &mut Vec<u8>) {
    let bytes = (len as u64).to_le_bytes();
    buf.extend_from_slice(&bytes[..size.byte_len()]);
}

fn encode_fields(fields: &Fields, value: &Value, buf: &mut Vec<u8>) -> Result<(), FixtureError> {
    match fields {
        Fields::Named(fields) => {
            for (name, ty) in fields {
                let field = value
                    .get(name)
                    .ok_or_else(|| FixtureError::Mismatch(format!("missing field {name}")))?;
                encode(ty, field, buf)?;
            }
        }
        Fields::Unnamed(fields) => {
            let items = value
                .as_array()
                .filter(|items| items.len() == fields.len())
                .ok_or_else(|| FixtureError::Mismatch(format!("{value} is not a tuple")))?;
            for (ty, item) in fields.iter().zip(items) {
                encode(ty, item, buf)?;
            }
        }
        Fields::None => {}
    }
    Ok(())
}

fn encode(ty: &SchemaType, value: &Value, buf: &mut Vec<u8>) -> Result<(), FixtureError> {
    let uint = || value.as_u64().ok_or_else(|| mismatch(ty, value));
    match ty {
        SchemaType::Unit => {}
        SchemaType::Bool => buf.push(value.as_bool().ok_or_else(|| mismatch(ty, value))? as u8),
        SchemaType::U8 => buf.push(uint()? as u8),
        SchemaType::U16 => buf.extend((uint()? as u16).to_le_bytes()),
        SchemaType::U32 => buf.extend((uint()? as u32).to_le_bytes()),
        SchemaType::U64 | SchemaType::Timestamp | SchemaType::Duration => {
            buf.extend(uint()?.to_le_bytes())
        }
        SchemaType::Amount => {
            let amount = value
                .as_str()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| mismatch(ty, value))?;
            buf.extend(amount.to_le_bytes());
        }
        SchemaType::AccountAddress => {
            let address = value
                .as_str()
                .and_then(|s| Vec::<u8>::from_hex(s).ok())
                .filter(|address| address.len() == 32)
                .ok_or_else(|| mismatch(ty, value))?;
            buf.extend(address);
        }
        SchemaType::List(size, item) => {
            let items = value.as_array().ok_or_else(|| mismatch(ty, value))?;
            encode_len(*size, items.len(), buf);
            for item_value in items {
                encode(item, item_value, buf)?;
            }
        }
        SchemaType::Struct(fields) => encode_fields(fields, value, buf)?,
        SchemaType::Enum(variants) => {
            let object = value
                .as_object()
                .filter(|object| object.len() == 1)
                .ok_or_else(|| mismatch(ty, value))?;
            let (name, inner) = object.iter().next().ok_or_else(|| mismatch(ty, value))?;
            let tag = variants
                .iter()
                .position(|(variant, _)| variant == name)
                .ok_or_else(|| FixtureError::Mismatch(format!("unknown variant {name}")))?;
            buf.push(tag as u8);
            encode_fields(&variants[tag].1, inner, buf)?;
        }
        other => return Err(FixtureError::Unsupported(other.to_string())),
    }
    Ok(())
}

fn take<'data>(cursor: &mut &'data [u8], len: usize) -> Result<&'data [u8], FixtureError> {
    if cursor.len() < len {
        return Err(FixtureError::UnexpectedEnd);
    }
    let (head, tail) = cursor.split_at(len);
    *cursor = tail;
    Ok(head)
}

fn take_uint(cursor: &mut &[u8], len: usize) -> Result<u64, FixtureError> {
    let mut bytes = [0u8; 8];
    bytes[..len].copy_from_slice(take(cursor, len)?);
    Ok(u64::from_le_bytes(bytes))
}

fn decode_fields(fields: &Fields, cursor: &mut &[u8]) -> Result<Value, FixtureError> {
    Ok(match fields {
        Fields::Named(fields) => {
            let mut object = Map::new();
            for (name, ty) in fields {
                object.insert(name.clone(), decode(ty, cursor)?);
            }
            Value::Object(object)
        }
        Fields::Unnamed(fields) => Value::Array(
            fields
                .iter()
                .map(|ty| decode(ty, cursor))
                .collect::<Result<_, _>>()?,
        ),
        Fields::None => Value::Array(vec![]),
    })
}

fn decode(ty: &SchemaType, cursor: &mut &[u8]) -> Result<Value, FixtureError> {
    Ok(match ty {
        SchemaType::Unit => Value::Null,
        SchemaType::Bool => match take_uint(cursor, 1)? {
            0 => json!(false),
            1 => json!(true),
            other => return Err(FixtureError::Mismatch(format!("invalid bool byte {other}"))),
        },
        SchemaType::U8 => json!(take_uint(cursor, 1)?),
        SchemaType::U16 => json!(take_uint(cursor, 2)?),
        SchemaType::U32 => json!(take_uint(cursor, 4)?),
        SchemaType::U64 | SchemaType::Timestamp | SchemaType::Duration => {
            json!(take_uint(cursor, 8)?)
        }
        SchemaType::Amount => json!(take_uint(cursor, 8)?.to_string()),
        SchemaType::List(size, item) => {
            let len = take_uint(cursor, size.byte_len())?;
            let mut items = vec![];
            for _ in 0..len {
                items.push(decode(item, cursor)?);
            }
            Value::Array(items)
        }
        SchemaType::Struct(fields) => decode_fields(fields, cursor)?,
        SchemaType::AccountAddress => json!(hex(take(cursor, 32)?)),
        SchemaType::ContractAddress => {
            json!({ "index": take_uint(cursor, 8)?, "subindex": take_uint(cursor, 8)? })
        }
        SchemaType::ByteList(size) => {
            let len = take_uint(cursor, size.byte_len())? as usize;
            json!(hex(take(cursor, len)?))
        }
        SchemaType::ULeb128(max_bytes) => {
            let mut value = 0u128;
            for no in 0..*max_bytes {
                let byte = take_uint(cursor, 1)? as u128;
                value |= (byte & 0x7f).checked_shl(7 * no).unwrap_or_default();
                if byte & 0x80 == 0 {
                    break;
                }
            }
            json!(value.to_string())
        }
        SchemaType::TaggedEnum(variants) => {
            let tag = take_uint(cursor, 1)? as u8;
            let (name, fields) = variants
                .get(&tag)
                .ok_or_else(|| FixtureError::Mismatch(format!("unknown variant tag {tag}")))?;
            let mut object = Map::new();
            object.insert(name.clone(), decode_fields(fields, cursor)?);
            Value::Object(object)
        }
        SchemaType::Enum(variants) => {
            let tag = take_uint(cursor, 1)? as usize;
            let (name, fields) = variants
                .get(tag)
                .ok_or_else(|| FixtureError::Mismatch(format!("unknown variant tag {tag}")))?;
            let mut object = Map::new();
            object.insert(name.clone(), decode_fields(fields, cursor)?);
            Value::Object(object)
        }
        other => return Err(FixtureError::Unsupported(other.to_string())),
    })
}

pub fn hex(data: &[u8]) -> String { data.to_hex() }
