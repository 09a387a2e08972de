//! Deterministic CBOR encoding.
//!
//! Per spec §4.1, the encoder never reorders a `Map`'s entries — ordering
//! the keys is the serializer's job (§4.5, §6: "Map keys emitted in
//! lexicographic UTF-8 byte order"). This module only renders whatever
//! `CborValue` it is given, in shortest-form, definite-length bytes.

use super::value::CborValue;
use super::varint::{encode_varint, MajorType};

/// Appends the deterministic CBOR encoding of `value` onto `buf`.
pub fn append_cbor(value: &CborValue, buf: &mut Vec<u8>) {
    match value {
        CborValue::Unsigned(n) => buf.extend(encode_varint(*n, MajorType::Unsigned)),
        CborValue::Negative(n) => buf.extend(encode_varint(*n, MajorType::Negative)),
        CborValue::ByteString(bytes) => {
            buf.extend(encode_varint(bytes.len() as u64, MajorType::Bytes));
            buf.extend_from_slice(bytes);
        }
        CborValue::Text(text) => {
            let bytes = text.as_bytes();
            buf.extend(encode_varint(bytes.len() as u64, MajorType::Text));
            buf.extend_from_slice(bytes);
        }
        CborValue::Array(items) => {
            buf.extend(encode_varint(items.len() as u64, MajorType::Array));
            for item in items {
                append_cbor(item, buf);
            }
        }
        CborValue::Map(entries) => {
            buf.extend(encode_varint(entries.len() as u64, MajorType::Map));
            for (key, value) in entries {
                append_cbor(key, buf);
                append_cbor(value, buf);
            }
        }
        CborValue::Tag(tag, inner) => {
            buf.extend(encode_varint(*tag, MajorType::Tagged));
            append_cbor(inner, buf);
        }
        CborValue::Bool(false) => buf.push(0xf4),
        CborValue::Bool(true) => buf.push(0xf5),
        CborValue::Null => buf.push(0xf6),
        CborValue::Float16(f) => {
            buf.push(0xf9);
            buf.extend_from_slice(&f.to_be_bytes());
        }
        CborValue::Float32(f) => {
            buf.push(0xfa);
            buf.extend_from_slice(&f.to_be_bytes());
        }
        CborValue::Float64(f) => {
            buf.push(0xfb);
            buf.extend_from_slice(&f.to_be_bytes());
        }
    }
}

/// Encodes a single top-level CBOR item.
pub fn encode(value: &CborValue) -> Vec<u8> {
    let mut buf = Vec::new();
    append_cbor(value, &mut buf);
    buf
}
