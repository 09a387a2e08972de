//! Single-pass deterministic CBOR decoding.
//!
//! Grounded in the teacher's `decode_cbor_internal`: one function decodes a
//! single item and reports how many bytes it consumed, and the top-level
//! entry point loops that function over the whole buffer.

use half::f16;

use crate::error::Error;
use super::value::CborValue;
use super::varint::MajorType;

/// Decodes every CBOR item in `data`, in order, failing on the first
/// malformed item or on trailing bytes that don't form a complete item.
pub fn decode_all(data: &[u8]) -> Result<Vec<CborValue>, Error> {
    let mut items = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let (value, consumed) = decode_one(&data[offset..])?;
        items.push(value);
        offset += consumed;
    }
    Ok(items)
}

/// Decodes exactly one CBOR item from the front of `data`.
pub fn decode(data: &[u8]) -> Result<CborValue, Error> {
    let (value, consumed) = decode_one(data)?;
    if consumed != data.len() {
        return Err(Error::CborDecodingFailed);
    }
    Ok(value)
}

fn decode_one(data: &[u8]) -> Result<(CborValue, usize), Error> {
    let header = *data.first().ok_or(Error::CborDecodingFailed)?;
    let major_type = MajorType::from_top_bits(header >> 5);
    let info = header & 0x1f;

    match major_type {
        MajorType::Unsigned => {
            let (n, consumed) = parse_varint(data, info)?;
            Ok((CborValue::Unsigned(n), consumed))
        }
        MajorType::Negative => {
            let (n, consumed) = parse_varint(data, info)?;
            Ok((CborValue::Negative(n), consumed))
        }
        MajorType::Bytes => {
            let (len, header_len) = parse_varint(data, info)?;
            let (bytes, total) = take_bytes(data, header_len, len)?;
            Ok((CborValue::ByteString(bytes.to_vec()), total))
        }
        MajorType::Text => {
            let (len, header_len) = parse_varint(data, info)?;
            let (bytes, total) = take_bytes(data, header_len, len)?;
            let text = std::str::from_utf8(bytes)
                .map_err(|_| Error::CborDecodingFailed)?
                .to_string();
            Ok((CborValue::Text(text), total))
        }
        MajorType::Array => {
            let (len, mut offset) = parse_varint(data, info)?;
            let mut items = Vec::with_capacity(len as usize);
            for _ in 0..len {
                let (item, consumed) = decode_one(&data[offset..])?;
                items.push(item);
                offset += consumed;
            }
            Ok((CborValue::Array(items), offset))
        }
        MajorType::Map => {
            let (len, mut offset) = parse_varint(data, info)?;
            let mut entries = Vec::with_capacity(len as usize);
            for _ in 0..len {
                let (key, consumed) = decode_one(&data[offset..])?;
                offset += consumed;
                let (value, consumed) = decode_one(&data[offset..])?;
                offset += consumed;
                entries.push((key, value));
            }
            Ok((CborValue::Map(entries), offset))
        }
        MajorType::Tagged => {
            let (tag, header_len) = parse_varint(data, info)?;
            let (inner, consumed) = decode_one(&data[header_len..])?;
            Ok((CborValue::Tag(tag, Box::new(inner)), header_len + consumed))
        }
        MajorType::Simple => decode_simple(data, info),
    }
}

/// Parses the shortest-form argument following a header byte whose low five
/// bits are `info`. Rejects any encoding that isn't the minimal form for the
/// represented value, per the crate's strict canonical-integer posture.
fn parse_varint(data: &[u8], info: u8) -> Result<(u64, usize), Error> {
    match info {
        0..=23 => Ok((info as u64, 1)),
        24 => {
            let byte = *data.get(1).ok_or(Error::CborDecodingFailed)?;
            if byte < 24 {
                return Err(Error::CborDecodingFailed);
            }
            Ok((byte as u64, 2))
        }
        25 => {
            let bytes: [u8; 2] = data
                .get(1..3)
                .ok_or(Error::CborDecodingFailed)?
                .try_into()
                .unwrap();
            let value = u16::from_be_bytes(bytes);
            if value <= u8::MAX as u16 {
                return Err(Error::CborDecodingFailed);
            }
            Ok((value as u64, 3))
        }
        26 => {
            let bytes: [u8; 4] = data
                .get(1..5)
                .ok_or(Error::CborDecodingFailed)?
                .try_into()
                .unwrap();
            let value = u32::from_be_bytes(bytes);
            if value <= u16::MAX as u32 {
                return Err(Error::CborDecodingFailed);
            }
            Ok((value as u64, 5))
        }
        27 => {
            let bytes: [u8; 8] = data
                .get(1..9)
                .ok_or(Error::CborDecodingFailed)?
                .try_into()
                .unwrap();
            let value = u64::from_be_bytes(bytes);
            if value <= u32::MAX as u64 {
                return Err(Error::CborDecodingFailed);
            }
            Ok((value, 9))
        }
        _ => Err(Error::CborDecodingFailed),
    }
}

fn take_bytes(data: &[u8], header_len: usize, len: u64) -> Result<(&[u8], usize), Error> {
    let len = len as usize;
    let end = header_len.checked_add(len).ok_or(Error::CborDecodingFailed)?;
    let slice = data.get(header_len..end).ok_or(Error::CborDecodingFailed)?;
    Ok((slice, end))
}

fn decode_simple(data: &[u8], info: u8) -> Result<(CborValue, usize), Error> {
    match info {
        20 => Ok((CborValue::Bool(false), 1)),
        21 => Ok((CborValue::Bool(true), 1)),
        22 => Ok((CborValue::Null, 1)),
        25 => {
            let bytes: [u8; 2] = data
                .get(1..3)
                .ok_or(Error::CborDecodingFailed)?
                .try_into()
                .unwrap();
            Ok((CborValue::Float16(f16::from_be_bytes(bytes)), 3))
        }
        26 => {
            let bytes: [u8; 4] = data
                .get(1..5)
                .ok_or(Error::CborDecodingFailed)?
                .try_into()
                .unwrap();
            let value = f32::from_be_bytes(bytes);
            if value.is_nan() || value.is_infinite() {
                return Err(Error::CborDecodingFailed);
            }
            Ok((CborValue::Float32(value), 5))
        }
        27 => {
            let bytes: [u8; 8] = data
                .get(1..9)
                .ok_or(Error::CborDecodingFailed)?
                .try_into()
                .unwrap();
            let value = f64::from_be_bytes(bytes);
            if value.is_nan() || value.is_infinite() {
                return Err(Error::CborDecodingFailed);
            }
            Ok((CborValue::Float64(value), 9))
        }
        _ => Err(Error::CborDecodingFailed),
    }
}
