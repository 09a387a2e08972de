//! The CBOR value model: a minimal AST over the major types this codec
//! speaks, per spec §4.1.

use half::f16;

/// A parsed or to-be-encoded CBOR item.
///
/// `Map` is an ordered list of key/value pairs rather than a `BTreeMap`:
/// insertion order is irrelevant to the data model (§3, "Metadata map"), but
/// the decoder must preserve whatever order the wire bytes presented so that
/// callers can inspect exactly what was sent. The serializer (§4.5) is the
/// only place order is imposed, and it does so explicitly at encode time.
#[derive(Debug, Clone)]
pub enum CborValue {
    Unsigned(u64),
    /// Major type 1. The represented value is `-1 - n`.
    Negative(u64),
    ByteString(Vec<u8>),
    Text(String),
    Array(Vec<CborValue>),
    Map(Vec<(CborValue, CborValue)>),
    Tag(u64, Box<CborValue>),
    Bool(bool),
    Null,
    Float16(f16),
    Float32(f32),
    Float64(f64),
}

impl CborValue {
    pub fn text(s: impl Into<String>) -> CborValue {
        CborValue::Text(s.into())
    }

    pub fn bytes(b: impl Into<Vec<u8>>) -> CborValue {
        CborValue::ByteString(b.into())
    }

    pub fn map(entries: Vec<(CborValue, CborValue)>) -> CborValue {
        CborValue::Map(entries)
    }

    /// Borrows the text value, if this is `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CborValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrows the byte-string value, if this is `ByteString`.
    pub fn as_byte_string(&self) -> Option<&[u8]> {
        match self {
            CborValue::ByteString(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Borrows the map entries, if this is `Map`.
    pub fn as_map(&self) -> Option<&[(CborValue, CborValue)]> {
        match self {
            CborValue::Map(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// Borrows the array elements, if this is `Array`.
    pub fn as_array(&self) -> Option<&[CborValue]> {
        match self {
            CborValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Looks up a text-keyed entry in a `Map` by exact key match.
    pub fn map_get(&self, key: &str) -> Option<&CborValue> {
        self.as_map()?.iter().find_map(|(k, v)| {
            if k.as_text() == Some(key) {
                Some(v)
            } else {
                None
            }
        })
    }

    /// Interprets an `Unsigned`/`Negative` value as a host `i128`.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            CborValue::Unsigned(n) => Some(*n as i128),
            CborValue::Negative(n) => Some(-1 - *n as i128),
            _ => None,
        }
    }

    /// Builds the `Unsigned`/`Negative` case representing `n`.
    pub fn from_integer(n: i128) -> CborValue {
        if n >= 0 {
            CborValue::Unsigned(n as u64)
        } else {
            CborValue::Negative((-1 - n) as u64)
        }
    }
}

impl PartialEq for CborValue {
    fn eq(&self, other: &Self) -> bool {
        use CborValue::*;
        match (self, other) {
            (Unsigned(a), Unsigned(b)) => a == b,
            (Negative(a), Negative(b)) => a == b,
            (ByteString(a), ByteString(b)) => a == b,
            (Text(a), Text(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Map(a), Map(b)) => a == b,
            (Tag(ta, va), Tag(tb, vb)) => ta == tb && va == vb,
            (Bool(a), Bool(b)) => a == b,
            (Null, Null) => true,
            (Float16(a), Float16(b)) => a.to_bits() == b.to_bits(),
            (Float32(a), Float32(b)) => a.to_bits() == b.to_bits(),
            (Float64(a), Float64(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl From<&str> for CborValue {
    fn from(s: &str) -> Self {
        CborValue::Text(s.to_string())
    }
}

impl From<String> for CborValue {
    fn from(s: String) -> Self {
        CborValue::Text(s)
    }
}

impl From<Vec<u8>> for CborValue {
    fn from(b: Vec<u8>) -> Self {
        CborValue::ByteString(b)
    }
}

impl From<bool> for CborValue {
    fn from(b: bool) -> Self {
        CborValue::Bool(b)
    }
}

impl From<i64> for CborValue {
    fn from(n: i64) -> Self {
        CborValue::from_integer(n as i128)
    }
}

impl From<u64> for CborValue {
    fn from(n: u64) -> Self {
        CborValue::Unsigned(n)
    }
}

impl From<i128> for CborValue {
    fn from(n: i128) -> Self {
        CborValue::from_integer(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_round_trip_through_host_i128() {
        assert_eq!(CborValue::from_integer(0).as_integer(), Some(0));
        assert_eq!(CborValue::from_integer(41).as_integer(), Some(41));
        assert_eq!(CborValue::from_integer(-1).as_integer(), Some(-1));
        assert_eq!(CborValue::from_integer(-42).as_integer(), Some(-42));
    }

    #[test]
    fn map_get_finds_text_keyed_entry() {
        let map = CborValue::map(vec![
            (CborValue::text("type"), CborValue::text("entity")),
            (CborValue::text("name"), CborValue::text("Alice")),
        ]);
        assert_eq!(map.map_get("type"), Some(&CborValue::text("entity")));
        assert_eq!(map.map_get("missing"), None);
    }

    #[test]
    fn float_equality_is_bitwise() {
        let nan_a = CborValue::Float64(f64::NAN);
        let nan_b = CborValue::Float64(f64::NAN);
        assert_eq!(nan_a, nan_b);
        assert_ne!(CborValue::Float64(0.0), CborValue::Float64(-0.0));
    }
}
