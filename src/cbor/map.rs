//! `CborMap`: an insertion-order-agnostic, text-keyed map that renders its
//! entries in the canonical order the serializer requires.
//!
//! Grounded in the teacher's `map.rs` (a `BTreeMap` keyed on encoded-key
//! bytes), but keyed on the plain UTF-8 bytes of the key string instead: §4.5
//! rule 3 and §6 both read "lexicographic UTF-8 byte order," which for
//! strings of differing length is *not* the same ordering as comparing their
//! CBOR-encoded forms (the teacher's own scheme) — this crate follows the
//! spec's literal wording rather than the teacher's byte-of-encoding scheme.

use std::collections::BTreeMap;

use super::value::CborValue;

/// A map from text-string keys to `CborValue`s that always renders with its
/// keys sorted by the raw UTF-8 bytes of the key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CborMap(BTreeMap<String, CborValue>);

impl CborMap {
    pub fn new() -> CborMap {
        CborMap(BTreeMap::new())
    }

    /// Inserts `value` under `key`, overwriting any existing entry.
    pub fn insert(&mut self, key: impl Into<String>, value: CborValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&CborValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<CborValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CborValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders the map as a `CborValue::Map` whose entries are ordered by the
    /// raw UTF-8 bytes of the keys (`BTreeMap<String, _>` already iterates in
    /// that order, since `String`'s `Ord` compares the underlying bytes).
    pub fn into_cbor_value(self) -> CborValue {
        let entries = self
            .0
            .into_iter()
            .map(|(k, v)| (CborValue::Text(k), v))
            .collect();
        CborValue::Map(entries)
    }

    /// Builds a `CborMap` from a decoded `CborValue::Map`, keeping only
    /// text-keyed entries (the record layer never uses non-text keys).
    pub fn from_cbor_value(value: &CborValue) -> Option<CborMap> {
        let entries = value.as_map()?;
        let mut map = CborMap::new();
        for (key, value) in entries {
            let key = key.as_text()?;
            map.insert(key.to_string(), value.clone());
        }
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_keys_in_utf8_byte_order_regardless_of_insertion_order() {
        let mut map = CborMap::new();
        map.insert("type", CborValue::text("entity"));
        map.insert("name", CborValue::text("Alice"));
        let rendered = map.into_cbor_value();
        let entries = rendered.as_map().unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_text().unwrap()).collect();
        assert_eq!(keys, vec!["name", "type"]);
    }

    #[test]
    fn utf8_byte_order_differs_from_length_then_lexicographic() {
        // "b" < "aa" under plain UTF-8 byte order (0x62 > 0x61, so actually
        // "aa" < "b"); this just pins that we compare raw bytes, not lengths.
        let mut map = CborMap::new();
        map.insert("b", CborValue::Unsigned(1));
        map.insert("aa", CborValue::Unsigned(2));
        let rendered = map.into_cbor_value();
        let entries = rendered.as_map().unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_text().unwrap()).collect();
        assert_eq!(keys, vec!["aa", "b"]);
    }

    #[test]
    fn round_trips_through_cbor_value() {
        let mut map = CborMap::new();
        map.insert("index", CborValue::Unsigned(7));
        let value = map.clone().into_cbor_value();
        let recovered = CborMap::from_cbor_value(&value).unwrap();
        assert_eq!(recovered.get("index"), map.get("index"));
    }
}
