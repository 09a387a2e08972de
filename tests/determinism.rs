//! Determinism and map-key-ordering properties.

use hex_literal::hex;
use mediachain_cbor::prelude::*;

#[test]
fn encoding_is_byte_identical_across_repeated_invocations() {
    let mut meta = CborMap::new();
    meta.insert("name", CborValue::text("Alice"));
    let record = Record::Entity(Entity::new(meta));

    let first = to_cbor_bytes(&record);
    let second = to_cbor_bytes(&record);
    assert_eq!(first, second);
}

#[test]
fn encoding_is_identical_regardless_of_field_construction_order() {
    let artefact = Reference::for_bytes(b"artefact");
    let chain = Reference::for_bytes(b"chain");

    let mut meta_a = CborMap::new();
    meta_a.insert("note", CborValue::text("hi"));
    let a = Record::ArtefactChainCell(ArtefactChainCell {
        artefact: artefact.clone(),
        chain: Some(chain.clone()),
        meta: meta_a,
    });

    // Same logical record, metadata map built with entries inserted in a
    // different order; `CborMap` sorts regardless of insertion order.
    let mut meta_b = CborMap::new();
    meta_b.insert("note", CborValue::text("hi"));
    let b = Record::ArtefactChainCell(ArtefactChainCell {
        artefact,
        chain: Some(chain),
        meta: meta_b,
    });

    assert_eq!(to_cbor_bytes(&a), to_cbor_bytes(&b));
}

#[test]
fn map_keys_are_placed_in_lexicographic_utf8_order_on_the_wire() {
    let mut meta = CborMap::new();
    meta.insert("zebra", CborValue::Unsigned(1));
    meta.insert("apple", CborValue::Unsigned(2));
    meta.insert("mango", CborValue::Unsigned(3));
    let record = Record::Entity(Entity::new(meta));

    let bytes = to_cbor_bytes(&record);
    let decoded = decode(&bytes).unwrap();
    let keys: Vec<&str> = decoded
        .as_map()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_text().unwrap())
        .collect();

    assert_eq!(keys, vec!["apple", "mango", "type", "zebra"]);
}

#[test]
fn shortest_form_integer_fixture_matches_expected_wire_bytes() {
    // map { "index": 1000 }, sorted (single key), shortest-form integer.
    let bytes = encode(&CborValue::map(vec![(
        CborValue::text("index"),
        CborValue::Unsigned(1000),
    )]));
    assert_eq!(
        bytes,
        hex!("a1 65 696e646578 19 03e8").to_vec()
    );
}
