//! Round-trip, content-address stability, and reference-handling properties.

use mediachain_cbor::prelude::*;

fn assert_round_trips(record: Record) {
    let bytes = to_cbor_bytes(&record);
    let decoded = from_cbor_bytes(&bytes, &DeserializerMap::default()).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn every_variant_round_trips_under_the_datastore_preset() {
    let artefact = Reference::for_bytes(b"artefact");
    let entity = Reference::for_bytes(b"entity");
    let chain = Reference::for_bytes(b"chain");

    assert_round_trips(Record::Entity(Entity::new(CborMap::new())));
    assert_round_trips(Record::Artefact(Artefact::new(CborMap::new())));
    assert_round_trips(Record::EntityChainCell(EntityChainCell {
        entity: entity.clone(),
        chain: Some(chain.clone()),
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::EntityUpdateCell(EntityUpdateCell {
        entity: entity.clone(),
        chain: None,
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::EntityLinkCell(EntityLinkCell {
        entity: entity.clone(),
        chain: None,
        entity_link: Reference::for_bytes(b"link"),
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::ArtefactChainCell(ArtefactChainCell {
        artefact: artefact.clone(),
        chain: Some(chain.clone()),
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::ArtefactCreationCell(ArtefactCreationCell {
        artefact: artefact.clone(),
        chain: None,
        entity: entity.clone(),
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::ArtefactDerivationCell(ArtefactDerivationCell {
        artefact: artefact.clone(),
        chain: None,
        artefact_origin: Reference::for_bytes(b"origin"),
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::ArtefactOwnershipCell(ArtefactOwnershipCell {
        artefact: artefact.clone(),
        chain: None,
        entity: entity.clone(),
        meta: CborMap::new(),
    }));
    assert_round_trips(Record::ArtefactReferenceCell(ArtefactReferenceCell {
        artefact,
        chain: None,
        entity,
        meta: CborMap::new(),
    }));
}

#[test]
fn content_address_is_stable_across_a_round_trip() {
    let mut meta = CborMap::new();
    meta.insert("name", CborValue::text("Alice"));
    let record = Record::Entity(Entity::new(meta));

    let bytes = to_cbor_bytes(&record);
    let reference_before = Reference::for_bytes(&bytes);

    let decoded = from_cbor_bytes(&bytes, &DeserializerMap::default()).unwrap();
    let reference_after = Reference::for_bytes(&to_cbor_bytes(&decoded));

    assert_eq!(reference_before, reference_after);
}

#[test]
fn reference_decodes_the_multihash_wire_layout() {
    // algorithm 0x12 (SHA-256), length 0x20, 32-byte digest of "x"
    let hash = Multihash::sha256(b"x");
    let bytes = hash.to_bytes();
    assert_eq!(bytes[0], 0x12);
    assert_eq!(bytes[1], 0x20);
    assert_eq!(bytes.len(), 34);

    let expected_link = CborValue::map(vec![(CborValue::text("@link"), CborValue::bytes(bytes))]);
    assert_eq!(Reference::new(hash).to_cbor(), expected_link);
}

#[test]
fn malformed_reference_field_is_reported_with_a_message() {
    let cbor = CborValue::map(vec![
        (CborValue::text("type"), CborValue::text("entityChainCell")),
        (
            CborValue::text("entity"),
            CborValue::map(vec![(CborValue::text("@link"), CborValue::bytes(vec![0x12, 0x99]))]),
        ),
    ]);
    let err = from_cbor(&cbor, &DeserializerMap::default()).unwrap_err();
    assert!(matches!(err, Error::ReferenceDecodingFailed(_)));
}

#[test]
fn removing_a_required_field_names_it_in_the_error() {
    let reference = Reference::for_bytes(b"r");
    let record = Record::CanonicalEntry(CanonicalEntry {
        index: Index(1),
        reference,
        meta: CborMap::new(),
    });
    let cbor = to_cbor(&record);
    let entries: Vec<_> = cbor
        .as_map()
        .unwrap()
        .iter()
        .filter(|(k, _)| k.as_text() != Some("ref"))
        .cloned()
        .collect();
    let without_ref = CborValue::map(entries);

    assert_eq!(
        from_cbor(&without_ref, &DeserializerMap::default()),
        Err(Error::RequiredFieldNotFound("ref".to_string()))
    );
}
