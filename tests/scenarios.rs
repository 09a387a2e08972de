//! The concrete scenarios from the content-addressing contract (S1-S6).

use mediachain_cbor::prelude::*;

#[test]
fn s1_entity_with_metadata() {
    let mut meta = CborMap::new();
    meta.insert("name", CborValue::text("Alice"));
    let record = Record::Entity(Entity::new(meta));

    let bytes = to_cbor_bytes(&record);
    let decoded = decode(&bytes).unwrap();
    let entries = decoded.as_map().unwrap();
    let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_text().unwrap()).collect();

    assert_eq!(keys, vec!["name", "type"]);
    assert_eq!(decoded.map_get("type"), Some(&CborValue::text("entity")));
}

#[test]
fn s2_empty_entity_reference_is_fixed_and_host_independent() {
    let record = Record::Entity(Entity::new(CborMap::new()));
    let bytes = to_cbor_bytes(&record);
    assert_eq!(
        bytes,
        vec![0xa1, 0x64, b't', b'y', b'p', b'e', 0x66, b'e', b'n', b't', b'i', b't', b'y']
    );

    // The reference is a pure function of the canonical bytes: recomputing
    // it, here or on any other host, yields the same digest.
    let reference_a = Reference::for_bytes(&bytes);
    let reference_b = Reference::for_bytes(&to_cbor_bytes(&Record::Entity(Entity::new(CborMap::new()))));
    assert_eq!(reference_a, reference_b);
    assert_eq!(reference_a.hash().digest().len(), 32);
}

#[test]
fn s3_canonical_entry_round_trips_under_default_preset() {
    let reference = Reference::for_bytes(b"some-record");
    let record = Record::CanonicalEntry(CanonicalEntry {
        index: Index(7),
        reference: reference.clone(),
        meta: CborMap::new(),
    });

    let bytes = to_cbor_bytes(&record);
    let decoded = from_cbor_bytes(&bytes, &DeserializerMap::default()).unwrap();

    match decoded {
        Record::CanonicalEntry(entry) => {
            assert_eq!(entry.index, Index(7));
            assert_eq!(entry.reference, reference);
        }
        other => panic!("expected CanonicalEntry, got {other:?}"),
    }
}

#[test]
fn s4_journal_block_preserves_entry_order_and_length() {
    let r1 = Reference::for_bytes(b"r1");
    let r2 = Reference::for_bytes(b"r2");
    let r3 = Reference::for_bytes(b"r3");
    let r4 = Reference::for_bytes(b"r4");
    let r5 = Reference::for_bytes(b"r5");

    let block = Record::JournalBlock(JournalBlock {
        index: Index(1),
        chain: Some(r1),
        entries: vec![
            JournalEntry::Canonical(CanonicalEntry {
                index: Index(1),
                reference: r2,
                meta: CborMap::new(),
            }),
            JournalEntry::Chain(ChainEntry {
                index: Index(2),
                reference: r3,
                chain: r4,
                chain_previous: Some(r5),
                meta: CborMap::new(),
            }),
        ],
        meta: CborMap::new(),
    });

    let bytes = to_cbor_bytes(&block);
    let decoded = from_cbor_bytes(&bytes, &DeserializerMap::default()).unwrap();

    match decoded {
        Record::JournalBlock(decoded_block) => {
            assert_eq!(decoded_block.entries.len(), 2);
            assert!(matches!(decoded_block.entries[0], JournalEntry::Canonical(_)));
            assert!(matches!(decoded_block.entries[1], JournalEntry::Chain(_)));
        }
        other => panic!("expected JournalBlock, got {other:?}"),
    }
}

#[test]
fn s5_subtype_collapse_and_preservation_across_presets() {
    let artefact = Reference::for_bytes(b"artefact");
    let chain = Reference::for_bytes(b"chain");
    let entity = Reference::for_bytes(b"entity");
    let map = CborValue::map(vec![
        (CborValue::text("type"), CborValue::text("artefactCreatedBy")),
        (CborValue::text("artefact"), artefact.to_cbor()),
        (CborValue::text("chain"), chain.to_cbor()),
        (CborValue::text("entity"), entity.to_cbor()),
    ]);

    match from_cbor(&map, &DeserializerMap::transactor_preset()).unwrap() {
        Record::ArtefactChainCell(_) => {}
        other => panic!("expected ArtefactChainCell under transactor preset, got {other:?}"),
    }

    match from_cbor(&map, &DeserializerMap::datastore_preset()).unwrap() {
        Record::ArtefactCreationCell(cell) => assert_eq!(cell.entity, entity),
        other => panic!("expected ArtefactCreationCell under datastore preset, got {other:?}"),
    }
}

#[test]
fn s6_empty_map_has_no_type_field() {
    let decoded = decode(&[0xa0]).unwrap();
    assert_eq!(
        from_cbor(&decoded, &DeserializerMap::default()),
        Err(Error::TypeNameNotFound)
    );
}
