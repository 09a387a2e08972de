//! Deterministic serialization (§4.5): renders any record to the CBOR map
//! that is this system's binary contract.

use crate::cbor::{encode, CborMap, CborValue};
use crate::record::{
    Artefact, ArtefactChainCell, ArtefactCreationCell, ArtefactDerivationCell,
    ArtefactOwnershipCell, ArtefactReferenceCell, ArtefactUpdateCell, CanonicalEntry, ChainEntry,
    Entity, EntityChainCell, EntityLinkCell, EntityUpdateCell, JournalBlock, JournalEntry, Record,
};
use crate::reference::Reference;

/// Renders `record` to its canonical CBOR map.
///
/// Step 1 starts from the record's raw meta map; step 2 overlays structural
/// fields (type tag, then required fields in table order, then present
/// optional fields) on top, so structural keys always win over stale or
/// colliding metadata (§3 invariant). `CborMap` itself guarantees step 3,
/// sorting keys by UTF-8 byte order on render.
pub fn to_cbor(record: &Record) -> CborValue {
    let mut map = record.meta().clone();
    map.insert("type", CborValue::text(record.type_tag()));
    overlay_structural_fields(record, &mut map);
    map.into_cbor_value()
}

/// `toCborBytes`: the content-addressing function's input.
pub fn to_cbor_bytes(record: &Record) -> Vec<u8> {
    encode(&to_cbor(record))
}

fn overlay_structural_fields(record: &Record, map: &mut CborMap) {
    match record {
        Record::Entity(Entity { .. }) | Record::Artefact(Artefact { .. }) => {}
        Record::EntityChainCell(EntityChainCell { entity, chain, .. })
        | Record::EntityUpdateCell(EntityUpdateCell { entity, chain, .. }) => {
            map.insert("entity", entity.to_cbor());
            overlay_optional_reference(map, "chain", chain);
        }
        Record::EntityLinkCell(EntityLinkCell {
            entity,
            chain,
            entity_link,
            ..
        }) => {
            map.insert("entity", entity.to_cbor());
            overlay_optional_reference(map, "chain", chain);
            map.insert("entityLink", entity_link.to_cbor());
        }
        Record::ArtefactChainCell(ArtefactChainCell { artefact, chain, .. })
        | Record::ArtefactUpdateCell(ArtefactUpdateCell { artefact, chain, .. }) => {
            map.insert("artefact", artefact.to_cbor());
            overlay_optional_reference(map, "chain", chain);
        }
        Record::ArtefactCreationCell(ArtefactCreationCell {
            artefact,
            chain,
            entity,
            ..
        }) => {
            map.insert("artefact", artefact.to_cbor());
            overlay_optional_reference(map, "chain", chain);
            map.insert("entity", entity.to_cbor());
        }
        Record::ArtefactDerivationCell(ArtefactDerivationCell {
            artefact,
            chain,
            artefact_origin,
            ..
        }) => {
            map.insert("artefact", artefact.to_cbor());
            overlay_optional_reference(map, "chain", chain);
            map.insert("artefactOrigin", artefact_origin.to_cbor());
        }
        Record::ArtefactOwnershipCell(ArtefactOwnershipCell {
            artefact,
            chain,
            entity,
            ..
        })
        | Record::ArtefactReferenceCell(ArtefactReferenceCell {
            artefact,
            chain,
            entity,
            ..
        }) => {
            map.insert("artefact", artefact.to_cbor());
            overlay_optional_reference(map, "chain", chain);
            map.insert("entity", entity.to_cbor());
        }
        Record::CanonicalEntry(CanonicalEntry { index, reference, .. }) => {
            map.insert("index", CborValue::from_integer(index.0));
            map.insert("ref", reference.to_cbor());
        }
        Record::ChainEntry(ChainEntry {
            index,
            reference,
            chain,
            chain_previous,
            ..
        }) => {
            map.insert("index", CborValue::from_integer(index.0));
            map.insert("ref", reference.to_cbor());
            map.insert("chain", chain.to_cbor());
            overlay_optional_reference(map, "chainPrevious", chain_previous);
        }
        Record::JournalBlock(JournalBlock {
            index,
            chain,
            entries,
            ..
        }) => {
            map.insert("index", CborValue::from_integer(index.0));
            overlay_optional_reference(map, "chain", chain);
            let entries = entries.iter().map(journal_entry_to_cbor).collect();
            map.insert("entries", CborValue::Array(entries));
        }
    }
}

fn overlay_optional_reference(map: &mut CborMap, key: &str, reference: &Option<Reference>) {
    match reference {
        Some(reference) => map.insert(key, reference.to_cbor()),
        None => {
            map.remove(key);
        }
    }
}

fn journal_entry_to_cbor(entry: &JournalEntry) -> CborValue {
    match entry {
        JournalEntry::Canonical(entry) => to_cbor(&Record::CanonicalEntry(entry.clone())),
        JournalEntry::Chain(entry) => to_cbor(&Record::ChainEntry(entry.clone())),
    }
}
