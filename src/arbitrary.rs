//! Property-based generators over the CBOR primitives and the 14 record
//! variants (§2 component 8, §8 "Property-based generators").
//!
//! Sourced from `cim-ipld`'s use of `proptest` for content-chain round-trip
//! testing; the teacher itself has no generator dependency.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::cbor::{CborMap, CborValue};
use crate::record::{
    ArtefactChainCell, ArtefactCreationCell, ArtefactDerivationCell, ArtefactOwnershipCell,
    ArtefactReferenceCell, ArtefactUpdateCell, Artefact, CanonicalEntry, ChainEntry, Entity,
    EntityChainCell, EntityLinkCell, EntityUpdateCell, Index, JournalBlock, JournalEntry, Record,
};
use crate::reference::Reference;

/// A CBOR primitive value legal in a metadata map.
pub fn meta_value() -> impl Strategy<Value = CborValue> {
    prop_oneof![
        any::<i64>().prop_map(|n| CborValue::from_integer(n as i128)),
        any::<bool>().prop_map(CborValue::Bool),
        "[a-zA-Z0-9 ]{0,16}".prop_map(CborValue::text),
        vec(any::<u8>(), 0..16).prop_map(CborValue::ByteString),
        Just(CborValue::Null),
    ]
}

/// A small, metadata-key-safe `CborMap` with no structural key collisions.
pub fn meta_map() -> impl Strategy<Value = CborMap> {
    vec(("[a-z]{1,8}", meta_value()), 0..4).prop_map(|pairs| {
        let mut map = CborMap::new();
        for (key, value) in pairs {
            if !crate::record::STRUCTURAL_KEYS.contains(&key.as_str()) {
                map.insert(key, value);
            }
        }
        map
    })
}

/// An arbitrary content address, derived from a random byte string.
pub fn reference() -> impl Strategy<Value = Reference> {
    vec(any::<u8>(), 1..64).prop_map(|bytes| Reference::for_bytes(&bytes))
}

fn index() -> impl Strategy<Value = Index> {
    any::<i64>().prop_map(|n| Index(n as i128))
}

prop_compose! {
    fn entity_strategy()(meta in meta_map()) -> Record {
        Record::Entity(Entity::new(meta))
    }
}

prop_compose! {
    fn artefact_strategy()(meta in meta_map()) -> Record {
        Record::Artefact(Artefact::new(meta))
    }
}

prop_compose! {
    fn entity_chain_cell_strategy()(
        entity in reference(), chain in proptest::option::of(reference()), meta in meta_map()
    ) -> Record {
        Record::EntityChainCell(EntityChainCell { entity, chain, meta })
    }
}

prop_compose! {
    fn entity_update_cell_strategy()(
        entity in reference(), chain in proptest::option::of(reference()), meta in meta_map()
    ) -> Record {
        Record::EntityUpdateCell(EntityUpdateCell { entity, chain, meta })
    }
}

prop_compose! {
    fn entity_link_cell_strategy()(
        entity in reference(),
        chain in proptest::option::of(reference()),
        entity_link in reference(),
        meta in meta_map(),
    ) -> Record {
        Record::EntityLinkCell(EntityLinkCell { entity, chain, entity_link, meta })
    }
}

prop_compose! {
    fn artefact_chain_cell_strategy()(
        artefact in reference(), chain in proptest::option::of(reference()), meta in meta_map()
    ) -> Record {
        Record::ArtefactChainCell(ArtefactChainCell { artefact, chain, meta })
    }
}

prop_compose! {
    fn artefact_update_cell_strategy()(
        artefact in reference(), chain in proptest::option::of(reference()), meta in meta_map()
    ) -> Record {
        Record::ArtefactUpdateCell(ArtefactUpdateCell { artefact, chain, meta })
    }
}

prop_compose! {
    fn artefact_creation_cell_strategy()(
        artefact in reference(),
        chain in proptest::option::of(reference()),
        entity in reference(),
        meta in meta_map(),
    ) -> Record {
        Record::ArtefactCreationCell(ArtefactCreationCell { artefact, chain, entity, meta })
    }
}

prop_compose! {
    fn artefact_derivation_cell_strategy()(
        artefact in reference(),
        chain in proptest::option::of(reference()),
        artefact_origin in reference(),
        meta in meta_map(),
    ) -> Record {
        Record::ArtefactDerivationCell(ArtefactDerivationCell { artefact, chain, artefact_origin, meta })
    }
}

prop_compose! {
    fn artefact_ownership_cell_strategy()(
        artefact in reference(),
        chain in proptest::option::of(reference()),
        entity in reference(),
        meta in meta_map(),
    ) -> Record {
        Record::ArtefactOwnershipCell(ArtefactOwnershipCell { artefact, chain, entity, meta })
    }
}

prop_compose! {
    fn artefact_reference_cell_strategy()(
        artefact in reference(),
        chain in proptest::option::of(reference()),
        entity in reference(),
        meta in meta_map(),
    ) -> Record {
        Record::ArtefactReferenceCell(ArtefactReferenceCell { artefact, chain, entity, meta })
    }
}

prop_compose! {
    fn canonical_entry_strategy()(
        index in index(), reference in reference(), meta in meta_map()
    ) -> CanonicalEntry {
        CanonicalEntry { index, reference, meta }
    }
}

prop_compose! {
    fn chain_entry_strategy()(
        index in index(),
        reference in reference(),
        chain in reference(),
        chain_previous in proptest::option::of(reference()),
        meta in meta_map(),
    ) -> ChainEntry {
        ChainEntry { index, reference, chain, chain_previous, meta }
    }
}

fn journal_entry_strategy() -> impl Strategy<Value = JournalEntry> {
    prop_oneof![
        canonical_entry_strategy().prop_map(JournalEntry::Canonical),
        chain_entry_strategy().prop_map(JournalEntry::Chain),
    ]
}

prop_compose! {
    fn journal_block_strategy()(
        index in index(),
        chain in proptest::option::of(reference()),
        entries in vec(journal_entry_strategy(), 0..4),
        meta in meta_map(),
    ) -> Record {
        Record::JournalBlock(JournalBlock { index, chain, entries, meta })
    }
}

/// A strategy producing one of all 14 record variants with random content.
pub fn record() -> impl Strategy<Value = Record> {
    prop_oneof![
        entity_strategy(),
        artefact_strategy(),
        entity_chain_cell_strategy(),
        entity_update_cell_strategy(),
        entity_link_cell_strategy(),
        artefact_chain_cell_strategy(),
        artefact_update_cell_strategy(),
        artefact_creation_cell_strategy(),
        artefact_derivation_cell_strategy(),
        artefact_ownership_cell_strategy(),
        artefact_reference_cell_strategy(),
        canonical_entry_strategy().prop_map(Record::CanonicalEntry),
        chain_entry_strategy().prop_map(Record::ChainEntry),
        journal_block_strategy(),
    ]
}
