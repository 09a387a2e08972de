//! Polymorphic deserializer dispatch (§4.6).
//!
//! A `DeserializerMap` is a plain, constructible, cloneable value mapping
//! each type tag to the decoder invoked for that tag — a strategy object,
//! not inheritance, per the design notes' "implement as a plain mapping."

use std::collections::HashMap;

use crate::cbor::{decode_all, CborMap, CborValue};
use crate::error::Error;
use crate::record::{
    ArtefactChainCell, ArtefactCreationCell, ArtefactDerivationCell, ArtefactOwnershipCell,
    ArtefactReferenceCell, ArtefactUpdateCell, Artefact, CanonicalEntry, ChainEntry, Entity,
    EntityChainCell, EntityLinkCell, EntityUpdateCell, Index, JournalBlock, JournalEntry, Record,
};
use crate::reference::Reference;
use crate::registry::RecordKind;

type Decoder = fn(&CborValue) -> Result<Record, Error>;

/// A request-scoped policy choosing which concrete decoder handles each
/// type tag. Cheap to construct, immutable once built, safely shared across
/// threads (§5).
#[derive(Debug, Clone)]
pub struct DeserializerMap {
    decoders: HashMap<&'static str, Decoder>,
}

impl DeserializerMap {
    fn base() -> DeserializerMap {
        let mut decoders: HashMap<&'static str, Decoder> = HashMap::new();
        decoders.insert(RecordKind::Entity.tag(), entity_decoder);
        decoders.insert(RecordKind::Artefact.tag(), artefact_decoder);
        decoders.insert(RecordKind::CanonicalEntry.tag(), canonical_entry_decoder);
        decoders.insert(RecordKind::ChainEntry.tag(), chain_entry_decoder);
        decoders.insert(RecordKind::JournalBlock.tag(), journal_block_decoder);
        DeserializerMap { decoders }
    }

    /// Maps all three entity-cell tags to the generic `EntityChainCell`
    /// decoder and all six artefact-cell tags to the generic
    /// `ArtefactChainCell` decoder. The transactor treats cells uniformly as
    /// links in a chain and does not need subtype fields.
    pub fn transactor_preset() -> DeserializerMap {
        let mut map = DeserializerMap::base();
        map.decoders
            .insert(RecordKind::EntityChainCell.tag(), entity_chain_cell_decoder);
        map.decoders
            .insert(RecordKind::EntityUpdateCell.tag(), entity_chain_cell_decoder);
        map.decoders
            .insert(RecordKind::EntityLinkCell.tag(), entity_chain_cell_decoder);
        map.decoders
            .insert(RecordKind::ArtefactChainCell.tag(), artefact_chain_cell_decoder);
        map.decoders
            .insert(RecordKind::ArtefactUpdateCell.tag(), artefact_chain_cell_decoder);
        map.decoders
            .insert(RecordKind::ArtefactCreationCell.tag(), artefact_chain_cell_decoder);
        map.decoders.insert(
            RecordKind::ArtefactDerivationCell.tag(),
            artefact_chain_cell_decoder,
        );
        map.decoders.insert(
            RecordKind::ArtefactOwnershipCell.tag(),
            artefact_chain_cell_decoder,
        );
        map.decoders.insert(
            RecordKind::ArtefactReferenceCell.tag(),
            artefact_chain_cell_decoder,
        );
        map
    }

    /// Extends the transactor preset by overriding every subtype tag with
    /// its specific decoder. Peers and durable stores need the richer typed
    /// form. This is the default preset.
    pub fn datastore_preset() -> DeserializerMap {
        let mut map = DeserializerMap::transactor_preset();
        map.decoders
            .insert(RecordKind::EntityUpdateCell.tag(), entity_update_cell_decoder);
        map.decoders
            .insert(RecordKind::EntityLinkCell.tag(), entity_link_cell_decoder);
        map.decoders
            .insert(RecordKind::ArtefactUpdateCell.tag(), artefact_update_cell_decoder);
        map.decoders.insert(
            RecordKind::ArtefactCreationCell.tag(),
            artefact_creation_cell_decoder,
        );
        map.decoders.insert(
            RecordKind::ArtefactDerivationCell.tag(),
            artefact_derivation_cell_decoder,
        );
        map.decoders.insert(
            RecordKind::ArtefactOwnershipCell.tag(),
            artefact_ownership_cell_decoder,
        );
        map.decoders.insert(
            RecordKind::ArtefactReferenceCell.tag(),
            artefact_reference_cell_decoder,
        );
        map
    }
}

impl Default for DeserializerMap {
    fn default() -> DeserializerMap {
        DeserializerMap::datastore_preset()
    }
}

/// Parses a CBOR map into a concrete record using `map`'s policy.
pub fn from_cbor(value: &CborValue, map: &DeserializerMap) -> Result<Record, Error> {
    if value.as_map().is_none() {
        return Err(Error::UnexpectedCborType("expected a CBOR map".to_string()));
    }
    let tag = get_required_text(value, "type").map_err(|_| Error::TypeNameNotFound)?;
    let kind = RecordKind::from_string(&tag)?;
    let decoder = map
        .decoders
        .get(kind.tag())
        .ok_or_else(|| Error::UnexpectedObjectType(tag.clone()))?;
    decoder(value)
}

/// Decodes a CBOR byte stream, unwrapping a leading tag (the self-describe
/// tag 55799 is tolerated, though any wrapping tag is accepted) and using
/// the first top-level value. An empty stream is a decode failure.
pub fn from_cbor_bytes(bytes: &[u8], map: &DeserializerMap) -> Result<Record, Error> {
    let items = decode_all(bytes)?;
    let first = items.first().ok_or(Error::CborDecodingFailed)?;
    let value = match first {
        CborValue::Tag(_, inner) => inner.as_ref(),
        other => other,
    };
    from_cbor(value, map)
}

/// The record's pass-through metadata: every top-level field except the
/// structural ones the caller's decoder already extracted into typed
/// fields. Structural keys are re-derived from the typed fields on
/// re-encode (`serializer::to_cbor`), so keeping them here too would make a
/// freshly decoded record compare unequal to the same record as
/// constructed by hand (`Entity::new` et al. never populate structural
/// keys in `meta`).
fn raw_meta(value: &CborValue) -> CborMap {
    let mut meta = CborMap::from_cbor_value(value).unwrap_or_default();
    for key in crate::record::STRUCTURAL_KEYS {
        meta.remove(key);
    }
    meta
}

fn get_required_text(value: &CborValue, key: &str) -> Result<String, Error> {
    value
        .map_get(key)
        .and_then(CborValue::as_text)
        .map(str::to_string)
        .ok_or_else(|| Error::RequiredFieldNotFound(key.to_string()))
}

fn get_required_index(value: &CborValue, key: &str) -> Result<Index, Error> {
    value
        .map_get(key)
        .and_then(CborValue::as_integer)
        .map(Index)
        .ok_or_else(|| Error::RequiredFieldNotFound(key.to_string()))
}

/// Required map field, decoded via `MultihashReferenceDeserializer`.
fn get_required_reference(value: &CborValue, key: &str) -> Result<Reference, Error> {
    let field = value
        .map_get(key)
        .ok_or_else(|| Error::RequiredFieldNotFound(key.to_string()))?;
    Reference::from_cbor(field)
}

/// Absent field → absent value; present but undecodable → absent value, not
/// an error. Optional chain pointers are speculative.
fn get_optional_reference(value: &CborValue, key: &str) -> Option<Reference> {
    value.map_get(key).and_then(|field| Reference::from_cbor(field).ok())
}

fn check_type_is(value: &CborValue, expected: &str) -> Result<(), Error> {
    let actual = get_required_text(value, "type").map_err(|_| Error::TypeNameNotFound)?;
    if actual == expected {
        Ok(())
    } else {
        Err(Error::UnexpectedObjectType(actual))
    }
}

fn check_type_is_one_of(value: &CborValue, expected: &[&str]) -> Result<(), Error> {
    let actual = get_required_text(value, "type").map_err(|_| Error::TypeNameNotFound)?;
    if expected.contains(&actual.as_str()) {
        Ok(())
    } else {
        Err(Error::UnexpectedObjectType(actual))
    }
}

fn entity_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::Entity.tag())?;
    Ok(Record::Entity(Entity::new(raw_meta(value))))
}

fn artefact_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::Artefact.tag())?;
    Ok(Record::Artefact(Artefact::new(raw_meta(value))))
}

const ENTITY_CHAIN_CELL_TAGS: &[&str] = &["entityChainCell", "entityUpdate", "entityLink"];
const ARTEFACT_CHAIN_CELL_TAGS: &[&str] = &[
    "artefactChainCell",
    "artefactUpdate",
    "artefactCreatedBy",
    "artefactDerivedBy",
    "artefactRightsOwnedBy",
    "artefactReferencedBy",
];

fn entity_chain_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is_one_of(value, ENTITY_CHAIN_CELL_TAGS)?;
    Ok(Record::EntityChainCell(EntityChainCell {
        entity: get_required_reference(value, "entity")?,
        chain: get_optional_reference(value, "chain"),
        meta: raw_meta(value),
    }))
}

fn entity_update_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::EntityUpdateCell.tag())?;
    Ok(Record::EntityUpdateCell(EntityUpdateCell {
        entity: get_required_reference(value, "entity")?,
        chain: get_optional_reference(value, "chain"),
        meta: raw_meta(value),
    }))
}

fn entity_link_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::EntityLinkCell.tag())?;
    Ok(Record::EntityLinkCell(EntityLinkCell {
        entity: get_required_reference(value, "entity")?,
        chain: get_optional_reference(value, "chain"),
        entity_link: get_required_reference(value, "entityLink")?,
        meta: raw_meta(value),
    }))
}

fn artefact_chain_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is_one_of(value, ARTEFACT_CHAIN_CELL_TAGS)?;
    Ok(Record::ArtefactChainCell(ArtefactChainCell {
        artefact: get_required_reference(value, "artefact")?,
        chain: get_optional_reference(value, "chain"),
        meta: raw_meta(value),
    }))
}

fn artefact_update_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::ArtefactUpdateCell.tag())?;
    Ok(Record::ArtefactUpdateCell(ArtefactUpdateCell {
        artefact: get_required_reference(value, "artefact")?,
        chain: get_optional_reference(value, "chain"),
        meta: raw_meta(value),
    }))
}

fn artefact_creation_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::ArtefactCreationCell.tag())?;
    Ok(Record::ArtefactCreationCell(ArtefactCreationCell {
        artefact: get_required_reference(value, "artefact")?,
        chain: get_optional_reference(value, "chain"),
        entity: get_required_reference(value, "entity")?,
        meta: raw_meta(value),
    }))
}

fn artefact_derivation_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::ArtefactDerivationCell.tag())?;
    Ok(Record::ArtefactDerivationCell(ArtefactDerivationCell {
        artefact: get_required_reference(value, "artefact")?,
        chain: get_optional_reference(value, "chain"),
        artefact_origin: get_required_reference(value, "artefactOrigin")?,
        meta: raw_meta(value),
    }))
}

fn artefact_ownership_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::ArtefactOwnershipCell.tag())?;
    Ok(Record::ArtefactOwnershipCell(ArtefactOwnershipCell {
        artefact: get_required_reference(value, "artefact")?,
        chain: get_optional_reference(value, "chain"),
        entity: get_required_reference(value, "entity")?,
        meta: raw_meta(value),
    }))
}

fn artefact_reference_cell_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::ArtefactReferenceCell.tag())?;
    Ok(Record::ArtefactReferenceCell(ArtefactReferenceCell {
        artefact: get_required_reference(value, "artefact")?,
        chain: get_optional_reference(value, "chain"),
        entity: get_required_reference(value, "entity")?,
        meta: raw_meta(value),
    }))
}

fn canonical_entry_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::CanonicalEntry.tag())?;
    Ok(Record::CanonicalEntry(CanonicalEntry {
        index: get_required_index(value, "index")?,
        reference: get_required_reference(value, "ref")?,
        meta: raw_meta(value),
    }))
}

fn chain_entry_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::ChainEntry.tag())?;
    Ok(Record::ChainEntry(ChainEntry {
        index: get_required_index(value, "index")?,
        reference: get_required_reference(value, "ref")?,
        chain: get_required_reference(value, "chain")?,
        chain_previous: get_optional_reference(value, "chainPrevious"),
        meta: raw_meta(value),
    }))
}

/// Reads `type`, dispatches to the canonical-entry or chain-entry decoder;
/// any other type is `UnexpectedObjectType`.
fn journal_entry_decoder(value: &CborValue) -> Result<JournalEntry, Error> {
    let tag = get_required_text(value, "type").map_err(|_| Error::TypeNameNotFound)?;
    match tag.as_str() {
        "insert" => match canonical_entry_decoder(value)? {
            Record::CanonicalEntry(entry) => Ok(JournalEntry::Canonical(entry)),
            _ => unreachable!(),
        },
        "update" => match chain_entry_decoder(value)? {
            Record::ChainEntry(entry) => Ok(JournalEntry::Chain(entry)),
            _ => unreachable!(),
        },
        other => Err(Error::UnexpectedObjectType(other.to_string())),
    }
}

fn journal_block_decoder(value: &CborValue) -> Result<Record, Error> {
    check_type_is(value, RecordKind::JournalBlock.tag())?;
    let index = get_required_index(value, "index")?;
    let chain = get_optional_reference(value, "chain");
    let raw_entries = value
        .map_get("entries")
        .and_then(CborValue::as_array)
        .ok_or_else(|| Error::RequiredFieldNotFound("entries".to_string()))?;

    // Non-map elements are silently skipped, not `UnexpectedCborType` — a
    // preserved quirk of the source system. Any decode failure on a map
    // element aborts the whole block (fail-fast; no partial decode).
    let mut entries = Vec::with_capacity(raw_entries.len());
    for element in raw_entries {
        if element.as_map().is_none() {
            continue;
        }
        entries.push(journal_entry_decoder(element)?);
    }

    Ok(Record::JournalBlock(JournalBlock {
        index,
        chain,
        entries,
        meta: raw_meta(value),
    }))
}
