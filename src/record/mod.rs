//! The record model (§3, §4.4): a single closed sum type over every
//! serializable journal object.

mod canonical;
mod chain_cell;
mod journal;

pub use canonical::{Artefact, Entity};
pub use chain_cell::{
    ArtefactChainCell, ArtefactCreationCell, ArtefactDerivationCell, ArtefactOwnershipCell,
    ArtefactReferenceCell, ArtefactUpdateCell, EntityChainCell, EntityLinkCell, EntityUpdateCell,
};
pub use journal::{CanonicalEntry, ChainEntry, Index, JournalBlock, JournalEntry};

use crate::cbor::{CborMap, CborValue};
use crate::registry::RecordKind;

/// A metadata primitive value (§3 "Metadata map"): the closed set of CBOR
/// kinds pass-through metadata is allowed to carry.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Int(i128),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
    Float(f64),
    Null,
}

impl MetaValue {
    /// Converts a raw decoded `CborValue` to a `MetaValue`, if it is one of
    /// the primitive kinds metadata is allowed to hold.
    pub fn from_cbor(value: &CborValue) -> Option<MetaValue> {
        match value {
            CborValue::Unsigned(_) | CborValue::Negative(_) => {
                value.as_integer().map(MetaValue::Int)
            }
            CborValue::Bool(b) => Some(MetaValue::Bool(*b)),
            CborValue::Text(s) => Some(MetaValue::Text(s.clone())),
            CborValue::ByteString(b) => Some(MetaValue::Bytes(b.clone())),
            CborValue::Float64(f) => Some(MetaValue::Float(*f)),
            CborValue::Float32(f) => Some(MetaValue::Float(*f as f64)),
            CborValue::Float16(f) => Some(MetaValue::Float(f32::from(*f) as f64)),
            CborValue::Null => Some(MetaValue::Null),
            _ => None,
        }
    }

    pub fn to_cbor(&self) -> CborValue {
        match self {
            MetaValue::Int(n) => CborValue::from_integer(*n),
            MetaValue::Bool(b) => CborValue::Bool(*b),
            MetaValue::Text(s) => CborValue::Text(s.clone()),
            MetaValue::Bytes(b) => CborValue::ByteString(b.clone()),
            MetaValue::Float(f) => CborValue::Float64(*f),
            MetaValue::Null => CborValue::Null,
        }
    }
}

/// Structural keys that every record-shaped map may carry. Metadata keys
/// colliding with these are overwritten by the encoder (§3 invariant).
pub const STRUCTURAL_KEYS: &[&str] = &[
    "type",
    "artefact",
    "entity",
    "chain",
    "entityLink",
    "artefactOrigin",
    "index",
    "ref",
    "chainPrevious",
    "entries",
    "@link",
];

/// The closed sum type over every serializable journal object.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Entity(Entity),
    Artefact(Artefact),
    EntityChainCell(EntityChainCell),
    EntityUpdateCell(EntityUpdateCell),
    EntityLinkCell(EntityLinkCell),
    ArtefactChainCell(ArtefactChainCell),
    ArtefactUpdateCell(ArtefactUpdateCell),
    ArtefactCreationCell(ArtefactCreationCell),
    ArtefactDerivationCell(ArtefactDerivationCell),
    ArtefactOwnershipCell(ArtefactOwnershipCell),
    ArtefactReferenceCell(ArtefactReferenceCell),
    CanonicalEntry(CanonicalEntry),
    ChainEntry(ChainEntry),
    JournalBlock(JournalBlock),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Entity(_) => RecordKind::Entity,
            Record::Artefact(_) => RecordKind::Artefact,
            Record::EntityChainCell(_) => RecordKind::EntityChainCell,
            Record::EntityUpdateCell(_) => RecordKind::EntityUpdateCell,
            Record::EntityLinkCell(_) => RecordKind::EntityLinkCell,
            Record::ArtefactChainCell(_) => RecordKind::ArtefactChainCell,
            Record::ArtefactUpdateCell(_) => RecordKind::ArtefactUpdateCell,
            Record::ArtefactCreationCell(_) => RecordKind::ArtefactCreationCell,
            Record::ArtefactDerivationCell(_) => RecordKind::ArtefactDerivationCell,
            Record::ArtefactOwnershipCell(_) => RecordKind::ArtefactOwnershipCell,
            Record::ArtefactReferenceCell(_) => RecordKind::ArtefactReferenceCell,
            Record::CanonicalEntry(_) => RecordKind::CanonicalEntry,
            Record::ChainEntry(_) => RecordKind::ChainEntry,
            Record::JournalBlock(_) => RecordKind::JournalBlock,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// The record's raw pass-through metadata map.
    pub fn meta(&self) -> &CborMap {
        match self {
            Record::Entity(r) => &r.meta,
            Record::Artefact(r) => &r.meta,
            Record::EntityChainCell(r) => &r.meta,
            Record::EntityUpdateCell(r) => &r.meta,
            Record::EntityLinkCell(r) => &r.meta,
            Record::ArtefactChainCell(r) => &r.meta,
            Record::ArtefactUpdateCell(r) => &r.meta,
            Record::ArtefactCreationCell(r) => &r.meta,
            Record::ArtefactDerivationCell(r) => &r.meta,
            Record::ArtefactOwnershipCell(r) => &r.meta,
            Record::ArtefactReferenceCell(r) => &r.meta,
            Record::CanonicalEntry(r) => &r.meta,
            Record::ChainEntry(r) => &r.meta,
            Record::JournalBlock(r) => &r.meta,
        }
    }

    /// Projects the record's metadata, excluding structural keys, into typed
    /// `MetaValue`s for callers that want the pass-through annotations
    /// without the structural fields already available through dedicated
    /// accessors.
    pub fn metadata(&self) -> Vec<(String, MetaValue)> {
        self.meta()
            .iter()
            .filter(|(key, _)| !STRUCTURAL_KEYS.contains(key))
            .filter_map(|(key, value)| {
                MetaValue::from_cbor(value).map(|meta| (key.to_string(), meta))
            })
            .collect()
    }
}
