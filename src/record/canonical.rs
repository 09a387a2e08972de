//! Canonical objects: top-level identities with no structural fields beyond
//! their metadata (§3).

use crate::cbor::CborMap;

/// A top-level entity identity. All fields are user metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub meta: CborMap,
}

/// A top-level artefact identity. Structurally identical to `Entity`; the
/// two are distinguished only by their type tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Artefact {
    pub meta: CborMap,
}

impl Entity {
    pub fn new(meta: CborMap) -> Entity {
        Entity { meta }
    }
}

impl Artefact {
    pub fn new(meta: CborMap) -> Artefact {
        Artefact { meta }
    }
}
