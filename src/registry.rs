//! The closed type registry (§4.3): a two-way mapping between a record's
//! type tag string and its variant discriminator.

use crate::error::Error;

/// The 14 record kinds, identified by their stable wire tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Entity,
    Artefact,
    EntityChainCell,
    EntityUpdateCell,
    EntityLinkCell,
    ArtefactChainCell,
    ArtefactUpdateCell,
    ArtefactCreationCell,
    ArtefactDerivationCell,
    ArtefactOwnershipCell,
    ArtefactReferenceCell,
    CanonicalEntry,
    ChainEntry,
    JournalBlock,
}

impl RecordKind {
    /// The stable, case-sensitive wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Entity => "entity",
            RecordKind::Artefact => "artefact",
            RecordKind::EntityChainCell => "entityChainCell",
            RecordKind::EntityUpdateCell => "entityUpdate",
            RecordKind::EntityLinkCell => "entityLink",
            RecordKind::ArtefactChainCell => "artefactChainCell",
            RecordKind::ArtefactUpdateCell => "artefactUpdate",
            RecordKind::ArtefactCreationCell => "artefactCreatedBy",
            RecordKind::ArtefactDerivationCell => "artefactDerivedBy",
            RecordKind::ArtefactOwnershipCell => "artefactRightsOwnedBy",
            RecordKind::ArtefactReferenceCell => "artefactReferencedBy",
            RecordKind::CanonicalEntry => "insert",
            RecordKind::ChainEntry => "update",
            RecordKind::JournalBlock => "journalBlock",
        }
    }

    /// Looks up the kind for a wire tag string. Unknown tags never decode.
    pub fn from_string(tag: &str) -> Result<RecordKind, Error> {
        match tag {
            "entity" => Ok(RecordKind::Entity),
            "artefact" => Ok(RecordKind::Artefact),
            "entityChainCell" => Ok(RecordKind::EntityChainCell),
            "entityUpdate" => Ok(RecordKind::EntityUpdateCell),
            "entityLink" => Ok(RecordKind::EntityLinkCell),
            "artefactChainCell" => Ok(RecordKind::ArtefactChainCell),
            "artefactUpdate" => Ok(RecordKind::ArtefactUpdateCell),
            "artefactCreatedBy" => Ok(RecordKind::ArtefactCreationCell),
            "artefactDerivedBy" => Ok(RecordKind::ArtefactDerivationCell),
            "artefactRightsOwnedBy" => Ok(RecordKind::ArtefactOwnershipCell),
            "artefactReferencedBy" => Ok(RecordKind::ArtefactReferenceCell),
            "insert" => Ok(RecordKind::CanonicalEntry),
            "update" => Ok(RecordKind::ChainEntry),
            "journalBlock" => Ok(RecordKind::JournalBlock),
            other => Err(Error::UnexpectedObjectType(other.to_string())),
        }
    }

    /// The three entity-cell kinds the transactor preset collapses into
    /// `EntityChainCell`.
    pub fn is_entity_chain_cell_subtype(self) -> bool {
        matches!(
            self,
            RecordKind::EntityChainCell | RecordKind::EntityUpdateCell | RecordKind::EntityLinkCell
        )
    }

    /// The six artefact-cell kinds the transactor preset collapses into
    /// `ArtefactChainCell`.
    pub fn is_artefact_chain_cell_subtype(self) -> bool {
        matches!(
            self,
            RecordKind::ArtefactChainCell
                | RecordKind::ArtefactUpdateCell
                | RecordKind::ArtefactCreationCell
                | RecordKind::ArtefactDerivationCell
                | RecordKind::ArtefactOwnershipCell
                | RecordKind::ArtefactReferenceCell
        )
    }
}
