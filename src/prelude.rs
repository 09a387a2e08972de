pub use crate::cbor::{decode, decode_all, encode, CborMap, CborValue};
pub use crate::deserializer::{from_cbor, from_cbor_bytes, DeserializerMap};
pub use crate::error::Error;
pub use crate::multihash::Multihash;
pub use crate::record::{
    Artefact, ArtefactChainCell, ArtefactCreationCell, ArtefactDerivationCell,
    ArtefactOwnershipCell, ArtefactReferenceCell, ArtefactUpdateCell, CanonicalEntry, ChainEntry,
    Entity, EntityChainCell, EntityLinkCell, EntityUpdateCell, Index, JournalBlock, JournalEntry,
    MetaValue, Record,
};
pub use crate::reference::Reference;
pub use crate::registry::RecordKind;
pub use crate::serializer::{to_cbor, to_cbor_bytes};
