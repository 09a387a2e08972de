//! Journal entries and blocks (§3).

use crate::cbor::CborMap;
use crate::reference::Reference;

/// A journal index. Modeled as `i128` rather than a machine `u64`: the spec
/// requires arbitrary-precision indices, and `i128` gives headroom far past
/// any realistic journal length without a bignum dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(pub i128);

/// A canonical-object insertion entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalEntry {
    pub index: Index,
    pub reference: Reference,
    pub meta: CborMap,
}

/// A chain-cell update entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainEntry {
    pub index: Index,
    pub reference: Reference,
    pub chain: Reference,
    pub chain_previous: Option<Reference>,
    pub meta: CborMap,
}

/// A single mutation record produced by the transactor: either a canonical
/// insertion or a chain update.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEntry {
    Canonical(CanonicalEntry),
    Chain(ChainEntry),
}

/// An ordered batch of journal entries with a monotonic index.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalBlock {
    pub index: Index,
    pub chain: Option<Reference>,
    pub entries: Vec<JournalEntry>,
    pub meta: CborMap,
}
