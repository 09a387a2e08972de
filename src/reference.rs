//! Content addresses (§3 "Reference", §4.2, §6).

use crate::cbor::CborValue;
use crate::error::Error;
use crate::multihash::Multihash;

const LINK_KEY: &str = "@link";

/// A content address: the sole concrete form is a SHA-256 multihash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    hash: Multihash,
}

impl Reference {
    pub fn new(hash: Multihash) -> Reference {
        Reference { hash }
    }

    /// Computes the content address of `bytes` directly.
    pub fn for_bytes(bytes: &[u8]) -> Reference {
        Reference::new(Multihash::sha256(bytes))
    }

    pub fn hash(&self) -> &Multihash {
        &self.hash
    }

    /// Renders this reference as its `{"@link": <bytes>}` envelope.
    pub fn to_cbor(&self) -> CborValue {
        CborValue::map(vec![(
            CborValue::text(LINK_KEY),
            CborValue::bytes(self.hash.to_bytes()),
        )])
    }

    /// Parses a `{"@link": <bytes>}` envelope. Any deviation — wrong CBOR
    /// kind, missing key, invalid multihash — is a `ReferenceDecodingFailed`.
    pub fn from_cbor(value: &CborValue) -> Result<Reference, Error> {
        let link = value
            .map_get(LINK_KEY)
            .ok_or_else(|| Error::ReferenceDecodingFailed("missing @link field".to_string()))?;
        let bytes = link
            .as_byte_string()
            .ok_or_else(|| Error::ReferenceDecodingFailed("@link is not a byte string".to_string()))?;
        let hash = Multihash::from_bytes(bytes)
            .map_err(|_| Error::ReferenceDecodingFailed("@link is not a valid multihash".to_string()))?;
        Ok(Reference::new(hash))
    }
}
