//! Multihash: a self-describing hash envelope (§4.2, §6).
//!
//! Layout: one-byte algorithm code, one-byte digest length, then the digest
//! itself. SHA-256 (code `0x12`, 32-byte digest) is the only algorithm this
//! crate can produce by hashing; `from_bytes` accepts any well-formed
//! header/length pair, per §4.2's "other algorithms may be accepted through
//! the same envelope."

use sha2::{Digest, Sha256};

use crate::error::Error;

const SHA2_256_CODE: u8 = 0x12;
const SHA2_256_LEN: u8 = 0x20;

/// A validated multihash: algorithm code, declared length, and digest bytes
/// matching that length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u8,
    digest: Vec<u8>,
}

impl Multihash {
    /// Hashes `data` with SHA-256 and wraps the digest in the multihash
    /// envelope.
    pub fn sha256(data: &[u8]) -> Multihash {
        let digest = Sha256::digest(data).to_vec();
        Multihash {
            code: SHA2_256_CODE,
            digest,
        }
    }

    /// Parses a raw multihash byte sequence: algorithm byte, length byte,
    /// then exactly that many digest bytes, with no trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Multihash, Error> {
        let code = *bytes
            .first()
            .ok_or_else(|| Error::ReferenceDecodingFailed("multihash too short".to_string()))?;
        let len = *bytes.get(1).ok_or_else(|| {
            Error::ReferenceDecodingFailed("multihash missing length byte".to_string())
        })?;
        let digest = &bytes[2..];
        if digest.len() != len as usize {
            return Err(Error::ReferenceDecodingFailed(
                "multihash digest length does not match declared length".to_string(),
            ));
        }
        Ok(Multihash {
            code,
            digest: digest.to_vec(),
        })
    }

    /// Renders the multihash back to its wire bytes: code, length, digest.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 + self.digest.len());
        bytes.push(self.code);
        bytes.push(self.digest.len() as u8);
        bytes.extend_from_slice(&self.digest);
        bytes
    }

    pub fn algorithm_code(&self) -> u8 {
        self.code
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}
