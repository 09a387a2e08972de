//! The closed error taxonomy (spec §4.7).
//!
//! Every fallible operation in this crate returns one of these variants.
//! Per §7, errors never chain and never carry stack traces or raw input
//! bytes — only the field name or type string needed to diagnose.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Byte-level malformed CBOR: truncated input, non-minimal integers,
    /// invalid UTF-8 in a text string, an invalid simple value, or any
    /// other structural violation the low-level decoder detects.
    #[error("failed to decode CBOR data")]
    CborDecodingFailed,

    /// The CBOR kind present is not the kind expected at this position.
    #[error("unexpected CBOR type: {0}")]
    UnexpectedCborType(String),

    /// A `@link` field was present but did not decode to a valid multihash.
    #[error("failed to decode reference: {0}")]
    ReferenceDecodingFailed(String),

    /// A record-shaped map had no `type` field, or it was not a text string.
    #[error("type name not found")]
    TypeNameNotFound,

    /// The `type` field named a tag that is unknown to the registry, or
    /// known but not applicable at this call site.
    #[error("unexpected object type: {0}")]
    UnexpectedObjectType(String),

    /// A required structural field was missing or of the wrong CBOR kind.
    #[error("required field not found: {0}")]
    RequiredFieldNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_only_the_offending_field_or_type() {
        let err = Error::RequiredFieldNotFound("entity".to_string());
        assert_eq!(err.to_string(), "required field not found: entity");

        let err = Error::UnexpectedObjectType("bogus".to_string());
        assert_eq!(err.to_string(), "unexpected object type: bogus");
    }

    #[test]
    fn errors_are_plain_equatable_values() {
        assert_eq!(Error::TypeNameNotFound, Error::TypeNameNotFound);
        assert_ne!(
            Error::UnexpectedObjectType("a".into()),
            Error::UnexpectedObjectType("b".into())
        );
    }
}
