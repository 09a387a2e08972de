#![warn(rust_2018_idioms)]

//! # mediachain-cbor
//!
//! The content-addressed data model and deterministic CBOR serialization
//! layer for a Mediachain-style journal: the canonical on-the-wire encoding
//! of every journal object, the symmetric decoder that reconstructs typed
//! records — including polymorphic chain cells and journal entries — from
//! untyped CBOR, and the multihash-based reference scheme that makes every
//! record content-addressed.
//!
//! This is the binary contract of the wider system: every transactor,
//! datastore, and peer depends on bit-identical encoding to compute matching
//! content addresses, so the codec is strict on the way in (rejects
//! non-minimal integers, NaN/infinite floats, malformed references) and
//! exact on the way out (sorts map keys, shortest-form integers,
//! definite-length everything).
//!
//! # Usage
//!
//! ```
//! use mediachain_cbor::prelude::*;
//!
//! let mut meta = CborMap::new();
//! meta.insert("name", CborValue::text("Alice"));
//! let entity = Record::Entity(Entity::new(meta));
//!
//! let bytes = to_cbor_bytes(&entity);
//! let decoded = from_cbor_bytes(&bytes, &DeserializerMap::default()).unwrap();
//! assert_eq!(decoded, entity);
//! ```
//!
//! Content-addressing a record:
//!
//! ```
//! use mediachain_cbor::prelude::*;
//!
//! let entity = Record::Entity(Entity::new(CborMap::new()));
//! let reference = Reference::for_bytes(&to_cbor_bytes(&entity));
//! assert_eq!(reference.hash().digest().len(), 32);
//! ```

pub mod cbor;
pub mod error;
pub mod multihash;
pub mod record;
pub mod reference;
pub mod registry;
pub mod serializer;

mod deserializer;

pub use deserializer::{from_cbor, from_cbor_bytes, DeserializerMap};
pub use error::Error;

#[cfg(any(test, feature = "proptest"))]
pub mod arbitrary;

pub mod prelude;
