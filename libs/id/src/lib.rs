//! # compact-uuid
//!
//! UUID identifiers with two textual forms: compact text for APIs and
//! canonical text for storage.
//!
//! ## Design Principles
//!
//! - An [`Id`] is exactly 128 bits; both text forms are lossless
//! - JSON carries the short form, databases carry the canonical form
//! - The all-zero id is a valid value but means "unset"
//! - Optional references use [`NullableId`], which serializes as `null`
//!
//! ## ID Format
//!
//! | form      | example                                | length |
//! |-----------|----------------------------------------|--------|
//! | canonical | `8eca1fe1-a833-4de0-b487-b54785cc656e` | 36     |
//! | short     | `TR7kT7YgYjHN5ET8Yagssh`               | 22     |
//!
//! The short form is the 128-bit value written in base 57 over
//! [`DEFAULT_SYMBOLS`], most significant digit first and padded to a fixed
//! width. Other alphabets can be used through [`Alphabet`].
//!
//! ```
//! use compact_uuid::{Id, NullableId};
//!
//! let id = Id::parse_canonical("8eca1fe1-a833-4de0-b487-b54785cc656e").unwrap();
//! assert_eq!(id.to_short_string(), "TR7kT7YgYjHN5ET8Yagssh");
//!
//! let manager = NullableId::new(Id::NIL);
//! assert!(!manager.is_valid());
//! ```

mod alphabet;
mod error;
mod id;
mod macros;
mod nullable;
#[cfg(feature = "postgres")]
mod pg;
mod storage;

pub use alphabet::{Alphabet, DEFAULT_SYMBOLS};
pub use error::{Encoding, IdError};
pub use id::Id;
pub use nullable::NullableId;
pub use storage::StorageValue;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
