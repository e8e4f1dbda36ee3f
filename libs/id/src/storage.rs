//! Driver-neutral storage interchange.
//!
//! Ids are written to storage as canonical text. Reads accept text, UTF-8
//! bytes holding that text, or a native UUID column value.
//!
//! Reading `NULL` into a plain [`Id`] yields [`Id::NIL`] without an error, so
//! an absent column and an explicit nil id look the same. Use
//! [`NullableId`] where the difference matters.

use std::borrow::Cow;

use uuid::Uuid;

use crate::error::IdError;
use crate::id::Id;
use crate::nullable::NullableId;

/// A single column value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue<'a> {
    Null,
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    /// A native UUID column.
    Uuid(Uuid),
    Integer(i64),
    Real(f64),
    Boolean(bool),
}

impl StorageValue<'_> {
    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            StorageValue::Null => "null",
            StorageValue::Text(_) => "text",
            StorageValue::Bytes(_) => "bytes",
            StorageValue::Uuid(_) => "uuid",
            StorageValue::Integer(_) => "integer",
            StorageValue::Real(_) => "real",
            StorageValue::Boolean(_) => "boolean",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, StorageValue::Null)
    }

    /// Detaches the value from any borrowed buffer.
    #[must_use]
    pub fn into_owned(self) -> StorageValue<'static> {
        match self {
            StorageValue::Null => StorageValue::Null,
            StorageValue::Text(s) => StorageValue::Text(Cow::Owned(s.into_owned())),
            StorageValue::Bytes(b) => StorageValue::Bytes(Cow::Owned(b.into_owned())),
            StorageValue::Uuid(u) => StorageValue::Uuid(u),
            StorageValue::Integer(i) => StorageValue::Integer(i),
            StorageValue::Real(r) => StorageValue::Real(r),
            StorageValue::Boolean(b) => StorageValue::Boolean(b),
        }
    }
}

impl<'a> From<&'a str> for StorageValue<'a> {
    fn from(s: &'a str) -> Self {
        StorageValue::Text(Cow::Borrowed(s))
    }
}

impl From<String> for StorageValue<'_> {
    fn from(s: String) -> Self {
        StorageValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a [u8]> for StorageValue<'a> {
    fn from(b: &'a [u8]) -> Self {
        StorageValue::Bytes(Cow::Borrowed(b))
    }
}

impl From<Vec<u8>> for StorageValue<'_> {
    fn from(b: Vec<u8>) -> Self {
        StorageValue::Bytes(Cow::Owned(b))
    }
}

impl From<i64> for StorageValue<'_> {
    fn from(i: i64) -> Self {
        StorageValue::Integer(i)
    }
}

impl From<f64> for StorageValue<'_> {
    fn from(r: f64) -> Self {
        StorageValue::Real(r)
    }
}

impl From<bool> for StorageValue<'_> {
    fn from(b: bool) -> Self {
        StorageValue::Boolean(b)
    }
}

impl Id {
    /// Canonical text for a storage column.
    #[must_use]
    pub fn to_storage(&self) -> StorageValue<'static> {
        StorageValue::Text(Cow::Owned(self.to_canonical_string()))
    }

    /// Reads an id from a storage column.
    ///
    /// `NULL` yields [`Id::NIL`].
    pub fn from_storage(value: &StorageValue<'_>) -> Result<Self, IdError> {
        match value {
            StorageValue::Null => Ok(Id::NIL),
            StorageValue::Text(s) => Id::parse_canonical(s),
            StorageValue::Bytes(b) => {
                let s = std::str::from_utf8(b).map_err(|e| {
                    IdError::invalid_canonical(format!("stored bytes are not UTF-8: {e}"))
                })?;
                Id::parse_canonical(s)
            }
            StorageValue::Uuid(u) => Ok(Id::from_uuid(*u)),
            other => Err(IdError::TypeMismatch {
                found: other.kind().to_string(),
            }),
        }
    }
}

impl NullableId {
    /// `NULL` when absent, canonical text otherwise.
    #[must_use]
    pub fn to_storage(&self) -> StorageValue<'static> {
        match self.as_id() {
            Some(id) => id.to_storage(),
            None => StorageValue::Null,
        }
    }

    /// Reads an optional id from a storage column.
    pub fn from_storage(value: &StorageValue<'_>) -> Result<Self, IdError> {
        if value.is_null() {
            return Ok(NullableId::NULL);
        }
        Id::from_storage(value).map(NullableId::decoded)
    }
}
