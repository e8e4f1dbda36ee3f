//! The [`Id`] value type.
//!
//! An `Id` is a 128-bit UUID with two textual forms:
//!
//! - canonical: `8eca1fe1-a833-4de0-b487-b54785cc656e`, used for storage
//! - short: `TR7kT7YgYjHN5ET8Yagssh`, used for JSON and URLs
//!
//! `Display`/`FromStr` use the canonical form; serde uses the short form.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::alphabet::Alphabet;
use crate::error::IdError;

/// A UUID that serializes as short text and stores as canonical text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id {
    uuid: Uuid,
}

impl Id {
    /// The all-zero id, used as the "unset" sentinel.
    pub const NIL: Self = Self::from_uuid(Uuid::nil());

    /// Length of the canonical hyphenated form.
    pub const CANONICAL_LEN: usize = 36;

    /// Length of the short form over the default alphabet.
    pub const SHORT_LEN: usize = Alphabet::DEFAULT.encoded_len();

    /// Generates a fresh random (v4) id.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self { uuid }
    }

    /// Wraps a raw 128-bit value.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self::from_uuid(Uuid::from_u128(value))
    }

    /// Wraps 16 big-endian bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self::from_uuid(Uuid::from_bytes(bytes))
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.uuid.as_u128()
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.uuid.as_bytes()
    }

    /// Returns true for the all-zero id.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.uuid.is_nil()
    }

    /// Parses the canonical hyphenated form.
    ///
    /// Exactly 36 characters with hyphens at offsets 8, 13, 18 and 23; hex
    /// digits may be upper or lower case. Braced, URN and unhyphenated forms
    /// are rejected.
    pub fn parse_canonical(s: &str) -> Result<Self, IdError> {
        if s.len() != Self::CANONICAL_LEN {
            return Err(IdError::invalid_canonical(format!(
                "expected {} characters, got {}",
                Self::CANONICAL_LEN,
                s.chars().count()
            )));
        }

        Uuid::try_parse(s)
            .map(Self::from_uuid)
            .map_err(|e| IdError::invalid_canonical(e.to_string()))
    }

    /// Parses the short form over the default alphabet.
    pub fn parse_short(s: &str) -> Result<Self, IdError> {
        Self::parse_short_with(s, &Alphabet::DEFAULT)
    }

    /// Parses the short form over a custom alphabet.
    pub fn parse_short_with(s: &str, alphabet: &Alphabet) -> Result<Self, IdError> {
        alphabet.decode(s).map(Self::from_u128)
    }

    /// Formats the canonical hyphenated lowercase form.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.uuid.hyphenated().to_string()
    }

    /// Formats the short form over the default alphabet.
    #[must_use]
    pub fn to_short_string(&self) -> String {
        self.to_short_string_with(&Alphabet::DEFAULT)
    }

    /// Formats the short form over a custom alphabet.
    #[must_use]
    pub fn to_short_string_with(&self, alphabet: &Alphabet) -> String {
        alphabet.encode(self.as_u128())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid.hyphenated(), f)
    }
}

impl FromStr for Id {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_canonical(s)
    }
}

impl From<Uuid> for Id {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<Id> for Uuid {
    fn from(id: Id) -> Self {
        id.uuid
    }
}

impl AsRef<Uuid> for Id {
    fn as_ref(&self) -> &Uuid {
        &self.uuid
    }
}

impl serde::Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_short_string())
    }
}

impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse_short(&s).map_err(serde::de::Error::custom)
    }
}
