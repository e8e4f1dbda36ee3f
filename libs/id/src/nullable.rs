//! Optional ids for nullable references.

use crate::id::Id;

/// An [`Id`] that may be absent, e.g. an optional foreign key.
///
/// Serializes as `null` when absent and as the short form otherwise.
///
/// The constructors treat [`Id::NIL`] as absent. Decoding (serde and storage
/// reads) marks any successfully decoded value as present, including an
/// explicit nil id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullableId(Option<Id>);

impl NullableId {
    /// An absent id.
    pub const NULL: Self = Self(None);

    /// Wraps an id; the nil id becomes absent.
    #[must_use]
    pub const fn new(id: Id) -> Self {
        if id.is_zero() {
            Self::NULL
        } else {
            Self(Some(id))
        }
    }

    /// Copies an optional id; `None` and the nil id become absent.
    #[must_use]
    pub fn from_ref(id: Option<&Id>) -> Self {
        id.map_or(Self::NULL, |id| Self::new(*id))
    }

    /// Marks a decoded value as present without the nil check.
    pub(crate) const fn decoded(id: Id) -> Self {
        Self(Some(id))
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Borrows the id if present.
    #[must_use]
    pub const fn as_id(&self) -> Option<&Id> {
        self.0.as_ref()
    }

    #[must_use]
    pub const fn into_option(self) -> Option<Id> {
        self.0
    }

    /// Returns the id, or [`Id::NIL`] when absent.
    #[must_use]
    pub fn id_or_nil(&self) -> Id {
        self.0.unwrap_or(Id::NIL)
    }
}

impl From<Id> for NullableId {
    fn from(id: Id) -> Self {
        Self::new(id)
    }
}

impl From<Option<Id>> for NullableId {
    fn from(id: Option<Id>) -> Self {
        Self::from_ref(id.as_ref())
    }
}

impl From<NullableId> for Option<Id> {
    fn from(id: NullableId) -> Self {
        id.0
    }
}

impl serde::Serialize for NullableId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.0 {
            Some(id) => serializer.serialize_some(id),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for NullableId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = <Option<Id> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(id.map_or(Self::NULL, Self::decoded))
    }
}
