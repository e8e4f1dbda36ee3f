//! Macros for defining typed ID types.

/// Macro to define a typed id over [`Id`](crate::Id).
///
/// This generates a newtype wrapper with:
/// - `new()` to generate a fresh ID
/// - `parse_short()` and `parse_canonical()` to parse from string
/// - `Display` and `FromStr` implementations (canonical form)
/// - `Serialize` and `Deserialize` implementations (short form)
/// - `Ord`, `Hash`, and other standard traits
///
/// `Default` is the nil id, like [`Id`](crate::Id) itself.
///
/// # Example
///
/// ```
/// compact_uuid::define_id!(UserId);
///
/// let user_id = UserId::new();
/// let parsed = UserId::parse_short(&user_id.to_short_string()).unwrap();
/// assert_eq!(user_id, parsed);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        /// A typed ID for this resource type.
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Id);

        impl $name {
            /// Creates a new ID with a fresh random UUID.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::Id::new())
            }

            /// Creates a typed ID from an untyped one.
            #[must_use]
            pub const fn from_id(id: $crate::Id) -> Self {
                Self(id)
            }

            /// Returns the untyped ID.
            #[must_use]
            pub const fn id(&self) -> $crate::Id {
                self.0
            }

            #[must_use]
            pub const fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// Parses an ID from its short form.
            pub fn parse_short(s: &str) -> Result<Self, $crate::IdError> {
                $crate::Id::parse_short(s).map(Self)
            }

            /// Parses an ID from its canonical form.
            pub fn parse_canonical(s: &str) -> Result<Self, $crate::IdError> {
                $crate::Id::parse_canonical(s).map(Self)
            }

            #[must_use]
            pub fn to_short_string(&self) -> String {
                self.0.to_short_string()
            }

            #[must_use]
            pub fn to_canonical_string(&self) -> String {
                self.0.to_canonical_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_canonical(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::Id as $crate::__private::serde::Deserialize>::deserialize(deserializer)
                    .map(Self)
            }
        }

        impl From<$crate::Id> for $name {
            fn from(id: $crate::Id) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $crate::Id {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<$crate::Id> for $name {
            fn as_ref(&self) -> &$crate::Id {
                &self.0
            }
        }
    };
}
