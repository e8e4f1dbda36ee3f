//! sqlx adapters for Postgres.
//!
//! Ids bind as `TEXT` holding the canonical form. Decoding accepts text-like
//! columns, `BYTEA` holding UTF-8 canonical text, and native `UUID` columns.
//! Binding into a `UUID` column needs an explicit cast (`$1::uuid`).

use std::borrow::Cow;

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type, TypeInfo, ValueRef};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::IdError;
use crate::id::Id;
use crate::nullable::NullableId;
use crate::storage::StorageValue;

fn accepts(ty: &PgTypeInfo) -> bool {
    <String as Type<Postgres>>::compatible(ty)
        || <Vec<u8> as Type<Postgres>>::compatible(ty)
        || <Uuid as Type<Postgres>>::compatible(ty)
}

/// Maps a raw column onto the driver-neutral value.
fn storage_value(value: PgValueRef<'_>) -> Result<StorageValue<'_>, BoxDynError> {
    if value.is_null() {
        return Ok(StorageValue::Null);
    }

    let ty = value.type_info().into_owned();

    if <String as Type<Postgres>>::compatible(&ty) {
        let text = <&str as Decode<Postgres>>::decode(value)?;
        return Ok(StorageValue::Text(Cow::Borrowed(text)));
    }

    if <Vec<u8> as Type<Postgres>>::compatible(&ty) {
        let bytes = <Vec<u8> as Decode<Postgres>>::decode(value)?;
        return Ok(StorageValue::Bytes(Cow::Owned(bytes)));
    }

    if <Uuid as Type<Postgres>>::compatible(&ty) {
        let uuid = <Uuid as Decode<Postgres>>::decode(value)?;
        return Ok(StorageValue::Uuid(uuid));
    }

    debug!(column_type = ty.name(), "rejecting column type for id");
    Err(IdError::TypeMismatch {
        found: ty.name().to_string(),
    }
    .into())
}

impl Type<Postgres> for Id {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        accepts(ty)
    }
}

impl Encode<'_, Postgres> for Id {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as Encode<Postgres>>::encode_by_ref(&self.to_canonical_string(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for Id {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let stored = storage_value(value)?;
        if stored.is_null() {
            trace!("NULL read into a non-nullable id, using the nil id");
        }
        Ok(Id::from_storage(&stored)?)
    }
}

impl Type<Postgres> for NullableId {
    fn type_info() -> PgTypeInfo {
        <Id as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        accepts(ty)
    }
}

impl Encode<'_, Postgres> for NullableId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        match self.as_id() {
            Some(id) => <Id as Encode<Postgres>>::encode_by_ref(id, buf),
            None => Ok(IsNull::Yes),
        }
    }
}

impl<'r> Decode<'r, Postgres> for NullableId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let stored = storage_value(value)?;
        Ok(NullableId::from_storage(&stored)?)
    }
}
