//! Payload codec: the boundary between JSON objects and typed values
//!
//! Records decode field by field through [`FieldReader`] so every failure
//! names its field. Tagged unions match the `type` discriminator against
//! their declared variant list before serde reads the variant's fields.

use crate::error::{DecodeError, EncodeError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Key carrying the variant name of every polymorphic payload
pub const DISCRIMINATOR: &str = "type";

/// A JSON object payload
pub type Payload = Map<String, Value>;

/// A value that crosses the JSON boundary
pub trait TdObject: Serialize + Sized {
    /// Name used in error messages
    const TYPE_NAME: &'static str;

    /// Decode from a structured payload
    fn decode(payload: &Value) -> Result<Self, DecodeError>;

    /// Decode from JSON text
    fn decode_str(json: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::decode(&value)
    }

    /// Encode into a structured payload
    fn encode(&self) -> Result<Value, EncodeError> {
        serde_json::to_value(self).map_err(|source| EncodeError {
            type_name: Self::TYPE_NAME,
            source,
        })
    }
}

/// A closed sum type tagged by [`DISCRIMINATOR`]
pub trait TaggedUnion: TdObject + DeserializeOwned {
    /// Every discriminator value this union accepts
    const VARIANTS: &'static [&'static str];
}

/// Decode a tagged union by explicit discriminator matching.
pub fn decode_variant<T: TaggedUnion>(payload: &Value) -> Result<T, DecodeError> {
    let fields = payload.as_object().ok_or(DecodeError::NotAnObject {
        type_name: T::TYPE_NAME,
    })?;

    let Some(Value::String(discriminator)) = fields.get(DISCRIMINATOR) else {
        return Err(DecodeError::MissingDiscriminator {
            type_name: T::TYPE_NAME,
        });
    };

    if !T::VARIANTS.contains(&discriminator.as_str()) {
        debug!(
            "Rejecting {} payload with discriminator '{}'",
            T::TYPE_NAME,
            discriminator
        );
        return Err(DecodeError::UnknownDiscriminator {
            type_name: T::TYPE_NAME,
            discriminator: discriminator.clone(),
        });
    }

    T::deserialize(payload).map_err(|source| DecodeError::InvalidVariant {
        type_name: T::TYPE_NAME,
        discriminator: discriminator.clone(),
        source,
    })
}

/// Reads named fields out of a record payload
pub(crate) struct FieldReader<'a> {
    type_name: &'static str,
    fields: &'a Payload,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(type_name: &'static str, payload: &'a Value) -> Result<Self, DecodeError> {
        let fields = payload
            .as_object()
            .ok_or(DecodeError::NotAnObject { type_name })?;
        Ok(Self { type_name, fields })
    }

    /// `null` is treated the same as an absent key
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    fn missing(&self, field: &str) -> DecodeError {
        DecodeError::MissingField {
            type_name: self.type_name,
            field: field.to_string(),
        }
    }

    fn scalar<T: DeserializeOwned>(&self, field: &str, value: &Value) -> Result<T, DecodeError> {
        T::deserialize(value).map_err(|source| DecodeError::InvalidField {
            type_name: self.type_name,
            field: field.to_string(),
            source,
        })
    }

    fn nested<T: TdObject>(&self, field: &str, value: &Value) -> Result<T, DecodeError> {
        T::decode(value).map_err(|source| DecodeError::Nested {
            type_name: self.type_name,
            field: field.to_string(),
            source: Box::new(source),
        })
    }

    pub(crate) fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T, DecodeError> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        self.scalar(field, value)
    }

    pub(crate) fn optional<T: DeserializeOwned>(
        &self,
        field: &str,
    ) -> Result<Option<T>, DecodeError> {
        self.get(field)
            .map(|value| self.scalar(field, value))
            .transpose()
    }

    pub(crate) fn required_object<T: TdObject>(&self, field: &str) -> Result<T, DecodeError> {
        let value = self.get(field).ok_or_else(|| self.missing(field))?;
        self.nested(field, value)
    }

    pub(crate) fn optional_object<T: TdObject>(
        &self,
        field: &str,
    ) -> Result<Option<T>, DecodeError> {
        self.get(field)
            .map(|value| self.nested(field, value))
            .transpose()
    }
}
