//! Error types for payload decoding and encoding

use thiserror::Error;

/// Failure to build a typed value from a JSON payload.
///
/// Decoding is all-or-nothing: when any field fails, no value is produced.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input text was not valid JSON
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload was not a JSON object
    #[error("expected a JSON object for {type_name}")]
    NotAnObject {
        /// Type being decoded
        type_name: &'static str,
    },

    /// A required field was absent or null
    #[error("{type_name}: missing required field `{field}`")]
    MissingField {
        /// Type being decoded
        type_name: &'static str,
        /// Field name
        field: String,
    },

    /// A field was present but had the wrong type or was out of range
    #[error("{type_name}: invalid value for `{field}`: {source}")]
    InvalidField {
        /// Type being decoded
        type_name: &'static str,
        /// Field name
        field: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Polymorphic payload had no string `type` key
    #[error("{type_name}: missing `type` discriminator")]
    MissingDiscriminator {
        /// Union being decoded
        type_name: &'static str,
    },

    /// Polymorphic payload named a variant this union does not have
    #[error("{type_name}: unrecognized discriminator `{discriminator}`")]
    UnknownDiscriminator {
        /// Union being decoded
        type_name: &'static str,
        /// The `type` value found in the payload
        discriminator: String,
    },

    /// Discriminator matched but the variant's fields did not
    #[error("{type_name}: invalid `{discriminator}` payload: {source}")]
    InvalidVariant {
        /// Union being decoded
        type_name: &'static str,
        /// The matched `type` value
        discriminator: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A nested value failed to decode
    #[error("{type_name}: field `{field}`: {source}")]
    Nested {
        /// Outer type being decoded
        type_name: &'static str,
        /// Field holding the nested value
        field: String,
        /// Error raised by the nested value
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Dotted path to the offending field, if the error points at one.
    ///
    /// `sender.type` for an unknown sender variant, `chat_id` for a missing
    /// chat id, `None` for malformed JSON or a non-object payload.
    #[must_use]
    pub fn field_path(&self) -> Option<String> {
        match self {
            Self::Json(_) | Self::NotAnObject { .. } | Self::InvalidVariant { .. } => None,
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => {
                Some(field.clone())
            }
            Self::MissingDiscriminator { .. } | Self::UnknownDiscriminator { .. } => {
                Some(crate::payload::DISCRIMINATOR.to_string())
            }
            Self::Nested { field, source, .. } => match source.field_path() {
                Some(inner) => Some(format!("{field}.{inner}")),
                None => Some(field.clone()),
            },
        }
    }
}

/// Failure to turn a typed value back into a JSON payload.
#[derive(Debug, Error)]
#[error("failed to encode {type_name}: {source}")]
pub struct EncodeError {
    /// Type being encoded
    pub type_name: &'static str,
    /// Underlying serde error
    #[source]
    pub source: serde_json::Error,
}
