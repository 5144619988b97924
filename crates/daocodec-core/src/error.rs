//! Error types for the DaoCodec transcoding pipeline.

use thiserror::Error;

/// Errors from the binary codec primitives and registry lookups.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Type {type_url} not found in registry")]
    UnknownType { type_url: String },

    #[error("Protobuf encode failed: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("Protobuf decode failed: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base64 value: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Errors from the canonical ⇄ wire transcoder.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("Unsupported {module} module message")]
    UnsupportedMessage { module: &'static str },

    #[error("Malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl TranscodeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        TranscodeError::MalformedMessage {
            reason: reason.into(),
        }
    }
}

/// Errors raised while constructing a registry.
///
/// A duplicate type URL means two module descriptor sets ship the same
/// schema — a packaging bug, fatal at startup rather than recoverable
/// at runtime.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type URL in registry: {type_url}")]
    DuplicateTypeUrl { type_url: &'static str },
}
