//! The wire type registry and binary codec primitives.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use daocodec_core::{Any, CodecEntry, CodecError, DecodedAny, RegistryError};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::OnceLock;

/// Immutable type URL → codec entry mapping.
///
/// Built once from the fixed module descriptor sets; exact-string
/// lookups only.
#[derive(Debug)]
pub struct ProtoRegistry {
    entries: IndexMap<&'static str, CodecEntry>,
}

impl ProtoRegistry {
    /// Merge module descriptor sets into a registry.
    ///
    /// Two sets shipping the same type URL is a packaging bug; the
    /// error is meant to be treated as fatal at startup, not handled
    /// at runtime.
    pub fn from_modules(
        modules: impl IntoIterator<Item = Vec<CodecEntry>>,
    ) -> Result<Self, RegistryError> {
        let mut entries = IndexMap::new();
        for module in modules {
            for entry in module {
                if entries.insert(entry.type_url, entry).is_some() {
                    return Err(RegistryError::DuplicateTypeUrl {
                        type_url: entry.type_url,
                    });
                }
            }
        }
        Ok(ProtoRegistry { entries })
    }

    pub fn lookup(&self, type_url: &str) -> Option<&CodecEntry> {
        self.entries.get(type_url)
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.entries.contains_key(type_url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type URLs in merge order.
    pub fn type_urls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    fn entry(&self, type_url: &str) -> Result<&CodecEntry, CodecError> {
        self.lookup(type_url).ok_or_else(|| CodecError::UnknownType {
            type_url: type_url.to_string(),
        })
    }

    /// Encode a message's JSON representation into wire bytes.
    pub fn encode(&self, type_url: &str, value: &Value) -> Result<Vec<u8>, CodecError> {
        self.entry(type_url)?.encode(value)
    }

    /// Decode wire bytes (or a base64 string of them) into the
    /// message's JSON representation.
    pub fn decode(
        &self,
        type_url: &str,
        value: impl Into<RawProtoValue>,
    ) -> Result<Value, CodecError> {
        let entry = self.entry(type_url)?;
        match value.into() {
            RawProtoValue::Bytes(bytes) => entry.decode(&bytes),
            RawProtoValue::Base64(s) => entry.decode(&BASE64.decode(s)?),
        }
    }
}

/// An encoded payload as callers hand it over: raw bytes, or the base64
/// string persisted in JSON storage.
#[derive(Debug, Clone)]
pub enum RawProtoValue {
    Bytes(Vec<u8>),
    Base64(String),
}

impl From<Vec<u8>> for RawProtoValue {
    fn from(bytes: Vec<u8>) -> Self {
        RawProtoValue::Bytes(bytes)
    }
}

impl From<&[u8]> for RawProtoValue {
    fn from(bytes: &[u8]) -> Self {
        RawProtoValue::Bytes(bytes.to_vec())
    }
}

impl From<String> for RawProtoValue {
    fn from(s: String) -> Self {
        RawProtoValue::Base64(s)
    }
}

impl From<&str> for RawProtoValue {
    fn from(s: &str) -> Self {
        RawProtoValue::Base64(s.to_string())
    }
}

/// The process-wide registry, built on first use from every module
/// descriptor set in `daocodec-proto`.
///
/// # Panics
/// Panics on first use if two descriptor sets collide on a type URL.
/// That is a packaging bug, not a runtime condition.
pub fn registry() -> &'static ProtoRegistry {
    static REGISTRY: OnceLock<ProtoRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        ProtoRegistry::from_modules(daocodec_proto::all_module_types())
            .unwrap_or_else(|e| panic!("broken type registry: {e}"))
    })
}

/// Encode a protobuf message value from its JSON representation into a
/// byte buffer, via the global registry.
pub fn encode_proto_value(type_url: &str, value: &Value) -> Result<Vec<u8>, CodecError> {
    registry().encode(type_url, value)
}

/// Decode an encoded protobuf message's value from raw bytes or a
/// base64 string into its JSON representation, via the global registry.
pub fn decode_proto_value(
    type_url: &str,
    value: impl Into<RawProtoValue>,
) -> Result<Value, CodecError> {
    registry().decode(type_url, value)
}

/// Decode a wire message from `Any` into its JSON representation.
pub fn decode_raw_proto_msg(any: &Any) -> Result<DecodedAny, CodecError> {
    Ok(DecodedAny {
        type_url: any.type_url.clone(),
        value: decode_proto_value(&any.type_url, any.value.as_slice())?,
    })
}
