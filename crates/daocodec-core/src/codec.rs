//! Codec-entry plumbing: the `TypeUrl` trait implemented by every wire
//! message, the `CodecEntry` a registry stores per type URL, and the
//! serde helpers that keep the JSON representation on proto3-JSON
//! conventions (bytes as base64, 64-bit integers as decimal strings).

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::CodecError;

/// Associates a wire message with its fully-qualified type URL.
pub trait TypeUrl {
    const TYPE_URL: &'static str;
}

/// A registry entry: binary encode/decode functions for one type URL.
///
/// The functions are monomorphized `fn` items, so entries are plain
/// data — cheap to build at startup and safe to share between threads
/// without locking.
#[derive(Clone, Copy)]
pub struct CodecEntry {
    pub type_url: &'static str,
    encode: fn(&Value) -> Result<Vec<u8>, CodecError>,
    decode: fn(&[u8]) -> Result<Value, CodecError>,
}

impl CodecEntry {
    /// Build the entry for message type `M`.
    pub fn of<M>() -> Self
    where
        M: Message + TypeUrl + Default + Serialize + DeserializeOwned,
    {
        CodecEntry {
            type_url: M::TYPE_URL,
            encode: encode_msg::<M>,
            decode: decode_msg::<M>,
        }
    }

    /// Encode a JSON representation of this message into wire bytes.
    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, CodecError> {
        (self.encode)(value)
    }

    /// Decode wire bytes into the JSON representation of this message.
    pub fn decode(&self, bytes: &[u8]) -> Result<Value, CodecError> {
        (self.decode)(bytes)
    }
}

impl std::fmt::Debug for CodecEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecEntry")
            .field("type_url", &self.type_url)
            .finish()
    }
}

fn encode_msg<M: Message + DeserializeOwned>(value: &Value) -> Result<Vec<u8>, CodecError> {
    let msg: M = serde_json::from_value(value.clone())?;
    Ok(msg.encode_to_vec())
}

fn decode_msg<M: Message + Default + Serialize>(bytes: &[u8]) -> Result<Value, CodecError> {
    let msg = M::decode(bytes)?;
    Ok(serde_json::to_value(msg)?)
}

/// Serde `with` module: `Vec<u8>` ⇄ base64 string (proto3 JSON).
pub mod serde_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}

/// Serde `with` module: `u64` ⇄ decimal string (proto3 JSON).
/// Deserialization also accepts plain JSON numbers.
pub mod serde_str_u64 {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(n: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&n.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s
                .parse()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"a decimal string")),
            serde_json::Value::Number(n) => n.as_u64().ok_or_else(|| {
                de::Error::invalid_value(Unexpected::Other("number"), &"an unsigned 64-bit integer")
            }),
            other => Err(de::Error::invalid_type(
                Unexpected::Other(other_kind(&other)),
                &"a string or number",
            )),
        }
    }

    fn other_kind(v: &serde_json::Value) -> &'static str {
        match v {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
            _ => "value",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
    struct Ping {
        #[prost(string, tag = "1")]
        #[serde(default)]
        name: String,
        #[prost(uint64, tag = "2")]
        #[serde(default, with = "serde_str_u64")]
        seq: u64,
    }

    impl TypeUrl for Ping {
        const TYPE_URL: &'static str = "/test.Ping";
    }

    #[test]
    fn entry_roundtrip() {
        let entry = CodecEntry::of::<Ping>();
        let json = serde_json::json!({ "name": "hi", "seq": "42" });
        let bytes = entry.encode(&json).unwrap();
        let back = entry.decode(&bytes).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn str_u64_accepts_numbers() {
        let ping: Ping = serde_json::from_value(serde_json::json!({ "name": "n", "seq": 7 }))
            .unwrap();
        assert_eq!(ping.seq, 7);
    }

    #[test]
    fn entry_rejects_wrong_shape() {
        let entry = CodecEntry::of::<Ping>();
        let err = entry.encode(&serde_json::json!({ "seq": [] })).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }
}
