//! The wire-protocol `Any` pair: a fully-qualified type URL naming a
//! registered binary schema, and the binary-encoded payload for it.

use serde::{Deserialize, Serialize};

/// `google.protobuf.Any` — the polymorphic wire-message envelope used
/// by the Cosmos SDK for every transaction message.
///
/// Type URLs are slash-delimited fully-qualified names, e.g.
/// `/cosmos.bank.v1beta1.MsgSend`.
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Any {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub type_url: String,

    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "crate::codec::serde_base64")]
    pub value: Vec<u8>,
}

impl Any {
    pub const TYPE_URL: &'static str = "/google.protobuf.Any";

    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }
}

/// The JSON-decoded form of an [`Any`], used for display and for the
/// stargate passthrough escape hatch in the canonical message union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedAny {
    pub type_url: String,
    pub value: serde_json::Value,
}

impl DecodedAny {
    pub fn new(type_url: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            type_url: type_url.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn any_proto_roundtrip() {
        let any = Any::new("/cosmos.bank.v1beta1.MsgSend", vec![1, 2, 3]);
        let bytes = any.encode_to_vec();
        let back = Any::decode(bytes.as_slice()).unwrap();
        assert_eq!(any, back);
    }

    #[test]
    fn any_json_value_is_base64() {
        let any = Any::new("/google.protobuf.Timestamp", vec![8, 1]);
        let json = serde_json::to_value(&any).unwrap();
        assert_eq!(json["typeUrl"], "/google.protobuf.Timestamp");
        assert_eq!(json["value"], "CAE=");
        let back: Any = serde_json::from_value(json).unwrap();
        assert_eq!(any, back);
    }
}
