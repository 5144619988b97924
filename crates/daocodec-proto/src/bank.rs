//! `cosmos.bank.v1beta1` messages.

use daocodec_core::{Coin, CodecEntry, TypeUrl};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub from_address: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    #[serde(default)]
    pub amount: Vec<Coin>,
}

impl TypeUrl for MsgSend {
    const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.MsgSend";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    #[serde(default)]
    pub coins: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    #[serde(default)]
    pub coins: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMultiSend {
    #[prost(message, repeated, tag = "1")]
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[prost(message, repeated, tag = "2")]
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl TypeUrl for MsgMultiSend {
    const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.MsgMultiSend";
}

pub fn bank_types() -> Vec<CodecEntry> {
    vec![CodecEntry::of::<MsgSend>(), CodecEntry::of::<MsgMultiSend>()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn msg_send_wire_bytes() {
        let msg = MsgSend {
            from_address: "addrX".into(),
            to_address: "addr1".into(),
            amount: vec![Coin::new("100", "utoken")],
        };
        let bytes = msg.encode_to_vec();
        let back = MsgSend::decode(bytes.as_slice()).unwrap();
        assert_eq!(msg, back);
    }

    #[test]
    fn msg_send_json_is_camel_case() {
        let msg = MsgSend {
            from_address: "addrX".into(),
            to_address: "addr1".into(),
            amount: vec![],
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["fromAddress"], "addrX");
        assert_eq!(json["toAddress"], "addr1");
    }
}
