//! `ibc.applications.transfer.v1` and `ibc.core.client.v1` messages.

use daocodec_core::codec::serde_str_u64;
use daocodec_core::{Coin, CodecEntry, TypeUrl};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Height {
    #[prost(uint64, tag = "1")]
    #[serde(default, with = "serde_str_u64")]
    pub revision_number: u64,
    #[prost(uint64, tag = "2")]
    #[serde(default, with = "serde_str_u64")]
    pub revision_height: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgTransfer {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub source_port: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub source_channel: String,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub token: Option<Coin>,
    #[prost(string, tag = "4")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "5")]
    #[serde(default)]
    pub receiver: String,
    #[prost(message, optional, tag = "6")]
    #[serde(default)]
    pub timeout_height: Option<Height>,
    #[prost(uint64, tag = "7")]
    #[serde(default, with = "serde_str_u64")]
    pub timeout_timestamp: u64,
    #[prost(string, tag = "8")]
    #[serde(default)]
    pub memo: String,
}

impl TypeUrl for MsgTransfer {
    const TYPE_URL: &'static str = "/ibc.applications.transfer.v1.MsgTransfer";
}

pub fn ibc_types() -> Vec<CodecEntry> {
    vec![CodecEntry::of::<MsgTransfer>()]
}
