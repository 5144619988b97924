//! `cosmos.staking.v1beta1` messages.

use daocodec_core::{Coin, CodecEntry, TypeUrl};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgDelegate {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub amount: Option<Coin>,
}

impl TypeUrl for MsgDelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgDelegate";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgUndelegate {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    #[serde(default)]
    pub amount: Option<Coin>,
}

impl TypeUrl for MsgUndelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgUndelegate";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgBeginRedelegate {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub validator_src_address: String,
    #[prost(string, tag = "3")]
    #[serde(default)]
    pub validator_dst_address: String,
    #[prost(message, optional, tag = "4")]
    #[serde(default)]
    pub amount: Option<Coin>,
}

impl TypeUrl for MsgBeginRedelegate {
    const TYPE_URL: &'static str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
}

pub fn staking_types() -> Vec<CodecEntry> {
    vec![
        CodecEntry::of::<MsgDelegate>(),
        CodecEntry::of::<MsgUndelegate>(),
        CodecEntry::of::<MsgBeginRedelegate>(),
    ]
}
