//! `cosmos.distribution.v1beta1` messages.

use daocodec_core::{CodecEntry, TypeUrl};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgWithdrawDelegatorReward {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub validator_address: String,
}

impl TypeUrl for MsgWithdrawDelegatorReward {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgSetWithdrawAddress {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub withdraw_address: String,
}

impl TypeUrl for MsgSetWithdrawAddress {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";
}

pub fn distribution_types() -> Vec<CodecEntry> {
    vec![
        CodecEntry::of::<MsgWithdrawDelegatorReward>(),
        CodecEntry::of::<MsgSetWithdrawAddress>(),
    ]
}
