//! `cosmwasm.wasm.v1` messages.
//!
//! Field numbers follow wasmd's tx.proto, including the gaps left by
//! reserved tags (`MsgExecuteContract` skips 4, `MsgClearAdmin` skips 2).

use daocodec_core::codec::{serde_base64, serde_str_u64};
use daocodec_core::{Coin, CodecEntry, TypeUrl};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgExecuteContract {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub contract: String,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(default, with = "serde_base64")]
    pub msg: Vec<u8>,
    #[prost(message, repeated, tag = "5")]
    #[serde(default)]
    pub funds: Vec<Coin>,
}

impl TypeUrl for MsgExecuteContract {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgExecuteContract";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgInstantiateContract {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub admin: String,
    #[prost(uint64, tag = "3")]
    #[serde(default, with = "serde_str_u64")]
    pub code_id: u64,
    #[prost(string, tag = "4")]
    #[serde(default)]
    pub label: String,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(default, with = "serde_base64")]
    pub msg: Vec<u8>,
    #[prost(message, repeated, tag = "6")]
    #[serde(default)]
    pub funds: Vec<Coin>,
}

impl TypeUrl for MsgInstantiateContract {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgInstantiateContract";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgInstantiateContract2 {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub admin: String,
    #[prost(uint64, tag = "3")]
    #[serde(default, with = "serde_str_u64")]
    pub code_id: u64,
    #[prost(string, tag = "4")]
    #[serde(default)]
    pub label: String,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(default, with = "serde_base64")]
    pub msg: Vec<u8>,
    #[prost(message, repeated, tag = "6")]
    #[serde(default)]
    pub funds: Vec<Coin>,
    #[prost(bytes = "vec", tag = "7")]
    #[serde(default, with = "serde_base64")]
    pub salt: Vec<u8>,
    #[prost(bool, tag = "8")]
    #[serde(default)]
    pub fix_msg: bool,
}

impl TypeUrl for MsgInstantiateContract2 {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgInstantiateContract2";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgMigrateContract {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub contract: String,
    #[prost(uint64, tag = "3")]
    #[serde(default, with = "serde_str_u64")]
    pub code_id: u64,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(default, with = "serde_base64")]
    pub msg: Vec<u8>,
}

impl TypeUrl for MsgMigrateContract {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgMigrateContract";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgUpdateAdmin {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub new_admin: String,
    #[prost(string, tag = "3")]
    #[serde(default)]
    pub contract: String,
}

impl TypeUrl for MsgUpdateAdmin {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgUpdateAdmin";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgClearAdmin {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(string, tag = "3")]
    #[serde(default)]
    pub contract: String,
}

impl TypeUrl for MsgClearAdmin {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgClearAdmin";
}

/// Access control for instantiating a stored code object.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfig {
    #[prost(int32, tag = "1")]
    #[serde(default)]
    pub permission: i32,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub address: String,
    #[prost(string, repeated, tag = "3")]
    #[serde(default)]
    pub addresses: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgStoreCode {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub sender: String,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(default, with = "serde_base64")]
    pub wasm_byte_code: Vec<u8>,
    #[prost(message, optional, tag = "5")]
    #[serde(default)]
    pub instantiate_permission: Option<AccessConfig>,
}

impl TypeUrl for MsgStoreCode {
    const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgStoreCode";
}

pub fn wasm_types() -> Vec<CodecEntry> {
    vec![
        CodecEntry::of::<MsgExecuteContract>(),
        CodecEntry::of::<MsgInstantiateContract>(),
        CodecEntry::of::<MsgInstantiateContract2>(),
        CodecEntry::of::<MsgMigrateContract>(),
        CodecEntry::of::<MsgUpdateAdmin>(),
        CodecEntry::of::<MsgClearAdmin>(),
        CodecEntry::of::<MsgStoreCode>(),
    ]
}
