//! `cosmos.gov.v1beta1` and `cosmos.gov.v1` messages.
//!
//! `MsgVote` and `TextProposal` live in v1beta1; the legacy-content
//! wrapper used by v1 proposals to carry v1beta1 content is
//! `MsgExecLegacyContent`.

use daocodec_core::codec::serde_str_u64;
use daocodec_core::{Any, CodecEntry, TypeUrl};
use serde::{Deserialize, Serialize};

/// The wire-protocol vote enum (`cosmos.gov.v1beta1.VoteOption`).
/// Distinct from the canonical `VoteOption` in `daocodec-core`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteOption {
    Unspecified = 0,
    Yes = 1,
    Abstain = 2,
    No = 3,
    NoWithVeto = 4,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgVote {
    #[prost(uint64, tag = "1")]
    #[serde(default, with = "serde_str_u64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub voter: String,
    /// Raw wire enum value; see [`VoteOption`].
    #[prost(enumeration = "VoteOption", tag = "3")]
    #[serde(default)]
    pub option: i32,
}

impl TypeUrl for MsgVote {
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.MsgVote";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProposal {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub title: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub description: String,
}

impl TypeUrl for TextProposal {
    const TYPE_URL: &'static str = "/cosmos.gov.v1beta1.TextProposal";
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgExecLegacyContent {
    #[prost(message, optional, tag = "1")]
    #[serde(default)]
    pub content: Option<Any>,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub authority: String,
}

impl TypeUrl for MsgExecLegacyContent {
    const TYPE_URL: &'static str = "/cosmos.gov.v1.MsgExecLegacyContent";
}

pub fn gov_types() -> Vec<CodecEntry> {
    vec![
        CodecEntry::of::<MsgVote>(),
        CodecEntry::of::<TextProposal>(),
        CodecEntry::of::<MsgExecLegacyContent>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn vote_wire_roundtrip() {
        let msg = MsgVote {
            proposal_id: 12,
            voter: "addrX".into(),
            option: VoteOption::NoWithVeto as i32,
        };
        let back = MsgVote::decode(msg.encode_to_vec().as_slice()).unwrap();
        assert_eq!(msg, back);
        assert_eq!(back.option(), VoteOption::NoWithVeto);
    }

    #[test]
    fn vote_proposal_id_serializes_as_string() {
        let msg = MsgVote {
            proposal_id: 9007199254740993,
            voter: "addrX".into(),
            option: 1,
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["proposalId"], "9007199254740993");
    }

    #[test]
    fn exec_legacy_content_carries_any() {
        let content = TextProposal {
            title: "t".into(),
            description: "d".into(),
        };
        let msg = MsgExecLegacyContent {
            content: Some(Any::new(TextProposal::TYPE_URL, content.encode_to_vec())),
            authority: "gov".into(),
        };
        let back = MsgExecLegacyContent::decode(msg.encode_to_vec().as_slice()).unwrap();
        let inner = TextProposal::decode(back.content.unwrap().value.as_slice()).unwrap();
        assert_eq!(inner.title, "t");
    }
}
