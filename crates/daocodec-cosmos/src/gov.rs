//! Governance proposal unwrapping.
//!
//! Chains expose proposals through two API generations: the legacy
//! v1beta1 shape with a single `content` payload, and the v1 shape with
//! a list of arbitrary wire messages (legacy payloads travel wrapped in
//! `MsgExecLegacyContent`). Both normalize into one
//! [`DecodedGovProposal`] for rendering, and decoding is deliberately
//! lossy-but-total: a message that fails to decode is kept as an opaque
//! passthrough instead of sinking the whole proposal.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use daocodec_core::{Any, CosmosMsg, StargateMsg, TypeUrl};
use daocodec_proto::gov::{MsgExecLegacyContent, TextProposal};
use prost::Message;

use crate::transcode::proto_to_cw_msg;

/// A governance proposal as fetched from either API generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GovProposal {
    V1Beta1(GovProposalV1Beta1),
    V1(GovProposalV1),
}

/// Legacy proposal: one content payload, typically a `TextProposal`.
#[derive(Debug, Clone, PartialEq)]
pub struct GovProposalV1Beta1 {
    pub id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<Any>,
}

/// Current proposal: metadata plus a list of wire messages.
#[derive(Debug, Clone, PartialEq)]
pub struct GovProposalV1 {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub messages: Vec<Any>,
}

/// A proposal normalized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedGovProposal {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Canonical messages the proposal would execute, in order.
    pub decoded_messages: Vec<CosmosMsg>,
    /// Legacy content payloads (v1beta1 `content`, or the payloads of
    /// v1 `MsgExecLegacyContent` wrappers).
    pub legacy_content: Vec<Any>,
}

/// Decode a v1 proposal's messages to canonical form, one by one.
///
/// A message that cannot be decoded is logged and kept as a stargate
/// passthrough carrying its raw bytes, so the output always has the
/// same length and order as the input.
pub fn decode_gov_v1_messages(messages: &[Any]) -> Vec<CosmosMsg> {
    messages
        .iter()
        .map(|any| match proto_to_cw_msg(any) {
            Ok(transcoded) => transcoded.msg,
            Err(err) => {
                tracing::error!(
                    type_url = %any.type_url,
                    error = %err,
                    "failed to decode proposal message",
                );
                CosmosMsg::Stargate(StargateMsg {
                    type_url: any.type_url.clone(),
                    value: BASE64.encode(&any.value),
                })
            }
        })
        .collect()
}

/// Normalize a proposal from either API generation.
pub fn decode_gov_proposal(proposal: GovProposal) -> DecodedGovProposal {
    match proposal {
        GovProposal::V1Beta1(p) => {
            // Every legacy content type leads with title and description
            // string fields, so a TextProposal decode recovers them
            // regardless of the actual content type.
            let text = p
                .content
                .as_ref()
                .and_then(|c| TextProposal::decode(c.value.as_slice()).ok());
            DecodedGovProposal {
                id: p.id,
                title: p
                    .title
                    .or_else(|| text.as_ref().map(|t| t.title.clone()))
                    .unwrap_or_default(),
                description: p
                    .description
                    .or_else(|| text.as_ref().map(|t| t.description.clone()))
                    .unwrap_or_default(),
                decoded_messages: Vec::new(),
                legacy_content: p.content.into_iter().collect(),
            }
        }
        GovProposal::V1(p) => {
            let mut legacy_content = Vec::new();
            let mut direct = Vec::new();
            for any in p.messages {
                if any.type_url == MsgExecLegacyContent::TYPE_URL {
                    match MsgExecLegacyContent::decode(any.value.as_slice()) {
                        Ok(wrapper) => legacy_content.extend(wrapper.content),
                        Err(err) => {
                            tracing::error!(
                                error = %err,
                                "failed to unwrap legacy content",
                            );
                            direct.push(any);
                        }
                    }
                } else {
                    direct.push(any);
                }
            }
            DecodedGovProposal {
                id: p.id,
                title: p.title,
                description: p.summary,
                decoded_messages: decode_gov_v1_messages(&direct),
                legacy_content,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daocodec_core::{BankMsg, Coin};
    use daocodec_proto::bank::MsgSend;

    fn send_any() -> Any {
        let msg = MsgSend {
            from_address: "addrX".into(),
            to_address: "addr1".into(),
            amount: vec![Coin::new("100", "utoken")],
        };
        Any::new(MsgSend::TYPE_URL, msg.encode_to_vec())
    }

    #[test]
    fn v1_messages_decode_in_order() {
        let bogus = Any::new("/not.a.Type", vec![1, 2, 3]);
        let decoded = decode_gov_v1_messages(&[send_any(), bogus]);
        assert_eq!(decoded.len(), 2);
        assert!(matches!(
            decoded[0],
            CosmosMsg::Bank(BankMsg::Send { .. })
        ));
        // The undecodable one survives as an opaque passthrough.
        match &decoded[1] {
            CosmosMsg::Stargate(s) => {
                assert_eq!(s.type_url, "/not.a.Type");
                assert_eq!(s.value, BASE64.encode([1, 2, 3]));
            }
            other => panic!("expected stargate passthrough, got {other:?}"),
        }
    }

    #[test]
    fn v1_splits_legacy_content() {
        let text = TextProposal {
            title: "Upgrade".into(),
            description: "Do the upgrade".into(),
        };
        let wrapper = MsgExecLegacyContent {
            content: Some(Any::new(TextProposal::TYPE_URL, text.encode_to_vec())),
            authority: "gov".into(),
        };
        let proposal = GovProposal::V1(GovProposalV1 {
            id: 7,
            title: "Upgrade".into(),
            summary: "Do the upgrade".into(),
            messages: vec![
                Any::new(MsgExecLegacyContent::TYPE_URL, wrapper.encode_to_vec()),
                send_any(),
            ],
        });
        let decoded = decode_gov_proposal(proposal);
        assert_eq!(decoded.id, 7);
        assert_eq!(decoded.title, "Upgrade");
        assert_eq!(decoded.legacy_content.len(), 1);
        assert_eq!(decoded.legacy_content[0].type_url, TextProposal::TYPE_URL);
        assert_eq!(decoded.decoded_messages.len(), 1);
    }

    #[test]
    fn v1beta1_recovers_title_from_content() {
        let text = TextProposal {
            title: "Signal".into(),
            description: "A signaling proposal".into(),
        };
        let proposal = GovProposal::V1Beta1(GovProposalV1Beta1 {
            id: 3,
            title: None,
            description: None,
            content: Some(Any::new(TextProposal::TYPE_URL, text.encode_to_vec())),
        });
        let decoded = decode_gov_proposal(proposal);
        assert_eq!(decoded.title, "Signal");
        assert_eq!(decoded.description, "A signaling proposal");
        assert!(decoded.decoded_messages.is_empty());
        assert_eq!(decoded.legacy_content.len(), 1);
    }

    #[test]
    fn v1beta1_explicit_metadata_wins() {
        let proposal = GovProposal::V1Beta1(GovProposalV1Beta1 {
            id: 4,
            title: Some("Given title".into()),
            description: Some("Given description".into()),
            content: None,
        });
        let decoded = decode_gov_proposal(proposal);
        assert_eq!(decoded.title, "Given title");
        assert_eq!(decoded.description, "Given description");
        assert!(decoded.legacy_content.is_empty());
    }
}
