//! # daocodec-cosmos
//!
//! The bidirectional transcoder between the platform's canonical
//! contract-message union and the chain's wire-protocol messages,
//! plus the JSON display/preparation walkers and the governance
//! proposal content decoder built on top of it.
//!
//! A caller holds a canonical message (from a UI form or a persisted
//! proposal) and wants wire bytes to broadcast, or holds wire bytes
//! from a query and wants a canonical, displayable message. Everything
//! here is synchronous pure computation over the immutable registries
//! in `daocodec-registry`.

pub mod display;
pub mod gov;
pub mod transcode;
pub mod vote;

pub use display::{decode_raw_msgs_for_display, prepare_proto_json};
pub use gov::{
    decode_gov_proposal, decode_gov_v1_messages, DecodedGovProposal, GovProposal,
    GovProposalV1, GovProposalV1Beta1,
};
pub use transcode::{
    cw_msg_to_encode_object, cw_msg_to_proto, decode_stargate_msg, decoded_stargate_msg_to_cw,
    is_decoded_stargate_msg, make_stargate_msg, proto_to_cw_msg, CwTranscoded, EncodeObject,
};
pub use vote::{cw_vote_to_gov, gov_vote_to_cw};
