//! # daocodec-core
//!
//! Core types shared across all DaoCodec crates: the canonical
//! contract-message union exchanged with UI forms and persisted
//! proposals, the wire-protocol `Any` pair, the error taxonomy, and the
//! structural matcher used to classify untyped JSON messages.

pub mod any;
pub mod codec;
pub mod error;
pub mod msg;
pub mod structure;

pub use any::{Any, DecodedAny};
pub use codec::{CodecEntry, TypeUrl};
pub use error::{CodecError, RegistryError, TranscodeError};
pub use msg::{
    BankMsg, Coin, CosmosMsg, DecodedStargateMsg, DistributionMsg, GovMsg, StakingMsg,
    StargateMsg, VoteOption, WasmMsg,
};
pub use structure::{object_matches_structure, Structure};
