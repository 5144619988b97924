//! # daocodec-proto
//!
//! Hand-maintained bindings for the wire-protocol messages the platform
//! transcodes: prost structs matching the externally-fixed Cosmos SDK /
//! wasmd / ibc-go schemas byte-for-byte, with serde impls following
//! proto3 JSON conventions (camelCase field names, 64-bit integers as
//! decimal strings, bytes as base64, timestamps as RFC 3339).
//!
//! Each module exposes its messages plus a `*_types()` descriptor-set
//! function returning the [`CodecEntry`] list the registry merges at
//! startup.
//!
//! [`CodecEntry`]: daocodec_core::CodecEntry

pub mod bank;
pub mod distribution;
pub mod google;
pub mod gov;
pub mod ibc;
pub mod staking;
pub mod wasm;

pub use daocodec_core::{Any, Coin, TypeUrl};

use daocodec_core::CodecEntry;

/// All module descriptor sets, in registry merge order.
pub fn all_module_types() -> Vec<Vec<CodecEntry>> {
    vec![
        bank::bank_types(),
        staking::staking_types(),
        distribution::distribution_types(),
        gov::gov_types(),
        wasm::wasm_types(),
        ibc::ibc_types(),
        google::google_types(),
    ]
}
