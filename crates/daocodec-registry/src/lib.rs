//! # daocodec-registry
//!
//! The immutable, startup-built mapping from wire type URL to codec
//! entry, the binary codec primitives layered on it, and the Amino
//! converter table used by legacy sign-mode flows.
//!
//! Both registries are built once by merging fixed module descriptor
//! sets from `daocodec-proto` and never mutated afterwards; a duplicate
//! type URL between sets is a packaging bug and fatal at startup. All
//! lookups are pure reads, safe from any number of concurrent callers.

pub mod amino;
pub mod registry;

pub use amino::{amino_registry, AminoConverter, AminoRegistry};
pub use registry::{
    decode_proto_value, decode_raw_proto_msg, encode_proto_value, registry, ProtoRegistry,
    RawProtoValue,
};
