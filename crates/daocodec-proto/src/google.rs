//! `google.protobuf` well-known types.
//!
//! `Timestamp` follows the proto3 JSON mapping: an RFC 3339 string in
//! JSON, `(seconds, nanos)` on the wire. This is what lets dates
//! round-trip through JSON-only storage layers (see the `DATE:`
//! handling in `daocodec-cosmos`).

use chrono::{DateTime, SecondsFormat, Utc};
use daocodec_core::{CodecEntry, TypeUrl};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Timestamp {
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        if self.nanos < 0 {
            return None;
        }
        DateTime::from_timestamp(self.seconds, self.nanos as u32)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos() as i32,
        }
    }
}

impl TypeUrl for Timestamp {
    const TYPE_URL: &'static str = "/google.protobuf.Timestamp";
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let dt = self.to_datetime().ok_or_else(|| {
            serde::ser::Error::custom(format!(
                "timestamp out of range: {}s {}ns",
                self.seconds, self.nanos
            ))
        })?;
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let dt = DateTime::parse_from_rfc3339(&s).map_err(D::Error::custom)?;
        Ok(Timestamp::from(dt.with_timezone(&Utc)))
    }
}

pub fn google_types() -> Vec<CodecEntry> {
    vec![CodecEntry::of::<Timestamp>()]
}

// `Any` lives in daocodec-core; re-exported here so proto consumers see
// the whole google.protobuf surface in one place.
pub use daocodec_core::any::Any;
