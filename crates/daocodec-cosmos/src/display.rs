//! Best-effort JSON rewrites for human display and form input.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, SecondsFormat};
use serde_json::Value;

use daocodec_registry::registry;

/// Marker prefix UI forms attach to strings that should be treated as
/// timestamps rather than plain text.
const DATE_PREFIX: &str = "DATE:";

/// Recursively decode embedded wire payloads inside an untyped JSON
/// tree so humans can read them.
///
/// Two rewrites, both best-effort and applied bottom-up:
/// - an object shaped like `{"typeUrl": "...", "value": "<base64>"}`
///   whose type URL is registered has its payload decoded to JSON and
///   the result walked again, so nested `Any` payloads unfold too;
/// - a `"msg"` key holding a base64 string that decodes to valid UTF-8
///   is replaced with the plain text.
///
/// Anything that fails to decode is left exactly as it was. This never
/// fails: worst case the input comes back unchanged.
pub fn decode_raw_msgs_for_display(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items.into_iter().map(decode_raw_msgs_for_display).collect(),
        ),
        Value::Object(map) => {
            if let Some(decoded) = try_decode_embedded(&map) {
                return decode_raw_msgs_for_display(decoded);
            }
            Value::Object(
                map.into_iter()
                    .map(|(key, val)| {
                        let val = match (key.as_str(), &val) {
                            ("msg", Value::String(s)) => {
                                try_base64_utf8(s).map(Value::String).unwrap_or(val)
                            }
                            _ => decode_raw_msgs_for_display(val),
                        };
                        (key, val)
                    })
                    .collect(),
            )
        }
        other => other,
    }
}

/// Decode `{"typeUrl", "value"}` objects whose payload is a base64
/// string of wire bytes for a registered type.
fn try_decode_embedded(map: &serde_json::Map<String, Value>) -> Option<Value> {
    if map.len() != 2 {
        return None;
    }
    let type_url = map.get("typeUrl")?.as_str()?;
    let payload = map.get("value")?.as_str()?;
    let entry = registry().lookup(type_url)?;
    let bytes = BASE64.decode(payload).ok()?;
    let decoded = entry.decode(&bytes).ok()?;
    Some(serde_json::json!({ "typeUrl": type_url, "value": decoded }))
}

fn try_base64_utf8(s: &str) -> Option<String> {
    let bytes = BASE64.decode(s).ok()?;
    String::from_utf8(bytes).ok()
}

/// Resolve form-input sentinels in a JSON tree before encoding.
///
/// Strings prefixed with `DATE:` are parsed as RFC 3339 timestamps and
/// re-emitted in the canonical UTC form; strings whose remainder does
/// not parse pass through untouched. Everything else is copied as-is.
pub fn prepare_proto_json(value: Value) -> Value {
    match value {
        Value::String(s) => match s.strip_prefix(DATE_PREFIX) {
            Some(rest) => match DateTime::parse_from_rfc3339(rest) {
                Ok(dt) => Value::String(
                    dt.to_utc().to_rfc3339_opts(SecondsFormat::AutoSi, true),
                ),
                Err(_) => Value::String(s),
            },
            None => Value::String(s),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(prepare_proto_json).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, prepare_proto_json(v)))
                .collect(),
        ),
        other => other,
    }
}
