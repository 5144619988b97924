//! The Amino converter table.
//!
//! Legacy sign-mode flows require the Amino JSON sign-doc shape:
//! snake_case field names wrapped as `{ "type": "<amino name>",
//! "value": { ... } }`. Each converter maps one wire type's proto3-JSON
//! representation to that shape and back. The table has the same
//! build-once, immutable lifecycle as the type registry.
//!
//! The converter set covers exactly the messages the transcoder
//! supports. `MsgInstantiateContract2` has no legacy Amino name in
//! wasmd and is deliberately absent.

use daocodec_core::{CodecError, DecodedAny};
use daocodec_proto::{bank, distribution, gov, staking, wasm};
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::sync::OnceLock;

/// One entry of the Amino converter table.
#[derive(Clone, Copy)]
pub struct AminoConverter {
    pub type_url: &'static str,
    pub amino_type: &'static str,
    to_amino: fn(&Value) -> Result<Value, CodecError>,
    from_amino: fn(&Value) -> Result<Value, CodecError>,
}

impl std::fmt::Debug for AminoConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AminoConverter")
            .field("type_url", &self.type_url)
            .field("amino_type", &self.amino_type)
            .finish()
    }
}

/// Immutable type URL → Amino converter mapping.
#[derive(Debug)]
pub struct AminoRegistry {
    entries: IndexMap<&'static str, AminoConverter>,
}

impl AminoRegistry {
    fn from_converters(converters: Vec<AminoConverter>) -> Result<Self, daocodec_core::RegistryError> {
        let mut entries = IndexMap::new();
        for conv in converters {
            if entries.insert(conv.type_url, conv).is_some() {
                return Err(daocodec_core::RegistryError::DuplicateTypeUrl {
                    type_url: conv.type_url,
                });
            }
        }
        Ok(AminoRegistry { entries })
    }

    pub fn lookup(&self, type_url: &str) -> Option<&AminoConverter> {
        self.entries.get(type_url)
    }

    /// Convert a decoded wire message into the Amino sign-doc shape.
    pub fn to_amino(&self, msg: &DecodedAny) -> Result<Value, CodecError> {
        let conv = self
            .lookup(&msg.type_url)
            .ok_or_else(|| CodecError::UnknownType {
                type_url: msg.type_url.clone(),
            })?;
        Ok(json!({
            "type": conv.amino_type,
            "value": (conv.to_amino)(&msg.value)?,
        }))
    }

    /// Convert an Amino sign-doc back into the decoded wire shape.
    pub fn from_amino(&self, amino: &Value) -> Result<DecodedAny, CodecError> {
        let amino_type = amino
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let conv = self
            .entries
            .values()
            .find(|c| c.amino_type == amino_type)
            .ok_or_else(|| CodecError::UnknownType {
                type_url: amino_type.to_string(),
            })?;
        let value = amino.get("value").cloned().unwrap_or(Value::Null);
        Ok(DecodedAny {
            type_url: conv.type_url.to_string(),
            value: (conv.from_amino)(&value)?,
        })
    }
}

/// The process-wide Amino converter table.
///
/// # Panics
/// Panics on first use if two converters collide on a type URL (fatal
/// startup invariant, same as the type registry).
pub fn amino_registry() -> &'static AminoRegistry {
    static REGISTRY: OnceLock<AminoRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        AminoRegistry::from_converters(all_converters())
            .unwrap_or_else(|e| panic!("broken amino table: {e}"))
    })
}

fn all_converters() -> Vec<AminoConverter> {
    vec![
        AminoConverter {
            type_url: "/cosmos.bank.v1beta1.MsgSend",
            amino_type: "cosmos-sdk/MsgSend",
            to_amino: msg_send_to_amino,
            from_amino: msg_send_from_amino,
        },
        AminoConverter {
            type_url: "/cosmos.staking.v1beta1.MsgDelegate",
            amino_type: "cosmos-sdk/MsgDelegate",
            to_amino: msg_delegate_to_amino,
            from_amino: msg_delegate_from_amino,
        },
        AminoConverter {
            type_url: "/cosmos.staking.v1beta1.MsgUndelegate",
            amino_type: "cosmos-sdk/MsgUndelegate",
            to_amino: msg_undelegate_to_amino,
            from_amino: msg_undelegate_from_amino,
        },
        AminoConverter {
            type_url: "/cosmos.staking.v1beta1.MsgBeginRedelegate",
            amino_type: "cosmos-sdk/MsgBeginRedelegate",
            to_amino: msg_redelegate_to_amino,
            from_amino: msg_redelegate_from_amino,
        },
        AminoConverter {
            type_url: "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
            // Legacy SDK name, not a typo.
            amino_type: "cosmos-sdk/MsgWithdrawDelegationReward",
            to_amino: msg_withdraw_reward_to_amino,
            from_amino: msg_withdraw_reward_from_amino,
        },
        AminoConverter {
            type_url: "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress",
            amino_type: "cosmos-sdk/MsgModifyWithdrawAddress",
            to_amino: msg_set_withdraw_to_amino,
            from_amino: msg_set_withdraw_from_amino,
        },
        AminoConverter {
            type_url: "/cosmos.gov.v1beta1.MsgVote",
            amino_type: "cosmos-sdk/MsgVote",
            to_amino: msg_vote_to_amino,
            from_amino: msg_vote_from_amino,
        },
        AminoConverter {
            type_url: "/cosmwasm.wasm.v1.MsgExecuteContract",
            amino_type: "wasm/MsgExecuteContract",
            to_amino: msg_execute_to_amino,
            from_amino: msg_execute_from_amino,
        },
        AminoConverter {
            type_url: "/cosmwasm.wasm.v1.MsgInstantiateContract",
            amino_type: "wasm/MsgInstantiateContract",
            to_amino: msg_instantiate_to_amino,
            from_amino: msg_instantiate_from_amino,
        },
        AminoConverter {
            type_url: "/cosmwasm.wasm.v1.MsgMigrateContract",
            amino_type: "wasm/MsgMigrateContract",
            to_amino: msg_migrate_to_amino,
            from_amino: msg_migrate_from_amino,
        },
        AminoConverter {
            type_url: "/cosmwasm.wasm.v1.MsgUpdateAdmin",
            amino_type: "wasm/MsgUpdateAdmin",
            to_amino: msg_update_admin_to_amino,
            from_amino: msg_update_admin_from_amino,
        },
        AminoConverter {
            type_url: "/cosmwasm.wasm.v1.MsgClearAdmin",
            amino_type: "wasm/MsgClearAdmin",
            to_amino: msg_clear_admin_to_amino,
            from_amino: msg_clear_admin_from_amino,
        },
    ]
}

// ─── Bank ─────────────────────────────────────────────────────────────────────

fn msg_send_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: bank::MsgSend = serde_json::from_value(value.clone())?;
    Ok(json!({
        "from_address": m.from_address,
        "to_address": m.to_address,
        "amount": m.amount,
    }))
}

fn msg_send_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = bank::MsgSend {
        from_address: str_field(value, "from_address"),
        to_address: str_field(value, "to_address"),
        amount: serde_json::from_value(value.get("amount").cloned().unwrap_or(json!([])))?,
    };
    Ok(serde_json::to_value(m)?)
}

// ─── Staking ──────────────────────────────────────────────────────────────────

fn msg_delegate_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: staking::MsgDelegate = serde_json::from_value(value.clone())?;
    Ok(json!({
        "delegator_address": m.delegator_address,
        "validator_address": m.validator_address,
        "amount": m.amount,
    }))
}

fn msg_delegate_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = staking::MsgDelegate {
        delegator_address: str_field(value, "delegator_address"),
        validator_address: str_field(value, "validator_address"),
        amount: opt_coin(value, "amount")?,
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_undelegate_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: staking::MsgUndelegate = serde_json::from_value(value.clone())?;
    Ok(json!({
        "delegator_address": m.delegator_address,
        "validator_address": m.validator_address,
        "amount": m.amount,
    }))
}

fn msg_undelegate_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = staking::MsgUndelegate {
        delegator_address: str_field(value, "delegator_address"),
        validator_address: str_field(value, "validator_address"),
        amount: opt_coin(value, "amount")?,
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_redelegate_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: staking::MsgBeginRedelegate = serde_json::from_value(value.clone())?;
    Ok(json!({
        "delegator_address": m.delegator_address,
        "validator_src_address": m.validator_src_address,
        "validator_dst_address": m.validator_dst_address,
        "amount": m.amount,
    }))
}

fn msg_redelegate_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = staking::MsgBeginRedelegate {
        delegator_address: str_field(value, "delegator_address"),
        validator_src_address: str_field(value, "validator_src_address"),
        validator_dst_address: str_field(value, "validator_dst_address"),
        amount: opt_coin(value, "amount")?,
    };
    Ok(serde_json::to_value(m)?)
}

// ─── Distribution ─────────────────────────────────────────────────────────────

fn msg_withdraw_reward_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: distribution::MsgWithdrawDelegatorReward = serde_json::from_value(value.clone())?;
    Ok(json!({
        "delegator_address": m.delegator_address,
        "validator_address": m.validator_address,
    }))
}

fn msg_withdraw_reward_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = distribution::MsgWithdrawDelegatorReward {
        delegator_address: str_field(value, "delegator_address"),
        validator_address: str_field(value, "validator_address"),
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_set_withdraw_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: distribution::MsgSetWithdrawAddress = serde_json::from_value(value.clone())?;
    Ok(json!({
        "delegator_address": m.delegator_address,
        "withdraw_address": m.withdraw_address,
    }))
}

fn msg_set_withdraw_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = distribution::MsgSetWithdrawAddress {
        delegator_address: str_field(value, "delegator_address"),
        withdraw_address: str_field(value, "withdraw_address"),
    };
    Ok(serde_json::to_value(m)?)
}

// ─── Gov ──────────────────────────────────────────────────────────────────────

fn msg_vote_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: gov::MsgVote = serde_json::from_value(value.clone())?;
    Ok(json!({
        "proposal_id": m.proposal_id.to_string(),
        "voter": m.voter,
        "option": m.option,
    }))
}

fn msg_vote_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = gov::MsgVote {
        proposal_id: value
            .get("proposal_id")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        voter: str_field(value, "voter"),
        option: value
            .get("option")
            .and_then(Value::as_i64)
            .unwrap_or_default() as i32,
    };
    Ok(serde_json::to_value(m)?)
}

// ─── Wasm ─────────────────────────────────────────────────────────────────────
//
// Wasm messages embed their opaque contract payload as raw JSON in
// Amino form, base64 bytes in proto3-JSON form.

fn msg_execute_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: wasm::MsgExecuteContract = serde_json::from_value(value.clone())?;
    Ok(json!({
        "sender": m.sender,
        "contract": m.contract,
        "msg": embedded_json(&m.msg)?,
        "funds": m.funds,
    }))
}

fn msg_execute_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = wasm::MsgExecuteContract {
        sender: str_field(value, "sender"),
        contract: str_field(value, "contract"),
        msg: embedded_bytes(value.get("msg"))?,
        funds: serde_json::from_value(value.get("funds").cloned().unwrap_or(json!([])))?,
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_instantiate_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: wasm::MsgInstantiateContract = serde_json::from_value(value.clone())?;
    let mut amino = json!({
        "sender": m.sender,
        "code_id": m.code_id.to_string(),
        "label": m.label,
        "msg": embedded_json(&m.msg)?,
        "funds": m.funds,
    });
    // Amino omits unset optional fields.
    if !m.admin.is_empty() {
        amino["admin"] = json!(m.admin);
    }
    Ok(amino)
}

fn msg_instantiate_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = wasm::MsgInstantiateContract {
        sender: str_field(value, "sender"),
        admin: str_field(value, "admin"),
        code_id: value
            .get("code_id")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        label: str_field(value, "label"),
        msg: embedded_bytes(value.get("msg"))?,
        funds: serde_json::from_value(value.get("funds").cloned().unwrap_or(json!([])))?,
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_migrate_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: wasm::MsgMigrateContract = serde_json::from_value(value.clone())?;
    Ok(json!({
        "sender": m.sender,
        "contract": m.contract,
        "code_id": m.code_id.to_string(),
        "msg": embedded_json(&m.msg)?,
    }))
}

fn msg_migrate_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = wasm::MsgMigrateContract {
        sender: str_field(value, "sender"),
        contract: str_field(value, "contract"),
        code_id: value
            .get("code_id")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        msg: embedded_bytes(value.get("msg"))?,
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_update_admin_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: wasm::MsgUpdateAdmin = serde_json::from_value(value.clone())?;
    Ok(json!({
        "sender": m.sender,
        "new_admin": m.new_admin,
        "contract": m.contract,
    }))
}

fn msg_update_admin_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = wasm::MsgUpdateAdmin {
        sender: str_field(value, "sender"),
        new_admin: str_field(value, "new_admin"),
        contract: str_field(value, "contract"),
    };
    Ok(serde_json::to_value(m)?)
}

fn msg_clear_admin_to_amino(value: &Value) -> Result<Value, CodecError> {
    let m: wasm::MsgClearAdmin = serde_json::from_value(value.clone())?;
    Ok(json!({
        "sender": m.sender,
        "contract": m.contract,
    }))
}

fn msg_clear_admin_from_amino(value: &Value) -> Result<Value, CodecError> {
    let m = wasm::MsgClearAdmin {
        sender: str_field(value, "sender"),
        contract: str_field(value, "contract"),
    };
    Ok(serde_json::to_value(m)?)
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_coin(value: &Value, key: &str) -> Result<Option<daocodec_core::Coin>, CodecError> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(serde_json::from_value(v.clone())?)),
    }
}

/// Opaque contract payload bytes → the embedded JSON object Amino uses.
fn embedded_json(bytes: &[u8]) -> Result<Value, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Embedded Amino JSON object → the base64 payload of proto3 JSON.
fn embedded_bytes(value: Option<&Value>) -> Result<Vec<u8>, CodecError> {
    let v = value.cloned().unwrap_or(Value::Null);
    Ok(serde_json::to_vec(&v)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daocodec_core::TypeUrl;
    use daocodec_proto::bank::MsgSend;
    use daocodec_proto::wasm::MsgExecuteContract;

    #[test]
    fn send_to_amino_shape() {
        let decoded = DecodedAny::new(
            MsgSend::TYPE_URL,
            json!({
                "fromAddress": "addrX",
                "toAddress": "addr1",
                "amount": [{ "denom": "utoken", "amount": "100" }]
            }),
        );
        let amino = amino_registry().to_amino(&decoded).unwrap();
        assert_eq!(amino["type"], "cosmos-sdk/MsgSend");
        assert_eq!(amino["value"]["from_address"], "addrX");
        assert_eq!(amino["value"]["amount"][0]["denom"], "utoken");
    }

    #[test]
    fn send_amino_roundtrip() {
        let decoded = DecodedAny::new(
            MsgSend::TYPE_URL,
            json!({
                "fromAddress": "addrX",
                "toAddress": "addr1",
                "amount": [{ "denom": "utoken", "amount": "100" }]
            }),
        );
        let amino = amino_registry().to_amino(&decoded).unwrap();
        let back = amino_registry().from_amino(&amino).unwrap();
        assert_eq!(back, decoded);
    }

    #[test]
    fn execute_amino_embeds_json_msg() {
        let decoded = DecodedAny::new(
            MsgExecuteContract::TYPE_URL,
            json!({
                "sender": "addrX",
                "contract": "juno1contract",
                "msg": "eyJjbGFpbSI6e319",
                "funds": []
            }),
        );
        let amino = amino_registry().to_amino(&decoded).unwrap();
        assert_eq!(amino["type"], "wasm/MsgExecuteContract");
        assert_eq!(amino["value"]["msg"], json!({ "claim": {} }));

        let back = amino_registry().from_amino(&amino).unwrap();
        assert_eq!(back, decoded);
    }

    #[test]
    fn vote_amino_proposal_id_is_string() {
        let decoded = DecodedAny::new(
            "/cosmos.gov.v1beta1.MsgVote",
            json!({ "proposalId": "12", "voter": "addrX", "option": 1 }),
        );
        let amino = amino_registry().to_amino(&decoded).unwrap();
        assert_eq!(amino["value"]["proposal_id"], "12");
        assert_eq!(amino["value"]["option"], 1);
        let back = amino_registry().from_amino(&amino).unwrap();
        assert_eq!(back, decoded);
    }

    #[test]
    fn unknown_type_rejected() {
        let decoded = DecodedAny::new("/not.a.Type", json!({}));
        let err = amino_registry().to_amino(&decoded).unwrap_err();
        assert!(matches!(err, CodecError::UnknownType { .. }));
    }

    #[test]
    fn instantiate_amino_omits_empty_admin() {
        let decoded = DecodedAny::new(
            "/cosmwasm.wasm.v1.MsgInstantiateContract",
            json!({
                "sender": "addrX",
                "admin": "",
                "codeId": "42",
                "label": "dao",
                "msg": "e30=",
                "funds": []
            }),
        );
        let amino = amino_registry().to_amino(&decoded).unwrap();
        assert!(amino["value"].get("admin").is_none());
        assert_eq!(amino["value"]["code_id"], "42");
    }
}
