//! The canonical ⇄ wire transcoder.
//!
//! Forward: a canonical [`CosmosMsg`] plus the sender address becomes
//! an [`EncodeObject`] (type URL + proto3-JSON value) ready for binary
//! encoding. Reverse: a decoded wire message becomes the matching
//! canonical message with the sender/delegator/voter address
//! extracted. The two directions are exact structural inverses for
//! every supported (module, operation) pair; everything outside that
//! set falls back to the stargate passthrough on the way in and fails
//! with `UnsupportedMessage` on the way out.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use daocodec_core::{
    Any, BankMsg, Coin, CosmosMsg, DecodedAny, DecodedStargateMsg, DistributionMsg, GovMsg,
    StakingMsg, StargateMsg, Structure, TranscodeError, TypeUrl, WasmMsg,
    object_matches_structure,
};
use daocodec_proto::{bank, distribution, gov, staking, wasm};
use daocodec_registry::{decode_proto_value, encode_proto_value};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::display::prepare_proto_json;
use crate::vote::{cw_vote_to_gov, gov_vote_to_cw};

/// A wire message before binary encoding: type URL plus the proto3-JSON
/// representation of its value.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeObject {
    pub type_url: String,
    pub value: Value,
}

impl EncodeObject {
    fn of<M: TypeUrl + Serialize>(msg: &M) -> Result<Self, TranscodeError> {
        Ok(EncodeObject {
            type_url: M::TYPE_URL.to_string(),
            value: serde_json::to_value(msg).map_err(daocodec_core::CodecError::from)?,
        })
    }
}

/// The result of the reverse direction: the canonical message plus the
/// extracted sender (delegator / voter / contract caller) address.
/// Empty for passthrough messages, which carry no known sender field.
#[derive(Debug, Clone, PartialEq)]
pub struct CwTranscoded {
    pub msg: CosmosMsg,
    pub sender: String,
}

// ─── Forward ──────────────────────────────────────────────────────────────────

/// Convert a canonical message to its wire `EncodeObject` equivalent.
pub fn cw_msg_to_encode_object(
    msg: &CosmosMsg,
    sender: &str,
) -> Result<EncodeObject, TranscodeError> {
    match msg {
        CosmosMsg::Bank(bank_msg) => match bank_msg {
            BankMsg::Send { to_address, amount } => EncodeObject::of(&bank::MsgSend {
                from_address: sender.to_string(),
                to_address: to_address.clone(),
                amount: amount.clone(),
            }),
            // The chain has no bank burn message.
            BankMsg::Burn { .. } => Err(TranscodeError::UnsupportedMessage { module: "bank" }),
        },

        CosmosMsg::Staking(staking_msg) => match staking_msg {
            StakingMsg::Delegate { validator, amount } => {
                EncodeObject::of(&staking::MsgDelegate {
                    delegator_address: sender.to_string(),
                    validator_address: validator.clone(),
                    amount: Some(amount.clone()),
                })
            }
            StakingMsg::Undelegate { validator, amount } => {
                EncodeObject::of(&staking::MsgUndelegate {
                    delegator_address: sender.to_string(),
                    validator_address: validator.clone(),
                    amount: Some(amount.clone()),
                })
            }
            StakingMsg::Redelegate {
                src_validator,
                dst_validator,
                amount,
            } => EncodeObject::of(&staking::MsgBeginRedelegate {
                delegator_address: sender.to_string(),
                validator_src_address: src_validator.clone(),
                validator_dst_address: dst_validator.clone(),
                amount: Some(amount.clone()),
            }),
        },

        CosmosMsg::Distribution(distribution_msg) => match distribution_msg {
            DistributionMsg::WithdrawDelegatorReward { validator } => {
                EncodeObject::of(&distribution::MsgWithdrawDelegatorReward {
                    delegator_address: sender.to_string(),
                    validator_address: validator.clone(),
                })
            }
            DistributionMsg::SetWithdrawAddress { address } => {
                EncodeObject::of(&distribution::MsgSetWithdrawAddress {
                    delegator_address: sender.to_string(),
                    withdraw_address: address.clone(),
                })
            }
        },

        CosmosMsg::Wasm(wasm_msg) => match wasm_msg {
            WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            } => EncodeObject::of(&wasm::MsgExecuteContract {
                sender: sender.to_string(),
                contract: contract_addr.clone(),
                msg: decode_payload(msg)?,
                funds: funds.clone(),
            }),
            WasmMsg::Instantiate {
                admin,
                code_id,
                label,
                msg,
                funds,
            } => EncodeObject::of(&wasm::MsgInstantiateContract {
                sender: sender.to_string(),
                admin: admin.clone().unwrap_or_default(),
                code_id: *code_id,
                label: label.clone(),
                msg: decode_payload(msg)?,
                funds: funds.clone(),
            }),
            WasmMsg::Instantiate2 {
                admin,
                code_id,
                label,
                msg,
                funds,
                salt,
                fix_msg,
            } => EncodeObject::of(&wasm::MsgInstantiateContract2 {
                sender: sender.to_string(),
                admin: admin.clone().unwrap_or_default(),
                code_id: *code_id,
                label: label.clone(),
                msg: decode_payload(msg)?,
                funds: funds.clone(),
                salt: decode_payload(salt)?,
                fix_msg: *fix_msg,
            }),
            WasmMsg::Migrate {
                contract_addr,
                new_code_id,
                msg,
            } => EncodeObject::of(&wasm::MsgMigrateContract {
                sender: sender.to_string(),
                contract: contract_addr.clone(),
                code_id: *new_code_id,
                msg: decode_payload(msg)?,
            }),
            WasmMsg::UpdateAdmin {
                admin,
                contract_addr,
            } => EncodeObject::of(&wasm::MsgUpdateAdmin {
                sender: sender.to_string(),
                new_admin: admin.clone(),
                contract: contract_addr.clone(),
            }),
            WasmMsg::ClearAdmin { contract_addr } => EncodeObject::of(&wasm::MsgClearAdmin {
                sender: sender.to_string(),
                contract: contract_addr.clone(),
            }),
        },

        CosmosMsg::Gov(gov_msg) => match gov_msg {
            GovMsg::Vote { proposal_id, vote } => EncodeObject::of(&gov::MsgVote {
                proposal_id: *proposal_id,
                voter: sender.to_string(),
                option: cw_vote_to_gov(*vote) as i32,
            }),
        },

        CosmosMsg::Stargate(stargate) => {
            let decoded = decode_stargate_msg(stargate)?;
            Ok(EncodeObject {
                type_url: decoded.stargate.type_url,
                value: prepare_proto_json(decoded.stargate.value),
            })
        }

        CosmosMsg::Custom(_) => Err(TranscodeError::UnsupportedMessage { module: "custom" }),
    }
}

/// Convert a canonical message to its encoded wire equivalent.
pub fn cw_msg_to_proto(msg: &CosmosMsg, sender: &str) -> Result<Any, TranscodeError> {
    let EncodeObject { type_url, value } = cw_msg_to_encode_object(msg, sender)?;
    let bytes = encode_proto_value(&type_url, &value)?;
    Ok(Any::new(type_url, bytes))
}

// ─── Reverse ──────────────────────────────────────────────────────────────────

/// Convert a decoded wire message to its canonical equivalent.
///
/// Mirrors [`cw_msg_to_encode_object`] exactly. Type URLs outside the
/// supported set become a stargate passthrough, never an error — the
/// reverse direction is total over anything this registry decoded.
pub fn decoded_stargate_msg_to_cw(decoded: DecodedAny) -> Result<CwTranscoded, TranscodeError> {
    let DecodedAny { type_url, value } = decoded;

    let (msg, sender) = match type_url.as_str() {
        bank::MsgSend::TYPE_URL => {
            let m: bank::MsgSend = parse(value)?;
            (
                CosmosMsg::Bank(BankMsg::Send {
                    to_address: m.to_address,
                    amount: m.amount,
                }),
                m.from_address,
            )
        }
        staking::MsgDelegate::TYPE_URL => {
            let m: staking::MsgDelegate = parse(value)?;
            (
                CosmosMsg::Staking(StakingMsg::Delegate {
                    validator: m.validator_address,
                    amount: require_amount(m.amount)?,
                }),
                m.delegator_address,
            )
        }
        staking::MsgUndelegate::TYPE_URL => {
            let m: staking::MsgUndelegate = parse(value)?;
            (
                CosmosMsg::Staking(StakingMsg::Undelegate {
                    validator: m.validator_address,
                    amount: require_amount(m.amount)?,
                }),
                m.delegator_address,
            )
        }
        staking::MsgBeginRedelegate::TYPE_URL => {
            let m: staking::MsgBeginRedelegate = parse(value)?;
            (
                CosmosMsg::Staking(StakingMsg::Redelegate {
                    src_validator: m.validator_src_address,
                    dst_validator: m.validator_dst_address,
                    amount: require_amount(m.amount)?,
                }),
                m.delegator_address,
            )
        }
        distribution::MsgWithdrawDelegatorReward::TYPE_URL => {
            let m: distribution::MsgWithdrawDelegatorReward = parse(value)?;
            (
                CosmosMsg::Distribution(DistributionMsg::WithdrawDelegatorReward {
                    validator: m.validator_address,
                }),
                m.delegator_address,
            )
        }
        distribution::MsgSetWithdrawAddress::TYPE_URL => {
            let m: distribution::MsgSetWithdrawAddress = parse(value)?;
            (
                CosmosMsg::Distribution(DistributionMsg::SetWithdrawAddress {
                    address: m.withdraw_address,
                }),
                m.delegator_address,
            )
        }
        wasm::MsgExecuteContract::TYPE_URL => {
            let m: wasm::MsgExecuteContract = parse(value)?;
            (
                CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: m.contract,
                    msg: BASE64.encode(&m.msg),
                    funds: m.funds,
                }),
                m.sender,
            )
        }
        wasm::MsgInstantiateContract::TYPE_URL => {
            let m: wasm::MsgInstantiateContract = parse(value)?;
            (
                CosmosMsg::Wasm(WasmMsg::Instantiate {
                    admin: optional_addr(m.admin),
                    code_id: m.code_id,
                    label: m.label,
                    msg: BASE64.encode(&m.msg),
                    funds: m.funds,
                }),
                m.sender,
            )
        }
        wasm::MsgInstantiateContract2::TYPE_URL => {
            let m: wasm::MsgInstantiateContract2 = parse(value)?;
            (
                CosmosMsg::Wasm(WasmMsg::Instantiate2 {
                    admin: optional_addr(m.admin),
                    code_id: m.code_id,
                    label: m.label,
                    msg: BASE64.encode(&m.msg),
                    funds: m.funds,
                    salt: BASE64.encode(&m.salt),
                    fix_msg: m.fix_msg,
                }),
                m.sender,
            )
        }
        wasm::MsgMigrateContract::TYPE_URL => {
            let m: wasm::MsgMigrateContract = parse(value)?;
            (
                CosmosMsg::Wasm(WasmMsg::Migrate {
                    contract_addr: m.contract,
                    new_code_id: m.code_id,
                    msg: BASE64.encode(&m.msg),
                }),
                m.sender,
            )
        }
        wasm::MsgUpdateAdmin::TYPE_URL => {
            let m: wasm::MsgUpdateAdmin = parse(value)?;
            (
                CosmosMsg::Wasm(WasmMsg::UpdateAdmin {
                    admin: m.new_admin,
                    contract_addr: m.contract,
                }),
                m.sender,
            )
        }
        wasm::MsgClearAdmin::TYPE_URL => {
            let m: wasm::MsgClearAdmin = parse(value)?;
            (
                CosmosMsg::Wasm(WasmMsg::ClearAdmin {
                    contract_addr: m.contract,
                }),
                m.sender,
            )
        }
        gov::MsgVote::TYPE_URL => {
            let m: gov::MsgVote = parse(value)?;
            (
                CosmosMsg::Gov(GovMsg::Vote {
                    proposal_id: m.proposal_id,
                    vote: gov_vote_to_cw(m.option)?,
                }),
                m.voter,
            )
        }
        _ => {
            let stargate = make_stargate_msg(&DecodedStargateMsg {
                stargate: DecodedAny { type_url, value },
            })?;
            (CosmosMsg::Stargate(stargate), String::new())
        }
    };

    Ok(CwTranscoded { msg, sender })
}

/// Decode a wire message and convert it to its canonical equivalent.
pub fn proto_to_cw_msg(any: &Any) -> Result<CwTranscoded, TranscodeError> {
    let decoded = daocodec_registry::decode_raw_proto_msg(any)?;
    decoded_stargate_msg_to_cw(decoded)
}

// ─── Stargate passthrough ─────────────────────────────────────────────────────

/// Encode a decoded passthrough message into the base64 form CosmWasm
/// persists, resolving any date-tagged strings first.
pub fn make_stargate_msg(decoded: &DecodedStargateMsg) -> Result<StargateMsg, TranscodeError> {
    let prepared = prepare_proto_json(decoded.stargate.value.clone());
    let bytes = encode_proto_value(&decoded.stargate.type_url, &prepared)?;
    Ok(StargateMsg {
        type_url: decoded.stargate.type_url.clone(),
        value: BASE64.encode(bytes),
    })
}

/// Decode a persisted passthrough message's payload to JSON.
pub fn decode_stargate_msg(msg: &StargateMsg) -> Result<DecodedStargateMsg, TranscodeError> {
    let value = decode_proto_value(&msg.type_url, msg.value.as_str())?;
    Ok(DecodedStargateMsg {
        stargate: DecodedAny {
            type_url: msg.type_url.clone(),
            value,
        },
    })
}

/// Whether an untyped JSON value has the decoded-stargate shape.
pub fn is_decoded_stargate_msg(value: &Value) -> bool {
    let shape = Structure::object([(
        "stargate",
        Structure::object([("typeUrl", Structure::Exists), ("value", Structure::Exists)]),
    )]);
    object_matches_structure(value, &shape)
        && value["stargate"]["value"].is_object()
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn parse<M: DeserializeOwned>(value: Value) -> Result<M, TranscodeError> {
    serde_json::from_value(value)
        .map_err(|e| TranscodeError::malformed(format!("wire value does not fit schema: {e}")))
}

fn require_amount(amount: Option<Coin>) -> Result<Coin, TranscodeError> {
    amount.ok_or_else(|| TranscodeError::malformed("staking message without an amount"))
}

/// Proto3 encodes an absent admin as the empty string.
fn optional_addr(addr: String) -> Option<String> {
    if addr.is_empty() {
        None
    } else {
        Some(addr)
    }
}

/// Base64-decode an opaque canonical payload (wasm `msg` / `salt`).
fn decode_payload(payload: &str) -> Result<Vec<u8>, TranscodeError> {
    BASE64
        .decode(payload)
        .map_err(|e| TranscodeError::malformed(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bank_send_forward() {
        let msg = CosmosMsg::Bank(BankMsg::Send {
            to_address: "addr1".into(),
            amount: vec![Coin::new("100", "utoken")],
        });
        let eo = cw_msg_to_encode_object(&msg, "addrX").unwrap();
        assert_eq!(eo.type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(
            eo.value,
            json!({
                "fromAddress": "addrX",
                "toAddress": "addr1",
                "amount": [{ "denom": "utoken", "amount": "100" }]
            })
        );
    }

    #[test]
    fn bank_burn_unsupported() {
        let msg = CosmosMsg::Bank(BankMsg::Burn {
            amount: vec![Coin::new("1", "utoken")],
        });
        let err = cw_msg_to_encode_object(&msg, "addrX").unwrap_err();
        assert!(matches!(
            err,
            TranscodeError::UnsupportedMessage { module: "bank" }
        ));
    }

    #[test]
    fn custom_unsupported() {
        let err = cw_msg_to_encode_object(&CosmosMsg::Custom(json!({})), "addrX").unwrap_err();
        assert!(matches!(
            err,
            TranscodeError::UnsupportedMessage { module: "custom" }
        ));
    }

    #[test]
    fn redelegate_field_renames() {
        let msg = CosmosMsg::Staking(StakingMsg::Redelegate {
            src_validator: "valA".into(),
            dst_validator: "valB".into(),
            amount: Coin::new("5", "utoken"),
        });
        let eo = cw_msg_to_encode_object(&msg, "addrX").unwrap();
        assert_eq!(eo.value["validatorSrcAddress"], "valA");
        assert_eq!(eo.value["validatorDstAddress"], "valB");
    }

    #[test]
    fn wasm_execute_decodes_payload() {
        let msg = CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: "juno1contract".into(),
            msg: "eyJjbGFpbSI6e319".into(),
            funds: vec![],
        });
        let eo = cw_msg_to_encode_object(&msg, "addrX").unwrap();
        // Payload is re-encoded as base64 in the proto3-JSON value.
        assert_eq!(eo.value["msg"], "eyJjbGFpbSI6e319");
        assert_eq!(eo.value["sender"], "addrX");
    }

    #[test]
    fn wasm_bad_base64_is_malformed() {
        let msg = CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: "juno1contract".into(),
            msg: "not base64!".into(),
            funds: vec![],
        });
        let err = cw_msg_to_encode_object(&msg, "addrX").unwrap_err();
        assert!(matches!(err, TranscodeError::MalformedMessage { .. }));
    }

    #[test]
    fn gov_vote_remaps_enum() {
        let msg = CosmosMsg::Gov(GovMsg::Vote {
            proposal_id: 12,
            vote: daocodec_core::VoteOption::NoWithVeto,
        });
        let eo = cw_msg_to_encode_object(&msg, "addrX").unwrap();
        assert_eq!(eo.value["proposalId"], "12");
        assert_eq!(eo.value["voter"], "addrX");
        assert_eq!(eo.value["option"], 4);
    }

    #[test]
    fn reverse_recovers_sender() {
        let decoded = DecodedAny::new(
            "/cosmos.staking.v1beta1.MsgDelegate",
            json!({
                "delegatorAddress": "addrX",
                "validatorAddress": "val1",
                "amount": { "denom": "utoken", "amount": "500" }
            }),
        );
        let out = decoded_stargate_msg_to_cw(decoded).unwrap();
        assert_eq!(out.sender, "addrX");
        assert_eq!(
            out.msg,
            CosmosMsg::Staking(StakingMsg::Delegate {
                validator: "val1".into(),
                amount: Coin::new("500", "utoken"),
            })
        );
    }

    #[test]
    fn reverse_unknown_type_is_passthrough() {
        let decoded = DecodedAny::new(
            "/google.protobuf.Timestamp",
            json!("2023-11-14T22:13:20Z"),
        );
        let out = decoded_stargate_msg_to_cw(decoded).unwrap();
        assert!(matches!(out.msg, CosmosMsg::Stargate(_)));
        assert_eq!(out.sender, "");
    }

    #[test]
    fn reverse_malformed_value_rejected() {
        let decoded = DecodedAny::new(
            "/cosmos.bank.v1beta1.MsgSend",
            json!({ "fromAddress": 3, "toAddress": [], "amount": "x" }),
        );
        let err = decoded_stargate_msg_to_cw(decoded).unwrap_err();
        assert!(matches!(err, TranscodeError::MalformedMessage { .. }));
    }

    #[test]
    fn stargate_msg_roundtrip() {
        // A registered but non-canonical type: IBC transfer.
        let decoded = DecodedStargateMsg {
            stargate: DecodedAny::new(
                "/ibc.applications.transfer.v1.MsgTransfer",
                json!({
                    "sourcePort": "transfer",
                    "sourceChannel": "channel-0",
                    "token": { "denom": "ujuno", "amount": "1000" },
                    "sender": "juno1sender",
                    "receiver": "osmo1receiver",
                    "timeoutHeight": { "revisionNumber": "1", "revisionHeight": "9000000" },
                    "timeoutTimestamp": "0",
                    "memo": ""
                }),
            ),
        };
        let stargate = make_stargate_msg(&decoded).unwrap();
        let back = decode_stargate_msg(&stargate).unwrap();
        assert_eq!(back, decoded);
    }

    #[test]
    fn decoded_stargate_shape_check() {
        assert!(is_decoded_stargate_msg(&json!({
            "stargate": { "typeUrl": "/a.B", "value": {} }
        })));
        assert!(!is_decoded_stargate_msg(&json!({
            "stargate": { "typeUrl": "/a.B", "value": "CgE=" }
        })));
        assert!(!is_decoded_stargate_msg(&json!({ "stargate": {} })));
        assert!(!is_decoded_stargate_msg(&json!(null)));
    }
}
