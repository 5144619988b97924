//! The canonical contract-message union.
//!
//! This is the JSON exchange format consumed and produced by UI forms,
//! action handlers, and persisted proposal payloads. The serde shape is
//! the CosmWasm `CosmosMsg` convention — externally tagged, snake_case
//! — and the exact field names are an external interface: they must
//! stay bit-for-bit compatible with already-stored proposals.
//!
//! Exactly one top-level module tag is present per message, and exactly
//! one operation tag per module; serde's externally-tagged enum
//! representation enforces both.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::any::DecodedAny;

/// A coin: decimal-string amount plus denomination.
///
/// Doubles as the wire representation (`cosmos.base.v1beta1.Coin`) —
/// the canonical and proto3-JSON shapes coincide.
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
pub struct Coin {
    #[prost(string, tag = "1")]
    #[serde(default)]
    pub denom: String,
    #[prost(string, tag = "2")]
    #[serde(default)]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// The canonical contract-call message union, tagged by module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CosmosMsg {
    Bank(BankMsg),
    Staking(StakingMsg),
    Distribution(DistributionMsg),
    Wasm(WasmMsg),
    Gov(GovMsg),
    /// Raw wire passthrough: an arbitrary `(type_url, base64 payload)`
    /// pair. The universal fallback for message types with no dedicated
    /// canonical variant.
    Stargate(StargateMsg),
    /// Contract-defined custom message. Carried for JSON compatibility;
    /// it has no wire mapping.
    Custom(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankMsg {
    Send {
        to_address: String,
        amount: Vec<Coin>,
    },
    /// Present in the union, but the chain has no corresponding wire
    /// message — encoding fails with `UnsupportedMessage`.
    Burn { amount: Vec<Coin> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakingMsg {
    Delegate {
        validator: String,
        amount: Coin,
    },
    Undelegate {
        validator: String,
        amount: Coin,
    },
    Redelegate {
        src_validator: String,
        dst_validator: String,
        amount: Coin,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMsg {
    WithdrawDelegatorReward { validator: String },
    SetWithdrawAddress { address: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasmMsg {
    Execute {
        contract_addr: String,
        /// Base64-encoded opaque contract payload.
        msg: String,
        funds: Vec<Coin>,
    },
    Instantiate {
        admin: Option<String>,
        code_id: u64,
        label: String,
        msg: String,
        funds: Vec<Coin>,
    },
    Instantiate2 {
        admin: Option<String>,
        code_id: u64,
        label: String,
        msg: String,
        funds: Vec<Coin>,
        /// Base64-encoded address-derivation salt.
        salt: String,
        fix_msg: bool,
    },
    Migrate {
        contract_addr: String,
        new_code_id: u64,
        msg: String,
    },
    UpdateAdmin {
        admin: String,
        contract_addr: String,
    },
    ClearAdmin {
        contract_addr: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovMsg {
    Vote {
        proposal_id: u64,
        vote: VoteOption,
    },
}

/// The canonical governance vote enum, distinct from the wire enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteOption {
    Yes,
    No,
    Abstain,
    NoWithVeto,
}

/// Stargate passthrough body: base64-encoded wire payload, as CosmWasm
/// persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StargateMsg {
    pub type_url: String,
    /// Base64 of the binary-encoded payload.
    pub value: String,
}

/// A stargate message with its payload decoded to JSON for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedStargateMsg {
    pub stargate: DecodedAny,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bank_send_json_shape() {
        let msg = CosmosMsg::Bank(BankMsg::Send {
            to_address: "addr1".into(),
            amount: vec![Coin::new("100", "utoken")],
        });
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "bank": { "send": {
                "to_address": "addr1",
                "amount": [{ "denom": "utoken", "amount": "100" }]
            }}})
        );
    }

    #[test]
    fn staking_redelegate_json_shape() {
        let msg = CosmosMsg::Staking(StakingMsg::Redelegate {
            src_validator: "valA".into(),
            dst_validator: "valB".into(),
            amount: Coin::new("5", "utoken"),
        });
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "staking": { "redelegate": {
                "src_validator": "valA",
                "dst_validator": "valB",
                "amount": { "denom": "utoken", "amount": "5" }
            }}})
        );
    }

    #[test]
    fn gov_vote_json_shape() {
        let msg = CosmosMsg::Gov(GovMsg::Vote {
            proposal_id: 12,
            vote: VoteOption::NoWithVeto,
        });
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "gov": { "vote": { "proposal_id": 12, "vote": "no_with_veto" } } })
        );
    }

    #[test]
    fn stargate_json_shape() {
        let msg = CosmosMsg::Stargate(StargateMsg {
            type_url: "/a.B".into(),
            value: "CgE=".into(),
        });
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "stargate": { "type_url": "/a.B", "value": "CgE=" } })
        );
    }

    #[test]
    fn persisted_wasm_execute_deserializes() {
        let stored = json!({ "wasm": { "execute": {
            "contract_addr": "juno1contract",
            "msg": "eyJjbGFpbSI6e319",
            "funds": []
        }}});
        let msg: CosmosMsg = serde_json::from_value(stored).unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                assert_eq!(contract_addr, "juno1contract");
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
