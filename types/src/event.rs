//! Audit events emitted by the token.
//!
//! Events are append-only records: once a call commits, its events are never
//! retracted. Observers reconstruct ledger history from them.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Tokens moved from `from` to `to`. Mint records use the null `from`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

/// `spender` may now move `value` of `owner`'s tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
}

/// One-shot native-currency rebate paid to `recipient`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasRebate {
    pub recipient: Address,
    pub amount: U256,
}

/// Any event the token can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    Transfer(Transfer),
    Approval(Approval),
    GasRebate(GasRebate),
}

impl TokenEvent {
    /// Event name as it appears in the contract ABI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "Transfer",
            Self::Approval(_) => "Approval",
            Self::GasRebate(_) => "GasRebate",
        }
    }

    pub fn as_transfer(&self) -> Option<&Transfer> {
        match self {
            Self::Transfer(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_approval(&self) -> Option<&Approval> {
        match self {
            Self::Approval(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_gas_rebate(&self) -> Option<&GasRebate> {
        match self {
            Self::GasRebate(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Transfer> for TokenEvent {
    fn from(event: Transfer) -> Self {
        Self::Transfer(event)
    }
}

impl From<Approval> for TokenEvent {
    fn from(event: Approval) -> Self {
        Self::Approval(event)
    }
}

impl From<GasRebate> for TokenEvent {
    fn from(event: GasRebate) -> Self {
        Self::GasRebate(event)
    }
}
