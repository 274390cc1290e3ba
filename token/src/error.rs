use isft_ledger::LedgerError;
use isft_permit::PermitError;
use isft_rebate::RebateError;
use isft_types::{Address, Timestamp, U256};
use thiserror::Error;

use crate::config::ConfigError;

/// Every way a token call can fail. A failed call changes nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: U256, available: U256 },

    #[error("transfer to the zero address")]
    TransferToZeroAddress,

    #[error("approve to the zero address")]
    ApproveToZeroAddress,

    #[error("insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: U256, available: U256 },

    #[error("permit expired: deadline {deadline}, now {now}")]
    ExpiredDeadline { deadline: U256, now: Timestamp },

    #[error("invalid signature")]
    InvalidSignature,

    #[error("rebate payout to {recipient} failed: {reason}")]
    RebatePayoutFailed { recipient: Address, reason: String },

    #[error("native pool would exceed 2^256 - 1")]
    NativePoolOverflow,

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<LedgerError> for TokenError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::InsufficientBalance { needed, available } => {
                TokenError::InsufficientBalance { needed, available }
            }
            LedgerError::TransferToZeroAddress => TokenError::TransferToZeroAddress,
            LedgerError::ApproveToZeroAddress => TokenError::ApproveToZeroAddress,
            LedgerError::InsufficientAllowance { needed, available } => {
                TokenError::InsufficientAllowance { needed, available }
            }
            LedgerError::Snapshot(msg) => TokenError::Snapshot(msg),
        }
    }
}

impl From<PermitError> for TokenError {
    fn from(e: PermitError) -> Self {
        match e {
            PermitError::ExpiredDeadline { deadline, now } => {
                TokenError::ExpiredDeadline { deadline, now }
            }
            PermitError::InvalidSignature => TokenError::InvalidSignature,
            PermitError::Ledger(inner) => inner.into(),
        }
    }
}

impl From<RebateError> for TokenError {
    fn from(e: RebateError) -> Self {
        match e {
            RebateError::PayoutFailed { recipient, reason } => {
                TokenError::RebatePayoutFailed { recipient, reason }
            }
            RebateError::PoolOverflow => TokenError::NativePoolOverflow,
        }
    }
}
