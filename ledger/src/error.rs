use isft_types::U256;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: U256, available: U256 },

    #[error("transfer to the zero address")]
    TransferToZeroAddress,

    #[error("approve to the zero address")]
    ApproveToZeroAddress,

    #[error("insufficient allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: U256, available: U256 },

    #[error("snapshot error: {0}")]
    Snapshot(String),
}
