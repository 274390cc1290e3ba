use isft_ledger::LedgerError;
use isft_types::{Timestamp, U256};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermitError {
    #[error("permit expired: deadline {deadline}, now {now}")]
    ExpiredDeadline { deadline: U256, now: Timestamp },

    #[error("invalid signature")]
    InvalidSignature,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
