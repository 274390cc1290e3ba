use isft_types::Address;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RebateError {
    #[error("rebate payout to {recipient} failed: {reason}")]
    PayoutFailed { recipient: Address, reason: String },

    #[error("native pool would exceed 2^256 - 1")]
    PoolOverflow,
}
