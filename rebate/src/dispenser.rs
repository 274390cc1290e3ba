use std::collections::HashSet;

use isft_types::{Address, GasRebate, U256};
use serde::{Deserialize, Serialize};

use crate::error::RebateError;
use crate::native::NativeTransfer;

/// 0.001 of the native unit (10^15 wei).
pub const DEFAULT_REBATE_WEI: u64 = 1_000_000_000_000_000;

/// Tracks the native pool and which addresses have been rebated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateDispenser {
    claimed: HashSet<Address>,
    pool: U256,
    amount: U256,
    paid: u64,
}

impl RebateDispenser {
    /// A dispenser paying `amount` per address. Zero disables rebates.
    pub fn new(amount: U256) -> Self {
        Self {
            amount,
            ..Self::default()
        }
    }

    pub fn rebate_amount(&self) -> U256 {
        self.amount
    }

    /// Native currency currently held for rebates.
    pub fn pool(&self) -> U256 {
        self.pool
    }

    pub fn is_claimed(&self, address: &Address) -> bool {
        self.claimed.contains(address)
    }

    pub fn rebates_paid(&self) -> u64 {
        self.paid
    }

    /// Add `amount` to the pool and return the new pool size.
    pub fn fund(&mut self, amount: U256) -> Result<U256, RebateError> {
        self.pool = self
            .pool
            .checked_add(amount)
            .ok_or(RebateError::PoolOverflow)?;
        Ok(self.pool)
    }

    /// Pay the one-time rebate to `beneficiary` if it qualifies.
    ///
    /// Returns `Ok(None)` when the address was already rebated, the pool is
    /// short or rebates are disabled. The claim is recorded before the value
    /// is sent; if sending fails the claim and the pool are restored.
    pub fn dispense<N: NativeTransfer + ?Sized>(
        &mut self,
        beneficiary: Address,
        bank: &mut N,
    ) -> Result<Option<GasRebate>, RebateError> {
        if self.amount.is_zero() || self.claimed.contains(&beneficiary) {
            return Ok(None);
        }
        if self.pool < self.amount {
            tracing::debug!(
                %beneficiary,
                pool = %self.pool,
                amount = %self.amount,
                "rebate skipped, pool too small"
            );
            return Ok(None);
        }

        self.claimed.insert(beneficiary);
        self.pool -= self.amount;

        if let Err(e) = bank.send_value(beneficiary, self.amount) {
            self.claimed.remove(&beneficiary);
            self.pool += self.amount;
            return Err(RebateError::PayoutFailed {
                recipient: beneficiary,
                reason: e.to_string(),
            });
        }

        self.paid += 1;
        tracing::info!(%beneficiary, amount = %self.amount, pool = %self.pool, "gas rebate paid");
        Ok(Some(GasRebate {
            recipient: beneficiary,
            amount: self.amount,
        }))
    }
}
