//! Balances, allowances and the transfer/approve primitives.
//!
//! Every mutating method validates first and writes last, so an `Err` return
//! always means the ledger is exactly as it was before the call.

use std::collections::HashMap;

use isft_types::{Address, Approval, Transfer, U256};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// The balance/allowance state of the token.
///
/// Zero balances and zero allowances are not stored, so two ledgers with the
/// same observable state compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    total_supply: U256,
}

impl Ledger {
    /// An empty ledger with zero supply. Use [`crate::create_genesis`] to
    /// mint the initial supply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `supply` to `holder` as the one and only mint.
    pub(crate) fn mint_genesis(holder: Address, supply: U256) -> Self {
        let mut ledger = Self::new();
        ledger.set_balance(holder, supply);
        ledger.total_supply = supply;
        ledger
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or(U256::ZERO)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(U256::ZERO)
    }

    /// Every account holding a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Sum of all balances, or `None` if it would not fit in 256 bits.
    pub fn sum_of_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::ZERO, |acc, balance| acc.checked_add(*balance))
    }

    /// Move `amount` from `from` to `to`.
    pub fn transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<Transfer, LedgerError> {
        if to.is_zero() {
            return Err(LedgerError::TransferToZeroAddress);
        }
        let available = self.balance_of(&from);
        let remaining = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            })?;

        if from != to {
            // Bounded by total supply, which the genesis mint fixed.
            let credited = self.balance_of(&to).saturating_add(amount);
            self.set_balance(from, remaining);
            self.set_balance(to, credited);
        }

        tracing::trace!(%from, %to, %amount, "ledger transfer");
        Ok(Transfer {
            from,
            to,
            value: amount,
        })
    }

    /// Overwrite the allowance of `spender` over `owner`'s tokens.
    pub fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<Approval, LedgerError> {
        if spender.is_zero() {
            return Err(LedgerError::ApproveToZeroAddress);
        }
        self.set_allowance(owner, spender, amount);

        tracing::trace!(%owner, %spender, %amount, "ledger approve");
        Ok(Approval {
            owner,
            spender,
            value: amount,
        })
    }

    /// Move `amount` of `owner`'s tokens to `to` on behalf of `spender`,
    /// consuming that much allowance.
    ///
    /// Returns the transfer and the approval record carrying the remaining
    /// allowance.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<(Transfer, Approval), LedgerError> {
        let allowed = self.allowance(&owner, &spender);
        let remaining = allowed
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientAllowance {
                needed: amount,
                available: allowed,
            })?;

        let transfer = self.transfer(owner, to, amount)?;
        self.set_allowance(owner, spender, remaining);

        Ok((
            transfer,
            Approval {
                owner,
                spender,
                value: remaining,
            },
        ))
    }

    fn set_balance(&mut self, account: Address, balance: U256) {
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
    }
}
