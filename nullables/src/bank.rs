//! Nullable bank: records native payouts instead of moving real value.

use std::collections::{HashMap, HashSet};

use isft_rebate::{NativeTransfer, NativeTransferError};
use isft_types::{Address, U256};

/// Records every native payment and can be told to refuse some recipients,
/// the way a contract without a payable fallback would.
#[derive(Debug, Default)]
pub struct NullNativeBank {
    payouts: Vec<(Address, U256)>,
    received: HashMap<Address, U256>,
    refusing: HashSet<Address>,
}

impl NullNativeBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make payments to `recipient` fail from now on.
    pub fn refuse(&mut self, recipient: Address) {
        self.refusing.insert(recipient);
    }

    /// Builder form of [`NullNativeBank::refuse`].
    pub fn refusing(mut self, recipient: Address) -> Self {
        self.refuse(recipient);
        self
    }

    /// All successful payments in order.
    pub fn payouts(&self) -> &[(Address, U256)] {
        &self.payouts
    }

    /// Total native currency paid to `recipient`.
    pub fn received(&self, recipient: &Address) -> U256 {
        self.received.get(recipient).copied().unwrap_or(U256::ZERO)
    }

    pub fn reset(&mut self) {
        self.payouts.clear();
        self.received.clear();
        self.refusing.clear();
    }
}

impl NativeTransfer for NullNativeBank {
    fn send_value(&mut self, to: Address, amount: U256) -> Result<(), NativeTransferError> {
        if self.refusing.contains(&to) {
            return Err(NativeTransferError::new(format!("{to} refuses native transfers")));
        }
        self.payouts.push((to, amount));
        let total = self.received.entry(to).or_insert(U256::ZERO);
        *total = total.saturating_add(amount);
        Ok(())
    }
}
