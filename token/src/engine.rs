//! Token movements and the gas rebate they can trigger.

use isft_ledger::Ledger;
use isft_rebate::{NativeTransfer, RebateDispenser};
use isft_types::{Address, TokenEvent, U256};

use crate::error::TokenError;

/// Runs `transfer` / `transferFrom` against the ledger and pays the caller's
/// rebate once the token movement has succeeded.
///
/// The engine does not restore state itself: the ledger leaves no trace on
/// failure, and a failed payout is rolled back by the caller of the engine.
pub struct TransferEngine<'a, N: ?Sized> {
    ledger: &'a mut Ledger,
    rebates: &'a mut RebateDispenser,
    bank: &'a mut N,
}

impl<'a, N: NativeTransfer + ?Sized> TransferEngine<'a, N> {
    pub fn new(ledger: &'a mut Ledger, rebates: &'a mut RebateDispenser, bank: &'a mut N) -> Self {
        Self {
            ledger,
            rebates,
            bank,
        }
    }

    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<Vec<TokenEvent>, TokenError> {
        let transfer = self.ledger.transfer(caller, to, amount)?;
        let mut events = vec![TokenEvent::from(transfer)];
        self.rebate(caller, &mut events)?;
        Ok(events)
    }

    pub fn transfer_from(
        &mut self,
        caller: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<Vec<TokenEvent>, TokenError> {
        let (transfer, approval) = self.ledger.transfer_from(caller, owner, to, amount)?;
        let mut events = vec![TokenEvent::from(transfer), TokenEvent::from(approval)];
        self.rebate(caller, &mut events)?;
        Ok(events)
    }

    fn rebate(&mut self, beneficiary: Address, events: &mut Vec<TokenEvent>) -> Result<(), TokenError> {
        if let Some(rebate) = self.rebates.dispense(beneficiary, &mut *self.bank)? {
            events.push(rebate.into());
        }
        Ok(())
    }
}
