//! The seam through which native currency leaves the contract.

use isft_types::{Address, U256};
use thiserror::Error;

/// The recipient refused or could not accept a native payment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct NativeTransferError(pub String);

impl NativeTransferError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Sends native currency out of the contract's balance.
///
/// Implementations either deliver the full amount or return an error and
/// deliver nothing.
pub trait NativeTransfer {
    fn send_value(&mut self, to: Address, amount: U256) -> Result<(), NativeTransferError>;
}

impl<T: NativeTransfer + ?Sized> NativeTransfer for &mut T {
    fn send_value(&mut self, to: Address, amount: U256) -> Result<(), NativeTransferError> {
        (**self).send_value(to, amount)
    }
}

impl<T: NativeTransfer + ?Sized> NativeTransfer for Box<T> {
    fn send_value(&mut self, to: Address, amount: U256) -> Result<(), NativeTransferError> {
        (**self).send_value(to, amount)
    }
}
