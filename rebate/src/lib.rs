//! One-time gas rebates.
//!
//! The contract holds a pool of native currency. The first time an address
//! sends tokens while the pool can cover it, that address is paid a fixed
//! rebate; it never qualifies again.

pub mod dispenser;
pub mod error;
pub mod native;

pub use dispenser::{RebateDispenser, DEFAULT_REBATE_WEI};
pub use error::RebateError;
pub use native::{NativeTransfer, NativeTransferError};
