//! The ISFT token contract.
//!
//! [`Isft`] owns the ledger, the permit nonces and the rebate pool, and runs
//! every public call as one unit: either all of its effects and events are
//! kept or none are.

pub mod config;
pub mod contract;
pub mod engine;
pub mod error;
pub mod events;

pub use config::{ConfigError, TokenConfig};
pub use contract::{CallContext, Isft, Receipt, OPERATIONS};
pub use engine::TransferEngine;
pub use error::TokenError;
pub use events::{EventLog, LoggedEvent};

pub use isft_rebate::{NativeTransfer, NativeTransferError};
pub use isft_types::{Address, PermitSignature, Timestamp, TokenEvent, B256, U256};
