//! Fundamental types for the ISFT token.
//!
//! This crate defines the vocabulary shared by every other crate in the workspace:
//! amounts, timestamps, chain identifiers, permit signatures, token metadata and
//! the audit events a token emits. Addresses and 256-bit integers come straight
//! from `alloy-primitives` and are re-exported here.

pub mod amount;
pub mod chain;
pub mod event;
pub mod metadata;
pub mod signature;
pub mod time;

pub use alloy_primitives::{Address, B256, U256};
pub use amount::{parse_units, NATIVE_UNIT};
pub use chain::ChainId;
pub use event::{Approval, GasRebate, TokenEvent, Transfer};
pub use metadata::{TokenMetadata, PERMIT_VERSION};
pub use signature::{PermitSignature, SignatureLengthError};
pub use time::Timestamp;
