//! Gasless approvals authorised by an owner's signature over an EIP-712
//! `Permit` message.

pub mod authorizer;
pub mod error;

pub use authorizer::PermitAuthorizer;
pub use error::PermitError;
