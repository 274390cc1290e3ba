//! Cryptographic primitives for ISFT permits.
//!
//! - **Keccak-256** for every hash in the typed-data scheme
//! - **EIP-712** domain separator, `Permit` struct hash and signing digest
//! - **secp256k1 ECDSA** public-key recovery (the `ecrecover` primitive)
//! - Key pairs and address derivation for signers

pub mod ecdsa;
pub mod eip712;
pub mod hash;
pub mod keys;

pub use ecdsa::{recover_signer, SignatureError, SECP256K1N_HALF};
pub use eip712::{typed_data_digest, Eip712Domain, PermitMessage, DOMAIN_TYPE, PERMIT_TYPE};
pub use hash::{keccak256, keccak256_multi};
pub use keys::{address_from_verifying_key, KeyError, KeyPair};
