//! secp256k1 key pairs and Ethereum-style address derivation.
//!
//! The token itself never signs anything; key pairs exist for signers
//! (wallets, relayers, tests) producing permits the token verifies.

use alloy_primitives::{Address, B256};
use isft_types::PermitSignature;
use k256::ecdsa::{SigningKey, VerifyingKey};
use thiserror::Error;

use crate::hash::keccak256;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("secret key is zero or not below the curve order")]
    InvalidSecret,

    #[error("signing failed: {0}")]
    Signing(String),
}

/// A secp256k1 signing key together with its address.
///
/// Intentionally not `Debug` or `Clone` to avoid leaking the secret; the inner
/// key is zeroized on drop.
pub struct KeyPair {
    signing: SigningKey,
    address: Address,
}

impl KeyPair {
    /// Build a key pair from a raw 32-byte secret scalar.
    pub fn from_secret(secret: &[u8; 32]) -> Result<Self, KeyError> {
        let signing = SigningKey::from_slice(secret).map_err(|_| KeyError::InvalidSecret)?;
        let address = address_from_verifying_key(signing.verifying_key());
        Ok(Self { signing, address })
    }

    /// Deterministically derive a key pair from an arbitrary seed.
    ///
    /// The seed is hashed until it lands on a valid scalar; in practice the
    /// first hash always does.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut candidate = keccak256(seed);
        loop {
            if let Ok(kp) = Self::from_secret(&candidate.0) {
                return kp;
            }
            candidate = keccak256(candidate.as_slice());
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a 32-byte digest, producing a low-`s` signature with `v` of 27/28.
    pub fn sign_digest(&self, digest: &B256) -> Result<PermitSignature, KeyError> {
        let (signature, recovery_id) = self
            .signing
            .sign_prehash_recoverable(digest.as_slice())
            .map_err(|e| KeyError::Signing(e.to_string()))?;
        let bytes = signature.to_bytes();
        Ok(PermitSignature::new(
            27 + recovery_id.to_byte(),
            B256::from_slice(&bytes[..32]),
            B256::from_slice(&bytes[32..]),
        ))
    }
}

/// The address of a public key: the last 20 bytes of the Keccak-256 hash of
/// the uncompressed point without its `0x04` prefix.
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_key_derives_well_known_address() {
        // The first default hardhat/anvil account.
        let secret: B256 = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            .parse()
            .unwrap();
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        let kp = KeyPair::from_secret(&secret.0).unwrap();
        assert_eq!(kp.address(), expected);
    }

    #[test]
    fn seed_derivation_deterministic() {
        assert_eq!(KeyPair::from_seed(b"alice").address(), KeyPair::from_seed(b"alice").address());
        assert_ne!(KeyPair::from_seed(b"alice").address(), KeyPair::from_seed(b"bob").address());
    }

    #[test]
    fn zero_secret_rejected() {
        assert!(matches!(
            KeyPair::from_secret(&[0u8; 32]),
            Err(KeyError::InvalidSecret)
        ));
    }

    #[test]
    fn signatures_are_low_s_with_eth_recovery_byte() {
        let kp = KeyPair::from_seed(b"signer");
        for i in 0u8..8 {
            let sig = kp.sign_digest(&keccak256(&[i])).unwrap();
            assert!(sig.v == 27 || sig.v == 28);
            assert_eq!(sig.s.0[0] & 0x80, 0);
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let kp = KeyPair::from_seed(b"signer");
        let digest = keccak256(b"message");
        assert_eq!(kp.sign_digest(&digest).unwrap(), kp.sign_digest(&digest).unwrap());
    }
}
