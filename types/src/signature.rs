//! Permit signature: the `(v, r, s)` triple of a secp256k1 ECDSA signature.
//!
//! Decoding only checks lengths. Whether the components describe a valid
//! signature is decided by recovery in `isft-crypto`.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when raw signature bytes are neither 64 nor 65 bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("signature must be 64 or 65 bytes, got {0}")]
pub struct SignatureLengthError(pub usize);

/// A recoverable ECDSA signature over a permit digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermitSignature {
    /// Recovery byte, 27 or 28 for a well-formed signature.
    pub v: u8,
    pub r: B256,
    pub s: B256,
}

impl PermitSignature {
    pub const fn new(v: u8, r: B256, s: B256) -> Self {
        Self { v, r, s }
    }

    /// Decode either the 65-byte `r ‖ s ‖ v` form or the 64-byte EIP-2098
    /// compact form `r ‖ vs`, where the top bit of `vs` is the y-parity.
    ///
    /// A trailing `v` of 0 or 1 is normalised to 27 or 28.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureLengthError> {
        match bytes.len() {
            65 => {
                let r = B256::from_slice(&bytes[..32]);
                let s = B256::from_slice(&bytes[32..64]);
                let v = match bytes[64] {
                    v @ (0 | 1) => v + 27,
                    v => v,
                };
                Ok(Self { v, r, s })
            }
            64 => {
                let r = B256::from_slice(&bytes[..32]);
                let mut s = B256::from_slice(&bytes[32..]);
                let parity = s.0[0] >> 7;
                s.0[0] &= 0x7f;
                Ok(Self { v: 27 + parity, r, s })
            }
            len => Err(SignatureLengthError(len)),
        }
    }

    /// The 65-byte `r ‖ s ‖ v` encoding.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = self.v;
        out
    }

    /// The 64-byte EIP-2098 encoding, or `None` when `v` is not 27/28 or the
    /// top bit of `s` is already set (no room for the parity bit).
    pub fn to_compact(&self) -> Option<[u8; 64]> {
        let parity = match self.v {
            27 => 0u8,
            28 => 1u8,
            _ => return None,
        };
        if self.s.0[0] & 0x80 != 0 {
            return None;
        }
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(self.r.as_slice());
        out[32..].copy_from_slice(self.s.as_slice());
        out[32] |= parity << 7;
        Some(out)
    }
}
