//! Keccak-256 hashing.

use alloy_primitives::{Keccak256, B256};

/// Compute the Keccak-256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> B256 {
    alloy_primitives::keccak256(data)
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> B256 {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_empty_input() {
        // Well-known Keccak-256 of the empty string.
        let expected: B256 = "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
            .parse()
            .unwrap();
        assert_eq!(keccak256(b""), expected);
    }

    #[test]
    fn keccak_deterministic() {
        assert_eq!(keccak256(b"isft"), keccak256(b"isft"));
        assert_ne!(keccak256(b"isft"), keccak256(b"ISFT"));
    }

    #[test]
    fn keccak_multi_equivalent() {
        let single = keccak256(b"helloworld");
        let multi = keccak256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }
}
