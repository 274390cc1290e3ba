#![no_main]

use libfuzzer_sys::fuzz_target;

use isft_crypto::recover_signer;
use isft_types::{PermitSignature, B256};

// Decode and recover arbitrary signature bytes against an arbitrary digest.
// Neither step may panic; a decoded signature must re-encode to its input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let digest = B256::from_slice(&data[..32]);
    let rest = &data[32..];

    let Ok(sig) = PermitSignature::from_bytes(rest) else {
        return;
    };
    let _ = recover_signer(&digest, &sig);

    if rest.len() == 65 && (rest[64] == 27 || rest[64] == 28) {
        assert_eq!(&sig.to_bytes()[..], rest);
    }
});
