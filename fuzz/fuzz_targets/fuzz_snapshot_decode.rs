#![no_main]

use libfuzzer_sys::fuzz_target;

use isft_ledger::LedgerSnapshot;

// Snapshot bytes come from disk and may be corrupt: decoding and verifying
// must never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(snap) = LedgerSnapshot::from_bytes(data) {
        let _ = snap.verify();
        let _ = snap.account_count();
    }
});
