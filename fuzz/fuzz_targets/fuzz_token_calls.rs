#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use isft_nullables::NullNativeBank;
use isft_token::{Address, CallContext, Isft, Timestamp, TokenConfig, U256};

#[derive(Arbitrary, Debug)]
enum Call {
    Transfer { sender: u8, to: u8, amount: u64 },
    Approve { sender: u8, spender: u8, amount: u64 },
    TransferFrom { sender: u8, owner: u8, to: u8, amount: u64 },
    Fund { amount: u64 },
    Refuse { who: u8 },
}

fn account(n: u8) -> Address {
    Address::with_last_byte(n % 8)
}

// Arbitrary call sequences must keep the supply conserved and never panic.
fuzz_target!(|calls: Vec<Call>| {
    let config = TokenConfig {
        decimals: 0,
        initial_supply: 1_000_000,
        rebate_amount_wei: 3,
        ..TokenConfig::default()
    };
    let mut bank = NullNativeBank::new();
    for call in &calls {
        if let Call::Refuse { who } = call {
            bank.refuse(account(*who));
        }
    }
    let Ok(mut token) = Isft::deploy(&config, account(1), Address::with_last_byte(0xC0), bank) else {
        return;
    };

    for (i, call) in calls.iter().enumerate() {
        let ctx = |n: u8| CallContext::new(account(n), Timestamp::new(i as u64));
        let _ = match *call {
            Call::Transfer { sender, to, amount } => {
                token.transfer(&ctx(sender), account(to), U256::from(amount))
            }
            Call::Approve { sender, spender, amount } => {
                token.approve(&ctx(sender), account(spender), U256::from(amount))
            }
            Call::TransferFrom { sender, owner, to, amount } => {
                token.transfer_from(&ctx(sender), account(owner), account(to), U256::from(amount))
            }
            Call::Fund { amount } => token.fund(&ctx(1), U256::from(amount)),
            Call::Refuse { .. } => continue,
        };
    }

    let snap = token.snapshot();
    assert!(snap.verify());
    assert_eq!(snap.total_supply, token.total_supply());
});
