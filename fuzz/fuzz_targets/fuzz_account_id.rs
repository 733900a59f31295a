#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use walletd_icp::{derive_account_id, AccountIdentifier, IcpAccountError};

#[derive(Debug, Arbitrary)]
struct DeriveInput {
    principal: Vec<u8>,
    subaccount: Option<Vec<u8>>,
}

fuzz_target!(|input: DeriveInput| {
    match derive_account_id(&input.principal, input.subaccount.as_deref()) {
        Ok(account) => {
            assert_eq!(account.as_bytes().len(), 32);

            // Derived ids always carry a valid checksum
            let reparsed = AccountIdentifier::from_hex(&account.to_hex()).unwrap();
            assert_eq!(reparsed, account);

            if input.subaccount.is_none() {
                let explicit = derive_account_id(&input.principal, Some(&[0u8; 32])).unwrap();
                assert_eq!(explicit, account);
            }
        }
        Err(IcpAccountError::InvalidSubAccountLength { len }) => {
            assert_ne!(len, 32);
            assert_eq!(input.subaccount.map(|s| s.len()), Some(len));
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
