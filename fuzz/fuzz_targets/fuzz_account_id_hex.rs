#![no_main]

use libfuzzer_sys::fuzz_target;
use walletd_icp::AccountIdentifier;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary text must never panic
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(account) = AccountIdentifier::from_hex(s) {
            assert_eq!(account.to_hex(), s.to_ascii_lowercase());
        }
    }

    // Raw 32-byte inputs either verify or report a checksum mismatch
    if let Ok(account) = AccountIdentifier::try_from(data) {
        assert_eq!(account.as_ref(), data);
        assert_eq!(hex::decode(account.to_hex()).unwrap(), data);
    }
});
