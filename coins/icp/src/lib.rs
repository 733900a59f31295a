//! # WalletD ICP
//!
//! Internet Computer ledger account identifiers for the WalletD SDK.
//!
//! The ledger does not index balances by principal. It indexes them by a
//! 32-byte account identifier derived from the principal and a sub-account.
//! This crate derives that identifier, renders and parses its hex form, and
//! builds the Candid envelope of the ledger's `account_balance` query.
//!
//! ## Example
//!
//! ```rust
//! use walletd_icp::{derive_account_id, to_hex};
//!
//! // Anonymous principal, default sub-account
//! let account = derive_account_id(&[0x04], None).unwrap();
//! assert_eq!(
//!     to_hex(account),
//!     "1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79"
//! );
//! ```
//!
//! ## Principal policy
//!
//! Derivation accepts principal bytes of any length by default. Use
//! [`AccountIdDeriver`] with [`PrincipalPolicy::strict`] to reject the empty
//! principal and over-long encodings.

#![forbid(unsafe_code)]

pub mod account_id;
pub mod config;
pub mod error;
pub mod ledger;
pub mod policy;

pub use account_id::{
    derive_account_id, parse_principal, to_hex, AccountIdDeriver, AccountIdentifier, Subaccount,
    ACCOUNT_ID_LEN, DOMAIN_SEPARATOR, SUBACCOUNT_LEN,
};
pub use config::{AccountConfig, IcpNetworkConfig};
pub use error::{IcpAccountError, Result};
pub use ledger::{AccountBalanceArgs, Tokens, E8S_PER_ICP, LEDGER_CANISTER_ID};
pub use policy::{PrincipalPolicy, MAX_PRINCIPAL_LEN};

// Re-export the principal type callers hand in
pub use candid::Principal;
