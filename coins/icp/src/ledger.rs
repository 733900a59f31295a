//! Request and response shapes for the ledger's `account_balance` query.
//!
//! Only the Candid envelope lives here. Sending the query is left to whatever
//! agent the caller already holds.

use core::fmt;

use candid::{CandidType, Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::account_id::AccountIdentifier;
use crate::error::Result;

/// Mainnet ICP ledger canister.
pub const LEDGER_CANISTER_ID: &str = "ryjl3-tyaaa-aaaaa-aaaba-cai";

/// Ledger id the browser front-end was configured with.
pub const LEGACY_LEDGER_CANISTER_ID: &str = "rrkah-fqaaa-aaaaa-aaaaq-cai";

/// Name of the balance query method on the ledger canister.
pub const ACCOUNT_BALANCE_METHOD: &str = "account_balance";

pub const E8S_PER_ICP: u64 = 100_000_000;

/// Argument of `account_balance`: `record { account : blob }`.
#[derive(Debug, Clone, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct AccountBalanceArgs {
    pub account: Vec<u8>,
}

impl AccountBalanceArgs {
    pub fn new(account: &AccountIdentifier) -> Self {
        Self {
            account: account.to_vec(),
        }
    }

    /// Candid-encodes the argument for an `account_balance` call.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let bytes = Encode!(self)?;
        tracing::debug!(len = bytes.len(), "encoded account_balance argument");
        Ok(bytes)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(Decode!(bytes, AccountBalanceArgs)?)
    }
}

/// Token amount in e8s, as returned by `account_balance`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, CandidType, Serialize, Deserialize,
)]
pub struct Tokens {
    pub e8s: u64,
}

impl Tokens {
    pub const ZERO: Tokens = Tokens { e8s: 0 };

    pub fn from_e8s(e8s: u64) -> Self {
        Self { e8s }
    }

    pub fn e8s(&self) -> u64 {
        self.e8s
    }

    /// Whole-token amount, for display.
    pub fn as_icp(&self) -> f64 {
        self.e8s as f64 / E8S_PER_ICP as f64
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(Encode!(self)?)
    }

    /// Decodes an `account_balance` reply.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let tokens = Decode!(bytes, Tokens)?;
        tracing::debug!(e8s = tokens.e8s, "decoded account_balance reply");
        Ok(tokens)
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{:08} ICP", self.e8s / E8S_PER_ICP, self.e8s % E8S_PER_ICP)
    }
}
