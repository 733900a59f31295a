//! Ledger account identifiers.
//!
//! The ICP ledger keys balances by a 32-byte account identifier rather than by
//! principal. The identifier is the SHA-224 digest of
//! `"\x0Aaccount-id" ‖ principal ‖ sub-account`, prefixed with the big-endian
//! CRC-32 of that digest.

use core::fmt;
use std::str::FromStr;

use candid::Principal;
use crc::{Crc, CRC_32_ISO_HDLC};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha224};

use crate::error::{IcpAccountError, Result};
use crate::policy::PrincipalPolicy;

/// Domain separator: `0x0A` (the length of `account-id`) followed by `account-id`.
pub const DOMAIN_SEPARATOR: [u8; 11] = *b"\x0Aaccount-id";

pub const SUBACCOUNT_LEN: usize = 32;
pub const ACCOUNT_ID_LEN: usize = 32;
pub const CHECKSUM_LEN: usize = 4;
pub const DIGEST_LEN: usize = 28;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// A 32-byte sub-account. The all-zero value is the default account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Subaccount(pub [u8; SUBACCOUNT_LEN]);

impl Subaccount {
    pub const DEFAULT: Subaccount = Subaccount([0u8; SUBACCOUNT_LEN]);

    pub fn as_bytes(&self) -> &[u8; SUBACCOUNT_LEN] {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == [0u8; SUBACCOUNT_LEN]
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Subaccount {
    type Error = IcpAccountError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SUBACCOUNT_LEN] = bytes
            .try_into()
            .map_err(|_| IcpAccountError::InvalidSubAccountLength { len: bytes.len() })?;
        Ok(Subaccount(arr))
    }
}

impl From<[u8; SUBACCOUNT_LEN]> for Subaccount {
    fn from(bytes: [u8; SUBACCOUNT_LEN]) -> Self {
        Subaccount(bytes)
    }
}

/// A ledger account identifier: 4-byte checksum followed by the 28-byte digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountIdentifier([u8; ACCOUNT_ID_LEN]);

impl AccountIdentifier {
    /// Derives the identifier for `principal` (raw bytes) and `subaccount`.
    pub fn new(principal: &[u8], subaccount: &Subaccount) -> Self {
        tracing::trace!(
            principal_len = principal.len(),
            default_subaccount = subaccount.is_default(),
            "deriving account identifier"
        );

        let mut hasher = Sha224::new();
        hasher.update(DOMAIN_SEPARATOR);
        hasher.update(principal);
        hasher.update(subaccount.as_bytes());

        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&hasher.finalize());

        Self::from_digest(&digest)
    }

    pub fn from_principal(principal: &Principal, subaccount: Option<&Subaccount>) -> Self {
        Self::new(principal.as_slice(), subaccount.unwrap_or(&Subaccount::DEFAULT))
    }

    fn from_digest(digest: &[u8; DIGEST_LEN]) -> Self {
        let mut bytes = [0u8; ACCOUNT_ID_LEN];
        bytes[..CHECKSUM_LEN].copy_from_slice(&CRC32.checksum(digest).to_be_bytes());
        bytes[CHECKSUM_LEN..].copy_from_slice(digest);
        Self(bytes)
    }

    /// Parses a 64-character hex identifier and verifies its checksum.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// The stored checksum, read back as a big-endian integer.
    pub fn checksum(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn digest(&self) -> &[u8] {
        &self.0[CHECKSUM_LEN..]
    }

    pub fn to_hex(&self) -> String {
        to_hex(self.0)
    }
}

impl TryFrom<&[u8]> for AccountIdentifier {
    type Error = IcpAccountError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ACCOUNT_ID_LEN] = bytes
            .try_into()
            .map_err(|_| IcpAccountError::InvalidAccountIdLength { len: bytes.len() })?;

        let candidate = Self(arr);
        let expected = CRC32.checksum(candidate.digest());
        let found = candidate.checksum();
        if expected != found {
            return Err(IcpAccountError::ChecksumMismatch { expected, found });
        }
        Ok(candidate)
    }
}

impl AsRef<[u8]> for AccountIdentifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for AccountIdentifier {
    type Err = IcpAccountError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountIdentifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Derives an account identifier from raw principal bytes.
///
/// A missing sub-account means the default (all-zero) sub-account. A supplied
/// sub-account must be exactly 32 bytes; anything else fails with
/// [`IcpAccountError::InvalidSubAccountLength`].
pub fn derive_account_id(
    principal: &[u8],
    subaccount: Option<&[u8]>,
) -> Result<AccountIdentifier> {
    AccountIdDeriver::default().derive(principal, subaccount)
}

/// Parses a textual principal such as `2vxsx-fae`.
pub fn parse_principal(text: &str) -> Result<Principal> {
    Principal::from_text(text).map_err(|e| IcpAccountError::InvalidPrincipal(e.to_string()))
}

/// Lowercase hex with no prefix or separators.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Derives account identifiers under a [`PrincipalPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountIdDeriver {
    policy: PrincipalPolicy,
}

impl AccountIdDeriver {
    pub fn new(policy: PrincipalPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PrincipalPolicy {
        &self.policy
    }

    pub fn derive(
        &self,
        principal: &[u8],
        subaccount: Option<&[u8]>,
    ) -> Result<AccountIdentifier> {
        let subaccount = match subaccount {
            Some(bytes) => Subaccount::try_from(bytes)?,
            None => Subaccount::DEFAULT,
        };
        self.policy.check(principal)?;
        Ok(AccountIdentifier::new(principal, &subaccount))
    }

    pub fn derive_for(
        &self,
        principal: &Principal,
        subaccount: Option<&Subaccount>,
    ) -> Result<AccountIdentifier> {
        self.policy.check(principal.as_slice())?;
        Ok(AccountIdentifier::from_principal(principal, subaccount))
    }

    /// Same as [`AccountIdDeriver::derive_for`], starting from principal text.
    pub fn derive_from_text(
        &self,
        principal: &str,
        subaccount: Option<&Subaccount>,
    ) -> Result<AccountIdentifier> {
        self.derive_for(&parse_principal(principal)?, subaccount)
    }
}
