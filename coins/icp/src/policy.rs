use serde::{Deserialize, Serialize};

use crate::error::{IcpAccountError, Result};

/// Maximum length of a principal's byte encoding on the Internet Computer.
pub const MAX_PRINCIPAL_LEN: usize = 29;

/// Length checks applied to principal bytes before an account id is derived.
///
/// The ledger itself hashes whatever bytes it is given, so the default policy
/// accepts every length, including the empty principal (the management
/// canister). Wallets that only ever deal with user identities can opt into
/// [`PrincipalPolicy::strict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalPolicy {
    /// Accept a zero-length principal
    #[serde(default = "default_allow_empty")]
    pub allow_empty: bool,
    /// Reject principals longer than this many bytes
    #[serde(default)]
    pub max_len: Option<usize>,
}

fn default_allow_empty() -> bool {
    true
}

impl Default for PrincipalPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

impl PrincipalPolicy {
    /// Accepts any byte sequence.
    pub const fn permissive() -> Self {
        Self {
            allow_empty: true,
            max_len: None,
        }
    }

    /// Rejects the empty principal and anything over [`MAX_PRINCIPAL_LEN`] bytes.
    pub const fn strict() -> Self {
        Self {
            allow_empty: false,
            max_len: Some(MAX_PRINCIPAL_LEN),
        }
    }

    pub fn check(&self, principal: &[u8]) -> Result<()> {
        if principal.is_empty() && !self.allow_empty {
            return Err(IcpAccountError::EmptyPrincipal);
        }
        if let Some(max) = self.max_len {
            if principal.len() > max {
                return Err(IcpAccountError::PrincipalTooLong {
                    len: principal.len(),
                    max,
                });
            }
        }
        Ok(())
    }

    pub fn is_permissive(&self) -> bool {
        self.allow_empty && self.max_len.is_none()
    }
}
