use thiserror::Error;

/// Errors raised while deriving, parsing or encoding ICP account identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IcpAccountError {
    #[error("Invalid sub-account length: expected 32 bytes, got {len}")]
    InvalidSubAccountLength { len: usize },

    #[error("Empty principal rejected by policy")]
    EmptyPrincipal,

    #[error("Principal too long: {len} bytes exceeds maximum of {max}")]
    PrincipalTooLong { len: usize, max: usize },

    #[error("Invalid principal: {0}")]
    InvalidPrincipal(String),

    #[error("Invalid account identifier length: expected 32 bytes, got {len}")]
    InvalidAccountIdLength { len: usize },

    #[error("Hex decode error: {0}")]
    InvalidHex(String),

    #[error("Account identifier checksum mismatch: expected {expected:08x}, found {found:08x}")]
    ChecksumMismatch { expected: u32, found: u32 },

    #[error("Candid error: {0}")]
    Candid(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IcpAccountError>;

impl From<hex::FromHexError> for IcpAccountError {
    fn from(err: hex::FromHexError) -> Self {
        IcpAccountError::InvalidHex(err.to_string())
    }
}

impl From<candid::Error> for IcpAccountError {
    fn from(err: candid::Error) -> Self {
        IcpAccountError::Candid(err.to_string())
    }
}

impl From<serde_json::Error> for IcpAccountError {
    fn from(err: serde_json::Error) -> Self {
        IcpAccountError::Config(err.to_string())
    }
}

impl From<std::io::Error> for IcpAccountError {
    fn from(err: std::io::Error) -> Self {
        IcpAccountError::Config(err.to_string())
    }
}
