use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ledger::LEDGER_CANISTER_ID;
use crate::policy::PrincipalPolicy;

pub const IC_MAINNET_HOST: &str = "https://ic0.app";
pub const LOCAL_REPLICA_HOST: &str = "http://localhost:4943";
pub const INTERNET_IDENTITY_URL: &str = "https://identity.ic0.app";
pub const LOCAL_INTERNET_IDENTITY_URL: &str = "http://rdmx6-jaaaa-aaaaa-aaadq-cai.localhost:4943";

/// Internet Computer network a wallet talks to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcpNetworkConfig {
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub is_local: bool,
    pub identity_provider_url: String,
    #[serde(default = "default_ledger_canister_id")]
    pub ledger_canister_id: String,
}

fn default_ledger_canister_id() -> String {
    LEDGER_CANISTER_ID.to_string()
}

impl IcpNetworkConfig {
    pub fn mainnet() -> Self {
        IcpNetworkConfig {
            name: "IC Mainnet".to_string(),
            host: IC_MAINNET_HOST.to_string(),
            is_local: false,
            identity_provider_url: INTERNET_IDENTITY_URL.to_string(),
            ledger_canister_id: LEDGER_CANISTER_ID.to_string(),
        }
    }

    pub fn local() -> Self {
        IcpNetworkConfig {
            name: "Local Replica".to_string(),
            host: LOCAL_REPLICA_HOST.to_string(),
            is_local: true,
            identity_provider_url: LOCAL_INTERNET_IDENTITY_URL.to_string(),
            ledger_canister_id: LEDGER_CANISTER_ID.to_string(),
        }
    }

    /// Looks up a network by its short name (`mainnet`/`ic` or `local`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "ic" => Some(Self::mainnet()),
            "local" | "localhost" => Some(Self::local()),
            _ => None,
        }
    }

    /// Local replicas sign with a throwaway root key that must be fetched first.
    pub fn needs_root_key_fetch(&self) -> bool {
        self.is_local
    }
}

impl Default for IcpNetworkConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

/// Settings consumed by the account tooling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub network: IcpNetworkConfig,
    #[serde(default)]
    pub principal_policy: PrincipalPolicy,
}

impl AccountConfig {
    pub const DEFAULT_PATH: &'static str = "icp_account_config.json";

    /// Reads the config at `path`, falling back to defaults when the file is missing.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_config() {
        let config = IcpNetworkConfig::mainnet();
        assert_eq!(config.host, "https://ic0.app");
        assert!(!config.is_local);
        assert!(!config.needs_root_key_fetch());
        assert_eq!(config.ledger_canister_id, LEDGER_CANISTER_ID);
    }

    #[test]
    fn test_local_config() {
        let config = IcpNetworkConfig::local();
        assert_eq!(config.host, "http://localhost:4943");
        assert!(config.is_local);
        assert!(config.needs_root_key_fetch());
        assert!(config.identity_provider_url.contains("localhost"));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(IcpNetworkConfig::by_name("IC"), Some(IcpNetworkConfig::mainnet()));
        assert_eq!(IcpNetworkConfig::by_name("local"), Some(IcpNetworkConfig::local()));
        assert_eq!(IcpNetworkConfig::by_name("sepolia"), None);
    }

    #[test]
    fn test_default_account_config() {
        let config = AccountConfig::default();
        assert_eq!(config.network, IcpNetworkConfig::mainnet());
        assert!(config.principal_policy.is_permissive());
    }

    #[test]
    fn test_partial_json() {
        let config: AccountConfig =
            serde_json::from_str(r#"{"principal_policy": {"allow_empty": false}}"#).unwrap();
        assert_eq!(config.network, IcpNetworkConfig::mainnet());
        assert!(!config.principal_policy.allow_empty);
    }
}
