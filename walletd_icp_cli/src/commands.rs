use anyhow::{Context, Result};
use serde::Serialize;
use walletd_icp::ledger::ACCOUNT_BALANCE_METHOD;
use walletd_icp::{
    parse_principal, AccountBalanceArgs, AccountConfig, AccountIdDeriver, AccountIdentifier,
    PrincipalPolicy, Subaccount, Tokens,
};

#[derive(Debug, Serialize)]
struct DeriveOutput {
    principal: String,
    subaccount: String,
    account_id: AccountIdentifier,
    network: String,
}

fn parse_subaccount(hex: Option<&str>) -> Result<Subaccount> {
    match hex {
        Some(s) => Subaccount::from_hex(s).with_context(|| format!("invalid sub-account '{s}'")),
        None => Ok(Subaccount::DEFAULT),
    }
}

fn deriver(config: &AccountConfig, strict: bool) -> AccountIdDeriver {
    if strict {
        AccountIdDeriver::new(PrincipalPolicy::strict())
    } else {
        AccountIdDeriver::new(config.principal_policy)
    }
}

pub fn derive(
    config: &AccountConfig,
    principal: &str,
    subaccount: Option<&str>,
    strict: bool,
    json: bool,
) -> Result<String> {
    let principal = parse_principal(principal)?;
    let subaccount = parse_subaccount(subaccount)?;
    let account_id = deriver(config, strict).derive_for(&principal, Some(&subaccount))?;
    tracing::info!(principal = %principal, account_id = %account_id, "derived account identifier");

    if !json {
        return Ok(account_id.to_hex());
    }
    let output = DeriveOutput {
        principal: principal.to_text(),
        subaccount: walletd_icp::to_hex(subaccount.as_bytes()),
        account_id,
        network: config.network.name.clone(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn verify(account_id: &str) -> Result<String> {
    let parsed = AccountIdentifier::from_hex(account_id.trim())
        .with_context(|| format!("account identifier '{account_id}' failed verification"))?;
    Ok(format!("valid (checksum {:08x})", parsed.checksum()))
}

pub fn balance_args(
    config: &AccountConfig,
    principal: &str,
    subaccount: Option<&str>,
    strict: bool,
) -> Result<String> {
    let principal = parse_principal(principal)?;
    let subaccount = parse_subaccount(subaccount)?;
    let account_id = deriver(config, strict).derive_for(&principal, Some(&subaccount))?;
    let encoded = AccountBalanceArgs::new(&account_id).encode()?;
    tracing::debug!(
        ledger = %config.network.ledger_canister_id,
        method = ACCOUNT_BALANCE_METHOD,
        host = %config.network.host,
        "built account_balance argument"
    );
    Ok(hex::encode(encoded))
}

pub fn e8s(amount: u64) -> String {
    Tokens::from_e8s(amount).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use walletd_icp::IcpAccountError;

    const ANONYMOUS_ACCOUNT: &str =
        "1c7a48ba6a562aa9eaa2481a9049cdf0433b9738c992d698c31d8abf89cadc79";

    #[test]
    fn test_derive_anonymous() {
        let config = AccountConfig::default();
        let out = derive(&config, "2vxsx-fae", None, false, false).unwrap();
        assert_eq!(out, ANONYMOUS_ACCOUNT);
    }

    #[test]
    fn test_derive_with_subaccount() {
        let config = AccountConfig::default();
        let sub = format!("{}01", "00".repeat(31));
        let out = derive(&config, "2vxsx-fae", Some(&sub), false, false).unwrap();
        assert_eq!(out, "b8fab0be4ad596a3739ab93e7316a8647ee72e167709441da49ce9171828629d");
    }

    #[test]
    fn test_derive_json() {
        let config = AccountConfig::default();
        let out = derive(&config, "2vxsx-fae", None, false, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["account_id"], ANONYMOUS_ACCOUNT);
        assert_eq!(value["principal"], "2vxsx-fae");
        assert_eq!(value["subaccount"], "00".repeat(32));
    }

    #[test]
    fn test_derive_strict_rejects_management_canister() {
        let config = AccountConfig::default();
        assert!(derive(&config, "aaaaa-aa", None, false, false).is_ok());
        assert!(derive(&config, "aaaaa-aa", None, true, false).is_err());
    }

    #[test]
    fn test_derive_bad_inputs() {
        let config = AccountConfig::default();
        assert!(derive(&config, "2vxsx-fae", Some("00"), false, false).is_err());
    }

    #[test]
    fn test_verify() {
        assert_eq!(verify(ANONYMOUS_ACCOUNT).unwrap(), "valid (checksum 1c7a48ba)");
        assert!(verify(&ANONYMOUS_ACCOUNT.replace("1c7a", "1c7b")).is_err());
        assert!(verify("abcd").is_err());
    }

    #[test]
    fn test_balance_args_is_candid_hex() {
        let config = AccountConfig::default();
        let out = balance_args(&config, "2vxsx-fae", None, false).unwrap();
        // "DIDL" magic
        assert!(out.starts_with("4449444c"));
        assert!(out.ends_with(ANONYMOUS_ACCOUNT));
    }

    #[test]
    fn test_e8s() {
        assert_eq!(e8s(250_000_000), "2.50000000 ICP");
    }

    #[test]
    fn test_bad_principal_text_is_typed() {
        let config = AccountConfig::default();
        for result in [
            derive(&config, "not-a-principal", None, false, false),
            balance_args(&config, "not-a-principal", None, false),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(
                err.downcast_ref::<IcpAccountError>(),
                Some(IcpAccountError::InvalidPrincipal(_))
            ));
        }
    }

    #[test]
    fn test_balance_args_strict_matches_derive() {
        let config = AccountConfig::default();
        assert!(balance_args(&config, "aaaaa-aa", None, false).is_ok());

        let err = balance_args(&config, "aaaaa-aa", None, true).unwrap_err();
        assert_eq!(err.downcast_ref::<IcpAccountError>(), Some(&IcpAccountError::EmptyPrincipal));

        let strict_config = AccountConfig {
            principal_policy: PrincipalPolicy::strict(),
            ..AccountConfig::default()
        };
        assert!(balance_args(&strict_config, "aaaaa-aa", None, false).is_err());
    }
}
