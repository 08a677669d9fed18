use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Optional overrides read from a TOML file. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub rpc_address: Option<String>,
    pub validator_address: Option<String>,
    pub address_prefix: Option<String>,
    pub mixnet_contract_address: Option<String>,
    pub vesting_contract_address: Option<String>,
    pub denom: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub page_limit: Option<u32>,
}

/// Load configuration from a TOML file.
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<ConfigFile> {
    let s = fs::read_to_string(path)?;
    let cfg: ConfigFile = toml::from_str(&s)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file() {
        let cfg: ConfigFile = toml::from_str(
            r#"
            validator_address = "https://sandbox-validator.nymtech.net/api"
            address_prefix = "n"
            page_limit = 50
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.validator_address.as_deref(),
            Some("https://sandbox-validator.nymtech.net/api")
        );
        assert_eq!(cfg.page_limit, Some(50));
        assert_eq!(cfg.rpc_address, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("rpc_url = \"http://localhost\"").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let path = std::env::temp_dir().join(format!(
            "validator_query_config_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "denom = \"unyx\"\nrequest_timeout_secs = 5\n").unwrap();
        let cfg = load_config_from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(cfg.denom.as_deref(), Some("unyx"));
        assert_eq!(cfg.request_timeout_secs, Some(5));
    }
}
