use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use splitwise_utils::LogFormat;

/// Settings read from `SPLITWISE_*` environment variables.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub rpc_url: String,
    pub private_key: String,
    pub contract_address: Option<String>,
    pub abi_path: String,
    pub bin_path: String,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(Environment::with_prefix("SPLITWISE"))
    }

    fn build(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("rpc_url", "https://rpc.notadegen.com/eth/sepolia")?
            .set_default("abi_path", "./contracts/Splitwise.abi")?
            .set_default("bin_path", "./contracts/Splitwise.bin")?
            .set_default("log_format", "Minimal")?
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    #[cfg(test)]
    fn from_map(vars: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let source: config::Map<String, String> =
            vars.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect();
        Self::build(Environment::with_prefix("SPLITWISE").source(Some(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let settings = Settings::from_map(&[("SPLITWISE_PRIVATE_KEY", "0x01")]).unwrap();
        assert_eq!(settings.rpc_url, "https://rpc.notadegen.com/eth/sepolia");
        assert_eq!(settings.abi_path, "./contracts/Splitwise.abi");
        assert_eq!(settings.bin_path, "./contracts/Splitwise.bin");
        assert_eq!(settings.log_format, LogFormat::Minimal);
        assert!(settings.contract_address.is_none());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = Settings::from_map(&[
            ("SPLITWISE_PRIVATE_KEY", "0x01"),
            ("SPLITWISE_RPC_URL", "http://localhost:8545"),
            ("SPLITWISE_CONTRACT_ADDRESS", "0x00000000000000000000000000000000000000c0"),
            ("SPLITWISE_LOG_FORMAT", "Json"),
        ])
        .unwrap();
        assert_eq!(settings.rpc_url, "http://localhost:8545");
        assert_eq!(
            settings.contract_address.as_deref(),
            Some("0x00000000000000000000000000000000000000c0")
        );
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_private_key_is_required() {
        assert!(Settings::from_map(&[]).is_err());
    }
}
