//! Deployment configuration with TOML file support.

use std::path::Path;

use isft_rebate::DEFAULT_REBATE_WEI;
use isft_types::{parse_units, ChainId, TokenMetadata, U256};
use isft_utils::{init_logging, LogFormat, LoggingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(String),

    #[error("invalid config: {0}")]
    Parse(String),

    #[error("cannot serialize config: {0}")]
    Serialize(String),

    #[error("initial supply {supply} with {decimals} decimals exceeds 2^256 - 1")]
    SupplyOverflow { supply: u64, decimals: u8 },
}

/// Parameters for deploying one token instance.
///
/// Can be loaded from a TOML file via [`TokenConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token name. Also the EIP-712 domain name.
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_decimals")]
    pub decimals: u8,

    /// Supply minted to the deployer, in whole tokens.
    #[serde(default = "default_initial_supply")]
    pub initial_supply: u64,

    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,

    /// Native currency paid once per address. Zero disables rebates.
    #[serde(default = "default_rebate_amount_wei")]
    pub rebate_amount_wei: u64,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Filter directive, e.g. `"info"` or `"info,isft_permit=debug"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_name() -> String {
    "Interoperable Secure Fungible Token Standard".to_string()
}

fn default_symbol() -> String {
    "ISFT".to_string()
}

fn default_decimals() -> u8 {
    18
}

fn default_initial_supply() -> u64 {
    1_000_000
}

fn default_chain_id() -> ChainId {
    ChainId::DEV
}

fn default_rebate_amount_wei() -> u64 {
    DEFAULT_REBATE_WEI
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl TokenConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn metadata(&self) -> TokenMetadata {
        TokenMetadata::new(self.name.clone(), self.symbol.clone(), self.decimals)
    }

    /// Initial supply in base units.
    pub fn initial_supply_units(&self) -> Result<U256, ConfigError> {
        parse_units(self.initial_supply, self.decimals).ok_or(ConfigError::SupplyOverflow {
            supply: self.initial_supply,
            decimals: self.decimals,
        })
    }

    pub fn rebate_amount(&self) -> U256 {
        U256::from(self.rebate_amount_wei)
    }

    /// Install the global subscriber with this config's format and level.
    pub fn init_logging(&self) -> Result<(), LoggingError> {
        init_logging(self.log_format, &self.log_level)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            symbol: default_symbol(),
            decimals: default_decimals(),
            initial_supply: default_initial_supply(),
            chain_id: default_chain_id(),
            rebate_amount_wei: default_rebate_amount_wei(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = TokenConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = TokenConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = TokenConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.symbol, "ISFT");
        assert_eq!(config.decimals, 18);
        assert_eq!(config.chain_id, ChainId::DEV);
        assert_eq!(config.rebate_amount(), U256::from(DEFAULT_REBATE_WEI));
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            symbol = "TST"
            chain_id = 11155111
            rebate_amount_wei = 0
            log_format = "json"
        "#;
        let config = TokenConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.symbol, "TST");
        assert_eq!(config.chain_id, ChainId::SEPOLIA);
        assert_eq!(config.rebate_amount(), U256::ZERO);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.decimals, 18); // default
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = TokenConfig::from_toml_str("decimals = \"eighteen\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"File Token\"\ninitial_supply = 42").unwrap();

        let config = TokenConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.name, "File Token");
        assert_eq!(
            config.initial_supply_units().unwrap(),
            U256::from(42u64) * U256::from(10u64).pow(U256::from(18u64))
        );
    }

    #[test]
    fn missing_file_returns_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TokenConfig::from_toml_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn oversized_supply_rejected() {
        let config = TokenConfig {
            decimals: 77,
            initial_supply: u64::MAX,
            ..TokenConfig::default()
        };
        assert_eq!(
            config.initial_supply_units(),
            Err(ConfigError::SupplyOverflow {
                supply: u64::MAX,
                decimals: 77
            })
        );
    }
}
