//! Genesis and governance configuration.
//!
//! The core is configured once at construction: the initial token supply,
//! the account it is minted to, the minimal refund window, and the delay
//! applied to governance changes of that window. Configuration can be built
//! programmatically or parsed from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AccountId, Amount, Height, Window};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed configuration is semantically invalid.
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Genesis parameters for a [`TokenLedger`](crate::engine::TokenLedger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Total token supply, minted to `genesis_account` at construction.
    #[serde(default = "default_total_supply")]
    pub total_supply: Amount,

    /// Account the initial supply is credited to.
    pub genesis_account: AccountId,

    /// Initial minimal refund window (heights). Nonzero transfer windows
    /// below this value are clamped up to it.
    #[serde(default)]
    pub minimal_window: Window,

    /// Heights between a minimal-window change request and the height it
    /// takes effect. Injected rather than hardcoded so deployments can tune
    /// how long outstanding obligations are shielded from parameter churn.
    #[serde(default = "default_governance_delay")]
    pub governance_delay: Height,
}

const fn default_total_supply() -> Amount {
    1_000_000
}

const fn default_governance_delay() -> Height {
    100
}

impl GenesisConfig {
    /// Creates a new configuration builder seeded with defaults.
    #[must_use]
    pub fn builder(genesis_account: impl Into<AccountId>) -> GenesisConfigBuilder {
        GenesisConfigBuilder::new(genesis_account)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_supply == 0 {
            return Err(ConfigError::Validation(
                "total_supply must be nonzero".to_string(),
            ));
        }
        if self.genesis_account.as_str().is_empty() {
            return Err(ConfigError::Validation(
                "genesis_account must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`GenesisConfig`].
#[derive(Debug, Clone)]
pub struct GenesisConfigBuilder {
    total_supply: Amount,
    genesis_account: AccountId,
    minimal_window: Window,
    governance_delay: Height,
}

impl GenesisConfigBuilder {
    /// Creates a builder with default supply, zero minimal window and the
    /// default governance delay.
    #[must_use]
    pub fn new(genesis_account: impl Into<AccountId>) -> Self {
        Self {
            total_supply: default_total_supply(),
            genesis_account: genesis_account.into(),
            minimal_window: 0,
            governance_delay: default_governance_delay(),
        }
    }

    /// Sets the total supply.
    #[must_use]
    pub const fn total_supply(mut self, supply: Amount) -> Self {
        self.total_supply = supply;
        self
    }

    /// Sets the initial minimal refund window.
    #[must_use]
    pub const fn minimal_window(mut self, window: Window) -> Self {
        self.minimal_window = window;
        self
    }

    /// Sets the governance delay.
    #[must_use]
    pub const fn governance_delay(mut self, delay: Height) -> Self {
        self.governance_delay = delay;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<GenesisConfig, ConfigError> {
        let config = GenesisConfig {
            total_supply: self.total_supply,
            genesis_account: self.genesis_account,
            minimal_window: self.minimal_window,
            governance_delay: self.governance_delay,
        };
        config.validate()?;
        Ok(config)
    }
}
