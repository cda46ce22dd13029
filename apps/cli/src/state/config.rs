//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BILLSPLIT_*`)
//! 2. Config file (`--config PATH`, or `billsplit.toml` in the working directory if present)
//! 3. Defaults (this file)
//!
//! Read-only after load.

use std::path::Path;

use billsplit_core::{coerce, round_cents, Decimal, MAX_PARTICIPANTS};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigState {
    /// Currency symbol (for display only)
    pub currency_symbol: String,

    /// Friend count a new session starts with
    pub default_friends: usize,

    /// Tip percentage a new session starts with, as typed (e.g. "18")
    pub default_tip_percent: String,

    /// Warn when some orders belong to friends that no longer exist
    pub warn_unassigned: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: `$`
    /// - Friends: 1
    /// - Tip: 0%
    /// - Unassigned warning: on
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            default_friends: 1,
            default_tip_percent: "0".to_string(),
            warn_unassigned: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from defaults, a TOML file and the environment.
    ///
    /// An explicit `path` must exist. Without one, `billsplit.toml` in the
    /// working directory is read when present.
    ///
    /// ## Environment Variables
    /// - `BILLSPLIT_CURRENCY_SYMBOL`
    /// - `BILLSPLIT_DEFAULT_FRIENDS`
    /// - `BILLSPLIT_DEFAULT_TIP_PERCENT`
    /// - `BILLSPLIT_WARN_UNASSIGNED`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = ConfigState::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("billsplit").required(false),
        };

        let config: ConfigState = Config::builder()
            .set_default("currency_symbol", defaults.currency_symbol)?
            .set_default("default_friends", defaults.default_friends as i64)?
            .set_default("default_tip_percent", defaults.default_tip_percent)?
            .set_default("warn_unassigned", defaults.warn_unassigned)?
            .add_source(file)
            .add_source(Environment::with_prefix("BILLSPLIT"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PARTICIPANTS).contains(&self.default_friends) {
            return Err(ConfigError::InvalidValue("default_friends".to_string()));
        }
        if coerce::parse_tip(&self.default_tip_percent).is_none() {
            return Err(ConfigError::InvalidValue("default_tip_percent".to_string()));
        }
        Ok(())
    }

    /// Formats an amount with the configured currency symbol, rounded to
    /// the cent.
    ///
    /// ## Example
    /// ```rust
    /// use billsplit_cli::state::ConfigState;
    /// use billsplit_core::{Decimal, Money};
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// assert_eq!(config.format_currency(Decimal::new(10005, 3)), "$10.01");
    /// ```
    pub fn format_currency(&self, amount: impl Into<Decimal>) -> String {
        let rounded = round_cents(amount.into());
        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}{}", self.currency_symbol, rounded.abs())
        } else {
            format!("{}{}", self.currency_symbol, rounded.abs())
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
