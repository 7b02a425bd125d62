//! Engine configuration management.

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Display defaults for the amount engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Locale used for display formatting (e.g. `es-AR`).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Whether formatted amounts carry the currency symbol.
    #[serde(default = "default_show_symbol")]
    pub show_symbol: bool,
    /// Fractional digits shown for amounts.
    #[serde(default = "default_amount_fraction_digits")]
    pub amount_fraction_digits: u32,
    /// Fractional digits shown for exchange rates.
    #[serde(default = "default_rate_fraction_digits")]
    pub rate_fraction_digits: u32,
}

fn default_locale() -> String {
    "es-AR".to_string()
}

fn default_show_symbol() -> bool {
    true
}

fn default_amount_fraction_digits() -> u32 {
    2
}

fn default_rate_fraction_digits() -> u32 {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            show_symbol: default_show_symbol(),
            amount_fraction_digits: default_amount_fraction_digits(),
            rate_fraction_digits: default_rate_fraction_digits(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from an optional `config/engine` file and
    /// `FINMOV_*` environment variables (environment wins).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> EngineResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/engine").required(false))
            .add_source(
                config::Environment::with_prefix("FINMOV")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks values the formatter cannot honor.
    ///
    /// Locale existence is checked by the formatter itself, which owns the
    /// locale data.
    pub fn validate(&self) -> EngineResult<()> {
        if self.locale.trim().is_empty() {
            return Err(EngineError::Config("locale must not be empty".to_string()));
        }
        if self.amount_fraction_digits > 2 {
            return Err(EngineError::Config(format!(
                "amount_fraction_digits must be at most 2, got {}",
                self.amount_fraction_digits
            )));
        }
        if self.rate_fraction_digits > 10 {
            return Err(EngineError::Config(format!(
                "rate_fraction_digits must be at most 10, got {}",
                self.rate_fraction_digits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
