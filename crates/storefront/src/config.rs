//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults match the demo storefront.
//!
//! - `SWEETSHOP_DATA_DIR` - Directory for the file-backed local store
//!   (default: `./data`)
//! - `SWEETSHOP_FREE_SHIPPING_THRESHOLD` - Subtotal above which shipping is
//!   free (default: 30)
//! - `SWEETSHOP_SHIPPING_FEE` - Flat shipping fee below the threshold
//!   (default: 5.99)
//! - `SWEETSHOP_TAX_RATE` - Tax rate applied to the subtotal (default: 0.05)
//! - `SWEETSHOP_MIN_PASSWORD_LENGTH` - Mock-auth minimum password length
//!   (default: 6)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::services::auth::DEFAULT_MIN_PASSWORD_LENGTH;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed local store writes into.
    pub data_dir: PathBuf,
    /// Subtotal above which shipping is free.
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee charged below the threshold.
    pub shipping_fee: Decimal,
    /// Tax rate applied to the subtotal (e.g., 0.05 for 5%).
    pub tax_rate: Decimal,
    /// Minimum password length accepted by the mock authenticator.
    pub min_password_length: usize,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SWEETSHOP_DATA_DIR", "./data"));
        let free_shipping_threshold =
            get_parsed_or_default("SWEETSHOP_FREE_SHIPPING_THRESHOLD", Decimal::from(30))?;
        let shipping_fee = get_parsed_or_default("SWEETSHOP_SHIPPING_FEE", Decimal::new(599, 2))?;
        let tax_rate = get_parsed_or_default("SWEETSHOP_TAX_RATE", Decimal::new(5, 2))?;
        let min_password_length =
            get_parsed_or_default("SWEETSHOP_MIN_PASSWORD_LENGTH", DEFAULT_MIN_PASSWORD_LENGTH)?;

        Ok(Self {
            data_dir,
            free_shipping_threshold,
            shipping_fee,
            tax_rate,
            min_password_length,
        })
    }
}

impl Default for StorefrontConfig {
    /// The demo defaults: `./data`, free shipping over $30, $5.99 flat fee,
    /// 5% tax, 6-character passwords.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            free_shipping_threshold: Decimal::from(30),
            shipping_fee: Decimal::new(599, 2),
            tax_rate: Decimal::new(5, 2),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable, falling back to `default` when unset.
fn get_parsed_or_default<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.free_shipping_threshold, Decimal::from(30));
        assert_eq!(config.shipping_fee, Decimal::new(599, 2));
        assert_eq!(config.tax_rate, Decimal::new(5, 2));
        assert_eq!(config.min_password_length, 6);
    }

    #[test]
    fn test_get_parsed_or_default_uses_default_when_unset() {
        let value: Decimal =
            get_parsed_or_default("SWEETSHOP_TEST_UNSET_VAR", Decimal::from(30)).unwrap();
        assert_eq!(value, Decimal::from(30));
    }
}
