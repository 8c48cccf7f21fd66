//! Unified error handling.
//!
//! Provides a `StorefrontError` type aggregating the module errors behind
//! `#[from]` conversions. Session construction and presentation-layer glue
//! return `Result<T, StorefrontError>`; the individual stores keep their
//! narrower error types.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::payment::PaymentError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The persistence backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A direct payment operation failed.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
