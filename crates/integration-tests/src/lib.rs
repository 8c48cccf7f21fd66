//! Integration tests for the Sweetshop storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sweetshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - Browse, cart, login, and checkout end to end
//! - `persistence` - Reload behavior of the file-backed local store
//!
//! The tests live under `tests/` and build sessions against a
//! temp-directory [`FileStore`](sweetshop_storefront::storage::FileStore),
//! so each test gets a fresh "browser profile".

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a global tracing subscriber for test output.
///
/// Safe to call from every test; only the first call installs. Set
/// `RUST_LOG` to see storefront logs while a test runs.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .init();
    });
}
