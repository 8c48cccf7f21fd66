//! Session state shared with the presentation layer.
//!
//! One [`Session`] per browser tab, explicitly constructed at application
//! start and torn down with [`Session::end`] - there is no ambient global
//! lookup. The session owns the catalog and both stores; presentation
//! components receive it by reference and go through its accessors.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutService, Order, ShippingDetails};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::services::auth::{AuthStore, Authenticator, MockAuthenticator};
use crate::services::payment::{MockPaymentProcessor, PaymentProcessor};
use crate::storage::{FileStore, LocalStore};

/// Per-tab storefront session.
///
/// Single-threaded by design: mutations happen one at a time in response
/// to user actions, so the stores hand out `&mut` access instead of
/// locking.
pub struct Session {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartStore,
    auth: AuthStore,
    checkout: CheckoutService,
}

impl Session {
    /// Start a session with the default components: file-backed storage
    /// under the configured data directory, the builtin catalog, mock
    /// authentication, and the demo payment processor.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// builtin catalog fails to parse. Persisted cart/user state that is
    /// merely corrupt does not fail session start; it degrades to empty.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let storage: Arc<dyn LocalStore> = Arc::new(FileStore::new(&config.data_dir)?);
        let catalog = Catalog::builtin()?;
        let authenticator = Arc::new(MockAuthenticator::new(config.min_password_length));

        Ok(Self::with_components(
            config,
            storage,
            catalog,
            authenticator,
            Box::new(MockPaymentProcessor),
        ))
    }

    /// Start a session with injected components.
    ///
    /// This is the seam for substituting a real identity backend, payment
    /// provider, storage backend, or product range.
    #[must_use]
    pub fn with_components(
        config: StorefrontConfig,
        storage: Arc<dyn LocalStore>,
        catalog: Catalog,
        authenticator: Arc<dyn Authenticator>,
        payment: Box<dyn PaymentProcessor>,
    ) -> Self {
        let cart = CartStore::load(Arc::clone(&storage));
        let auth = AuthStore::load(authenticator, storage);
        let checkout = CheckoutService::new(&config, payment);

        tracing::info!(
            cart_items = cart.count(),
            authenticated = auth.is_authenticated(),
            "session started"
        );

        Self {
            config,
            catalog,
            cart,
            auth,
            checkout,
        }
    }

    /// Place an order for the current cart contents.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`crate::checkout::CheckoutError`] wrapped in
    /// [`crate::error::StorefrontError`].
    pub fn place_order(&mut self, details: &ShippingDetails) -> Result<Order> {
        Ok(self.checkout.place_order(&mut self.cart, details)?)
    }

    /// End the session.
    ///
    /// State is already persisted after every mutation; this only marks the
    /// explicit teardown point.
    pub fn end(self) {
        tracing::info!(
            cart_items = self.cart.count(),
            authenticated = self.auth.is_authenticated(),
            "session ended"
        );
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The read-only product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart store.
    #[must_use]
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Read access to the auth store.
    #[must_use]
    pub const fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Mutable access to the auth store.
    #[must_use]
    pub const fn auth_mut(&mut self) -> &mut AuthStore {
        &mut self.auth
    }

    /// The checkout service.
    #[must_use]
    pub const fn checkout(&self) -> &CheckoutService {
        &self.checkout
    }
}
