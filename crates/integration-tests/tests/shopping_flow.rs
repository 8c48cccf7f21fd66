//! End-to-end shopping flow: browse the catalog, fill a cart, sign in,
//! and check out.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use secrecy::SecretString;

use sweetshop_core::{CurrencyCode, Price, ProductId};
use sweetshop_storefront::catalog::Catalog;
use sweetshop_storefront::cart::CartEvent;
use sweetshop_storefront::checkout::{CheckoutError, ShippingDetails};
use sweetshop_storefront::config::StorefrontConfig;
use sweetshop_storefront::services::auth::MockAuthenticator;
use sweetshop_storefront::services::payment::MockPaymentProcessor;
use sweetshop_storefront::state::Session;
use sweetshop_storefront::storage::{FileStore, LocalStore};

fn session_at(dir: &Path) -> Session {
    sweetshop_integration_tests::init_logging();
    let config = StorefrontConfig {
        data_dir: dir.to_path_buf(),
        ..StorefrontConfig::default()
    };
    let storage: Arc<dyn LocalStore> = Arc::new(FileStore::new(dir).unwrap());
    let authenticator = Arc::new(MockAuthenticator::new(config.min_password_length));
    Session::with_components(
        config,
        storage,
        Catalog::builtin().unwrap(),
        authenticator,
        Box::new(MockPaymentProcessor),
    )
}

fn shipping_details() -> ShippingDetails {
    ShippingDetails {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        address: "1 Bakery Lane".to_owned(),
        city: "Lagos".to_owned(),
        state: "LA".to_owned(),
        zip_code: "100001".to_owned(),
        country: "NG".to_owned(),
        phone_number: "+2348000000000".to_owned(),
    }
}

#[test]
fn full_shopping_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_at(dir.path());

    // Browse: featured section and a category page.
    assert_eq!(session.catalog().get_featured().len(), 6);
    let cakes = session.catalog().get_by_category(Some("cakes".parse().unwrap()));
    assert_eq!(cakes.len(), 4);

    // Add a cake twice and a box of macarons once.
    let cake = session.catalog().get_by_id(ProductId::new(1)).cloned().unwrap();
    let macarons = session.catalog().get_by_id(ProductId::new(3)).cloned().unwrap();

    assert_eq!(
        session.cart_mut().add(&cake, 1),
        CartEvent::Added { product_id: cake.id }
    );
    assert_eq!(
        session.cart_mut().add(&cake, 1),
        CartEvent::QuantityIncreased {
            product_id: cake.id,
            quantity: 2
        }
    );
    session.cart_mut().add(&macarons, 1);

    // 35.99 * 2 + 24.99 = 96.97, three items total.
    assert_eq!(
        session.cart().total(),
        Price::from_cents(9697, CurrencyCode::USD)
    );
    assert_eq!(session.cart().count(), 3);

    // Sign in with mock credentials.
    session
        .auth_mut()
        .login("jane@example.com", &SecretString::from("hunter22"))
        .unwrap();
    assert!(session.auth().is_authenticated());

    // Check out. Subtotal is above the free-shipping threshold.
    let order = session.place_order(&shipping_details()).unwrap();
    assert!(order.summary.shipping.is_zero());
    assert_eq!(order.items.len(), 2);
    assert!(order.reference.starts_with("ORDER-"));

    // Checkout completion cleared the cart.
    assert!(session.cart().is_empty());
    assert_eq!(session.cart().count(), 0);

    session.end();
}

#[test]
fn checkout_requires_complete_shipping_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_at(dir.path());

    let tart = session.catalog().get_by_id(ProductId::new(7)).cloned().unwrap();
    session.cart_mut().add(&tart, 1);

    let mut details = shipping_details();
    details.phone_number = String::new();

    let err = session.place_order(&details).unwrap_err();
    assert!(err.to_string().contains("phone number"));
    assert_eq!(session.cart().count(), 1, "cart untouched on failure");
}

#[test]
fn checkout_rejects_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_at(dir.path());

    let err = session.place_order(&shipping_details()).unwrap_err();
    assert!(matches!(
        err,
        sweetshop_storefront::error::StorefrontError::Checkout(CheckoutError::EmptyCart)
    ));
}
