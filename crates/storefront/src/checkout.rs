//! Checkout flow: shipping details, cost breakdown, and order placement.
//!
//! Checkout validates the shipping form, computes the cost summary
//! (shipping is free above a configured subtotal, tax is a flat rate),
//! charges the [`PaymentProcessor`], and clears the cart on success - the
//! only completion path that empties it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use rust_decimal::Decimal;
use sweetshop_core::{Email, EmailError, Price};

use crate::cart::{CartEntry, CartStore};
use crate::config::StorefrontConfig;
use crate::services::payment::{PaymentError, PaymentProcessor, PaymentRequest};

/// Label shown in the payment widget.
const ORDER_LABEL: &str = "Sweet Shop Delights Order";

/// Days between order placement and estimated delivery.
const DELIVERY_ESTIMATE_DAYS: i64 = 5;

/// Countries the storefront ships to, as `(ISO code, display name)`.
pub const COUNTRIES: [(&str, &str); 8] = [
    ("NG", "Nigeria"),
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("GH", "Ghana"),
    ("KE", "Kenya"),
    ("ZA", "South Africa"),
];

/// Display name for a country code, falling back to the raw code.
#[must_use]
pub fn country_name(code: &str) -> &str {
    COUNTRIES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| name)
}

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A required shipping field was left blank.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// The contact email is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The payment processor rejected the charge.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Shipping details captured by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone_number: String,
}

impl ShippingDetails {
    /// Validate the form: every field is required, and the email must be
    /// structurally valid. Returns the parsed contact email.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] naming the first blank field,
    /// or [`CheckoutError::InvalidEmail`].
    pub fn validate(&self) -> Result<Email, CheckoutError> {
        let required: [(&str, &'static str); 9] = [
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.email, "email"),
            (&self.address, "address"),
            (&self.city, "city"),
            (&self.state, "state"),
            (&self.zip_code, "zip code"),
            (&self.country, "country"),
            (&self.phone_number, "phone number"),
        ];

        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingField(label));
            }
        }

        Ok(Email::parse(&self.email)?)
    }
}

/// Cost breakdown for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Sum of cart line totals.
    pub subtotal: Price,
    /// Shipping cost; zero above the free-shipping threshold.
    pub shipping: Price,
    /// Tax on the subtotal.
    pub tax: Price,
    /// Grand total charged to the customer.
    pub total: Price,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Internal order ID.
    pub id: Uuid,
    /// Payment provider reference (shown to the customer as the order
    /// number).
    pub reference: String,
    /// Where the order ships to.
    pub details: ShippingDetails,
    /// The purchased lines, as they were in the cart.
    pub items: Vec<CartEntry>,
    /// Cost breakdown at the time of purchase.
    pub summary: CostSummary,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Estimated delivery, five days out.
    pub estimated_delivery: DateTime<Utc>,
}

/// Checkout service.
///
/// Holds the pricing policy from configuration and the payment boundary.
pub struct CheckoutService {
    free_shipping_threshold: Decimal,
    shipping_fee: Decimal,
    tax_rate: Decimal,
    payment: Box<dyn PaymentProcessor>,
}

impl CheckoutService {
    /// Create a checkout service from configuration and a payment
    /// processor.
    #[must_use]
    pub fn new(config: &StorefrontConfig, payment: Box<dyn PaymentProcessor>) -> Self {
        Self {
            free_shipping_threshold: config.free_shipping_threshold,
            shipping_fee: config.shipping_fee,
            tax_rate: config.tax_rate,
            payment,
        }
    }

    /// Compute the cost breakdown for the current cart contents.
    #[must_use]
    pub fn summarize(&self, cart: &CartStore) -> CostSummary {
        let subtotal = cart.total();
        let currency = subtotal.currency_code;

        let shipping = if subtotal.amount > self.free_shipping_threshold {
            Price::zero(currency)
        } else {
            Price::new(self.shipping_fee, currency)
        };
        let tax = Price::new(subtotal.amount * self.tax_rate, currency);

        CostSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Place an order for the cart contents.
    ///
    /// Validates the shipping form, charges the payment processor for the
    /// grand total, and clears the cart once the charge succeeds. The cart
    /// is left untouched on any failure.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] if the cart is empty, the form is
    /// incomplete, or the charge fails.
    pub fn place_order(
        &self,
        cart: &mut CartStore,
        details: &ShippingDetails,
    ) -> Result<Order, CheckoutError> {
        let email = details.validate()?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let summary = self.summarize(cart);
        let receipt = self.payment.charge(&PaymentRequest {
            email,
            amount: summary.total,
            label: ORDER_LABEL.to_owned(),
        })?;

        let items = cart.entries().to_vec();
        cart.clear();

        let order = Order {
            id: Uuid::new_v4(),
            reference: receipt.reference,
            details: details.clone(),
            items,
            summary,
            placed_at: receipt.paid_at,
            estimated_delivery: receipt.paid_at + Duration::days(DELIVERY_ESTIMATE_DAYS),
        };

        tracing::info!(
            order_id = %order.id,
            reference = %order.reference,
            total = %order.summary.total,
            "order placed"
        );

        Ok(order)
    }
}
