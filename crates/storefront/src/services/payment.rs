//! Payment processor boundary.
//!
//! Checkout delegates the actual charge to an external payment widget. The
//! [`PaymentProcessor`] trait is that boundary; the shipped
//! [`MockPaymentProcessor`] mirrors the demo-checkout path, which approves
//! everything and fabricates an order reference.

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use sweetshop_core::{Email, Price};

/// Errors returned by a payment processor.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The provider declined the charge.
    #[error("payment declined: {0}")]
    Declined(String),

    /// The customer closed the payment widget without paying.
    #[error("payment cancelled")]
    Cancelled,
}

/// A charge request handed to the processor.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    /// Payer email, forwarded to the provider for receipts.
    pub email: Email,
    /// Total amount to charge.
    pub amount: Price,
    /// Human-readable order label shown in the payment widget.
    pub label: String,
}

/// A successful charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Provider-assigned payment reference.
    pub reference: String,
    /// When the charge completed.
    pub paid_at: DateTime<Utc>,
}

/// Pluggable payment boundary.
pub trait PaymentProcessor: Send + Sync {
    /// Charge the given amount.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] if the charge is declined or abandoned.
    fn charge(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}

/// Demo payment processor: approves every charge.
///
/// References are shaped `ORDER-{epoch_millis}-{suffix}` with a random
/// three-digit suffix, matching the demo checkout this replaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentProcessor;

impl PaymentProcessor for MockPaymentProcessor {
    fn charge(&self, request: &PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        let paid_at = Utc::now();
        let suffix: u16 = rand::rng().random_range(0..1000);
        let reference = format!("ORDER-{}-{suffix}", paid_at.timestamp_millis());

        tracing::info!(
            reference = %reference,
            amount = %request.amount,
            "mock payment approved"
        );

        Ok(PaymentReceipt { reference, paid_at })
    }
}
