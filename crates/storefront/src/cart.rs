//! Shopping cart state container.
//!
//! The cart is an insertion-ordered sequence of (product, quantity) entries,
//! unique by product ID, owned by exactly one session. Every mutation
//! persists the full entry list to the [`storage::keys::CART`] key before
//! returning, so a page reload restores the cart as-is.
//!
//! Persistence failures are deliberately non-fatal: a cart that cannot be
//! loaded degrades to empty, and a failed write leaves the in-memory state
//! as the source of truth for the rest of the session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use sweetshop_core::{CurrencyCode, Price, Product, ProductId};

use crate::storage::{self, LocalStore};

/// One (product, quantity) line in the cart.
///
/// The product is stored by copy so a persisted cart stays self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// The product in this line.
    pub product: Product,
    /// Units of the product. Always >= 1; removal is the only path to zero.
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Outcome signal for cart mutations.
///
/// The presentation layer turns these into user-facing notifications
/// ("Added to cart!", "Removed!"). None of them are errors; `NotFound`
/// exists so a remove on an absent ID can be observed without being
/// treated as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new entry was appended for this product.
    Added { product_id: ProductId },
    /// An existing entry's quantity was increased.
    QuantityIncreased { product_id: ProductId, quantity: u32 },
    /// The entry for this product was removed.
    Removed { product_id: ProductId },
    /// No entry matched the product ID; nothing changed.
    NotFound { product_id: ProductId },
    /// All entries were removed.
    Cleared,
}

/// The cart store.
///
/// Single-threaded by design: one store per browser tab, mutated only from
/// user-triggered actions, no interleaving. The shared [`LocalStore`] is
/// behind an `Arc` because the auth store writes to the same backend.
pub struct CartStore {
    entries: Vec<CartEntry>,
    storage: Arc<dyn LocalStore>,
}

impl CartStore {
    /// Restore the cart from persisted storage.
    ///
    /// Missing or unparseable persisted state degrades to an empty cart;
    /// this never fails.
    #[must_use]
    pub fn load(storage: Arc<dyn LocalStore>) -> Self {
        let entries = match storage.read(storage::keys::CART) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "persisted cart is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted cart, starting empty");
                Vec::new()
            }
        };

        Self { entries, storage }
    }

    /// Create an empty cart backed by `storage` without reading it.
    #[must_use]
    pub fn empty(storage: Arc<dyn LocalStore>) -> Self {
        Self {
            entries: Vec::new(),
            storage,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If an entry for the product already exists its quantity accumulates;
    /// otherwise a new entry is appended at the end. Quantities below 1 are
    /// treated as 1. Stock limits are not enforced here; that is a display
    /// concern.
    pub fn add(&mut self, product: &Product, quantity: u32) -> CartEvent {
        let quantity = quantity.max(1);

        let event = if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product.id)
        {
            entry.quantity = entry.quantity.saturating_add(quantity);
            CartEvent::QuantityIncreased {
                product_id: product.id,
                quantity: entry.quantity,
            }
        } else {
            self.entries.push(CartEntry {
                product: product.clone(),
                quantity,
            });
            CartEvent::Added {
                product_id: product.id,
            }
        };

        self.save();
        event
    }

    /// Remove the entry for `product_id`, if present.
    ///
    /// Removing an absent ID is not an error; it reports
    /// [`CartEvent::NotFound`] and leaves the cart unchanged.
    pub fn remove(&mut self, product_id: ProductId) -> CartEvent {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);

        if self.entries.len() == before {
            return CartEvent::NotFound { product_id };
        }

        self.save();
        CartEvent::Removed { product_id }
    }

    /// Set the quantity of the entry for `product_id` to `max(1, quantity)`.
    ///
    /// This operation never removes an entry: quantities at or below zero
    /// clamp to 1, and [`CartStore::remove`] is the only path to absence.
    /// No-op if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product_id) else {
            return;
        };

        entry.quantity = quantity.max(1);
        self.save();
    }

    /// Empty the cart and persist the empty collection.
    pub fn clear(&mut self) -> CartEvent {
        self.entries.clear();
        self.save();
        CartEvent::Cleared
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Sum of `price * quantity` over all entries. Empty cart totals $0.00.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .entries
            .first()
            .map_or_else(CurrencyCode::default, |e| e.product.price.currency_code);

        self.entries
            .iter()
            .fold(Price::zero(currency), |acc, e| acc + e.line_total())
    }

    /// Total item count (sum of quantities, not distinct products).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// The current entry sequence, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the current entries.
    ///
    /// Write failures are logged and swallowed; in-memory state remains the
    /// session's source of truth.
    fn save(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.write(storage::keys::CART, &serialized) {
            tracing::error!(error = %e, "failed to persist cart, continuing in memory");
        }
    }
}
