//! Product record.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{Category, Price, ProductId};

/// An immutable catalog product.
///
/// Products are supplied by the read-only catalog; nothing in the storefront
/// mutates them. The cart stores a copy of the product alongside its
/// quantity, so a persisted cart stays renderable even if the catalog
/// changes between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Longer marketing description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Product photo URL.
    pub image: Url,
    /// Category the product is listed under.
    pub category: Category,
    /// Units available. Display-layer concern only; the cart does not
    /// enforce stock limits.
    pub stock: u32,
    /// Whether the product appears in the featured section.
    pub featured: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Lemon Tart".to_string(),
            description: "Tangy lemon curd in a buttery pastry shell.".to_string(),
            price: Price::from_cents(2299, CurrencyCode::USD),
            image: Url::parse("https://images.example.com/lemon-tart.jpg").unwrap(),
            category: Category::Pastries,
            stock: 15,
            featured: false,
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_price_serializes_as_string() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(json["price"]["amount"], "22.99");
        assert_eq!(json["category"], "pastries");
    }
}
