//! Static read-only product catalog.
//!
//! The catalog is loaded once at session start and held in memory; nothing
//! mutates it afterwards. The builtin catalog embeds `data/products.json`
//! (the twelve bakery products) into the binary, and [`Catalog::load`]
//! reads the same format from disk for deployments that swap the range.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use sweetshop_core::{Category, Product, ProductId};

/// The builtin product range, embedded at compile time.
const BUILTIN_PRODUCTS: &str = include_str!("../data/products.json");

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(String),

    /// The catalog data is not valid product JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Read-only product catalog.
///
/// Cheap to clone; the product list is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Load the builtin bakery catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded data is malformed;
    /// this indicates a packaging defect, not a runtime condition.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PRODUCTS)
    }

    /// Load a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or parsed, or if
    /// product IDs are not unique.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::from_json(&data)
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on malformed JSON or duplicate product IDs.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(data)?;

        // Product id uniqueness is what the cart's merge-by-id relies on.
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Get a product by ID.
    #[must_use]
    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get products in a category; `None` returns the full range.
    #[must_use]
    pub fn get_by_category(&self, category: Option<Category>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    /// Get the featured products, in catalog order.
    #[must_use]
    pub fn get_featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// All products, in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let product = catalog.get_by_id(ProductId::new(7)).unwrap();
        assert_eq!(product.name, "Lemon Tart");

        assert!(catalog.get_by_id(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_get_by_category() {
        let catalog = Catalog::builtin().unwrap();

        let cakes = catalog.get_by_category(Some(Category::Cakes));
        assert_eq!(cakes.len(), 4);
        assert!(cakes.iter().all(|p| p.category == Category::Cakes));

        // None means the "all products" filter.
        assert_eq!(catalog.get_by_category(None).len(), 12);
    }

    #[test]
    fn test_get_featured() {
        let catalog = Catalog::builtin().unwrap();
        let featured = catalog.get_featured();
        assert_eq!(featured.len(), 6);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let data = r#"[
            {"id":1,"name":"A","description":"","price":{"amount":"1.00","currency_code":"USD"},
             "image":"https://example.com/a.jpg","category":"cakes","stock":1,"featured":false},
            {"id":1,"name":"B","description":"","price":{"amount":"2.00","currency_code":"USD"},
             "image":"https://example.com/b.jpg","category":"cakes","stock":1,"featured":false}
        ]"#;
        assert!(matches!(
            Catalog::from_json(data),
            Err(CatalogError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
