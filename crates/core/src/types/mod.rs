//! Shared domain types for the Sweetshop storefront.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod product;

pub use category::Category;
pub use email::{Email, EmailError};
pub use id::{ProductId, UserId};
pub use price::{CurrencyCode, Price};
pub use product::Product;
