//! Sweetshop Core - Shared types library.
//!
//! This crate provides the common types used by the rest of the workspace:
//! - `storefront` - Catalog, cart, auth, and checkout logic
//! - `integration-tests` - End-to-end storefront flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   product records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
