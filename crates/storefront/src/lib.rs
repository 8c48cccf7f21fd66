//! Sweetshop Storefront library.
//!
//! Client-side storefront logic for the Sweetshop bakery shop: product
//! catalog, cart management, mock authentication, and a checkout flow wired
//! to a pluggable payment processor.
//!
//! There is no server and no database. All state lives in one
//! [`state::Session`] per browser tab and persists across reloads through
//! the [`storage::LocalStore`] key-value boundary. The presentation layer
//! renders session state and invokes its mutation operations; it never
//! touches entries directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod storage;
