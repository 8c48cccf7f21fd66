//! External collaborator boundaries.
//!
//! Authentication and payment are pluggable so a real backend or payment
//! provider can be substituted without touching the cart store.

pub mod auth;
pub mod payment;
