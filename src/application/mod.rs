//! Application layer containing the shop's use cases.
//!
//! This module defines `Shop`, the context that owns every user, product and seller
//! and routes checkouts through the payment gateway port.

pub mod seed;
pub mod shop;
