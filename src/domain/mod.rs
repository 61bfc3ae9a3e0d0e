//! Shop entities and the ports the application layer depends on.

pub mod catalog;
pub mod money;
pub mod ports;
pub mod product;
pub mod seller;
pub mod transaction;
pub mod user;

/// Product identifier.
pub type ProductId = u32;

/// User identifier.
pub type UserId = u32;

/// Seller identifier.
pub type SellerId = u32;
