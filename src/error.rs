use crate::domain::money::Money;
use rust_decimal::Decimal;
use crate::domain::{ProductId, SellerId, UserId};
use thiserror::Error;

/// Every failure the shop can report.
///
/// Most variants are recoverable: the menu loop prints them and keeps running.
/// [`ShopError::is_fatal`] singles out the ones that end the session.
#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Product not found.")]
    ProductNotFound(ProductId),
    #[error("User not found.")]
    UserNotFound(UserId),
    #[error("Seller not found.")]
    SellerNotFound(SellerId),
    #[error("Product not found in cart.")]
    NotInCart(ProductId),
    #[error("Product not found in {store}")]
    NotListed { product: ProductId, store: String },
    #[error("Insufficient stock for {product}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
    #[error("Invalid quantity: {0}. Quantity must be a positive number.")]
    InvalidQuantity(i64),
    #[error("Invalid amount: {0}. Amounts cannot be negative.")]
    InvalidAmount(Decimal),
    #[error("Cart is empty.")]
    EmptyCart,
    #[error("Checkout failed. Payment was not processed.")]
    PaymentDeclined { user: String, amount: Money },
    #[error("Invalid input: expected a whole number, got {0:?}")]
    InvalidInput(String),
    #[error("Input closed before exit was selected")]
    InputClosed,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShopError {
    /// Whether the error ends the menu loop instead of being reported.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShopError::InvalidInput(_)
                | ShopError::InputClosed
                | ShopError::Config(_)
                | ShopError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_errors_are_not_fatal() {
        assert!(!ShopError::ProductNotFound(7).is_fatal());
        assert!(!ShopError::EmptyCart.is_fatal());
        assert!(!ShopError::InvalidQuantity(0).is_fatal());
        assert!(!ShopError::InvalidAmount(Decimal::NEGATIVE_ONE).is_fatal());
    }

    #[test]
    fn test_input_errors_are_fatal() {
        assert!(ShopError::InvalidInput("abc".to_string()).is_fatal());
        assert!(ShopError::InputClosed.is_fatal());
    }

    #[test]
    fn test_insufficient_stock_message_names_product() {
        let err = ShopError::InsufficientStock {
            product: "Laptop".to_string(),
            requested: 11,
            available: 10,
        };
        assert_eq!(err.to_string(), "Insufficient stock for Laptop");
    }
}
