use super::ProductId;
use super::money::Money;
use crate::error::{Result, ShopError};
use std::fmt;

/// An inventory record in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// The unique identifier for the product.
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    /// Units left to sell. Never goes below zero.
    stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: Money, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            stock,
        }
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Takes `quantity` units out of stock, all or nothing.
    ///
    /// A zero quantity is rejected. When the request exceeds the remaining stock the
    /// product is left untouched and `InsufficientStock` is returned.
    pub fn attempt_purchase(&mut self, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(ShopError::InvalidQuantity(0));
        }
        if quantity > self.stock {
            return Err(ShopError::InsufficientStock {
                product: self.name.clone(),
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Returns units to stock.
    pub fn restock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product ID: {}", self.id)?;
        writeln!(f, "Product Name: {}", self.name)?;
        writeln!(f, "Price: ${}", self.unit_price)?;
        write!(f, "Stock Count: {}", self.stock)
    }
}
