use super::catalog::Catalog;
use super::money::Money;
use super::ports::PaymentGateway;
use super::{ProductId, UserId};
use crate::error::{Result, ShopError};
use std::fmt;
use tracing::{info, warn};

/// One successful Add: a product and how many units were bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub product: ProductId,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: ProductId, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// A priced cart entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLine {
    pub name: String,
    pub quantity: u32,
    pub amount: Money,
}

impl fmt::Display for CheckoutLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            1 => write!(f, "- {}: ${}", self.name, self.amount),
            n => write!(f, "- {} x{}: ${}", self.name, n, self.amount),
        }
    }
}

/// Itemized view of a cart about to be paid for.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub user: String,
    /// One line per cart entry, in cart order.
    pub items: Vec<CheckoutLine>,
    pub total: Money,
}

/// A shopper and their cart.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Entries in insertion order. The same product may appear more than once.
    cart: Vec<CartEntry>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cart: Vec::new(),
        }
    }

    pub fn cart(&self) -> &[CartEntry] {
        &self.cart
    }

    /// Appends an entry. Stock is checked by the caller beforehand.
    pub fn add_to_cart(&mut self, product: ProductId, quantity: u32) {
        self.cart.push(CartEntry::new(product, quantity));
        info!(user = %self.name, product, quantity, "added to cart");
    }

    /// Removes the first entry for `product`, whatever its quantity.
    pub fn remove_from_cart(&mut self, product: ProductId) -> Result<()> {
        let index = self
            .cart
            .iter()
            .position(|entry| entry.product == product)
            .ok_or(ShopError::NotInCart(product))?;
        self.cart.remove(index);
        info!(user = %self.name, product, "removed from cart");
        Ok(())
    }

    pub fn cart_total(&self, catalog: &Catalog) -> Result<Money> {
        self.cart
            .iter()
            .map(|entry| {
                catalog
                    .get(entry.product)
                    .map(|p| p.unit_price * entry.quantity)
            })
            .sum()
    }

    pub fn checkout_summary(&self, catalog: &Catalog) -> Result<CheckoutSummary> {
        if self.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }
        let items = self
            .cart
            .iter()
            .map(|entry| {
                catalog.get(entry.product).map(|p| CheckoutLine {
                    name: p.name.clone(),
                    quantity: entry.quantity,
                    amount: p.unit_price * entry.quantity,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let total = items.iter().map(|line| line.amount).sum();
        Ok(CheckoutSummary {
            user: self.name.clone(),
            items,
            total,
        })
    }

    /// Pays for the whole cart in a single attempt.
    ///
    /// The cart is cleared only when the gateway approves. A declined payment leaves it
    /// exactly as it was so the user can try again later.
    pub async fn checkout(
        &mut self,
        catalog: &Catalog,
        gateway: &dyn PaymentGateway,
    ) -> Result<CheckoutSummary> {
        let summary = self.checkout_summary(catalog)?;
        let outcome = gateway.process_payment(&self.name, summary.total).await?;
        if !outcome.is_approved() {
            warn!(user = %self.name, total = %summary.total, "payment declined");
            return Err(ShopError::PaymentDeclined {
                user: self.name.clone(),
                amount: summary.total,
            });
        }
        self.cart.clear();
        info!(user = %self.name, total = %summary.total, "checkout completed");
        Ok(summary)
    }
}
