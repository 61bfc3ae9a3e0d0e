use super::catalog::Catalog;
use super::money::Money;
use super::{ProductId, SellerId};
use crate::error::{Result, ShopError};
use tracing::info;

/// A store offering products from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub store_name: String,
    listings: Vec<ProductId>,
}

impl Seller {
    pub fn new(id: SellerId, store_name: impl Into<String>) -> Self {
        Self {
            id,
            store_name: store_name.into(),
            listings: Vec::new(),
        }
    }

    pub fn listings(&self) -> &[ProductId] {
        &self.listings
    }

    pub fn list_product(&mut self, product: ProductId) {
        self.listings.push(product);
        info!(store = %self.store_name, product, "product listed");
    }

    /// Drops the first listing of `product`. The product itself stays in the catalog.
    pub fn remove_listing(&mut self, product: ProductId) -> Result<()> {
        let index = self
            .listings
            .iter()
            .position(|id| *id == product)
            .ok_or_else(|| ShopError::NotListed {
                product,
                store: self.store_name.clone(),
            })?;
        self.listings.remove(index);
        info!(store = %self.store_name, product, "listing removed");
        Ok(())
    }

    /// Nominal value of everything listed: one unit price per listing, regardless of
    /// stock or sales.
    pub fn total_listed_value(&self, catalog: &Catalog) -> Result<Money> {
        catalog.price_of(&self.listings)
    }
}
