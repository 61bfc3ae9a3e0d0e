use super::ProductId;
use super::money::Money;
use super::product::Product;
use crate::error::{Result, ShopError};

/// The master list of products. Carts and listings refer into it by id.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ShopError::ProductNotFound(id))
    }

    pub fn get_mut(&mut self, id: ProductId) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ShopError::ProductNotFound(id))
    }

    /// Sums the unit prices of `ids`, counting repeats individually.
    pub fn price_of<'a>(&self, ids: impl IntoIterator<Item = &'a ProductId>) -> Result<Money> {
        ids.into_iter()
            .map(|id| self.get(*id).map(|p| p.unit_price))
            .sum()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog::from_iter([
            Product::new(101, "Laptop", Money::new(dec!(999.99)).unwrap(), 10),
            Product::new(103, "Headphones", Money::new(dec!(79.99)).unwrap(), 30),
        ])
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(103).unwrap().name, "Headphones");
        assert!(matches!(catalog.get(999), Err(ShopError::ProductNotFound(999))));
    }

    #[test]
    fn test_price_of_counts_duplicates() {
        let catalog = catalog();
        let total = catalog.price_of(&[103, 103]).unwrap();
        assert_eq!(total, Money::new(dec!(159.98)).unwrap());
    }

    #[test]
    fn test_price_of_unknown_id() {
        let catalog = catalog();
        assert!(catalog.price_of(&[101, 7]).is_err());
    }

    #[test]
    fn test_get_mut_mutates_master_record() {
        let mut catalog = catalog();
        catalog.get_mut(101).unwrap().attempt_purchase(1).unwrap();
        assert_eq!(catalog.get(101).unwrap().stock(), 9);
    }
}
