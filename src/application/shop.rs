use crate::domain::catalog::Catalog;
use crate::domain::money::Money;
use crate::domain::ports::PaymentGatewayBox;
use crate::domain::product::Product;
use crate::domain::seller::Seller;
use crate::domain::transaction::TransactionRecord;
use crate::domain::user::{CheckoutSummary, User};
use crate::domain::{ProductId, SellerId, UserId};
use crate::error::{Result, ShopError};
use tracing::{debug, info};

/// The application context.
///
/// `Shop` owns every user, product and seller for the lifetime of a session, plus the
/// payment gateway used at checkout. All use cases go through it; nothing is global.
pub struct Shop {
    users: Vec<User>,
    catalog: Catalog,
    sellers: Vec<Seller>,
    gateway: PaymentGatewayBox,
}

impl Shop {
    /// Creates an empty shop.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The gateway every checkout and refund goes through.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self {
            users: Vec::new(),
            catalog: Catalog::new(),
            sellers: Vec::new(),
            gateway,
        }
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn add_product(&mut self, product: Product) {
        self.catalog.add(product);
    }

    pub fn add_seller(&mut self, seller: Seller) {
        self.sellers.push(seller);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn sellers(&self) -> impl Iterator<Item = &Seller> {
        self.sellers.iter()
    }

    pub fn product(&self, id: ProductId) -> Result<&Product> {
        debug!(product = id, "looking up product");
        self.catalog.get(id)
    }

    pub fn user(&self, id: UserId) -> Result<&User> {
        debug!(user = id, "looking up user");
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(ShopError::UserNotFound(id))
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(ShopError::UserNotFound(id))
    }

    pub fn seller(&self, id: SellerId) -> Result<&Seller> {
        self.sellers
            .iter()
            .find(|s| s.id == id)
            .ok_or(ShopError::SellerNotFound(id))
    }

    fn seller_mut(&mut self, id: SellerId) -> Result<&mut Seller> {
        self.sellers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(ShopError::SellerNotFound(id))
    }

    /// Takes `quantity` units of `product` out of stock.
    ///
    /// Non-positive quantities are rejected before the product is touched. Returns the
    /// number of units taken.
    pub fn purchase(&mut self, product: ProductId, quantity: i64) -> Result<u32> {
        let units = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(ShopError::InvalidQuantity(quantity))?;
        let item = self.catalog.get_mut(product)?;
        item.attempt_purchase(units)?;
        info!(product, quantity = units, remaining = item.stock(), "stock reserved");
        Ok(units)
    }

    /// Returns purchased units to stock.
    pub fn release(&mut self, product: ProductId, quantity: u32) -> Result<()> {
        self.catalog.get_mut(product)?.restock(quantity);
        info!(product, quantity, "stock released");
        Ok(())
    }

    /// Puts an already purchased product into a user's cart.
    ///
    /// Adds a single cart entry carrying `quantity`. If the user does not exist the
    /// purchased units go back into stock.
    pub fn place_in_cart(&mut self, user: UserId, product: ProductId, quantity: u32) -> Result<()> {
        match self.user_mut(user) {
            Ok(u) => {
                u.add_to_cart(product, quantity);
                Ok(())
            }
            Err(e) => {
                self.release(product, quantity)?;
                Err(e)
            }
        }
    }

    /// Purchases `quantity` units and adds one cart entry holding them for `user`.
    pub fn add_to_cart(&mut self, user: UserId, product: ProductId, quantity: i64) -> Result<()> {
        let units = self.purchase(product, quantity)?;
        self.place_in_cart(user, product, units)
    }

    pub fn remove_from_cart(&mut self, user: UserId, product: ProductId) -> Result<()> {
        self.catalog.get(product)?;
        self.user_mut(user)?.remove_from_cart(product)
    }

    pub fn checkout_summary(&self, user: UserId) -> Result<CheckoutSummary> {
        self.user(user)?.checkout_summary(&self.catalog)
    }

    /// Runs a single payment attempt for the user's whole cart.
    pub async fn checkout(&mut self, user: UserId) -> Result<CheckoutSummary> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == user)
            .ok_or(ShopError::UserNotFound(user))?;
        user.checkout(&self.catalog, &*self.gateway).await
    }

    /// Refunds `amount` to `user`. No prior payment is required.
    pub async fn refund(&self, user: UserId, amount: Money) -> Result<()> {
        let name = &self.user(user)?.name;
        self.gateway.refund(name, amount).await
    }

    pub async fn transactions(&self) -> Result<Vec<TransactionRecord>> {
        self.gateway.transactions().await
    }

    pub fn list_product(&mut self, seller: SellerId, product: ProductId) -> Result<()> {
        self.catalog.get(product)?;
        self.seller_mut(seller)?.list_product(product);
        Ok(())
    }

    pub fn remove_listing(&mut self, seller: SellerId, product: ProductId) -> Result<()> {
        self.seller_mut(seller)?.remove_listing(product)
    }

    pub fn total_listed_value(&self, seller: SellerId) -> Result<Money> {
        self.seller(seller)?.total_listed_value(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::CartEntry;
    use crate::infrastructure::approval::{FixedApproval, ScriptedApproval};
    use crate::infrastructure::gateway::MockPaymentGateway;
    use rust_decimal_macros::dec;

    fn shop(approve: bool) -> Shop {
        let approval = if approve {
            FixedApproval::always()
        } else {
            FixedApproval::never()
        };
        Shop::with_sample_data(Box::new(MockPaymentGateway::in_memory(Box::new(approval))))
            .unwrap()
    }

    #[test]
    fn test_add_to_cart_decrements_stock() {
        let mut shop = shop(true);
        shop.add_to_cart(1, 101, 1).unwrap();
        shop.add_to_cart(1, 103, 2).unwrap();

        assert_eq!(shop.product(101).unwrap().stock(), 9);
        assert_eq!(shop.product(103).unwrap().stock(), 28);
        assert_eq!(
            shop.user(1).unwrap().cart(),
            &[CartEntry::new(101, 1), CartEntry::new(103, 2)]
        );
    }

    #[test]
    fn test_add_to_cart_insufficient_stock() {
        let mut shop = shop(true);
        let result = shop.add_to_cart(1, 101, 11);
        assert!(matches!(result, Err(ShopError::InsufficientStock { .. })));
        assert_eq!(shop.product(101).unwrap().stock(), 10);
        assert!(shop.user(1).unwrap().cart().is_empty());
    }

    #[test]
    fn test_add_to_cart_rejects_non_positive_quantity() {
        let mut shop = shop(true);
        assert!(matches!(
            shop.add_to_cart(1, 101, 0),
            Err(ShopError::InvalidQuantity(0))
        ));
        assert!(matches!(
            shop.add_to_cart(1, 101, -3),
            Err(ShopError::InvalidQuantity(-3))
        ));
        assert_eq!(shop.product(101).unwrap().stock(), 10);
    }

    #[test]
    fn test_unknown_user_releases_stock() {
        let mut shop = shop(true);
        let result = shop.add_to_cart(99, 102, 5);
        assert!(matches!(result, Err(ShopError::UserNotFound(99))));
        assert_eq!(shop.product(102).unwrap().stock(), 20);
    }

    #[test]
    fn test_unknown_product() {
        let mut shop = shop(true);
        assert!(matches!(
            shop.add_to_cart(1, 999, 1),
            Err(ShopError::ProductNotFound(999))
        ));
        assert!(matches!(
            shop.remove_from_cart(1, 999),
            Err(ShopError::ProductNotFound(999))
        ));
    }

    #[test]
    fn test_remove_from_cart_absent() {
        let mut shop = shop(true);
        shop.add_to_cart(1, 101, 1).unwrap();
        assert!(matches!(
            shop.remove_from_cart(1, 102),
            Err(ShopError::NotInCart(102))
        ));
        assert_eq!(shop.user(1).unwrap().cart(), &[CartEntry::new(101, 1)]);
    }

    #[test]
    fn test_remove_does_not_touch_listings() {
        let mut shop = shop(true);
        shop.add_to_cart(1, 101, 1).unwrap();
        shop.remove_from_cart(1, 101).unwrap();
        assert!(shop.user(1).unwrap().cart().is_empty());
        assert_eq!(shop.seller(201).unwrap().listings(), &[101, 102]);
    }

    #[tokio::test]
    async fn test_scenario_approved() {
        let mut shop = shop(true);
        shop.add_to_cart(1, 101, 1).unwrap();
        shop.add_to_cart(1, 103, 2).unwrap();
        assert_eq!(
            shop.checkout_summary(1).unwrap().total,
            Money::new(dec!(1159.97)).unwrap()
        );

        let summary = shop.checkout(1).await.unwrap();
        assert_eq!(summary.total, Money::new(dec!(1159.97)).unwrap());
        assert!(shop.user(1).unwrap().cart().is_empty());

        let log = shop.transactions().await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], TransactionRecord::payment("Alice", summary.total));
    }

    #[tokio::test]
    async fn test_scenario_declined() {
        let mut shop = shop(false);
        shop.add_to_cart(1, 101, 1).unwrap();
        shop.add_to_cart(1, 103, 2).unwrap();

        let result = shop.checkout(1).await;
        assert!(matches!(result, Err(ShopError::PaymentDeclined { .. })));
        assert_eq!(
            shop.user(1).unwrap().cart(),
            &[CartEntry::new(101, 1), CartEntry::new(103, 2)]
        );
        assert!(shop.transactions().await.unwrap().is_empty());
        assert_eq!(shop.product(101).unwrap().stock(), 9);
    }

    #[tokio::test]
    async fn test_retry_after_decline() {
        let gateway =
            MockPaymentGateway::in_memory(Box::new(ScriptedApproval::new([false, true], false)));
        let mut shop = Shop::with_sample_data(Box::new(gateway)).unwrap();
        shop.add_to_cart(2, 102, 1).unwrap();

        assert!(shop.checkout(2).await.is_err());
        assert_eq!(shop.user(2).unwrap().cart(), &[CartEntry::new(102, 1)]);
        assert!(shop.checkout(2).await.is_ok());
        assert!(shop.user(2).unwrap().cart().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_unknown_user() {
        let mut shop = shop(true);
        assert!(matches!(
            shop.checkout(42).await,
            Err(ShopError::UserNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_refund_is_logged() {
        let shop = shop(false);
        shop.refund(2, Money::new(dec!(79.99)).unwrap()).await.unwrap();
        let log = shop.transactions().await.unwrap();
        assert_eq!(log[0].to_string(), "Refund of $79.99 issued for user Bob");
    }

    #[test]
    fn test_seller_operations() {
        let mut shop = shop(true);
        assert_eq!(
            shop.total_listed_value(201).unwrap(),
            Money::new(dec!(1499.98)).unwrap()
        );
        shop.list_product(201, 103).unwrap();
        shop.remove_listing(201, 101).unwrap();
        assert_eq!(
            shop.total_listed_value(201).unwrap(),
            Money::new(dec!(579.98)).unwrap()
        );
        assert!(matches!(
            shop.remove_listing(201, 101),
            Err(ShopError::NotListed { .. })
        ));
        assert!(matches!(
            shop.list_product(999, 101),
            Err(ShopError::SellerNotFound(999))
        ));
        // Listing changes never delete catalog products.
        assert!(shop.product(101).is_ok());
    }
}
