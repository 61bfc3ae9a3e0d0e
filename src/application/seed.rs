use super::shop::Shop;
use crate::domain::money::Money;
use crate::domain::ports::PaymentGatewayBox;
use crate::domain::product::Product;
use crate::domain::seller::Seller;
use crate::domain::user::User;
use crate::error::Result;
use rust_decimal_macros::dec;

impl Shop {
    /// A shop stocked with the sample users, products and seller every session starts from.
    pub fn with_sample_data(gateway: PaymentGatewayBox) -> Result<Self> {
        let mut shop = Shop::new(gateway);

        shop.add_user(User::new(1, "Alice"));
        shop.add_user(User::new(2, "Bob"));

        shop.add_product(Product::new(101, "Laptop", Money::new(dec!(999.99))?, 10));
        shop.add_product(Product::new(102, "Phone", Money::new(dec!(499.99))?, 20));
        shop.add_product(Product::new(103, "Headphones", Money::new(dec!(79.99))?, 30));

        let mut store = Seller::new(201, "Electronics Store");
        store.list_product(101);
        store.list_product(102);
        shop.add_seller(store);

        Ok(shop)
    }
}
