//! The interactive read-evaluate loop.

use super::console::Console;
use crate::application::shop::Shop;
use crate::domain::money::Money;
use crate::domain::{ProductId, SellerId, UserId};
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: [&str; 7] = [
    "",
    "Welcome to Online Shopping Platform",
    "1. View Products",
    "2. Add Product to Cart",
    "3. Remove Product from Cart",
    "4. Checkout",
    "5. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    AddToCart,
    RemoveFromCart,
    Checkout,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::ViewProducts),
            2 => Ok(MenuChoice::AddToCart),
            3 => Ok(MenuChoice::RemoveFromCart),
            4 => Ok(MenuChoice::Checkout),
            5 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Drives a [`Shop`] from a [`Console`] until the user exits.
///
/// Recoverable errors are printed and the loop carries on. Fatal ones (unreadable input,
/// closed input, I/O failures) end the loop and are returned to the caller.
pub struct Menu<'a, R: BufRead, W: Write> {
    shop: &'a mut Shop,
    console: Console<R, W>,
    state: MenuState,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(shop: &'a mut Shop, console: Console<R, W>) -> Self {
        Self {
            shop,
            console,
            state: MenuState::Running,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        while self.state == MenuState::Running {
            self.step().await?;
        }
        Ok(())
    }

    /// Shows the menu once, reads a choice and carries it out.
    pub async fn step(&mut self) -> Result<()> {
        for line in MENU {
            self.console.say(line)?;
        }
        let raw = self.console.prompt_int("Enter your choice: ")?;
        debug!(choice = raw, "menu choice");

        let result = match MenuChoice::try_from(raw) {
            Ok(MenuChoice::Exit) => {
                self.state = MenuState::Terminated;
                self.console.say("Exiting...")
            }
            Ok(MenuChoice::ViewProducts) => self.view_products(),
            Ok(MenuChoice::AddToCart) => self.add_to_cart(),
            Ok(MenuChoice::RemoveFromCart) => self.remove_from_cart(),
            Ok(MenuChoice::Checkout) => self.checkout().await,
            Err(_) => self.console.say("Invalid choice. Please try again."),
        };
        self.report(result)
    }

    /// Confirms every product the sellers currently list, one line each.
    pub fn announce_listings(&mut self) -> Result<()> {
        for seller in self.shop.sellers() {
            for id in seller.listings() {
                let name = &self.shop.product(*id)?.name;
                self.console
                    .say(format_args!("{name} listed in {}", seller.store_name))?;
            }
        }
        Ok(())
    }

    /// Lists `product` in a seller's store and confirms it.
    pub fn list_product(&mut self, seller: SellerId, product: ProductId) -> Result<()> {
        let result = self.shop.list_product(seller, product).and_then(|()| {
            let name = &self.shop.product(product)?.name;
            let store = &self.shop.seller(seller)?.store_name;
            self.console.say(format_args!("{name} listed in {store}"))
        });
        self.report(result)
    }

    /// Drops a listing and confirms it, or reports that the store never listed it.
    pub fn remove_listing(&mut self, seller: SellerId, product: ProductId) -> Result<()> {
        let result = self.shop.remove_listing(seller, product).and_then(|()| {
            let name = &self.shop.product(product)?.name;
            let store = &self.shop.seller(seller)?.store_name;
            self.console.say(format_args!("{name} removed from {store}"))
        });
        self.report(result)
    }

    /// Refunds `amount` to a user and confirms it.
    pub async fn refund(&mut self, user: UserId, amount: Money) -> Result<()> {
        let result = self
            .shop
            .refund(user, amount)
            .await
            .and_then(|()| self.console.say("Refund processed successfully."));
        self.report(result)
    }

    /// Prints every logged payment and refund.
    pub async fn print_transactions(&mut self) -> Result<()> {
        let records = self.shop.transactions().await?;
        self.console.say("Transaction History:")?;
        for record in records {
            self.console.say(format_args!("- {record}"))?;
        }
        Ok(())
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn report(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Err(e) if !e.is_fatal() => {
                debug!(error = ?e, "reported to user");
                self.console.say(e)
            }
            other => other,
        }
    }

    fn view_products(&mut self) -> Result<()> {
        self.console.say("\nAvailable Products:")?;
        for product in self.shop.catalog().products() {
            self.console.say(product)?;
        }
        Ok(())
    }

    fn add_to_cart(&mut self) -> Result<()> {
        let Some(product) = self.console.prompt_id("Enter product ID to add to cart: ")? else {
            return self.console.say("Product not found.");
        };
        self.shop.product(product)?;

        let quantity = self.console.prompt_int("Enter quantity: ")?;
        let units = self.shop.purchase(product, quantity)?;

        match self.console.prompt_id("Enter user ID: ") {
            Ok(Some(user)) => self.shop.place_in_cart(user, product, units)?,
            Ok(None) => {
                self.shop.release(product, units)?;
                return self.console.say("User not found.");
            }
            Err(e) => {
                self.shop.release(product, units)?;
                return Err(e);
            }
        }

        let name = &self.shop.product(product)?.name;
        self.console.say(format_args!("{name} added to cart."))
    }

    fn remove_from_cart(&mut self) -> Result<()> {
        let found = self
            .console
            .prompt_id("Enter product ID to remove from cart: ")?
            .filter(|id| self.shop.product(*id).is_ok());
        let Some(product) = found else {
            return self.console.say("Product not found in available products.");
        };

        let Some(user) = self.console.prompt_id("Enter user ID: ")? else {
            return self.console.say("User not found.");
        };
        self.shop.remove_from_cart(user, product)?;

        let name = &self.shop.product(product)?.name;
        self.console.say(format_args!("{name} removed from cart."))
    }

    async fn checkout(&mut self) -> Result<()> {
        let Some(user) = self.console.prompt_id("Enter user ID: ")? else {
            return self.console.say("User not found.");
        };

        let summary = self.shop.checkout_summary(user)?;
        self.console
            .say(format_args!("Checkout Summary for {}:", summary.user))?;
        for line in &summary.items {
            self.console.say(line)?;
        }
        self.console
            .say(format_args!("Total Amount: ${}", summary.total))?;

        // A decline surfaces as a reported error; the cart stays as it was.
        self.shop.checkout(user).await?;
        self.console.say("Checkout successful!")
    }
}
