use serde::{Deserialize, Serialize};

use super::Product;
use crate::error::CheckoutError;

/// A product snapshot plus the requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: f64,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity
    }
}

/// Pre-checkout basket. Lines keep the order in which products were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`, or bumps the existing line by one.
    /// Products with no stock left are refused.
    pub fn add(&mut self, product: Product) -> Result<(), CheckoutError> {
        if product.stock <= 0.0 {
            return Err(CheckoutError::OutOfStock(product.id));
        }
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1.0,
            None => self.items.push(CartItem { product, quantity: 1.0 }),
        }
        Ok(())
    }

    /// Sets the quantity of a line. Zero or less drops it.
    pub fn update_quantity(&mut self, product_id: &str, quantity: f64) {
        if quantity <= 0.0 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|item| item.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn total_items(&self) -> f64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Copies the lines for an order; the cart stays editable afterwards.
    pub fn snapshot(&self) -> Vec<CartItem> {
        self.items.clone()
    }
}
