//! Shopping Cart State Management
//!
//! The cart owns the products entered during a session. Its list is private;
//! callers go through the add/remove/change/list operations below.

use super::models::{EanCode, Product};
use crate::error::CartError;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// One row of [`Cart::contents`]: the product name, its flat attribute map,
/// and the product itself.
#[derive(Debug, Clone)]
pub struct CartEntry<'a> {
    /// Product name, the sort key
    pub name: &'a str,

    /// Every attribute as a flat JSON map
    pub attributes: Map<String, Value>,

    /// The product as stored in the cart
    pub product: &'a Product,
}

/// Ordered collection of products for the session.
#[derive(Debug, Default)]
pub struct Cart {
    /// Products in insertion order
    contents: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `product` in insertion order. No uniqueness check happens here;
    /// the session guarantees EAN codes are unique.
    pub fn add_product(&mut self, product: Product) {
        info!(id = %product.id(), name = product.name(), "Product added to cart");
        self.contents.push(product);
    }

    /// Removes the first product carrying `id` and hands it back.
    pub fn remove_product(&mut self, id: EanCode) -> Result<Product, CartError> {
        let position = self
            .contents
            .iter()
            .position(|p| p.id() == id)
            .ok_or(CartError::NotFound(id))?;

        let removed = self.contents.remove(position);
        info!(id = %id, name = removed.name(), "Product removed from cart");
        Ok(removed)
    }

    /// Sets the quantity of the product carrying `id`.
    pub fn change_quantity(&mut self, id: EanCode, quantity: i64) -> Result<(), CartError> {
        let product = self
            .contents
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(CartError::NotFound(id))?;

        debug!(id = %id, from = product.quantity(), to = quantity, "Changing quantity");
        product.set_quantity(quantity);
        Ok(())
    }

    /// Snapshot of the cart sorted ascending by name. Products sharing a name
    /// keep their insertion order. Recomputed on every call.
    pub fn contents(&self) -> Vec<CartEntry<'_>> {
        let mut entries: Vec<CartEntry<'_>> = self
            .contents
            .iter()
            .map(|product| CartEntry {
                name: product.name(),
                attributes: product.attributes(),
                product,
            })
            .collect();

        entries.sort_by(|a, b| a.name.cmp(b.name));
        entries
    }

    pub fn find(&self, id: EanCode) -> Option<&Product> {
        self.contents.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
