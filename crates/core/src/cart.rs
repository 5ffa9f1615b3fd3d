//! In-memory shopping cart.
//!
//! The cart owns its lines; each line embeds the product record rather than
//! referencing the catalog, so the whole cart serializes into the session
//! as `[{product, quantity}]` - the same JSON shape the legacy client kept
//! under its local-storage `cart` key.
//!
//! Adding a product never touches any UI: revealing the cart drawer is the
//! caller's decision, signalled out-of-band by the HTTP layer.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A cart line: a product and how many units of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

/// Shopping cart holding at most one line per distinct product id.
///
/// There is no per-line removal or decrement: lines only grow via
/// [`Cart::add`] and the whole cart is dropped by [`Cart::clear`] after a
/// confirmed order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Add `quantity` units of `product`, merging into an existing line for
    /// the same product id. Quantities below 1 are clamped to 1.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    /// Sum of `price * quantity` over all lines, in whole rubles.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Drop all lines; used after order confirmation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(slug: &str) -> Product {
        Catalog::builtin()
            .find_by_slug(slug)
            .expect("builtin product exists")
            .clone()
    }

    #[test]
    fn adding_same_product_twice_merges_lines() {
        let cedar = product("cedar");
        let mut cart = Cart::default();
        cart.add(cedar.clone(), 1);
        cart.add(cedar.clone(), 1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total(), 2 * u64::from(cedar.price));
    }

    #[test]
    fn distinct_products_get_distinct_lines() {
        let mut cart = Cart::default();
        cart.add(product("cedar"), 2);
        cart.add(product("flax"), 3);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn zero_quantity_is_clamped_to_one() {
        let mut cart = Cart::default();
        cart.add(product("flax"), 0);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn clear_empties_totals() {
        let mut cart = Cart::default();
        cart.add(product("pumpkin"), 4);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
        assert_eq!(cart.count(), 0);
    }

    // Scenario from the product sheet: two cedar (1890) plus one flax (890).
    #[test]
    fn mixed_cart_totals() {
        let mut cart = Cart::default();
        cart.add(product("cedar"), 1);
        cart.add(product("cedar"), 1);
        cart.add(product("flax"), 1);

        assert_eq!(cart.total(), 1890 * 2 + 890);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn cart_serializes_as_legacy_item_array() {
        let mut cart = Cart::default();
        cart.add(product("flax"), 2);

        let json = serde_json::to_value(&cart).expect("serializes");
        let items = json.as_array().expect("cart is a bare array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["quantity"], 2);
        assert_eq!(items[0]["product"]["nameEn"], "Flax Seed Oil");

        let restored: Cart = serde_json::from_value(json).expect("round-trips");
        assert_eq!(restored.count(), 2);
    }
}
