//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog/home page (filterable grid)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /product/{slug}         - Product detail (404 page on unknown slug)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer contents (fragment)
//! POST /cart/add               - Add to cart (returns count badge, triggers cart-updated)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Order form (redirects home when cart is empty)
//! POST /checkout               - Submit order, clear cart, show confirmation
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Format a whole-ruble amount for display, e.g. "1890 ₽".
pub(crate) fn format_rub(amount: u64) -> String {
    format!("{amount} ₽")
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page with the filterable catalog
        .route("/", get(home::home))
        // Product detail
        .route("/product/{slug}", get(products::show))
        // Cart fragments
        .nest("/cart", cart_routes())
        // Checkout form and submission
        .route("/checkout", get(checkout::form).post(checkout::submit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rub() {
        assert_eq!(format_rub(1890), "1890 ₽");
        assert_eq!(format_rub(0), "0 ₽");
    }
}
