//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session under [`CART_SESSION_KEY`] as a
//! JSON array of `{product, quantity}` records; the session is the single
//! source of truth for cart state across pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use green_power_core::{Cart, ProductId};

use crate::error::AppError;
use crate::routes::format_rub;
use crate::state::AppState;

/// Session key holding the serialized cart.
pub const CART_SESSION_KEY: &str = "cart";

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session.
///
/// Malformed persisted cart data is treated as an empty cart rather than a
/// fatal error; the broken value is discarded on the next save.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(CART_SESSION_KEY).await {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::default(),
        Err(e) => {
            tracing::warn!("discarding unreadable session cart: {e}");
            Cart::default()
        }
    }
}

/// Save the cart to the session.
pub(crate) async fn save_cart(session: &Session, cart: &Cart) -> Result<(), AppError> {
    session.insert(CART_SESSION_KEY, cart).await?;
    Ok(())
}

// =============================================================================
// View Types
// =============================================================================

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_rub(0),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    name: item.product.name.clone(),
                    price: format_rub(u64::from(item.product.price)),
                    quantity: item.quantity,
                    line_total: format_rub(item.line_total()),
                    image: item.product.image.clone(),
                })
                .collect(),
            subtotal: format_rub(cart.total()),
            item_count: cart.count(),
        }
    }
}

// =============================================================================
// Templates and Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub quantity: Option<u32>,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart drawer contents (HTMX fragment).
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartItemsTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add item to cart (HTMX).
///
/// Merges into an existing line for the same product. Returns the cart
/// count badge with an `HX-Trigger` so the drawer refreshes and opens;
/// revealing the drawer is the client's decision, not the cart's.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let product = state
        .catalog()
        .find_by_id(ProductId::new(form.product_id))
        .ok_or_else(|| AppError::BadRequest(format!("unknown product id {}", form.product_id)))?
        .clone();

    let mut cart = load_cart(&session).await;
    cart.add(product, form.quantity.unwrap_or(1));
    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.count(),
        },
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate {
        count: cart.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use green_power_core::Catalog;

    #[test]
    fn cart_view_formats_lines() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::default();
        cart.add(
            catalog.find_by_slug("cedar").expect("cedar exists").clone(),
            2,
        );

        let view = CartView::from(&cart);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].price, "1890 ₽");
        assert_eq!(view.items[0].line_total, "3780 ₽");
        assert_eq!(view.subtotal, "3780 ₽");
        assert_eq!(view.item_count, 2);
    }

    #[test]
    fn empty_view_has_zero_subtotal() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "0 ₽");
    }

    #[tokio::test]
    async fn malformed_session_cart_loads_as_empty() {
        use std::sync::Arc;
        use tower_sessions::MemoryStore;

        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session
            .insert(CART_SESSION_KEY, "not a cart")
            .await
            .expect("raw insert succeeds");

        let cart = load_cart(&session).await;
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn cart_round_trips_through_session() {
        use std::sync::Arc;
        use tower_sessions::MemoryStore;

        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        let mut cart = Cart::default();
        cart.add(
            Catalog::builtin()
                .find_by_slug("flax")
                .expect("flax exists")
                .clone(),
            2,
        );

        save_cart(&session, &cart).await.expect("save succeeds");
        let restored = load_cart(&session).await;
        assert_eq!(restored.count(), 2);
    }
}
