//! Product detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use green_power_core::{Product, RELATED_LIMIT, Recipe};

use crate::filters;
use crate::routes::{cart::load_cart, format_rub};
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// Recipe display data for the recipes tab.
#[derive(Clone)]
pub struct RecipeView {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }
}

/// Product detail display data.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: i32,
    pub name: String,
    pub name_en: String,
    pub price: String,
    /// Unformatted price in rubles, for the price-times-quantity button.
    pub price_amount: u32,
    pub category_label: String,
    pub omega: Vec<String>,
    pub tags: Vec<String>,
    pub benefits: Vec<String>,
    pub description: String,
    pub composition: String,
    pub usage: String,
    pub volume: String,
    pub image: String,
    pub recipes: Vec<RecipeView>,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            name_en: product.name_en.clone(),
            price: format_rub(u64::from(product.price)),
            price_amount: product.price,
            category_label: product.category.display_ru().to_string(),
            omega: product.omega.clone(),
            tags: product.tags.clone(),
            benefits: product.benefits.clone(),
            description: product.description.clone(),
            composition: product.composition.clone(),
            usage: product.usage.clone(),
            volume: product.volume.clone(),
            image: product.image.clone(),
            recipes: product.recipes.iter().map(RecipeView::from).collect(),
        }
    }
}

/// Related product card (compact, name and price only).
#[derive(Clone)]
pub struct RelatedProductView {
    pub slug: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for RelatedProductView {
    fn from(product: &Product) -> Self {
        Self {
            slug: product.slug.clone(),
            name: product.name.clone(),
            price: format_rub(u64::from(product.price)),
            image: product.image.clone(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub related_products: Vec<RelatedProductView>,
    pub cart_count: u32,
}

/// "Product not found" page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub cart_count: u32,
}

// =============================================================================
// Handler
// =============================================================================

/// Display product detail page.
///
/// An unknown slug renders a not-found page with a link back to the
/// catalog; it is a recoverable state, not a routing error.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Response {
    let cart = load_cart(&session).await;
    let cart_count = cart.count();

    let Some(product) = state.catalog().find_by_slug(&slug) else {
        tracing::debug!(%slug, "product not found");
        return (
            StatusCode::NOT_FOUND,
            ProductNotFoundTemplate { cart_count },
        )
            .into_response();
    };

    let related_products = state
        .catalog()
        .related_products(product, RELATED_LIMIT)
        .into_iter()
        .map(RelatedProductView::from)
        .collect();

    ProductShowTemplate {
        product: ProductDetailView::from(product),
        related_products,
        cart_count,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use green_power_core::Catalog;

    #[test]
    fn detail_view_formats_price_and_category() {
        let catalog = Catalog::builtin();
        let cedar = catalog.find_by_slug("cedar").expect("cedar exists");
        let view = ProductDetailView::from(cedar);

        assert_eq!(view.price, "1890 ₽");
        assert_eq!(view.category_label, "Ореховое масло");
        assert!(!view.recipes.is_empty());
    }

    #[test]
    fn every_catalog_image_ships_with_the_binary() {
        use std::path::Path;

        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        for product in Catalog::builtin().products() {
            let relative = product
                .image
                .strip_prefix("/static/")
                .expect("image is served from /static");
            assert!(
                static_dir.join(relative).is_file(),
                "missing asset for {}",
                product.slug
            );
        }
    }
}
