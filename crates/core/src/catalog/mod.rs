//! Product catalog: immutable product records and derived lookups.
//!
//! The catalog is defined statically (see [`Catalog::builtin`]) and is
//! read-only for the lifetime of the process. Lookups by slug or id return
//! `Option`; a miss is a recoverable state the caller renders, not an error.

mod builtin;

use serde::{Deserialize, Serialize};

/// Type-safe product identifier.
///
/// Newtype over `i32` so product ids cannot be mixed up with quantities or
/// other integers in handler code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Create an id from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Product category: what the oil is pressed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nuts,
    Seeds,
}

impl Category {
    /// Russian display label for the detail-page badge.
    #[must_use]
    pub const fn display_ru(self) -> &'static str {
        match self {
            Self::Nuts => "Ореховое масло",
            Self::Seeds => "Семенное масло",
        }
    }
}

/// A recipe suggestion shown on the product detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    /// Ordered ingredient list.
    pub ingredients: Vec<String>,
    /// Ordered preparation steps.
    pub instructions: Vec<String>,
}

/// A catalog product.
///
/// Serialized with camelCase field names; this is also the JSON shape the
/// session cart persists (`[{product, quantity}]`), kept compatible with the
/// legacy client's local-storage format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// URL-safe identifier used for detail-page lookup.
    pub slug: String,
    pub name: String,
    pub name_en: String,
    /// Whole rubles; prices carry no minor units.
    pub price: u32,
    pub category: Category,
    /// Omega-acid labels, e.g. "Омега-3".
    pub omega: Vec<String>,
    /// Purpose/benefit labels, used for display and filtering.
    pub tags: Vec<String>,
    pub benefits: Vec<String>,
    pub description: String,
    pub composition: String,
    /// Usage instructions; newline-separated paragraphs.
    pub usage: String,
    pub volume: String,
    pub image: String,
    pub recipes: Vec<Recipe>,
}

/// Default size of the related-products block.
pub const RELATED_LIMIT: usize = 4;

/// Immutable, ordered product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its URL slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct omega labels across the catalog, in first-seen order.
    ///
    /// Used to render the omega filter chips.
    #[must_use]
    pub fn omega_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for product in &self.products {
            for label in &product.omega {
                if !labels.contains(&label.as_str()) {
                    labels.push(label);
                }
            }
        }
        labels
    }

    /// Distinct purpose tags across the catalog, in first-seen order.
    #[must_use]
    pub fn tag_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for product in &self.products {
            for label in &product.tags {
                if !labels.contains(&label.as_str()) {
                    labels.push(label);
                }
            }
        }
        labels
    }

    /// Products related to `product`: same category or at least one shared
    /// tag. Excludes the product itself, preserves catalog order, and is
    /// truncated to `limit`. No relevance ranking beyond the match boolean.
    #[must_use]
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| {
                p.id != product.id
                    && (p.category == product.category
                        || p.tags.iter().any(|tag| product.tags.contains(tag)))
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_ids_and_slugs_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        let slugs: HashSet<_> = catalog.products().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn builtin_has_thirteen_products() {
        assert_eq!(Catalog::builtin().len(), 13);
    }

    #[test]
    fn find_by_slug_hit_and_miss() {
        let catalog = Catalog::builtin();
        let flax = catalog.find_by_slug("flax");
        assert!(flax.is_some_and(|p| p.name_en == "Flax Seed Oil"));
        assert!(catalog.find_by_slug("no-such-oil").is_none());
    }

    #[test]
    fn find_by_id_matches_slug_lookup() {
        let catalog = Catalog::builtin();
        let by_slug = catalog.find_by_slug("cedar").expect("cedar exists");
        let by_id = catalog.find_by_id(by_slug.id).expect("id resolves");
        assert_eq!(by_id.slug, "cedar");
    }

    #[test]
    fn related_products_excludes_self_and_respects_limit() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            let related = catalog.related_products(product, RELATED_LIMIT);
            assert!(related.len() <= RELATED_LIMIT);
            assert!(related.iter().all(|p| p.id != product.id));
        }
    }

    #[test]
    fn related_products_share_category_or_tag() {
        let catalog = Catalog::builtin();
        let cedar = catalog.find_by_slug("cedar").expect("cedar exists");
        for related in catalog.related_products(cedar, RELATED_LIMIT) {
            let shares_tag = related.tags.iter().any(|t| cedar.tags.contains(t));
            assert!(related.category == cedar.category || shares_tag);
        }
    }

    #[test]
    fn related_products_preserve_catalog_order() {
        let catalog = Catalog::builtin();
        let flax = catalog.find_by_slug("flax").expect("flax exists");
        let related = catalog.related_products(flax, catalog.len());
        let positions: Vec<usize> = related
            .iter()
            .map(|r| {
                catalog
                    .products()
                    .iter()
                    .position(|p| p.id == r.id)
                    .expect("related product is in catalog")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn labels_are_distinct() {
        let catalog = Catalog::builtin();
        let omega = catalog.omega_labels();
        let tags = catalog.tag_labels();
        assert_eq!(
            omega.len(),
            omega.iter().collect::<HashSet<_>>().len(),
            "omega labels must be distinct"
        );
        assert_eq!(tags.len(), tags.iter().collect::<HashSet<_>>().len());
    }

    #[test]
    fn product_serde_uses_camel_case() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog.products()[0]).expect("serializes");
        assert!(json.get("nameEn").is_some());
        assert!(json.get("name_en").is_none());
    }
}
