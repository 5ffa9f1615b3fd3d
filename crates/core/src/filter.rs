//! Multi-criteria product filter.
//!
//! [`filter`] is a pure function over the catalog: it never mutates its
//! inputs, preserves catalog order, and is idempotent for fixed criteria.
//! Rules combine conjunctively (a product must pass every active rule);
//! within the omega and tag sets a single shared label is enough.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, Product};

/// Highest price (in rubles) still counted as the low bucket.
pub const LOW_PRICE_MAX: u32 = 1000;
/// Highest price (in rubles) still counted as the medium bucket.
pub const MEDIUM_PRICE_MAX: u32 = 1500;

/// Category criterion; `All` passes everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Nuts,
    Seeds,
}

impl CategoryFilter {
    const fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Nuts => matches!(category, Category::Nuts),
            Self::Seeds => matches!(category, Category::Seeds),
        }
    }
}

/// Price bucket with mutually exclusive boundaries.
///
/// The legacy catalog page counted 1000 and 1500 into two buckets each;
/// here the boundaries are explicit: `Low` <= 1000 < `Medium` <= 1500 < `High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriceBucket {
    const fn matches(self, price: u32) -> bool {
        match self {
            Self::All => true,
            Self::Low => price <= LOW_PRICE_MAX,
            Self::Medium => price > LOW_PRICE_MAX && price <= MEDIUM_PRICE_MAX,
            Self::High => price > MEDIUM_PRICE_MAX,
        }
    }
}

/// Transient filter selections made in the catalog UI. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    /// Selected omega labels; empty means "any".
    pub omega: Vec<String>,
    /// Selected purpose tags; empty means "any".
    pub tags: Vec<String>,
    pub price: PriceBucket,
}

impl FilterCriteria {
    /// True when any rule narrows the catalog.
    ///
    /// Lets the caller tell an empty result apart from "no filters active"
    /// when deciding whether to show the empty-state message.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All
            || !self.omega.is_empty()
            || !self.tags.is_empty()
            || self.price != PriceBucket::All
    }
}

/// True when the selection is empty or shares at least one label.
fn intersects(selected: &[String], labels: &[String]) -> bool {
    selected.is_empty() || labels.iter().any(|label| selected.contains(label))
}

/// Apply `criteria` to the catalog, preserving catalog order.
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Product> {
    catalog
        .products()
        .iter()
        .filter(|p| {
            criteria.category.matches(p.category)
                && intersects(&criteria.omega, &p.omega)
                && intersects(&criteria.tags, &p.tags)
                && criteria.price.matches(p.price)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn inactive_criteria_return_full_catalog_in_order() {
        let catalog = catalog();
        let criteria = FilterCriteria::default();
        assert!(!criteria.is_active());

        let result = filter(&catalog, &criteria);
        assert_eq!(result.len(), catalog.len());
        for (got, want) in result.iter().zip(catalog.products()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn every_product_passes_its_own_category() {
        let catalog = catalog();
        for product in catalog.products() {
            let criteria = FilterCriteria {
                category: match product.category {
                    crate::catalog::Category::Nuts => CategoryFilter::Nuts,
                    crate::catalog::Category::Seeds => CategoryFilter::Seeds,
                },
                ..FilterCriteria::default()
            };
            assert!(
                filter(&catalog, &criteria)
                    .iter()
                    .any(|p| p.id == product.id)
            );
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Seeds,
            omega: vec!["Омега-3".into()],
            ..FilterCriteria::default()
        };

        let once = filter(&catalog, &criteria);
        let narrowed = Catalog::new(once.iter().map(|p| (*p).clone()).collect());
        let twice = filter(&narrowed, &criteria);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn omega_set_uses_or_semantics() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            omega: vec!["Омега-3".into(), "Омега-9".into()],
            ..FilterCriteria::default()
        };
        for product in filter(&catalog, &criteria) {
            assert!(
                product.omega.iter().any(|o| o == "Омега-3" || o == "Омега-9"),
                "{} passed without a selected omega label",
                product.slug
            );
        }
    }

    #[test]
    fn tag_filter_intersects() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            tags: vec!["Печень".into()],
            ..FilterCriteria::default()
        };
        let result = filter(&catalog, &criteria);
        assert!(!result.is_empty());
        assert!(
            result
                .iter()
                .all(|p| p.tags.iter().any(|t| t == "Печень"))
        );
    }

    #[test]
    fn price_bucket_boundaries_are_exclusive() {
        assert!(PriceBucket::Low.matches(1000));
        assert!(!PriceBucket::Medium.matches(1000));
        assert!(PriceBucket::Medium.matches(1500));
        assert!(!PriceBucket::High.matches(1500));
        assert!(PriceBucket::High.matches(1501));
        assert!(!PriceBucket::Low.matches(1001));
    }

    #[test]
    fn conjunctive_rules_can_produce_empty_result() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Nuts,
            tags: vec!["Мужское здоровье".into()],
            price: PriceBucket::Low,
            ..FilterCriteria::default()
        };
        assert!(criteria.is_active());
        assert!(filter(&catalog, &criteria).is_empty());
    }

    #[test]
    fn nuts_filter_drops_seed_oils() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Nuts,
            ..FilterCriteria::default()
        };
        let result = filter(&catalog, &criteria);
        assert!(!result.is_empty());
        assert!(
            result
                .iter()
                .all(|p| matches!(p.category, crate::catalog::Category::Nuts))
        );
    }
}
