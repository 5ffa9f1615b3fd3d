//! Home page route handler: hero, technology story, and the filterable
//! catalog grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{RawQuery, State},
    response::IntoResponse,
};
use tower_sessions::Session;
use tracing::instrument;

use green_power_core::{CategoryFilter, FilterCriteria, PriceBucket, Product, filter};

use crate::filters;
use crate::routes::{cart::load_cart, format_rub};
use crate::state::AppState;

// =============================================================================
// Static Content (marketing sections of the landing page)
// =============================================================================

/// A benefit card under the hero block.
#[derive(Clone)]
pub struct BenefitCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A step in the production technology section.
#[derive(Clone)]
pub struct TechnologyStep {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// Benefit cards shown under the hero.
fn benefit_cards() -> Vec<BenefitCard> {
    vec![
        BenefitCard {
            icon: "⚡",
            title: "Технология активации",
            desc: "Вымачивание, озонирование и сушка перед отжимом",
        },
        BenefitCard {
            icon: "🌱",
            title: "100% натуральный состав",
            desc: "Без консервантов, красителей и химических добавок",
        },
        BenefitCard {
            icon: "💚",
            title: "Высокие Омега-кислоты",
            desc: "Омега-3, 6, 9 для здоровья и иммунитета",
        },
    ]
}

/// The four production steps.
fn technology_steps() -> Vec<TechnologyStep> {
    vec![
        TechnologyStep {
            step: "01",
            title: "Вымачивание",
            desc: "Семечки и орехи насыщаются влагой, запускается процесс пробуждения",
        },
        TechnologyStep {
            step: "02",
            title: "Озонирование",
            desc: "Обработка озоном для безопасности и лучшего усвоения",
        },
        TechnologyStep {
            step: "03",
            title: "Сушка",
            desc: "Бережная сушка при низких температурах сохраняет все витамины",
        },
        TechnologyStep {
            step: "04",
            title: "Холодный отжим",
            desc: "Сыродавленное масло без нагрева — все полезные свойства остаются",
        },
    ]
}

// =============================================================================
// Views
// =============================================================================

/// Product card display data for the catalog grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub name_en: String,
    pub price: String,
    pub omega_line: String,
    pub benefits: Vec<String>,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            slug: product.slug.clone(),
            name: product.name.clone(),
            name_en: product.name_en.clone(),
            price: format_rub(u64::from(product.price)),
            omega_line: product.omega.join(", "),
            benefits: product.benefits.clone(),
            image: product.image.clone(),
        }
    }
}

// =============================================================================
// Query Parsing
// =============================================================================

/// Parse filter criteria from the raw query string.
///
/// The filter form submits repeated `omega` and `tag` keys, which
/// `serde_urlencoded` maps cannot express, so the query is walked directly.
/// Unknown keys and values are ignored.
fn parse_criteria(query: &str) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "category" => {
                criteria.category = match value.as_ref() {
                    "nuts" => CategoryFilter::Nuts,
                    "seeds" => CategoryFilter::Seeds,
                    _ => CategoryFilter::All,
                };
            }
            "omega" if !value.is_empty() => criteria.omega.push(value.into_owned()),
            "tag" if !value.is_empty() => criteria.tags.push(value.into_owned()),
            "price" => {
                criteria.price = match value.as_ref() {
                    "low" => PriceBucket::Low,
                    "medium" => PriceBucket::Medium,
                    "high" => PriceBucket::High,
                    _ => PriceBucket::All,
                };
            }
            _ => {}
        }
    }

    criteria
}

// =============================================================================
// Template and Handler
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Benefit cards under the hero.
    pub benefit_cards: Vec<BenefitCard>,
    /// Production technology steps.
    pub technology_steps: Vec<TechnologyStep>,
    /// Filtered catalog grid.
    pub products: Vec<ProductCardView>,
    /// All omega labels for the filter chips.
    pub omega_labels: Vec<String>,
    /// All purpose tags for the filter chips.
    pub tag_labels: Vec<String>,
    /// Selected category as a form value ("all", "nuts", "seeds").
    pub category: String,
    /// Selected omega labels.
    pub selected_omega: Vec<String>,
    /// Selected purpose tags.
    pub selected_tags: Vec<String>,
    /// Selected price bucket as a form value.
    pub price: String,
    /// Whether any filter narrows the catalog (drives the empty state).
    pub filters_active: bool,
    /// Cart count for the nav badge.
    pub cart_count: u32,
}

/// Display the home page with the filtered catalog.
#[instrument(skip(state, session))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let criteria = parse_criteria(query.as_deref().unwrap_or_default());
    let products = filter(state.catalog(), &criteria)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    let cart = load_cart(&session).await;
    let filters_active = criteria.is_active();

    let category = match criteria.category {
        CategoryFilter::All => "all",
        CategoryFilter::Nuts => "nuts",
        CategoryFilter::Seeds => "seeds",
    };
    let price = match criteria.price {
        PriceBucket::All => "all",
        PriceBucket::Low => "low",
        PriceBucket::Medium => "medium",
        PriceBucket::High => "high",
    };

    HomeTemplate {
        benefit_cards: benefit_cards(),
        technology_steps: technology_steps(),
        products,
        omega_labels: state
            .catalog()
            .omega_labels()
            .into_iter()
            .map(String::from)
            .collect(),
        tag_labels: state
            .catalog()
            .tag_labels()
            .into_iter()
            .map(String::from)
            .collect(),
        category: category.to_string(),
        selected_omega: criteria.omega,
        selected_tags: criteria.tags,
        price: price.to_string(),
        filters_active,
        cart_count: cart.count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_query_is_inactive() {
        let criteria = parse_criteria("");
        assert_eq!(criteria, FilterCriteria::default());
        assert!(!criteria.is_active());
    }

    #[test]
    fn parse_repeated_keys_collects_sets() {
        let criteria =
            parse_criteria("category=seeds&omega=%D0%9E%D0%BC%D0%B5%D0%B3%D0%B0-3&omega=X&tag=Y");
        assert_eq!(criteria.category, CategoryFilter::Seeds);
        assert_eq!(criteria.omega, vec!["Омега-3".to_string(), "X".to_string()]);
        assert_eq!(criteria.tags, vec!["Y".to_string()]);
    }

    #[test]
    fn parse_price_buckets() {
        assert_eq!(parse_criteria("price=low").price, PriceBucket::Low);
        assert_eq!(parse_criteria("price=medium").price, PriceBucket::Medium);
        assert_eq!(parse_criteria("price=high").price, PriceBucket::High);
        assert_eq!(parse_criteria("price=bogus").price, PriceBucket::All);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let criteria = parse_criteria("utm_source=ad&category=nuts");
        assert_eq!(criteria.category, CategoryFilter::Nuts);
        assert!(criteria.omega.is_empty());
    }
}
