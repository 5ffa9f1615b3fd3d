//! Checkout route handlers.
//!
//! There is no order backend: a confirmed submission generates a local
//! acknowledgement, clears the session cart, and renders a confirmation
//! page. The validation policy comes from configuration (see
//! [`crate::config::CheckoutValidation`]).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use green_power_core::{OrderDraft, OrderError, submit as submit_order};

use crate::error::AppError;
use crate::filters;
use crate::routes::cart::{CartView, load_cart, save_cart};
use crate::state::AppState;

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutFormTemplate {
    pub cart: CartView,
    pub draft: OrderDraft,
    /// Labels of fields the validation policy rejected.
    pub errors: Vec<&'static str>,
    pub cart_count: u32,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    /// Short order reference shown to the customer.
    pub reference: String,
    pub total: String,
    pub item_count: u32,
    pub cart_count: u32,
}

/// Display the checkout form.
///
/// Redirects home when the cart is empty; there is nothing to order.
#[instrument(skip(session))]
pub async fn form(session: Session) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/").into_response();
    }

    CheckoutFormTemplate {
        cart_count: cart.count(),
        cart: CartView::from(&cart),
        draft: OrderDraft::default(),
        errors: Vec::new(),
    }
    .into_response()
}

/// Submit the order.
///
/// On success the session cart is cleared and the confirmation page is
/// rendered with a locally generated order reference. A draft the policy
/// rejects re-renders the form with the offending fields marked.
#[instrument(skip(state, session, draft))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(draft): Form<OrderDraft>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await;

    match submit_order(&draft, &cart, state.validation()) {
        Ok(ack) => {
            cart.clear();
            save_cart(&session, &cart).await?;

            tracing::info!(
                reference = %ack.reference,
                items = ack.item_count,
                total = ack.total,
                "order confirmed"
            );

            Ok(ConfirmationTemplate {
                reference: short_reference(&ack.reference.to_string()),
                total: crate::routes::format_rub(ack.total),
                item_count: ack.item_count,
                cart_count: 0,
            }
            .into_response())
        }
        Err(OrderError::EmptyCart) => Ok(Redirect::to("/").into_response()),
        Err(OrderError::MissingFields(fields)) => {
            tracing::debug!(?fields, "order draft rejected");
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutFormTemplate {
                    cart_count: cart.count(),
                    cart: CartView::from(&cart),
                    draft,
                    errors: fields.iter().map(|f| field_label(f)).collect(),
                },
            )
                .into_response())
        }
    }
}

/// Map a draft field identifier to the label shown in the error summary.
fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Имя",
        "phone" => "Телефон",
        "address" => "Адрес доставки",
        _ => "Поле",
    }
}

/// Shorten a UUID reference for display: first 8 hex chars, uppercase.
fn short_reference(reference: &str) -> String {
    reference
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reference_takes_eight_hex_chars() {
        assert_eq!(
            short_reference("67e55044-10b1-426f-9247-bb680e5fe0c8"),
            "67E55044"
        );
    }

    #[test]
    fn short_reference_skips_hyphens() {
        assert_eq!(short_reference("ab-cd-ef-12-34"), "ABCDEF12");
    }

    #[test]
    fn valid_draft_yields_acknowledgement() {
        use green_power_core::{Cart, Catalog, RequiredFields};

        let mut cart = Cart::default();
        cart.add(
            Catalog::builtin()
                .find_by_slug("cedar")
                .expect("cedar exists")
                .clone(),
            1,
        );
        let draft = OrderDraft {
            name: "Анна".into(),
            phone: "+7 900 000-00-00".into(),
            address: "Москва, ул. Лесная, 5".into(),
            ..OrderDraft::default()
        };

        let ack = submit_order(&draft, &cart, &RequiredFields).expect("valid order");
        assert_eq!(ack.item_count, 1);
        assert_eq!(ack.total, 1890);
    }

    #[test]
    fn field_labels_are_localized() {
        assert_eq!(field_label("name"), "Имя");
        assert_eq!(field_label("phone"), "Телефон");
        assert_eq!(field_label("address"), "Адрес доставки");
    }
}
