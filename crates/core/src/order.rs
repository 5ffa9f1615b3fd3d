//! Order drafts, validation policies, and submission.
//!
//! There is no order backend: submission performs no I/O and always
//! succeeds once the configured [`ValidationPolicy`] accepts the draft and
//! the cart is non-empty. The caller clears the cart and resets the draft
//! after a successful acknowledgement.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::cart::Cart;

/// How the order should reach the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    #[default]
    Courier,
    Pickup,
    Post,
}

impl DeliveryMethod {
    /// Stable form value, also used by templates to mark the selection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Courier => "courier",
            Self::Pickup => "pickup",
            Self::Post => "post",
        }
    }

    /// Russian display label.
    #[must_use]
    pub const fn display_ru(self) -> &'static str {
        match self {
            Self::Courier => "Курьером",
            Self::Pickup => "Самовывоз",
            Self::Post => "Почтой",
        }
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl PaymentMethod {
    /// Stable form value, also used by templates to mark the selection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }

    /// Russian display label.
    #[must_use]
    pub const fn display_ru(self) -> &'static str {
        match self {
            Self::Card => "Картой онлайн",
            Self::Cash => "Наличными при получении",
        }
    }
}

/// Transient checkout form state. Cleared on submission or cancellation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub delivery: DeliveryMethod,
    #[serde(default)]
    pub payment: PaymentMethod,
}

/// Pluggable draft validation.
///
/// The submission contract accepts a policy but does not hard-code one:
/// the storefront picks the policy from configuration.
pub trait ValidationPolicy: Send + Sync {
    /// Names of fields that block submission; empty means the draft passes.
    fn missing_fields(&self, draft: &OrderDraft) -> Vec<&'static str>;
}

/// Require the fields a delivery cannot do without.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl ValidationPolicy for RequiredFields {
    fn missing_fields(&self, draft: &OrderDraft) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if draft.name.trim().is_empty() {
            missing.push("name");
        }
        if draft.phone.trim().is_empty() {
            missing.push("phone");
        }
        if draft.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }
}

/// Accept any draft, matching the legacy checkout that only marked fields
/// required visually.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl ValidationPolicy for Permissive {
    fn missing_fields(&self, _draft: &OrderDraft) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Why a submission was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Local acknowledgement of a confirmed order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderAck {
    /// Locally generated order reference; no backend assigns one.
    pub reference: Uuid,
    pub item_count: u32,
    pub total: u64,
}

/// Submit a draft against the current cart contents.
///
/// # Errors
///
/// Returns [`OrderError::EmptyCart`] for an empty cart and
/// [`OrderError::MissingFields`] when the policy rejects the draft.
pub fn submit(
    draft: &OrderDraft,
    cart: &Cart,
    policy: &dyn ValidationPolicy,
) -> Result<OrderAck, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let missing = policy.missing_fields(draft);
    if !missing.is_empty() {
        return Err(OrderError::MissingFields(missing));
    }

    Ok(OrderAck {
        reference: Uuid::new_v4(),
        item_count: cart.count(),
        total: cart.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn cart_with_flax() -> Cart {
        let mut cart = Cart::default();
        let flax = Catalog::builtin()
            .find_by_slug("flax")
            .expect("flax exists")
            .clone();
        cart.add(flax, 2);
        cart
    }

    fn filled_draft() -> OrderDraft {
        OrderDraft {
            name: "Анна".into(),
            phone: "+7 900 000-00-00".into(),
            address: "Москва, ул. Лесная, 5".into(),
            ..OrderDraft::default()
        }
    }

    #[test]
    fn submit_acknowledges_cart_totals() {
        let cart = cart_with_flax();
        let ack = submit(&filled_draft(), &cart, &RequiredFields).expect("valid order");
        assert_eq!(ack.item_count, 2);
        assert_eq!(ack.total, 2 * 890);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let err = submit(&filled_draft(), &Cart::default(), &RequiredFields);
        assert_eq!(err.unwrap_err(), OrderError::EmptyCart);
    }

    #[test]
    fn required_fields_policy_names_blank_fields() {
        let draft = OrderDraft {
            name: "  ".into(),
            ..OrderDraft::default()
        };
        let err = submit(&draft, &cart_with_flax(), &RequiredFields).unwrap_err();
        assert_eq!(
            err,
            OrderError::MissingFields(vec!["name", "phone", "address"])
        );
    }

    #[test]
    fn permissive_policy_accepts_blank_draft() {
        let ack = submit(&OrderDraft::default(), &cart_with_flax(), &Permissive);
        assert!(ack.is_ok());
    }

    #[test]
    fn method_form_values_round_trip() {
        for method in [
            DeliveryMethod::Courier,
            DeliveryMethod::Pickup,
            DeliveryMethod::Post,
        ] {
            let json = format!("\"{}\"", method.as_str());
            let parsed: DeliveryMethod = serde_json::from_str(&json).expect("parses");
            assert_eq!(parsed, method);
        }
        for method in [PaymentMethod::Card, PaymentMethod::Cash] {
            let json = format!("\"{}\"", method.as_str());
            let parsed: PaymentMethod = serde_json::from_str(&json).expect("parses");
            assert_eq!(parsed, method);
        }
    }
}
