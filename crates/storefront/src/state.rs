//! Application state shared across handlers.

use std::sync::Arc;

use green_power_core::{Catalog, Permissive, RequiredFields, ValidationPolicy};

use crate::config::{CheckoutValidation, StorefrontConfig};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static product catalog, and the checkout validation
/// policy.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    validation: Box<dyn ValidationPolicy>,
}

impl AppState {
    /// Create a new application state with the built-in catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let validation: Box<dyn ValidationPolicy> = match config.checkout_validation {
            CheckoutValidation::Required => Box::new(RequiredFields),
            CheckoutValidation::Permissive => Box::new(Permissive),
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                validation,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the configured checkout validation policy.
    #[must_use]
    pub fn validation(&self) -> &dyn ValidationPolicy {
        self.inner.validation.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use green_power_core::OrderDraft;

    #[test]
    fn permissive_config_installs_permissive_policy() {
        let state = AppState::new(StorefrontConfig {
            checkout_validation: CheckoutValidation::Permissive,
            ..StorefrontConfig::default()
        });
        assert!(
            state
                .validation()
                .missing_fields(&OrderDraft::default())
                .is_empty()
        );
    }

    #[test]
    fn required_config_rejects_blank_draft() {
        let state = AppState::new(StorefrontConfig::default());
        assert!(
            !state
                .validation()
                .missing_fields(&OrderDraft::default())
                .is_empty()
        );
    }
}
