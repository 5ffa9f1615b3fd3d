//! Green Power Core - storefront domain logic.
//!
//! This crate holds the logical core of the Green Power cold-pressed-oil
//! storefront, independent of any rendering or transport layer:
//!
//! - [`catalog`] - the static product catalog and its lookups
//! - [`filter`] - the multi-criteria product filter
//! - [`cart`] - the in-memory shopping cart
//! - [`order`] - order drafts, validation policies, and submission
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no persistence. All state transitions are synchronous and return new or
//! mutated values that the caller owns, which keeps every operation unit
//! testable without a web server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod order;

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, Category, Product, ProductId, RELATED_LIMIT, Recipe};
pub use filter::{CategoryFilter, FilterCriteria, PriceBucket, filter};
pub use order::{
    DeliveryMethod, OrderAck, OrderDraft, OrderError, PaymentMethod, Permissive, RequiredFields,
    ValidationPolicy, submit,
};
