//! Storefront domain types and logic for the Partitura sheet-music shop.
//!
//! This crate is the pure, in-memory core behind the storefront:
//!
//! - **Catalog**: scores, composers, categories
//! - **Search**: conjunctive filtering, sorting, pagination
//! - **Cart**: per-session line items and tax-inclusive pricing
//! - **Checkout**: step gating and purchase records
//! - **Session**: session-scoped cart/favorites context with change events
//!
//! There is no I/O here. Callers fetch score records from the catalog API,
//! hand them to [`search::query`] to render listings, and drive a
//! [`session::Session`] with cart mutations until checkout completes.
//!
//! # Example
//!
//! ```rust,ignore
//! use partitura_commerce::prelude::*;
//!
//! let spec = FilterSpec::new()
//!     .with_search("agur")
//!     .with_sort(SortKey::Popular);
//! let hits = search::query(&scores, &spec);
//!
//! let mut session = Session::new();
//! session.add_to_cart(&hits[0]);
//!
//! let pricing = session.cart().pricing(STANDARD_VAT_RATE);
//! println!("Total due: {}", pricing.grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod favorites;
pub mod search;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, ChoirType, Composer, Difficulty, Score, Tag};

    // Search
    pub use crate::search::{self, FilterSpec, Pagination, ScorePage, SortKey};

    // Cart
    pub use crate::cart::{
        Cart, CartEvent, CartLine, CartPricing, LinePricing, STANDARD_VAT_RATE,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, Purchase, PurchaseItem, PurchaseStatus,
    };

    // Session
    pub use crate::favorites::Favorites;
    pub use crate::session::Session;
}
