//! Store error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Catalog queries and cart mutations deliberately never fail: unknown sort
/// keys fall back to the default, removing an absent line is a no-op, and
/// out-of-range quantities are clamped. Errors are reserved for checkout
/// gating.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Checkout attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout step transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}
