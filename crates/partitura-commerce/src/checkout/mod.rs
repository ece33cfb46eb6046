//! Checkout module.
//!
//! The three-step checkout the storefront runs: contact information,
//! payment, confirmation. Completing a checkout snapshots the cart into a
//! purchase record and empties it. Payment capture itself happens outside
//! this crate; we only track the step gating and the resulting record.

mod flow;
mod purchase;

pub use flow::{CheckoutFlow, CheckoutStep};
pub use purchase::{Purchase, PurchaseItem, PurchaseStatus};
