//! Shopping cart module.
//!
//! The cart is a per-session ledger of (score, quantity) lines with derived
//! money totals. It holds no I/O and no persistence; checkout completion or
//! an explicit user action clears it.

mod cart;
mod pricing;

pub use cart::{Cart, CartEvent, CartLine, MAX_QUANTITY_PER_LINE};
pub use pricing::{CartPricing, LinePricing, STANDARD_VAT_RATE};
