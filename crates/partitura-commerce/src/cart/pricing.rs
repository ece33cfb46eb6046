//! Cart pricing breakdown.

use crate::ids::ScoreId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Spanish standard VAT, the rate the storefront charges on digital scores.
pub const STANDARD_VAT_RATE: f64 = 0.21;

/// Complete pricing breakdown for a cart, ready for checkout display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartPricing {
    /// Sum of line totals before tax.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Total due (subtotal + tax).
    pub grand_total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Tax rate implied by this breakdown, as a percentage.
    pub fn tax_rate_percent(&self) -> f64 {
        if self.subtotal.amount_cents == 0 {
            return 0.0;
        }
        (self.tax_total.amount_cents as f64 / self.subtotal.amount_cents as f64) * 100.0
    }

    /// Check whether anything is actually due.
    pub fn is_free_order(&self) -> bool {
        self.grand_total.is_zero()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinePricing {
    /// The score on this line.
    pub score_id: ScoreId,
    /// Score title, for display.
    pub title: String,
    /// Effective unit price (zero for free scores).
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit price x quantity).
    pub line_total: Money,
}
