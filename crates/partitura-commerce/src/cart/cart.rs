//! Cart and cart line types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::Score;
use crate::ids::ScoreId;
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Quantity cap per line. Mutations clamp to this rather than erroring.
pub const MAX_QUANTITY_PER_LINE: i64 = 999;

/// A change to the cart, for UI listeners (e.g., opening the cart drawer
/// after an add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A score was added; `quantity` is the line's new quantity.
    ItemAdded { score_id: ScoreId, quantity: i64 },
    /// A line was removed.
    ItemRemoved { score_id: ScoreId },
    /// A line's quantity was set explicitly.
    QuantityChanged { score_id: ScoreId, quantity: i64 },
    /// All lines were removed.
    Cleared,
}

/// One (score, quantity) entry in the cart.
///
/// Display fields are denormalized from the score at add time so the cart
/// can render without re-fetching the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The score being purchased.
    pub score_id: ScoreId,
    /// Score title.
    pub title: String,
    /// Stored unit price.
    pub unit_price: Money,
    /// Whether the score is free. A free line always totals zero.
    pub is_free: bool,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    fn new(score: &Score) -> Self {
        Self {
            score_id: score.id.clone(),
            title: score.title.clone(),
            unit_price: score.price_money(),
            is_free: score.is_free,
            quantity: 1,
        }
    }

    /// Unit price as charged: zero when the score is free.
    pub fn effective_unit_price(&self) -> Money {
        if self.is_free {
            Money::zero(self.unit_price.currency)
        } else {
            self.unit_price
        }
    }

    /// Line total (effective unit price x quantity). Saturates on overflow
    /// so a degenerate price can never shrink the total.
    pub fn line_total(&self) -> Money {
        self.effective_unit_price().saturating_multiply(self.quantity)
    }
}

/// A session cart.
///
/// Invariants: at most one line per score id, and every line has quantity
/// >= 1. No operation can leave a line at quantity zero or below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            lines: Vec::new(),
            currency: Currency::EUR,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add one unit of a score.
    ///
    /// An existing line gains quantity 1 (clamped at
    /// [`MAX_QUANTITY_PER_LINE`]); otherwise a new line is inserted with
    /// quantity 1.
    pub fn add(&mut self, score: &Score) -> CartEvent {
        let quantity = if let Some(line) = self.lines.iter_mut().find(|l| l.score_id == score.id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_QUANTITY_PER_LINE);
            line.quantity
        } else {
            self.lines.push(CartLine::new(score));
            1
        };
        self.updated_at = Utc::now();
        debug!(score_id = %score.id, quantity, "cart add");
        CartEvent::ItemAdded {
            score_id: score.id.clone(),
            quantity,
        }
    }

    /// Remove a line. Returns false (not an error) when no line matches.
    pub fn remove(&mut self, score_id: &ScoreId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.score_id != score_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = Utc::now();
            debug!(score_id = %score_id, "cart remove");
        }
        removed
    }

    /// Set a line's quantity exactly.
    ///
    /// A quantity of zero or less removes the line. Quantities above the cap
    /// are clamped. Returns false when no line matches.
    pub fn set_quantity(&mut self, score_id: &ScoreId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(score_id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.score_id == score_id) {
            line.quantity = quantity.min(MAX_QUANTITY_PER_LINE);
            self.updated_at = Utc::now();
            debug!(score_id = %score_id, quantity = line.quantity, "cart set quantity");
            true
        } else {
            false
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.updated_at = Utc::now();
        debug!("cart cleared");
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct scores in the cart.
    pub fn unique_items(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a score, if present.
    pub fn line(&self, score_id: &ScoreId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.score_id == score_id)
    }

    /// Sum of line totals, saturating on overflow. Free scores contribute
    /// zero regardless of their stored price.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc.saturating_add(&line.line_total())
            })
    }

    /// Tax on the subtotal at the given rate (e.g., 0.21 for 21% VAT).
    pub fn tax(&self, rate: f64) -> Money {
        self.subtotal().multiply_decimal(rate)
    }

    /// Total due: subtotal plus tax.
    pub fn total(&self, rate: f64) -> Money {
        self.subtotal() + self.tax(rate)
    }

    /// Full pricing breakdown at the given tax rate.
    pub fn pricing(&self, rate: f64) -> CartPricing {
        let lines: Vec<LinePricing> = self
            .lines
            .iter()
            .map(|line| LinePricing {
                score_id: line.score_id.clone(),
                title: line.title.clone(),
                unit_price: line.effective_unit_price(),
                quantity: line.quantity,
                line_total: line.line_total(),
            })
            .collect();

        let subtotal = self.subtotal();
        let tax_total = self.tax(rate);
        CartPricing {
            subtotal,
            tax_total,
            grand_total: subtotal + tax_total,
            lines,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
