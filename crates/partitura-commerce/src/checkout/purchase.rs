//! Purchase records.

use crate::cart::Cart;
use crate::error::StoreError;
use crate::ids::{PurchaseId, PurchaseItemId, ScoreId, UserId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Purchase status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    /// Payment initiated, awaiting confirmation.
    #[default]
    Pending,
    /// Payment captured; downloads unlocked.
    Completed,
    /// Payment failed.
    Failed,
    /// Purchase refunded.
    Refunded,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Completed => "completed",
            PurchaseStatus::Failed => "failed",
            PurchaseStatus::Refunded => "refunded",
        }
    }

    /// Check if the purchase is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PurchaseStatus::Completed | PurchaseStatus::Failed | PurchaseStatus::Refunded
        )
    }
}

/// One score line in a purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    /// Unique item identifier.
    pub id: PurchaseItemId,
    /// The score purchased.
    pub score_id: ScoreId,
    /// Score title at purchase time.
    pub title: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price charged (zero for free scores).
    pub unit_price: Money,
    /// Line total.
    pub total_price: Money,
}

/// A completed (or in-flight) order for digital scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Unique purchase identifier.
    pub id: PurchaseId,
    /// Human-readable order number.
    pub order_number: String,
    /// The buyer, when authenticated.
    pub user_id: Option<UserId>,
    /// Purchased items.
    pub items: Vec<PurchaseItem>,
    /// Sum of line totals before tax.
    pub subtotal: Money,
    /// Tax charged.
    pub tax_total: Money,
    /// Total charged.
    pub total_amount: Money,
    /// Order currency.
    pub currency: Currency,
    /// Purchase status.
    pub status: PurchaseStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, once payment is captured.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Purchase {
    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("PED-{}", ts)
    }

    /// Snapshot a cart into a completed purchase at the given tax rate.
    ///
    /// Fails on an empty cart; pricing uses effective unit prices, so free
    /// scores contribute nothing to the totals.
    pub fn from_cart(
        cart: &Cart,
        user_id: Option<UserId>,
        tax_rate: f64,
    ) -> Result<Self, StoreError> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let pricing = cart.pricing(tax_rate);
        let items = pricing
            .lines
            .iter()
            .map(|line| PurchaseItem {
                id: PurchaseItemId::generate(),
                score_id: line.score_id.clone(),
                title: line.title.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                total_price: line.line_total,
            })
            .collect();

        let now = Utc::now();
        Ok(Self {
            id: PurchaseId::generate(),
            order_number: Self::generate_order_number(),
            user_id,
            items,
            subtotal: pricing.subtotal,
            tax_total: pricing.tax_total,
            total_amount: pricing.grand_total,
            currency: cart.currency,
            status: PurchaseStatus::Completed,
            created_at: now,
            completed_at: Some(now),
        })
    }

    /// Total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
