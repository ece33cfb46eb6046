//! Checkout flow state machine.

use crate::checkout::Purchase;
use crate::error::StoreError;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Contact information.
    #[default]
    Information,
    /// Payment details.
    Payment,
    /// Checkout complete.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "information",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Information => "Information",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Information => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

/// Checkout flow state for one in-progress order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Steps already completed.
    pub completed_steps: Vec<CheckoutStep>,
    /// Customer email.
    pub email: Option<String>,
    /// Customer first name.
    pub first_name: Option<String>,
    /// Customer last name.
    pub last_name: Option<String>,
    /// Payment method identifier/token from the payment provider.
    pub payment_token: Option<String>,
}

impl CheckoutFlow {
    /// Start a new checkout at the information step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the customer's contact details.
    pub fn set_contact(
        &mut self,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) {
        self.email = Some(email.into());
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
    }

    /// Record the payment token from the provider.
    pub fn set_payment_token(&mut self, token: impl Into<String>) {
        self.payment_token = Some(token.into());
    }

    fn has_contact(&self) -> bool {
        let filled = |field: &Option<String>| {
            field
                .as_deref()
                .map(|s| !s.trim().is_empty())
                .unwrap_or(false)
        };
        filled(&self.email) && filled(&self.first_name) && filled(&self.last_name)
    }

    /// Check whether checkout can advance to a step.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Information => true,
            CheckoutStep::Payment => self.has_contact(),
            CheckoutStep::Complete => self.has_contact() && self.payment_token.is_some(),
        }
    }

    /// Name the fields still missing before a step can be entered.
    pub fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if step == CheckoutStep::Information {
            return missing;
        }

        if self.email.as_deref().map(str::trim).unwrap_or("").is_empty() {
            missing.push("email");
        }
        if self
            .first_name
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty()
        {
            missing.push("first name");
        }
        if self
            .last_name
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty()
        {
            missing.push("last name");
        }
        if step == CheckoutStep::Complete && self.payment_token.is_none() {
            missing.push("payment method");
        }
        missing
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, StoreError> {
        let next = match self.step {
            CheckoutStep::Information => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Complete,
            CheckoutStep::Complete => {
                return Err(StoreError::InvalidCheckoutTransition {
                    from: "complete".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(StoreError::CheckoutIncomplete(
                self.missing_for_step(next).join(", "),
            ));
        }

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = next;
        debug!(step = next.as_str(), "checkout advanced");
        Ok(next)
    }

    /// Complete the checkout: snapshot the session's cart into a purchase,
    /// mark the flow complete, and empty the cart.
    ///
    /// Fails when the cart is empty or required details are missing; the
    /// cart is left untouched on failure.
    pub fn complete(
        &mut self,
        session: &mut Session,
        tax_rate: f64,
    ) -> Result<Purchase, StoreError> {
        if session.cart().is_empty() {
            return Err(StoreError::EmptyCart);
        }
        if !self.can_advance_to(CheckoutStep::Complete) {
            return Err(StoreError::CheckoutIncomplete(
                self.missing_for_step(CheckoutStep::Complete).join(", "),
            ));
        }

        let purchase = Purchase::from_cart(session.cart(), session.user_id.clone(), tax_rate)?;

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = CheckoutStep::Complete;
        session.clear_cart();

        debug!(
            order_number = %purchase.order_number,
            total = %purchase.total_amount,
            "checkout completed"
        );
        Ok(purchase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::STANDARD_VAT_RATE;
    use crate::checkout::PurchaseStatus;
    use crate::testutil::sample_score;

    #[test]
    fn test_cannot_reach_payment_without_contact() {
        let mut flow = CheckoutFlow::new();
        let err = flow.advance().unwrap_err();
        assert!(matches!(err, StoreError::CheckoutIncomplete(_)));

        flow.set_contact("maite@example.com", "Maite", "Etxeberria");
        assert_eq!(flow.advance().unwrap(), CheckoutStep::Payment);
        assert_eq!(flow.completed_steps, vec![CheckoutStep::Information]);
    }

    #[test]
    fn test_blank_contact_does_not_count() {
        let mut flow = CheckoutFlow::new();
        flow.set_contact("  ", "Maite", "Etxeberria");
        assert!(!flow.can_advance_to(CheckoutStep::Payment));
        assert_eq!(flow.missing_for_step(CheckoutStep::Payment), vec!["email"]);
    }

    #[test]
    fn test_complete_snapshots_and_clears_cart() {
        let mut session = Session::new();
        session.add_to_cart(&sample_score("s1", "Agur Jaunak", 10.0, false));
        session.add_to_cart(&sample_score("s1", "Agur Jaunak", 10.0, false));

        let mut flow = CheckoutFlow::new();
        flow.set_contact("maite@example.com", "Maite", "Etxeberria");
        flow.set_payment_token("tok_visa");

        let purchase = flow.complete(&mut session, STANDARD_VAT_RATE).unwrap();

        assert_eq!(flow.step, CheckoutStep::Complete);
        assert!(session.cart().is_empty());
        assert_eq!(purchase.status, PurchaseStatus::Completed);
        assert_eq!(purchase.subtotal.amount_cents, 2000);
        assert_eq!(purchase.total_amount.amount_cents, 2420);
    }

    #[test]
    fn test_complete_with_empty_cart_fails() {
        let mut session = Session::new();
        let mut flow = CheckoutFlow::new();
        flow.set_contact("maite@example.com", "Maite", "Etxeberria");
        flow.set_payment_token("tok_visa");

        assert!(matches!(
            flow.complete(&mut session, STANDARD_VAT_RATE),
            Err(StoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_failure_leaves_cart_untouched() {
        let mut session = Session::new();
        session.add_to_cart(&sample_score("s1", "Agur Jaunak", 10.0, false));

        // Missing payment token.
        let mut flow = CheckoutFlow::new();
        flow.set_contact("maite@example.com", "Maite", "Etxeberria");

        assert!(flow.complete(&mut session, STANDARD_VAT_RATE).is_err());
        assert_eq!(session.cart().total_items(), 1);
    }

    #[test]
    fn test_no_advance_past_complete() {
        let mut flow = CheckoutFlow::new();
        flow.set_contact("maite@example.com", "Maite", "Etxeberria");
        flow.set_payment_token("tok_visa");
        flow.advance().unwrap();
        flow.advance().unwrap();

        assert!(matches!(
            flow.advance(),
            Err(StoreError::InvalidCheckoutTransition { .. })
        ));
    }
}
