//! Checkout gating
//!
//! The cart never decides whether checkout may proceed; this policy does,
//! from the signed-in user and the cart contents.

use serde::Serialize;

use crate::domain::entities::{CartState, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum CheckoutDecision {
    /// No signed-in shopper; hand over to the sign-in flow
    RequiresAuthentication,
    /// Nothing to pay for
    EmptyCart,
    Proceed { item_count: u64, total: f64 },
}

impl CheckoutDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, CheckoutDecision::Proceed { .. })
    }
}

/// Authentication is checked before cart contents.
pub fn decide(user: Option<&User>, cart: &CartState) -> CheckoutDecision {
    if user.is_none() {
        return CheckoutDecision::RequiresAuthentication;
    }
    if cart.is_empty() {
        return CheckoutDecision::EmptyCart;
    }
    CheckoutDecision::Proceed {
        item_count: cart.total_item_count(),
        total: cart.total_amount(),
    }
}
