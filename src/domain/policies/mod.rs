//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain entities.

pub mod checkout_policy;
mod festival_match;

pub use checkout_policy::CheckoutDecision;
pub use festival_match::FestivalMatch;
