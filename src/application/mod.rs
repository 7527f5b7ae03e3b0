//! Application Layer
//!
//! Use cases that orchestrate the storefront flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Turns shopper interactions into domain calls
//!
//! ## Use Cases
//!
//! - `BrowseUseCase` - Listing page: filter, sort, heading, badges
//! - `StorefrontState::apply` - Session reducer for search, filters, cart, wishlist, checkout
//! - `AuthFlow` - Phone → code → profile sign-in over an `AuthService`

pub mod auth_flow;
pub mod browse;
pub mod storefront;

pub use auth_flow::{AuthFlow, AuthStep};
pub use browse::{ActiveFilter, BrowseUseCase, Listing};
pub use storefront::{
    StorefrontAction, StorefrontEvent, StorefrontSettings, StorefrontState, Transition,
};
