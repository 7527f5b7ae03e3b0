//! Pujan - storefront core for pujan samagri
//!
//! A catalog engine that filters and sorts products, a cart ledger that keeps
//! quantities within stock, and a mocked phone sign-in that gates checkout.
//! Everything above the domain layer is thin: a JSON catalog source, TOML
//! configuration and a small CLI.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BrowseUseCase, StorefrontAction, StorefrontState};
pub use config::Config;
pub use domain::entities::{CartState, Catalog, FilterState, Product};
pub use domain::services::{filter_and_sort, CatalogQuery};
pub use domain::value_objects::SortKey;
pub use error::{PujanError, PujanResult};
