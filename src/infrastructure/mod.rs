//! Infrastructure layer - adapters for the domain ports

pub mod auth;
pub mod catalog;

pub use auth::MockAuthService;
pub use catalog::{parse_catalog, BundledCatalog, JsonCatalogSource};
