//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod auth_service;
pub mod catalog_source;

pub use auth_service::{AuthError, AuthService, PendingCode};
pub use catalog_source::CatalogSource;
