//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod catalog_query;

pub use catalog_query::{filter_and_sort, sort_products, CatalogQuery};
