//! Catalog sources
//!
//! Both adapters read the same JSON document shape:
//! `{ "categories": [...], "products": [...] }`.

mod bundled;
mod json;

pub use bundled::BundledCatalog;
pub use json::{parse_catalog, JsonCatalogSource};
