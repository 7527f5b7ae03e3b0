//! CatalogSource port - where the catalog is seeded from
//!
//! The query engine takes the catalog as a parameter; this trait is how the
//! outer layers obtain one without caring whether it is bundled seed data or
//! a file on disk.

use anyhow::Result;

use crate::domain::entities::Catalog;

pub trait CatalogSource {
    /// Load and validate the full catalog
    fn load(&self) -> Result<Catalog>;

    /// Human-readable origin, used in logs and CLI headers
    fn describe(&self) -> String;
}
