//! Seed catalog compiled into the binary

use std::path::Path;

use crate::domain::entities::Catalog;
use crate::domain::ports::CatalogSource;

use super::json::parse_catalog;

const SEED: &str = include_str!("../../../data/catalog.json");

/// The pujan samagri seed catalog shipped with the crate
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledCatalog;

impl BundledCatalog {
    /// Raw JSON of the seed catalog
    pub fn source_text() -> &'static str {
        SEED
    }
}

impl CatalogSource for BundledCatalog {
    fn load(&self) -> anyhow::Result<Catalog> {
        let catalog = parse_catalog(SEED, Path::new("<bundled>"))?;
        tracing::debug!(products = catalog.len(), "loaded bundled catalog");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "bundled seed catalog".to_string()
    }
}
