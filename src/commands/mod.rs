//! Command handlers for the `pujan` binary

pub mod cart;
pub mod categories;
pub mod list;
pub mod show;

use anyhow::Result;

use pujan::config::Config;
use pujan::domain::entities::Catalog;
use pujan::presentation::factory;

/// Load the catalog the configuration points at
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let source = factory::create_catalog_source(config);
    tracing::debug!(source = %source.describe(), "loading catalog");
    source.load()
}
