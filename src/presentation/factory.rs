//! Use Case Factory
//!
//! Wires ports to their adapters from the resolved configuration.

use crate::application::BrowseUseCase;
use crate::config::Config;
use crate::domain::ports::CatalogSource;
use crate::domain::value_objects::OtpCode;
use crate::error::PujanResult;
use crate::infrastructure::{BundledCatalog, JsonCatalogSource, MockAuthService};

/// Catalog source for `config`: the configured file, or the bundled seed
pub fn create_catalog_source(config: &Config) -> Box<dyn CatalogSource> {
    match &config.catalog.path {
        Some(path) => Box::new(JsonCatalogSource::new(path.clone())),
        None => Box::new(BundledCatalog),
    }
}

pub fn create_auth_service(config: &Config) -> PujanResult<MockAuthService> {
    let mut service = MockAuthService::new().with_latency(config.auth.simulated_latency());
    if let Some(code) = &config.auth.expected_code {
        service = service.with_expected_code(OtpCode::parse(code)?);
    }
    Ok(service)
}

pub fn create_browse_use_case(config: &Config) -> BrowseUseCase {
    BrowseUseCase::new(config.listing.price_ceiling)
}
