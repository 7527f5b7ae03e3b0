//! JSON file catalog source

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::domain::entities::{Catalog, Category, Product};
use crate::domain::ports::CatalogSource;
use crate::error::{PujanError, PujanResult};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Parse and validate a catalog document.
///
/// `file` only labels errors; nothing is read from it.
pub fn parse_catalog(content: &str, file: &Path) -> PujanResult<Catalog> {
    let doc: CatalogDocument =
        serde_json::from_str(content).map_err(|e| PujanError::CatalogFormat {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Catalog::new(doc.categories, doc.products)?)
}

/// Catalog read from a JSON file on disk
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> anyhow::Result<Catalog> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read catalog {}", self.path.display()))?;
        let catalog = parse_catalog(&content, &self.path)?;
        tracing::info!(
            path = %self.path.display(),
            products = catalog.len(),
            categories = catalog.categories().len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
