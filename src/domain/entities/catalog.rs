//! Catalog entity
//!
//! The catalog is seeded once from a `CatalogSource` and never mutated
//! afterwards. Validation happens here so the query engine can trust prices,
//! ratings and ids.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Product;

/// A browseable category tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "nameHindi", skip_serializing_if = "Option::is_none")]
    pub name_localized: Option<String>,
    #[serde(default)]
    pub image: String,
    /// Advertised size of the range, not the number of products in this catalog
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub featured: bool,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_localized: None,
            image: String::new(),
            item_count: 0,
            description: String::new(),
            featured: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate product id '{id}'")]
    DuplicateId { id: String },

    #[error("product '{id}' has an empty id or name")]
    MissingName { id: String },

    #[error("product '{id}' has invalid price {price}")]
    InvalidPrice { id: String, price: f64 },

    #[error("product '{id}' original price {original} is below price {price}")]
    OriginalBelowPrice { id: String, original: f64, price: f64 },

    #[error("product '{id}' rating {rating} is outside 0-5")]
    InvalidRating { id: String, rating: f64 },

    #[error("product '{id}' belongs to unknown category '{category}'")]
    UnknownCategory { id: String, category: String },

    #[error("duplicate category '{name}'")]
    DuplicateCategory { name: String },
}

/// Validated, immutable product catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// When `categories` is empty every product category is accepted.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut category_names = HashSet::new();
        for category in &categories {
            if !category_names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        for product in &products {
            validate_product(product)?;
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
            if !category_names.is_empty() && !category_names.contains(product.category.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    id: product.id.clone(),
                    category: product.category.clone(),
                });
            }
        }

        Ok(Self {
            categories,
            products,
        })
    }

    /// Catalog without a category directory
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        Self::new(Vec::new(), products)
    }

    /// Products in catalog (featured) order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Number of catalog products filed under `category`
    pub fn count_in_category(&self, category: &str) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    if product.id.trim().is_empty() || product.name.trim().is_empty() {
        return Err(CatalogError::MissingName {
            id: product.id.clone(),
        });
    }
    if !product.price.is_finite() || product.price <= 0.0 {
        return Err(CatalogError::InvalidPrice {
            id: product.id.clone(),
            price: product.price,
        });
    }
    if let Some(original) = product.original_price {
        if !original.is_finite() || original < product.price {
            return Err(CatalogError::OriginalBelowPrice {
                id: product.id.clone(),
                original,
                price: product.price,
            });
        }
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidRating {
            id: product.id.clone(),
            rating: product.rating,
        });
    }
    Ok(())
}
