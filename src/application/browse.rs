//! Browse use case
//!
//! Runs the filter/sort engine and dresses the result for a listing page:
//! heading, "N products found" summary and the active-filter badges.

use serde::Serialize;

use crate::domain::entities::{Catalog, FilterState, Product};
use crate::domain::services::{filter_and_sort, CatalogQuery};
use crate::domain::value_objects::{MinRating, DEFAULT_PRICE_CEILING};

pub const ALL_PRODUCTS_HEADING: &str = "All Products";

/// One badge in the "Active filters" row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ActiveFilter {
    Category(String),
    Festival(String),
    InStockOnly,
    MinRating(u8),
}

impl ActiveFilter {
    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Category(name) | ActiveFilter::Festival(name) => name.clone(),
            ActiveFilter::InStockOnly => "In Stock Only".to_string(),
            ActiveFilter::MinRating(stars) => MinRating::stars(*stars).to_string(),
        }
    }

    /// Badges in panel order: categories, festivals, stock, rating
    pub fn collect(filters: &FilterState) -> Vec<ActiveFilter> {
        let mut badges: Vec<ActiveFilter> = filters
            .categories
            .iter()
            .cloned()
            .map(ActiveFilter::Category)
            .collect();
        badges.extend(filters.festivals.iter().cloned().map(ActiveFilter::Festival));
        if filters.in_stock_only {
            badges.push(ActiveFilter::InStockOnly);
        }
        if filters.min_rating.is_active() {
            badges.push(ActiveFilter::MinRating(filters.min_rating.value()));
        }
        badges
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing<'a> {
    pub heading: String,
    pub summary: String,
    pub products: Vec<&'a Product>,
    pub active_filters: Vec<ActiveFilter>,
    /// False when the listing is the untouched catalog
    pub query_active: bool,
    pub total_in_catalog: usize,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Empty because of the query rather than an empty catalog
    pub fn is_no_match(&self) -> bool {
        self.products.is_empty() && self.query_active
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BrowseUseCase {
    price_ceiling: f64,
}

impl BrowseUseCase {
    pub fn new(price_ceiling: f64) -> Self {
        Self { price_ceiling }
    }

    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    pub fn list<'a>(&self, catalog: &'a Catalog, query: &CatalogQuery) -> Listing<'a> {
        let products = filter_and_sort(catalog, query);
        tracing::debug!(
            matched = products.len(),
            total = catalog.len(),
            sort = %query.sort,
            "catalog query"
        );

        Listing {
            heading: query
                .category()
                .unwrap_or(ALL_PRODUCTS_HEADING)
                .to_string(),
            summary: summary_line(products.len(), &query.search_text),
            active_filters: ActiveFilter::collect(&query.filters),
            query_active: query.is_active(self.price_ceiling),
            total_in_catalog: catalog.len(),
            products,
        }
    }
}

impl Default for BrowseUseCase {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CEILING)
    }
}

fn summary_line(count: usize, search_text: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    let mut line = format!("{count} product{plural} found");
    if !search_text.is_empty() {
        line.push_str(&format!(" for \"{search_text}\""));
    }
    line
}
