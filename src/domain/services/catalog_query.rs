//! Catalog filter/sort engine
//!
//! `filter_and_sort` narrows the catalog with a conjunction of predicates and
//! then orders the survivors with a stable sort, so products that compare
//! equal keep their catalog order. The catalog is only borrowed.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::entities::{Catalog, FilterState, Product};
use crate::domain::policies::FestivalMatch;
use crate::domain::value_objects::SortKey;

/// Everything that shapes a product listing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(default)]
    pub search_text: String,
    /// Category picked from the category grid; empty means none
    #[serde(default)]
    pub selected_category: Option<String>,
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub festival_match: FestivalMatch,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = Some(category.into());
        self
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_festival_match(mut self, festival_match: FestivalMatch) -> Self {
        self.festival_match = festival_match;
        self
    }

    /// Selected category, treating an empty string as unset
    pub fn category(&self) -> Option<&str> {
        self.selected_category
            .as_deref()
            .filter(|c| !c.is_empty())
    }

    /// Whether any predicate can exclude a product under a price ceiling.
    ///
    /// Lets callers tell "nothing matched" apart from "nothing asked".
    pub fn is_active(&self, price_ceiling: f64) -> bool {
        !self.search_text.is_empty()
            || self.category().is_some()
            || !self.filters.is_default(price_ceiling)
    }

    /// Whether `product` passes every predicate
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search_text.to_lowercase();
        self.matches_with_needle(product, &needle)
    }

    fn matches_with_needle(&self, product: &Product, needle: &str) -> bool {
        let filters = &self.filters;

        if !needle.is_empty() && !product.name_contains(needle) {
            return false;
        }
        if let Some(category) = self.category() {
            if product.category != category {
                return false;
            }
        }
        if !filters.categories.is_empty() && !filters.categories.contains(&product.category) {
            return false;
        }
        if !filters.festivals.is_empty()
            && !self.festival_match.matches(product, &filters.festivals)
        {
            return false;
        }
        if !filters.price_range.contains(product.price) {
            return false;
        }
        if filters.in_stock_only && !product.in_stock {
            return false;
        }
        filters.min_rating.admits(product.rating)
    }
}

/// Filter `catalog` by `query` and order the result by `query.sort`.
pub fn filter_and_sort<'a>(catalog: &'a Catalog, query: &CatalogQuery) -> Vec<&'a Product> {
    let needle = query.search_text.to_lowercase();
    let mut products: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| query.matches_with_needle(p, &needle))
        .collect();
    sort_products(&mut products, query.sort);
    products
}

/// Stable in-place sort by `key`
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => products.sort_by_cached_key(|p| NameKey::new(&p.name)),
    }
}

/// Multi-level collation key for display names.
///
/// Base letters are compared first with accents and case folded away. Accents
/// then break ties (unaccented first), then case (lowercase first), and the
/// raw string last so distinct names never compare equal.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct NameKey {
    base: String,
    accented: String,
    uppercase: Vec<bool>,
    raw: String,
}

impl NameKey {
    fn new(name: &str) -> Self {
        let decomposed: String = name.nfd().collect();
        let letters = || decomposed.chars().filter(|c| !is_combining_mark(*c));
        Self {
            base: letters().flat_map(char::to_lowercase).collect(),
            accented: decomposed.chars().flat_map(char::to_lowercase).collect(),
            uppercase: letters().map(char::is_uppercase).collect(),
            raw: name.to_string(),
        }
    }
}
