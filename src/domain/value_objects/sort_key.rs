//! Sort key value object - the ordering applied to a product listing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordering for a product listing.
///
/// Every ordering is stable: products that compare equal keep their
/// catalog order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Featured,
    /// Price, cheapest first
    PriceLow,
    /// Price, most expensive first
    PriceHigh,
    /// Rating, best first
    Rating,
    /// Display name, A-Z
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Name,
    ];

    /// Wire name used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Name => "name",
        }
    }

    /// Label shown in the sort dropdown
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Customer Rating",
            SortKey::Name => "Name A-Z",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}' (expected featured, price-low, price-high, rating or name)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}
