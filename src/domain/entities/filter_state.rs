//! Filter panel state
//!
//! Mirrors the sidebar: category and festival checkboxes, the price slider,
//! an in-stock toggle and a single-select star rating. Each edit returns a
//! new value; `cleared` resets to defaults.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MinRating, PriceRange};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub festivals: BTreeSet<String>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub in_stock_only: bool,
    #[serde(default)]
    pub min_rating: MinRating,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_price_ceiling(PriceRange::default().max)
    }
}

impl FilterState {
    /// Defaults with the price slider spanning `[0, ceiling]`
    pub fn with_price_ceiling(ceiling: f64) -> Self {
        Self {
            categories: BTreeSet::new(),
            festivals: BTreeSet::new(),
            price_range: PriceRange::up_to(ceiling),
            in_stock_only: false,
            min_rating: MinRating::NONE,
        }
    }

    #[must_use]
    pub fn toggle_category(&self, category: &str, checked: bool) -> Self {
        let mut next = self.clone();
        if checked {
            next.categories.insert(category.to_string());
        } else {
            next.categories.remove(category);
        }
        next
    }

    #[must_use]
    pub fn toggle_festival(&self, festival: &str, checked: bool) -> Self {
        let mut next = self.clone();
        if checked {
            next.festivals.insert(festival.to_string());
        } else {
            next.festivals.remove(festival);
        }
        next
    }

    #[must_use]
    pub fn with_price_range(&self, range: PriceRange) -> Self {
        Self {
            price_range: range,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_in_stock_only(&self, in_stock_only: bool) -> Self {
        Self {
            in_stock_only,
            ..self.clone()
        }
    }

    /// Checking a rating selects it; unchecking clears the constraint.
    #[must_use]
    pub fn toggle_min_rating(&self, stars: u8, checked: bool) -> Self {
        Self {
            min_rating: if checked {
                MinRating::stars(stars)
            } else {
                MinRating::NONE
            },
            ..self.clone()
        }
    }

    /// Defaults, keeping the current slider ceiling
    #[must_use]
    pub fn cleared(&self, ceiling: f64) -> Self {
        Self::with_price_ceiling(ceiling)
    }

    /// Badge count shown on the filter toggle. The price slider is not counted.
    pub fn active_count(&self) -> usize {
        self.categories.len()
            + self.festivals.len()
            + usize::from(self.in_stock_only)
            + usize::from(self.min_rating.is_active())
    }

    /// True when no checkbox is set and the slider covers `[0, ceiling]`
    pub fn is_default(&self, ceiling: f64) -> bool {
        self.active_count() == 0 && self.price_range == PriceRange::up_to(ceiling)
    }
}
