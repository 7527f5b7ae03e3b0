//! Price range value object - the inclusive [min, max] price window of the filter panel

use serde::{Deserialize, Serialize};

/// Upper bound of the price slider when nothing else is configured.
pub const DEFAULT_PRICE_CEILING: f64 = 2000.0;

/// Inclusive price window.
///
/// A range with `min > max` matches no product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The full slider span, `[0, ceiling]`
    pub fn up_to(ceiling: f64) -> Self {
        Self::new(0.0, ceiling)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True when `min <= max` and both bounds are non-negative
    pub fn is_well_formed(&self) -> bool {
        self.min >= 0.0 && self.min <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_PRICE_CEILING)
    }
}
