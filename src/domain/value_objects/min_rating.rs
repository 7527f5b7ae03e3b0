//! Minimum rating value object - single-select star threshold

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest selectable star threshold.
pub const MAX_STARS: u8 = 5;

/// Single-select minimum rating. Zero means "no constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinRating(u8);

impl MinRating {
    pub const NONE: MinRating = MinRating(0);

    /// Star threshold, saturating at five stars
    pub fn stars(stars: u8) -> Self {
        Self(stars.min(MAX_STARS))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_active(&self) -> bool {
        self.0 > 0
    }

    /// Whether a product rating clears this threshold
    pub fn admits(&self, rating: f64) -> bool {
        !self.is_active() || rating >= f64::from(self.0)
    }
}

impl fmt::Display for MinRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+ Stars", self.0)
    }
}
