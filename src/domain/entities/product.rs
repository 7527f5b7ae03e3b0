//! Product entity
//!
//! A product is a read-only catalog record. The engines only ever borrow it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Name in the local script (Devanagari in the bundled catalog)
    #[serde(default, alias = "nameHindi", skip_serializing_if = "Option::is_none")]
    pub name_localized: Option<String>,
    pub price: f64,
    /// Pre-discount price shown struck through
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Present only when inventory is tracked for this product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub festivals: Vec<String>,
    /// Single promotional badge, e.g. "Diwali Special"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival_tag: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Minimal in-stock product; the rest is filled in with the `with_*` builders.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_localized: None,
            price,
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            rating: 0.0,
            review_count: 0,
            category: category.into(),
            in_stock: true,
            stock_count: None,
            description: String::new(),
            uses: Vec::new(),
            festivals: Vec::new(),
            festival_tag: None,
        }
    }

    pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
        self.name_localized = Some(name.into());
        self
    }

    pub fn with_original_price(mut self, price: f64) -> Self {
        self.original_price = Some(price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Tracks inventory; a count of zero also marks the product out of stock.
    pub fn with_stock(mut self, count: u32) -> Self {
        self.stock_count = Some(count);
        self.in_stock = count > 0;
        self
    }

    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_festivals<I, S>(mut self, festivals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.festivals = festivals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_festival_tag(mut self, tag: impl Into<String>) -> Self {
        self.festival_tag = Some(tag.into());
        self
    }

    /// Case-insensitive substring match against the name or localized name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .name_localized
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(needle))
    }

    /// Whole-percent saving against the original price, if discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= 0.0 {
            return None;
        }
        let percent = ((original - self.price) / original * 100.0).round();
        Some(percent as u32)
    }

    /// Images for the detail gallery, falling back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}
