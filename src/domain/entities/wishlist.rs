//! Wishlist entity - the set of hearted product ids

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistChange {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist(BTreeSet<String>);

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `product_id`
    #[must_use]
    pub fn toggle(&self, product_id: &str) -> (Wishlist, WishlistChange) {
        let mut next = self.0.clone();
        if next.remove(product_id) {
            (Wishlist(next), WishlistChange::Removed)
        } else {
            next.insert(product_id.to_string());
            (Wishlist(next), WishlistChange::Added)
        }
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.0.contains(product_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
