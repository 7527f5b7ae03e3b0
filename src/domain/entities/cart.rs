//! Cart ledger
//!
//! An insertion-ordered list of line items, at most one per product id.
//! Every operation borrows the current state and returns a new one, so a
//! caller holding an older `CartState` never sees it change underneath it.
//!
//! Invariants:
//! - every line has `quantity >= 1`
//! - `quantity <= max_quantity` whenever a maximum is recorded
//! - operations on an unknown id return an unchanged copy

use serde::{Deserialize, Serialize};

use super::Product;

/// One product in the cart, snapshotted when it was first added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub image: String,
    /// Stock count at the time the product was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
}

impl CartLineItem {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image: product.image.clone(),
            max_quantity: product.stock_count,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn is_at_max(&self) -> bool {
        self.max_quantity.is_some_and(|max| self.quantity >= max)
    }

    fn clamp(&self, quantity: u32) -> u32 {
        clamp_to(quantity, self.max_quantity)
    }
}

fn clamp_to(quantity: u32, max: Option<u32>) -> u32 {
    match max {
        Some(max) => quantity.min(max),
        None => quantity,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line is merged (old + requested); a new line is appended.
    /// Either way the result is capped at the line's max quantity. A request
    /// that would leave a line at zero units changes nothing.
    #[must_use]
    pub fn add_item(&self, product: &Product, quantity: u32) -> CartState {
        let mut next = self.clone();
        match next.position(&product.id) {
            Some(index) => {
                let line = &mut next.items[index];
                line.quantity = line.clamp(line.quantity.saturating_add(quantity));
            }
            None => {
                let quantity = clamp_to(quantity, product.stock_count);
                if quantity == 0 {
                    return next;
                }
                next.items.push(CartLineItem::snapshot(product, quantity));
            }
        }
        next
    }

    /// Set a line's quantity in place.
    ///
    /// Zero or negative removes the line.
    #[must_use]
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> CartState {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let mut next = self.clone();
        if let Some(index) = next.position(product_id) {
            let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
            let line = &mut next.items[index];
            line.quantity = line.clamp(requested);
        }
        next
    }

    #[must_use]
    pub fn remove_item(&self, product_id: &str) -> CartState {
        CartState {
            items: self
                .items
                .iter()
                .filter(|line| line.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    /// Empty cart, e.g. after a completed checkout
    #[must_use]
    pub fn cleared(&self) -> CartState {
        CartState::new()
    }

    /// Units across all lines (the cart badge)
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Whether the "+" stepper for this line should be enabled
    pub fn can_increment(&self, product_id: &str) -> bool {
        self.line(product_id).is_some_and(|line| !line.is_at_max())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|line| line.product_id == product_id)
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
