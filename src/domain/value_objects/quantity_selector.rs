//! Quantity selector - the +/- stepper on the product detail view

/// Quantity picked before adding a product to the cart.
///
/// Never drops below one and never exceeds the stock count when one is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
    max: Option<u32>,
}

impl QuantitySelector {
    pub fn new(max: Option<u32>) -> Self {
        Self { value: 1, max }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn can_increment(&self) -> bool {
        self.max.is_none_or(|max| self.value < max)
    }

    pub fn can_decrement(&self) -> bool {
        self.value > 1
    }

    #[must_use]
    pub fn increment(self) -> Self {
        if !self.can_increment() {
            return self;
        }
        Self {
            value: self.value.saturating_add(1),
            ..self
        }
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        Self {
            value: self.value.saturating_sub(1).max(1),
            ..self
        }
    }
}
