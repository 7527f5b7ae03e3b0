pub mod cart;
pub mod categories;
pub mod listing;
pub mod product;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

/// Whole rupees print without decimals.
pub fn format_price(amount: f64, supports_unicode: bool) -> String {
    let symbol = if supports_unicode {
        theme::RUPEE
    } else {
        theme::RUPEE_ASCII
    };
    if amount.fract() == 0.0 {
        format!("{symbol}{amount:.0}")
    } else {
        format!("{symbol}{amount:.2}")
    }
}

pub fn format_rating(rating: f64, reviews: u32, supports_unicode: bool) -> String {
    format!(
        "{} {rating:.1} ({reviews})",
        Icon::Star.render(supports_unicode)
    )
}
