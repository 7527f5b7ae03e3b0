use pujan::domain::entities::Product;
use pujan::domain::value_objects::QuantitySelector;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::{format_price, format_rating};

pub struct ProductView<'a> {
    product: &'a Product,
    quantity: QuantitySelector,
}

impl<'a> ProductView<'a> {
    pub fn new(product: &'a Product, quantity: QuantitySelector) -> Self {
        Self { product, quantity }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let p = self.product;
        let mut out = String::new();

        out.push_str(&ColoredText::plain(&p.name).bold().render(supports_color));
        out.push('\n');
        if let Some(local) = &p.name_localized {
            out.push_str(local);
            out.push('\n');
        }

        let mut price = format_price(p.price, supports_unicode);
        if let (Some(original), Some(percent)) = (p.original_price, p.discount_percent()) {
            price.push_str(&format!(
                "  was {} ({percent}% off)",
                format_price(original, supports_unicode)
            ));
        }
        out.push_str(&price);
        out.push('\n');
        out.push_str(&format!(
            "{}  {}\n",
            format_rating(p.rating, p.review_count, supports_unicode),
            p.category
        ));
        if let Some(tag) = &p.festival_tag {
            out.push_str(&ColoredText::success(tag).render(supports_color));
            out.push('\n');
        }

        if !p.description.is_empty() {
            out.push_str(&format!("\nDescription\n  {}\n", p.description));
        }
        let bullet = Icon::Bullet.render(supports_unicode);
        for (title, items) in [("Uses", &p.uses), ("Festivals", &p.festivals)] {
            if items.is_empty() {
                continue;
            }
            out.push_str(&format!("\n{title}\n"));
            for item in items {
                out.push_str(&format!("  {bullet} {item}\n"));
            }
        }

        out.push('\n');
        if !p.in_stock {
            out.push_str(&ColoredText::error("Out of Stock").render(supports_color));
            out.push('\n');
            return out;
        }

        let minus = if self.quantity.can_decrement() { "-" } else { " " };
        let plus = if self.quantity.can_increment() { "+" } else { " " };
        let available = p
            .stock_count
            .map(|n| format!("  {n} available"))
            .unwrap_or_default();
        out.push_str(&format!(
            "Quantity [{minus}] {} [{plus}]{available}\n",
            self.quantity.value()
        ));
        out.push_str(
            &ColoredText::info(format!("Add {} to Cart", self.quantity.value()))
                .render(supports_color),
        );
        out.push('\n');
        out
    }
}
