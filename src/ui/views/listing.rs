use pujan::application::Listing;
use pujan::domain::entities::Product;
use pujan::SortKey;

use crate::ui::primitives::text::{pad_display, truncate_display, ColoredText};
use crate::ui::views::{format_price, format_rating};

const NAME_WIDTH: usize = 28;

pub struct ListingView<'a> {
    listing: &'a Listing<'a>,
    sort: SortKey,
}

impl<'a> ListingView<'a> {
    pub fn new(listing: &'a Listing<'a>, sort: SortKey) -> Self {
        Self { listing, sort }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let sep = if supports_unicode { "·" } else { "-" };

        out.push_str(&ColoredText::plain(&self.listing.heading).bold().render(supports_color));
        out.push('\n');
        out.push_str(&format!(
            "{} {sep} sorted by {}\n",
            self.listing.summary,
            self.sort.label()
        ));

        if !self.listing.active_filters.is_empty() {
            let labels: Vec<String> = self
                .listing
                .active_filters
                .iter()
                .map(|f| f.label())
                .collect();
            out.push_str(&format!(
                "Active filters: {}\n",
                ColoredText::info(labels.join(", ")).render(supports_color)
            ));
        }
        out.push('\n');

        if self.listing.is_empty() {
            out.push_str(&ColoredText::warning("No products found").render(supports_color));
            out.push('\n');
            if self.listing.is_no_match() {
                out.push_str(
                    &ColoredText::dim("Try adjusting your filters or search terms")
                        .render(supports_color),
                );
                out.push('\n');
            }
            return out;
        }

        for product in &self.listing.products {
            out.push_str(&product_row(product, supports_color, supports_unicode));
            out.push('\n');
        }
        out
    }
}

fn product_row(product: &Product, supports_color: bool, supports_unicode: bool) -> String {
    let was = match (product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => {
            format!("was {} -{percent}%", format_price(original, supports_unicode))
        }
        _ => String::new(),
    };
    let status = if !product.in_stock {
        ColoredText::error("Out of stock").render(supports_color)
    } else {
        product
            .festival_tag
            .as_deref()
            .map(|tag| ColoredText::success(tag).render(supports_color))
            .unwrap_or_default()
    };

    let row = format!(
        "{} {} {} {} {} {}",
        pad_display(&product.id, 12),
        pad_display(&truncate_display(&product.name, NAME_WIDTH), NAME_WIDTH),
        pad_display(&format_price(product.price, supports_unicode), 7),
        pad_display(&was, 15),
        pad_display(
            &format_rating(product.rating, product.review_count, supports_unicode),
            13
        ),
        status
    );
    row.trim_end().to_string()
}
