use pujan::application::StorefrontEvent;
use pujan::domain::entities::CartState;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{pad_display, truncate_display, ColoredText};
use crate::ui::views::format_price;

/// One toast-style line for a storefront event
pub fn render_event(event: &StorefrontEvent, supports_color: bool, supports_unicode: bool) -> String {
    use StorefrontEvent as E;

    let (icon, text) = match event {
        E::AddedToCart { name, quantity, .. } => (
            Icon::Success,
            ColoredText::success(format!("Added to Cart: {name} (now {quantity})")),
        ),
        E::QuantityCapped {
            product_id,
            requested,
            max,
        } => (
            Icon::Warning,
            ColoredText::warning(format!(
                "Only {max} of {product_id} available (asked for {requested})"
            )),
        ),
        E::OutOfStock { product_id } => (
            Icon::Warning,
            ColoredText::warning(format!("{product_id} is out of stock")),
        ),
        E::RemovedFromCart { product_id } => (
            Icon::Success,
            ColoredText::plain(format!("Item Removed: {product_id}")),
        ),
        E::WishlistAdded { product_id } => (
            Icon::Success,
            ColoredText::plain(format!("Added to Wishlist: {product_id}")),
        ),
        E::WishlistRemoved { product_id } => (
            Icon::Success,
            ColoredText::plain(format!("Removed from Wishlist: {product_id}")),
        ),
        E::SignedIn { name } => (
            Icon::Success,
            ColoredText::success(format!("Welcome, {name}! You're now logged in.")),
        ),
        E::SignedOut => (Icon::Success, ColoredText::plain("Signed out")),
        E::CheckoutRequiresAuth => (
            Icon::Warning,
            ColoredText::warning("Sign in to check out (--phone, --otp and --name)"),
        ),
        E::CheckoutEmptyCart => (
            Icon::Warning,
            ColoredText::warning("Nothing to check out: your cart is empty"),
        ),
        E::CheckoutStarted { item_count, total } => (
            Icon::Success,
            ColoredText::success(format!(
                "Proceeding to Checkout: {item_count} items, {}",
                format_price(*total, supports_unicode)
            )),
        ),
        E::UnknownProduct { product_id } => (
            Icon::Error,
            ColoredText::error(format!("Unknown product '{product_id}'")),
        ),
    };

    format!(
        "{} {}",
        icon.colored(supports_color, supports_unicode),
        text.render(supports_color)
    )
}

pub struct CartView<'a> {
    cart: &'a CartState,
}

impl<'a> CartView<'a> {
    pub fn new(cart: &'a CartState) -> Self {
        Self { cart }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let count = self.cart.total_item_count();
        out.push_str(&format!(
            "{} {}\n",
            Icon::Cart.render(supports_unicode),
            ColoredText::plain(format!("Shopping Cart ({count})")).bold().render(supports_color)
        ));

        if self.cart.is_empty() {
            out.push_str("Your cart is empty\n");
            out.push_str(
                &ColoredText::dim("Add some sacred items to your cart to get started")
                    .render(supports_color),
            );
            out.push('\n');
            return out;
        }

        for line in self.cart {
            let cap = if line.is_at_max() {
                ColoredText::dim("max").render(supports_color)
            } else {
                String::new()
            };
            let row = format!(
                "  {} {:>3} x {} {} {}",
                pad_display(&truncate_display(&line.name, 28), 28),
                line.quantity,
                pad_display(&format_price(line.unit_price, supports_unicode), 7),
                pad_display(&format_price(line.line_total(), supports_unicode), 9),
                cap
            );
            out.push_str(row.trim_end());
            out.push('\n');
        }

        let total = format_price(self.cart.total_amount(), supports_unicode);
        out.push('\n');
        out.push_str(&format!(
            "{} {total}\n",
            pad_display(&format!("Subtotal ({count} items)"), 20)
        ));
        out.push_str(&format!("{} Free\n", pad_display("Shipping", 20)));
        out.push_str(&format!(
            "{} {}\n",
            pad_display("Total", 20),
            ColoredText::plain(total).bold().render(supports_color)
        ));
        out
    }
}
