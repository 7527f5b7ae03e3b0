use pujan::domain::entities::Catalog;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{pad_display, ColoredText};

pub struct CategoriesView<'a> {
    catalog: &'a Catalog,
}

impl<'a> CategoriesView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(&ColoredText::plain("Shop by Category").bold().render(supports_color));
        out.push('\n');

        if self.catalog.categories().is_empty() {
            out.push_str(&ColoredText::dim("No categories in this catalog").render(supports_color));
            out.push('\n');
            return out;
        }

        for category in self.catalog.categories() {
            let marker = if category.featured {
                Icon::Star.colored(supports_color, supports_unicode)
            } else {
                " ".to_string()
            };
            let count = self.catalog.count_in_category(&category.name);
            let row = format!(
                "{marker} {} {:>3} listed  {}",
                pad_display(&category.name, 24),
                count,
                ColoredText::dim(&category.description).render(supports_color)
            );
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}
