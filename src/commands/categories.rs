//! Categories command handler

use anyhow::Result;

use pujan::config::Config;

use crate::commands::load_catalog;
use crate::ui::context::UiContext;
use crate::ui::views::categories::CategoriesView;

pub fn cmd_categories(config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = load_catalog(config)?;

    if ui.json {
        let categories: Vec<serde_json::Value> = catalog
            .categories()
            .iter()
            .map(|c| {
                serde_json::json!({
                    "category": c,
                    "listed": catalog.count_in_category(&c.name),
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "categories",
            "categories": categories,
        }))?;
        return Ok(());
    }

    print!("{}", CategoriesView::new(&catalog).render(ui.color, ui.unicode));
    Ok(())
}
