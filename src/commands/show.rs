//! Show command handler

use anyhow::Result;

use pujan::config::Config;
use pujan::domain::value_objects::QuantitySelector;
use pujan::PujanError;

use crate::commands::load_catalog;
use crate::ui::context::UiContext;
use crate::ui::views::product::ProductView;

/// Step the selector up from one, stopping at the stock limit
fn stepped(max: Option<u32>, requested: u32) -> QuantitySelector {
    (1..requested.max(1)).fold(QuantitySelector::new(max), |selector, _| selector.increment())
}

pub fn cmd_show(id: &str, quantity: u32, config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = load_catalog(config)?;
    let product = catalog.get(id).ok_or_else(|| PujanError::UnknownProduct {
        id: id.to_string(),
    })?;
    let selector = stepped(product.stock_count, quantity);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "show",
            "product": product,
            "discount_percent": product.discount_percent(),
            "gallery": product.gallery(),
            "quantity": selector.value(),
            "can_increment": selector.can_increment(),
            "can_decrement": selector.can_decrement(),
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        ProductView::new(product, selector).render(ui.color, ui.unicode)
    );
    Ok(())
}
