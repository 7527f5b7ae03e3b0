//! List command handler

use anyhow::{bail, Result};

use pujan::application::{StorefrontAction, StorefrontState};
use pujan::config::Config;
use pujan::domain::value_objects::PriceRange;
use pujan::presentation::{factory, ListArgs};

use crate::commands::load_catalog;
use crate::ui::context::UiContext;
use crate::ui::views::listing::ListingView;

/// Translate list flags into the storefront actions a shopper would take
fn actions_for(args: ListArgs, price_ceiling: f64) -> Result<Vec<StorefrontAction>> {
    use StorefrontAction as A;

    let mut actions = Vec::new();
    if let Some(text) = args.search {
        actions.push(A::Search(text));
    }
    // Selecting a category clears the search, so it goes second.
    if let Some(category) = args.category {
        actions.push(A::SelectCategory(category));
    }
    for category in args.filter_categories {
        actions.push(A::ToggleFilterCategory {
            category,
            checked: true,
        });
    }
    for festival in args.festivals {
        actions.push(A::ToggleFilterFestival {
            festival,
            checked: true,
        });
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let range = PriceRange::new(
            args.min_price.unwrap_or(0.0),
            args.max_price.unwrap_or(price_ceiling),
        );
        if !range.is_well_formed() {
            bail!(
                "invalid price range {}..{}: bounds must be non-negative and ordered",
                range.min,
                range.max
            );
        }
        actions.push(A::SetPriceRange(range));
    }
    if args.in_stock {
        actions.push(A::SetInStockOnly(true));
    }
    if let Some(stars) = args.min_rating {
        actions.push(A::ToggleMinRating {
            stars,
            checked: true,
        });
    }
    if let Some(sort) = args.sort {
        actions.push(A::SetSort(sort));
    }
    Ok(actions)
}

pub fn cmd_list(args: ListArgs, config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = load_catalog(config)?;

    let mut settings = config.storefront_settings();
    if let Some(festival_match) = args.festival_match {
        settings.festival_match = festival_match;
    }

    let mut state = StorefrontState::new(settings);
    for action in actions_for(args, settings.price_ceiling)? {
        state = state.apply(&catalog, action).state;
    }

    let query = state.query();
    let listing = factory::create_browse_use_case(config).list(&catalog, &query);

    if ui.json {
        let out = serde_json::json!({
            "event": "data",
            "command": "list",
            "heading": listing.heading,
            "summary": listing.summary,
            "sort": query.sort,
            "active_filters": listing.active_filters,
            "total_in_catalog": listing.total_in_catalog,
            "products": listing.products,
        });
        crate::ui::json::emit(out)?;
        return Ok(());
    }

    print!(
        "{}",
        ListingView::new(&listing, query.sort).render(ui.color, ui.unicode)
    );
    Ok(())
}
