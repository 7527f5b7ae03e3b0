//! Listing scenarios over the A/B/C catalog.

use pujan::domain::policies::FestivalMatch;
use pujan::domain::value_objects::PriceRange;
use pujan::{filter_and_sort, BrowseUseCase, CatalogQuery, FilterState, SortKey};

use crate::common::{abc_catalog, ids};

#[test]
fn price_low_sort_orders_cheapest_first() {
    let catalog = abc_catalog();
    let query = CatalogQuery::new()
        .with_search("")
        .with_category("")
        .with_sort(SortKey::PriceLow);

    let results = filter_and_sort(&catalog, &query);

    assert_eq!(ids(&results), vec!["B", "C", "A"]);
}

#[test]
fn price_window_keeps_products_inside_bounds() {
    let catalog = abc_catalog();
    let filters = FilterState::default().with_price_range(PriceRange::new(100.0, 300.0));
    let query = CatalogQuery::new()
        .with_filters(filters)
        .with_sort(SortKey::PriceLow);

    let results = filter_and_sort(&catalog, &query);

    assert_eq!(ids(&results), vec!["C", "A"]);
}

#[test]
fn other_sort_keys_over_the_same_catalog() {
    let catalog = abc_catalog();
    let order = |sort| ids(&filter_and_sort(&catalog, &CatalogQuery::new().with_sort(sort)));

    assert_eq!(order(SortKey::Featured), vec!["A", "B", "C"]);
    assert_eq!(order(SortKey::PriceHigh), vec!["A", "C", "B"]);
    assert_eq!(order(SortKey::Rating), vec!["B", "C", "A"]);
    assert_eq!(order(SortKey::Name), vec!["C", "A", "B"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let catalog = abc_catalog();
    let results = filter_and_sort(&catalog, &CatalogQuery::new().with_search("NARI"));
    assert_eq!(ids(&results), vec!["B"]);
}

#[test]
fn festival_filter_uses_the_configured_field() {
    let catalog = abc_catalog();
    let filters = FilterState::default().toggle_festival("Diwali", true);

    let by_tag = CatalogQuery::new().with_filters(filters.clone());
    assert_eq!(ids(&filter_and_sort(&catalog, &by_tag)), vec!["A"]);

    let by_list = CatalogQuery::new()
        .with_filters(filters)
        .with_festival_match(FestivalMatch::FestivalList);
    assert_eq!(ids(&filter_and_sort(&catalog, &by_list)), vec!["A", "C"]);
}

#[test]
fn no_match_listing_is_distinguished_from_empty_catalog() {
    let catalog = abc_catalog();
    let browse = BrowseUseCase::default();

    let listing = browse.list(&catalog, &CatalogQuery::new().with_search("kalash"));
    assert!(listing.is_empty());
    assert!(listing.is_no_match());
    assert_eq!(listing.summary, "0 products found for \"kalash\"");

    let everything = browse.list(&catalog, &CatalogQuery::new());
    assert!(!everything.query_active);
    assert_eq!(everything.heading, "All Products");
    assert_eq!(everything.summary, "3 products found");
}
