//! CLI contracts: commands, JSON output and exit codes.

use serde_json::Value;

use crate::common::{TestEnv, ABC_CATALOG_JSON};

fn product_ids(json: &Value) -> Vec<String> {
    json["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["id"].as_str().expect("product id").to_string())
        .collect()
}

/// CONTRACT: The default listing is the whole bundled catalog in featured order.
#[test]
fn contract_default_listing_is_full_catalog() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["event"], "data");
    assert_eq!(json["command"], "list");
    assert_eq!(json["heading"], "All Products");
    assert_eq!(json["sort"], "featured");
    assert_eq!(json["total_in_catalog"], 8);
    assert_eq!(
        product_ids(&json),
        vec![
            "diya-001",
            "coconut-001",
            "incense-001",
            "flowers-001",
            "diya-002",
            "incense-002",
            "chandan-001",
            "thali-001",
        ]
    );
}

/// CONTRACT: --catalog replaces the bundled catalog.
#[test]
fn contract_catalog_flag_reads_json_file() {
    let env = TestEnv::new();
    env.write_project_file("abc.json", ABC_CATALOG_JSON);

    let result = env.run(&["--json", "--catalog", "abc.json", "list", "--sort", "price-low"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(product_ids(&result.json()), vec!["B", "C", "A"]);
}

/// CONTRACT: Filters combine; an empty result is still a successful listing.
#[test]
fn contract_filters_narrow_the_listing() {
    let env = TestEnv::new();

    let result = env.run(&[
        "--json",
        "list",
        "--min-price",
        "100",
        "--max-price",
        "500",
        "--in-stock",
        "--sort",
        "price-high",
    ]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        product_ids(&result.json()),
        vec!["diya-002", "diya-001", "incense-001"]
    );

    let empty = env.run(&["--json", "list", "--search", "no such samagri"]);
    assert!(empty.is_success(), "{}", empty.combined_output());
    assert!(product_ids(&empty.json()).is_empty());
}

/// CONTRACT: The festival filter reads the promo tag unless told otherwise.
#[test]
fn contract_festival_match_modes() {
    let env = TestEnv::new();

    let by_tag = env.run(&["--json", "list", "--festival", "Diwali"]);
    assert!(by_tag.is_success(), "{}", by_tag.combined_output());
    assert_eq!(product_ids(&by_tag.json()), vec!["diya-001"]);

    let by_list = env.run(&[
        "--json",
        "list",
        "--festival",
        "Diwali",
        "--festival-match",
        "festival-list",
    ]);
    assert!(by_list.is_success(), "{}", by_list.combined_output());
    assert_eq!(
        product_ids(&by_list.json()),
        vec!["diya-001", "flowers-001", "diya-002", "thali-001"]
    );
}

/// CONTRACT: An inverted price range from the command line is a usage error.
#[test]
fn contract_inverted_price_range_fails() {
    let env = TestEnv::new();
    let result = env.run(&["list", "--min-price", "300", "--max-price", "100"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid price range"), "{}", result.stderr);
}

/// CONTRACT: A category listing is headed by the category name.
#[test]
fn contract_category_listing_heading() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "list", "--category", "Diya & Tila"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["heading"], "Diya & Tila");
    assert_eq!(product_ids(&json), vec!["diya-001", "diya-002"]);
}

/// CONTRACT: The category directory lists every category with its listed count.
#[test]
fn contract_categories_json() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "categories"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["command"], "categories");
    assert_eq!(json["categories"].as_array().map(Vec::len), Some(8));
}

/// CONTRACT: show clamps the requested quantity to stock.
#[test]
fn contract_show_clamps_quantity() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "show", "thali-001", "--quantity", "20"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["product"]["id"], "thali-001");
    assert_eq!(json["quantity"], 8);
    assert_eq!(json["can_increment"], false);
    assert_eq!(json["discount_percent"], 25);
}

/// CONTRACT: Unknown product ids exit 1 with a hint.
#[test]
fn contract_show_unknown_product_fails() {
    let env = TestEnv::new();
    let result = env.run(&["show", "diya-404"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("unknown product 'diya-404'"), "{}", result.stderr);
    assert!(result.stderr.contains("pujan list"), "{}", result.stderr);
}

/// CONTRACT: Under --json, errors are an `error` event on stdout.
#[test]
fn contract_json_errors_are_events() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "show", "diya-404"]);

    assert_eq!(result.exit_code, 1);
    let json = result.json();
    assert_eq!(json["event"], "error");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("unknown product 'diya-404'"));
}

/// CONTRACT: A cart op on an unknown product still prints the cart, then fails.
#[test]
fn contract_cart_unknown_product_fails_after_output() {
    let env = TestEnv::new();
    let result = env.run(&["cart", "add:coconut-001:2", "add:diya-404"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Sacred Coconut (Fresh)"), "{}", result.stdout);
    assert!(result.stdout.contains("Unknown product 'diya-404'"), "{}", result.stdout);
}

/// CONTRACT: Malformed cart operations are rejected by argument parsing.
#[test]
fn contract_cart_rejects_malformed_ops() {
    let env = TestEnv::new();
    let result = env.run(&["cart", "buy:coconut-001"]);

    assert_eq!(result.exit_code, 2);
    assert!(result.stderr.contains("buy:coconut-001"), "{}", result.stderr);
}

/// CONTRACT: Sign-in errors surface as failures, not silent anonymous carts.
#[test]
fn contract_bad_phone_fails_sign_in() {
    let env = TestEnv::new();
    let result = env.run(&[
        "cart",
        "add:coconut-001",
        "--phone",
        "12345",
        "--otp",
        "123456",
        "--name",
        "Asha",
    ]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("10 digits"), "{}", result.stderr);
}

/// CONTRACT: Cart quantities in JSON follow the ledger rules.
#[test]
fn contract_cart_json_ledger() {
    let env = TestEnv::new();
    let result = env.run(&[
        "--json",
        "cart",
        "add:diya-001:2",
        "add:diya-001:3",
        "add:chandan-001:2",
        "set:chandan-001:0",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    let lines = json["cart"]["items"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["productId"], "diya-001");
    assert_eq!(lines[0]["quantity"], 5);
    assert_eq!(json["total"], 1495.0);
    assert!(json["user"].is_null());
}
