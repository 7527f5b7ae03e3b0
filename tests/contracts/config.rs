//! Configuration contracts.
//!
//! Layering: built-in defaults < one config file (explicit `--config`, else
//! project `.pujan/config.toml`, else user config) < `PUJAN_*` environment
//! < command-line flags.

use serde_json::Value;

use crate::common::{TestEnv, ABC_CATALOG_JSON};

fn listed(json: &Value) -> Vec<String> {
    json["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["id"].as_str().expect("product id").to_string())
        .collect()
}

/// CONTRACT: The project config sets the default sort.
#[test]
fn contract_project_config_default_sort() {
    let env = TestEnv::new().with_project_config("[listing]\ndefault_sort = \"price-high\"\n");

    let result = env.run(&["--json", "list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["sort"], "price-high");
    assert_eq!(listed(&json).first().map(String::as_str), Some("thali-001"));
}

/// CONTRACT: The user config applies when the project has none.
#[test]
fn contract_user_config_is_fallback() {
    let env = TestEnv::new().with_user_config("[listing]\ndefault_sort = \"name\"\n");

    let result = env.run(&["--json", "list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.json()["sort"], "name");
}

/// CONTRACT: A project config shadows the user config entirely.
#[test]
fn contract_project_config_shadows_user_config() {
    let env = TestEnv::new()
        .with_user_config("[listing]\ndefault_sort = \"name\"\n")
        .with_project_config("[listing]\ndefault_sort = \"price-low\"\n");

    let result = env.run(&["--json", "list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.json()["sort"], "price-low");
}

/// CONTRACT: PUJAN_* variables override the config file; flags override both.
#[test]
fn contract_env_then_flags_override_config() {
    let env = TestEnv::new().with_project_config("[listing]\ndefault_sort = \"price-high\"\n");

    let from_env = env.run_with_env(&["--json", "list"], &[("PUJAN_SORT", "rating")]);
    assert!(from_env.is_success(), "{}", from_env.combined_output());
    assert_eq!(from_env.json()["sort"], "rating");

    let from_flag = env.run_with_env(
        &["--json", "list", "--sort", "name"],
        &[("PUJAN_SORT", "rating")],
    );
    assert!(from_flag.is_success(), "{}", from_flag.combined_output());
    assert_eq!(from_flag.json()["sort"], "name");
}

/// CONTRACT: Unparseable PUJAN_* values are ignored, not fatal.
#[test]
fn contract_garbage_env_is_ignored() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["--json", "list"],
        &[("PUJAN_SORT", "cheapest"), ("PUJAN_PRICE_CEILING", "lots")],
    );

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.json()["sort"], "featured");
    assert_eq!(listed(&result.json()).len(), 8);
}

/// CONTRACT: catalog.path and PUJAN_CATALOG both select a JSON catalog.
#[test]
fn contract_catalog_path_from_config_and_env() {
    let env = TestEnv::new().with_project_config("[catalog]\npath = \"abc.json\"\n");
    env.write_project_file("abc.json", ABC_CATALOG_JSON);

    let from_config = env.run(&["--json", "list"]);
    assert!(from_config.is_success(), "{}", from_config.combined_output());
    assert_eq!(listed(&from_config.json()), vec!["A", "B", "C"]);

    let plain = TestEnv::new();
    plain.write_project_file("abc.json", ABC_CATALOG_JSON);
    let from_env = plain.run_with_env(&["--json", "list"], &[("PUJAN_CATALOG", "abc.json")]);
    assert!(from_env.is_success(), "{}", from_env.combined_output());
    assert_eq!(listed(&from_env.json()), vec!["A", "B", "C"]);
}

/// CONTRACT: The price ceiling bounds the default price range.
#[test]
fn contract_price_ceiling_bounds_default_listing() {
    let env = TestEnv::new().with_project_config("[listing]\nprice_ceiling = 500\n");

    let result = env.run(&["--json", "list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let ids = listed(&result.json());
    assert_eq!(ids.len(), 7);
    assert!(!ids.contains(&"thali-001".to_string()));
}

/// CONTRACT: Unknown keys warn with a suggestion but do not fail.
#[test]
fn contract_unknown_key_warns() {
    let env = TestEnv::new().with_project_config("[listing]\ndefault_srot = \"name\"\n");

    let result = env.run(&["--json", "list"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("unknown config key"), "{}", result.stderr);
    assert!(result.stderr.contains("default_srot"), "{}", result.stderr);
    assert!(result.stderr.contains("default_sort"), "{}", result.stderr);
    assert_eq!(result.json()["sort"], "featured");
}

/// CONTRACT: A config file that does not parse stops the run.
#[test]
fn contract_broken_config_fails() {
    let env = TestEnv::new().with_project_config("[listing]\ndefault_sort = \"cheapest\"\n");

    let result = env.run(&["list"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}

/// CONTRACT: An explicit --config that does not exist is an error.
#[test]
fn contract_missing_explicit_config_fails() {
    let env = TestEnv::new();

    let result = env.run(&["--config", "nowhere.toml", "list"]);

    assert_eq!(result.exit_code, 1);
}

/// CONTRACT: auth.expected_code restricts which code verifies.
#[test]
fn contract_expected_code_is_enforced() {
    let env = TestEnv::new().with_project_config("[auth]\nexpected_code = \"111111\"\n");
    let sign_in = |otp: &str| {
        env.run(&[
            "--json",
            "cart",
            "add:coconut-001",
            "--phone",
            "9876543210",
            "--otp",
            otp,
            "--name",
            "Asha",
        ])
    };

    let wrong = sign_in("123456");
    assert_eq!(wrong.exit_code, 1);
    assert_eq!(wrong.json()["event"], "error");

    let right = sign_in("111111");
    assert!(right.is_success(), "{}", right.combined_output());
    assert_eq!(right.json()["user"]["name"], "Asha");
}
