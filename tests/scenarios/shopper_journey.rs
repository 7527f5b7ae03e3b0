//! A shopper browsing the bundled catalog, filling a cart and checking out.

use pujan::application::{AuthFlow, StorefrontEvent};
use pujan::domain::ports::CatalogSource;
use pujan::infrastructure::{BundledCatalog, MockAuthService};
use pujan::{StorefrontAction as A, StorefrontState};

use crate::common::TestEnv;

#[test]
fn browse_fill_cart_sign_in_and_check_out() {
    let catalog = BundledCatalog.load().unwrap();
    let mut state = StorefrontState::default();

    // Browse the Diya category, cheapest first.
    for action in [
        A::SelectCategory("Diya & Tila".to_string()),
        A::SetSort(pujan::SortKey::PriceLow),
    ] {
        state = state.apply(&catalog, action).state;
    }
    let listed: Vec<String> = pujan::filter_and_sort(&catalog, &state.query())
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(listed, vec!["diya-001", "diya-002"]);

    // The thali set has 8 in stock; asking for 10 caps the line.
    let step = state.apply(
        &catalog,
        A::AddToCart {
            product_id: "thali-001".to_string(),
            quantity: 10,
        },
    );
    assert!(step.events.contains(&StorefrontEvent::QuantityCapped {
        product_id: "thali-001".to_string(),
        requested: 10,
        max: 8,
    }));
    state = step.state;

    state = state
        .apply(
            &catalog,
            A::AddToCart {
                product_id: "diya-001".to_string(),
                quantity: 2,
            },
        )
        .state;
    assert_eq!(state.cart_badge(), 10);

    // Sold out products never enter the cart.
    let step = state.apply(
        &catalog,
        A::AddToCart {
            product_id: "incense-002".to_string(),
            quantity: 1,
        },
    );
    assert_eq!(
        step.events,
        vec![StorefrontEvent::OutOfStock {
            product_id: "incense-002".to_string()
        }]
    );
    state = step.state;

    let step = state.apply(&catalog, A::Checkout);
    assert_eq!(step.events, vec![StorefrontEvent::CheckoutRequiresAuth]);
    state = step.state;

    let auth = MockAuthService::new();
    let mut flow = AuthFlow::new(&auth);
    flow.submit_phone("98765 43210").unwrap();
    flow.submit_code("123456").unwrap();
    let user = flow.complete_profile("Asha", None).unwrap();
    state = state.apply(&catalog, A::SignedIn(user)).state;

    let step = state.apply(&catalog, A::Checkout);
    assert_eq!(
        step.events,
        vec![StorefrontEvent::CheckoutStarted {
            item_count: 10,
            total: 8.0 * 899.0 + 2.0 * 299.0,
        }]
    );
    assert_eq!(step.state.cart.len(), 2);
}

#[test]
fn wishlist_toggles_on_and_off() {
    let catalog = BundledCatalog.load().unwrap();
    let toggle = || A::ToggleWishlist {
        product_id: "chandan-001".to_string(),
    };

    let first = StorefrontState::default().apply(&catalog, toggle());
    assert_eq!(
        first.events,
        vec![StorefrontEvent::WishlistAdded {
            product_id: "chandan-001".to_string()
        }]
    );

    let second = first.state.apply(&catalog, toggle());
    assert_eq!(
        second.events,
        vec![StorefrontEvent::WishlistRemoved {
            product_id: "chandan-001".to_string()
        }]
    );
}

#[test]
fn cli_cart_checkout_with_sign_in() {
    let env = TestEnv::new();

    let result = env.run(&[
        "--json",
        "cart",
        "add:thali-001:10",
        "add:coconut-001:3",
        "set:coconut-001:-1",
        "--checkout",
        "--phone",
        "9876543210",
        "--otp",
        "123456",
        "--name",
        "Asha",
    ]);

    assert!(result.is_success(), "{}", result.combined_output());
    let json = result.json();
    assert_eq!(json["command"], "cart");
    assert_eq!(json["item_count"], 8);
    assert_eq!(json["total"], 7192.0);
    assert_eq!(json["user"]["name"], "Asha");

    let events: Vec<&str> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        events,
        vec![
            "signed-in",
            "quantity-capped",
            "added-to-cart",
            "added-to-cart",
            "removed-from-cart",
            "checkout-started",
        ]
    );
}

#[test]
fn cli_checkout_without_sign_in_is_refused_politely() {
    let env = TestEnv::new();

    let result = env.run(&["cart", "add:coconut-001", "--checkout"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Added to Cart: Sacred Coconut (Fresh) (now 1)"));
    assert!(result.stdout.contains("Sign in to check out"), "{}", result.stdout);
}
