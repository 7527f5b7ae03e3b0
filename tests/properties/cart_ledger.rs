//! Property tests for the cart ledger.

use std::collections::HashSet;

use proptest::prelude::*;

use pujan::domain::entities::{CartState, Product};

fn arb_product() -> impl Strategy<Value = Product> {
    (1u32..2000, prop::option::of(0u32..12)).prop_map(|(price, stock)| {
        let product = Product::new("diya-001", "Brass Diya", f64::from(price), "Diya & Tila");
        match stock {
            Some(stock) => product.with_stock(stock),
            None => product,
        }
    })
}

/// Three distinct products to run operation sequences against
fn arb_shelf() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 3).prop_map(|products| {
        products
            .into_iter()
            .enumerate()
            .map(|(i, product)| Product {
                id: format!("item-{i}"),
                ..product
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum CartOp {
    Add(usize, u32),
    Update(usize, i64),
    Remove(usize),
}

fn arb_op() -> impl Strategy<Value = CartOp> {
    prop_oneof![
        (0usize..4, 0u32..15).prop_map(|(i, q)| CartOp::Add(i, q)),
        (0usize..4, -3i64..15).prop_map(|(i, q)| CartOp::Update(i, q)),
        (0usize..4).prop_map(CartOp::Remove),
    ]
}

/// Index 3 names a product that is never in the shelf.
fn id_of(shelf: &[Product], index: usize) -> String {
    shelf
        .get(index)
        .map_or_else(|| "not-in-catalog".to_string(), |p| p.id.clone())
}

fn apply(cart: &CartState, shelf: &[Product], op: &CartOp) -> CartState {
    match op {
        CartOp::Add(i, q) => match shelf.get(*i) {
            Some(product) => cart.add_item(product, *q),
            None => cart.clone(),
        },
        CartOp::Update(i, q) => cart.update_quantity(&id_of(shelf, *i), *q),
        CartOp::Remove(i) => cart.remove_item(&id_of(shelf, *i)),
    }
}

fn replay(shelf: &[Product], ops: &[CartOp]) -> CartState {
    ops.iter()
        .fold(CartState::new(), |cart, op| apply(&cart, shelf, op))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Two adds merge into one line holding min(q1 + q2, max).
    #[test]
    fn property_adds_merge_and_clamp(product in arb_product(), q1 in 0u32..20, q2 in 0u32..20) {
        let cart = CartState::new().add_item(&product, q1).add_item(&product, q2);
        let expected = match product.stock_count {
            Some(max) => (q1 + q2).min(max),
            None => q1 + q2,
        };

        if expected == 0 {
            prop_assert!(cart.is_empty());
        } else {
            prop_assert_eq!(cart.len(), 1);
            prop_assert_eq!(cart.line(&product.id).map(|l| l.quantity), Some(expected));
        }
    }

    /// PROPERTY: The total always equals the sum of unit price times quantity.
    #[test]
    fn property_total_is_consistent(
        shelf in arb_shelf(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let mut cart = CartState::new();
        for op in &ops {
            cart = apply(&cart, &shelf, op);
            let expected: f64 = cart.iter().map(|l| l.unit_price * f64::from(l.quantity)).sum();
            prop_assert!((cart.total_amount() - expected).abs() < 1e-6);
            let units: u64 = cart.iter().map(|l| u64::from(l.quantity)).sum();
            prop_assert_eq!(cart.total_item_count(), units);
        }
    }

    /// PROPERTY: Lines are unique per product, hold at least one unit, and respect stock.
    #[test]
    fn property_lines_stay_well_formed(
        shelf in arb_shelf(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let cart = replay(&shelf, &ops);
        let mut seen = HashSet::new();
        for line in cart.iter() {
            prop_assert!(seen.insert(line.product_id.clone()), "duplicate line {}", line.product_id);
            prop_assert!(line.quantity >= 1);
            if let Some(max) = line.max_quantity {
                prop_assert!(line.quantity <= max);
            }
        }
    }

    /// PROPERTY: Updating a quantity to zero or below is the same as removing the line.
    #[test]
    fn property_zero_quantity_is_removal(
        shelf in arb_shelf(),
        ops in prop::collection::vec(arb_op(), 0..20),
        index in 0usize..4,
        quantity in -5i64..=0,
    ) {
        let cart = replay(&shelf, &ops);
        let id = id_of(&shelf, index);
        prop_assert_eq!(cart.update_quantity(&id, quantity), cart.remove_item(&id));
    }

    /// PROPERTY: Operations never mutate the state they were called on.
    #[test]
    fn property_operations_leave_input_untouched(
        shelf in arb_shelf(),
        ops in prop::collection::vec(arb_op(), 1..20),
    ) {
        let before = replay(&shelf, &ops[..ops.len() - 1]);
        let snapshot = before.clone();
        let _after = apply(&before, &shelf, &ops[ops.len() - 1]);
        prop_assert_eq!(before, snapshot);
    }
}
