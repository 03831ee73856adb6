//! Integration tests for cart behaviour through the store context.

#![allow(clippy::unwrap_used)]

use sneakerhub_core::{
    CartLine, CartStore, MemoryStore, Price, Product, ProductCatalog, ProductId, StoreContext,
};

fn context() -> StoreContext<MemoryStore> {
    StoreContext::new(ProductCatalog::builtin(), MemoryStore::new())
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn test_count_matches_sum_of_distinct_adds() {
    let quantities = [(1, 3_i64), (2, 1), (3, 7)];
    let mut ctx = context();
    for (id, qty) in quantities {
        ctx.add_product(ProductId::new(id), qty).unwrap();
    }

    let cart = ctx.cart();
    assert_eq!(cart.items().len(), quantities.len());
    assert_eq!(
        cart.cart_item_count(),
        quantities.iter().map(|(_, q)| q).sum::<i64>()
    );
}

#[test]
fn test_repeated_adds_keep_one_line_per_product() {
    let mut ctx = context();
    for _ in 0..5 {
        ctx.add_product(ProductId::new(2), 1).unwrap();
        ctx.add_product(ProductId::new(3), 2).unwrap();
    }
    let cart = ctx.cart();
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.line(ProductId::new(2)).unwrap().quantity, 5);
    assert_eq!(cart.line(ProductId::new(3)).unwrap().quantity, 10);
}

#[test]
fn test_two_then_three_is_five() {
    let mut ctx = context();
    ctx.add_product(ProductId::new(1), 2).unwrap();
    ctx.add_product(ProductId::new(1), 3).unwrap();
    assert_eq!(ctx.cart().items().len(), 1);
    assert_eq!(ctx.cart().cart_item_count(), 5);
}

#[test]
fn test_total_price_for_mixed_cart() {
    let mut cart = CartStore::new();
    let a = Product::new(ProductId::new(10), "A", "", Price::from(150), "a.png");
    let b = Product::new(ProductId::new(11), "B", "", Price::from(160), "b.png");
    cart.add_to_cart(&a, 1);
    cart.add_to_cart(&b, 2);
    assert_eq!(cart.total_cart_price(), Price::from(470));
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_remove_unknown_leaves_cart_unchanged() {
    let mut ctx = context();
    ctx.add_product(ProductId::new(1), 1).unwrap();
    let before = ctx.cart().clone();
    ctx.cart_mut().remove_from_cart(ProductId::new(77));
    assert_eq!(ctx.cart(), &before);
}

#[test]
fn test_update_to_zero_keeps_line() {
    let mut ctx = context();
    ctx.add_product(ProductId::new(1), 4).unwrap();
    ctx.cart_mut().update_quantity(ProductId::new(1), 0);
    assert_eq!(ctx.cart().items().len(), 1);
    assert_eq!(ctx.cart().line(ProductId::new(1)).unwrap().quantity, 0);
}

#[test]
fn test_set_cart_items_trusts_caller() {
    let catalog = ProductCatalog::builtin();
    let jordan = catalog.get(ProductId::new(1)).unwrap();
    let mut cart = CartStore::new();
    cart.set_cart_items(vec![
        CartLine::from_product(jordan, 1),
        CartLine::from_product(jordan, 1),
    ]);
    // Duplicates are kept; a later add merges into the first one found
    cart.add_to_cart(jordan, 2);
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.items().first().unwrap().quantity, 3);
    assert_eq!(cart.cart_item_count(), 4);
}

#[test]
fn test_cart_lines_survive_json_round_trip() {
    let mut ctx = context();
    ctx.add_product(ProductId::new(2), 2).unwrap();
    ctx.add_product(ProductId::new(3), 1).unwrap();

    let json = serde_json::to_string(ctx.cart().items()).unwrap();
    let lines: Vec<CartLine> = serde_json::from_str(&json).unwrap();

    let mut restored = CartStore::new();
    restored.set_cart_items(lines);
    assert_eq!(&restored, ctx.cart());
    assert_eq!(restored.total_cart_price(), Price::from(430));
}

#[test]
fn test_checkout_then_sign_out() {
    let mut ctx = context();
    ctx.session_mut().login("tok", false, "u1", "a@b.com");
    ctx.add_product(ProductId::new(1), 1).unwrap();

    let summary = ctx.complete_checkout();
    assert_eq!(summary.total, Price::from(150));
    assert!(ctx.cart().is_empty());
    assert!(ctx.session().is_logged_in());

    ctx.add_product(ProductId::new(2), 1).unwrap();
    ctx.sign_out();
    assert!(ctx.cart().is_empty());
    assert!(!ctx.session().is_logged_in());
}
