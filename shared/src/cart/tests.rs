use super::*;
use crate::store::MemoryStore;

const KEY: &str = "pulseThreadsCart";

fn create_cart(backend: &MemoryStore) -> CartManager<MemoryStore> {
    CartManager::new(PersistedStore::new(backend.clone()), KEY)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =========================================================
// add_item 测试
// =========================================================

#[test]
fn test_add_two_products_scenario() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);

    cart.add_item("AeroFlex Jacket", "mens", Some(129.99));
    cart.add_item("Nova Playset", "kids", Some(59.99));

    assert_eq!(cart.state().count, 2);
    assert_eq!(cart.state().items.len(), 2);
    assert_close(cart.total(), 189.98);

    match cart.view() {
        CartView::Items { rows, total } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].product, "AeroFlex Jacket");
            assert_eq!(rows[0].price, "$129.99");
            assert_eq!(rows[0].label, "Menswear pick");
            assert_eq!(rows[1].product, "Nova Playset");
            assert_eq!(rows[1].price, "$59.99");
            assert_eq!(rows[1].label, "Kidswear pick");
            assert_eq!(total, "$189.98");
        }
        CartView::Empty => panic!("cart should not be empty"),
    }
}

#[test]
fn test_duplicate_adds_create_separate_lines() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);

    cart.add_item("Arc Parka", "mens", Some(179.99));
    cart.add_item("Arc Parka", "mens", Some(179.99));

    assert_eq!(cart.state().count, 2);
    assert_eq!(cart.state().items[0], cart.state().items[1]);
}

#[test]
fn test_missing_price_uses_catalog() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);

    cart.add_item("Weekender Bundle", "discount", None);
    cart.add_item("Mystery Scarf", "mens", None);

    assert_eq!(cart.state().items[0].price, Some(249.99));
    assert_eq!(cart.state().items[1].price, Some(0.0));
    assert_close(cart.total(), 249.99);
}

#[test]
fn test_negative_price_is_clamped() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);

    cart.add_item("Rogue Item", "mens", Some(-5.0));
    cart.add_item("NaN Item", "mens", Some(f64::NAN));

    assert_eq!(cart.state().items[0].price, Some(0.0));
    assert_eq!(cart.state().items[1].price, Some(0.0));
    assert_close(cart.total(), 0.0);
}

#[test]
fn test_supplied_zero_or_negative_price_skips_catalog() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);

    cart.add_item("AeroFlex Jacket", "mens", Some(0.0));
    assert_close(cart.total(), 0.0);

    cart.add_item("AeroFlex Jacket", "mens", Some(-5.0));
    assert_eq!(cart.state().items[1].price, Some(0.0));
    assert_close(cart.total(), 0.0);

    let CartView::Items { rows, total } = cart.view() else {
        panic!("expected items");
    };
    assert_eq!(rows[0].price, "$0.00");
    assert_eq!(total, "$0.00");
}

#[test]
fn test_add_persists_immediately() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);

    cart.add_item("Studio Pack", "discount", Some(129.99));

    let reopened = create_cart(&backend);
    assert_eq!(reopened.state(), cart.state());
    assert_eq!(
        backend.raw(KEY).as_deref(),
        Some(r#"{"count":1,"items":[{"product":"Studio Pack","category":"discount","price":129.99}]}"#)
    );
}

// =========================================================
// clear / view 测试
// =========================================================

#[test]
fn test_clear_resets_and_persists() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);
    cart.add_item("Halo Knit Set", "womens", Some(119.99));

    let state = cart.clear().clone();

    assert_eq!(state, CartState::default());
    assert_eq!(backend.raw(KEY).as_deref(), Some(r#"{"count":0,"items":[]}"#));
    assert_eq!(cart.view(), CartView::Empty);
    assert!(!cart.view().checkout_visible());
}

#[test]
fn test_view_labels_and_checkout() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);
    cart.add_item("Lumen Slip Dress", "womens", Some(89.99));
    cart.add_item("Bundle Boost Pack", "discount", Some(199.99));
    cart.add_item("Pop-up Tee", "limited", Some(25.0));

    let view = cart.view();
    assert!(view.checkout_visible());
    let CartView::Items { rows, .. } = view else {
        panic!("expected items");
    };
    let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, ["Womenswear pick", "Discount deal", "Fresh drop"]);
}

// =========================================================
// 加载与损坏处理
// =========================================================

#[test]
fn test_stored_items_without_price_fall_back_to_catalog() {
    let backend = MemoryStore::new().with_entry(
        KEY,
        r#"{"count":3,"items":[
            {"product":"Prism Rain Kit","category":"kids"},
            {"product":"Aster Knit Dress","category":"womens","price":0},
            {"product":"Ghost Item","category":"mens","price":null}
        ]}"#,
    );
    let cart = create_cart(&backend);

    assert_eq!(cart.state().count, 3);
    assert_close(cart.total(), 49.99);
    let CartView::Items { rows, total } = cart.view() else {
        panic!("expected items");
    };
    assert_eq!(rows[0].price, "$49.99");
    assert_eq!(rows[1].price, "$0.00");
    assert_eq!(rows[2].price, "$0.00");
    assert_eq!(total, "$49.99");
}

#[test]
fn test_corrupt_cart_loads_empty() {
    for raw in [
        "not json",
        "null",
        "[]",
        r#"{"count":-1,"items":[]}"#,
        r#"{"count":2,"items":[{"product":"Arc Parka","category":"mens","price":1}]}"#,
        r#"{"count":1,"items":[{"product":"Arc Parka","category":"mens","price":-3}]}"#,
    ] {
        let backend = MemoryStore::new().with_entry(KEY, raw);
        let cart = create_cart(&backend);
        assert_eq!(cart.state(), &CartState::default(), "raw value {:?}", raw);
    }
}

#[test]
fn test_reload_picks_up_external_write() {
    let backend = MemoryStore::new();
    let mut cart = create_cart(&backend);
    cart.add_item("Solace Trench", "mens", Some(189.99));

    // 另一个标签页清空了购物车
    backend.set(KEY, r#"{"count":0,"items":[]}"#);
    assert_eq!(cart.state().count, 1);

    cart.reload();
    assert_eq!(cart.state().count, 0);
}
