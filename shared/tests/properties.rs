use proptest::prelude::*;
use pulse_shared::{
    CartManager, CartState, FavoritesManager, MemoryStore, PersistedStore, ProductRef,
    RecentlyViewed,
};
use std::collections::HashSet;

fn product_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "AeroFlex Jacket",
        "Arc Parka",
        "Nova Playset",
        "Studio Pack",
        "Halo Knit Set",
        "Prism Rain Kit",
        "Mystery Scarf",
        "Weekender Bundle",
    ])
    .prop_map(str::to_string)
}

fn category() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["mens", "womens", "kids", "discount", "limited"])
        .prop_map(str::to_string)
}

proptest! {
    #[test]
    fn cart_count_matches_items_and_total_matches_prices(
        adds in prop::collection::vec((product_name(), category(), 0u32..100_000), 0..40)
    ) {
        let backend = MemoryStore::new();
        let mut cart = CartManager::new(PersistedStore::new(backend.clone()), "cart");
        let mut expected = 0.0;

        for (product, category, cents) in &adds {
            let price = f64::from(*cents) / 100.0;
            expected += price;
            let state = cart.add_item(product, category, Some(price));
            prop_assert_eq!(state.count as usize, state.items.len());
        }

        prop_assert!((cart.total() - expected).abs() < 1e-6);

        let reopened = CartManager::new(PersistedStore::new(backend), "cart");
        prop_assert_eq!(reopened.state(), cart.state());
    }

    #[test]
    fn cart_clear_always_empties(
        adds in prop::collection::vec((product_name(), category()), 0..20)
    ) {
        let mut cart = CartManager::new(PersistedStore::new(MemoryStore::new()), "cart");
        for (product, category) in &adds {
            cart.add_item(product, category, None);
        }
        prop_assert_eq!(cart.clear(), &CartState::default());
    }

    #[test]
    fn favorites_toggle_is_an_involution(
        seed in prop::collection::vec((product_name(), category()), 0..10),
        target in (product_name(), category())
    ) {
        let favorites = FavoritesManager::new(PersistedStore::new(MemoryStore::new()), "fav");
        for (product, category) in &seed {
            if !favorites.is_favorite(product, category) {
                favorites.toggle(product, category);
            }
        }
        let before = favorites.list();

        favorites.toggle(&target.0, &target.1);
        favorites.toggle(&target.0, &target.1);

        let mut after = favorites.list();
        let mut before_sorted = before.clone();
        after.sort_by_key(ProductRef::identity_key);
        before_sorted.sort_by_key(ProductRef::identity_key);
        prop_assert_eq!(after, before_sorted);
    }

    #[test]
    fn viewed_is_bounded_unique_and_newest_first(
        views in prop::collection::vec((product_name(), category()), 1..50)
    ) {
        let tracker = RecentlyViewed::new(PersistedStore::new(MemoryStore::new()), "viewed", 6);
        for (product, category) in &views {
            let list = tracker.record(product, category);
            prop_assert!(list.len() <= 6);
            prop_assert_eq!(&list[0].product, product);
            let unique: HashSet<_> = list.iter().map(|e| e.product.as_str()).collect();
            prop_assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn arbitrary_stored_text_never_panics(raw in ".*") {
        let backend = MemoryStore::new()
            .with_entry("cart", &raw)
            .with_entry("fav", &raw)
            .with_entry("viewed", &raw);
        let cart = CartManager::new(PersistedStore::new(backend.clone()), "cart");
        prop_assert_eq!(cart.state().count as usize, cart.state().items.len());
        let _ = FavoritesManager::new(PersistedStore::new(backend.clone()), "fav").list();
        let _ = RecentlyViewed::new(PersistedStore::new(backend), "viewed", 6).list();
    }
}
