use super::*;
use crate::store::MemoryStore;
use std::sync::{Arc, Mutex};

fn create_storefront(backend: &MemoryStore) -> Storefront<MemoryStore> {
    Storefront::new(backend.clone(), StorefrontConfig::default())
}

fn recorder(storefront: &mut Storefront<MemoryStore>) -> Arc<Mutex<Vec<StateChange>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    storefront.subscribe(move |change| sink.lock().unwrap().push(change.clone()));
    seen
}

fn add(product: &str, category: &str, price: f64) -> Command {
    Command::AddToCart {
        product: product.to_string(),
        category: category.to_string(),
        price: Some(price),
    }
}

#[test]
fn test_dispatch_notifies_listeners_in_order() {
    let backend = MemoryStore::new();
    let mut storefront = create_storefront(&backend);
    let seen = recorder(&mut storefront);

    storefront.dispatch(add("AeroFlex Jacket", "mens", 129.99));
    storefront.dispatch(Command::RecordView {
        product: "AeroFlex Jacket".to_string(),
        category: "mens".to_string(),
    });
    storefront.dispatch(Command::ClearCart);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(matches!(&seen[0], StateChange::Cart(state) if state.count == 1));
    assert!(matches!(&seen[1], StateChange::Viewed(list) if list.len() == 1));
    assert_eq!(seen[2], StateChange::Cart(CartState::default()));
}

#[test]
fn test_dispatch_returns_same_changes_as_notified() {
    let backend = MemoryStore::new();
    let mut storefront = create_storefront(&backend);
    let seen = recorder(&mut storefront);

    let changes = storefront.dispatch(Command::ToggleFavorite {
        product: "Arc Parka".to_string(),
        category: "mens".to_string(),
    });

    assert_eq!(*seen.lock().unwrap(), changes);
    assert_eq!(
        changes,
        vec![StateChange::Favorites {
            toggled: ProductRef::new("Arc Parka", "mens"),
            active: true,
            entries: vec![ProductRef::new("Arc Parka", "mens")],
        }]
    );
}

#[test]
fn test_managers_share_one_backend() {
    let backend = MemoryStore::new();
    let mut storefront = create_storefront(&backend);

    storefront.dispatch(add("Nova Playset", "kids", 59.99));
    storefront.dispatch(Command::ToggleFavorite {
        product: "Nova Playset".to_string(),
        category: "kids".to_string(),
    });
    storefront.dispatch(Command::RecordView {
        product: "Nova Playset".to_string(),
        category: "kids".to_string(),
    });
    storefront.dispatch(Command::Login {
        email: "kid@pulse.example".to_string(),
    });

    assert!(backend.raw("pulseThreadsCart").is_some());
    assert!(backend.raw("pulseThreadsFavorites").is_some());
    assert!(backend.raw("PulseRecentlyViewed").is_some());
    assert!(backend.raw("PulseUser").is_some());
    assert_eq!(backend.len(), 4);

    let reopened = create_storefront(&backend);
    assert_eq!(reopened.cart().state().count, 1);
    assert!(reopened.favorites().is_favorite("Nova Playset", "kids"));
    assert!(reopened.session().is_logged_in());
}

#[test]
fn test_login_then_logout() {
    let backend = MemoryStore::new();
    let mut storefront = create_storefront(&backend);

    let changes = storefront.dispatch(Command::Login {
        email: "a@pulse.example".to_string(),
    });
    assert_eq!(changes, vec![StateChange::Session { logged_in: true }]);

    let changes = storefront.dispatch(Command::Logout);
    assert_eq!(changes, vec![StateChange::Session { logged_in: false }]);
    assert!(!storefront.session().is_logged_in());
}

#[test]
fn test_snapshot_reflects_storage() {
    let backend = MemoryStore::new()
        .with_entry("PulseUser", r#"{"loggedIn":true}"#)
        .with_entry("pulseThreadsFavorites", r#"[{"product":"Arc Parka","category":"mens"}]"#)
        .with_entry("PulseRecentlyViewed", r#"[{"product":"Studio Pack","category":"discount"}]"#);
    let storefront = create_storefront(&backend);

    let snapshot = storefront.snapshot();
    assert_eq!(
        snapshot,
        vec![
            StateChange::Cart(CartState::default()),
            StateChange::FavoritesList(vec![ProductRef::new("Arc Parka", "mens")]),
            StateChange::Viewed(vec![ProductRef::new("Studio Pack", "discount")]),
            StateChange::Session { logged_in: true },
        ]
    );
}

#[test]
fn test_reload_broadcasts_external_changes() {
    let backend = MemoryStore::new();
    let mut storefront = create_storefront(&backend);
    storefront.dispatch(add("Arc Parka", "mens", 179.99));
    let seen = recorder(&mut storefront);

    backend.set("pulseThreadsCart", r#"{"count":0,"items":[]}"#);
    storefront.reload();

    assert_eq!(storefront.cart().state().count, 0);
    assert_eq!(seen.lock().unwrap()[0], StateChange::Cart(CartState::default()));
}

#[test]
fn test_reload_broadcasts_external_favorites() {
    let backend = MemoryStore::new();
    let mut storefront = create_storefront(&backend);
    let seen = recorder(&mut storefront);

    // 另一个标签页收藏了一件商品
    backend.set("pulseThreadsFavorites", r#"[{"product":"Nova Playset","category":"kids"}]"#);
    storefront.reload();

    assert!(
        seen.lock()
            .unwrap()
            .contains(&StateChange::FavoritesList(vec![ProductRef::new("Nova Playset", "kids")]))
    );
}

#[test]
fn test_custom_config_keys_are_used() {
    let backend = MemoryStore::new();
    let config = StorefrontConfig {
        cart_key: "stagingCart".to_string(),
        ..StorefrontConfig::default()
    };
    let mut storefront = Storefront::new(backend.clone(), config);

    storefront.dispatch(add("Halo Knit Set", "womens", 119.99));

    assert!(backend.raw("stagingCart").is_some());
    assert!(backend.raw("pulseThreadsCart").is_none());
}
