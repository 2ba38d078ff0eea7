//! 店面状态上下文
//!
//! 持有页面内唯一的 `Storefront`，并把它的状态变更桥接到 Leptos 信号。
//! 组件只读信号渲染，只通过 `dispatch` 修改状态。

use crate::auth::AuthContext;
use crate::web::BrowserStorage;
use leptos::prelude::*;
use pulse_shared::{CartState, Command, ProductRef, StateChange, Storefront, StorefrontConfig};

#[derive(Clone, Copy)]
pub struct StorefrontContext {
    storefront: StoredValue<Storefront<BrowserStorage>>,
    /// 购物车
    pub cart: RwSignal<CartState>,
    /// 收藏夹
    pub favorites: RwSignal<Vec<ProductRef>>,
    /// 最近浏览
    pub viewed: RwSignal<Vec<ProductRef>>,
    pulse_millis: u32,
}

impl StorefrontContext {
    /// 构造状态持有者并订阅变更
    pub fn new(config: StorefrontConfig, auth: AuthContext) -> Self {
        let pulse_millis = config.pulse_millis;
        let mut storefront = Storefront::new(BrowserStorage, config);

        let cart = RwSignal::new(CartState::default());
        let favorites = RwSignal::new(Vec::new());
        let viewed = RwSignal::new(Vec::new());
        let set_auth = auth.set_state;

        let apply = move |change: &StateChange| match change {
            StateChange::Cart(state) => cart.set(state.clone()),
            StateChange::Favorites { entries, .. } => favorites.set(entries.clone()),
            StateChange::FavoritesList(entries) => favorites.set(entries.clone()),
            StateChange::Viewed(list) => viewed.set(list.clone()),
            StateChange::Session { logged_in } => {
                let logged_in = *logged_in;
                set_auth.update(|state| state.is_authenticated = logged_in);
            }
        };

        // 首次渲染用快照，之后靠订阅
        for change in storefront.snapshot() {
            apply(&change);
        }
        storefront.subscribe(apply);

        Self {
            storefront: StoredValue::new(storefront),
            cart,
            favorites,
            viewed,
            pulse_millis,
        }
    }

    /// 执行命令；状态变更通过订阅写入信号
    pub fn dispatch(&self, command: Command) {
        self.storefront.update_value(|storefront| {
            storefront.dispatch(command);
        });
    }

    /// 直接读取状态核心（不要在响应式闭包里调用）
    pub fn with<R>(&self, f: impl FnOnce(&Storefront<BrowserStorage>) -> R) -> R {
        self.storefront.with_value(f)
    }

    /// 某件商品是否已收藏，随收藏夹信号更新
    pub fn is_favorite(&self, product: &'static str, category: &'static str) -> Signal<bool> {
        let favorites = self.favorites;
        let key = pulse_shared::identity_key(product, category);
        Signal::derive(move || favorites.with(|list| list.iter().any(|e| e.identity_key() == key)))
    }

    pub fn pulse_millis(&self) -> u32 {
        self.pulse_millis
    }
}

/// 从 Context 获取店面状态
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext should be provided")
}
