//! 店面门面：命令分发与状态变更通知
//!
//! 视图层只发送 `Command`，由对应的管理器处理并持久化，
//! 然后把 `StateChange` 推送给所有订阅者。整个流程在一次同步调用内完成。

use crate::cart::CartManager;
use crate::config::StorefrontConfig;
use crate::favorites::FavoritesManager;
use crate::session::SessionReader;
use crate::store::{KeyValueStore, PersistedStore};
use crate::viewed::RecentlyViewed;
use crate::{CartState, ProductRef};

/// 视图层可以发出的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddToCart {
        product: String,
        category: String,
        /// `None` 表示按目录定价
        price: Option<f64>,
    },
    ClearCart,
    ToggleFavorite {
        product: String,
        category: String,
    },
    RecordView {
        product: String,
        category: String,
    },
    Login {
        email: String,
    },
    Logout,
}

/// 命令执行后的状态变更
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    Cart(CartState),
    Favorites {
        toggled: ProductRef,
        active: bool,
        entries: Vec<ProductRef>,
    },
    /// 快照中的完整收藏列表
    FavoritesList(Vec<ProductRef>),
    Viewed(Vec<ProductRef>),
    Session {
        logged_in: bool,
    },
}

type Listener = Box<dyn FnMut(&StateChange) + Send + Sync>;

/// 一个页面生命周期内唯一的状态持有者
///
/// 页面启动时构造，导航离开时丢弃。没有模块级单例。
pub struct Storefront<S> {
    config: StorefrontConfig,
    cart: CartManager<S>,
    favorites: FavoritesManager<S>,
    viewed: RecentlyViewed<S>,
    session: SessionReader<S>,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore + Clone> Storefront<S> {
    pub fn new(backend: S, config: StorefrontConfig) -> Self {
        let store = PersistedStore::new(backend);
        Self {
            cart: CartManager::new(store.clone(), config.cart_key.as_str()),
            favorites: FavoritesManager::new(store.clone(), config.favorites_key.as_str()),
            viewed: RecentlyViewed::new(
                store.clone(),
                config.viewed_key.as_str(),
                config.viewed_limit,
            ),
            session: SessionReader::new(
                store,
                config.session_key.as_str(),
                config.login_page.as_str(),
            ),
            config,
            listeners: Vec::new(),
        }
    }
}

impl<S: KeyValueStore> Storefront<S> {
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartManager<S> {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoritesManager<S> {
        &self.favorites
    }

    pub fn viewed(&self) -> &RecentlyViewed<S> {
        &self.viewed
    }

    pub fn session(&self) -> &SessionReader<S> {
        &self.session
    }

    /// 注册状态变更监听
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StateChange) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// 执行命令并通知监听者
    pub fn dispatch(&mut self, command: Command) -> Vec<StateChange> {
        let changes = self.apply(command);
        for change in &changes {
            for listener in &mut self.listeners {
                listener(change);
            }
        }
        changes
    }

    /// 当前全部状态，用于首次渲染
    pub fn snapshot(&self) -> Vec<StateChange> {
        vec![
            StateChange::Cart(self.cart.state().clone()),
            StateChange::FavoritesList(self.favorites.list()),
            StateChange::Viewed(self.viewed.list()),
            StateChange::Session {
                logged_in: self.session.is_logged_in(),
            },
        ]
    }

    /// 从存储重新加载购物车并广播全部状态
    pub fn reload(&mut self) -> Vec<StateChange> {
        self.cart.reload();
        let changes = self.snapshot();
        for change in &changes {
            for listener in &mut self.listeners {
                listener(change);
            }
        }
        changes
    }

    fn apply(&mut self, command: Command) -> Vec<StateChange> {
        match command {
            Command::AddToCart {
                product,
                category,
                price,
            } => {
                let state = self.cart.add_item(&product, &category, price);
                vec![StateChange::Cart(state.clone())]
            }
            Command::ClearCart => {
                let state = self.cart.clear();
                vec![StateChange::Cart(state.clone())]
            }
            Command::ToggleFavorite { product, category } => {
                let active = self.favorites.toggle(&product, &category);
                vec![StateChange::Favorites {
                    toggled: ProductRef::new(product, category),
                    active,
                    entries: self.favorites.list(),
                }]
            }
            Command::RecordView { product, category } => {
                vec![StateChange::Viewed(self.viewed.record(&product, &category))]
            }
            Command::Login { email } => {
                let session = self.session.login(&email);
                vec![StateChange::Session {
                    logged_in: session.logged_in,
                }]
            }
            Command::Logout => {
                self.session.logout();
                vec![StateChange::Session { logged_in: false }]
            }
        }
    }
}

#[cfg(test)]
mod tests;
