//! 收藏夹管理器
//!
//! 存储为序列，语义上是以 `product_category` 为键的集合。
//! 不缓存内存副本：每次查询都从存储读取，页面重载后按存储重新绑定按钮状态。

use crate::store::{KeyValueStore, PersistedStore};
use crate::{FavoriteEntry, ProductRef, identity_key};

pub const ADD_FAVORITE_LABEL: &str = "Add to favorites";
pub const REMOVE_FAVORITE_LABEL: &str = "Remove from favorites";

#[derive(Debug, Clone)]
pub struct FavoritesManager<S> {
    store: PersistedStore<S>,
    key: String,
}

impl<S: KeyValueStore> FavoritesManager<S> {
    pub fn new(store: PersistedStore<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn list(&self) -> Vec<FavoriteEntry> {
        self.store.load_or_default(&self.key)
    }

    /// 切换收藏状态，返回切换后的状态
    ///
    /// 已存在则移除第一个匹配项，否则追加到末尾。连续调用两次恢复原状。
    pub fn toggle(&self, product: &str, category: &str) -> bool {
        let mut favorites = self.list();
        let key = identity_key(product, category);

        let active = match favorites.iter().position(|e| e.identity_key() == key) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(ProductRef::new(product, category));
                true
            }
        };

        self.store.save(&self.key, &favorites);
        log::debug!("favorites: {} -> {}", key, active);
        active
    }

    pub fn is_favorite(&self, product: &str, category: &str) -> bool {
        let key = identity_key(product, category);
        self.list().iter().any(|e| e.identity_key() == key)
    }

    /// 收藏按钮的 `aria-label`
    pub fn aria_label(&self, product: &str, category: &str) -> &'static str {
        if self.is_favorite(product, category) {
            REMOVE_FAVORITE_LABEL
        } else {
            ADD_FAVORITE_LABEL
        }
    }
}
