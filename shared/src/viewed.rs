//! 最近浏览
//!
//! 最新的在前，按商品名去重（保留最新一次），最多保留 `limit` 条。
//! 持久化的永远是截断后的列表，不保存无界历史。

use std::collections::HashSet;

use crate::store::{KeyValueStore, PersistedStore};
use crate::{ProductRef, ViewedEntry};

#[derive(Debug, Clone)]
pub struct RecentlyViewed<S> {
    store: PersistedStore<S>,
    key: String,
    limit: usize,
}

impl<S: KeyValueStore> RecentlyViewed<S> {
    pub fn new(store: PersistedStore<S>, key: impl Into<String>, limit: usize) -> Self {
        Self {
            store,
            key: key.into(),
            limit,
        }
    }

    /// 按存储原样返回，最新的在前
    pub fn list(&self) -> Vec<ViewedEntry> {
        self.store.load_or_default(&self.key)
    }

    /// 记录一次浏览，返回持久化后的列表
    pub fn record(&self, product: &str, category: &str) -> Vec<ViewedEntry> {
        let mut list = self.list();
        list.insert(0, ProductRef::new(product, category));

        let mut seen = HashSet::new();
        list.retain(|entry| seen.insert(entry.product.clone()));
        list.truncate(self.limit);

        self.store.save(&self.key, &list);
        log::debug!("viewed: recorded {}, {} entries", product, list.len());
        list
    }
}
