//! 购物车管理器
//!
//! 每次加入都追加一行（同一商品加两次就是两行，不合并数量），
//! 并在同一次调用里完成持久化，内存状态与存储不会出现可观察的分歧。

use crate::catalog::{self, category_label, format_price};
use crate::store::{KeyValueStore, Persisted, PersistedStore};
use crate::{CartItem, CartState};

/// 空购物车占位行的文案
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

impl Persisted for CartState {
    fn validate(self) -> Result<Self, &'static str> {
        if self.count as usize != self.items.len() {
            return Err("cart count does not match item list");
        }
        let bad_price = self
            .items
            .iter()
            .filter_map(|item| item.price)
            .any(|price| !price.is_finite() || price < 0.0);
        if bad_price {
            return Err("cart item has a negative price");
        }
        Ok(self)
    }
}

/// 购物车中一行的展示数据
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub product: String,
    pub label: &'static str,
    pub price: String,
}

/// 购物车的渲染契约
#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    /// 只渲染一行占位文案，隐藏结账按钮
    Empty,
    /// 每件商品一行，显示合计与结账按钮
    Items { rows: Vec<CartRow>, total: String },
}

impl CartView {
    pub fn from_state(state: &CartState) -> Self {
        if state.is_empty() {
            return Self::Empty;
        }

        let rows = state
            .items
            .iter()
            .map(|item| CartRow {
                product: item.product.clone(),
                label: category_label(&item.category),
                price: format_price(item.unit_price()),
            })
            .collect();

        Self::Items {
            rows,
            total: format_price(state.total()),
        }
    }

    pub fn checkout_visible(&self) -> bool {
        matches!(self, Self::Items { .. })
    }
}

/// 购物车管理器
///
/// 持有唯一的一份 `CartState`，构造时从存储惰性加载。
#[derive(Debug, Clone)]
pub struct CartManager<S> {
    store: PersistedStore<S>,
    key: String,
    state: CartState,
}

impl<S: KeyValueStore> CartManager<S> {
    pub fn new(store: PersistedStore<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = store.load_or_default(&key);
        Self { store, key, state }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// 加入一件商品
    ///
    /// `price` 为 `None` 时查目录，目录里也没有则记为 0。负数或非有限值按 0 处理。
    pub fn add_item(&mut self, product: &str, category: &str, price: Option<f64>) -> &CartState {
        let price = match price {
            Some(price) if price.is_finite() && price >= 0.0 => price,
            Some(_) => 0.0,
            None => catalog::price_of(product).unwrap_or(0.0),
        };

        self.state.push(CartItem {
            product: product.to_string(),
            category: category.to_string(),
            price: Some(price),
        });
        self.persist();

        log::debug!(
            "cart: added {} ({}) at {:.2}, count={}",
            product,
            category,
            price,
            self.state.count
        );
        &self.state
    }

    /// 清空购物车
    pub fn clear(&mut self) -> &CartState {
        self.state = CartState::default();
        self.persist();
        log::debug!("cart: cleared");
        &self.state
    }

    pub fn total(&self) -> f64 {
        self.state.total()
    }

    pub fn view(&self) -> CartView {
        CartView::from_state(&self.state)
    }

    /// 重新从存储读取（页面重新绑定时使用）
    pub fn reload(&mut self) -> &CartState {
        self.state = self.store.load_or_default(&self.key);
        &self.state
    }

    fn persist(&self) {
        self.store.save(&self.key, &self.state);
    }
}

#[cfg(test)]
mod tests;
