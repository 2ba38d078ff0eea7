//! Pulse Threads 店面状态核心
//!
//! 纯状态管理层，不依赖 DOM 或 web_sys，可以直接在宿主机上测试：
//! - `store`: 持久化存储抽象
//! - `cart` / `favorites` / `viewed`: 各自拥有一份持久化状态的管理器
//! - `session`: 会话读取与登录守卫
//! - `storefront`: 命令分发与状态变更通知

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod session;
pub mod store;
pub mod storefront;
pub mod viewed;

pub use cart::{CartManager, CartRow, CartView};
pub use config::StorefrontConfig;
pub use favorites::FavoritesManager;
pub use session::{AuthControls, GuardDecision, PageLocation, SessionReader};
pub use store::{KeyValueStore, LoadError, MemoryStore, Persisted, PersistedStore};
pub use storefront::{Command, StateChange, Storefront};
pub use viewed::RecentlyViewed;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 收藏标识键中 product 与 category 之间的分隔符
pub const IDENTITY_SEPARATOR: &str = "_";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 生成 `(product, category)` 的标识键，例如 `Arc Parka_mens`
pub fn identity_key(product: &str, category: &str) -> String {
    format!("{}{}{}", product, IDENTITY_SEPARATOR, category)
}

/// 商品引用：收藏夹与最近浏览共用的条目形状
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRef {
    pub product: String,
    pub category: String,
}

/// 收藏条目，按 `(product, category)` 去重
pub type FavoriteEntry = ProductRef;

/// 最近浏览条目，按 `product` 去重
pub type ViewedEntry = ProductRef;

impl ProductRef {
    pub fn new(product: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            category: category.into(),
        }
    }

    pub fn identity_key(&self) -> String {
        identity_key(&self.product, &self.category)
    }

    /// 列表展示文本：`AeroFlex Jacket (mens)`
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.product, self.category)
    }
}

/// 购物车中的一行
///
/// `price` 在存储中可能缺失或为 `null`，此时按目录价格计算；显式的 0 就是 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: String,
    pub category: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl CartItem {
    /// 实际计价：有存储价格就用它，缺失时查目录，目录里也没有则为 0
    pub fn unit_price(&self) -> f64 {
        match self.price {
            Some(price) => price,
            None => catalog::price_of(&self.product).unwrap_or(0.0),
        }
    }
}

/// 购物车状态
///
/// 不变式：`count == items.len()`。追加必须走 `push`，计数与列表一起更新。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub count: u32,
    pub items: Vec<CartItem>,
}

impl CartState {
    /// 追加一行并同步计数
    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
        self.count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::unit_price).sum()
    }
}

/// 登录会话
///
/// 由登录流程写入，核心只读取 `loggedIn`。其余字段原样保留。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSession {
    pub fn email(&self) -> Option<&str> {
        self.extra.get("email").and_then(Value::as_str)
    }
}
