use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{ProductRef, UserSession};

// =========================================================
// 抽象接口定义
// =========================================================

/// 字符串键值存储，对应浏览器的 `localStorage`
///
/// 写入和删除返回是否成功，调用方可以忽略。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// 可持久化的实体
///
/// `validate` 在反序列化之后执行，返回 `Err` 时该值按损坏处理。
pub trait Persisted: Serialize + DeserializeOwned {
    fn validate(self) -> Result<Self, &'static str> {
        Ok(self)
    }
}

impl Persisted for Vec<ProductRef> {}

impl Persisted for UserSession {}

/// 读取失败的原因
///
/// 只在 `try_load` 中出现；`load` 会把任何失败都替换为默认值。
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no value stored under this key")]
    Missing,
    #[error("stored value is not valid JSON for this entity: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored value failed validation: {0}")]
    Invalid(&'static str),
}

// =========================================================
// 持久化存储
// =========================================================

/// 在 `KeyValueStore` 之上的 JSON 读写层
///
/// 读取遵循"损坏即默认"：缺失、格式错误、校验失败都返回调用方给出的默认值，
/// 从不向上抛错。写入假定总能成功。
#[derive(Debug, Clone)]
pub struct PersistedStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistedStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn try_load<T: Persisted>(&self, key: &str) -> Result<T, LoadError> {
        let raw = self.backend.get(key).ok_or(LoadError::Missing)?;
        let value: T = serde_json::from_str(&raw)?;
        value.validate().map_err(LoadError::Invalid)
    }

    pub fn load<T: Persisted>(&self, key: &str, default: T) -> T {
        self.try_load(key).unwrap_or(default)
    }

    pub fn load_or_default<T: Persisted + Default>(&self, key: &str) -> T {
        self.try_load(key).unwrap_or_default()
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.backend.set(key, &raw);
        }
    }

    pub fn clear(&self, key: &str) {
        self.backend.remove(key);
    }
}

// =========================================================
// 内存实现 (MemoryStore)
// =========================================================

/// 内存中的键值存储
///
/// 克隆得到的是同一份数据的句柄，测试可以在管理器写入之后直接检查原始字符串。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一条原始值，用于模拟已有（或被篡改）的存储
    pub fn with_entry(self, key: &str, raw: &str) -> Self {
        self.map.borrow_mut().insert(key.to_string(), raw.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.map.borrow_mut().remove(key).is_some()
    }
}
