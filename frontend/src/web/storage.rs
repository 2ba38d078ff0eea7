//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现状态核心的 `KeyValueStore`。

use pulse_shared::KeyValueStore;

/// 浏览器 `localStorage`
///
/// 无状态的单元结构体，每次操作时重新获取 Storage 实例，
/// 因此可以随意复制并交给多个管理器共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for BrowserStorage {
    /// 键不存在或发生错误（如隐私模式禁用存储）时返回 `None`
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入失败（如超出配额）时返回 `false`
    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
