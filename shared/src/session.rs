//! 会话读取与登录守卫
//!
//! 守卫只是一个跳转便利，不是访问控制。

use serde_json::Value;

use crate::UserSession;
use crate::store::{KeyValueStore, PersistedStore};

// =========================================================
// 页面位置与守卫
// =========================================================

/// 当前页面位置（`location.href` 与 `location.pathname`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub href: String,
    pub path: String,
}

impl PageLocation {
    pub fn new(href: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            path: path.into(),
        }
    }
}

/// 守卫的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 留在当前页
    Stay,
    /// 跳转到登录页
    Redirect(String),
}

/// 当前页面是否就是登录页，用于避免重定向循环
pub fn is_login_page(location: &PageLocation, marker: &str) -> bool {
    location.href.contains(marker)
        || location.path.ends_with(marker)
        || (location.path == "/" && location.href.contains("login"))
}

/// 受保护页面的守卫判定
pub fn guard(location: &PageLocation, logged_in: bool, login_page: &str) -> GuardDecision {
    if is_login_page(location, login_page) || logged_in {
        GuardDecision::Stay
    } else {
        GuardDecision::Redirect(login_page.to_string())
    }
}

/// 登录/登出按钮的可见性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthControls {
    pub show_login: bool,
    pub show_logout: bool,
}

impl AuthControls {
    pub fn for_state(logged_in: bool) -> Self {
        Self {
            show_login: !logged_in,
            show_logout: logged_in,
        }
    }
}

// =========================================================
// 会话读取
// =========================================================

#[derive(Debug, Clone)]
pub struct SessionReader<S> {
    store: PersistedStore<S>,
    key: String,
    login_page: String,
}

impl<S: KeyValueStore> SessionReader<S> {
    pub fn new(
        store: PersistedStore<S>,
        key: impl Into<String>,
        login_page: impl Into<String>,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            login_page: login_page.into(),
        }
    }

    /// 读取会话；缺失或无法解析时为 `None`
    pub fn session(&self) -> Option<UserSession> {
        self.store.try_load(&self.key).ok()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some_and(|s| s.logged_in)
    }

    pub fn auth_controls(&self) -> AuthControls {
        AuthControls::for_state(self.is_logged_in())
    }

    pub fn guard(&self, location: &PageLocation) -> GuardDecision {
        guard(location, self.is_logged_in(), &self.login_page)
    }

    /// 写入已登录会话，保留已有会话中的其他字段
    pub fn login(&self, email: &str) -> UserSession {
        let mut session = self.session().unwrap_or_default();
        session.logged_in = true;
        session
            .extra
            .insert("email".to_string(), Value::String(email.to_string()));
        self.store.save(&self.key, &session);
        log::debug!("session: logged in as {}", email);
        session
    }

    /// 删除会话
    pub fn logout(&self) {
        self.store.clear(&self.key);
        log::debug!("session: logged out");
    }
}
