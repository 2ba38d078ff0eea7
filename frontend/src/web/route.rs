//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了店面的所有页面及其属性。

/// 店面路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 商品列表、购物车与最近浏览 (默认路由)
    #[default]
    Shop,
    /// 收藏夹
    Favorites,
    /// 登录页面
    Login,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// `login_page` 为配置中的登录页文件名（如 `login.html`）。
    pub fn from_path(path: &str, login_page: &str) -> Self {
        let page = path.trim_start_matches('/');
        if page == login_page || page == "login" {
            return Self::Login;
        }
        match page {
            "" | "index.html" => Self::Shop,
            "favorites" | "favorites.html" => Self::Favorites,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self, login_page: &str) -> String {
        match self {
            Self::Shop => "/".to_string(),
            Self::Favorites => "/favorites.html".to_string(),
            Self::Login => format!("/{}", login_page),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：除登录页以外的页面都需要登录**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// 已登录用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 登录成功后的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Shop
    }
}
