//! 运行时配置
//!
//! 所有存储键和少量行为参数都有默认值，可由宿主环境覆盖
//! (前端从 `<meta name="pulse:...">` 读取)。

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_CART_KEY: &str = "pulseThreadsCart";
pub const DEFAULT_SESSION_KEY: &str = "PulseUser";
pub const DEFAULT_VIEWED_KEY: &str = "PulseRecentlyViewed";
pub const DEFAULT_FAVORITES_KEY: &str = "pulseThreadsFavorites";
pub const DEFAULT_VIEWED_LIMIT: usize = 6;
pub const DEFAULT_LOGIN_PAGE: &str = "login.html";
pub const DEFAULT_PULSE_MILLIS: u32 = 400;

/// 店面配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub cart_key: String,
    pub session_key: String,
    pub viewed_key: String,
    pub favorites_key: String,
    /// 最近浏览保留的最大条目数
    pub viewed_limit: usize,
    /// 登录页标识，同时作为守卫的匹配标记和重定向目标
    pub login_page: String,
    /// 加入购物车按钮 `pulse` 动画的持续时间
    pub pulse_millis: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            viewed_key: DEFAULT_VIEWED_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            viewed_limit: DEFAULT_VIEWED_LIMIT,
            login_page: DEFAULT_LOGIN_PAGE.to_string(),
            pulse_millis: DEFAULT_PULSE_MILLIS,
        }
    }
}

impl StorefrontConfig {
    /// 通过查找函数读取覆盖值，读不到或为空就用默认值
    ///
    /// 可识别的名称：`CART_KEY`, `SESSION_KEY`, `VIEWED_KEY`, `FAVORITES_KEY`,
    /// `VIEWED_LIMIT`, `LOGIN_PAGE`, `PULSE_MILLIS`。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            cart_key: text("CART_KEY", DEFAULT_CART_KEY),
            session_key: text("SESSION_KEY", DEFAULT_SESSION_KEY),
            viewed_key: text("VIEWED_KEY", DEFAULT_VIEWED_KEY),
            favorites_key: text("FAVORITES_KEY", DEFAULT_FAVORITES_KEY),
            viewed_limit: lookup("VIEWED_LIMIT")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_VIEWED_LIMIT),
            login_page: text("LOGIN_PAGE", DEFAULT_LOGIN_PAGE),
            pulse_millis: lookup("PULSE_MILLIS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(DEFAULT_PULSE_MILLIS),
        }
    }
}
