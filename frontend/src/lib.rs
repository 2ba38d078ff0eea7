//! Pulse Threads 店面前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务与登录守卫
//! - `auth`: 登录状态
//! - `state`: 店面状态上下文（桥接 `pulse_shared::Storefront` 与信号）
//! - `components`: UI 组件层

mod auth;
mod components {
    mod cart_panel;
    pub mod favorites;
    mod icons;
    pub mod login;
    mod nav;
    mod product_card;
    mod recently_viewed;
    pub mod shop;
}
mod state;

use crate::auth::{AuthContext, init_auth};
use crate::components::favorites::FavoritesPage;
use crate::components::login::LoginPage;
use crate::components::shop::ShopPage;
use crate::state::StorefrontContext;

use leptos::prelude::*;
use pulse_shared::StorefrontConfig;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod meta;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use meta::meta_content;
    pub use storage::BrowserStorage;
    pub use timer::Timeout;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Shop => view! { <ShopPage /> }.into_any(),
        AppRoute::Favorites => view! { <FavoritesPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取页面配置（<meta name="pulse:...">）
    let config = StorefrontConfig::from_lookup(web::meta_content);
    let login_page = config.login_page.clone();

    // 2. 创建认证上下文与店面状态
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    let store_ctx = StorefrontContext::new(config, auth_ctx);
    provide_context(store_ctx);

    // 3. 从存储中的会话初始化认证状态，必须早于路由守卫
    init_auth(&auth_ctx, &store_ctx);

    // 4. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 5. 路由器组件：守卫在任何页面渲染之前执行
        <Router is_authenticated=is_authenticated login_page=login_page>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
