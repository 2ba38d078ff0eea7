//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 页面加载时先执行登录守卫，再决定渲染哪个页面，受保护内容不会闪现。

use leptos::prelude::*;
use pulse_shared::session::{self, GuardDecision, PageLocation};
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器位置
fn current_location() -> PageLocation {
    let location = web_sys::window().map(|w| w.location());
    let href = location
        .as_ref()
        .and_then(|l| l.href().ok())
        .unwrap_or_default();
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    PageLocation::new(href, path)
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
    /// 登录页文件名
    login_page: StoredValue<String>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始路由经过登录守卫：未登录且不在登录页时，直接替换为登录页。
    fn new(is_authenticated: Signal<bool>, login_page: String) -> Self {
        let location = current_location();
        let decision = session::guard(&location, is_authenticated.get_untracked(), &login_page);

        let initial_route = match decision {
            GuardDecision::Stay => AppRoute::from_path(&location.path, &login_page),
            GuardDecision::Redirect(page) => {
                log::info!("[Router] Not logged in. Redirecting {} to {}.", location.path, page);
                replace_history_state(&AppRoute::Login.to_path(&page));
                AppRoute::Login
            }
        };
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
            login_page: StoredValue::new(login_page),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    fn path_of(&self, route: &AppRoute) -> String {
        self.login_page.with_value(|page| route.to_path(page))
    }

    fn route_of(&self, path: &str) -> AppRoute {
        self.login_page.with_value(|page| AppRoute::from_path(path, page))
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        let target_route = self.route_of(path);
        self.navigate_to_route(target_route, true);
    }

    /// 按路由导航（登录页路径取决于配置，不要手写）
    pub fn go(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        // --- Step 1: 验证目标路由 ---
        let route = if target_route.requires_auth() && !is_auth {
            log::info!("[Router] Access denied. Redirecting to login.");
            AppRoute::auth_failure_redirect()
        } else if target_route.should_redirect_when_authenticated() && is_auth {
            log::info!("[Router] Already logged in. Redirecting to shop.");
            AppRoute::auth_success_redirect()
        } else {
            target_route
        };

        // --- Step 2: 加载页面 (更新状态) ---
        let path = self.path_of(&route);
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let location = current_location();
            let target_route = router.route_of(&location.path);
            let is_auth = router.is_authenticated.get_untracked();

            // popstate 时也执行守卫逻辑
            if target_route.requires_auth() && !is_auth {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(&router.path_of(&redirect));
                router.set_route.set(redirect);
            } else {
                router.set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                log::info!("[Router] Logged in, redirecting to shop.");
                router.navigate_to_route(AppRoute::auth_success_redirect(), true);
            } else if !is_auth && route.requires_auth() {
                log::info!("[Router] Logged out, redirecting to login.");
                router.navigate_to_route(AppRoute::auth_failure_redirect(), true);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>, login_page: String) -> RouterService {
    let router = RouterService::new(is_authenticated, login_page);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 登录页文件名
    login_page: String,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated, login_page);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接
///
/// 拦截点击，走路由服务而不是整页跳转。
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to on:click=on_click>
            {children()}
        </a>
    }
}
