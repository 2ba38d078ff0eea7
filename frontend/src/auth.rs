//! 认证模块
//!
//! 管理登录状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态；会话本身由状态核心持久化。

use crate::state::StorefrontContext;
use leptos::prelude::*;
use pulse_shared::{AuthControls, Command};

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 是否已登录
    pub is_authenticated: bool,
    /// 登录时填写的邮箱（仅用于显示）
    pub email: Option<String>,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    /// 登录/登出按钮的可见性
    pub fn controls(&self) -> Signal<AuthControls> {
        let state = self.state;
        Signal::derive(move || AuthControls::for_state(state.get().is_authenticated))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从存储中的会话读取，必须在路由守卫执行之前调用。
pub fn init_auth(ctx: &AuthContext, store: &StorefrontContext) {
    let session = store.with(|storefront| storefront.session().session());
    ctx.set_state.set(AuthState {
        is_authenticated: session.as_ref().is_some_and(|s| s.logged_in),
        email: session.as_ref().and_then(|s| s.email()).map(str::to_string),
    });
}

/// 登录并写入会话
///
/// 没有真正的鉴权，只是写入 `loggedIn` 标记。
/// 导航由路由服务的认证状态监听自动处理。
pub fn login(ctx: &AuthContext, store: &StorefrontContext, email: String) {
    store.dispatch(Command::Login {
        email: email.clone(),
    });
    ctx.set_state.update(|state| state.email = Some(email));
}

/// 注销并清除会话
pub fn logout(ctx: &AuthContext, store: &StorefrontContext) {
    store.dispatch(Command::Logout);
    ctx.set_state.update(|state| state.email = None);
}
