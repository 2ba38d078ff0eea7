use crate::auth::{logout, use_auth};
use crate::components::icons::{Heart, LogOut, ShoppingBag};
use crate::state::use_storefront;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

/// 顶部导航：站点链接、购物车角标、登录/登出按钮
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let store = use_storefront();
    let router = use_router();
    let controls = auth.controls();

    let cart_count = move || store.cart.with(|cart| cart.count);
    let email = move || auth.state.get().email.unwrap_or_default();

    let on_logout = move |_| logout(&auth, &store);
    let on_login = move |_| router.go(AppRoute::Login);

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Link to="/">
                    <span class="btn btn-ghost text-xl">"Pulse Threads"</span>
                </Link>
                <Link to="/favorites.html">
                    <span class="btn btn-ghost gap-2">
                        <Heart attr:class="h-4 w-4" /> "Favorites"
                    </span>
                </Link>
            </div>
            <div class="flex-none gap-2">
                <span class="btn btn-ghost gap-2">
                    <ShoppingBag attr:class="h-5 w-5" />
                    <span class="badge badge-primary">{cart_count}</span>
                </span>
                <Show when=move || controls.get().show_logout>
                    <span class="text-sm opacity-70 hidden md:inline">{email}</span>
                    <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Log out"
                    </button>
                </Show>
                <Show when=move || controls.get().show_login>
                    <button on:click=on_login class="btn btn-primary">"Log in"</button>
                </Show>
            </div>
        </div>
    }
}
