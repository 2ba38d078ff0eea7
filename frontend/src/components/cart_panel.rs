use crate::state::use_storefront;
use leptos::prelude::*;
use pulse_shared::cart::EMPTY_CART_MESSAGE;
use pulse_shared::catalog::format_price;
use pulse_shared::{CartView, Command};

/// 购物车面板
///
/// 空购物车只渲染一行占位并隐藏结账按钮。
#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_storefront();
    let cart = store.cart;

    let cart_view = Memo::new(move |_| cart.with(CartView::from_state));
    let has_items = move || cart_view.with(CartView::checkout_visible);
    let total = move || {
        cart_view.with(|view| match view {
            CartView::Items { total, .. } => total.clone(),
            CartView::Empty => format_price(0.0),
        })
    };
    let on_clear = move |_| store.dispatch(Command::ClearCart);

    let rows = move || match cart_view.get() {
        CartView::Empty => view! {
            <li class="empty-state text-base-content/50">{EMPTY_CART_MESSAGE}</li>
        }
        .into_any(),
        CartView::Items { rows, .. } => rows
            .into_iter()
            .map(|row| {
                view! {
                    <li class="flex items-center justify-between py-2">
                        <div class="flex flex-col">
                            <span class="product-name font-semibold">{row.product}</span>
                            <span class="product-label text-sm opacity-70">{row.label}</span>
                        </div>
                        <span class="product-price-cart font-mono">{row.price}</span>
                    </li>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Your cart"</h3>
                <ul class="cart-items divide-y">{rows}</ul>
                <div class="flex items-center justify-between pt-2">
                    <span class="font-semibold">"Total"</span>
                    <span class="cart-total font-mono">{total}</span>
                </div>
                <div class="card-actions justify-end">
                    <button type="button" class="btn btn-ghost" on:click=on_clear>
                        "Clear cart"
                    </button>
                    <Show when=has_items>
                        <button type="button" class="btn btn-primary checkout-btn">"Checkout"</button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
