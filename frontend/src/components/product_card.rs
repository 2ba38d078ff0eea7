use crate::components::icons::Heart;
use crate::state::use_storefront;
use crate::web::Timeout;
use leptos::prelude::*;
use pulse_shared::Command;
use pulse_shared::catalog::{Product, format_price};
use pulse_shared::favorites::{ADD_FAVORITE_LABEL, REMOVE_FAVORITE_LABEL};

/// 商品卡片
///
/// 加入购物车同时记录一次浏览；按钮短暂加上 `pulse` 动画。
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_storefront();
    let (pulsing, set_pulsing) = signal(false);
    let is_favorite = store.is_favorite(product.name, product.category);

    let on_add = move |_| {
        store.dispatch(Command::AddToCart {
            product: product.name.to_string(),
            category: product.category.to_string(),
            price: Some(product.price),
        });
        store.dispatch(Command::RecordView {
            product: product.name.to_string(),
            category: product.category.to_string(),
        });

        set_pulsing.set(true);
        Timeout::new(store.pulse_millis(), move || set_pulsing.set(false)).forget();
    };

    let on_favorite = move |_| {
        store.dispatch(Command::ToggleFavorite {
            product: product.name.to_string(),
            category: product.category.to_string(),
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl product-card">
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <h3 class="card-title">{product.name}</h3>
                    <button
                        type="button"
                        class="favorite-btn btn btn-ghost btn-circle btn-sm"
                        class:active=move || is_favorite.get()
                        aria-label=move || if is_favorite.get() { REMOVE_FAVORITE_LABEL } else { ADD_FAVORITE_LABEL }
                        on:click=on_favorite
                    >
                        <Heart attr:class="h-5 w-5" />
                    </button>
                </div>
                <p class="product-price">{format_price(product.price)}</p>
                <div class="card-actions justify-end">
                    <button
                        type="button"
                        class="btn btn-primary"
                        class:pulse=move || pulsing.get()
                        on:click=on_add
                    >
                        "Add to cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
