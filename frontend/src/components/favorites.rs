use crate::components::cart_panel::CartPanel;
use crate::components::icons::Heart;
use crate::components::nav::NavBar;
use crate::state::use_storefront;
use leptos::prelude::*;
use pulse_shared::catalog::{self, category_label, format_price};
use pulse_shared::favorites::REMOVE_FAVORITE_LABEL;
use pulse_shared::{Command, ProductRef};

/// 收藏夹页面
///
/// 从收藏直接加入购物车时按目录定价，不记录浏览。
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let store = use_storefront();
    let favorites = store.favorites;

    let is_empty = move || favorites.with(Vec::is_empty);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <NavBar />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 card bg-base-100 shadow-xl">
                        <div class="card-body p-0">
                            <div class="p-6 pb-2">
                                <h3 class="card-title">"Favorites"</h3>
                                <p class="text-base-content/70 text-sm">"Pieces you saved for later."</p>
                            </div>
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <tbody>
                                        <Show when=is_empty>
                                            <tr>
                                                <td colspan="4" class="text-center py-8 text-base-content/50">
                                                    "No favorites yet. Tap the heart on any product."
                                                </td>
                                            </tr>
                                        </Show>
                                        <For
                                            each=move || favorites.get()
                                            key=ProductRef::identity_key
                                            children=move |entry| view! { <FavoriteRow entry=entry /> }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                    <CartPanel />
                </div>
            </div>
        </div>
    }
}

#[component]
fn FavoriteRow(entry: ProductRef) -> impl IntoView {
    let store = use_storefront();
    let price = catalog::price_of(&entry.product).unwrap_or(0.0);

    let add_entry = entry.clone();
    let on_add = move |_| {
        store.dispatch(Command::AddToCart {
            product: add_entry.product.clone(),
            category: add_entry.category.clone(),
            price: None,
        });
    };

    let remove_entry = entry.clone();
    let on_remove = move |_| {
        store.dispatch(Command::ToggleFavorite {
            product: remove_entry.product.clone(),
            category: remove_entry.category.clone(),
        });
    };

    view! {
        <tr>
            <td class="font-semibold">{entry.product.clone()}</td>
            <td class="text-sm opacity-70">{category_label(&entry.category)}</td>
            <td class="font-mono">{format_price(price)}</td>
            <td class="flex justify-end gap-2">
                <button type="button" class="btn btn-primary btn-sm" on:click=on_add>
                    "Add to cart"
                </button>
                <button
                    type="button"
                    class="favorite-btn active btn btn-ghost btn-circle btn-sm"
                    aria-label=REMOVE_FAVORITE_LABEL
                    on:click=on_remove
                >
                    <Heart attr:class="h-4 w-4" />
                </button>
            </td>
        </tr>
    }
}
