use crate::state::use_storefront;
use leptos::prelude::*;

/// 最近浏览，最新的在前
#[component]
pub fn RecentlyViewedList() -> impl IntoView {
    let viewed = use_storefront().viewed;

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Recently viewed"</h3>
                <ul class="recently-viewed">
                    <For
                        each=move || viewed.get()
                        key=|entry| entry.product.clone()
                        children=move |entry| view! { <li>{entry.display_label()}</li> }
                    />
                </ul>
            </div>
        </div>
    }
}
