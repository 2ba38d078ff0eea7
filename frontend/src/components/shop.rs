use crate::components::cart_panel::CartPanel;
use crate::components::nav::NavBar;
use crate::components::product_card::ProductCard;
use crate::components::recently_viewed::RecentlyViewedList;
use leptos::prelude::*;
use pulse_shared::catalog;

/// 店面分区：(分类, 标题)
const SECTIONS: [(&str, &str); 4] = [
    ("mens", "Menswear"),
    ("womens", "Womenswear"),
    ("kids", "Kidswear"),
    ("discount", "Bundles & deals"),
];

#[component]
pub fn ShopPage() -> impl IntoView {
    let sections = SECTIONS
        .iter()
        .map(|(category, title)| {
            let cards = catalog::in_category(category)
                .map(|product| view! { <ProductCard product=*product /> })
                .collect_view();
            view! {
                <section class="space-y-4">
                    <h2 class="text-2xl font-bold">{*title}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">{cards}</div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <NavBar />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 space-y-8">{sections}</div>
                    <div class="space-y-8">
                        <CartPanel />
                        <RecentlyViewedList />
                    </div>
                </div>
            </div>
        </div>
    }
}
