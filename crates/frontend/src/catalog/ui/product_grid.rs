use leptos::prelude::*;

use contracts::catalog::Product;

use super::ProductCard;
use crate::state::{use_storefront, ALL_CATEGORIES};

/// Cards for every product matching the selected category. Filtering is
/// purely presentational.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_storefront();

    let visible = move || -> Vec<Product> {
        let filter = ctx.selected_category.get();
        let products = ctx.catalog.get().products;
        if filter == ALL_CATEGORIES {
            products
        } else {
            products
                .into_iter()
                .filter(|p| p.category == filter)
                .collect()
        }
    };

    view! {
        <div class="product-grid">
            {move || {
                let products = visible();
                if products.is_empty() {
                    view! {
                        <div class="product-grid-empty">
                            {"No products in this category yet."}
                        </div>
                    }.into_any()
                } else {
                    products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
