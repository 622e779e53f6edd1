use leptos::prelude::*;

use crate::state::{use_storefront, ALL_CATEGORIES};

/// Category filter list: a synthetic "All Products" entry plus every derived
/// category. Selecting one only changes the filter signal; the catalog
/// itself is never touched.
#[component]
pub fn CategoryNav() -> impl IntoView {
    let ctx = use_storefront();

    let entries = move || {
        let mut entries = vec![(ALL_CATEGORIES.to_string(), "All Products".to_string())];
        entries.extend(
            ctx.catalog
                .get()
                .categories
                .into_iter()
                .map(|c| (c.clone(), c)),
        );
        entries
    };

    view! {
        <nav class="category-nav">
            {move || entries().into_iter().map(|(value, label)| {
                let is_active = {
                    let value = value.clone();
                    move || ctx.selected_category.get() == value
                };
                view! {
                    <button
                        class=move || if is_active() { "category-link active" } else { "category-link" }
                        on:click=move |_| ctx.selected_category.set(value.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
