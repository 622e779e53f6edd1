use std::rc::Rc;

use leptos::prelude::*;

use crate::catalog::loader;
use crate::catalog::storage::LocalCatalogStore;
use crate::catalog::ui::{CategoryNav, ProductGrid};
use crate::order::form::OrderFormModal;
use crate::state::{LoadPhase, StorefrontContext};

#[component]
pub fn App() -> impl IntoView {
    // Single owned store for catalog, filter and order selection.
    let ctx = StorefrontContext::new();
    provide_context(ctx);

    // Kick off the cache-first load on mount.
    loader::start(ctx, Rc::new(LocalCatalogStore));

    let retry = move |_| loader::retry(ctx, Rc::new(LocalCatalogStore));

    view! {
        <div class="storefront">
            <header class="storefront-header">
                <h1>{"Storefront"}</h1>
            </header>

            {move || ctx.load_error.get().map(|e| view! {
                <div class="error banner">
                    <span>{format!("{}. Showing previously loaded products.", e)}</span>
                    <button class="button button--secondary" on:click=retry>
                        {"Retry"}
                    </button>
                </div>
            })}

            {move || (ctx.phase.get() == LoadPhase::Fetching).then(|| view! {
                <div class="loading-indicator">{"Loading catalog..."}</div>
            })}

            <CategoryNav />
            <ProductGrid />

            {move || ctx.order_target.get().map(|target| view! {
                <OrderFormModal target=target />
            })}
        </div>
    }
}
