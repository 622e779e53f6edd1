use leptos::prelude::*;
use wasm_bindgen::JsCast;

use contracts::catalog::{Product, DEFAULT_SIZE, FALLBACK_IMAGE_URLS};

use crate::shared::format::{format_price, format_savings};
use crate::state::{use_storefront, OrderTarget};

/// One product card: image, name, category, description, price block and
/// size selection. The order button stays disabled until a size is chosen.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_storefront();
    let (selected_size, set_selected_size) = signal(Option::<String>::None);

    // Product invariant guarantees at least one image URL.
    let image_url = product
        .image_urls
        .first()
        .cloned()
        .unwrap_or_else(|| FALLBACK_IMAGE_URLS[0].to_string());

    let has_discount = product.has_discount();
    let savings = format_savings(product.discount_amount());
    let original_price = format!("${}", product.price);
    let final_price = format_price(product.final_price);

    // Swap a broken image for a random fallback, once per element.
    let handle_image_error = move |ev: web_sys::ErrorEvent| {
        if let Some(target) = ev.target() {
            if let Ok(img) = target.dyn_into::<web_sys::HtmlImageElement>() {
                if img.get_attribute("data-fallback").is_some() {
                    return;
                }
                let idx = (js_sys::Math::random() * FALLBACK_IMAGE_URLS.len() as f64) as usize;
                let url = FALLBACK_IMAGE_URLS[idx.min(FALLBACK_IMAGE_URLS.len() - 1)];
                let _ = img.set_attribute("data-fallback", "1");
                img.set_src(url);
            }
        }
    };

    let order_product_name = product.name.clone();
    let order_price = product.final_price;
    let open_order_form = move |_| {
        let size = selected_size
            .get_untracked()
            .unwrap_or_else(|| DEFAULT_SIZE.to_string());
        ctx.order_target.set(Some(OrderTarget {
            product_name: order_product_name.clone(),
            size,
            price: order_price,
        }));
    };

    view! {
        <div class="product-card">
            <img
                class="product-card__image"
                src=image_url
                alt=product.name.clone()
                on:error=handle_image_error
            />
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <span class="product-card__category">{product.category.clone()}</span>
                <p class="product-card__description">{product.description.clone()}</p>

                {if has_discount {
                    view! {
                        <div class="product-card__price">
                            <span class="price price--original">{original_price}</span>
                            <span class="price price--final">{final_price}</span>
                            <span class="badge badge--savings">{savings}</span>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="product-card__price">
                            <span class="price">{final_price}</span>
                        </div>
                    }.into_any()
                }}

                <div class="product-card__sizes">
                    {product.sizes.iter().map(|option| {
                        let size = option.size.clone();
                        let size_for_click = size.clone();
                        let size_for_class = size.clone();
                        view! {
                            <button
                                class=move || {
                                    if selected_size.get().as_deref() == Some(size_for_class.as_str()) {
                                        "size-button selected"
                                    } else {
                                        "size-button"
                                    }
                                }
                                on:click=move |_| set_selected_size.set(Some(size_for_click.clone()))
                            >
                                {size}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <button
                    class="button button--primary product-card__order"
                    disabled=move || selected_size.get().is_none()
                    on:click=open_order_form
                >
                    {"Order"}
                </button>
            </div>
        </div>
    }
}
