use chrono::Utc;
use contracts::order::OrderForm;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::format::format_price;
use crate::shared::modal::Modal;
use crate::shared::notify;
use crate::state::{use_storefront, OrderTarget};

/// ViewModel for the order form
#[derive(Clone, Copy)]
pub struct OrderFormViewModel {
    pub form: RwSignal<OrderForm>,
    /// True while a submission is outstanding; the submit button is disabled
    /// so a single click produces a single request.
    pub submitting: RwSignal<bool>,
}

impl OrderFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrderForm {
                quantity: 1,
                ..OrderForm::default()
            }),
            submitting: RwSignal::new(false),
        }
    }
}

impl Default for OrderFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal order form, pre-filled with the selected product, size and price.
///
/// Validation failures and submission errors keep the modal open; a
/// successful submission resets the fields and closes it.
#[component]
pub fn OrderFormModal(target: OrderTarget) -> impl IntoView {
    let ctx = use_storefront();
    let vm = OrderFormViewModel::new();

    let close = Callback::new(move |_| {
        if !vm.submitting.get_untracked() {
            ctx.order_target.set(None);
        }
    });

    let product_name = target.product_name.clone();
    let size = target.size.clone();
    let price = target.price;
    let submit = move |_| {
        if vm.submitting.get_untracked() {
            return;
        }
        let form = vm.form.get_untracked();
        if let Err(message) = form.validate() {
            notify::alert(&message);
            return;
        }

        let request = form.to_request(&product_name, &size, price, Utc::now());
        vm.submitting.set(true);
        spawn_local(async move {
            match api::submit_order(&request).await {
                Ok(()) => {
                    notify::alert("Thank you! Your order has been received.");
                    vm.form.set(OrderForm {
                        quantity: 1,
                        ..OrderForm::default()
                    });
                    ctx.order_target.set(None);
                }
                Err(message) => {
                    notify::alert(&format!("Could not place the order: {}", message));
                }
            }
            vm.submitting.set(false);
        });
    };

    view! {
        <Modal title=format!("Order: {}", target.product_name) on_close=close>
            <div class="order-summary">
                <div class="order-summary__row">
                    <span>{"Size"}</span>
                    <strong>{target.size.clone()}</strong>
                </div>
                <div class="order-summary__row">
                    <span>{"Price"}</span>
                    <strong>{format_price(target.price)}</strong>
                </div>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="customer-name">{"Your name"}</label>
                    <input
                        type="text"
                        id="customer-name"
                        prop:value=move || vm.form.get().customer_name
                        on:input=move |ev| {
                            vm.form.update(|f| f.customer_name = event_target_value(&ev));
                        }
                        placeholder="Full name"
                    />
                </div>

                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value=move || vm.form.get().phone
                        on:input=move |ev| {
                            vm.form.update(|f| f.phone = event_target_value(&ev));
                        }
                        placeholder="Phone number"
                    />
                </div>

                <div class="form-group">
                    <label for="address">{"Delivery address"}</label>
                    <input
                        type="text"
                        id="address"
                        prop:value=move || vm.form.get().address
                        on:input=move |ev| {
                            vm.form.update(|f| f.address = event_target_value(&ev));
                        }
                        placeholder="Street, house, city"
                    />
                </div>

                <div class="form-group">
                    <label for="quantity">{"Quantity"}</label>
                    <input
                        type="number"
                        id="quantity"
                        min="1"
                        prop:value=move || vm.form.get().quantity.to_string()
                        on:input=move |ev| {
                            let quantity = event_target_value(&ev).parse::<u32>().unwrap_or(1).max(1);
                            vm.form.update(|f| f.quantity = quantity);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        prop:value=move || vm.form.get().notes
                        on:input=move |ev| {
                            vm.form.update(|f| f.notes = event_target_value(&ev));
                        }
                        placeholder="Anything we should know (optional)"
                        rows="3"
                    />
                </div>

                <label class="form-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.get().contact_by_telegram
                        on:change=move |ev| {
                            vm.form.update(|f| f.contact_by_telegram = event_target_checked(&ev));
                        }
                    />
                    <span>{"You may contact me on Telegram about this order"}</span>
                </label>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=submit
                    disabled=move || vm.submitting.get()
                >
                    {move || if vm.submitting.get() { "Sending..." } else { "Place order" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| close.run(())
                >
                    {"Cancel"}
                </button>
            </div>
        </Modal>
    }
}
