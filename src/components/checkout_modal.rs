//! Checkout Modal
//!
//! Card form, a simulated processing wait, then a success screen that
//! auto-closes. Closing mid-flight cancels the pending timers so a stale
//! completion cannot touch the next checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::flows::{self, CancelHandle, CheckoutFlow, CheckoutStep};
use crate::models::StoreCourse;

#[component]
pub fn CheckoutModal(
    course: StoreCourse,
    on_close: Callback<()>,
    on_purchased: Callback<StoreCourse>,
) -> impl IntoView {
    let (flow, set_flow) = signal(CheckoutFlow::new());
    let (card_name, set_card_name) = signal(String::new());
    let (card_number, set_card_number) = signal(String::new());
    let handle = CancelHandle::new();
    let cancel = StoredValue::new(handle.clone());
    let purchased = StoredValue::new(course.clone());

    // the modal can unmount without the close button (view switch while a
    // timer is pending); the pending callbacks must not touch disposed state
    on_cleanup(move || handle.cancel());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut current = flow.get();
        if !current.submit() {
            return;
        }
        set_flow.set(current);

        let token = cancel.read_value().token();
        let course = purchased.get_value();
        spawn_local(async move {
            flows::sleep(flows::CHECKOUT_PROCESSING_MS).await;
            if token.is_cancelled() {
                return;
            }
            set_flow.update(|f| {
                f.complete();
            });

            flows::sleep(flows::CHECKOUT_SUCCESS_MS).await;
            if token.is_cancelled() {
                return;
            }
            let mut current = flow.get_untracked();
            if current.finish() {
                on_purchased.run(course);
                // back to a fresh form before the host drops the modal
                current.reset();
                set_flow.set(current);
                on_close.run(());
            }
        });
    };

    let close = move |_| {
        cancel.read_value().cancel();
        on_close.run(());
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal checkout-modal">
                <header class="modal-header">
                    <h3>"Checkout"</h3>
                    <button class="close-btn" on:click=close>
                        "✕"
                    </button>
                </header>

                <div class="checkout-summary">
                    <span>{course.title.clone()}</span>
                    <span class="price">{course.price.clone()}</span>
                </div>

                {move || match flow.get().step() {
                    CheckoutStep::Form => {
                        view! {
                            <form on:submit=submit>
                                <input
                                    type="text"
                                    placeholder="Name on card"
                                    prop:value=move || card_name.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target
                                            .dyn_ref::<web_sys::HtmlInputElement>()
                                            .unwrap();
                                        set_card_name.set(input.value());
                                    }
                                />
                                <input
                                    type="text"
                                    placeholder="Card number"
                                    prop:value=move || card_number.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target
                                            .dyn_ref::<web_sys::HtmlInputElement>()
                                            .unwrap();
                                        set_card_number.set(input.value());
                                    }
                                />
                                <button type="submit" class="primary-btn">
                                    "Pay Now"
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                    CheckoutStep::Processing => {
                        view! {
                            <div class="checkout-processing">
                                <div class="spinner"></div>
                                <p>"Processing payment..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    CheckoutStep::Success => {
                        view! {
                            <div class="checkout-success">
                                <span class="success-mark">"✓"</span>
                                <p>"Payment successful!"</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
