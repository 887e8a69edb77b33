//! Premium Join Modal
//!
//! Upgrade form with a simulated processing delay, a short success flash,
//! then auto-close. Cancelled timers leave the membership untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::flows::{self, CancelHandle};
use crate::store::AppStateStoreFields;

#[component]
pub fn JoinModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (succeeded, set_succeeded) = signal(false);
    let cancel = StoredValue::new(CancelHandle::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() || succeeded.get() || name.get().is_empty() || email.get().is_empty() {
            return;
        }
        set_loading.set(true);

        let token = cancel.read_value().token();
        spawn_local(async move {
            flows::sleep(flows::JOIN_DELAY_MS).await;
            if token.is_cancelled() {
                return;
            }
            set_loading.set(false);
            set_succeeded.set(true);
            store.write().session.join();

            flows::sleep(flows::JOIN_SUCCESS_MS).await;
            if token.is_cancelled() {
                return;
            }
            set_succeeded.set(false);
            store.overlays().write().close_join();
        });
    };

    let close = move |_| {
        cancel.read_value().cancel();
        set_loading.set(false);
        set_succeeded.set(false);
        store.overlays().write().close_join();
    };

    view! {
        <Show when=move || store.overlays().read().join>
            <div class="modal-backdrop">
                <div class="modal join-modal">
                    <header class="modal-header">
                        <h3>"Go Premium"</h3>
                        <button class="close-btn" on:click=close>
                            "✕"
                        </button>
                    </header>

                    <Show
                        when=move || succeeded.get()
                        fallback=move || {
                            view! {
                                <form on:submit=submit>
                                    <ul class="perk-list">
                                        <li>"Unlimited course access"</li>
                                        <li>"Offline downloads"</li>
                                        <li>"Priority mentor replies"</li>
                                    </ul>
                                    <input
                                        type="text"
                                        placeholder="Full name"
                                        prop:value=move || name.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target
                                                .dyn_ref::<web_sys::HtmlInputElement>()
                                                .unwrap();
                                            set_name.set(input.value());
                                        }
                                    />
                                    <input
                                        type="email"
                                        placeholder="Email address"
                                        prop:value=move || email.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target
                                                .dyn_ref::<web_sys::HtmlInputElement>()
                                                .unwrap();
                                            set_email.set(input.value());
                                        }
                                    />
                                    <button
                                        type="submit"
                                        class="primary-btn"
                                        disabled=move || loading.get()
                                    >
                                        {move || {
                                            if loading.get() { "Processing..." } else { "Join PRO" }
                                        }}
                                    </button>
                                </form>
                            }
                        }
                    >
                        <div class="join-success">
                            <span class="success-mark">"✓"</span>
                            <p>"Welcome to PRO!"</p>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
