//! Login Modal
//!
//! Email/password form with a simulated sign-in delay. The flow always
//! succeeds; closing the modal while the timer runs cancels it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::flows::{self, CancelHandle};
use crate::store::AppStateStoreFields;

#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let cancel = StoredValue::new(CancelHandle::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() || email.get().is_empty() || password.get().is_empty() {
            return;
        }
        set_loading.set(true);

        let token = cancel.read_value().token();
        spawn_local(async move {
            flows::sleep(flows::LOGIN_DELAY_MS).await;
            if token.is_cancelled() {
                return;
            }
            let mut state = store.write();
            state.session.login();
            state.overlays.close_login();
            drop(state);
            set_loading.set(false);
            set_email.set(String::new());
            set_password.set(String::new());
        });
    };

    let close = move |_| {
        cancel.read_value().cancel();
        set_loading.set(false);
        store.overlays().write().close_login();
    };

    view! {
        <Show when=move || store.overlays().read().login>
            <div class="modal-backdrop">
                <div class="modal login-modal">
                    <header class="modal-header">
                        <h3>"Welcome Back"</h3>
                        <button class="close-btn" on:click=close>
                            "✕"
                        </button>
                    </header>
                    <form on:submit=submit>
                        <input
                            type="email"
                            placeholder="Email address"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_email.set(input.value());
                            }
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_password.set(input.value());
                            }
                        />
                        <button type="submit" class="primary-btn" disabled=move || loading.get()>
                            {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
