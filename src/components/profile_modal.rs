//! Profile Modal
//!
//! Mock account card: editable fields with a simulated save, shortcuts
//! into the settings tabs, and the logout control.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::flows::{self, CancelHandle};
use crate::overlay::SettingsTab;
use crate::store::{store_open_settings, AppStateStoreFields};

#[component]
pub fn ProfileModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (name, set_name) = signal(String::from("Alex Morgan"));
    let (email, set_email) = signal(String::from("alex@coursue.app"));
    let (saving, set_saving) = signal(false);
    let (saved, set_saved) = signal(false);
    let cancel = StoredValue::new(CancelHandle::new());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        set_saving.set(true);
        set_saved.set(false);

        let token = cancel.read_value().token();
        spawn_local(async move {
            flows::sleep(flows::PROFILE_SAVE_MS).await;
            if token.is_cancelled() {
                return;
            }
            set_saving.set(false);
            set_saved.set(true);
        });
    };

    let close = move |_| {
        cancel.read_value().cancel();
        set_saving.set(false);
        set_saved.set(false);
        store.overlays().write().close_profile();
    };

    view! {
        <Show when=move || store.overlays().read().profile>
            <div class="modal-backdrop">
                <div class="modal profile-modal">
                    <header class="modal-header">
                        <h3>"My Profile"</h3>
                        <button class="close-btn" on:click=close>
                            "✕"
                        </button>
                    </header>

                    <div class="profile-head">
                        <img class="avatar large" src="https://i.pravatar.cc/150?u=me" alt="Profile" />
                        <Show when=move || store.session().get().premium>
                            <span class="pro-badge">"PRO"</span>
                        </Show>
                    </div>

                    <form on:submit=save>
                        <input
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
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
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <Show when=move || saved.get()>
                            <p class="saved-note">"Profile saved"</p>
                        </Show>
                    </form>

                    <div class="profile-links">
                        <button
                            class="link-btn"
                            on:click=move |_| store_open_settings(&store, SettingsTab::Preferences)
                        >
                            "Preferences"
                        </button>
                        <button
                            class="link-btn"
                            on:click=move |_| store_open_settings(&store, SettingsTab::Security)
                        >
                            "Security"
                        </button>
                        <button class="logout-btn" on:click=move |_| ctx.logout()>
                            "Log Out"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
