//! Settings Modal
//!
//! Two-tab modal. Preferences holds the theme switch and notification
//! toggles; Security is a mock password form.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::overlay::SettingsTab;
use crate::store::AppStateStoreFields;
use crate::theme::Theme;

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (email_updates, set_email_updates) = signal(true);
    let (push_alerts, set_push_alerts) = signal(false);
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (saved, set_saved) = signal(false);

    let tab = move || store.overlays().read().settings;

    let tab_buttons = move || {
        SettingsTab::ALL
            .iter()
            .map(|entry| {
                let entry = *entry;
                view! {
                    <button
                        class=move || {
                            if tab() == Some(entry) { "settings-tab active" } else { "settings-tab" }
                        }
                        on:click=move |_| store.overlays().write().open_settings(entry)
                    >
                        <span class="tab-title">{entry.title()}</span>
                        <span class="tab-desc">{entry.description()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if new_password.get().is_empty() {
            return;
        }
        set_current_password.set(String::new());
        set_new_password.set(String::new());
        set_saved.set(true);
    };

    let theme_button = move |theme: Theme| {
        view! {
            <button
                class=move || {
                    if store.theme().get() == theme { "theme-btn active" } else { "theme-btn" }
                }
                on:click=move |_| ctx.set_theme(Some(theme))
            >
                {theme.as_str()}
            </button>
        }
    };

    view! {
        <Show when=move || tab().is_some()>
            <div class="modal-backdrop">
                <div class="modal settings-modal">
                    <header class="modal-header">
                        <h3>"Settings"</h3>
                        <button
                            class="close-btn"
                            on:click=move |_| {
                                set_saved.set(false);
                                store.overlays().write().close_settings();
                            }
                        >
                            "✕"
                        </button>
                    </header>

                    <div class="settings-body">
                        <nav class="settings-tabs">{tab_buttons()}</nav>

                        <div class="settings-pane">
                            {move || match tab() {
                                Some(SettingsTab::Preferences) | None => {
                                    view! {
                                        <div class="preferences">
                                            <h4>"Appearance"</h4>
                                            <div class="theme-row">
                                                {theme_button(Theme::Light)}
                                                {theme_button(Theme::Dark)}
                                            </div>

                                            <h4>"Notifications"</h4>
                                            <label class="toggle-row">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || email_updates.get()
                                                    on:change=move |_| {
                                                        set_email_updates.update(|v| *v = !*v)
                                                    }
                                                />
                                                "Email updates"
                                            </label>
                                            <label class="toggle-row">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || push_alerts.get()
                                                    on:change=move |_| {
                                                        set_push_alerts.update(|v| *v = !*v)
                                                    }
                                                />
                                                "Push alerts"
                                            </label>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Some(SettingsTab::Security) => {
                                    view! {
                                        <form class="security" on:submit=save_password>
                                            <h4>"Change Password"</h4>
                                            <input
                                                type="password"
                                                placeholder="Current password"
                                                prop:value=move || current_password.get()
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target
                                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                                        .unwrap();
                                                    set_current_password.set(input.value());
                                                }
                                            />
                                            <input
                                                type="password"
                                                placeholder="New password"
                                                prop:value=move || new_password.get()
                                                on:input=move |ev| {
                                                    let target = ev.target().unwrap();
                                                    let input = target
                                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                                        .unwrap();
                                                    set_new_password.set(input.value());
                                                }
                                            />
                                            <button type="submit" class="primary-btn">
                                                "Update Password"
                                            </button>
                                            <Show when=move || saved.get()>
                                                <p class="saved-note">"Password updated"</p>
                                            </Show>
                                        </form>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
