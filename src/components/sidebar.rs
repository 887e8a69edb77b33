//! Sidebar Navigation
//!
//! Left column: main menu, the premium banner and the session controls.
//! Inbox and Settings sit behind the login gate; the five main entries
//! switch the view for anyone.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::data;
use crate::overlay::SettingsTab;
use crate::store::{store_open_settings, AppStateStoreFields};
use crate::view::ActiveView;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let menu_items = data::MENU_ITEMS
        .iter()
        .map(|label| {
            let view = ActiveView::from_label(label);
            let view_for_class = view.clone();
            view! {
                <button
                    class=move || {
                        if store.active_view().get() == view_for_class {
                            "menu-item active"
                        } else {
                            "menu-item"
                        }
                    }
                    on:click=move |_| ctx.set_view(view.clone())
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="logo">
                <span class="logo-mark">"C"</span>
                <span class="logo-text">"Coursue"</span>
            </div>

            <nav class="sidebar-menu">
                <span class="menu-section">"OVERVIEW"</span>
                {menu_items}
                <button
                    class=move || {
                        if store.active_view().get() == ActiveView::Inbox {
                            "menu-item active"
                        } else {
                            "menu-item"
                        }
                    }
                    on:click=move |_| {
                        ctx.guard(|state| state.set_active_view(ActiveView::Inbox));
                    }
                >
                    "Inbox"
                </button>
            </nav>

            <nav class="sidebar-menu">
                <span class="menu-section">"SETTINGS"</span>
                <button
                    class="menu-item"
                    on:click=move |_| store_open_settings(&store, SettingsTab::Preferences)
                >
                    "Settings"
                </button>
                <button class="menu-item" on:click=move |_| ctx.set_theme(None)>
                    {move || {
                        if store.theme().get().is_dark() { "Light Mode" } else { "Dark Mode" }
                    }}
                </button>
                <Show
                    when=move || store.session().get().logged_in
                    fallback=move || {
                        view! {
                            <button
                                class="menu-item"
                                on:click=move |_| store.overlays().write().open_login()
                            >
                                "Login"
                            </button>
                        }
                    }
                >
                    <button class="menu-item" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </Show>
            </nav>

            <div class="premium-banner">
                <Show
                    when=move || store.session().get().premium
                    fallback=move || {
                        view! {
                            <p>"Upgrade your plan to PRO and get access to all features"</p>
                            <button
                                class="premium-btn"
                                on:click=move |_| {
                                    ctx.guard(|state| state.overlays.open_join());
                                }
                            >
                                "Upgrade Now"
                            </button>
                        }
                    }
                >
                    <p class="premium-active">"PRO member"</p>
                </Show>
            </div>
        </aside>
    }
}
