//! Notifications Panel
//!
//! Slide-over listing store notifications with a mark-all-read action.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::NotificationKind;
use crate::store::AppStateStoreFields;

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "ℹ",
        NotificationKind::Success => "✓",
        NotificationKind::Message => "💬",
    }
}

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <Show when=move || store.overlays().read().notifications>
            <div class="notifications-panel">
                <header class="panel-header">
                    <h3>"Notifications"</h3>
                    <button
                        class="link-btn"
                        on:click=move |_| store.write().mark_all_notifications_read()
                    >
                        "Mark all as read"
                    </button>
                    <button
                        class="close-btn"
                        on:click=move |_| store.overlays().write().close_notifications()
                    >
                        "✕"
                    </button>
                </header>

                <For
                    each=move || store.notifications().get()
                    key=|n| (n.id, n.read)
                    children=move |n| {
                        view! {
                            <div class=if n.read { "notification read" } else { "notification" }>
                                <span class="kind-icon">{kind_icon(n.kind)}</span>
                                <div class="notification-body">
                                    <h4>{n.title}</h4>
                                    <p>{n.message}</p>
                                    <span class="notification-time">{n.time}</span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
