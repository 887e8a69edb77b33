//! Group Panel
//!
//! Community groups grid plus the trending discussions list. Creating a
//! group prepends it to the grid.

use leptos::prelude::*;

use crate::components::CreateGroupModal;
use crate::context::use_app_context;
use crate::data;
use crate::store::AppStateStoreFields;

#[component]
pub fn GroupContent() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (show_create, set_show_create) = signal(false);

    let discussions = data::discussions()
        .into_iter()
        .map(|post| {
            view! {
                <div class="discussion-row">
                    <img class="avatar" src=post.avatar alt=post.author.clone() />
                    <div class="discussion-body">
                        <h4>{post.title}</h4>
                        <div class="discussion-meta">
                            <span>{post.author}</span>
                            <span>{post.time}</span>
                            <span class="tag">{post.tag}</span>
                        </div>
                    </div>
                    <div class="discussion-stats">
                        <span>{format!("♥ {}", post.likes)}</span>
                        <span>{format!("💬 {}", post.comments)}</span>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="group-content">
            <header class="content-header">
                <h2>"Group"</h2>
                <button
                    class="primary-btn"
                    on:click=move |_| {
                        if !ctx.guard(|_| ()) {
                            set_show_create.set(true);
                        }
                    }
                >
                    "+ Create Group"
                </button>
            </header>

            <div class="group-grid">
                <For
                    each=move || store.groups().get()
                    key=|group| group.id
                    children=move |group| {
                        view! {
                            <div class="group-card">
                                <img class="group-image" src=group.image alt=group.name.clone() />
                                <span class="group-category">{group.category}</span>
                                <h4>{group.name}</h4>
                                <div class="group-meta">
                                    <span>{format!("{} members", group.members)}</span>
                                    <span class="online">{format!("{} active", group.active)}</span>
                                </div>
                                <button
                                    class="join-group-btn"
                                    on:click=move |_| {
                                        ctx.guard(|_| ());
                                    }
                                >
                                    "Join Group"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <section class="discussions">
                <h3>"Trending Discussions"</h3>
                {discussions}
            </section>

            <Show when=move || show_create.get()>
                <CreateGroupModal on_close=Callback::new(move |_| set_show_create.set(false)) />
            </Show>
        </div>
    }
}
