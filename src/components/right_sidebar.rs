//! Right Sidebar
//!
//! Statistics chart, mentor list with follow toggles and the friends list.
//! The chart is plain divs scaled off the weekly activity values.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::data;

#[component]
pub fn RightSidebar() -> impl IntoView {
    let ctx = use_app_context();

    let stats = data::stats();
    let max = stats.iter().map(|s| s.value).max().unwrap_or(1).max(1);
    let (followed, set_followed) = signal(Vec::<String>::new());

    let bars = stats
        .into_iter()
        .map(|point| {
            let height = point.value * 100 / max;
            view! {
                <div class="stat-col">
                    <div class="stat-bar" style=format!("height: {height}%")></div>
                    <span class="stat-day">{point.day}</span>
                </div>
            }
        })
        .collect_view();

    let mentors = data::mentors()
        .into_iter()
        .map(|mentor| {
            let name = mentor.name.clone();
            let name_for_label = mentor.name.clone();
            view! {
                <div class="mentor-row">
                    <img class="avatar" src=mentor.avatar alt=mentor.name.clone() />
                    <div class="mentor-info">
                        <span class="mentor-name">{mentor.name.clone()}</span>
                        <span class="mentor-role">{mentor.role}</span>
                    </div>
                    <button
                        class="follow-btn"
                        on:click=move |_| {
                            let name = name.clone();
                            ctx.guard(move |_| {
                                set_followed.update(|list| {
                                    if let Some(pos) = list.iter().position(|n| n == &name) {
                                        list.remove(pos);
                                    } else {
                                        list.push(name);
                                    }
                                });
                            });
                        }
                    >
                        {move || {
                            if followed.read().iter().any(|n| n == &name_for_label) {
                                "Followed"
                            } else {
                                "+ Follow"
                            }
                        }}
                    </button>
                </div>
            }
        })
        .collect_view();

    let friends = data::friends()
        .into_iter()
        .map(|friend| {
            view! {
                <div class="friend-row">
                    <img class="avatar" src=friend.avatar alt=friend.name.clone() />
                    <div class="friend-info">
                        <span class="friend-name">{friend.name}</span>
                        <span class="friend-status">{friend.status}</span>
                    </div>
                    <button
                        class="chat-btn"
                        on:click=move |_| {
                            ctx.guard(|state| state.overlays.open_chat());
                        }
                    >
                        "Chat"
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <aside class="right-sidebar">
            <section class="statistics">
                <h3>"Statistic"</h3>
                <div class="stat-chart">{bars}</div>
            </section>

            <section class="mentors">
                <div class="section-head">
                    <h3>"Your mentor"</h3>
                    <span class="link-label">"See All"</span>
                </div>
                {mentors}
            </section>

            <section class="friends">
                <h3>"Friends"</h3>
                {friends}
            </section>
        </aside>
    }
}
