//! Overview Panel
//!
//! Header with search, notification bell and profile button, then the
//! progress cards, the "Continue Watching" grid and the "Your Lesson"
//! table. The search box filters the two lists case-insensitively.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::data;
use crate::store::AppStateStoreFields;

#[component]
pub fn DashboardContent() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (query, set_query) = signal(String::new());

    let watch_items = move || {
        let q = query.get();
        data::watch_list()
            .into_iter()
            .filter(|item| q.is_empty() || item.matches(&q))
            .collect::<Vec<_>>()
    };

    let lesson_rows = move || {
        let q = query.get();
        data::lesson_rows()
            .into_iter()
            .filter(|row| q.is_empty() || row.matches(&q))
            .collect::<Vec<_>>()
    };

    let progress_cards = data::progress_cards()
        .into_iter()
        .map(|course| {
            let percent = course.percent_complete();
            let course_for_click = course.clone();
            view! {
                <button
                    class=format!("progress-card accent-{}", course.accent)
                    on:click=move |_| {
                        store.overlays().write().open_course_detail(course_for_click.clone())
                    }
                >
                    <span class="card-title">{course.title.clone()}</span>
                    <span class="card-meta">
                        {format!("{}/{} watched", course.watched, course.total)}
                    </span>
                    <div class="card-bar">
                        <div class="card-bar-fill" style=format!("width: {percent}%")></div>
                    </div>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-content">
            <header class="content-header">
                <h2>"Hello, welcome back!"</h2>
                <div class="header-actions">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search your course..."
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_query.set(input.value());
                        }
                    />
                    <button
                        class="bell-btn"
                        on:click=move |_| store.overlays().write().open_notifications()
                    >
                        "🔔"
                        {move || {
                            let unread = store.read().unread_notifications();
                            (unread > 0).then(|| view! { <span class="badge">{unread}</span> })
                        }}
                    </button>
                    <button
                        class="profile-btn"
                        on:click=move |_| {
                            ctx.guard(|state| state.overlays.open_profile());
                        }
                    >
                        <img class="avatar" src="https://i.pravatar.cc/150?u=me" alt="Profile" />
                    </button>
                </div>
            </header>

            <section class="progress-cards">{progress_cards}</section>

            <section class="continue-watching">
                <h3>"Continue Watching"</h3>
                <Show when=move || watch_items().is_empty()>
                    <p class="empty-note">"No courses found."</p>
                </Show>
                <div class="watch-grid">
                    <For
                        each=watch_items
                        key=|item| item.title.clone()
                        children=move |item| {
                            view! {
                                <div class="watch-card">
                                    <img class="watch-image" src=item.image alt=item.title.clone() />
                                    <span class=format!("watch-tag accent-{}", item.accent)>
                                        {item.category}
                                    </span>
                                    <h4>{item.title}</h4>
                                    <div class="watch-mentor">
                                        <img class="avatar" src=item.avatar alt=item.mentor.clone() />
                                        <span>{item.mentor}</span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <section class="your-lesson">
                <h3>"Your Lesson"</h3>
                <table class="lesson-table">
                    <thead>
                        <tr>
                            <th>"MENTOR"</th>
                            <th>"DATE"</th>
                            <th>"TYPE"</th>
                            <th>"TITLE"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=lesson_rows
                            key=|row| row.title.clone()
                            children=move |row| {
                                view! {
                                    <tr>
                                        <td>
                                            <img class="avatar" src=row.avatar alt=row.mentor.clone() />
                                            {row.mentor}
                                        </td>
                                        <td>{row.date}</td>
                                        <td>{row.tag}</td>
                                        <td>{row.title}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}

/// Placeholder for sidebar entries without a dedicated panel
#[component]
pub fn ComingSoon(label: String) -> impl IntoView {
    view! {
        <div class="coming-soon">
            <h2>{label}</h2>
            <p>"This section is coming soon."</p>
        </div>
    }
}
