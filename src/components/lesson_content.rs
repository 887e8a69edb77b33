//! All Lessons Panel
//!
//! Filter tabs over the lesson grid. "Popular" and "Newest" reorder,
//! "Completed" narrows to finished lessons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::data;
use crate::models::LessonFilter;

#[component]
pub fn LessonContent() -> impl IntoView {
    let ctx = use_app_context();

    let (filter, set_filter) = signal(LessonFilter::All);
    let filtered = move || filter.get().apply(&data::lessons());

    let tabs = LessonFilter::ALL
        .iter()
        .map(|tab| {
            let tab = *tab;
            view! {
                <button
                    class=move || {
                        if filter.get() == tab { "filter-tab active" } else { "filter-tab" }
                    }
                    on:click=move |_| set_filter.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="lesson-content">
            <header class="content-header">
                <h2>"All Lessons"</h2>
            </header>

            <div class="filter-tabs">{tabs}</div>

            <div class="lesson-grid">
                <For
                    each=filtered
                    key=|lesson| lesson.id
                    children=move |lesson| {
                        let progress = lesson.progress;
                        let action = if progress == 0 {
                            "Start"
                        } else if progress == 100 {
                            "Review"
                        } else {
                            "Continue"
                        };
                        view! {
                            <div class="lesson-card">
                                <img class="lesson-image" src=lesson.image alt=lesson.title.clone() />
                                <span class="lesson-category">{lesson.category}</span>
                                <h4>{lesson.title}</h4>
                                <div class="lesson-meta">
                                    <span>{lesson.author}</span>
                                    <span>{lesson.duration}</span>
                                    <span>{format!("★ {:.1}", lesson.rating)}</span>
                                </div>
                                <div class="lesson-bar">
                                    <div
                                        class="lesson-bar-fill"
                                        style=format!("width: {progress}%")
                                    ></div>
                                </div>
                                <span class="lesson-progress">{format!("{progress}%")}</span>
                                <button
                                    class="lesson-action"
                                    on:click=move |_| {
                                        ctx.guard(|_| ());
                                    }
                                >
                                    {action}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
