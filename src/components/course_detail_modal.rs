//! Course Detail Modal
//!
//! Syllabus view for the progress card the user clicked. Modules up to the
//! watched count render as completed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::data;
use crate::store::AppStateStoreFields;

#[component]
pub fn CourseDetailModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        {move || {
            store
                .overlays()
                .read()
                .selected_course
                .clone()
                .map(|course| {
                    let percent = course.percent_complete();
                    let watched = course.watched;
                    let modules = (0..course.total as usize)
                        .map(|index| {
                            let done = (index as u32) < watched;
                            view! {
                                <li class=if done { "module done" } else { "module" }>
                                    <span class="module-mark">
                                        {if done { "✓" } else { "○" }}
                                    </span>
                                    {data::module_title(index)}
                                </li>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="modal-backdrop">
                            <div class="modal course-detail-modal">
                                <header class="modal-header">
                                    <h3>{course.title.clone()}</h3>
                                    <button
                                        class="close-btn"
                                        on:click=move |_| {
                                            store.overlays().write().close_course_detail()
                                        }
                                    >
                                        "✕"
                                    </button>
                                </header>

                                <div class="detail-progress">
                                    <span>
                                        {format!("{}/{} modules watched", course.watched, course.total)}
                                    </span>
                                    <div class="card-bar">
                                        <div
                                            class="card-bar-fill"
                                            style=format!("width: {percent}%")
                                        ></div>
                                    </div>
                                    <span>{format!("{percent}% complete")}</span>
                                </div>

                                <ul class="module-list">{modules}</ul>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
