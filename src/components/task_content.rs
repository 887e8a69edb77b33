//! Task Board Panel
//!
//! Three-column kanban view over the store's task board. New tasks land in
//! the to-do column through the add-task modal.

use leptos::prelude::*;

use crate::components::AddTaskModal;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskContent() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (show_add_task, set_show_add_task) = signal(false);

    view! {
        <div class="task-content">
            <header class="content-header">
                <h2>"Task"</h2>
                <button
                    class="primary-btn"
                    on:click=move |_| {
                        if !ctx.guard(|_| ()) {
                            set_show_add_task.set(true);
                        }
                    }
                >
                    "+ Add Task"
                </button>
            </header>

            <div class="task-board">
                <div class="task-column">
                    <h3>
                        "To Do "
                        <span class="count">{move || store.tasks().read().todo.len()}</span>
                    </h3>
                    <For
                        each=move || store.tasks().get().todo
                        key=|task| task.id
                        children=move |task| {
                            view! {
                                <div class="task-card">
                                    <span class=format!("priority priority-{}", task.priority.label())>
                                        {task.priority.label()}
                                    </span>
                                    <h4>{task.title}</h4>
                                    <div class="task-meta">
                                        <span>{task.course}</span>
                                        <span>{task.time}</span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="task-column">
                    <h3>
                        "In Progress "
                        <span class="count">{move || store.tasks().read().in_progress.len()}</span>
                    </h3>
                    <For
                        each=move || store.tasks().get().in_progress
                        key=|task| task.id
                        children=move |task| {
                            let progress = task.progress;
                            view! {
                                <div class="task-card">
                                    <span class=format!("priority priority-{}", task.priority.label())>
                                        {task.priority.label()}
                                    </span>
                                    <h4>{task.title}</h4>
                                    <div class="task-meta">
                                        <span>{task.course}</span>
                                    </div>
                                    <div class="task-bar">
                                        <div
                                            class="task-bar-fill"
                                            style=format!("width: {progress}%")
                                        ></div>
                                    </div>
                                    <span class="task-progress">{format!("{progress}%")}</span>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="task-column">
                    <h3>
                        "Done "
                        <span class="count">{move || store.tasks().read().done.len()}</span>
                    </h3>
                    <For
                        each=move || store.tasks().get().done
                        key=|task| task.id
                        children=move |task| {
                            view! {
                                <div class="task-card done">
                                    <h4>{task.title}</h4>
                                    <div class="task-meta">
                                        <span>{task.course}</span>
                                        <span class="score">{task.score}</span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <Show when=move || show_add_task.get()>
                <AddTaskModal on_close=Callback::new(move |_| set_show_add_task.set(false)) />
            </Show>
        </div>
    }
}
