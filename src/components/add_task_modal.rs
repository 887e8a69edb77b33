//! Add Task Modal
//!
//! Small form feeding the to-do column. Ids come from the clock, which is
//! granular enough for a single user clicking buttons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::models::Priority;

#[component]
pub fn AddTaskModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (course, set_course) = signal(String::new());
    let (time, set_time) = signal(String::from("30 mins"));
    let (priority, set_priority) = signal(Priority::Medium);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.is_empty() || course.get().is_empty() || time.get().is_empty() {
            return;
        }
        let id = js_sys::Date::now() as u64;
        ctx.store
            .write()
            .add_task(id, title, course.get(), time.get(), priority.get());
        on_close.run(());
    };

    let priority_buttons = [Priority::Low, Priority::Medium, Priority::High]
        .iter()
        .map(|p| {
            let p = *p;
            view! {
                <button
                    type="button"
                    class=move || {
                        if priority.get() == p {
                            format!("priority-btn active priority-{}", p.label())
                        } else {
                            "priority-btn".to_string()
                        }
                    }
                    on:click=move |_| set_priority.set(p)
                >
                    {p.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>"Add New Task"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Task title..."
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_title.set(input.value());
                        }
                    />
                    <input
                        type="text"
                        placeholder="Course name..."
                        prop:value=move || course.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_course.set(input.value());
                        }
                    />
                    <input
                        type="text"
                        placeholder="Estimate..."
                        prop:value=move || time.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_time.set(input.value());
                        }
                    />
                    <div class="priority-row">{priority_buttons}</div>
                    <button type="submit" class="primary-btn">
                        "Add Task"
                    </button>
                </form>
            </div>
        </div>
    }
}
