//! Create Group Modal
//!
//! Name plus category picker. The cover image is rotated out of a fixed
//! pool keyed off the generated id.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::data;

#[component]
pub fn CreateGroupModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::from(data::GROUP_CATEGORIES[0]));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.is_empty() {
            return;
        }
        let id = js_sys::Date::now() as u64;
        let image = data::GROUP_IMAGES[id as usize % data::GROUP_IMAGES.len()].to_string();
        ctx.store.write().create_group(id, name, category.get(), image);
        on_close.run(());
    };

    let category_buttons = data::GROUP_CATEGORIES
        .iter()
        .map(|label| {
            view! {
                <button
                    type="button"
                    class=move || {
                        if category.get() == *label {
                            "category-btn active"
                        } else {
                            "category-btn"
                        }
                    }
                    on:click=move |_| set_category.set(label.to_string())
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>"Create New Group"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Group name..."
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                    <div class="category-row">{category_buttons}</div>
                    <button type="submit" class="primary-btn">
                        "Create Group"
                    </button>
                </form>
            </div>
        </div>
    }
}
