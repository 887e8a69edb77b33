//! Course Store Panel
//!
//! Priced catalog with the checkout entry point. A finished checkout marks
//! the course owned for this session and drops a notification.

use leptos::prelude::*;

use crate::components::CheckoutModal;
use crate::context::use_app_context;
use crate::data;
use crate::models::{Notification, NotificationKind, StoreCourse};

#[component]
pub fn CourseStoreContent() -> impl IntoView {
    let ctx = use_app_context();

    let (checkout_course, set_checkout_course) = signal(None::<StoreCourse>);
    let (owned, set_owned) = signal(Vec::<u32>::new());

    let on_purchased = Callback::new(move |course: StoreCourse| {
        set_owned.update(|ids| ids.push(course.id));
        let mut state = ctx.store.write();
        let id = state.notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        state.notifications.insert(
            0,
            Notification {
                id,
                kind: NotificationKind::Success,
                title: "Purchase Complete".into(),
                message: format!("You now own \"{}\"", course.title),
                time: "Just now".into(),
                read: false,
            },
        );
    });

    view! {
        <div class="store-content">
            <header class="content-header">
                <h2>"Course Store"</h2>
            </header>

            <div class="store-grid">
                <For
                    each=|| data::store_courses()
                    key=|course| course.id
                    children=move |course| {
                        let id = course.id;
                        let course_for_buy = course.clone();
                        let is_owned = move || owned.read().contains(&id);
                        view! {
                            <div class="store-card">
                                <img class="store-image" src=course.image.clone() alt=course.title.clone() />
                                {course.trending.then(|| view! { <span class="trending">"Trending"</span> })}
                                <span class="store-category">{course.category.clone()}</span>
                                <h4>{course.title.clone()}</h4>
                                <div class="store-author">
                                    <img class="avatar" src=course.avatar.clone() alt=course.author.clone() />
                                    <span>{course.author.clone()}</span>
                                </div>
                                <div class="store-meta">
                                    <span>{format!("★ {:.1} ({})", course.rating, course.reviews)}</span>
                                    <span>{course.duration.clone()}</span>
                                    <span>{format!("{} lessons", course.lessons)}</span>
                                    <span class="level">{course.level.clone()}</span>
                                </div>
                                <div class="store-footer">
                                    <span class="price">{course.price.clone()}</span>
                                    <button
                                        class="primary-btn"
                                        disabled=is_owned
                                        on:click=move |_| {
                                            if is_owned() {
                                                return;
                                            }
                                            if !ctx.guard(|_| ()) {
                                                set_checkout_course.set(Some(course_for_buy.clone()));
                                            }
                                        }
                                    >
                                        {move || if is_owned() { "Owned" } else { "Buy Now" }}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            {move || {
                checkout_course
                    .get()
                    .map(|course| {
                        view! {
                            <CheckoutModal
                                course=course
                                on_close=Callback::new(move |_| set_checkout_course.set(None))
                                on_purchased=on_purchased
                            />
                        }
                    })
            }}
        </div>
    }
}
