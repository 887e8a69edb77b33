//! Inbox Panel
//!
//! Conversation list on the left, the open thread on the right. Sending
//! appends to the thread; there is no delivery behind it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::data;
use crate::models::{ChatMessage, Sender};

#[component]
pub fn InboxContent() -> impl IntoView {
    let (selected, set_selected) = signal(1u32);
    let (messages, set_messages) = signal(data::inbox_thread());
    let (draft, set_draft) = signal(String::new());
    // narrow-screen sub-view switch: list by default, thread once a
    // conversation is picked
    let (thread_open, set_thread_open) = signal(false);

    // keyed by position; the thread is append-only
    let entries = move || messages.get().into_iter().enumerate().collect::<Vec<_>>();

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.is_empty() {
            return;
        }
        set_messages.update(|thread| {
            thread.push(ChatMessage {
                sender: Sender::Me,
                text,
                time: "Now".into(),
            });
        });
        set_draft.set(String::new());
    };

    view! {
        <div class=move || {
            if thread_open.get() { "inbox-content thread-open" } else { "inbox-content" }
        }>
            <div class="conversation-list">
                <h3>"Messages"</h3>
                <For
                    each=|| data::conversations()
                    key=|convo| convo.id
                    children=move |convo| {
                        let id = convo.id;
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == id {
                                        "conversation active"
                                    } else {
                                        "conversation"
                                    }
                                }
                                on:click=move |_| {
                                    set_selected.set(id);
                                    set_thread_open.set(true);
                                }
                            >
                                <img class="avatar" src=convo.avatar alt=convo.name.clone() />
                                <div class="conversation-body">
                                    <span class="conversation-name">
                                        {convo.name}
                                        {convo.is_group.then(|| view! { <span class="tag">"Group"</span> })}
                                    </span>
                                    <span class="conversation-preview">{convo.last_message}</span>
                                </div>
                                <div class="conversation-side">
                                    <span class="conversation-time">{convo.time}</span>
                                    {(convo.unread > 0)
                                        .then(|| view! { <span class="badge">{convo.unread}</span> })}
                                </div>
                            </button>
                        }
                    }
                />
            </div>

            <div class="thread">
                <header class="thread-header">
                    <button class="back-btn" on:click=move |_| set_thread_open.set(false)>
                        "←"
                    </button>
                    {move || {
                        data::conversations()
                            .into_iter()
                            .find(|c| c.id == selected.get())
                            .map(|c| c.name)
                            .unwrap_or_default()
                    }}
                </header>

                <div class="thread-messages">
                    <For
                        each=entries
                        key=|(i, _)| *i
                        children=move |(_, message)| {
                            let side = match message.sender {
                                Sender::Me => "message me",
                                Sender::Them => "message them",
                            };
                            view! {
                                <div class=side>
                                    <p>{message.text}</p>
                                    <span class="message-time">{message.time}</span>
                                </div>
                            }
                        }
                    />
                </div>

                <form class="thread-composer" on:submit=send>
                    <input
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_draft.set(input.value());
                        }
                    />
                    <button type="submit">"Send"</button>
                </form>
            </div>
        </div>
    }
}
