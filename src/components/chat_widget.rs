//! Floating Chat Widget
//!
//! Launcher button plus the popover conversation. Replies are canned and
//! arrive on a timer; closing the widget cancels any reply in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::flows::{self, CancelHandle};
use crate::models::{ChatMessage, Sender};
use crate::store::AppStateStoreFields;

const REPLIES: &[&str] = &[
    "Got it, let me take a look!",
    "Sure, I'll get back to you shortly.",
    "Thanks for the update!",
];

fn seed_messages() -> Vec<ChatMessage> {
    vec![ChatMessage {
        sender: Sender::Them,
        text: "Hi! Need help with anything?".into(),
        time: "Now".into(),
    }]
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (messages, set_messages) = signal(seed_messages());
    let (draft, set_draft) = signal(String::new());
    let cancel = StoredValue::new(CancelHandle::new());

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.is_empty() {
            return;
        }
        set_draft.set(String::new());
        let reply_index = messages.read().len() % REPLIES.len();
        set_messages.update(|thread| {
            thread.push(ChatMessage {
                sender: Sender::Me,
                text,
                time: "Now".into(),
            });
        });

        let token = cancel.read_value().token();
        spawn_local(async move {
            flows::sleep(flows::CHAT_REPLY_MS).await;
            if token.is_cancelled() {
                return;
            }
            set_messages.update(|thread| {
                thread.push(ChatMessage {
                    sender: Sender::Them,
                    text: REPLIES[reply_index].into(),
                    time: "Now".into(),
                });
            });
        });
    };

    let close = move |_| {
        cancel.read_value().cancel();
        store.overlays().write().close_chat();
    };

    // keyed by position; the thread is append-only
    let entries = move || messages.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <Show
            when=move || store.overlays().read().chat
            fallback=move || {
                view! {
                    <button
                        class="chat-launcher"
                        on:click=move |_| {
                            ctx.guard(|state| state.overlays.open_chat());
                        }
                    >
                        "💬"
                    </button>
                }
            }
        >
            <div class="chat-widget">
                <header class="chat-header">
                    <span>"Support"</span>
                    <button class="close-btn" on:click=close>
                        "✕"
                    </button>
                </header>

                <div class="chat-messages">
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
                                </div>
                            }
                        }
                    />
                </div>

                <form class="chat-composer" on:submit=send>
                    <input
                        type="text"
                        placeholder="Type here..."
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
        </Show>
    }
}
