//! Floating booking-assistant widget

use leptos::html::Div;
use leptos::prelude::*;

use crate::chat::ChatController;
use crate::components::{MessageBubble, TypingIndicator};

#[component]
pub fn ChatWidget(chat: ChatController) -> impl IntoView {
    let (input, set_input) = signal(String::new());
    let list_ref = NodeRef::<Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        let _ = (chat.message_count(), chat.is_loading(), chat.is_open());
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    let submit = move || {
        if chat.send(&input.get_untracked()) {
            set_input.set(String::new());
        }
    };

    view! {
        <div class="chat-widget">
            <Show when=move || chat.is_open()>
                <section class="chat-panel">
                    <header class="chat-header">
                        <div>
                            <h3>"Booking Assistant"</h3>
                            <p class="chat-subtitle">"AI-Powered Concierge"</p>
                        </div>
                        <button class="chat-close" on:click=move |_| chat.toggle()>"×"</button>
                    </header>

                    <div class="chat-messages" node_ref=list_ref>
                        <For
                            each=move || chat.messages()
                            key=|(idx, _)| *idx
                            children=move |(_, msg)| view! { <MessageBubble message=msg /> }
                        />
                        <Show when=move || chat.is_loading()>
                            <TypingIndicator />
                        </Show>
                    </div>

                    <div class="chat-suggestions">
                        {move || {
                            chat.suggestions()
                                .iter()
                                .map(|&(label, prompt)| {
                                    view! {
                                        <button class="chip" on:click=move |_| { chat.send(prompt); }>
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class="chat-input">
                        <input
                            type="text"
                            placeholder="Type your reply here..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit();
                                }
                            }
                        />
                        <button
                            class="btn btn-primary"
                            on:click=move |_| submit()
                            disabled=move || chat.is_loading() || input.get().trim().is_empty()
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </Show>

            <button class="chat-launcher" on:click=move |_| chat.toggle()>
                {move || if chat.is_open() { "▾" } else { "💬" }}
                <Show when=move || { !chat.is_open() && chat.unread() > 0 }>
                    <span class="badge">{move || chat.unread()}</span>
                </Show>
            </button>
        </div>
    }
}
