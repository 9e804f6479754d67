//! UI Components

use concierge_core::{BookingTrigger, Message, Role, Room};
use leptos::prelude::*;

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = match message.role {
        Role::User => "bubble bubble-user",
        _ => "bubble bubble-assistant",
    };

    view! {
        <div class=format!("bubble-row bubble-row-{}", message.role)>
            <div class=class>{message.text}</div>
        </div>
    }
}

/// Three bouncing dots shown while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="bubble-row bubble-row-assistant">
            <div class="bubble bubble-assistant typing">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}

/// Room card with its own booking button
#[component]
pub fn RoomCard(room: &'static Room, on_book: BookingTrigger) -> impl IntoView {
    view! {
        <article class="room-card">
            <div class="room-image">
                <img src=room.image alt=room.name />
                <span class="room-rate">{room.rate_label()}</span>
            </div>
            <div class="room-body">
                <h3>{room.name}</h3>
                <p class="room-view">{room.view}</p>
                <p class="room-description">{room.description}</p>
                <ul class="room-amenities">
                    <li>{room.capacity_label()}</li>
                    <li>"Free Wi-Fi"</li>
                    <li>"Breakfast"</li>
                </ul>
                <button class="btn btn-primary" on:click=move |_| on_book.fire()>
                    {room.book_label()}
                </button>
            </div>
        </article>
    }
}
