//! Rooms Page

use concierge_core::{BookingTrigger, rooms};
use leptos::prelude::*;

use crate::components::RoomCard;

#[component]
pub fn RoomsPage(on_book: BookingTrigger) -> impl IntoView {
    view! {
        <div class="page rooms">
            <header class="page-header">
                <h1>"Our Rooms"</h1>
                <p>"Every room comes with breakfast, Wi-Fi, and an ocean breeze."</p>
            </header>
            <section class="room-grid">
                {rooms()
                    .iter()
                    .map(|room| view! { <RoomCard room=room on_book=on_book.clone() /> })
                    .collect_view()}
            </section>
        </div>
    }
}
