//! Home Page

use concierge_core::{BookingTrigger, Page};
use leptos::prelude::*;

#[component]
pub fn HomePage(on_navigate: Callback<Page>, on_book: BookingTrigger) -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <p class="eyebrow">"Mirissa · Sri Lanka"</p>
                <h1>"Where the Indian Ocean meets quiet luxury"</h1>
                <p class="tagline">
                    "Twelve rooms, one beach, and a team that remembers how you take your tea."
                </p>
                <div class="cta">
                    <button class="btn btn-primary" on:click=move |_| on_book.fire()>
                        "Book Your Stay"
                    </button>
                    <button class="btn" on:click=move |_| on_navigate.run(Page::Rooms)>
                        "View Rooms"
                    </button>
                </div>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"🌊 Beachfront"</h3>
                    <p>"Step from your terrace straight onto the sand."</p>
                </div>
                <div class="feature">
                    <h3>"🍛 Island Kitchen"</h3>
                    <p>"Fresh catch and Sri Lankan classics, cooked to order."</p>
                </div>
                <div class="feature">
                    <h3>"🐋 Whale Watching"</h3>
                    <p>"Morning tours leave from the Mirissa harbour."</p>
                </div>
            </section>
        </div>
    }
}
