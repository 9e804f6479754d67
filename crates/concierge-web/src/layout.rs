//! Site chrome: navigation bar and footer

use concierge_core::hotel;
use concierge_core::{BookingTrigger, Page};
use leptos::prelude::*;

#[component]
pub fn NavBar(
    current: Signal<Page>,
    on_navigate: Callback<Page>,
    on_book: BookingTrigger,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <button class="logo" on:click=move |_| on_navigate.run(Page::Home)>
                "OceanView"
                <span class="logo-accent">" Boutique"</span>
            </button>
            <div class="nav-links">
                {Page::NAV
                    .iter()
                    .map(|&page| {
                        view! {
                            <button
                                class="nav-link"
                                class:active=move || current.get() == page
                                on:click=move |_| on_navigate.run(page)
                            >
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="btn btn-primary" on:click=move |_| on_book.fire()>
                "Book Stay"
            </button>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-brand">
                <h4>{hotel::HOTEL_NAME}</h4>
                <p>"A quiet escape on the southern coast of Sri Lanka."</p>
            </div>
            <div class="footer-contact">
                <p>{hotel::ADDRESS}</p>
                <p>{hotel::PHONE}</p>
                <p>{hotel::EMAIL}</p>
            </div>
            <p class="footer-note">
                {format!("Check-in {} · Check-out {}", hotel::CHECK_IN, hotel::CHECK_OUT)}
            </p>
        </footer>
    }
}
