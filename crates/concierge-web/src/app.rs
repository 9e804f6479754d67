//! Main App Component

use concierge_core::{ContentRouter, Page};
use leptos::prelude::*;

use crate::chat::ChatController;
use crate::layout::{Footer, NavBar};
use crate::pages::{ContactPage, DiningPage, ExperiencePage, HomePage, RoomsPage};
use crate::widget::ChatWidget;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let router = RwSignal::new(ContentRouter::default());
    let chat = ChatController::new();

    let current = Signal::derive(move || router.with(ContentRouter::current));

    let navigate = Callback::new(move |page: Page| {
        let changed = router.try_update(|r| r.navigate(page)).unwrap_or(false);
        if changed {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });

    let on_book = chat.booking_trigger();

    view! {
        <div class="app">
            <NavBar current=current on_navigate=navigate on_book=on_book.clone() />
            <main class="content">
                {move || {
                    let on_book = on_book.clone();
                    match current.get() {
                        Page::Home => view! { <HomePage on_navigate=navigate on_book=on_book /> }.into_any(),
                        Page::Experience => view! { <ExperiencePage /> }.into_any(),
                        Page::Rooms => view! { <RoomsPage on_book=on_book /> }.into_any(),
                        Page::Dining => view! { <DiningPage /> }.into_any(),
                        Page::Contact => view! { <ContactPage /> }.into_any(),
                    }
                }}
            </main>
            <Footer />
            <ChatWidget chat=chat />
        </div>
    }
}
