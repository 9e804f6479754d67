//! Contact Page

use concierge_core::hotel;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let (sent, set_sent) = signal(false);

    view! {
        <div class="page contact">
            <header class="page-header">
                <h1>"Contact Us"</h1>
                <p>{hotel::ADDRESS}</p>
            </header>
            <div class="contact-grid">
                <div class="contact-details">
                    <p><strong>"Phone: "</strong>{hotel::PHONE}</p>
                    <p><strong>"Email: "</strong>{hotel::EMAIL}</p>
                    <p><strong>"Check-in: "</strong>{hotel::CHECK_IN}</p>
                    <p><strong>"Check-out: "</strong>{hotel::CHECK_OUT}</p>
                </div>
                <form
                    class="contact-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        set_sent.set(true);
                    }
                >
                    <input type="text" placeholder="Your name" required />
                    <input type="email" placeholder="Email address" required />
                    <textarea placeholder="How can we help?" rows="4"></textarea>
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                    <Show when=move || sent.get()>
                        <p class="form-note">"Thank you. Our front desk will reply shortly."</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
