//! Experience Page

use leptos::prelude::*;

const ACTIVITIES: [(&str, &str); 4] = [
    ("Whale Watching", "Blue whales and spinner dolphins off the Mirissa coast, November to April."),
    ("Surf Lessons", "Gentle reef breaks a short walk from the hotel, boards included."),
    ("Ayurveda Spa", "Traditional treatments using oils blended from local herbs."),
    ("Coconut Tree Hill", "A sunset walk to the island's most photographed palm grove."),
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <div class="page experience">
            <header class="page-header">
                <h1>"The Experience"</h1>
                <p>"Slow mornings, warm water, and the south coast on your doorstep."</p>
            </header>
            <section class="grid">
                {ACTIVITIES
                    .iter()
                    .map(|&(title, body)| {
                        view! {
                            <div class="feature">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
