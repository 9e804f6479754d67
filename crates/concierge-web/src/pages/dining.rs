//! Dining Page

use leptos::prelude::*;

const MENU: [(&str, &str, &str); 4] = [
    ("Mirissa Prawn Curry", "Tiger prawns simmered in coconut milk and roasted spices", "$22"),
    ("Seafood Platter", "Grilled catch of the day, calamari, and lagoon crab", "$45"),
    ("Tropical Hoppers", "Crisp rice-flour hoppers with egg and seeni sambol", "$12"),
    ("Coconut Sorbet", "Fresh king coconut, served in the shell", "$8"),
];

#[component]
pub fn DiningPage() -> impl IntoView {
    view! {
        <div class="page dining">
            <header class="page-header">
                <h1>"Dining"</h1>
                <p>"Breakfast on the terrace, dinner by lantern light on the sand."</p>
            </header>
            <ul class="menu">
                {MENU
                    .iter()
                    .map(|&(dish, note, price)| {
                        view! {
                            <li class="menu-item">
                                <div>
                                    <h3>{dish}</h3>
                                    <p>{note}</p>
                                </div>
                                <span class="price">{price}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
