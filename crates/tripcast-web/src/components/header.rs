use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Tripcast"</h1>
            <span class="subtitle">"Trip Duration Prediction"</span>
        </header>
    }
}
