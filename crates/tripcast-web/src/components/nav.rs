use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/" attr:class="nav-tab">"Form"</A>
            <A href="/quick" attr:class="nav-tab">"Quick"</A>
            <A href="/map" attr:class="nav-tab">"Map"</A>
        </nav>
    }
}
