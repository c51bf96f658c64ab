use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::nav::NavTabs;
use crate::pages::{form::FormPage, map::MapPage, quick::QuickPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <NavTabs />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=FormPage />
                        <Route path=path!("/quick") view=QuickPage />
                        <Route path=path!("/map") view=MapPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
