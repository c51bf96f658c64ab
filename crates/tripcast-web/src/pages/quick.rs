use leptos::prelude::*;
use tripcast_core::Variant;

use crate::components::evaluation_panel::EvaluationPanel;
use crate::components::trip_form::TripFormPanel;

/// Coordinates only; the pickup time is the moment of submission.
#[component]
pub fn QuickPage() -> impl IntoView {
    view! {
        <div class="page quick-page">
            <h2>"Quick Estimate"</h2>
            <p class="placeholder">"Pickup time is taken as now."</p>
            <TripFormPanel variant=Variant::Quick />
            <EvaluationPanel variant=Variant::Quick />
        </div>
    }
}
