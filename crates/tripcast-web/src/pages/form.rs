use leptos::prelude::*;
use tripcast_core::Variant;

use crate::components::evaluation_panel::EvaluationPanel;
use crate::components::trip_form::TripFormPanel;

#[component]
pub fn FormPage() -> impl IntoView {
    view! {
        <div class="page form-page">
            <h2>"Trip Duration Prediction"</h2>
            <TripFormPanel variant=Variant::Form />
            <EvaluationPanel variant=Variant::Form />
        </div>
    }
}
