use leptos::html::Div;
use leptos::prelude::*;
use tripcast_core::board::RESULTS_ID;
use tripcast_core::{prediction_text, MapConfig, MapSelection, TripRequest, Variant};

use crate::api;
use crate::components::evaluation_panel::EvaluationPanel;
use crate::dom;
use crate::map_controller::MapController;

const MAP_ID: &str = "map";

#[component]
pub fn MapPage() -> impl IntoView {
    let variant = Variant::Map;
    let config = MapConfig::default();
    let selection = RwSignal::new(MapSelection::new());
    let map_ref = NodeRef::<Div>::new();
    let (results, set_results) = signal(String::new());

    // Leaflet needs the container in the DOM; mount exactly once.
    Effect::new(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        if map_ref.get().is_none() {
            return false;
        }
        MapController::mount(MAP_ID, &config, selection);
        true
    });

    let predict = move |_| {
        let request = match TripRequest::from_selection(&selection.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                dom::alert(&e.to_string());
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::predict(variant, &request).await;
            set_results.set(prediction_text(variant, &outcome));
        });
    };

    let point_text = |p: Option<tripcast_core::GeoPoint>| {
        p.map_or_else(|| "not selected".to_string(), |p| format!("{:.5}, {:.5}", p.lat, p.lng))
    };

    view! {
        <div class="page map-page">
            <h2>"Pick Your Trip"</h2>
            <p class="placeholder">"Click the map once for departure, then once for arrival."</p>

            <div id=MAP_ID node_ref=map_ref class="map-container"></div>

            <div class="config-panel">
                <p>"Departure: " {move || point_text(selection.get().departure())}</p>
                <p>"Arrival: " {move || point_text(selection.get().arrival())}</p>
                <button id=variant.submit_id() class="run-btn" on:click=predict>
                    "Predict Duration"
                </button>
            </div>

            <div class="results-panel">
                <h3>"Predictions"</h3>
                <pre id=RESULTS_ID class="results-text">{results}</pre>
            </div>

            <EvaluationPanel variant=variant />
        </div>
    }
}
