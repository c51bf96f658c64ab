use chrono::Utc;
use leptos::html::Input;
use leptos::prelude::*;
use tripcast_core::board::RESULTS_ID;
use tripcast_core::{prediction_text, TripForm, TripRequest, Variant};

use crate::api;
use crate::dom;

fn field_label(id: &str) -> &'static str {
    match id {
        "pickup_datetime" => "Pickup Date & Time",
        "pickup_latitude" | "pickup_lat" => "Pickup Latitude",
        "pickup_longitude" | "pickup_lon" => "Pickup Longitude",
        "dropoff_latitude" | "dropoff_lat" => "Dropoff Latitude",
        "dropoff_longitude" | "dropoff_lon" => "Dropoff Longitude",
        _ => "",
    }
}

fn input_type(id: &str) -> &'static str {
    if id == "pickup_datetime" {
        "datetime-local"
    } else {
        "text"
    }
}

/// Text inputs for a form-style variant plus its submit button and
/// `results` area. Values are read only when the button is clicked.
#[component]
pub fn TripFormPanel(variant: Variant) -> impl IntoView {
    let fields: Vec<(&'static str, NodeRef<Input>)> = variant
        .input_ids()
        .iter()
        .map(|id| (*id, NodeRef::new()))
        .collect();
    let (results, set_results) = signal(String::new());

    let inputs = fields.clone();
    let submit = move |_| {
        let mut form = TripForm::default();
        for (id, node) in &inputs {
            form.set_field(id, dom::input_value(*node));
        }

        let request = match TripRequest::from_form(form, variant, Utc::now()) {
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

    view! {
        <div class="config-panel">
            {fields
                .into_iter()
                .map(|(id, node)| {
                    view! {
                        <div class="form-group">
                            <label for=id>{field_label(id)}</label>
                            <input node_ref=node id=id name=id type=input_type(id) />
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            <button id=variant.submit_id() class="run-btn" on:click=submit>
                "Predict Duration"
            </button>
        </div>

        <div class="results-panel">
            <h3>"Predictions"</h3>
            <pre id=RESULTS_ID class="results-text">{results}</pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_text_input_has_a_label() {
        for variant in [Variant::Form, Variant::Quick] {
            for id in variant.input_ids() {
                assert!(!field_label(id).is_empty(), "no label for {}", id);
            }
        }
    }

    #[test]
    fn test_only_datetime_uses_picker() {
        assert_eq!(input_type("pickup_datetime"), "datetime-local");
        assert_eq!(input_type("pickup_lat"), "text");
    }
}
