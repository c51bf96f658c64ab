use leptos::prelude::*;
use tripcast_core::board::{EVALUATION_RESULTS_ID, FETCH_RESULTS_ID};
use tripcast_core::{evaluation_text, Variant};

use crate::api;

/// `fetch-results` button and the `evaluation-results` area it writes to.
#[component]
pub fn EvaluationPanel(variant: Variant) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let fetch_results = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::fetch_results(variant).await;
            set_text.set(evaluation_text(variant, &outcome));
        });
    };

    view! {
        <div class="results-panel">
            <h3>"Model Evaluation"</h3>
            <button id=FETCH_RESULTS_ID class="run-btn" on:click=fetch_results>
                "Fetch Results"
            </button>
            <pre id=EVALUATION_RESULTS_ID class="results-text">{text}</pre>
        </div>
    }
}
