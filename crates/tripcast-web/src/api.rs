use gloo_net::http::Request;
use tripcast_core::{ClientError, EvaluationResult, PredictionResult, Result, TripRequest, Variant};

use crate::dom;

/// Posts the trip to the variant's predict path, resolved by the browser
/// against the current page.
pub async fn predict(variant: Variant, request: &TripRequest) -> Result<PredictionResult> {
    let body = request.to_json()?;

    let resp = Request::post(variant.predict_path())
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    let text = resp.text().await.map_err(transport)?;
    PredictionResult::from_body(&text).inspect_err(|e| dom::log_warn(&format!("predict: {}", e)))
}

pub async fn fetch_results(variant: Variant) -> Result<EvaluationResult> {
    let resp = Request::get(variant.results_path())
        .send()
        .await
        .map_err(transport)?;

    let text = resp.text().await.map_err(transport)?;
    EvaluationResult::from_body(&text).inspect_err(|e| dom::log_warn(&format!("results: {}", e)))
}

fn transport(e: gloo_net::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}
