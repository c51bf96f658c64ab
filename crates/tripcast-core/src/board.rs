use crate::error::{ClientError, Result};
use crate::evaluation::EvaluationResult;
use crate::prediction::PredictionResult;
use crate::variant::Variant;

pub const RESULTS_ID: &str = "results";
pub const EVALUATION_RESULTS_ID: &str = "evaluation-results";
pub const FETCH_RESULTS_ID: &str = "fetch-results";

/// Text for the `results` area after a predict call.
pub fn prediction_text(variant: Variant, outcome: &Result<PredictionResult>) -> String {
    match outcome {
        Ok(result) => result.render(variant.duration_style()),
        Err(e) => e.results_text(),
    }
}

/// Text for the `evaluation-results` area after a results call.
pub fn evaluation_text(variant: Variant, outcome: &Result<EvaluationResult>) -> String {
    match outcome {
        Ok(result) => result.render(variant.shows_r2()),
        Err(e) => e.results_text(),
    }
}

/// The two output areas. Each operation writes only its own area and the
/// latest write wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsBoard {
    results: String,
    evaluation_results: String,
}

impl ResultsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &str {
        &self.results
    }

    pub fn evaluation_results(&self) -> &str {
        &self.evaluation_results
    }

    /// Writes a predict outcome. Validation failures leave the board alone
    /// and come back as the alert text to show instead.
    pub fn show_prediction(
        &mut self,
        variant: Variant,
        outcome: &Result<PredictionResult>,
    ) -> Option<String> {
        if let Err(ClientError::Validation(alert)) = outcome {
            return Some(alert.clone());
        }
        self.results = prediction_text(variant, outcome);
        None
    }

    pub fn show_evaluation(
        &mut self,
        variant: Variant,
        outcome: &Result<EvaluationResult>,
    ) -> Option<String> {
        if let Err(ClientError::Validation(alert)) = outcome {
            return Some(alert.clone());
        }
        self.evaluation_results = evaluation_text(variant, outcome);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_touches_only_its_area() {
        let mut board = ResultsBoard::new();
        let evaluation = EvaluationResult::from_body(r#"{"knn": {"mean_squared_error": 4}}"#);
        board.show_evaluation(Variant::Form, &evaluation);

        board.show_prediction(
            Variant::Form,
            &Err(ClientError::Transport("error sending request".to_string())),
        );

        assert_eq!(board.results(), "Error: error sending request");
        assert_eq!(
            board.evaluation_results(),
            "knn - Mean Squared Error: 4.00 seconds²"
        );
    }

    #[test]
    fn test_validation_is_alert_not_text() {
        let mut board = ResultsBoard::new();
        let alert = board.show_prediction(
            Variant::Quick,
            &Err(ClientError::Validation("Please fill in all fields!".to_string())),
        );
        assert_eq!(alert.as_deref(), Some("Please fill in all fields!"));
        assert_eq!(board, ResultsBoard::new());
    }

    #[test]
    fn test_application_error_replaces_previous_lines() {
        let mut board = ResultsBoard::new();
        board.show_prediction(Variant::Map, &PredictionResult::from_body(r#"{"knn": 90}"#));
        assert_eq!(board.results(), "knn: 1 min 30 sec");

        board.show_prediction(Variant::Map, &PredictionResult::from_body(r#"{"error": "boom"}"#));
        assert_eq!(board.results(), "Error: boom");
    }
}
