use crate::error::{ClientError, Result};
use crate::format::fixed;
use crate::response::decode_object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mean_squared_error: f64,
    #[serde(default)]
    pub r2_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEvaluation {
    pub model: String,
    pub metrics: ModelMetrics,
}

/// Offline evaluation metrics per model, in response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub models: Vec<ModelEvaluation>,
}

impl EvaluationResult {
    pub fn from_body(body: &str) -> Result<Self> {
        let object = decode_object(body)?;

        let models = object
            .into_iter()
            .map(|(model, value)| -> Result<ModelEvaluation> {
                let metrics: ModelMetrics = serde_json::from_value(value).map_err(|e| {
                    ClientError::Transport(format!("Invalid metrics for {}: {}", model, e))
                })?;
                Ok(ModelEvaluation { model, metrics })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { models })
    }

    /// One line per model. `with_r2` appends the R² score where the service reports one.
    pub fn render(&self, with_r2: bool) -> String {
        self.models
            .iter()
            .map(|m| {
                let mut line = format!(
                    "{} - Mean Squared Error: {} seconds²",
                    m.model,
                    fixed(m.metrics.mean_squared_error, 2)
                );
                if let (true, Some(r2)) = (with_r2, m.metrics.r2_score) {
                    line.push_str(&format!(", R² Score: {}", fixed(r2, 2)));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_rounds_half_up() {
        let result =
            EvaluationResult::from_body(r#"{"model_a": {"mean_squared_error": 10.555}}"#).unwrap();
        assert_eq!(
            result.render(false),
            "model_a - Mean Squared Error: 10.56 seconds²"
        );
    }

    #[test]
    fn test_r2_only_when_requested_and_present() {
        let body = r#"{
            "random_forest": {"mean_squared_error": 1520.3, "r2_score": 0.8123},
            "knn": {"mean_squared_error": 1810}
        }"#;
        let result = EvaluationResult::from_body(body).unwrap();

        assert_eq!(
            result.render(true),
            "random_forest - Mean Squared Error: 1520.30 seconds², R² Score: 0.81\n\
             knn - Mean Squared Error: 1810.00 seconds²"
        );
        assert_eq!(
            result.render(false),
            "random_forest - Mean Squared Error: 1520.30 seconds²\n\
             knn - Mean Squared Error: 1810.00 seconds²"
        );
    }

    #[test]
    fn test_error_body() {
        let err = EvaluationResult::from_body(
            r#"{"error": "[Errno 2] No such file or directory: 'models/results.json'"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.results_text(),
            "Error: [Errno 2] No such file or directory: 'models/results.json'"
        );
    }

    #[test]
    fn test_missing_mse_is_transport() {
        let err = EvaluationResult::from_body(r#"{"knn": {"r2_score": 0.5}}"#).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
