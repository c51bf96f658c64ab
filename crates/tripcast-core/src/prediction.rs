use crate::error::{ClientError, Result};
use crate::format::{fixed, minutes_seconds};
use crate::response::decode_object;
use crate::variant::DurationStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub model: String,
    pub seconds: f64,
}

/// Predicted trip duration per model, in response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predictions: Vec<ModelPrediction>,
}

impl PredictionResult {
    pub fn from_body(body: &str) -> Result<Self> {
        let object = decode_object(body)?;

        let predictions = object
            .into_iter()
            .map(|(model, value)| match value.as_f64() {
                Some(seconds) => Ok(ModelPrediction { model, seconds }),
                None => Err(ClientError::Transport(format!(
                    "Prediction for {} is not a number: {}",
                    model, value
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { predictions })
    }

    pub fn render(&self, style: DurationStyle) -> String {
        self.predictions
            .iter()
            .map(|p| match style {
                DurationStyle::Seconds => format!("{}: {} seconds", p.model, fixed(p.seconds, 2)),
                DurationStyle::MinutesSeconds => {
                    let (min, sec) = minutes_seconds(p.seconds);
                    format!("{}: {} min {} sec", p.model, min, sec)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_rendering() {
        let result = PredictionResult::from_body(r#"{"model_a": 125.4}"#).unwrap();
        assert_eq!(result.render(DurationStyle::Seconds), "model_a: 125.40 seconds");
    }

    #[test]
    fn test_minutes_rendering() {
        let result = PredictionResult::from_body(r#"{"model_a": 125.4}"#).unwrap();
        assert_eq!(result.render(DurationStyle::MinutesSeconds), "model_a: 2 min 5 sec");
    }

    #[test]
    fn test_one_line_per_model_in_order() {
        let result = PredictionResult::from_body(
            r#"{"random_forest": 612.0, "knn": 598.456, "linear_regression": 700}"#,
        )
        .unwrap();
        assert_eq!(
            result.render(DurationStyle::Seconds),
            "random_forest: 612.00 seconds\nknn: 598.46 seconds\nlinear_regression: 700.00 seconds"
        );
    }

    #[test]
    fn test_error_body_yields_no_model_lines() {
        let err = PredictionResult::from_body(r#"{"error": "could not convert string to float"}"#)
            .unwrap_err();
        assert_eq!(err.results_text(), "Error: could not convert string to float");
    }

    #[test]
    fn test_non_numeric_prediction_is_transport() {
        let err = PredictionResult::from_body(r#"{"knn": "fast"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
