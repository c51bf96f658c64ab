pub mod board;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod format;
pub mod prediction;
pub mod response;
pub mod selection;
pub mod trip;
pub mod validate;
pub mod variant;

pub use board::{evaluation_text, prediction_text, ResultsBoard};
pub use config::{ClientConfig, MapConfig};
pub use error::{ClientError, Result};
pub use evaluation::{EvaluationResult, ModelEvaluation, ModelMetrics};
pub use prediction::{ModelPrediction, PredictionResult};
pub use selection::{GeoPoint, MapSelection, Pick};
pub use trip::{default_pickup_datetime, Coordinate, TripForm, TripRequest};
pub use variant::{DurationStyle, PayloadStyle, Variant};
