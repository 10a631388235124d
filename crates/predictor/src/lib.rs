//! Vehicle Price Predictor
//!
//! Turns a raw (year, make, model) triple into a price estimate using
//! pre-trained artifacts: a fitted one-hot preprocessor and a linear
//! regression model, both loaded once at startup and read-only afterwards.

mod artifacts;
mod predictor;
mod record;

pub use artifacts::{Preprocessor, RegressionModel, UnknownPolicy};
pub use predictor::{Predictor, DEFAULT_WEIGHTS_DIR};
pub use record::{FeatureRecord, VehicleQuery, REFERENCE_YEAR};

use thiserror::Error;

/// Errors during artifact loading and prediction
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Artifact load failed for {path}: {reason}")]
    ArtifactLoad { path: String, reason: String },
    #[error("Year is not an integer: {0:?}")]
    InvalidYear(String),
    #[error("Unknown {column} category: {value:?}")]
    UnknownCategory { column: &'static str, value: String },
    #[error("Invalid feature dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
