//! Pre-Trained Artifact Types
//!
//! The preprocessor and regression model are fitted offline by the training
//! pipeline and shipped as JSON. This module only reproduces their calling
//! contract: `transform(record) -> vector` and `predict(vector) -> scalar`.
//! Feature layout is one-hot `make` block, one-hot `model` block, then
//! `age` passed through, matching the column order the model was fitted on.

use crate::record::FeatureRecord;
use crate::PredictorError;
use serde::{Deserialize, Serialize};

/// What the fitted encoder does with a category it has never seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    /// Reject the record
    Error,
    /// Encode an all-zero block for the column
    Ignore,
}

/// Fitted one-hot encoder with `age` passthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preprocessor {
    /// Unknown-category behavior, baked in at fit time
    pub handle_unknown: UnknownPolicy,
    /// Vocabulary for the `make` column, in training order
    pub make_categories: Vec<String>,
    /// Vocabulary for the `model` column, in training order
    pub model_categories: Vec<String>,
}

impl Preprocessor {
    /// Width of the encoded feature vector
    pub fn output_dimension(&self) -> usize {
        self.make_categories.len() + self.model_categories.len() + 1
    }

    /// Encode a record into a numeric feature vector.
    pub fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>, PredictorError> {
        let mut features = Vec::with_capacity(self.output_dimension());
        self.encode_one_hot("make", &record.make, &self.make_categories, &mut features)?;
        self.encode_one_hot("model", &record.model, &self.model_categories, &mut features)?;
        features.push(record.age as f64);
        Ok(features)
    }

    fn encode_one_hot(
        &self,
        column: &'static str,
        value: &str,
        categories: &[String],
        out: &mut Vec<f64>,
    ) -> Result<(), PredictorError> {
        let hit = categories.iter().position(|c| c == value);

        if hit.is_none() && self.handle_unknown == UnknownPolicy::Error {
            return Err(PredictorError::UnknownCategory {
                column,
                value: value.to_string(),
            });
        }

        for i in 0..categories.len() {
            out.push(if hit == Some(i) { 1.0 } else { 0.0 });
        }
        Ok(())
    }
}

/// Fitted linear regression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    /// One weight per encoded feature, in feature order
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl RegressionModel {
    /// Predict a raw (unclamped) price for one feature vector.
    pub fn predict(&self, features: &[f64]) -> Result<f64, PredictorError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictorError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum();
        Ok(dot + self.intercept)
    }
}
