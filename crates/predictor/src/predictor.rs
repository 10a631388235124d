//! Predictor Implementation

use crate::artifacts::{Preprocessor, RegressionModel};
use crate::record::{FeatureRecord, VehicleQuery};
use crate::PredictorError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the fitted artifacts, relative to the working
/// directory, matching the training pipeline's output layout.
pub const DEFAULT_WEIGHTS_DIR: &str = "ml_pipeline/weights";

/// Price predictor backed by pre-trained artifacts.
///
/// Prediction is a pure operation on `&self`: there is no per-request
/// feature slot, so a single instance is safe to share across concurrent
/// requests without locking.
#[derive(Debug)]
pub struct Predictor {
    preprocessor: Preprocessor,
    model: RegressionModel,
}

impl Predictor {
    /// Load both artifacts from a weights directory.
    ///
    /// A missing or malformed artifact is a startup-fatal error; callers
    /// propagate it out of `main` rather than retrying.
    pub fn load(dir: &Path) -> Result<Self, PredictorError> {
        let preprocessor: Preprocessor = load_artifact(&dir.join("preprocessor.json"))?;
        let model: RegressionModel = load_artifact(&dir.join("model.json"))?;

        // Catch a mismatched artifact pair at startup, not per request.
        if model.coefficients.len() != preprocessor.output_dimension() {
            return Err(PredictorError::DimensionMismatch {
                expected: preprocessor.output_dimension(),
                actual: model.coefficients.len(),
            });
        }

        info!(
            "Loaded artifacts from {}: {} makes, {} models, {} features",
            dir.display(),
            preprocessor.make_categories.len(),
            preprocessor.model_categories.len(),
            preprocessor.output_dimension(),
        );

        Ok(Self {
            preprocessor,
            model,
        })
    }

    /// Build a predictor from already-deserialized artifacts.
    pub fn from_parts(preprocessor: Preprocessor, model: RegressionModel) -> Self {
        Self {
            preprocessor,
            model,
        }
    }

    /// Predict a price for one query.
    ///
    /// The raw regression output is floored to whole currency units and
    /// absolutized: the model can emit small negative values for very old,
    /// cheap vehicles, and those are clamped rather than surfaced.
    pub fn predict(&self, query: &VehicleQuery) -> Result<u64, PredictorError> {
        let record = FeatureRecord::from_query(query)?;
        let features = self.preprocessor.transform(&record)?;
        let raw = self.model.predict(&features)?;

        let price = (raw.floor() as i64).unsigned_abs();
        debug!(
            "Predicted price {} for {} {} (age {})",
            price, record.make, record.model, record.age
        );
        Ok(price)
    }

    /// Width of the encoded feature vector
    pub fn feature_dimension(&self) -> usize {
        self.preprocessor.output_dimension()
    }
}

fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, PredictorError> {
    let raw = fs::read_to_string(path).map_err(|e| PredictorError::ArtifactLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| PredictorError::ArtifactLoad {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::UnknownPolicy;
    use proptest::prelude::*;

    fn fixture() -> Predictor {
        let preprocessor = Preprocessor {
            handle_unknown: UnknownPolicy::Error,
            make_categories: vec!["Ford".into(), "Honda".into(), "Toyota".into()],
            model_categories: vec!["Camry".into(), "Civic".into(), "F-150".into()],
        };
        let model = RegressionModel {
            // make block, model block, age
            coefficients: vec![1500.0, -300.0, 200.0, 800.0, -1500.0, 9500.0, -1550.0],
            intercept: 24800.0,
        };
        Predictor::from_parts(preprocessor, model)
    }

    fn query(year: &str, make: &str, model: &str) -> VehicleQuery {
        VehicleQuery {
            year: year.to_string(),
            make: make.to_string(),
            model: model.to_string(),
        }
    }

    #[test]
    fn test_toyota_camry_scenario() {
        let predictor = fixture();
        // age 5: 200 + 800 + 5 * -1550 + 24800 = 18050
        let price = predictor.predict(&query("2018", "Toyota", "Camry")).unwrap();
        assert_eq!(price, 18050);
    }

    #[test]
    fn test_prediction_idempotent() {
        let predictor = fixture();
        let q = query("2015", "Honda", "Civic");
        let first = predictor.predict(&q).unwrap();
        let second = predictor.predict(&q).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_output_clamped() {
        let predictor = fixture();
        // Very old Civic drives the regression negative:
        // -300 - 1500 + 30 * -1550 + 24800 = -23500 -> clamped to 23500.
        let price = predictor.predict(&query("1993", "Honda", "Civic")).unwrap();
        assert_eq!(price, 23500);
    }

    #[test]
    fn test_fractional_output_floored() {
        let preprocessor = Preprocessor {
            handle_unknown: UnknownPolicy::Error,
            make_categories: vec!["Toyota".into()],
            model_categories: vec!["Camry".into()],
        };
        let model = RegressionModel {
            coefficients: vec![0.0, 0.0, -10.5],
            intercept: 100.0,
        };
        let predictor = Predictor::from_parts(preprocessor, model);
        // 100 - 3 * 10.5 = 68.5 -> floor -> 68
        let price = predictor.predict(&query("2020", "Toyota", "Camry")).unwrap();
        assert_eq!(price, 68);
    }

    #[test]
    fn test_unknown_make_propagates() {
        let predictor = fixture();
        let err = predictor
            .predict(&query("2018", "DeLorean", "Camry"))
            .unwrap_err();
        assert!(matches!(err, PredictorError::UnknownCategory { .. }));
    }

    #[test]
    fn test_invalid_year_propagates() {
        let predictor = fixture();
        let err = predictor.predict(&query("new-ish", "Toyota", "Camry")).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidYear(_)));
    }

    #[test]
    fn test_load_missing_artifacts_fails() {
        let err = Predictor::load(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(err, PredictorError::ArtifactLoad { .. }));
    }

    #[test]
    fn test_mismatched_artifact_pair_rejected() {
        let preprocessor = Preprocessor {
            handle_unknown: UnknownPolicy::Error,
            make_categories: vec!["Toyota".into()],
            model_categories: vec!["Camry".into()],
        };
        let model = RegressionModel {
            coefficients: vec![1.0],
            intercept: 0.0,
        };
        let predictor = Predictor::from_parts(preprocessor, model);
        let err = predictor.predict(&query("2020", "Toyota", "Camry")).unwrap_err();
        assert!(matches!(err, PredictorError::DimensionMismatch { .. }));
    }

    proptest! {
        // Whatever the fitted weights, prediction succeeds for in-vocabulary
        // input and gives the same answer every time.
        #[test]
        fn prediction_total_and_deterministic(
            intercept in -1.0e6f64..1.0e6,
            age_coeff in -1.0e5f64..1.0e5,
            year in 1950i64..=2023,
        ) {
            let preprocessor = Preprocessor {
                handle_unknown: UnknownPolicy::Error,
                make_categories: vec!["Toyota".into()],
                model_categories: vec!["Camry".into()],
            };
            let model = RegressionModel {
                coefficients: vec![0.0, 0.0, age_coeff],
                intercept,
            };
            let predictor = Predictor::from_parts(preprocessor, model);
            let q = query(&year.to_string(), "Toyota", "Camry");
            let first = predictor.predict(&q).unwrap();
            let second = predictor.predict(&q).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
