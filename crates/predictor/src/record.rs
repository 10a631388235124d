//! Vehicle Query and Feature Record

use crate::PredictorError;
use serde::{Deserialize, Serialize};

/// Year the regression model was trained against. Vehicle age is measured
/// from this snapshot, never from the current date; retraining the model is
/// the only thing that moves it.
pub const REFERENCE_YEAR: i64 = 2023;

/// Raw form submission, one per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleQuery {
    /// Model year, as submitted (integer-like string)
    pub year: String,
    /// Manufacturer name
    pub make: String,
    /// Model name
    pub model: String,
}

/// One-row tabular record submitted to the preprocessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub make: String,
    pub model: String,
    /// Derived feature: [`REFERENCE_YEAR`] minus the vehicle year
    pub age: i64,
}

impl FeatureRecord {
    /// Derive the feature record from a raw query.
    ///
    /// Fails if `year` does not parse as an integer; `make` and `model`
    /// pass through untouched, vocabulary checks happen in the
    /// preprocessor.
    pub fn from_query(query: &VehicleQuery) -> Result<Self, PredictorError> {
        let year: i64 = query
            .year
            .trim()
            .parse()
            .map_err(|_| PredictorError::InvalidYear(query.year.clone()))?;

        // Years at the edges of the i64 range parse but cannot yield an age.
        let age = REFERENCE_YEAR
            .checked_sub(year)
            .ok_or_else(|| PredictorError::InvalidYear(query.year.clone()))?;

        Ok(Self {
            make: query.make.clone(),
            model: query.model.clone(),
            age,
        })
    }
}
