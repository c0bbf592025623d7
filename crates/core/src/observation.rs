//! Observation submitted by callers.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Current state of a stock position as seen by the policy.
///
/// - `inventory`: on-hand quantities, one entry per remaining-shelf-life bucket
/// - `pipeline`: quantities in transit, one entry per days-until-arrival bucket
/// - `forecast`: expected demand for the next period
///
/// Lengths are not checked here. JSON integers deserialize into these fields
/// as floats; strings, booleans and nulls are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub inventory: Vec<f64>,
    pub pipeline: Vec<f64>,
    pub forecast: f64,
}

impl Observation {
    pub fn new(inventory: Vec<f64>, pipeline: Vec<f64>, forecast: f64) -> Self {
        Self {
            inventory,
            pipeline,
            forecast,
        }
    }

    /// Number of features this observation produces.
    pub fn feature_len(&self) -> usize {
        self.inventory.len() + self.pipeline.len() + 1
    }

    pub fn to_features(&self) -> FeatureVector {
        FeatureVector::from_observation(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_accepted_as_floats() {
        let obs: Observation = serde_json::from_str(
            r#"{"inventory": [1, 2], "pipeline": [0], "forecast": 4}"#,
        )
        .unwrap();

        assert_eq!(obs, Observation::new(vec![1.0, 2.0], vec![0.0], 4.0));
    }

    #[test]
    fn missing_forecast_is_rejected() {
        let res = serde_json::from_str::<Observation>(r#"{"inventory": [], "pipeline": []}"#);
        let err = res.unwrap_err().to_string();
        assert!(err.contains("forecast"), "unexpected error: {err}");
    }

    #[test]
    fn non_numeric_pipeline_entry_is_rejected() {
        let res = serde_json::from_str::<Observation>(
            r#"{"inventory": [1.0], "pipeline": ["soon"], "forecast": 1.0}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn scalar_in_place_of_sequence_is_rejected() {
        let res = serde_json::from_str::<Observation>(
            r#"{"inventory": 3, "pipeline": [], "forecast": 1.0}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn feature_len_counts_forecast() {
        let obs = Observation::new(vec![0.0; 7], vec![0.0; 6], 0.0);
        assert_eq!(obs.feature_len(), 14);
    }
}
