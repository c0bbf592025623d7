//! Hospital inventory environment descriptor.
//!
//! Describes the observation layout and action space the policy was trained
//! against. It carries no simulation logic.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::features::FeatureVector;

/// Observation/action shape of the hospital inventory environment.
///
/// Defaults: stock with a 7-day shelf life (one on-hand bucket per remaining
/// day), a 6-day replenishment pipeline, and order quantities `0..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalInventoryEnv {
    /// Number of on-hand inventory buckets (remaining shelf life).
    pub shelf_life: usize,
    /// Number of in-transit buckets (days until arrival).
    pub lead_time: usize,
    /// Largest order quantity; actions are `0..=max_order`.
    pub max_order: u32,
}

impl Default for HospitalInventoryEnv {
    fn default() -> Self {
        Self {
            shelf_life: 7,
            lead_time: 6,
            max_order: 20,
        }
    }
}

/// Borrowed view of a feature vector split back into its three fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationParts<'a> {
    pub inventory: &'a [f32],
    pub pipeline: &'a [f32],
    pub forecast: f32,
}

impl HospitalInventoryEnv {
    pub fn new(shelf_life: usize, lead_time: usize, max_order: u32) -> Self {
        Self {
            shelf_life,
            lead_time,
            max_order,
        }
    }

    /// Width of the flat feature vector: inventory + pipeline + forecast.
    pub fn observation_dim(&self) -> usize {
        self.shelf_life + self.lead_time + 1
    }

    pub fn n_actions(&self) -> usize {
        self.max_order as usize + 1
    }

    /// Split a feature vector laid out for this environment.
    pub fn split<'a>(&self, features: &'a FeatureVector) -> DomainResult<ObservationParts<'a>> {
        features.ensure_dim(self.observation_dim())?;

        let values = features.as_slice();
        let (inventory, rest) = values.split_at(self.shelf_life);
        let (pipeline, forecast) = rest.split_at(self.lead_time);
        let forecast = *forecast
            .first()
            .ok_or_else(|| DomainError::invariant("feature vector has no forecast slot"))?;

        Ok(ObservationParts {
            inventory,
            pipeline,
            forecast,
        })
    }
}
