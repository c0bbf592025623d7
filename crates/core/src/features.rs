//! Feature vector assembly.
//!
//! The policy was trained on observations laid out as
//! `inventory ++ pipeline ++ [forecast]` with 32-bit float elements. Any other
//! order silently produces wrong actions, so this module is the only place the
//! layout is built.

use crate::error::{DomainError, DomainResult};
use crate::observation::Observation;

/// Flat model input built from an [`Observation`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Concatenate `inventory`, then `pipeline`, then `forecast`.
    pub fn from_observation(obs: &Observation) -> Self {
        let mut values = Vec::with_capacity(obs.feature_len());
        values.extend(obs.inventory.iter().map(|v| *v as f32));
        values.extend(obs.pipeline.iter().map(|v| *v as f32));
        values.push(obs.forecast as f32);
        Self(values)
    }

    pub fn from_values(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Fail with [`DomainError::DimensionMismatch`] unless the width is `expected`.
    pub fn ensure_dim(&self, expected: usize) -> DomainResult<()> {
        if self.0.len() != expected {
            return Err(DomainError::dimension_mismatch(expected, self.0.len()));
        }
        Ok(())
    }

    /// Fail with [`DomainError::Validation`] if any element is NaN or infinite.
    ///
    /// Finite `f64` inputs above `f32::MAX` narrow to infinity here.
    pub fn ensure_finite(&self) -> DomainResult<()> {
        match self.0.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(DomainError::validation(format!(
                "feature {i} is not representable as a finite 32-bit float"
            ))),
            None => Ok(()),
        }
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}
