use medstock_core::{Action, FeatureVector, HospitalInventoryEnv};

use crate::error::PolicyError;
use crate::policy::Policy;

/// Baseline replenishment rule: order whatever the forecast exceeds current
/// position (on hand + in transit), rounded up, clamped to the action space.
///
/// Used when no trained artifact is available.
#[derive(Debug, Clone)]
pub struct OrderUpToPolicy {
    env: HospitalInventoryEnv,
}

impl OrderUpToPolicy {
    pub fn new(env: HospitalInventoryEnv) -> Self {
        Self { env }
    }
}

impl Policy for OrderUpToPolicy {
    fn name(&self) -> &str {
        "order-up-to"
    }

    fn algorithm(&self) -> &str {
        "heuristic"
    }

    fn input_dim(&self) -> Option<usize> {
        Some(self.env.observation_dim())
    }

    fn n_actions(&self) -> Option<usize> {
        Some(self.env.n_actions())
    }

    fn predict(&self, features: &FeatureVector) -> Result<Action, PolicyError> {
        let parts = self.env.split(features)?;

        let position: f32 = parts.inventory.iter().chain(parts.pipeline).sum();
        let shortfall = (parts.forecast - position).ceil();
        if !shortfall.is_finite() {
            return Err(PolicyError::InferenceFailed(
                "non-finite inventory position".to_string(),
            ));
        }

        let qty = shortfall.clamp(0.0, self.env.max_order as f32) as u32;
        Ok(Action::new(qty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medstock_core::Observation;

    fn policy() -> OrderUpToPolicy {
        OrderUpToPolicy::new(HospitalInventoryEnv::new(2, 2, 10))
    }

    fn predict(inv: [f64; 2], pipe: [f64; 2], forecast: f64) -> Result<Action, PolicyError> {
        let fv = Observation::new(inv.to_vec(), pipe.to_vec(), forecast).to_features();
        policy().predict(&fv)
    }

    #[test]
    fn orders_the_rounded_up_shortfall() {
        assert_eq!(predict([1.0, 1.0], [0.5, 0.0], 5.0).unwrap(), Action::new(3));
    }

    #[test]
    fn covered_demand_orders_nothing() {
        assert_eq!(predict([4.0, 4.0], [2.0, 0.0], 5.0).unwrap(), Action::new(0));
    }

    #[test]
    fn large_shortfall_is_capped_at_max_order() {
        assert_eq!(predict([0.0, 0.0], [0.0, 0.0], 500.0).unwrap(), Action::new(10));
    }

    #[test]
    fn wrong_width_is_a_dimension_mismatch() {
        let fv = FeatureVector::from_values(vec![1.0, 2.0]);
        assert!(matches!(
            policy().predict(&fv),
            Err(PolicyError::DimensionMismatch { expected: 5, actual: 2 })
        ));
    }
}
