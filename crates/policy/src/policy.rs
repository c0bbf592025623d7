use medstock_core::{Action, FeatureVector};

use crate::error::PolicyError;

/// A loaded, read-only inventory policy.
///
/// Implementations are shared across request handlers behind an `Arc`, so
/// `predict` takes `&self` and must be safe to call concurrently.
pub trait Policy: Send + Sync + 'static {
    /// Human-readable policy name (artifact name for trained models).
    fn name(&self) -> &str;

    /// Training algorithm or policy family (e.g. `"dqn"`).
    fn algorithm(&self) -> &str;

    /// Feature width the policy accepts, when known.
    ///
    /// Callers use this to reject malformed inputs before inference. `None`
    /// means the policy checks (or ignores) widths itself.
    fn input_dim(&self) -> Option<usize> {
        None
    }

    /// Size of the discrete action space, when known.
    fn n_actions(&self) -> Option<usize> {
        None
    }

    /// Deterministic inference: the single best action for `features`.
    ///
    /// Same input, same output. Never samples.
    fn predict(&self, features: &FeatureVector) -> Result<Action, PolicyError>;
}
