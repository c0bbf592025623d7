//! Service wiring: the loaded policy plus its metadata.
//!
//! Built once at startup and shared by every handler via `Extension`.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use medstock_core::{Action, DomainError, FeatureVector, HospitalInventoryEnv};
use medstock_policy::{ArtifactError, OrderUpToPolicy, Policy, PolicyError};

use crate::config::{PolicyKind, ServiceConfig};

/// Failure of a single prediction request.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The request is well-formed JSON but not a valid input for the loaded policy.
    #[error(transparent)]
    Input(#[from] DomainError),

    /// The policy itself returned an error.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// The inference task panicked or was cancelled.
    #[error("inference task aborted: {0}")]
    Aborted(String),
}

/// Metadata about the policy being served.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub name: String,
    pub algorithm: String,
    pub artifact: Option<PathBuf>,
    pub observation_dim: Option<usize>,
    pub n_actions: Option<usize>,
    pub loaded_at: DateTime<Utc>,
}

pub struct AppServices {
    policy: Arc<dyn Policy>,
    model: ModelInfo,
}

impl AppServices {
    /// Wrap an already-loaded policy. `artifact` is the file it came from, if any.
    pub fn new(policy: Arc<dyn Policy>, artifact: Option<PathBuf>) -> Self {
        let model = ModelInfo {
            name: policy.name().to_string(),
            algorithm: policy.algorithm().to_string(),
            artifact,
            observation_dim: policy.input_dim(),
            n_actions: policy.n_actions(),
            loaded_at: Utc::now(),
        };
        Self { policy, model }
    }

    pub fn model(&self) -> &ModelInfo {
        &self.model
    }

    /// Run deterministic inference for one feature vector.
    ///
    /// Non-finite features are rejected, and width is checked up front when the
    /// policy declares it. Inference runs on the blocking pool so a panicking
    /// policy only fails this request.
    pub async fn predict(&self, features: FeatureVector) -> Result<Action, PredictError> {
        features.ensure_finite()?;
        if let Some(expected) = self.policy.input_dim() {
            features.ensure_dim(expected)?;
        }

        let width = features.len();
        let policy = Arc::clone(&self.policy);
        let action = tokio::task::spawn_blocking(move || policy.predict(&features))
            .await
            .map_err(|e| PredictError::Aborted(e.to_string()))??;

        tracing::debug!(features = width, action = action.id(), "prediction served");
        Ok(action)
    }
}

/// Startup wiring: construct the policy selected by `config`.
///
/// Blocking (reads the artifact from disk). Any error here is fatal to startup.
pub fn build_services(
    config: &ServiceConfig,
    env: HospitalInventoryEnv,
) -> Result<AppServices, ArtifactError> {
    match config.policy_kind {
        PolicyKind::Dqn => {
            let path = medstock_policy::resolve_artifact_path(&config.artifact_path);
            let policy = medstock_policy::load_policy(&path)?;

            if policy.input_dim() != Some(env.observation_dim())
                || policy.n_actions() != Some(env.n_actions())
            {
                tracing::warn!(
                    artifact_observation_dim = ?policy.input_dim(),
                    artifact_n_actions = ?policy.n_actions(),
                    env_observation_dim = env.observation_dim(),
                    env_n_actions = env.n_actions(),
                    "policy artifact shape differs from the inventory environment; serving artifact shape"
                );
            }

            tracing::info!(
                path = %path.display(),
                name = policy.name(),
                observation_dim = ?policy.input_dim(),
                n_actions = ?policy.n_actions(),
                "policy artifact loaded"
            );

            Ok(AppServices::new(Arc::new(policy), Some(path)))
        }
        PolicyKind::OrderUpTo => {
            tracing::info!(
                observation_dim = env.observation_dim(),
                max_order = env.max_order,
                "serving order-up-to baseline policy"
            );
            Ok(AppServices::new(Arc::new(OrderUpToPolicy::new(env)), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: PolicyKind, artifact: &str) -> ServiceConfig {
        ServiceConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            artifact_path: PathBuf::from(artifact),
            policy_kind: kind,
        }
    }

    #[test]
    fn missing_artifact_fails_startup() {
        let cfg = config(PolicyKind::Dqn, "/nonexistent/medstock/dqn_inventory.json");
        let res = build_services(&cfg, HospitalInventoryEnv::default());
        assert!(matches!(res, Err(ArtifactError::Io { .. })));
    }

    #[test]
    fn baseline_needs_no_artifact() {
        let cfg = config(PolicyKind::OrderUpTo, "/nonexistent/medstock/dqn_inventory.json");
        let services = build_services(&cfg, HospitalInventoryEnv::default()).unwrap();

        assert_eq!(services.model().name, "order-up-to");
        assert_eq!(services.model().observation_dim, Some(14));
        assert!(services.model().artifact.is_none());
    }

    #[tokio::test]
    async fn declared_width_is_enforced_before_inference() {
        let services = AppServices::new(
            Arc::new(OrderUpToPolicy::new(HospitalInventoryEnv::default())),
            None,
        );
        let res = services.predict(FeatureVector::from_values(vec![1.0; 3])).await;
        assert!(matches!(
            res,
            Err(PredictError::Input(DomainError::DimensionMismatch { expected: 14, actual: 3 }))
        ));
    }

    #[tokio::test]
    async fn overflowing_features_are_rejected_before_inference() {
        let services = AppServices::new(
            Arc::new(OrderUpToPolicy::new(HospitalInventoryEnv::new(1, 1, 5))),
            None,
        );
        let res = services
            .predict(FeatureVector::from_values(vec![f32::INFINITY, 0.0, 1.0]))
            .await;
        assert!(matches!(res, Err(PredictError::Input(DomainError::Validation(_)))));
    }
}
