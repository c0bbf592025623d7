//! On-disk policy artifact.
//!
//! A trained DQN is exported as JSON:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "algorithm": "dqn",
//!   "name": "dqn_inventory",
//!   "observation_dim": 14,
//!   "n_actions": 21,
//!   "layers": [
//!     { "weights": [[...14 floats...], ...64 rows...], "bias": [...64 floats...] },
//!     { "weights": [[...64 floats...], ...21 rows...], "bias": [...21 floats...] }
//!   ]
//! }
//! ```
//!
//! Layers are applied in order with ReLU between them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::q_network::{DenseLayer, DqnPolicy, QNetwork};

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;
pub const ARTIFACT_EXTENSION: &str = "json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayerSpec {
    /// One row per output unit.
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyArtifact {
    pub format_version: u32,
    pub algorithm: String,
    pub name: String,
    pub observation_dim: usize,
    pub n_actions: usize,
    pub layers: Vec<DenseLayerSpec>,
}

impl PolicyArtifact {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Validate shapes and build the policy.
    pub fn into_policy(self) -> Result<DqnPolicy, ArtifactError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ArtifactError::invalid(format!(
                "unsupported format_version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            )));
        }
        if !self.algorithm.eq_ignore_ascii_case("dqn") {
            return Err(ArtifactError::invalid(format!(
                "unsupported algorithm {:?} (expected \"dqn\")",
                self.algorithm
            )));
        }

        let layers = self
            .layers
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                DenseLayer::from_rows(spec.weights, spec.bias)
                    .map_err(|e| ArtifactError::invalid(format!("layer {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let network = QNetwork::new(layers)?;

        if network.input_dim() != self.observation_dim {
            return Err(ArtifactError::invalid(format!(
                "observation_dim is {} but first layer expects {} inputs",
                self.observation_dim,
                network.input_dim()
            )));
        }
        if network.n_actions() != self.n_actions {
            return Err(ArtifactError::invalid(format!(
                "n_actions is {} but last layer produces {} outputs",
                self.n_actions,
                network.n_actions()
            )));
        }

        Ok(DqnPolicy::new(self.name, network))
    }
}

/// Resolve the artifact path the way the training tooling names artifacts:
/// a bare name without extension falls back to `<name>.json`.
pub fn resolve_artifact_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.exists() || path.extension().is_some() {
        return path.to_path_buf();
    }
    path.with_extension(ARTIFACT_EXTENSION)
}

/// Read and validate a DQN artifact. Blocking; call once at startup.
pub fn load_policy(path: impl AsRef<Path>) -> Result<DqnPolicy, ArtifactError> {
    let path = resolve_artifact_path(path);

    let raw = std::fs::read_to_string(&path).map_err(|source| ArtifactError::Io {
        path: path.clone(),
        source,
    })?;
    let artifact = PolicyArtifact::from_json(&raw).map_err(|source| ArtifactError::Parse {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        layers = artifact.layers.len(),
        "parsed policy artifact"
    );

    artifact.into_policy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use medstock_core::{Action, FeatureVector};

    fn identity_artifact() -> PolicyArtifact {
        PolicyArtifact {
            format_version: 1,
            algorithm: "dqn".to_string(),
            name: "identity".to_string(),
            observation_dim: 3,
            n_actions: 3,
            layers: vec![DenseLayerSpec {
                weights: vec![
                    vec![1.0, 0.0, 0.0],
                    vec![0.0, 1.0, 0.0],
                    vec![0.0, 0.0, 1.0],
                ],
                bias: vec![0.0, 0.0, 0.0],
            }],
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("medstock-{}-{}", std::process::id(), name))
    }

    #[test]
    fn builds_policy_from_valid_artifact() {
        let policy = identity_artifact().into_policy().unwrap();
        assert_eq!(policy.name(), "identity");
        assert_eq!(policy.input_dim(), Some(3));

        let action = policy
            .predict(&FeatureVector::from_values(vec![0.0, 0.0, 9.0]))
            .unwrap();
        assert_eq!(action, Action::new(2));
    }

    #[test]
    fn rejects_declared_dims_that_disagree_with_layers() {
        let mut a = identity_artifact();
        a.observation_dim = 14;
        assert!(matches!(a.into_policy(), Err(ArtifactError::Invalid(_))));

        let mut a = identity_artifact();
        a.n_actions = 21;
        assert!(matches!(a.into_policy(), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn rejects_unknown_algorithm_and_version() {
        let mut a = identity_artifact();
        a.algorithm = "ppo".to_string();
        assert!(matches!(a.into_policy(), Err(ArtifactError::Invalid(_))));

        let mut a = identity_artifact();
        a.format_version = 2;
        assert!(matches!(a.into_policy(), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_policy(temp_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Io { .. }));
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let path = temp_path("corrupt.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = load_policy(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ArtifactError::Parse { .. }));
    }

    #[test]
    fn bare_name_falls_back_to_json_extension() {
        let bare = temp_path("bare_policy");
        let with_ext = bare.with_extension("json");
        std::fs::write(&with_ext, serde_json::to_string(&identity_artifact()).unwrap()).unwrap();

        assert_eq!(resolve_artifact_path(&bare), with_ext);
        let policy = load_policy(&bare);
        let _ = std::fs::remove_file(&with_ext);
        assert_eq!(policy.unwrap().name(), "identity");
    }
}
