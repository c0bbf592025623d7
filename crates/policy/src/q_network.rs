//! Dense Q-network and the DQN policy built on it.
//!
//! Model:
//! - A stack of fully connected layers, ReLU between them, linear output.
//! - The output width is the number of discrete actions; each value is the
//!   estimated return of taking that action.
//! - Deterministic inference picks the action with the highest Q-value.

use medstock_core::{Action, FeatureVector};

use crate::error::{ArtifactError, PolicyError};
use crate::policy::Policy;

/// Fully connected layer: `y = W x + b`.
///
/// `weights` is row-major with shape `out_dim × in_dim`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    in_dim: usize,
    out_dim: usize,
    weights: Vec<f32>,
    bias: Vec<f32>,
}

impl DenseLayer {
    /// Build a layer from one weight row per output unit.
    pub fn from_rows(rows: Vec<Vec<f32>>, bias: Vec<f32>) -> Result<Self, ArtifactError> {
        let out_dim = rows.len();
        if out_dim == 0 {
            return Err(ArtifactError::invalid("layer has no output units"));
        }
        if bias.len() != out_dim {
            return Err(ArtifactError::invalid(format!(
                "bias has {} entries but layer has {} output units",
                bias.len(),
                out_dim
            )));
        }

        let in_dim = rows[0].len();
        if in_dim == 0 {
            return Err(ArtifactError::invalid("layer has no inputs"));
        }

        let mut weights = Vec::with_capacity(out_dim * in_dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != in_dim {
                return Err(ArtifactError::invalid(format!(
                    "weight row {i} has {} columns, expected {in_dim}",
                    row.len()
                )));
            }
            weights.extend(row);
        }

        if weights.iter().chain(bias.iter()).any(|v| !v.is_finite()) {
            return Err(ArtifactError::invalid("layer contains non-finite parameters"));
        }

        Ok(Self {
            in_dim,
            out_dim,
            weights,
            bias,
        })
    }

    pub fn in_dim(&self) -> usize {
        self.in_dim
    }

    pub fn out_dim(&self) -> usize {
        self.out_dim
    }

    fn forward(&self, input: &[f32], out: &mut Vec<f32>) {
        out.clear();
        out.extend(self.weights.chunks_exact(self.in_dim).zip(&self.bias).map(|(row, b)| {
            row.iter().zip(input).fold(*b, |acc, (w, x)| acc + w * x)
        }));
    }
}

/// Feed-forward Q-value estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct QNetwork {
    layers: Vec<DenseLayer>,
}

impl QNetwork {
    /// Chain `layers`; each layer's input width must equal the previous output width.
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self, ArtifactError> {
        if layers.is_empty() {
            return Err(ArtifactError::invalid("network has no layers"));
        }

        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].out_dim != pair[1].in_dim {
                return Err(ArtifactError::invalid(format!(
                    "layer {} outputs {} units but layer {} expects {}",
                    i,
                    pair[0].out_dim,
                    i + 1,
                    pair[1].in_dim
                )));
            }
        }

        Ok(Self { layers })
    }

    pub fn input_dim(&self) -> usize {
        self.layers[0].in_dim
    }

    pub fn n_actions(&self) -> usize {
        self.layers[self.layers.len() - 1].out_dim
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Q-values for every action.
    pub fn forward(&self, input: &[f32]) -> Result<Vec<f32>, PolicyError> {
        if input.len() != self.input_dim() {
            return Err(PolicyError::DimensionMismatch {
                expected: self.input_dim(),
                actual: input.len(),
            });
        }

        let last = self.layers.len() - 1;
        let mut current = input.to_vec();
        let mut next = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            layer.forward(&current, &mut next);
            if i < last {
                for v in next.iter_mut() {
                    *v = v.max(0.0);
                }
            }
            std::mem::swap(&mut current, &mut next);
        }

        Ok(current)
    }

    /// Greedy action: index of the largest Q-value, lowest index on ties.
    pub fn greedy_action(&self, input: &[f32]) -> Result<Action, PolicyError> {
        let q = self.forward(input)?;
        argmax(&q).map(|i| Action::new(i as u32))
    }
}

fn argmax(values: &[f32]) -> Result<usize, PolicyError> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(PolicyError::InferenceFailed(format!(
                "non-finite Q-value {v} for action {i}"
            )));
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
        .ok_or_else(|| PolicyError::InferenceFailed("network produced no Q-values".to_string()))
}

/// Trained DQN policy: a named Q-network queried greedily.
#[derive(Debug, Clone)]
pub struct DqnPolicy {
    name: String,
    network: QNetwork,
}

impl DqnPolicy {
    pub fn new(name: impl Into<String>, network: QNetwork) -> Self {
        Self {
            name: name.into(),
            network,
        }
    }

    pub fn network(&self) -> &QNetwork {
        &self.network
    }
}

impl Policy for DqnPolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn algorithm(&self) -> &str {
        "dqn"
    }

    fn input_dim(&self) -> Option<usize> {
        Some(self.network.input_dim())
    }

    fn n_actions(&self) -> Option<usize> {
        Some(self.network.n_actions())
    }

    fn predict(&self, features: &FeatureVector) -> Result<Action, PolicyError> {
        self.network.greedy_action(features.as_slice())
    }
}
